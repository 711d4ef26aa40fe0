use leptos::prelude::*;

/// Fixed full-viewport backdrop: three drifting gradient orbs and a faint
/// grid overlay. Pointer-events pass through; purely decorative.
#[component]
pub fn AuraBackground() -> impl IntoView {
    view! {
        <div class="aura-background">
            <style>{include_str!("aura_background.css")}</style>
            <div class="aura-orb aura-orb-blue"></div>
            <div class="aura-orb aura-orb-purple"></div>
            <div class="aura-orb aura-orb-cyan"></div>
            <div class="aura-grid"></div>
        </div>
    }
}
