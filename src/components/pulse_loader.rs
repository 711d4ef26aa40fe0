use leptos::prelude::*;

/// Small spinner shown inside the submit button while a request is outstanding.
#[component]
pub fn PulseLoader() -> impl IntoView {
    view! {
        <div class="pulse-loader">
            <div class="pulse-loader-ring"></div>
        </div>
    }
}
