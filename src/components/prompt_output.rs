use leptos::prelude::*;

/// Refined prompt card with a copy control. The copy button flips to a
/// checked state while the transient copied acknowledgment is live.
#[component]
pub fn PromptOutput(
    #[prop(into)] content: Signal<String>,
    #[prop(into)] on_copy: Callback<()>,
    #[prop(into)] copied: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="glass-card glow-blue prompt-output fade-in">
            <style>{include_str!("prompt_output.css")}</style>
            <div class="prompt-output-header">
                <span class="prompt-output-title">"\u{2728} Supercharged Prompt"</span>
                <button class="copy-btn" on:click=move |_| on_copy.run(())>
                    {move || {
                        if copied.get() {
                            view! {
                                <span class="copy-btn-copied">"\u{2713} Copied!"</span>
                            }
                                .into_any()
                        } else {
                            view! { <span>"Copy"</span> }.into_any()
                        }
                    }}
                </button>
            </div>

            <div class="output-area">{move || content.get()}</div>

            <div class="prompt-output-footer">
                <span class="ready-dot"></span>
                <span>"Ready to use with ChatGPT, Claude, Gemini, or any AI"</span>
            </div>
        </div>
    }
}
