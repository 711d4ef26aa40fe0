use leptos::prelude::*;

use crate::components::typewriter::typewriter_placeholder;

const EXAMPLE_PROMPTS: [&str; 3] = [
    "Write me a blog post about AI",
    "Help me with my resume",
    "Create a marketing strategy",
];

/// Draft prompt editor: textarea with an animated placeholder, Ctrl+Enter
/// submit shortcut, and example chips shown while the draft is empty.
#[component]
pub fn PromptInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] is_loading: Signal<bool>,
) -> impl IntoView {
    let placeholder = typewriter_placeholder();

    view! {
        <div class="glass-card prompt-input">
            <style>{include_str!("prompt_input.css")}</style>
            <div class="prompt-input-header">
                <label class="prompt-input-label">
                    <span class="prompt-input-bulb">"\u{1F4A1}"</span>
                    "Your Raw Prompt"
                </label>
                <span class="prompt-input-hint">"Ctrl + Enter to submit"</span>
            </div>

            <textarea
                class="input-area"
                prop:value=move || value.get()
                placeholder=move || placeholder.get()
                disabled=move || is_loading.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" && ev.ctrl_key() && !is_loading.get() {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                }
            ></textarea>

            <Show when=move || value.get().is_empty()>
                <div class="example-prompts">
                    <span class="example-prompts-label">"Try:"</span>
                    {EXAMPLE_PROMPTS
                        .iter()
                        .map(|example| {
                            view! {
                                <button
                                    class="example-chip"
                                    on:click=move |_| on_change.run(example.to_string())
                                >
                                    {*example}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
