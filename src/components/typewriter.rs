use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Example phrases cycled through by the placeholder animation.
const PHRASES: [&str; 6] = [
    "Write me a blog post about AI",
    "Help me debug this React code",
    "Create a marketing email",
    "Explain quantum computing",
    "Build a landing page",
    "Summarize this research paper",
];

const TYPE_MS: i32 = 80;
const DELETE_MS: i32 = 30;
const HOLD_MS: i32 = 1500;

/// Placeholder text that types itself out character by character, holds the
/// full phrase, deletes it, and moves on to the next phrase. Runs for the
/// lifetime of the page; never touches the real draft state.
pub fn typewriter_placeholder() -> ReadSignal<String> {
    let (text, set_text) = signal(String::new());
    schedule_tick(set_text, 0, 0, false, TYPE_MS);
    text
}

fn schedule_tick(
    set_text: WriteSignal<String>,
    phrase: usize,
    len: usize,
    deleting: bool,
    delay: i32,
) {
    let callback = wasm_bindgen::closure::Closure::once(move || {
        let current = PHRASES[phrase];
        if !deleting {
            if len < current.len() {
                let len = len + 1;
                set_text.set(current[..len].to_string());
                let delay = if len == current.len() { HOLD_MS } else { TYPE_MS };
                schedule_tick(set_text, phrase, len, false, delay);
            } else {
                // Hold elapsed, start deleting.
                schedule_tick(set_text, phrase, len, true, DELETE_MS);
            }
        } else if len > 0 {
            let len = len - 1;
            set_text.set(current[..len].to_string());
            schedule_tick(set_text, phrase, len, true, DELETE_MS);
        } else {
            schedule_tick(set_text, (phrase + 1) % PHRASES.len(), 0, false, TYPE_MS);
        }
    });

    if let Some(window) = web_sys::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay,
        );
    }
    callback.forget();
}
