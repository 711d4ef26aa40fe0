use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::api;
use crate::components::aura_background::AuraBackground;
use crate::components::process_hud::ProcessHud;
use crate::components::prompt_input::PromptInput;
use crate::components::prompt_output::PromptOutput;
use crate::components::pulse_loader::PulseLoader;
use crate::state::{RequestPhase, SuperchargeState};

/// Delay between showing the evaluation and revealing the refined prompt.
const REFINE_REVEAL_MS: i32 = 800;

/// How long the copied acknowledgment stays visible.
const COPY_ACK_MS: i32 = 2000;

#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(SuperchargeState::new());

    let draft = Memo::new(move |_| state.with(|s| s.draft.clone()));
    let evaluation = Memo::new(move |_| state.with(|s| s.evaluation.clone()));
    let refined = Memo::new(move |_| state.with(|s| s.refined.clone()));
    let phase = Memo::new(move |_| state.with(|s| s.phase));
    let error = Memo::new(move |_| state.with(|s| s.error.clone()));
    let copied = Memo::new(move |_| state.with(|s| s.copied));
    let is_loading = Memo::new(move |_| state.with(|s| s.is_loading()));
    let can_submit = Memo::new(move |_| state.with(|s| s.can_submit()));

    let do_supercharge = move || {
        let Some(ticket) = state.try_update(|s| s.begin()).flatten() else {
            return;
        };
        spawn_local(async move {
            match api::supercharge(&ticket.prompt).await {
                Ok(response) => {
                    state.update(|s| {
                        s.evaluation_received(ticket.generation, response.evaluation_text())
                    });
                    reveal_delay(REFINE_REVEAL_MS).await;
                    state.update(|s| s.refined_ready(ticket.generation, response.refined_text()));
                }
                Err(e) => {
                    state.update(|s| s.fail(ticket.generation, e.to_string()));
                }
            }
        });
    };

    let do_reset = move || {
        state.update(|s| s.reset());
    };

    // Last scheduled ack-clear timer; replaced on every copy so repeated
    // copies keep the acknowledgment visible for a full window.
    let copy_ack_timeout = StoredValue::new(None::<i32>);

    let do_copy = move || {
        let text = state.with(|s| s.refined.clone());
        if text.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::copy_to_clipboard(&text).await {
                Ok(()) => {
                    state.update(|s| s.copy_acknowledged());

                    if let Some(window) = web_sys::window() {
                        if let Some(id) = copy_ack_timeout.get_value() {
                            window.clear_timeout_with_handle(id);
                        }
                        let callback = wasm_bindgen::closure::Closure::once(move || {
                            state.update(|s| s.clear_copy_ack());
                        });
                        if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                            callback.as_ref().unchecked_ref(),
                            COPY_ACK_MS,
                        ) {
                            copy_ack_timeout.set_value(Some(id));
                        }
                        callback.forget();
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Clipboard write failed: {}", e).into(),
                    );
                }
            }
        });
    };

    let phase_indicator = move || match phase.get() {
        RequestPhase::Evaluating => Some("\u{1F50D} Evaluating across 35 criteria..."),
        RequestPhase::Refining => Some("\u{2728} Applying refinements..."),
        RequestPhase::Complete => Some("\u{1F3AF} Transformation complete!"),
        _ => None,
    };

    view! {
        <div class="app-shell">
            <AuraBackground />

            <header class="app-header">
                <div class="app-header-inner">
                    <div class="app-badge">"\u{26A1}"</div>
                    <div>
                        <h1 class="app-title">"PromptElevate"</h1>
                        <p class="app-tagline">"Transform prompts from mediocre to professional"</p>
                    </div>
                </div>
            </header>

            <main class="app-main">
                <div class="hero">
                    <h2 class="hero-title">
                        "Bridge the " <span class="gradient-text">"AI Quality Gap"</span>
                    </h2>
                    <p class="hero-pitch">
                        "Enter your \"Human-Lazy\" prompt below. Our Meta-Prompting engine will \
                         evaluate it across " <span class="hero-accent">"35 criteria"</span>
                        " and refine it into an elite, AI-optimized instruction."
                    </p>
                </div>

                <PromptInput
                    value=draft
                    on_change=move |text| state.update(|s| s.set_draft(text))
                    on_submit=move |_| do_supercharge()
                    is_loading=is_loading
                />

                <div class="action-row">
                    <button
                        class="btn-primary supercharge-btn"
                        on:click=move |_| do_supercharge()
                        disabled=move || is_loading.get() || !can_submit.get()
                    >
                        {move || {
                            if is_loading.get() {
                                let label = match phase.get() {
                                    RequestPhase::Refining => "REFINING...",
                                    _ => "ANALYZING...",
                                };
                                view! {
                                    <PulseLoader />
                                    <span class="supercharge-btn-busy">{label}</span>
                                }
                                    .into_any()
                            } else {
                                view! { <span>"\u{2728} Supercharge"</span> }.into_any()
                            }
                        }}
                    </button>
                </div>

                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="error-card fade-in">
                                    <span class="error-icon">"\u{26A0}"</span>
                                    <p class="error-text">{message}</p>
                                </div>
                            }
                        })
                }}

                <ProcessHud active=is_loading phase=phase />

                <Show when=move || { phase_indicator().is_some() && !is_loading.get() }>
                    <div class="phase-row fade-in">
                        <div class="phase-indicator">
                            {move || phase_indicator().unwrap_or_default()}
                        </div>
                    </div>
                </Show>

                <Show when=move || {
                    !is_loading.get()
                        && (!refined.get().is_empty() || !evaluation.get().is_empty())
                }>
                    <div class="results slide-up">
                        <Show when=move || !evaluation.get().is_empty()>
                            <details class="glass-card evaluation-report">
                                <summary class="evaluation-summary">
                                    <span class="evaluation-title">
                                        "\u{1F4CA} EVALUATION REPORT"
                                    </span>
                                    <span class="evaluation-hint">"(click to expand)"</span>
                                </summary>
                                <div class="evaluation-body">{move || evaluation.get()}</div>
                            </details>
                        </Show>

                        <Show when=move || !refined.get().is_empty()>
                            <PromptOutput
                                content=refined
                                on_copy=move |_| do_copy()
                                copied=copied
                            />
                        </Show>

                        <div class="reset-row">
                            <button class="reset-btn" on:click=move |_| do_reset()>
                                "\u{21BA} Start Over"
                            </button>
                        </div>
                    </div>
                </Show>
            </main>

            <footer class="app-footer">
                <p>"No sign-up required \u{2022} 5 requests per 12 hours per IP"</p>
            </footer>

            <Show when=move || copied.get()>
                <div class="toast">"\u{2713} Copied to clipboard!"</div>
            </Show>
        </div>
    }
}

/// Awaitable cosmetic pause between the evaluation landing and the refined
/// text reveal.
async fn reveal_delay(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = JsFuture::from(promise).await;
}
