use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::state::RequestPhase;

struct HudStep {
    label: &'static str,
    duration_ms: i32,
}

/// Fixed pseudo-step sequence shown while a request is outstanding. The
/// timers are independent of the real network response and carry no
/// semantic weight.
const STEPS: [HudStep; 6] = [
    HudStep { label: "SCANNING FOR AMBIGUITY", duration_ms: 800 },
    HudStep { label: "ANALYZING CONTEXT DEPTH", duration_ms: 600 },
    HudStep { label: "INJECTING PROFESSIONAL PERSONA", duration_ms: 700 },
    HudStep { label: "CALIBRATING OUTPUT CONSTRAINTS", duration_ms: 500 },
    HudStep { label: "APPLYING ANTI-HALLUCINATION GUARDS", duration_ms: 600 },
    HudStep { label: "OPTIMIZING INSTRUCTION CLARITY", duration_ms: 500 },
];

/// Decorative processing panel. Steps mark themselves complete on their own
/// timers; the whole sequence resets whenever `active` flips, and a bumped
/// run id invalidates any timer still pending from the previous run.
#[component]
pub fn ProcessHud(
    #[prop(into)] active: Signal<bool>,
    #[prop(into)] phase: Signal<RequestPhase>,
) -> impl IntoView {
    let (completed, set_completed) = signal(0usize);
    let (current, set_current) = signal(0usize);
    let run_id = StoredValue::new(0u32);

    Effect::new(move |_| {
        let is_active = active.get();
        run_id.update_value(|id| *id += 1);
        set_completed.set(0);
        set_current.set(0);
        if is_active {
            schedule_step(0, run_id.get_value(), run_id, set_completed, set_current);
        }
    });

    let title = move || match phase.get() {
        RequestPhase::Refining => "Refinement Protocol",
        _ => "System Diagnostics",
    };

    view! {
        <Show when=move || active.get()>
            <div class="glass-card process-hud fade-in">
                <style>{include_str!("process_hud.css")}</style>
                <div class="process-hud-header">
                    <span class="process-hud-dot"></span>
                    <span class="process-hud-title">{title}</span>
                </div>
                <div class="process-hud-steps">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            let step_class = move || {
                                if completed.get() > index {
                                    "process-step process-step-complete"
                                } else if current.get() == index + 1 {
                                    "process-step process-step-current"
                                } else {
                                    "process-step"
                                }
                            };
                            view! {
                                <div class=step_class>
                                    {move || {
                                        if completed.get() > index {
                                            view! {
                                                <span class="process-step-icon">"\u{2713}"</span>
                                            }
                                                .into_any()
                                        } else if current.get() == index + 1 {
                                            view! {
                                                <span class="process-step-icon process-step-spinner"></span>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <span class="process-step-icon">"\u{25CB}"</span>
                                            }
                                                .into_any()
                                        }
                                    }}
                                    <span class="process-step-label">{step.label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Show>
    }
}

fn schedule_step(
    index: usize,
    run: u32,
    run_id: StoredValue<u32>,
    set_completed: WriteSignal<usize>,
    set_current: WriteSignal<usize>,
) {
    if index >= STEPS.len() {
        return;
    }
    set_current.set(index + 1);

    let callback = wasm_bindgen::closure::Closure::once(move || {
        if run_id.get_value() != run {
            return;
        }
        set_completed.set(index + 1);
        schedule_step(index + 1, run, run_id, set_completed, set_current);
    });

    if let Some(window) = web_sys::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            STEPS[index].duration_ms,
        );
    }
    callback.forget();
}
