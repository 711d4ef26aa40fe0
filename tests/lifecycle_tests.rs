use promptelevate::api::SuperchargeResponse;
use promptelevate::error::ApiError;
use promptelevate::state::{RequestPhase, SuperchargeState};

/// Drive a full successful cycle the way the app does: begin, land the
/// evaluation, then reveal the refined text after the staged delay.
fn run_success_cycle(draft: &str, response: &SuperchargeResponse) -> SuperchargeState {
    let mut state = SuperchargeState::new();
    state.set_draft(draft.to_string());
    let ticket = state.begin().expect("draft should submit");

    state.evaluation_received(ticket.generation, response.evaluation_text());
    state.refined_ready(ticket.generation, response.refined_text());
    state
}

#[test]
fn test_resume_example_ends_complete() {
    let response: SuperchargeResponse = serde_json::from_str(
        r#"{"evaluation":"Report A","refined_prompt":"Polished resume prompt"}"#,
    )
    .unwrap();

    let state = run_success_cycle("Help me with my resume", &response);
    assert_eq!(state.phase, RequestPhase::Complete);
    assert_eq!(state.evaluation, "Report A");
    assert_eq!(state.refined, "Polished resume prompt");
    assert_eq!(state.error, None);
}

#[test]
fn test_legacy_result_field_cycle() {
    let response: SuperchargeResponse =
        serde_json::from_str(r#"{"evaluation":"Report B","result":"From the result field"}"#)
            .unwrap();

    let state = run_success_cycle("Write me a blog post about AI", &response);
    assert_eq!(state.phase, RequestPhase::Complete);
    assert_eq!(state.refined, "From the result field");
}

#[test]
fn test_rate_limited_cycle_shows_fixed_message() {
    let mut state = SuperchargeState::new();
    state.set_draft("draft".to_string());
    let ticket = state.begin().unwrap();

    state.fail(ticket.generation, ApiError::RateLimited.to_string());
    assert_eq!(state.phase, RequestPhase::Error);
    assert_eq!(
        state.error.as_deref(),
        Some("Rate limit exceeded. Please try again later (5 requests per 12 hours).")
    );
}

#[test]
fn test_generic_failure_cycle_shows_fixed_message() {
    let mut state = SuperchargeState::new();
    state.set_draft("draft".to_string());
    let ticket = state.begin().unwrap();

    state.fail(ticket.generation, ApiError::RequestFailed.to_string());
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to process prompt. Please try again.")
    );
}

#[test]
fn test_failed_resubmission_clears_previous_result() {
    let response: SuperchargeResponse = serde_json::from_str(
        r#"{"evaluation":"Report A","refined_prompt":"Polished resume prompt"}"#,
    )
    .unwrap();
    let mut state = run_success_cycle("Help me with my resume", &response);

    // Next submission starts clean even though it ends in an error.
    state.set_draft("second draft".to_string());
    let ticket = state.begin().unwrap();
    assert!(state.evaluation.is_empty());
    assert!(state.refined.is_empty());

    state.fail(ticket.generation, ApiError::RequestFailed.to_string());
    assert_eq!(state.phase, RequestPhase::Error);
    assert!(state.refined.is_empty());
}

#[test]
fn test_network_error_surfaces_its_own_message() {
    let mut state = SuperchargeState::new();
    state.set_draft("draft".to_string());
    let ticket = state.begin().unwrap();

    let error = ApiError::Network("NetworkError when attempting to fetch resource.".to_string());
    state.fail(ticket.generation, error.to_string());
    assert_eq!(
        state.error.as_deref(),
        Some("NetworkError when attempting to fetch resource.")
    );
}

#[test]
fn test_reset_mid_flight_discards_late_response() {
    let mut state = SuperchargeState::new();
    state.set_draft("draft".to_string());
    let ticket = state.begin().unwrap();

    // The user resets while the request is still outstanding.
    state.reset();
    let idle = state.clone();

    // The response lands afterwards and must be dropped.
    state.evaluation_received(ticket.generation, "late report".to_string());
    state.refined_ready(ticket.generation, "late refined".to_string());
    assert_eq!(state, idle);
}
