//! Request lifecycle state for one supercharge cycle.
//!
//! All observable UI state lives in [`SuperchargeState`] and is mutated only
//! through the named transition methods below. The view layer holds the
//! struct in a single `RwSignal` and renders from read-only selectors.

/// Stage of the current submission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    /// No submission in progress and no result shown
    #[default]
    Idle,
    /// Request sent, waiting for the backend
    Evaluating,
    /// Evaluation landed, refined text held back for the staged reveal
    Refining,
    /// Both texts visible
    Complete,
    /// Submission failed, message in `error`
    Error,
}

/// Ticket minted by [`SuperchargeState::begin`]. The generation must still
/// match when a response lands, otherwise the response is stale and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub generation: u32,
    pub prompt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuperchargeState {
    pub draft: String,
    pub evaluation: String,
    pub refined: String,
    pub phase: RequestPhase,
    pub error: Option<String>,
    pub copied: bool,
    generation: u32,
}

impl SuperchargeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// A request is outstanding; the submit affordance stays disabled.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, RequestPhase::Evaluating | RequestPhase::Refining)
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.draft.trim().is_empty()
    }

    /// Start a submission cycle. Returns `None` (and changes nothing) for a
    /// blank draft or while a request is already outstanding; otherwise
    /// clears the previous outcome and hands back the ticket to submit with.
    pub fn begin(&mut self) -> Option<Submission> {
        if !self.can_submit() {
            return None;
        }
        self.evaluation.clear();
        self.refined.clear();
        self.error = None;
        self.copied = false;
        self.phase = RequestPhase::Evaluating;
        self.generation += 1;
        Some(Submission {
            generation: self.generation,
            prompt: self.draft.clone(),
        })
    }

    /// The backend answered: show the evaluation, hold the refined text back.
    pub fn evaluation_received(&mut self, generation: u32, evaluation: String) {
        if generation != self.generation || self.phase != RequestPhase::Evaluating {
            return;
        }
        self.evaluation = evaluation;
        self.phase = RequestPhase::Refining;
    }

    /// Staged reveal elapsed: show the refined text.
    pub fn refined_ready(&mut self, generation: u32, refined: String) {
        if generation != self.generation || self.phase != RequestPhase::Refining {
            return;
        }
        self.refined = refined;
        self.phase = RequestPhase::Complete;
    }

    /// Terminal failure for this cycle.
    pub fn fail(&mut self, generation: u32, message: String) {
        if generation != self.generation || !self.is_loading() {
            return;
        }
        self.error = Some(message);
        self.phase = RequestPhase::Error;
    }

    /// Back to the initial state. Bumps the generation so an in-flight
    /// response can no longer land.
    pub fn reset(&mut self) {
        *self = Self {
            generation: self.generation + 1,
            ..Self::default()
        };
    }

    pub fn copy_acknowledged(&mut self) {
        if !self.refined.is_empty() {
            self.copied = true;
        }
    }

    pub fn clear_copy_ack(&mut self) {
        self.copied = false;
    }
}
