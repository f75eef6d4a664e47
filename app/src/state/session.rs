//! Session state for the phrase capture and analysis flow.
//!
//! DESIGN
//! ======
//! One `RwSignal<SessionState>` is provided from the app root and drives
//! the whole page: the phase decides which view renders, and the phrase
//! and profile fields feed the analysis cards. All transitions live here
//! as plain methods so they stay testable without a reactive runtime.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use idiolect::{Analysis, IdiolectProfile, Phrase};

/// Which stage of the coaching flow is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Collecting phrases from the user.
    #[default]
    Input,
    /// Analysis in flight; the form is locked.
    Analyzing,
    /// Results are available.
    Results,
}

/// Shared state for the single-page coaching session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub phrases: Vec<Phrase>,
    pub profile: Option<IdiolectProfile>,
    /// Validation or analysis error surfaced next to the form.
    pub error: Option<String>,
}

impl SessionState {
    /// State rebuilt from a persisted session, landing on results.
    ///
    /// An empty phrase list falls back to the input phase; there is
    /// nothing to show for it.
    #[must_use]
    pub fn restored(phrases: Vec<Phrase>, profile: IdiolectProfile) -> Self {
        if phrases.is_empty() {
            return Self::default();
        }
        Self {
            phase: SessionPhase::Results,
            phrases,
            profile: Some(profile),
            error: None,
        }
    }

    /// Lock the form while analysis runs.
    pub fn begin_analysis(&mut self) {
        self.phase = SessionPhase::Analyzing;
        self.error = None;
    }

    /// Store a finished analysis and move to the results phase.
    pub fn complete_analysis(&mut self, analysis: Analysis) {
        self.phrases = analysis.phrases;
        self.profile = Some(analysis.profile);
        self.phase = SessionPhase::Results;
        self.error = None;
    }

    /// Surface an error and return to the input phase.
    pub fn fail_analysis(&mut self, message: String) {
        self.error = Some(message);
        self.phase = SessionPhase::Input;
    }

    /// Drop all captured data and start from a blank form.
    pub fn start_over(&mut self) {
        *self = Self::default();
    }

    /// True while the form should reject edits and submits.
    #[must_use]
    pub fn is_analyzing(&self) -> bool {
        self.phase == SessionPhase::Analyzing
    }
}
