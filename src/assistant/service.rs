//! The simulated assistant backend.
//!
//! The prototype has no real inference and no failure modes, but the delay
//! lives behind a trait so a future backend can take real time, fail, or be
//! cancelled without reshaping any component contract.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::time::Duration;

use crate::constants::{TOAST_REPORT_SENT_BODY, TOAST_REPORT_SENT_TITLE};

use super::mock;
use super::review::RfiPrefill;
use super::suggestion::{Suggestion, SuggestionKind};

/// What completing a primary action produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The status report was "generated and sent"; resolve the card and toast.
    ReportSent { toast_title: String, toast_body: String },
    /// An RFI draft is ready; navigate to the pre-filled form screen.
    RfiDraftReady(RfiPrefill),
}

/// Errors a backend may surface.
///
/// The simulated backend never constructs one of these, but the seam keeps
/// the door open for a backend that can actually fail.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("Action was cancelled")]
    Cancelled,

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Seam between the UI and whatever executes primary actions.
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    async fn execute(&self, suggestion: &Suggestion) -> Result<ActionOutcome, AssistantError>;
}

/// Fixed-delay stand-in for real inference.
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl AssistantBackend for SimulatedBackend {
    async fn execute(&self, suggestion: &Suggestion) -> Result<ActionOutcome, AssistantError> {
        tokio::time::sleep(self.delay).await;

        let outcome = match suggestion.kind {
            SuggestionKind::StatusReport => ActionOutcome::ReportSent {
                toast_title: TOAST_REPORT_SENT_TITLE.to_string(),
                toast_body: TOAST_REPORT_SENT_BODY.to_string(),
            },
            SuggestionKind::CreateRfi => ActionOutcome::RfiDraftReady(mock::rfi_prefill()),
        };

        Ok(outcome)
    }
}

/// Cloneable handle the UI holds onto.
#[derive(Clone)]
pub struct AssistantService {
    backend: Arc<dyn AssistantBackend>,
}

impl AssistantService {
    pub fn new(backend: Arc<dyn AssistantBackend>) -> Self {
        Self { backend }
    }

    /// Service backed by the fixed-delay simulation.
    pub fn simulated(delay: Duration) -> Self {
        Self::new(Arc::new(SimulatedBackend::new(delay)))
    }

    pub async fn execute(&self, suggestion: &Suggestion) -> Result<ActionOutcome, AssistantError> {
        self.backend.execute(suggestion).await
    }
}
