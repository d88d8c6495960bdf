//! Assistant domain layer.
//!
//! Everything the "AI" side of the prototype knows about lives here: the
//! suggestion cards seeded into the panel, the review detail records backing
//! the modal, and the simulated backend that stands in for real inference.

pub mod mock;
pub mod review;
pub mod service;
pub mod suggestion;

pub use review::{ReviewDetail, RfiPrefill};
pub use service::{ActionOutcome, AssistantBackend, AssistantError, AssistantService, SimulatedBackend};
pub use suggestion::{Priority, Suggestion, SuggestionKind};
