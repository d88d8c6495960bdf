use uuid::Uuid;

use crate::assistant::ActionOutcome;

/// Which top-level screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Panel,
    RfiForm,
}

/// State transitions emitted by components and applied at the app level.
#[derive(Debug, Clone)]
pub enum Action {
    // Card operations
    RunPrimaryAction(Uuid),
    PrimaryActionFinished { task_id: Uuid, outcome: ActionOutcome },
    OpenReview(Uuid),
    DismissCard(Uuid),
    SendFeedback(Uuid),
    ClearFeedback(Uuid),

    // Screen navigation
    NavigateTo(Screen),
    SubmitRfi,

    // Dialog control
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

/// Modal overlays rendered on top of the active screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogType {
    /// Review modal for the suggestion with this id.
    Review(Uuid),
    Help,
    Logs,
}
