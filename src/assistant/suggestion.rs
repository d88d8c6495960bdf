use uuid::Uuid;

/// Priority of a suggested action, shown as a badge on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

/// What the primary action of a card does once the simulated delay elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionKind {
    /// Generate and "send" the status report, then resolve the card.
    StatusReport,
    /// Open the pre-filled RFI form screen. The card stays in the queue.
    CreateRfi,
}

/// A unit of suggested AI-driven work, shown as one card in the panel.
///
/// Seeded once at startup from mock data and never recreated; resolving or
/// dismissing a card only flips `visible`.
#[derive(Debug, Clone)]
pub struct Suggestion {
    pub id: Uuid,
    pub kind: SuggestionKind,
    pub title: String,
    /// Project name, rendered as the card subtitle.
    pub project: String,
    pub summary: String,
    /// Extracted detail bullets, possibly empty.
    pub details: Vec<String>,
    pub priority: Priority,
    /// AI confidence in percent, 0–100.
    pub confidence: u8,
    /// Label of the primary action button.
    pub primary_action: String,
    pub visible: bool,
}

impl Suggestion {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kind: SuggestionKind,
        title: &str,
        project: &str,
        summary: &str,
        details: &[&str],
        priority: Priority,
        confidence: u8,
        primary_action: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.to_string(),
            project: project.to_string(),
            summary: summary.to_string(),
            details: details.iter().map(|d| (*d).to_string()).collect(),
            priority,
            confidence: confidence.min(100),
            primary_action: primary_action.to_string(),
            visible: true,
        }
    }
}
