/// Expanded record shown in the review modal for one suggestion.
///
/// Read-only source data; the modal copies `draft_content` into its own edit
/// buffer when it opens and throws the buffer away on close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDetail {
    pub email_subject: String,
    pub project: String,
    pub detected_intent: String,
    /// AI confidence in percent, 0–100.
    pub confidence: u8,
    pub proposed_action: String,
    pub draft_content: String,
    pub original_email: String,
    pub save_location: String,
}

/// Navigation payload carried from the panel to the RFI form screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RfiPrefill {
    pub project: String,
    pub contractor: String,
    pub subject: String,
    pub question: String,
}
