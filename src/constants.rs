//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Panel header
pub const PANEL_TITLE: &str = "AI Assistant";
pub const PENDING_BADGE_SUFFIX: &str = "pending";

// Empty state shown once every suggestion card has been resolved
pub const EMPTY_STATE_TITLE: &str = "All tasks completed!";
pub const EMPTY_STATE_SUBTITLE: &str = "No pending AI assistant actions.";

// Toast notifications
pub const TOAST_REPORT_SENT_TITLE: &str = "✅ Report for Project A sent to ABC LLC and logged";
pub const TOAST_REPORT_SENT_BODY: &str = "Status report has been successfully generated and delivered.";
pub const TOAST_SUGGESTION_DISMISSED_TITLE: &str = "Suggestion dismissed";
pub const TOAST_SUGGESTION_DISMISSED_BODY: &str = "The card was removed from your queue.";
pub const TOAST_FEEDBACK_TITLE: &str = "Feedback recorded";
pub const TOAST_FEEDBACK_BODY: &str = "Thanks — this helps tune future suggestions.";
pub const TOAST_RFI_SUBMITTED_TITLE: &str = "RFI Created Successfully";
pub const TOAST_RFI_SUBMITTED_BODY: &str = "Your RFI has been submitted and is awaiting response.";

// Dialog titles
pub const DIALOG_TITLE_REVIEW: &str = " 👁 Review AI-Generated Task ";
pub const DIALOG_TITLE_HELP: &str = " Help — Press 'Esc' or '?' to close ";
pub const DIALOG_TITLE_LOGS: &str = " 🔍 Logs - Press 'Esc', 'G' or 'q' to close ";

// RFI form screen
pub const RFI_FORM_TITLE: &str = "Create New RFI";
pub const RFI_FORM_SUBTITLE: &str = "Request for Information - Pre-filled by AI Assistant";

// Simulation timings (milliseconds)
/// Artificial delay applied before a primary action "completes"
pub const DEFAULT_ACTION_DELAY_MS: u64 = 2000;
/// How long the thumbs-up acknowledgement flash stays on a card
pub const DEFAULT_FEEDBACK_FLASH_MS: u64 = 300;
/// How long a toast stays on screen
pub const DEFAULT_TOAST_DURATION_MS: u64 = 4000;

// Config validation bounds
pub const ACTION_DELAY_MAX_MS: u64 = 30_000;
pub const FEEDBACK_FLASH_MIN_MS: u64 = 50;
pub const FEEDBACK_FLASH_MAX_MS: u64 = 5_000;
pub const TOAST_DURATION_MIN_MS: u64 = 500;
pub const TOAST_DURATION_MAX_MS: u64 = 30_000;

// UI Layout Constants
/// Maximum width of the centered panel column
pub const PANEL_MAX_WIDTH: u16 = 72;
/// Height of one fully expanded suggestion card
pub const CARD_EXPANDED_HEIGHT: u16 = 9;
/// Height of one collapsed suggestion card
pub const CARD_COLLAPSED_HEIGHT: u16 = 3;

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
