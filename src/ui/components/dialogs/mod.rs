pub mod common;
pub mod help_dialog;
pub mod logs_dialog;
pub mod review_modal;

pub use help_dialog::HelpDialog;
pub use logs_dialog::LogsDialog;
pub use review_modal::{ContentTab, ReviewModalComponent};
