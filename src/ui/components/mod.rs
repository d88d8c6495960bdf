pub mod badge;
pub mod dialogs;
pub mod panel;
pub mod rfi_form;
pub mod status_bar;
pub mod task_card;
pub mod toast_stack;

pub use dialogs::{ContentTab, ReviewModalComponent};
pub use panel::PanelComponent;
pub use rfi_form::RfiFormComponent;
pub use status_bar::StatusBar;
pub use task_card::TaskCardComponent;
pub use toast_stack::ToastStack;
