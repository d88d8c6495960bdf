#[path = "ui/app_component.rs"]
mod app_component;

#[path = "ui/components/badge.rs"]
mod badge;

#[path = "ui/components/panel.rs"]
mod panel;

#[path = "ui/components/review_modal.rs"]
mod review_modal;

#[path = "ui/components/rfi_form.rs"]
mod rfi_form;

#[path = "ui/components/task_card.rs"]
mod task_card;
