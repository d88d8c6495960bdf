use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};

use sitepilot::assistant::mock;
use sitepilot::notifications::ToastService;
use sitepilot::ui::components::RfiFormComponent;
use sitepilot::ui::core::{
    actions::{Action, Screen},
    Component,
};

fn loaded_form(toasts: ToastService) -> RfiFormComponent {
    let mut form = RfiFormComponent::new(toasts);
    form.load(mock::rfi_prefill());
    form
}

#[test]
fn test_load_prefills_every_field() {
    let form = loaded_form(ToastService::default());
    let prefill = form.prefill();

    assert_eq!(prefill.project, "Bridge Renovation");
    assert_eq!(prefill.contractor, "Contractor XYZ");
    assert_eq!(prefill.subject, "RFI: Rebar Placement Conflict (Pay Item #12-345)");
    assert_eq!(form.question(), prefill.question);
}

#[test]
fn test_question_is_editable() {
    let mut form = loaded_form(ToastService::default());
    let original_len = form.question().len();

    form.handle_key_events(KeyEvent::from(KeyCode::Char('?')));
    assert_eq!(form.question().len(), original_len + 1);

    form.handle_key_events(KeyEvent::from(KeyCode::Backspace));
    form.handle_key_events(KeyEvent::from(KeyCode::Backspace));
    assert_eq!(form.question().len(), original_len - 1);
}

#[test]
fn test_submit_raises_toast_and_action() {
    let toasts = ToastService::new(Duration::from_secs(60));
    let mut form = loaded_form(toasts.clone());

    let action = form.handle_key_events(KeyEvent::from(KeyCode::Enter));
    assert!(matches!(action, Action::SubmitRfi));

    let active = toasts.active();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].title, "RFI Created Successfully");
}

#[test]
fn test_escape_navigates_back_without_toast() {
    let toasts = ToastService::new(Duration::from_secs(60));
    let mut form = loaded_form(toasts.clone());

    let action = form.handle_key_events(KeyEvent::from(KeyCode::Esc));
    assert!(matches!(action, Action::NavigateTo(Screen::Panel)));
    assert!(toasts.active().is_empty());
}

#[test]
fn test_reset_clears_the_form() {
    let mut form = loaded_form(ToastService::default());
    form.reset();

    assert!(form.prefill().project.is_empty());
    assert!(form.question().is_empty());
}
