use crossterm::event::{KeyCode, KeyEvent};

use sitepilot::assistant::mock;
use sitepilot::ui::components::TaskCardComponent;
use sitepilot::ui::core::{actions::Action, Component};

fn status_card() -> TaskCardComponent {
    TaskCardComponent::new(mock::seed_suggestions().remove(0))
}

#[test]
fn test_enter_triggers_primary_action() {
    let mut card = status_card();
    let id = card.id();

    let action = card.handle_key_events(KeyEvent::from(KeyCode::Enter));
    assert!(matches!(action, Action::RunPrimaryAction(got) if got == id));
}

#[test]
fn test_busy_card_is_not_retriggerable() {
    let mut card = status_card();
    card.set_busy(true);

    assert!(matches!(card.handle_key_events(KeyEvent::from(KeyCode::Enter)), Action::None));
    assert!(matches!(
        card.handle_key_events(KeyEvent::from(KeyCode::Char('x'))),
        Action::None
    ));
    assert!(matches!(
        card.handle_key_events(KeyEvent::from(KeyCode::Char('f'))),
        Action::None
    ));

    card.set_busy(false);
    assert!(matches!(
        card.handle_key_events(KeyEvent::from(KeyCode::Enter)),
        Action::RunPrimaryAction(_)
    ));
}

#[test]
fn test_review_and_dismiss_and_feedback_keys() {
    let mut card = status_card();
    let id = card.id();

    assert!(matches!(
        card.handle_key_events(KeyEvent::from(KeyCode::Char('r'))),
        Action::OpenReview(got) if got == id
    ));
    assert!(matches!(
        card.handle_key_events(KeyEvent::from(KeyCode::Char('x'))),
        Action::DismissCard(got) if got == id
    ));
    assert!(matches!(
        card.handle_key_events(KeyEvent::from(KeyCode::Char('f'))),
        Action::SendFeedback(got) if got == id
    ));
}

#[test]
fn test_hide_is_idempotent() {
    let mut card = status_card();
    assert!(card.is_visible());

    assert!(card.hide(), "first hide flips visibility");
    assert!(!card.is_visible());
    assert!(!card.hide(), "second hide reports no change");
}

#[test]
fn test_feedback_flash_toggles() {
    let mut card = status_card();
    assert!(!card.is_feedback_flashing());

    card.flash_feedback();
    assert!(card.is_feedback_flashing());

    card.clear_feedback();
    assert!(!card.is_feedback_flashing());
}
