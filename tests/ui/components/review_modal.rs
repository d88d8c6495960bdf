use crossterm::event::{KeyCode, KeyEvent};

use sitepilot::assistant::{mock, SuggestionKind};
use sitepilot::ui::components::{ContentTab, ReviewModalComponent};
use sitepilot::ui::core::{actions::Action, Component};

fn open_modal() -> ReviewModalComponent {
    let mut modal = ReviewModalComponent::new();
    modal.open(mock::review_detail(SuggestionKind::StatusReport));
    modal
}

#[test]
fn test_open_seeds_buffer_from_draft() {
    let detail = mock::review_detail(SuggestionKind::StatusReport);
    let modal = open_modal();

    assert!(modal.is_visible());
    assert!(!modal.is_editing());
    assert_eq!(modal.tab(), ContentTab::Draft);
    assert_eq!(modal.edit_buffer(), detail.draft_content);
}

#[test]
fn test_edit_key_enters_editing_on_draft_tab() {
    let mut modal = open_modal();

    modal.handle_key_events(KeyEvent::from(KeyCode::Char('e')));
    assert!(modal.is_editing());

    modal.handle_key_events(KeyEvent::from(KeyCode::Esc));
    assert!(!modal.is_editing(), "Esc leaves editing mode without closing");
    assert!(modal.is_visible());
}

#[test]
fn test_edit_key_ignored_on_original_tab() {
    let mut modal = open_modal();
    modal.handle_key_events(KeyEvent::from(KeyCode::Tab));
    assert_eq!(modal.tab(), ContentTab::Original);

    modal.handle_key_events(KeyEvent::from(KeyCode::Char('e')));
    assert!(!modal.is_editing());
}

#[test]
fn test_typing_mutates_buffer() {
    let mut modal = open_modal();
    let original_len = modal.edit_buffer().len();

    modal.handle_key_events(KeyEvent::from(KeyCode::Char('e')));
    modal.handle_key_events(KeyEvent::from(KeyCode::Char('!')));
    assert_eq!(modal.edit_buffer().len(), original_len + 1);
    assert!(modal.edit_buffer().ends_with('!'));

    modal.handle_key_events(KeyEvent::from(KeyCode::Backspace));
    assert_eq!(modal.edit_buffer().len(), original_len);
}

#[test]
fn test_finalize_discard_and_cancel_all_close() {
    for code in [KeyCode::Enter, KeyCode::Char('d'), KeyCode::Esc] {
        let mut modal = open_modal();
        let action = modal.handle_key_events(KeyEvent::from(code));
        assert!(matches!(action, Action::HideDialog), "key {code:?} should close the modal");
    }
}

#[test]
fn test_edits_are_discarded_on_close() {
    let detail = mock::review_detail(SuggestionKind::StatusReport);

    let mut modal = ReviewModalComponent::new();
    modal.open(detail.clone());
    modal.handle_key_events(KeyEvent::from(KeyCode::Char('e')));
    modal.handle_key_events(KeyEvent::from(KeyCode::Char('X')));
    assert_ne!(modal.edit_buffer(), detail.draft_content);

    modal.close();
    assert!(!modal.is_visible());

    // Reopening shows the untouched draft again
    modal.open(detail.clone());
    assert_eq!(modal.edit_buffer(), detail.draft_content);
}

#[test]
fn test_tab_switches_content() {
    let mut modal = open_modal();

    modal.handle_key_events(KeyEvent::from(KeyCode::Tab));
    assert_eq!(modal.tab(), ContentTab::Original);

    modal.handle_key_events(KeyEvent::from(KeyCode::Tab));
    assert_eq!(modal.tab(), ContentTab::Draft);
}

#[test]
fn test_keys_are_ignored_while_closed() {
    let mut modal = ReviewModalComponent::new();
    let action = modal.handle_key_events(KeyEvent::from(KeyCode::Enter));
    assert!(matches!(action, Action::None));
}
