use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};

use sitepilot::assistant::mock;
use sitepilot::notifications::ToastService;
use sitepilot::ui::components::PanelComponent;
use sitepilot::ui::core::{actions::Action, Component};

fn fresh_panel() -> PanelComponent {
    PanelComponent::new(mock::seed_suggestions(), ToastService::new(Duration::from_secs(60)))
}

#[test]
fn test_pending_count_matches_visible_cards() {
    let panel = fresh_panel();
    assert_eq!(panel.pending_count(), 2);
    assert_eq!(panel.visible_count(), 2);
    assert!(!panel.is_empty());
}

#[test]
fn test_dismiss_decrements_once() {
    let mut panel = fresh_panel();
    let id = panel.card_ids()[0];

    panel.dismiss(id);
    assert_eq!(panel.pending_count(), 1);
    assert_eq!(panel.visible_count(), 1);

    // Repeated dismissal of the same card changes nothing
    panel.dismiss(id);
    assert_eq!(panel.pending_count(), 1);
}

#[test]
fn test_dismiss_raises_toast() {
    let toasts = ToastService::new(Duration::from_secs(60));
    let mut panel = PanelComponent::new(mock::seed_suggestions(), toasts.clone());
    let id = panel.card_ids()[0];

    panel.dismiss(id);
    let active = toasts.active();
    assert_eq!(active.len(), 1);
    assert!(active[0].title.contains("dismissed"));

    // The no-op second dismissal must not toast again
    panel.dismiss(id);
    assert_eq!(toasts.active().len(), 1);
}

#[test]
fn test_empty_state_after_all_cards_resolved() {
    let mut panel = fresh_panel();
    for id in panel.card_ids() {
        panel.dismiss(id);
    }

    assert!(panel.is_empty());
    assert_eq!(panel.pending_count(), 0);
    assert!(panel.selected_card().is_none());
}

#[test]
fn test_complete_resolves_without_dismissal_toast() {
    let toasts = ToastService::new(Duration::from_secs(60));
    let mut panel = PanelComponent::new(mock::seed_suggestions(), toasts.clone());
    let id = panel.card_ids()[0];

    panel.complete(id);
    assert_eq!(panel.pending_count(), 1);
    assert!(toasts.active().is_empty());
}

#[test]
fn test_tab_toggles_display_mode_only() {
    let mut panel = fresh_panel();
    assert!(panel.is_expanded());

    let action = panel.handle_key_events(KeyEvent::from(KeyCode::Tab));
    assert!(matches!(action, Action::None));
    assert!(!panel.is_expanded());
    assert_eq!(panel.pending_count(), 2);

    panel.handle_key_events(KeyEvent::from(KeyCode::Tab));
    assert!(panel.is_expanded());
}

#[test]
fn test_selection_wraps_over_visible_cards() {
    let mut panel = fresh_panel();
    let ids = panel.card_ids();
    assert_eq!(panel.selected_card().unwrap().id(), ids[0]);

    panel.handle_key_events(KeyEvent::from(KeyCode::Char('j')));
    assert_eq!(panel.selected_card().unwrap().id(), ids[1]);

    panel.handle_key_events(KeyEvent::from(KeyCode::Char('j')));
    assert_eq!(panel.selected_card().unwrap().id(), ids[0]);

    panel.handle_key_events(KeyEvent::from(KeyCode::Char('k')));
    assert_eq!(panel.selected_card().unwrap().id(), ids[1]);
}

#[test]
fn test_selection_moves_off_dismissed_card() {
    let mut panel = fresh_panel();
    let ids = panel.card_ids();

    panel.dismiss(ids[0]);
    assert_eq!(panel.selected_card().unwrap().id(), ids[1]);
}

#[test]
fn test_other_keys_route_to_selected_card() {
    let mut panel = fresh_panel();
    let selected = panel.selected_card().unwrap().id();

    let action = panel.handle_key_events(KeyEvent::from(KeyCode::Char('x')));
    assert!(matches!(action, Action::DismissCard(id) if id == selected));
}
