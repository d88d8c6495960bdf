use tokio::time::Duration;

use sitepilot::config::Config;
use sitepilot::logger::Logger;
use sitepilot::ui::core::actions::{Action, DialogType, Screen};
use sitepilot::ui::AppComponent;

fn fresh_app() -> AppComponent {
    AppComponent::new(Config::default(), Logger::new())
}

/// Pump completed background tasks back through the action loop, the same
/// way the render loop does on every tick.
async fn drain_background(app: &mut AppComponent) {
    for action in app.process_background_actions() {
        app.handle_app_action(action).await;
    }
}

#[tokio::test]
async fn test_initial_state() {
    let app = fresh_app();
    assert_eq!(app.screen(), Screen::Panel);
    assert_eq!(app.panel().pending_count(), 2);
    assert!(app.active_dialog().is_none());
    assert!(!app.should_quit());
}

#[tokio::test]
async fn test_quit_action() {
    let mut app = fresh_app();
    app.handle_app_action(Action::Quit).await;
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_dismiss_card_flow() {
    let mut app = fresh_app();
    let id = app.panel().card_ids()[0];

    app.handle_app_action(Action::DismissCard(id)).await;
    assert_eq!(app.panel().pending_count(), 1);
    assert!(!app.toasts().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_status_report_primary_action_completes() {
    let mut app = fresh_app();
    let id = app.panel().card_ids()[0];

    app.handle_app_action(Action::RunPrimaryAction(id)).await;
    assert!(app.panel().card(id).unwrap().is_busy());
    assert_eq!(app.active_task_count(), 1);

    // Past the simulated delay the completion is waiting in the channel
    tokio::time::sleep(Duration::from_millis(2100)).await;
    drain_background(&mut app).await;

    let card = app.panel().card(id).unwrap();
    assert!(!card.is_busy());
    assert!(!card.is_visible());
    assert_eq!(app.panel().pending_count(), 1);
    assert!(app
        .toasts()
        .active()
        .iter()
        .any(|t| t.title.contains("Report for Project A")));
}

#[tokio::test(start_paused = true)]
async fn test_busy_card_ignores_second_trigger() {
    let mut app = fresh_app();
    let id = app.panel().card_ids()[0];

    app.handle_app_action(Action::RunPrimaryAction(id)).await;
    app.handle_app_action(Action::RunPrimaryAction(id)).await;
    assert_eq!(app.active_task_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_rfi_primary_action_opens_prefilled_form() {
    let mut app = fresh_app();
    let rfi_id = app.panel().card_ids()[1];

    app.handle_app_action(Action::RunPrimaryAction(rfi_id)).await;
    tokio::time::sleep(Duration::from_millis(2100)).await;
    drain_background(&mut app).await;

    assert_eq!(app.screen(), Screen::RfiForm);
    assert_eq!(
        app.rfi_form().prefill().subject,
        "RFI: Rebar Placement Conflict (Pay Item #12-345)"
    );

    // The card stays on the panel until the user dismisses it
    assert!(app.panel().card(rfi_id).unwrap().is_visible());
    assert_eq!(app.panel().pending_count(), 2);
}

#[tokio::test]
async fn test_rfi_submission_returns_to_panel() {
    let mut app = fresh_app();
    app.handle_app_action(Action::NavigateTo(Screen::RfiForm)).await;
    assert_eq!(app.screen(), Screen::RfiForm);

    app.handle_app_action(Action::SubmitRfi).await;
    assert_eq!(app.screen(), Screen::Panel);
    assert!(app.rfi_form().question().is_empty());
}

#[tokio::test]
async fn test_review_modal_round_trip_discards_edits() {
    use crossterm::event::{KeyCode, KeyEvent};
    use sitepilot::ui::core::Component;

    let mut app = fresh_app();
    let id = app.panel().card_ids()[0];

    app.handle_app_action(Action::OpenReview(id)).await;
    assert!(matches!(app.active_dialog(), Some(DialogType::Review(_))));
    assert!(app.review_modal().is_visible());
    let original_draft = app.review_modal().edit_buffer().to_string();

    // Edit the draft, then close without saving
    app.review_modal_mut().handle_key_events(KeyEvent::from(KeyCode::Char('e')));
    app.review_modal_mut().handle_key_events(KeyEvent::from(KeyCode::Char('X')));
    assert_ne!(app.review_modal().edit_buffer(), original_draft);

    app.handle_app_action(Action::HideDialog).await;
    assert!(app.active_dialog().is_none());
    assert!(!app.review_modal().is_visible());

    app.handle_app_action(Action::OpenReview(id)).await;
    assert_eq!(app.review_modal().edit_buffer(), original_draft);
}

#[tokio::test]
async fn test_open_review_for_unknown_id_is_ignored() {
    let mut app = fresh_app();
    app.handle_app_action(Action::OpenReview(uuid::Uuid::new_v4())).await;
    assert!(app.active_dialog().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_feedback_flash_clears_after_delay() {
    let mut app = fresh_app();
    let id = app.panel().card_ids()[0];

    app.handle_app_action(Action::SendFeedback(id)).await;
    assert!(app.panel().card(id).unwrap().is_feedback_flashing());
    assert!(app
        .toasts()
        .active()
        .iter()
        .any(|t| t.title.contains("Feedback recorded")));

    tokio::time::sleep(Duration::from_millis(400)).await;
    drain_background(&mut app).await;
    assert!(!app.panel().card(id).unwrap().is_feedback_flashing());
}
