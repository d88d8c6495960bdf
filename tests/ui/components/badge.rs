use sitepilot::assistant::Priority;
use sitepilot::ui::components::badge::*;

#[test]
fn test_priority_badge_labels() {
    assert!(create_priority_badge(Priority::High).content.contains("High"));
    assert!(create_priority_badge(Priority::Medium).content.contains("Medium"));
    assert!(create_priority_badge(Priority::Low).content.contains("Low"));
}

#[test]
fn test_pending_badge_shows_count() {
    let badge = create_pending_badge(3);
    assert!(badge.content.contains("3 pending"), "Pending badge should show the count");
}

#[test]
fn test_confidence_badge_is_percentage() {
    let badge = create_confidence_badge(92);
    assert!(badge.content.contains("92%"));
}

#[test]
fn test_confidence_color_bands() {
    use ratatui::style::Color;

    assert_eq!(confidence_color(92), Color::Green);
    assert_eq!(confidence_color(78), Color::Rgb(255, 165, 0));
    assert_eq!(confidence_color(30), Color::Red);
}
