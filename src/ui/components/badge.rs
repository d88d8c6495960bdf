use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::assistant::Priority;

/// Create the priority badge shown next to a card title
#[must_use]
pub fn create_priority_badge(priority: Priority) -> Span<'static> {
    let color = match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Rgb(255, 165, 0),
        Priority::Low => Color::Blue,
    };

    Span::styled(
        format!(" {} ", priority.label()),
        Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD),
    )
}

/// Create the "N pending" badge for the panel header
#[must_use]
pub fn create_pending_badge(count: usize) -> Span<'static> {
    Span::styled(
        format!(" {} {} ", count, crate::constants::PENDING_BADGE_SUFFIX),
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
    )
}

/// Create a compact confidence readout, colored by how sure the AI claims to be
#[must_use]
pub fn create_confidence_badge(confidence: u8) -> Span<'static> {
    let color = confidence_color(confidence);
    Span::styled(format!("{confidence}%"), Style::default().fg(color).add_modifier(Modifier::BOLD))
}

/// Color used for confidence gauges and badges
#[must_use]
pub fn confidence_color(confidence: u8) -> Color {
    match confidence {
        85..=100 => Color::Green,
        60..=84 => Color::Rgb(255, 165, 0),
        _ => Color::Red,
    }
}
