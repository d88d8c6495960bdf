//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::core::Screen;

/// One-line status bar with context-sensitive shortcuts
pub struct StatusBar;

impl StatusBar {
    pub fn render(f: &mut Frame, area: Rect, screen: Screen, action_in_flight: bool) {
        let status_text = if action_in_flight {
            "⟳ Running assistant action...".to_string()
        } else {
            match screen {
                Screen::Panel => {
                    "j/k: select • Enter: run • r: review • x: dismiss • Tab: collapse • ?: help • q: quit".to_string()
                }
                Screen::RfiForm => "type to edit question • Enter: submit • Esc: back to panel".to_string(),
            }
        };

        let status_color = if action_in_flight { Color::Yellow } else { Color::Gray };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
