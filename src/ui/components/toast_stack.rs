//! Renders active toast notifications in the bottom-right corner.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::notifications::ToastService;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

pub struct ToastStack;

impl ToastStack {
    pub fn render(f: &mut Frame, area: Rect, toasts: &ToastService) {
        let active = toasts.active();
        if active.is_empty() {
            return;
        }

        let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
        let x = area.x + area.width.saturating_sub(width + 1);
        let mut bottom = area.y + area.height.saturating_sub(1);

        // Newest toast closest to the bottom edge
        for toast in active.iter().rev() {
            if bottom < area.y + TOAST_HEIGHT {
                break;
            }
            let rect = Rect::new(x, bottom - TOAST_HEIGHT, width, TOAST_HEIGHT);

            let lines = vec![
                Line::from(Span::styled(
                    toast.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(toast.description.clone(), Style::default().fg(Color::Gray))),
            ];

            let widget = Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::Green)),
                );

            f.render_widget(Clear, rect);
            f.render_widget(widget, rect);

            bottom = bottom.saturating_sub(TOAST_HEIGHT + 1);
        }
    }
}
