//! Help dialog listing keyboard shortcuts.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::constants::DIALOG_TITLE_HELP;
use crate::ui::components::dialogs::common;
use crate::ui::layout::LayoutManager;

const BINDINGS: &[(&str, &str)] = &[
    ("j / k, ↓ / ↑", "Select next/previous card"),
    ("Enter", "Run the selected card's primary action"),
    ("r", "Review the AI-generated detail"),
    ("x", "Dismiss the selected card"),
    ("f", "Send thumbs-up feedback"),
    ("Tab", "Expand / collapse cards"),
    ("G", "Show the log overlay"),
    ("?", "This help"),
    ("q / Ctrl-C", "Quit"),
];

pub struct HelpDialog;

impl HelpDialog {
    pub fn render(f: &mut Frame, rect: Rect) {
        let dialog_area = LayoutManager::centered_rect(60, 60, rect);
        f.render_widget(Clear, dialog_area);

        let block = common::create_dialog_block(DIALOG_TITLE_HELP, Color::Cyan);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let mut lines = vec![Line::from("")];
        for (key, description) in BINDINGS {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {key:<14}"),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*description, Style::default().fg(Color::Gray)),
            ]));
        }

        f.render_widget(Paragraph::new(lines), inner);
    }
}
