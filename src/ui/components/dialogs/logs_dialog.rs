//! Log overlay showing the shared logger's entries, newest first.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Clear, List, ListItem},
    Frame,
};

use crate::constants::DIALOG_TITLE_LOGS;
use crate::logger::Logger;
use crate::ui::components::dialogs::common;
use crate::ui::layout::LayoutManager;

pub struct LogsDialog;

impl LogsDialog {
    pub fn render(f: &mut Frame, rect: Rect, logger: &Logger) {
        let dialog_area = LayoutManager::centered_rect(80, 80, rect);
        f.render_widget(Clear, dialog_area);

        let block = common::create_dialog_block(DIALOG_TITLE_LOGS, Color::Yellow);

        let items: Vec<ListItem> = logger
            .get_logs()
            .into_iter()
            .map(|entry| ListItem::new(Line::from(entry)).style(Style::default().fg(Color::Gray)))
            .collect();

        let list = List::new(items).block(block);
        f.render_widget(list, dialog_area);
    }
}
