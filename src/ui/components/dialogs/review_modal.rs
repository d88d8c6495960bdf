//! Review modal for AI-generated task detail.
//!
//! State machine: `Closed → Open(read-only) ⇄ Open(editing) → Closed`.
//! The draft is copied into a local buffer when the modal opens; nothing is
//! ever written back to the suggestion, so closing and reopening always
//! shows the original draft.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use crate::assistant::ReviewDetail;
use crate::constants::DIALOG_TITLE_REVIEW;
use crate::ui::components::badge::create_confidence_badge;
use crate::ui::components::dialogs::common::{self, shortcuts};
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;

/// Which content tab is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentTab {
    #[default]
    Draft,
    Original,
}

#[derive(Default)]
pub struct ReviewModalComponent {
    detail: Option<ReviewDetail>,
    edit_buffer: String,
    editing: bool,
    tab: ContentTab,
    scroll_offset: u16,
}

impl ReviewModalComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the modal for one detail record, seeding the edit buffer from the
    /// read-only draft.
    pub fn open(&mut self, detail: ReviewDetail) {
        self.edit_buffer = detail.draft_content.clone();
        self.detail = Some(detail);
        self.editing = false;
        self.tab = ContentTab::Draft;
        self.scroll_offset = 0;
    }

    /// Close and drop all local state, edits included.
    pub fn close(&mut self) {
        self.detail = None;
        self.edit_buffer.clear();
        self.editing = false;
        self.scroll_offset = 0;
    }

    pub fn is_visible(&self) -> bool {
        self.detail.is_some()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn tab(&self) -> ContentTab {
        self.tab
    }

    pub fn edit_buffer(&self) -> &str {
        &self.edit_buffer
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => {
                self.editing = false;
                Action::None
            }
            KeyCode::Enter => {
                self.edit_buffer.push('\n');
                Action::None
            }
            KeyCode::Backspace => {
                self.edit_buffer.pop();
                Action::None
            }
            KeyCode::Char(c) => {
                self.edit_buffer.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render_summary(&self, f: &mut Frame, rect: Rect, detail: &ReviewDetail) {
        let lines = vec![
            Line::from(Span::styled(
                "Task Summary",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("Email Subject: ", Style::default().fg(Color::Gray)),
                Span::raw(detail.email_subject.clone()),
            ]),
            Line::from(vec![
                Span::styled("Detected Intent: ", Style::default().fg(Color::Gray)),
                Span::raw(detail.detected_intent.clone()),
            ]),
            Line::from(vec![
                Span::styled("Project: ", Style::default().fg(Color::Gray)),
                Span::raw(detail.project.clone()),
            ]),
            Line::from(vec![
                Span::styled("AI Confidence: ", Style::default().fg(Color::Gray)),
                create_confidence_badge(detail.confidence),
            ]),
            Line::from(vec![
                Span::styled("Proposed Action: ", Style::default().fg(Color::Gray)),
                Span::raw(detail.proposed_action.clone()),
            ]),
        ];
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), rect);
    }

    fn render_tab_bar(&self, f: &mut Frame, rect: Rect) {
        let active = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let inactive = Style::default().fg(Color::DarkGray);

        let (draft_style, original_style) = match self.tab {
            ContentTab::Draft => (active, inactive),
            ContentTab::Original => (inactive, active),
        };

        let line = Line::from(vec![
            Span::styled("[ AI Draft Content ]", draft_style),
            Span::raw("  "),
            Span::styled("[ Original Email ]", original_style),
        ]);
        f.render_widget(Paragraph::new(line), rect);
    }

    fn render_content(&self, f: &mut Frame, rect: Rect, detail: &ReviewDetail) {
        let paragraph = match self.tab {
            ContentTab::Draft => {
                if self.editing {
                    common::create_input_paragraph(&self.edit_buffer, "Draft Content (editing)")
                } else {
                    common::create_readonly_paragraph(self.edit_buffer.clone(), "Draft Content for Review")
                }
            }
            ContentTab::Original => common::create_readonly_paragraph(detail.original_email.clone(), "Original Email"),
        };
        f.render_widget(paragraph.wrap(Wrap { trim: false }).scroll((self.scroll_offset, 0)), rect);
    }

    fn render_footer(&self, f: &mut Frame, rect: Rect, detail: &ReviewDetail) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(rect);

        let location = Line::from(vec![
            Span::styled("This will be saved to: ", Style::default().fg(Color::Gray)),
            Span::styled(detail.save_location.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]);
        f.render_widget(Paragraph::new(location), chunks[0]);

        let instructions = if self.editing {
            common::create_instructions_paragraph(&[
                ("Esc", Color::Red, " Stop editing"),
                shortcuts::SEPARATOR,
                ("type", Color::Cyan, " to edit the draft"),
            ])
        } else {
            common::create_instructions_paragraph(&[
                ("Enter", Color::Green, " Finalize & Save"),
                shortcuts::SEPARATOR,
                ("e", Color::Cyan, " Edit"),
                shortcuts::SEPARATOR,
                shortcuts::TAB_SWITCH,
                shortcuts::SEPARATOR,
                ("d", Color::Red, " Discard"),
                shortcuts::SEPARATOR,
                shortcuts::ESC_CLOSE,
            ])
        };
        f.render_widget(instructions, chunks[1]);
    }
}

impl Component for ReviewModalComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.detail.is_none() {
            return Action::None;
        }

        if self.editing {
            return self.handle_editing_key(key);
        }

        match key.code {
            KeyCode::Char('e') if self.tab == ContentTab::Draft => {
                self.editing = true;
                Action::None
            }
            KeyCode::Tab => {
                self.tab = match self.tab {
                    ContentTab::Draft => ContentTab::Original,
                    ContentTab::Original => ContentTab::Draft,
                };
                self.scroll_offset = 0;
                Action::None
            }
            KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                Action::None
            }
            // Finalize, discard and cancel all close without persisting edits
            KeyCode::Enter | KeyCode::Char('d') | KeyCode::Esc => Action::HideDialog,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(detail) = self.detail.clone() else {
            return;
        };

        let dialog_area = LayoutManager::centered_rect(80, 80, rect);
        f.render_widget(Clear, dialog_area);

        let block = common::create_dialog_block(DIALOG_TITLE_REVIEW, Color::Cyan);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let chunks = Layout::vertical([
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(inner);

        self.render_summary(f, chunks[0], &detail);
        self.render_tab_bar(f, chunks[1]);
        self.render_content(f, chunks[2], &detail);
        self.render_footer(f, chunks[3], &detail);
    }
}
