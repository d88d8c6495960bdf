//! RFI form screen, pre-filled by the assistant.
//!
//! Project, contractor and subject are read-only; the question text is
//! editable. Submission raises a confirmation toast and navigates back to
//! the panel. Nothing durable is written anywhere.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::assistant::RfiPrefill;
use crate::constants::{RFI_FORM_SUBTITLE, RFI_FORM_TITLE, TOAST_RFI_SUBMITTED_BODY, TOAST_RFI_SUBMITTED_TITLE};
use crate::notifications::ToastService;
use crate::ui::components::dialogs::common;
use crate::ui::core::{
    actions::{Action, Screen},
    Component,
};

pub struct RfiFormComponent {
    prefill: RfiPrefill,
    question: String,
    toasts: ToastService,
}

impl RfiFormComponent {
    pub fn new(toasts: ToastService) -> Self {
        Self {
            prefill: RfiPrefill::default(),
            question: String::new(),
            toasts,
        }
    }

    /// Load the navigation payload. Absent prefill means empty defaults.
    pub fn load(&mut self, prefill: RfiPrefill) {
        self.question = prefill.question.clone();
        self.prefill = prefill;
    }

    pub fn reset(&mut self) {
        self.prefill = RfiPrefill::default();
        self.question.clear();
    }

    pub fn prefill(&self) -> &RfiPrefill {
        &self.prefill
    }

    pub fn question(&self) -> &str {
        &self.question
    }
}

impl Component for RfiFormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::NavigateTo(Screen::Panel),
            KeyCode::Enter => {
                self.toasts.push(TOAST_RFI_SUBMITTED_TITLE, TOAST_RFI_SUBMITTED_BODY);
                Action::SubmitRfi
            }
            KeyCode::Backspace => {
                self.question.pop();
                Action::None
            }
            KeyCode::Char(c) => {
                self.question.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(rect);

        let header = vec![
            Line::from(Span::styled(RFI_FORM_TITLE, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(RFI_FORM_SUBTITLE, Style::default().fg(Color::Gray))),
        ];
        f.render_widget(Paragraph::new(header), chunks[0]);

        f.render_widget(
            common::create_readonly_paragraph(self.prefill.project.clone(), "Project"),
            chunks[1],
        );
        f.render_widget(
            common::create_readonly_paragraph(self.prefill.contractor.clone(), "Contractor"),
            chunks[2],
        );
        f.render_widget(
            common::create_readonly_paragraph(self.prefill.subject.clone(), "Subject"),
            chunks[3],
        );
        f.render_widget(
            common::create_input_paragraph(&self.question, "Question").wrap(Wrap { trim: false }),
            chunks[4],
        );

        let instructions = common::create_instructions_paragraph(&[
            ("Enter", Color::Green, " Submit RFI"),
            (" • ", Color::Gray, ""),
            ("Esc", Color::Red, " Cancel"),
        ]);
        f.render_widget(instructions, chunks[5]);
    }
}
