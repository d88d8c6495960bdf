//! One suggestion card in the panel.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::assistant::Suggestion;
use crate::config::DisplayConfig;
use crate::ui::components::badge::{confidence_color, create_confidence_badge, create_priority_badge};
use crate::ui::core::{actions::Action, Component};

pub struct TaskCardComponent {
    suggestion: Suggestion,
    busy: bool,
    feedback_flash: bool,
    pub selected: bool,
    pub display_config: DisplayConfig,
}

impl TaskCardComponent {
    pub fn new(suggestion: Suggestion) -> Self {
        Self {
            suggestion,
            busy: false,
            feedback_flash: false,
            selected: false,
            display_config: DisplayConfig::default(),
        }
    }

    pub fn suggestion(&self) -> &Suggestion {
        &self.suggestion
    }

    pub fn id(&self) -> uuid::Uuid {
        self.suggestion.id
    }

    pub fn is_visible(&self) -> bool {
        self.suggestion.visible
    }

    /// Flip the card invisible. Returns false when it already was, so the
    /// caller decrements the pending count exactly once per card.
    pub fn hide(&mut self) -> bool {
        if self.suggestion.visible {
            self.suggestion.visible = false;
            true
        } else {
            false
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    pub fn is_feedback_flashing(&self) -> bool {
        self.feedback_flash
    }

    pub fn flash_feedback(&mut self) {
        self.feedback_flash = true;
    }

    pub fn clear_feedback(&mut self) {
        self.feedback_flash = false;
    }

    fn border_style(&self) -> Style {
        if self.feedback_flash {
            Style::default().fg(Color::Green)
        } else if self.selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    /// Render the one-line collapsed form.
    pub fn render_collapsed(&mut self, f: &mut Frame, rect: Rect) {
        let mut spans = vec![
            create_priority_badge(self.suggestion.priority),
            Span::raw(" "),
            Span::styled(
                self.suggestion.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", self.suggestion.project), Style::default().fg(Color::Gray)),
        ];
        if self.busy {
            spans.push(Span::styled("  ⟳ working...", Style::default().fg(Color::Yellow)));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(self.border_style()),
        );
        f.render_widget(paragraph, rect);
    }
}

impl Component for TaskCardComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            // Busy cards ignore every card-level key until the action lands
            KeyCode::Enter if !self.busy => Action::RunPrimaryAction(self.suggestion.id),
            KeyCode::Char('r') if !self.busy => Action::OpenReview(self.suggestion.id),
            KeyCode::Char('x') if !self.busy => Action::DismissCard(self.suggestion.id),
            KeyCode::Char('f') if !self.busy => Action::SendFeedback(self.suggestion.id),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title_line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.suggestion.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            create_priority_badge(self.suggestion.priority),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border_style())
            .title(title_line);

        let mut lines: Vec<Line> = vec![Line::from(Span::styled(
            self.suggestion.project.clone(),
            Style::default().fg(Color::Gray),
        ))];

        if self.display_config.show_descriptions {
            lines.push(Line::from(self.suggestion.summary.clone()));
            for detail in &self.suggestion.details {
                lines.push(Line::from(Span::styled(
                    format!("• {detail}"),
                    Style::default().fg(Color::Gray),
                )));
            }
        }

        if self.display_config.show_confidence {
            lines.push(Line::from(vec![
                Span::styled("AI confidence: ", Style::default().fg(Color::Gray)),
                create_confidence_badge(self.suggestion.confidence),
                Span::raw(" "),
                Span::styled(
                    confidence_bar(self.suggestion.confidence),
                    Style::default().fg(confidence_color(self.suggestion.confidence)),
                ),
            ]));
        }

        if self.busy {
            lines.push(Line::from(Span::styled(
                "⟳ Working on it...",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )));
        } else if self.feedback_flash {
            lines.push(Line::from(Span::styled("👍 Noted!", Style::default().fg(Color::Green))));
        } else if self.display_config.show_shortcuts {
            lines.push(Line::from(Span::styled(
                format!("Enter: {} • r: review • x: dismiss • f: 👍", self.suggestion.primary_action),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        f.render_widget(paragraph, rect);
    }
}

/// Ten-cell bar for the confidence percentage.
fn confidence_bar(confidence: u8) -> String {
    let filled = (usize::from(confidence.min(100)) + 5) / 10;
    let mut bar = String::new();
    for i in 0..10 {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar
}
