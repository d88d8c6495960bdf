//! The assistant panel: a header with the pending badge and a column of
//! suggestion cards.
//!
//! The panel owns the seeded card set, the pending counter, the
//! expanded/collapsed display mode, and card selection. The pending counter
//! tracks the invariant "number of visible cards" and is decremented exactly
//! once per card that goes invisible, never below zero.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use uuid::Uuid;

use crate::assistant::Suggestion;
use crate::config::DisplayConfig;
use crate::constants::{
    CARD_COLLAPSED_HEIGHT, CARD_EXPANDED_HEIGHT, EMPTY_STATE_SUBTITLE, EMPTY_STATE_TITLE, PANEL_TITLE,
    TOAST_SUGGESTION_DISMISSED_BODY, TOAST_SUGGESTION_DISMISSED_TITLE,
};
use crate::notifications::ToastService;
use crate::ui::components::badge::create_pending_badge;
use crate::ui::components::task_card::TaskCardComponent;
use crate::ui::core::{actions::Action, Component};

pub struct PanelComponent {
    cards: Vec<TaskCardComponent>,
    pending_count: usize,
    expanded: bool,
    selected_index: usize,
    toasts: ToastService,
}

impl PanelComponent {
    pub fn new(suggestions: Vec<Suggestion>, toasts: ToastService) -> Self {
        let pending_count = suggestions.iter().filter(|s| s.visible).count();
        let cards = suggestions.into_iter().map(TaskCardComponent::new).collect();

        let mut panel = Self {
            cards,
            pending_count,
            expanded: true,
            selected_index: 0,
            toasts,
        };
        panel.fix_selection();
        panel
    }

    pub fn set_display_config(&mut self, display_config: DisplayConfig) {
        for card in &mut self.cards {
            card.display_config = display_config.clone();
        }
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn pending_count(&self) -> usize {
        self.pending_count
    }

    pub fn visible_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_visible()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.visible_count() == 0
    }

    /// Ids of every seeded card, visible or not, in panel order.
    pub fn card_ids(&self) -> Vec<Uuid> {
        self.cards.iter().map(|c| c.id()).collect()
    }

    pub fn card(&self, id: Uuid) -> Option<&TaskCardComponent> {
        self.cards.iter().find(|c| c.id() == id)
    }

    pub fn card_mut(&mut self, id: Uuid) -> Option<&mut TaskCardComponent> {
        self.cards.iter_mut().find(|c| c.id() == id)
    }

    /// The card key events currently route to.
    pub fn selected_card(&self) -> Option<&TaskCardComponent> {
        self.cards.get(self.selected_index).filter(|c| c.is_visible())
    }

    /// Dismiss a card at the user's request. Optimistic: no confirmation.
    pub fn dismiss(&mut self, id: Uuid) {
        if self.resolve(id) {
            self.toasts
                .push(TOAST_SUGGESTION_DISMISSED_TITLE, TOAST_SUGGESTION_DISMISSED_BODY);
        }
    }

    /// Resolve a card after its primary action completed.
    pub fn complete(&mut self, id: Uuid) {
        self.resolve(id);
    }

    /// Hide the card and decrement the pending counter once. Returns whether
    /// anything changed (a second resolve of the same id is a no-op).
    fn resolve(&mut self, id: Uuid) -> bool {
        let Some(card) = self.card_mut(id) else {
            return false;
        };

        if card.hide() {
            self.pending_count = self.pending_count.saturating_sub(1);
            self.fix_selection();
            true
        } else {
            false
        }
    }

    fn fix_selection(&mut self) {
        if self.cards.get(self.selected_index).is_some_and(|c| c.is_visible()) {
            self.apply_selection();
            return;
        }

        // Current slot is gone; fall to the next visible card, then the previous
        if let Some(index) = self.cards.iter().position(|c| c.is_visible()) {
            self.selected_index = index;
        }
        self.apply_selection();
    }

    fn apply_selection(&mut self) {
        for (i, card) in self.cards.iter_mut().enumerate() {
            card.selected = i == self.selected_index && card.is_visible();
        }
    }

    fn select_next(&mut self) {
        let visible: Vec<usize> = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_visible())
            .map(|(i, _)| i)
            .collect();
        if visible.is_empty() {
            return;
        }

        let pos = visible.iter().position(|&i| i == self.selected_index).unwrap_or(0);
        self.selected_index = visible[(pos + 1) % visible.len()];
        self.apply_selection();
    }

    fn select_previous(&mut self) {
        let visible: Vec<usize> = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_visible())
            .map(|(i, _)| i)
            .collect();
        if visible.is_empty() {
            return;
        }

        let pos = visible.iter().position(|&i| i == self.selected_index).unwrap_or(0);
        self.selected_index = visible[(pos + visible.len() - 1) % visible.len()];
        self.apply_selection();
    }

    fn render_header(&self, f: &mut Frame, rect: Rect) {
        let header = Line::from(vec![
            Span::styled(PANEL_TITLE, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            create_pending_badge(self.pending_count),
        ]);
        f.render_widget(Paragraph::new(header), rect);
    }

    fn render_empty_state(&self, f: &mut Frame, rect: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                EMPTY_STATE_TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(EMPTY_STATE_SUBTITLE, Style::default().fg(Color::Gray))),
        ];
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(paragraph, rect);
    }
}

impl Component for PanelComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.select_next();
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.select_previous();
                Action::None
            }
            // Display mode only; never touches task state
            KeyCode::Tab => {
                self.expanded = !self.expanded;
                Action::None
            }
            _ => {
                let selected = self.selected_index;
                match self.cards.get_mut(selected) {
                    Some(card) if card.is_visible() => card.handle_key_events(key),
                    _ => Action::None,
                }
            }
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(rect);
        self.render_header(f, chunks[0]);

        if self.is_empty() {
            self.render_empty_state(f, chunks[1]);
            return;
        }

        let card_height = if self.expanded {
            CARD_EXPANDED_HEIGHT
        } else {
            CARD_COLLAPSED_HEIGHT
        };

        let mut y = chunks[1].y;
        let expanded = self.expanded;
        for card in self.cards.iter_mut().filter(|c| c.is_visible()) {
            if y + card_height > chunks[1].y + chunks[1].height {
                break;
            }
            let card_rect = Rect::new(chunks[1].x, y, chunks[1].width, card_height);
            if expanded {
                card.render(f, card_rect);
            } else {
                card.render_collapsed(f, card_rect);
            }
            y += card_height + 1;
        }
    }
}
