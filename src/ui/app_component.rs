use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc;
use tokio::time::Duration;
use uuid::Uuid;

use crate::assistant::{mock, ActionOutcome, AssistantService, ReviewDetail};
use crate::config::Config;
use crate::constants::{TOAST_FEEDBACK_BODY, TOAST_FEEDBACK_TITLE};
use crate::logger::Logger;
use crate::notifications::ToastService;
use crate::ui::components::{
    PanelComponent, ReviewModalComponent, RfiFormComponent, StatusBar, ToastStack,
};
use crate::ui::components::dialogs::{HelpDialog, LogsDialog};
use crate::ui::core::{
    actions::{Action, DialogType, Screen},
    event_handler::EventType,
    Component, TaskManager,
};
use crate::ui::layout::LayoutManager;

/// Root component: routes events between the two screens, owns the modal
/// overlays, and wires background completions back into the UI.
pub struct AppComponent {
    // Component composition
    panel: PanelComponent,
    rfi_form: RfiFormComponent,
    review_modal: ReviewModalComponent,

    // Shared services
    toasts: ToastService,
    logger: Logger,
    service: AssistantService,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    // App state
    config: Config,
    details: HashMap<Uuid, ReviewDetail>,
    screen: Screen,
    active_dialog: Option<DialogType>,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: Config, logger: Logger) -> Self {
        let toasts = ToastService::new(Duration::from_millis(config.ui.toast_duration_ms));
        let service = AssistantService::simulated(Duration::from_millis(config.simulation.action_delay_ms));
        let (task_manager, background_action_rx) = TaskManager::new();

        let suggestions = mock::seed_suggestions();
        let details = mock::review_details(&suggestions);

        let mut panel = PanelComponent::new(suggestions, toasts.clone());
        panel.set_expanded(config.ui.start_expanded);
        panel.set_display_config(config.display.clone());

        let rfi_form = RfiFormComponent::new(toasts.clone());

        logger.log(format!(
            "AppComponent: seeded {} suggestions, action delay {}ms",
            panel.pending_count(),
            config.simulation.action_delay_ms
        ));

        Self {
            panel,
            rfi_form,
            review_modal: ReviewModalComponent::new(),
            toasts,
            logger,
            service,
            task_manager,
            background_action_rx,
            config,
            details,
            screen: Screen::Panel,
            active_dialog: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn panel(&self) -> &PanelComponent {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut PanelComponent {
        &mut self.panel
    }

    pub fn rfi_form(&self) -> &RfiFormComponent {
        &self.rfi_form
    }

    pub fn review_modal(&self) -> &ReviewModalComponent {
        &self.review_modal
    }

    pub fn review_modal_mut(&mut self) -> &mut ReviewModalComponent {
        &mut self.review_modal
    }

    pub fn toasts(&self) -> &ToastService {
        &self.toasts
    }

    pub fn active_dialog(&self) -> Option<&DialogType> {
        self.active_dialog.as_ref()
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Handle global keyboard shortcuts on the panel screen
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => {
                self.logger.log("Global key: '?' - opening help dialog".to_string());
                Action::ShowDialog(DialogType::Help)
            }
            KeyCode::Char('G') => {
                self.logger.log("Global key: 'G' - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::Esc => {
                self.logger.log("Global key: Esc - quitting application".to_string());
                Action::Quit
            }
            _ => Action::None,
        }
    }

    /// Keys while a dialog overlay is up
    fn handle_dialog_key(&mut self, key: KeyEvent) -> Action {
        match self.active_dialog {
            Some(DialogType::Review(_)) => self.review_modal.handle_key_events(key),
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                _ => Action::None,
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => Action::None,
            },
            None => Action::None,
        }
    }

    /// Handle app-level actions that require business logic
    pub async fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::RunPrimaryAction(task_id) => {
                self.start_primary_action(task_id);
                Action::None
            }
            Action::PrimaryActionFinished { task_id, outcome } => {
                self.finish_primary_action(task_id, outcome);
                Action::None
            }
            Action::OpenReview(task_id) => {
                match self.details.get(&task_id) {
                    Some(detail) => {
                        self.logger
                            .log(format!("Review: opening modal for '{}'", detail.email_subject));
                        self.review_modal.open(detail.clone());
                        self.active_dialog = Some(DialogType::Review(task_id));
                    }
                    None => {
                        log::warn!("Review: no detail record for task {task_id}");
                    }
                }
                Action::None
            }
            Action::DismissCard(task_id) => {
                self.logger.log(format!("Panel: dismissing card {task_id}"));
                self.panel.dismiss(task_id);
                Action::None
            }
            Action::SendFeedback(task_id) => {
                self.acknowledge_feedback(task_id);
                Action::None
            }
            Action::ClearFeedback(task_id) => {
                if let Some(card) = self.panel.card_mut(task_id) {
                    card.clear_feedback();
                }
                Action::None
            }
            Action::SubmitRfi => {
                self.logger.log("RFI form: submitted, returning to panel".to_string());
                self.rfi_form.reset();
                self.screen = Screen::Panel;
                Action::None
            }
            Action::NavigateTo(screen) => {
                self.logger.log(format!("Navigation: switching to {screen:?}"));
                self.screen = screen;
                Action::None
            }
            Action::ShowDialog(dialog_type) => {
                if let DialogType::Review(task_id) = dialog_type {
                    if let Some(detail) = self.details.get(&task_id) {
                        self.review_modal.open(detail.clone());
                    }
                }
                self.logger.log(format!("Dialog: showing {dialog_type:?}"));
                self.active_dialog = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.logger.log("Dialog: hiding current dialog".to_string());
                self.review_modal.close();
                self.active_dialog = None;
                Action::None
            }
            Action::None => Action::None,
        }
    }

    fn start_primary_action(&mut self, task_id: Uuid) {
        let Some(card) = self.panel.card_mut(task_id) else {
            log::warn!("Primary action requested for unknown task {task_id}");
            return;
        };

        // Busy cards are not re-triggerable until the completion lands
        if card.is_busy() {
            self.logger
                .log(format!("Primary action already in flight for {task_id}, ignoring"));
            return;
        }

        card.set_busy(true);
        let suggestion = card.suggestion().clone();
        self.logger
            .log(format!("Primary action: starting '{}'", suggestion.title));
        self.task_manager.spawn_primary_action(self.service.clone(), suggestion);
    }

    fn finish_primary_action(&mut self, task_id: Uuid, outcome: ActionOutcome) {
        if let Some(card) = self.panel.card_mut(task_id) {
            card.set_busy(false);
        }

        match outcome {
            ActionOutcome::ReportSent { toast_title, toast_body } => {
                self.logger
                    .log(format!("Primary action: report sent for {task_id}"));
                self.panel.complete(task_id);
                self.toasts.push(toast_title, toast_body);
            }
            ActionOutcome::RfiDraftReady(prefill) => {
                self.logger.log(format!(
                    "Primary action: RFI draft ready, opening form for '{}'",
                    prefill.subject
                ));
                self.rfi_form.load(prefill);
                self.screen = Screen::RfiForm;
            }
        }
    }

    fn acknowledge_feedback(&mut self, task_id: Uuid) {
        let Some(card) = self.panel.card_mut(task_id) else {
            return;
        };
        card.flash_feedback();
        self.toasts.push(TOAST_FEEDBACK_TITLE, TOAST_FEEDBACK_BODY);

        let flash = Duration::from_millis(self.config.simulation.feedback_flash_ms);
        self.task_manager
            .spawn_delayed_action(Action::ClearFeedback(task_id), flash, "Feedback flash reset".to_string());
    }

    /// Process background actions from the task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            self.logger.log(format!("Background: received action {action:?}"));
            actions.push(action);
        }

        let finished = self.task_manager.cleanup_finished_tasks();
        if !finished.is_empty() {
            self.logger
                .log(format!("Background: cleaned up {} finished tasks", finished.len()));
        }

        actions
    }

    /// Process an event through the component hierarchy
    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                if self.active_dialog.is_some() {
                    self.handle_dialog_key(key)
                } else {
                    match self.screen {
                        // The form is a text-entry surface; only Ctrl-C stays global
                        Screen::RfiForm => {
                            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                                Action::Quit
                            } else {
                                self.rfi_form.handle_key_events(key)
                            }
                        }
                        Screen::Panel => {
                            let panel_action = self.panel.handle_key_events(key);
                            if matches!(panel_action, Action::None) {
                                self.handle_global_key(key)
                            } else {
                                panel_action
                            }
                        }
                    }
                }
            }
            EventType::Tick => {
                self.toasts.prune_expired();
                Action::None
            }
            EventType::Resize(_, _) | EventType::Other => Action::None,
        };

        let _final_action = self.handle_app_action(action).await;
        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_global_key(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);
        let content = LayoutManager::panel_column(chunks[0]);

        match self.screen {
            Screen::Panel => self.panel.render(f, content),
            Screen::RfiForm => self.rfi_form.render(f, content),
        }

        let busy = self
            .panel
            .selected_card()
            .map(|c| c.is_busy())
            .unwrap_or(false);
        StatusBar::render(f, chunks[1], self.screen, busy);

        match &self.active_dialog {
            Some(DialogType::Review(_)) => self.review_modal.render(f, rect),
            Some(DialogType::Help) => HelpDialog::render(f, rect),
            Some(DialogType::Logs) => LogsDialog::render(f, rect, &self.logger),
            None => {}
        }

        ToastStack::render(f, rect, &self.toasts);
    }
}
