//! Background task plumbing for the simulated assistant.
//!
//! Every deferred piece of work (the fixed-delay primary action, the
//! feedback flash reset) runs on a spawned tokio task that posts its
//! completion back through an action channel. Handles stay abortable, so
//! in-flight work dies with the manager even though the UI never exposes a
//! cancel control.

use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

use super::actions::Action;
use crate::assistant::{AssistantService, Suggestion};

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Run a suggestion's primary action on the simulated backend.
    ///
    /// Exactly one `PrimaryActionFinished` is posted per spawn. The simulated
    /// backend cannot fail; if a future backend does, the error is logged and
    /// no completion is posted.
    pub fn spawn_primary_action(&mut self, service: AssistantService, suggestion: Suggestion) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let description = format!("Primary action: {}", suggestion.title);

        let handle = tokio::spawn(async move {
            match service.execute(&suggestion).await {
                Ok(outcome) => {
                    let _ = action_sender.send(Action::PrimaryActionFinished {
                        task_id: suggestion.id,
                        outcome,
                    });
                }
                Err(e) => {
                    log::warn!("Primary action failed for '{}': {}", suggestion.title, e);
                }
            }
        });

        self.track(task_id, handle, description);
        task_id
    }

    /// Post `action` after `delay`. Used for the feedback acknowledgement flash.
    pub fn spawn_delayed_action(&mut self, action: Action, delay: Duration, description: String) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = action_sender.send(action);
        });

        self.track(task_id, handle, description);
        task_id
    }

    fn track(&mut self, task_id: TaskId, handle: JoinHandle<()>, description: String) {
        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
    }

    /// Drop bookkeeping for tasks that have finished.
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            self.tasks.remove(task_id);
        }

        finished
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.cancel_all_tasks();
    }
}
