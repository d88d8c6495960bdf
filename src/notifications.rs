//! Toast notification service.
//!
//! Components get a cloned [`ToastService`] handle instead of reaching for a
//! global: pushing a toast from the panel, a card, or the RFI form all goes
//! through the same shared queue, and the renderer draws whatever is still
//! alive on each frame.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// A single transient notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub raised_at: Instant,
}

/// Shared handle to the toast queue.
#[derive(Clone)]
pub struct ToastService {
    toasts: Arc<Mutex<VecDeque<Toast>>>,
    ttl: Duration,
}

impl ToastService {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Arc::new(Mutex::new(VecDeque::new())),
            ttl,
        }
    }

    pub fn push(&self, title: impl Into<String>, description: impl Into<String>) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push_back(Toast {
                title: title.into(),
                description: description.into(),
                raised_at: Instant::now(),
            });
        }
    }

    /// Drop toasts whose lifetime has elapsed. Called on every tick.
    pub fn prune_expired(&self) {
        if let Ok(mut toasts) = self.toasts.lock() {
            let ttl = self.ttl;
            toasts.retain(|toast| toast.raised_at.elapsed() < ttl);
        }
    }

    /// Snapshot of the toasts still alive, oldest first.
    pub fn active(&self) -> Vec<Toast> {
        if let Ok(toasts) = self.toasts.lock() {
            toasts.iter().filter(|t| t.raised_at.elapsed() < self.ttl).cloned().collect()
        } else {
            Vec::new()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active().is_empty()
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::constants::DEFAULT_TOAST_DURATION_MS))
    }
}
