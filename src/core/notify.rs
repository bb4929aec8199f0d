//! Transient user notifications.
//!
//! [`Notifier`] is the fire-and-forget surface the wallet flows report to.
//! [`ToastQueue`] implements it with a bounded list of toasts that dismiss
//! themselves after [`TOAST_DURATION_MS`](crate::config::TOAST_DURATION_MS).

use leptos::prelude::*;

use crate::config::MAX_TOASTS;
use crate::models::{Toast, ToastKind};

/// Shows a transient message. No acknowledgement is returned.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Visible toasts, oldest first.
#[derive(Clone, Copy)]
pub struct ToastQueue {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Current toasts (tracked).
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    /// Add a toast, dropping the oldest ones beyond [`MAX_TOASTS`].
    pub fn push(&self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let toast = Toast {
            id,
            kind,
            message: message.into(),
        };
        self.toasts.update(|toasts| {
            toasts.push(toast);
            if toasts.len() > MAX_TOASTS {
                let excess = toasts.len() - MAX_TOASTS;
                toasts.drain(..excess);
            }
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn show(&self, kind: ToastKind, message: &str) {
        let id = self.push(kind, message);
        self.schedule_dismiss(id);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let queue = *self;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(crate::config::TOAST_DURATION_MS).await;
            queue.dismiss(id);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastQueue {
    fn success(&self, message: &str) {
        self.show(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.show(ToastKind::Error, message);
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;

    use super::Notifier;
    use crate::models::ToastKind;

    /// Records every notification in order.
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub events: RefCell<Vec<(ToastKind, String)>>,
    }

    impl RecordingNotifier {
        pub fn count(&self, kind: ToastKind) -> usize {
            self.events.borrow().iter().filter(|(k, _)| *k == kind).count()
        }
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: &str) {
            self.events
                .borrow_mut()
                .push((ToastKind::Success, message.to_string()));
        }

        fn error(&self, message: &str) {
            self.events
                .borrow_mut()
                .push((ToastKind::Error, message.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let owner = Owner::new();
        owner.with(|| {
            let queue = ToastQueue::new();
            let a = queue.push(ToastKind::Success, "a");
            let b = queue.push(ToastKind::Error, "b");
            assert!(b > a);

            let toasts = queue.toasts();
            assert_eq!(toasts.len(), 2);
            assert_eq!(toasts[1].kind, ToastKind::Error);
            assert_eq!(toasts[1].message, "b");
        });
    }

    #[test]
    fn test_queue_is_bounded_oldest_first() {
        let owner = Owner::new();
        owner.with(|| {
            let queue = ToastQueue::new();
            for i in 0..(MAX_TOASTS + 2) {
                queue.push(ToastKind::Success, format!("toast {}", i));
            }

            let messages: Vec<String> = queue.toasts().into_iter().map(|t| t.message).collect();
            assert_eq!(messages.len(), MAX_TOASTS);
            assert_eq!(messages.last().unwrap(), &format!("toast {}", MAX_TOASTS + 1));
            assert_eq!(messages[0], "toast 2");
        });
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let owner = Owner::new();
        owner.with(|| {
            let queue = ToastQueue::new();
            let keep = queue.push(ToastKind::Success, "keep");
            let gone = queue.push(ToastKind::Error, "gone");

            queue.dismiss(gone);
            let ids: Vec<u64> = queue.toasts().iter().map(|t| t.id).collect();
            assert_eq!(ids, vec![keep]);
        });
    }

    #[test]
    fn test_notifier_pushes_kind() {
        let owner = Owner::new();
        owner.with(|| {
            let queue = ToastQueue::new();
            queue.success("connected");
            queue.error("failed");
            let kinds: Vec<ToastKind> = queue.toasts().iter().map(|t| t.kind).collect();
            assert_eq!(kinds, vec![ToastKind::Success, ToastKind::Error]);
        });
    }
}
