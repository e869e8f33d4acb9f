//! Transient notifications
//!
//! The queue is created with the app state and lives as long as it does.
//! Toasts expire on `Tick` once their display duration has elapsed.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// At most this many toasts are visible at once
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
    pub created_at: Instant,
}

#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    duration: Duration,
    next_id: u64,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Duration::from_millis(5000))
    }
}

impl ToastQueue {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            duration,
            next_id: 0,
        }
    }

    /// Show a toast, dropping the oldest when over capacity. Returns its id.
    pub fn push(
        &mut self,
        title: impl Into<String>,
        description: Option<String>,
        variant: ToastVariant,
    ) -> u64 {
        self.push_at(title, description, variant, Instant::now())
    }

    pub fn push_at(
        &mut self,
        title: impl Into<String>,
        description: Option<String>,
        variant: ToastVariant,
        now: Instant,
    ) -> u64 {
        self.next_id += 1;
        self.toasts.push_back(Toast {
            id: self.next_id,
            title: title.into(),
            description,
            variant,
            created_at: now,
        });
        while self.toasts.len() > MAX_VISIBLE_TOASTS {
            self.toasts.pop_front();
        }
        self.next_id
    }

    /// Shorthand for an error toast
    pub fn error(&mut self, description: impl Into<String>) -> u64 {
        self.push("Error", Some(description.into()), ToastVariant::Destructive)
    }

    pub fn info(&mut self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.push(title, Some(description.into()), ToastVariant::Default)
    }

    /// Drop every toast older than the display duration
    pub fn expire(&mut self, now: Instant) {
        let duration = self.duration;
        self.toasts
            .retain(|t| now.saturating_duration_since(t.created_at) < duration);
    }

    /// Dismiss the newest toast
    pub fn dismiss_latest(&mut self) -> Option<Toast> {
        self.toasts.pop_back()
    }

    /// Visible toasts, oldest first
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_expire_after_duration() {
        let mut queue = ToastQueue::new(Duration::from_millis(100));
        let start = Instant::now();
        queue.push_at("Saved", None, ToastVariant::Default, start);

        queue.expire(start + Duration::from_millis(50));
        assert_eq!(queue.len(), 1);

        queue.expire(start + Duration::from_millis(100));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut queue = ToastQueue::default();
        for i in 0..5 {
            queue.push(format!("toast {i}"), None, ToastVariant::Default);
        }
        let titles: Vec<_> = queue.visible().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["toast 2", "toast 3", "toast 4"]);
    }

    #[test]
    fn test_error_toast_is_destructive() {
        let mut queue = ToastQueue::default();
        queue.error("Failed to load products. Please try again later.");
        let toast = queue.visible().next().unwrap();
        assert_eq!(toast.variant, ToastVariant::Destructive);
        assert_eq!(toast.title, "Error");
    }

    #[test]
    fn test_dismiss_latest() {
        let mut queue = ToastQueue::default();
        queue.info("First", "one");
        let second = queue.info("Second", "two");
        assert_eq!(queue.dismiss_latest().map(|t| t.id), Some(second));
        assert_eq!(queue.len(), 1);
    }
}
