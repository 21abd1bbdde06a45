//! Notification queue behind the console's alert groups.
//!
//! Ids come from a per-queue counter so alerts pushed in the same
//! millisecond never collide.

/// Identifier of a queued alert, strictly increasing per queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlertId(u64);

impl std::fmt::Display for AlertId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertVariant {
    Success,
    Danger,
    Warning,
    Info,
}

impl AlertVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertVariant::Success => "alert alert-success",
            AlertVariant::Danger => "alert alert-danger",
            AlertVariant::Warning => "alert alert-warning",
            AlertVariant::Info => "alert alert-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub id: AlertId,
    pub title: String,
    pub detail: Option<String>,
    pub variant: AlertVariant,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AlertQueue {
    next_id: u64,
    alerts: Vec<Alert>,
}

impl AlertQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a plain alert.
    pub fn push(&mut self, title: impl Into<String>, variant: AlertVariant) -> AlertId {
        self.enqueue(title.into(), None, variant)
    }

    /// Queue a danger alert carrying the underlying error text.
    pub fn push_error(&mut self, title: impl Into<String>, detail: impl ToString) -> AlertId {
        self.enqueue(title.into(), Some(detail.to_string()), AlertVariant::Danger)
    }

    pub fn dismiss(&mut self, id: AlertId) {
        self.alerts.retain(|alert| alert.id != id);
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    fn enqueue(&mut self, title: String, detail: Option<String>, variant: AlertVariant) -> AlertId {
        self.next_id += 1;
        let id = AlertId(self.next_id);
        self.alerts.push(Alert {
            id,
            title,
            detail,
            variant,
        });
        id
    }
}

/// The `addAlert`/`addError` surface the panels report through.
pub trait Notifier {
    fn add_alert(&self, title: &str, variant: AlertVariant);
    fn add_error(&self, title: &str, detail: &str);
}

impl Notifier for std::cell::RefCell<AlertQueue> {
    fn add_alert(&self, title: &str, variant: AlertVariant) {
        self.borrow_mut().push(title, variant);
    }

    fn add_error(&self, title: &str, detail: &str) {
        self.borrow_mut().push_error(title, detail);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_strictly_increase() {
        let mut queue = AlertQueue::new();
        let ids: Vec<AlertId> = (0..100)
            .map(|i| queue.push(format!("alert {}", i), AlertVariant::Info))
            .collect();

        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(queue.len(), 100);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = AlertQueue::new();
        let first = queue.push("saved", AlertVariant::Success);
        let second = queue.push_error("failed", "boom");

        queue.dismiss(first);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.alerts()[0].id, second);
        assert_eq!(queue.alerts()[0].detail.as_deref(), Some("boom"));
        assert_eq!(queue.alerts()[0].variant, AlertVariant::Danger);
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut queue = AlertQueue::new();
        let first = queue.push("a", AlertVariant::Info);
        queue.dismiss(first);
        let second = queue.push("b", AlertVariant::Info);
        assert!(second > first);
    }
}
