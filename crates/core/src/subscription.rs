//! Scoped listener and observer lifetimes.
//!
//! Every event listener or visibility observer the page registers is wrapped
//! in a [`Subscription`] whose release action runs exactly once: when it is
//! released explicitly, dropped, or disposed with its [`SubscriptionScope`].

use std::fmt;

/// A registered listener or observer together with its release action.
pub struct Subscription {
    label: String,
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(label: impl Into<String>, release: impl FnOnce() + 'static) -> Self {
        Self {
            label: label.into(),
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    pub fn noop(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            release: None,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Run the release action now.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            tracing::trace!(subscription = %self.label, "released");
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("label", &self.label)
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Owns every subscription of one view and releases them together.
#[derive(Debug, Default)]
pub struct SubscriptionScope {
    subscriptions: Vec<Subscription>,
    disposed: bool,
}

impl SubscriptionScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a subscription. A scope that is already disposed
    /// releases it immediately.
    pub fn add(&mut self, subscription: Subscription) {
        if self.disposed {
            subscription.release();
        } else {
            self.subscriptions.push(subscription);
        }
    }

    /// Release every subscription, most recent first. Returns how many were
    /// released. Later calls release nothing.
    pub fn dispose(&mut self) -> usize {
        self.disposed = true;
        let released = self.subscriptions.len();
        while let Some(subscription) = self.subscriptions.pop() {
            subscription.release();
        }
        released
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl Drop for SubscriptionScope {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn counting(label: &str, log: &Rc<RefCell<Vec<String>>>) -> Subscription {
        let log = Rc::clone(log);
        let name = label.to_string();
        Subscription::new(label, move || log.borrow_mut().push(name))
    }

    #[test]
    fn given_subscription_when_dropped_then_released_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let subscription = counting("scroll", &log);
        assert_eq!(subscription.label(), "scroll");
        drop(subscription);
        assert_eq!(*log.borrow(), vec!["scroll".to_string()]);
    }

    #[test]
    fn given_scope_when_disposed_then_all_released_in_reverse_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scope = SubscriptionScope::new();
        scope.add(counting("scroll", &log));
        scope.add(counting("resize", &log));
        scope.add(Subscription::noop("noop"));

        assert!(!scope.is_disposed());
        assert_eq!(scope.dispose(), 3);
        assert!(scope.is_disposed());
        assert_eq!(*log.borrow(), vec!["resize".to_string(), "scroll".to_string()]);
        assert_eq!(scope.dispose(), 0);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn given_disposed_scope_when_added_then_released_immediately() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scope = SubscriptionScope::new();
        scope.dispose();
        scope.add(counting("late", &log));
        assert!(scope.is_empty());
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn given_scope_when_dropped_then_released() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let mut scope = SubscriptionScope::new();
            scope.add(counting("keydown", &log));
        }
        assert_eq!(log.borrow().len(), 1);
    }
}
