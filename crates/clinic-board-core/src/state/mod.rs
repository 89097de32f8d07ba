//! Dashboard state containers.
//!
//! Three independent leaves: [`SessionState`], [`PreferenceState`] and
//! [`RosterState`]. None of them knows about the others. Containers that
//! persist take the shared [`Database`](crate::db::Database) by reference on
//! each call rather than owning it.
//!
//! Consumers that need change notification call `subscribe()` on a container
//! and drain the returned channel.

mod preference;
mod roster;
mod session;

pub use preference::*;
pub use roster::*;
pub use session::*;

use std::sync::mpsc::{channel, Receiver, Sender};

use thiserror::Error;

/// State container errors.
#[derive(Error, Debug)]
pub enum StateError {
    #[error("Storage error: {0}")]
    Storage(#[from] crate::db::DbError),
}

pub type StateResult<T> = Result<T, StateError>;

/// A change emitted by a state container.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeEvent {
    /// Login status or user name changed
    SessionChanged { is_logged_in: bool },
    /// Login modal opened or closed
    LoginModalChanged { visible: bool },
    /// Dark mode flag applied
    DarkModeChanged { is_dark_mode: bool },
    /// Today's doctors were recomputed
    RosterRefreshed { count: usize },
    /// Rotation cursor moved
    CursorMoved { index: usize },
}

/// Fan-out of change events to subscribers.
///
/// Subscribers whose receiver was dropped are pruned on the next notify.
#[derive(Debug, Default)]
pub struct Notifier {
    subscribers: Vec<Sender<ChangeEvent>>,
}

impl Notifier {
    /// Register a new subscriber.
    pub fn subscribe(&mut self) -> Receiver<ChangeEvent> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    /// Number of live subscribers as of the last notify.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub(crate) fn notify(&mut self, event: ChangeEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_reaches_every_subscriber() {
        let mut notifier = Notifier::default();
        let a = notifier.subscribe();
        let b = notifier.subscribe();

        notifier.notify(ChangeEvent::CursorMoved { index: 2 });

        assert_eq!(a.try_recv().unwrap(), ChangeEvent::CursorMoved { index: 2 });
        assert_eq!(b.try_recv().unwrap(), ChangeEvent::CursorMoved { index: 2 });
    }

    #[test]
    fn test_dropped_subscribers_pruned() {
        let mut notifier = Notifier::default();
        let kept = notifier.subscribe();
        drop(notifier.subscribe());

        notifier.notify(ChangeEvent::RosterRefreshed { count: 0 });

        assert_eq!(notifier.subscriber_count(), 1);
        assert!(kept.try_recv().is_ok());
    }
}
