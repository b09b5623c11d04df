//! Subscription half of the notification channels.
//!
//! Thin wrappers around crossbeam receivers so UI layers can consume the
//! navigator's broadcast streams without depending on the channel crate.

use crossbeam_channel::Receiver;

use super::{Message, NavigatorSignal};

/// Receives one broadcast stream from the engine.
///
/// Each subscription sees the full stream in emission order, independently
/// of any other subscriber. Dropping a subscription detaches it; the
/// notifier prunes it on the next emission.
pub struct Subscription<T> {
    inner: Receiver<T>,
}

/// Subscription to the state-change signal stream
pub type SignalSubscription = Subscription<NavigatorSignal>;

/// Subscription to the informational message stream
pub type MessageSubscription = Subscription<Message>;

impl<T> Subscription<T> {
    pub(super) fn new(inner: Receiver<T>) -> Self {
        Self { inner }
    }

    /// Block until the next item is received
    pub fn recv(&self) -> Option<T> {
        self.inner.recv().ok()
    }

    /// Try to receive an item without blocking
    pub fn try_recv(&self) -> Option<T> {
        self.inner.try_recv().ok()
    }

    /// Drain everything received so far without blocking
    pub fn drain(&self) -> Vec<T> {
        self.inner.try_iter().collect()
    }

    /// Returns a blocking iterator over received items
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.inner.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn drain_returns_pending_items_in_order() {
        let (sender, receiver) = unbounded();
        let subscription = Subscription::new(receiver);

        sender.send(NavigatorSignal::Sets).unwrap();
        sender.send(NavigatorSignal::SetIndex).unwrap();

        assert_eq!(
            subscription.drain(),
            vec![NavigatorSignal::Sets, NavigatorSignal::SetIndex]
        );
        assert!(subscription.drain().is_empty());
    }

    #[test]
    fn try_recv_does_not_block_on_empty_stream() {
        let (_sender, receiver) = unbounded::<NavigatorSignal>();
        let subscription = Subscription::new(receiver);

        assert!(subscription.try_recv().is_none());
    }
}
