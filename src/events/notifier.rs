//! Broadcast side of the notification channels.

use std::sync::Mutex;

use crossbeam_channel::{unbounded, Sender};

use super::{Message, NavigatorSignal, Subscription};

/// Synchronous multi-subscriber broadcast of navigator state changes.
///
/// Every subscriber receives every signal, in emission order. Emission is
/// non-blocking (unbounded channels) and completes before the mutating call
/// that triggered it returns, so a mutation and its signal sequence are one
/// atomic step from an observer's point of view.
///
/// With no subscribers, emission is a no-op; an engine without observers
/// still runs every mutation to completion.
pub struct ChangeNotifier {
    signal_subscribers: Mutex<Vec<Sender<NavigatorSignal>>>,
    message_subscribers: Mutex<Vec<Sender<Message>>>,
}

impl ChangeNotifier {
    /// Create a notifier with no subscribers
    pub fn new() -> Self {
        Self {
            signal_subscribers: Mutex::new(Vec::new()),
            message_subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Subscribe to the state-change signal stream
    pub fn subscribe(&self) -> Subscription<NavigatorSignal> {
        let (sender, receiver) = unbounded();
        lock_unpoisoned(&self.signal_subscribers).push(sender);
        Subscription::new(receiver)
    }

    /// Subscribe to the informational message stream
    pub fn subscribe_messages(&self) -> Subscription<Message> {
        let (sender, receiver) = unbounded();
        lock_unpoisoned(&self.message_subscribers).push(sender);
        Subscription::new(receiver)
    }

    /// Broadcast one state-change signal to every live subscriber.
    ///
    /// Subscribers whose receiving end was dropped are pruned here.
    pub fn emit(&self, signal: NavigatorSignal) {
        lock_unpoisoned(&self.signal_subscribers)
            .retain(|subscriber| subscriber.send(signal).is_ok());
    }

    /// Emit a sequence of signals in order
    pub fn emit_all(&self, signals: &[NavigatorSignal]) {
        for signal in signals {
            self.emit(*signal);
        }
    }

    /// Post one notice to the informational message stream
    pub fn post(&self, text: impl Into<String>) {
        let message = Message::new(text);
        lock_unpoisoned(&self.message_subscribers)
            .retain(|subscriber| subscriber.send(message.clone()).is_ok());
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Recovers the guard when a panicking subscriber thread poisoned the lock.
/// The subscriber lists hold no invariant beyond membership, so the data is
/// always safe to reuse.
fn lock_unpoisoned<'a, T>(lock: &'a Mutex<T>) -> std::sync::MutexGuard<'a, T> {
    lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
