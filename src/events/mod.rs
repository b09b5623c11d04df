//! # Events Module
//!
//! Change notification for GUI-ready state observation.
//!
//! ## Design
//! The navigator broadcasts two streams through channels, allowing any UI
//! (CLI, GUI, web) to subscribe:
//! - [`NavigatorSignal`] - the fixed five-name vocabulary of state-change
//!   signals; the emission order per mutation is part of the engine contract
//! - [`Message`] - a separate informational stream for human-readable notices
//!
//! Signals carry no payload. Observers re-read navigator state after each
//! signal, property-changed style, so a signal's meaning is "this derived
//! property may have a new value".
//!
//! ## Example
//! ```rust,ignore
//! let signals = navigator.notifier().subscribe();
//!
//! // In a separate thread, listen for signals
//! std::thread::spawn(move || {
//!     for signal in signals.iter() {
//!         match signal {
//!             NavigatorSignal::CurrentEntry => refresh_preview(),
//!             NavigatorSignal::Sets => rebuild_set_list(),
//!             _ => {}
//!         }
//!     }
//! });
//! ```

mod channel;
mod notifier;
mod types;

pub use channel::{MessageSubscription, SignalSubscription, Subscription};
pub use notifier::ChangeNotifier;
pub use types::{Message, NavigatorSignal};
