//! Signal and message type definitions.

use serde::{Deserialize, Serialize};

/// State-change signals emitted by the navigator.
///
/// This is the fixed vocabulary the presentation layer binds to. Signals
/// carry no payload; after receiving one, an observer re-reads the named
/// navigator property. The per-mutation emission order is a contract:
///
/// | mutation                     | sequence                                               |
/// |------------------------------|--------------------------------------------------------|
/// | `set_duplicates` / `refresh` | `Sets`, `SetIndex`, `CurrentSet`, `EntryIndex`, `CurrentEntry` |
/// | `select_set`                 | `SetIndex`, `CurrentSet`, `EntryIndex`, `CurrentEntry` |
/// | `select_entry`               | `EntryIndex`, `CurrentEntry`                           |
///
/// A replacement emits all five even when the cursor did not numerically
/// move: the replaced collection is a new identity, and observers must not
/// assume the old one is reusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigatorSignal {
    /// The collection of duplicate sets was wholesale replaced
    Sets,
    /// The set cursor changed
    SetIndex,
    /// The derived current set may have changed
    CurrentSet,
    /// The entry cursor changed
    EntryIndex,
    /// The derived current entry may have changed
    CurrentEntry,
}

/// One notice on the informational message stream.
///
/// Human-readable, presentation-facing text. Separate from the signal
/// stream so observers binding to state changes never have to filter
/// prose out of the contract sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The notice text
    pub text: String,
}

impl Message {
    /// Create a new message
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signals_are_serializable() {
        let json = serde_json::to_string(&NavigatorSignal::CurrentEntry).unwrap();
        let back: NavigatorSignal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NavigatorSignal::CurrentEntry);
    }

    #[test]
    fn message_displays_its_text() {
        let message = Message::new("duplicates recomputed from catalog");
        assert_eq!(message.to_string(), "duplicates recomputed from catalog");
    }
}
