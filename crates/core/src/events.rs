//! Selection-change notification.
//!
//! Observers (the editor host, status bar widgets) subscribe to a broadcast
//! channel and receive a [`SelectionEvent`] whenever the chosen interpreter
//! actually changes. Slow or dropped subscribers never block the selector.

use crate::types::PythonInterpreter;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Buffered events per subscriber before the oldest are dropped.
const EVENT_CAPACITY: usize = 16;

/// Emitted when the selected interpreter changes.
///
/// `current` is `None` after the selection is cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<PythonInterpreter>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<PythonInterpreter>,
}

/// Fan-out for [`SelectionEvent`]s.
#[derive(Debug)]
pub struct SelectionNotifier {
    tx: broadcast::Sender<SelectionEvent>,
}

impl Default for SelectionNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionNotifier {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(EVENT_CAPACITY);
        Self { tx }
    }

    /// Subscribe to future selection changes.
    pub fn subscribe(&self) -> broadcast::Receiver<SelectionEvent> {
        self.tx.subscribe()
    }

    /// Publish an event. A send error only means there are no subscribers.
    pub fn emit(&self, event: SelectionEvent) {
        let _ = self.tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_receives_event() {
        let notifier = SelectionNotifier::new();
        let mut rx = notifier.subscribe();

        let event = SelectionEvent {
            previous: None,
            current: Some(PythonInterpreter::new("/usr/bin/python3")),
        };
        notifier.emit(event.clone());

        assert_eq!(rx.recv().await.unwrap(), event);
    }

    #[test]
    fn test_emit_without_subscribers_does_not_panic() {
        let notifier = SelectionNotifier::new();
        notifier.emit(SelectionEvent {
            previous: None,
            current: None,
        });
    }

    #[tokio::test]
    async fn test_late_subscriber_misses_earlier_events() {
        let notifier = SelectionNotifier::new();
        notifier.emit(SelectionEvent {
            previous: None,
            current: Some(PythonInterpreter::new("/usr/bin/python3")),
        });

        let mut rx = notifier.subscribe();
        assert!(rx.try_recv().is_err());
    }
}
