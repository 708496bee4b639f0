//! Broadcast event bus.

use std::collections::HashMap;

use tokio::sync::broadcast;

use super::{Event, Topic};

/// Topic-based event bus.
///
/// Channels are created once per topic at construction, so publishing
/// never allocates and subscribers only receive the topic they asked
/// for. Publishing is best-effort: an event with no subscribers is
/// dropped silently, and a lagging subscriber loses the oldest events
/// rather than blocking the session.
pub struct EventBus {
    channels: HashMap<Topic, broadcast::Sender<Event>>,
}

impl EventBus {
    const DEFAULT_CAPACITY: usize = 256;

    /// Create a bus with the default per-topic capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a bus with the given per-topic channel capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut channels = HashMap::new();
        channels.insert(Topic::Battle, broadcast::channel(capacity).0);
        channels.insert(Topic::Session, broadcast::channel(capacity).0);
        Self { channels }
    }

    /// Publish an event to its topic.
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if let Some(tx) = self.channels.get(&topic)
            && tx.send(event).is_err()
        {
            // No subscribers for this topic; normal during headless runs.
            tracing::trace!(?topic, "event dropped: no subscribers");
        }
    }

    /// Subscribe to a topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels
            .get(&topic)
            .expect("all topics are created at construction")
            .subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::SessionEvent;

    #[test]
    fn subscriber_receives_only_its_topic() {
        let bus = EventBus::new();
        let mut session_rx = bus.subscribe(Topic::Session);
        let mut battle_rx = bus.subscribe(Topic::Battle);

        bus.publish(Event::Session(SessionEvent::ProgressReset));

        assert_eq!(
            session_rx.try_recv().unwrap(),
            Event::Session(SessionEvent::ProgressReset)
        );
        assert!(battle_rx.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::new();
        bus.publish(Event::Session(SessionEvent::ProgressReset));
    }
}
