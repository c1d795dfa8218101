//! Event bus implementation.
//!
//! One bus per process: a broadcast channel for async receivers plus
//! synchronous filtered handlers called on the publishing thread.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tokio::sync::broadcast;
use uuid::Uuid;

use super::events::{AppEvent, EventCategory};

/// Subscription handle for unsubscribing from events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    /// Create a new unique subscription ID
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Filter to receive only specific event types
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    /// Receive all events.
    #[default]
    All,
    /// Receive events matching any of these categories.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    /// Check if an event matches this filter
    pub fn matches(&self, event: &AppEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

/// Type alias for event handler functions
type EventHandler = Box<dyn Fn(AppEvent) + Send + Sync>;

/// Broadcast buffer size. Slow receivers lag past this many events.
const CHANNEL_CAPACITY: usize = 1024;

/// Error types for event bus operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum EventBusError {
    /// No subscribers are listening
    #[error("No active subscribers")]
    NoSubscribers,
    /// Channel is closed
    #[error("Event channel is closed")]
    ChannelClosed,
}

/// Central event bus for application-wide event distribution
pub struct EventBus {
    /// Broadcast channel sender
    sender: broadcast::Sender<AppEvent>,
    /// Registered synchronous handlers
    handlers: Arc<RwLock<HashMap<SubscriptionId, (EventFilter, EventHandler)>>>,
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            sender,
            handlers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Publish an event to all subscribers
    ///
    /// Returns the number of broadcast receivers that will receive the
    /// event, or an error if nothing at all is listening.
    pub fn publish(&self, event: AppEvent) -> Result<usize, EventBusError> {
        // Call synchronous handlers
        let handlers = self.handlers.read();
        for (_, (filter, handler)) in handlers.iter() {
            if filter.matches(&event) {
                handler(event.clone());
            }
        }

        // Send via broadcast channel for async receivers
        match self.sender.send(event) {
            Ok(count) => Ok(count),
            Err(_) => {
                // No receivers, but handlers may have been called
                if handlers.is_empty() {
                    Err(EventBusError::NoSubscribers)
                } else {
                    Ok(0)
                }
            }
        }
    }

    /// Subscribe to events with a synchronous handler
    ///
    /// The handler will be called on the publishing thread, so it should
    /// return quickly to avoid blocking event dispatch.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(AppEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        let mut handlers = self.handlers.write();
        handlers.insert(id, (filter, Box::new(handler)));
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Get a receiver for manual event polling
    ///
    /// This is useful for async contexts where you want to receive events
    /// in a tokio task.
    pub fn receiver(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    /// Unsubscribe from events
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.write();
        let removed = handlers.remove(&id).is_some();
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    /// Get the number of active subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Global event bus instance
static EVENT_BUS: OnceLock<EventBus> = OnceLock::new();

/// Get or initialize the global event bus
///
/// This is the primary way to access the event bus throughout the application.
pub fn event_bus() -> &'static EventBus {
    EVENT_BUS.get_or_init(EventBus::new)
}

/// Convenience macro to publish an event to the global event bus
#[macro_export]
macro_rules! emit {
    ($event:expr) => {
        $crate::event_bus::event_bus().publish($event)
    };
}

/// Convenience macro to subscribe to events on the global event bus
#[macro_export]
macro_rules! on_event {
    ($filter:expr, $handler:expr) => {
        $crate::event_bus::event_bus().subscribe($filter, $handler)
    };
}
