//! Application event bus.
//!
//! Decouples the board controllers from whatever renders or persists their
//! results. Controllers publish domain events; subscribers (UI layers,
//! persistence, diagnostics) react without the controllers knowing them.

mod bus;
mod events;

pub use bus::{event_bus, EventBus, EventBusError, EventFilter, SubscriptionId};
pub use events::{
    AppEvent, DragEvent, ErrorEvent, EventCategory, MeasurementEvent, StoreEvent, TokenEvent,
    ViewportEvent,
};
