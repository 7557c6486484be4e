//! The base event and the type that routes it.

use std::any::Any;
use std::fmt;

use crate::context::EventContext;
use crate::handler::Handler;

/// Identifies what kind of occurrence an event is and knows how to announce
/// it to a handler.
///
/// The engine's own kinds live in [`NativeType`](crate::NativeType). Kinds
/// defined elsewhere implement this trait and are routed through the same
/// [`dispatch`] call site.
pub trait EventType: fmt::Debug + fmt::Display + Send + Sync {
    /// Stable name for logs.
    fn name(&self) -> &'static str;

    /// Whether events of this type may be dispatched.
    fn is_valid(&self) -> bool;

    /// Invoke exactly one method on `handler` for `event`.
    fn dispatch(&self, event: &dyn Event, handler: &mut dyn Handler);
}

/// One occurrence flowing through the engine.
pub trait Event: fmt::Debug + Send + Sync + 'static {
    fn event_type(&self) -> &dyn EventType;

    fn context(&self) -> &EventContext;

    /// Concrete access for extensions that need to recognise their own events.
    fn as_any(&self) -> &dyn Any;
}

/// The engine's single dispatch call site.
pub fn dispatch(event: &dyn Event, handler: &mut dyn Handler) {
    let event_type = event.event_type();
    tracing::trace!(event_type = event_type.name(), id = %event.context().id, "dispatch");
    event_type.dispatch(event, handler);
}
