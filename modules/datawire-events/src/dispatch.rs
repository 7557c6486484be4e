//! Double dispatch: the kind picks the handler method.

use amqp_engine::{Event, EventType, Handler};
use tracing::trace;

use crate::event::DatawireEvent;
use crate::handler::DatawireHandler;
use crate::kind::{as_datawire, EventKind};

fn ensure_dispatchable(kind: EventKind) {
    assert!(
        kind.is_valid(),
        "{kind} is a guard value and must never be dispatched"
    );
}

impl EventKind {
    /// Announce `event` to `handler` as this kind. Exactly one handler method
    /// runs: the one specialised for this kind, which defaults to
    /// `on_unhandled`.
    ///
    /// # Panics
    ///
    /// On [`EventKind::NotADatawireType`], before touching the handler.
    pub fn dispatch<H: DatawireHandler + ?Sized>(self, event: &DatawireEvent, handler: &mut H) {
        ensure_dispatchable(self);
        trace!(kind = %self, id = %event.context().id, "datawire dispatch");
        match self {
            EventKind::Message => handler.on_message(event),
            EventKind::Sample => handler.on_sample(event),
            EventKind::NotADatawireType => unreachable!("guard rejected above"),
        }
    }
}

/// Engine-side entry point. A plain engine handler has no datawire methods,
/// so it is announced the event through `on_unhandled`; an [`Adapter`]
/// recovers the specialised method from there.
///
/// [`Adapter`]: crate::Adapter
impl EventType for EventKind {
    fn name(&self) -> &'static str {
        EventKind::name(*self)
    }

    fn is_valid(&self) -> bool {
        EventKind::is_valid(*self)
    }

    fn dispatch(&self, event: &dyn Event, handler: &mut dyn Handler) {
        ensure_dispatchable(*self);
        trace!(kind = %self, id = %event.context().id, "datawire dispatch via engine");
        handler.on_unhandled(event);
    }
}

/// Re-announce `event` to `handler` as `kind`, through the engine's dispatch
/// call site.
///
/// The context is kept. A datawire message survives when re-announced as a
/// message; anything else is re-announced without payload.
///
/// # Panics
///
/// On [`EventKind::NotADatawireType`], before touching the handler.
pub fn redispatch(event: &dyn Event, kind: EventKind, handler: &mut dyn Handler) {
    ensure_dispatchable(kind);
    let announced = match as_datawire(event) {
        Some(datawire) => datawire.with_kind(kind),
        None => DatawireEvent::new(kind, event.context().clone()),
    };
    amqp_engine::dispatch(&announced, handler);
}
