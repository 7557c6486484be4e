//! The handler capability events are routed to.

use crate::event::Event;

/// Receives events from the engine.
///
/// `on_unhandled` is the only required method. Every native callback defaults
/// to it, so a handler overrides just the callbacks it cares about. Events of
/// types the engine does not know also arrive here.
pub trait Handler {
    fn on_unhandled(&mut self, event: &dyn Event);

    fn on_connection_init(&mut self, event: &dyn Event) {
        self.on_unhandled(event)
    }

    fn on_connection_remote_open(&mut self, event: &dyn Event) {
        self.on_unhandled(event)
    }

    fn on_session_remote_open(&mut self, event: &dyn Event) {
        self.on_unhandled(event)
    }

    fn on_link_remote_open(&mut self, event: &dyn Event) {
        self.on_unhandled(event)
    }

    fn on_link_flow(&mut self, event: &dyn Event) {
        self.on_unhandled(event)
    }

    fn on_delivery(&mut self, event: &dyn Event) {
        self.on_unhandled(event)
    }

    fn on_timer_task(&mut self, event: &dyn Event) {
        self.on_unhandled(event)
    }

    fn on_reactor_quiesced(&mut self, event: &dyn Event) {
        self.on_unhandled(event)
    }

    fn on_transport_closed(&mut self, event: &dyn Event) {
        self.on_unhandled(event)
    }
}

// ---------------------------------------------------------------------------
// Forwarding impls: delegating handlers may borrow or box their delegate
// ---------------------------------------------------------------------------

macro_rules! forward_handler {
    ($($method:ident),* $(,)?) => {
        $(
            fn $method(&mut self, event: &dyn Event) {
                (**self).$method(event)
            }
        )*
    };
}

impl<H: Handler + ?Sized> Handler for &mut H {
    forward_handler!(
        on_unhandled,
        on_connection_init,
        on_connection_remote_open,
        on_session_remote_open,
        on_link_remote_open,
        on_link_flow,
        on_delivery,
        on_timer_task,
        on_reactor_quiesced,
        on_transport_closed,
    );
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    forward_handler!(
        on_unhandled,
        on_connection_init,
        on_connection_remote_open,
        on_session_remote_open,
        on_link_remote_open,
        on_link_flow,
        on_delivery,
        on_timer_task,
        on_reactor_quiesced,
        on_transport_closed,
    );
}
