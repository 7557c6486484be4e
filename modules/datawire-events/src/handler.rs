//! Handler capability for datawire events.

use amqp_engine::{Event, Handler};

use crate::event::DatawireEvent;
use crate::kind::as_datawire;

/// An engine [`Handler`] that also understands datawire kinds.
///
/// Each method defaults to `on_unhandled`, so implementing none of them is
/// valid. Inside `on_unhandled`, [`kind_of`](crate::kind_of) tells datawire
/// events apart from native ones.
///
/// The engine only knows [`Handler`]. Handed straight to
/// `amqp_engine::dispatch` or a `Pipeline`, a datawire handler receives
/// datawire events in `on_unhandled`, never in `on_message`/`on_sample`.
/// Wrap it in [`Adapter`] for the engine path; [`DatawireEvent::dispatch`]
/// reaches the specialised methods directly.
pub trait DatawireHandler: Handler {
    fn on_message(&mut self, event: &DatawireEvent) {
        self.on_unhandled(event)
    }

    fn on_sample(&mut self, event: &DatawireEvent) {
        self.on_unhandled(event)
    }
}

impl<H: DatawireHandler + ?Sized> DatawireHandler for &mut H {
    fn on_message(&mut self, event: &DatawireEvent) {
        (**self).on_message(event)
    }

    fn on_sample(&mut self, event: &DatawireEvent) {
        (**self).on_sample(event)
    }
}

impl<H: DatawireHandler + ?Sized> DatawireHandler for Box<H> {
    fn on_message(&mut self, event: &DatawireEvent) {
        (**self).on_message(event)
    }

    fn on_sample(&mut self, event: &DatawireEvent) {
        (**self).on_sample(event)
    }
}

/// Plugs a [`DatawireHandler`] into the engine.
///
/// The engine announces datawire events through `on_unhandled`; the adapter
/// hands them back to their kind, which calls the specialised method on the
/// inner handler. Native callbacks pass straight through.
#[derive(Debug, Default)]
pub struct Adapter<H> {
    inner: H,
}

impl<H: DatawireHandler> Adapter<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut H {
        &mut self.inner
    }

    pub fn into_inner(self) -> H {
        self.inner
    }
}

macro_rules! pass_through {
    ($($method:ident),* $(,)?) => {
        $(
            fn $method(&mut self, event: &dyn Event) {
                self.inner.$method(event)
            }
        )*
    };
}

impl<H: DatawireHandler> Handler for Adapter<H> {
    fn on_unhandled(&mut self, event: &dyn Event) {
        match as_datawire(event) {
            Some(datawire) => datawire.dispatch(&mut self.inner),
            None => self.inner.on_unhandled(event),
        }
    }

    pass_through!(
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
