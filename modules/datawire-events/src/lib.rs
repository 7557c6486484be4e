//! Datawire's own event kinds, riding on the engine's dispatch pipeline.
//!
//! The engine's kind enumeration is closed, so datawire keeps a parallel one,
//! [`EventKind`], with a guard member that stands for "not a datawire event".
//! A [`DatawireEvent`] is an ordinary engine `Event` whose type is an
//! `EventKind`, so it can be queued and dispatched like any native event.
//!
//! Routing is a double dispatch: the kind decides which [`DatawireHandler`]
//! method announces the event. Handlers that don't specialise a kind get
//! `on_unhandled`, and can call [`kind_of`] there to find out what arrived.

pub mod dispatch;
pub mod event;
pub mod handler;
pub mod kind;

pub use dispatch::redispatch;
pub use event::DatawireEvent;
pub use handler::{Adapter, DatawireHandler};
pub use kind::{as_datawire, kind_of, EventKind, UnknownKind};
