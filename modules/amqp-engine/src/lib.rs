//! Interface boundary of the AMQP protocol engine.
//!
//! The engine owns connections, sessions, links and deliveries, and reports
//! what happens to them as a single stream of polymorphic events. This crate
//! carries only the surface that extensions build on: the base `Event`, the
//! `EventType` that routes an event to a `Handler`, the closed set of native
//! kinds, and a synchronous `Pipeline` that drains queued events.
//!
//! Every event goes through one call site, [`dispatch`], which asks the
//! event's type to announce it. Types defined outside this crate plug in by
//! implementing `EventType` themselves.

pub mod context;
pub mod event;
pub mod handler;
pub mod native;
pub mod pipeline;

pub use context::{Delivery, EventContext, LinkRef};
pub use event::{dispatch, Event, EventType};
pub use handler::Handler;
pub use native::{NativeEvent, NativeType};
pub use pipeline::Pipeline;
