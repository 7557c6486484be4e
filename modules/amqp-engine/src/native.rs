//! Events the engine itself produces.

use std::any::Any;
use std::fmt;

use crate::context::EventContext;
use crate::event::{Event, EventType};
use crate::handler::Handler;

/// The engine's own event kinds. Closed: extensions cannot add members here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeType {
    ConnectionInit,
    ConnectionRemoteOpen,
    SessionRemoteOpen,
    LinkRemoteOpen,
    LinkFlow,
    Delivery,
    TimerTask,
    ReactorQuiesced,
    TransportClosed,
}

impl NativeType {
    pub const ALL: [NativeType; 9] = [
        NativeType::ConnectionInit,
        NativeType::ConnectionRemoteOpen,
        NativeType::SessionRemoteOpen,
        NativeType::LinkRemoteOpen,
        NativeType::LinkFlow,
        NativeType::Delivery,
        NativeType::TimerTask,
        NativeType::ReactorQuiesced,
        NativeType::TransportClosed,
    ];
}

impl EventType for NativeType {
    fn name(&self) -> &'static str {
        match self {
            NativeType::ConnectionInit => "CONNECTION_INIT",
            NativeType::ConnectionRemoteOpen => "CONNECTION_REMOTE_OPEN",
            NativeType::SessionRemoteOpen => "SESSION_REMOTE_OPEN",
            NativeType::LinkRemoteOpen => "LINK_REMOTE_OPEN",
            NativeType::LinkFlow => "LINK_FLOW",
            NativeType::Delivery => "DELIVERY",
            NativeType::TimerTask => "TIMER_TASK",
            NativeType::ReactorQuiesced => "REACTOR_QUIESCED",
            NativeType::TransportClosed => "TRANSPORT_CLOSED",
        }
    }

    fn is_valid(&self) -> bool {
        true
    }

    fn dispatch(&self, event: &dyn Event, handler: &mut dyn Handler) {
        match self {
            NativeType::ConnectionInit => handler.on_connection_init(event),
            NativeType::ConnectionRemoteOpen => handler.on_connection_remote_open(event),
            NativeType::SessionRemoteOpen => handler.on_session_remote_open(event),
            NativeType::LinkRemoteOpen => handler.on_link_remote_open(event),
            NativeType::LinkFlow => handler.on_link_flow(event),
            NativeType::Delivery => handler.on_delivery(event),
            NativeType::TimerTask => handler.on_timer_task(event),
            NativeType::ReactorQuiesced => handler.on_reactor_quiesced(event),
            NativeType::TransportClosed => handler.on_transport_closed(event),
        }
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An event produced by the engine.
#[derive(Debug, Clone)]
pub struct NativeEvent {
    kind: NativeType,
    context: EventContext,
}

impl NativeEvent {
    pub fn new(kind: NativeType, context: EventContext) -> Self {
        Self { kind, context }
    }

    pub fn kind(&self) -> NativeType {
        self.kind
    }
}

impl Event for NativeEvent {
    fn event_type(&self) -> &dyn EventType {
        &self.kind
    }

    fn context(&self) -> &EventContext {
        &self.context
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
