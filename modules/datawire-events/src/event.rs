//! The datawire event envelope.

use std::any::Any;

use amqp_engine::{Event, EventContext, EventType};
use datawire_common::Message;

use crate::handler::DatawireHandler;
use crate::kind::EventKind;

/// One occurrence of a datawire event.
///
/// Kind and payload are fixed at construction. The envelope is an engine
/// [`Event`], so it goes anywhere a native event goes.
#[derive(Debug, Clone, PartialEq)]
pub struct DatawireEvent {
    kind: EventKind,
    context: EventContext,
    message: Option<Message>,
}

impl DatawireEvent {
    /// A message-ready event carrying `message`.
    pub fn new_message(context: EventContext, message: Message) -> Self {
        Self {
            kind: EventKind::Message,
            context,
            message: Some(message),
        }
    }

    /// A sampling tick. Carries nothing beyond its context.
    pub fn sample(context: EventContext) -> Self {
        Self::new(EventKind::Sample, context)
    }

    /// An event of `kind` without payload.
    ///
    /// Any kind is accepted here, the guard included; dispatching a guard
    /// event panics.
    pub fn new(kind: EventKind, context: EventContext) -> Self {
        Self {
            kind,
            context,
            message: None,
        }
    }

    /// A copy of this event announced as `kind`. The message survives only
    /// when `kind` is [`EventKind::Message`].
    pub fn with_kind(&self, kind: EventKind) -> Self {
        Self {
            kind,
            context: self.context.clone(),
            message: match kind {
                EventKind::Message => self.message.clone(),
                _ => None,
            },
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn context(&self) -> &EventContext {
        &self.context
    }

    /// The decoded message. `None` for every kind but [`EventKind::Message`],
    /// and also for a `Message` event built without payload (through
    /// [`DatawireEvent::new`] or a redispatched native event).
    pub fn message(&self) -> Option<&Message> {
        match self.kind {
            EventKind::Message => self.message.as_ref(),
            _ => None,
        }
    }

    pub fn into_message(self) -> Option<Message> {
        match self.kind {
            EventKind::Message => self.message,
            _ => None,
        }
    }

    /// Announce this event to `handler` through its kind.
    ///
    /// # Panics
    ///
    /// If the event was built with [`EventKind::NotADatawireType`].
    pub fn dispatch<H: DatawireHandler + ?Sized>(&self, handler: &mut H) {
        self.kind.dispatch(self, handler)
    }
}

impl Event for DatawireEvent {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::kind_of;
    use amqp_engine::{NativeEvent, NativeType};
    use serde_json::json;

    #[test]
    fn kind_of_round_trips_every_constructed_kind() {
        for kind in EventKind::ALL {
            let event = DatawireEvent::new(kind, EventContext::new());
            assert_eq!(kind_of(&event), kind);
            assert_eq!(event.kind(), kind);
        }
    }

    #[test]
    fn native_events_are_not_datawire_events() {
        for native in NativeType::ALL {
            let event = NativeEvent::new(native, EventContext::new());
            assert_eq!(kind_of(&event), EventKind::NotADatawireType);
        }
    }

    #[test]
    fn sample_has_no_message() {
        let event = DatawireEvent::sample(EventContext::new());
        assert!(event.message().is_none());
        assert!(event.into_message().is_none());
    }

    #[test]
    fn message_accessor_returns_the_bound_message() {
        let msg = Message::new(json!({"samples": 0}));
        let event = DatawireEvent::new_message(EventContext::new(), msg.clone());
        assert_eq!(event.message(), Some(&msg));
        assert_eq!(event.into_message(), Some(msg));
    }

    #[test]
    fn message_kind_without_payload_has_no_message() {
        let event = DatawireEvent::new(EventKind::Message, EventContext::new());
        assert_eq!(event.kind(), EventKind::Message);
        assert!(event.message().is_none());
        assert!(event.into_message().is_none());
    }

    #[test]
    fn rekinding_drops_the_message_for_other_kinds() {
        let event = DatawireEvent::new_message(EventContext::new(), Message::new(json!(1)));
        let sample = event.with_kind(EventKind::Sample);
        assert_eq!(sample.kind(), EventKind::Sample);
        assert!(sample.message().is_none());
        assert_eq!(sample.context(), event.context());

        let again = event.with_kind(EventKind::Message);
        assert_eq!(again.message(), event.message());
    }

    #[test]
    fn engine_sees_the_kind_as_event_type() {
        let event = DatawireEvent::sample(EventContext::new());
        let base: &dyn Event = &event;
        assert_eq!(base.event_type().name(), "SAMPLE");
        assert!(base.event_type().is_valid());
    }
}
