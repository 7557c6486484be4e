//! Delivery → MESSAGE.

use amqp_engine::{dispatch, Delivery, Event, Handler};
use datawire_common::{DatawireError, DatawireResult, Message};
use datawire_events::DatawireEvent;
use tracing::{debug, warn};

/// Turns a raw delivery into a message.
pub trait Decode {
    fn decode(&self, delivery: &Delivery) -> DatawireResult<Message>;
}

impl<F> Decode for F
where
    F: Fn(&Delivery) -> DatawireResult<Message>,
{
    fn decode(&self, delivery: &Delivery) -> DatawireResult<Message> {
        self(delivery)
    }
}

/// Decodes payloads holding a JSON-encoded [`Message`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl Decode for JsonDecoder {
    fn decode(&self, delivery: &Delivery) -> DatawireResult<Message> {
        serde_json::from_slice(&delivery.payload).map_err(|e| DatawireError::Decode {
            tag: delivery.tag.clone(),
            reason: e.to_string(),
        })
    }
}

/// Delegating handler that announces each decodable delivery as a `MESSAGE`
/// event to its delegate, in place of the raw delivery.
///
/// Deliveries that fail to decode reach the delegate unchanged, as deliveries.
/// Everything else is forwarded as is.
pub struct Decoder<D, H> {
    decoder: D,
    delegate: H,
}

impl<D: Decode, H: Handler> Decoder<D, H> {
    pub fn new(decoder: D, delegate: H) -> Self {
        Self { decoder, delegate }
    }

    pub fn delegate(&self) -> &H {
        &self.delegate
    }

    pub fn delegate_mut(&mut self) -> &mut H {
        &mut self.delegate
    }

    pub fn into_delegate(self) -> H {
        self.delegate
    }

    /// Decode the delivery carried by `event` into a `MESSAGE` event with the
    /// same context.
    pub fn decode_event(&self, event: &dyn Event) -> DatawireResult<DatawireEvent> {
        let context = event.context();
        let delivery = context
            .delivery
            .as_ref()
            .ok_or(DatawireError::MissingDelivery)?;
        let message = self.decoder.decode(delivery)?;
        Ok(DatawireEvent::new_message(context.clone(), message))
    }
}

impl<D: Decode, H: Handler> Handler for Decoder<D, H> {
    fn on_unhandled(&mut self, event: &dyn Event) {
        dispatch(event, &mut self.delegate);
    }

    fn on_delivery(&mut self, event: &dyn Event) {
        match self.decode_event(event) {
            Ok(decoded) => {
                debug!(
                    link = event.context().link_name().unwrap_or_default(),
                    id = %event.context().id,
                    "Decoded delivery"
                );
                dispatch(&decoded, &mut self.delegate);
            }
            Err(e) => {
                warn!(error = %e, id = %event.context().id, "Forwarding undecoded delivery");
                dispatch(event, &mut self.delegate);
            }
        }
    }
}
