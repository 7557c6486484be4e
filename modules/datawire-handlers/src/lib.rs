//! Producers of datawire events, built as delegating engine handlers.
//!
//! Each producer sits in front of a delegate handler, forwards every engine
//! event to it, and injects its own datawire events along the way:
//!
//! - [`Decoder`] turns deliveries into `MESSAGE` events.
//! - [`Sampler`] turns timer ticks into `SAMPLE` events, at most one per
//!   elapsed interval per link.
//!
//! Producers stack: `Sampler::new(Decoder::new(JsonDecoder, Adapter::new(app)))`.

pub mod decoder;
pub mod sampler;

pub use decoder::{Decode, Decoder, JsonDecoder};
pub use sampler::Sampler;
