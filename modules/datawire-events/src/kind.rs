//! The kind registry.

use std::fmt;
use std::str::FromStr;

use amqp_engine::Event;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::event::DatawireEvent;

/// Event kinds generated by datawire.
///
/// Ordered by declaration. `NotADatawireType` is the guard: it is what
/// [`kind_of`] answers for foreign events and it is never dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    /// A message was decoded from a delivery.
    Message,
    /// The next sampling interval for a link has elapsed.
    Sample,
    /// Guard value for events that datawire did not produce.
    NotADatawireType,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown datawire event kind: {0}")]
pub struct UnknownKind(pub String);

impl EventKind {
    pub const ALL: [EventKind; 3] = [
        EventKind::Message,
        EventKind::Sample,
        EventKind::NotADatawireType,
    ];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            EventKind::Message => "MESSAGE",
            EventKind::Sample => "SAMPLE",
            EventKind::NotADatawireType => "NOT_A_DATAWIRE_TYPE",
        }
    }

    /// False only for the guard.
    pub fn is_valid(self) -> bool {
        self != EventKind::NotADatawireType
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// The datawire envelope behind `event`, if it is one.
pub fn as_datawire(event: &dyn Event) -> Option<&DatawireEvent> {
    event.as_any().downcast_ref::<DatawireEvent>()
}

/// Kind of any engine event: the datawire kind it was produced with, or
/// [`EventKind::NotADatawireType`] for everything else. Never fails.
///
/// Meant for `match kind_of(event)` inside `on_unhandled`.
pub fn kind_of(event: &dyn Event) -> EventKind {
    as_datawire(event).map_or(EventKind::NotADatawireType, DatawireEvent::kind)
}
