//! Base attributes every engine event carries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where and when an event happened. The engine fills this in for native
/// events; extension events copy it from the event that triggered them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventContext {
    pub id: Uuid,
    pub ts: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Delivery>,
}

/// A link as seen from an event: its name and, once known, the remote address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// A unit of transfer on a link. The payload is the raw, still-encoded message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub tag: String,
    pub link: String,
    pub payload: Vec<u8>,
}

impl EventContext {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            ts: Utc::now(),
            connection: None,
            link: None,
            delivery: None,
        }
    }

    pub fn at(mut self, ts: DateTime<Utc>) -> Self {
        self.ts = ts;
        self
    }

    pub fn with_connection(mut self, connection: impl Into<String>) -> Self {
        self.connection = Some(connection.into());
        self
    }

    pub fn with_link(mut self, link: LinkRef) -> Self {
        self.link = Some(link);
        self
    }

    /// Attach a delivery. Also sets the link when none is set yet.
    pub fn with_delivery(mut self, delivery: Delivery) -> Self {
        if self.link.is_none() {
            self.link = Some(LinkRef::new(delivery.link.clone()));
        }
        self.delivery = Some(delivery);
        self
    }

    pub fn link_name(&self) -> Option<&str> {
        self.link.as_ref().map(|l| l.name.as_str())
    }
}

impl Default for EventContext {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

impl Delivery {
    pub fn new(tag: impl Into<String>, link: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            tag: tag.into(),
            link: link.into(),
            payload: payload.into(),
        }
    }
}
