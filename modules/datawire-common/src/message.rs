//! Decoded message value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A message decoded from a delivery's payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub body: serde_json::Value,
}

impl Message {
    pub fn new(body: serde_json::Value) -> Self {
        Self {
            body,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let msg: Message = serde_json::from_value(json!({"body": {"samples": 3}})).unwrap();
        assert_eq!(msg.body["samples"], 3);
        assert!(msg.id.is_none());
        assert!(msg.properties.is_empty());
    }

    #[test]
    fn empty_fields_are_skipped_when_serialized() {
        let msg = Message::new(json!("woof")).with_subject("bark");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value, json!({"subject": "bark", "body": "woof"}));
    }
}
