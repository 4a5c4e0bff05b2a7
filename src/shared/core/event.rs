use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    Create,
    Delete,
    /// Any type string this service does not know how to apply, kept as received.
    Unknown(String),
}

impl From<String> for EventType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "CREATE" => EventType::Create,
            "DELETE" => EventType::Delete,
            _ => EventType::Unknown(raw),
        }
    }
}

impl From<EventType> for String {
    fn from(event_type: EventType) -> Self {
        event_type.to_string()
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Create => f.write_str("CREATE"),
            EventType::Delete => f.write_str("DELETE"),
            EventType::Unknown(raw) => f.write_str(raw),
        }
    }
}

/// Envelope handed from the composite write path to a store channel.
///
/// A CREATE always carries data, a DELETE never does. Events built through
/// `create` and `delete` uphold that; events decoded from the wire are checked
/// again when applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event<K, T> {
    event_type: EventType,
    key: K,
    data: Option<T>,
    created_at: DateTime<Utc>,
}

impl<K, T> Event<K, T> {
    pub fn create(key: K, data: T) -> Self {
        Self {
            event_type: EventType::Create,
            key,
            data: Some(data),
            created_at: Utc::now(),
        }
    }

    pub fn delete(key: K) -> Self {
        Self {
            event_type: EventType::Delete,
            key,
            data: None,
            created_at: Utc::now(),
        }
    }

    pub fn event_type(&self) -> EventType {
        self.event_type.clone()
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn into_parts(self) -> (EventType, K, Option<T>) {
        (self.event_type, self.key, self.data)
    }
}
