//! Event content printed on cards
//!
//! Stored participants come in two shapes: a role map next to the event's
//! `eventType` (`{"bride": "Anna", "groom": "Ben"}`), or an object carrying its
//! own `eventType` tag. Both are read leniently: missing roles are empty,
//! numbers are read as text, and values of any other type are ignored, so a
//! malformed participant never rejects the whole event.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use theme_catalog::Participants;

/// The stored event fields a batch is printed from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredEvent")]
pub struct EventFields {
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub location: Option<String>,
    /// Raw event-type key; unknown values use the `other` theme
    pub event_type: String,
    pub participants: Participants,
}

impl EventFields {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            description: None,
            date,
            location: None,
            event_type: String::new(),
            participants: Participants::Other,
        }
    }

    pub fn with_event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    pub fn with_participants(mut self, participants: Participants) -> Self {
        self.participants = participants;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// Event JSON as stored, before participants are interpreted
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredEvent {
    title: String,
    #[serde(default)]
    description: Option<String>,
    date: NaiveDate,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    event_type: String,
    #[serde(default)]
    participants: Option<Value>,
}

impl From<StoredEvent> for EventFields {
    fn from(stored: StoredEvent) -> Self {
        let participants = read_participants(&stored.event_type, stored.participants);
        Self {
            title: stored.title,
            description: stored.description,
            date: stored.date,
            location: stored.location,
            event_type: stored.event_type,
            participants,
        }
    }
}

/// An inner `eventType` tag wins over the event's own type
fn read_participants(event_type: &str, value: Option<Value>) -> Participants {
    let roles = match value {
        None | Some(Value::Null) => return Participants::Other,
        Some(Value::Object(roles)) => roles,
        Some(other) => {
            tracing::debug!(
                target: "card_batch::event",
                value = %other,
                "participants are not an object, ignoring them"
            );
            return Participants::Other;
        }
    };

    let tag = roles
        .get("eventType")
        .and_then(Value::as_str)
        .unwrap_or(event_type)
        .to_string();

    let roles: HashMap<String, String> = roles
        .into_iter()
        .filter_map(|(role, value)| match value {
            Value::String(text) => Some((role, text)),
            Value::Number(number) => Some((role, number.to_string())),
            _ => None,
        })
        .collect();

    Participants::from_roles(&tag, &roles)
}
