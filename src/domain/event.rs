//! Core event domain types
//!
//! This module contains the event record shown on the board, its closed status enum,
//! the call-to-action derived from that status, and the catalog wrapper used by files.

use std::{
    fmt::{self, Display},
    str::FromStr
};

use serde::{Deserialize, Serialize};

/// A single event listed on the board.
///
/// Events are immutable values supplied by an event source. Only `status`, `category`,
/// `date`, `title`, `description`, `id` and `attendees` take part in derivation; the
/// remaining fields are display text.
///
/// # Example YAML structure
/// ```yaml
/// id: "3"
/// title: "Code Fiesta 2025"
/// description: "A celebration of all that fills the world of coding"
/// date: "January 15, 2025"
/// time: "9:00 AM - 6:00 PM"
/// location: "Tech Building - Multiple Labs"
/// category: "Competition"
/// status: upcoming
/// image: "https://images.example.com/fiesta.jpg"
/// attendees: 0
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Event {
    /// Unique opaque identifier
    pub id:               String,
    /// Display title, searched case-insensitively
    pub title:            String,
    /// Display description, searched case-insensitively
    pub description:      String,
    /// Calendar date, e.g. "2025-03-10" or "March 10, 2025"
    pub date:             String,
    /// Free-text time range
    #[serde(default)]
    pub time:             String,
    /// Free-text location
    #[serde(default)]
    pub location:         String,
    /// Open-ended category label
    pub category:         String,
    /// Lifecycle status; decides the section the event belongs to
    pub status:           EventStatus,
    /// Display media URL (not validated)
    #[serde(default)]
    pub image:            String,
    /// Optional attendee count; absent and zero both mean "nothing to show"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees:        Option<u32>,
    /// Optional registration link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>
}

impl Event {
    /// True for upcoming and ongoing events.
    pub fn is_current(&self) -> bool {
        self.status.is_current()
    }

    /// True for completed events.
    pub fn is_past(&self) -> bool {
        self.status == EventStatus::Completed
    }

    /// Attendee count worth displaying, if any.
    pub fn displayed_attendees(&self) -> Option<u32> {
        self.attendees.filter(|count| *count > 0)
    }

    pub fn call_to_action(&self) -> CallToAction {
        CallToAction::for_status(self.status)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Lifecycle status of an event.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed
}

impl EventStatus {
    pub const ALL: [EventStatus; 3] = [EventStatus::Upcoming, EventStatus::Ongoing, EventStatus::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed"
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, EventStatus::Upcoming | EventStatus::Ongoing)
    }
}

impl Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown event status '{}' (expected upcoming, ongoing or completed)", s))
    }
}

/// The action button offered for an event.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub label:   &'static str,
    /// Highlighted as the primary action
    pub primary: bool,
    pub enabled: bool
}

impl CallToAction {
    pub fn for_status(status: EventStatus) -> Self {
        match status {
            EventStatus::Upcoming => Self { label: "Register Now", primary: true, enabled: true },
            EventStatus::Ongoing => Self { label: "Join Now", primary: false, enabled: true },
            EventStatus::Completed => Self { label: "View Details", primary: false, enabled: false }
        }
    }
}

/// A catalog file: a list of events under an `events` key.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct EventCatalog {
    #[serde(default)]
    pub events: Vec<Event>
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::{Event, EventStatus};

    /// Builds an event with placeholder display fields.
    pub fn event(id: &str, status: EventStatus, date: &str, category: &str) -> Event {
        Event {
            id:               id.to_string(),
            title:            format!("Event {}", id),
            description:      format!("Description for event {}", id),
            date:             date.to_string(),
            time:             "10:00 AM - 12:00 PM".to_string(),
            location:         "Main Auditorium".to_string(),
            category:         category.to_string(),
            status,
            image:            String::new(),
            attendees:        None,
            registration_url: None
        }
    }

    pub fn titled(mut event: Event, title: &str, description: &str) -> Event {
        event.title = title.to_string();
        event.description = description.to_string();
        event
    }

    pub fn with_attendees(mut event: Event, attendees: u32) -> Event {
        event.attendees = Some(attendees);
        event
    }
}
