//! Calendar port for application layer
//!
//! Defines the interface for writing events to the user's calendar.
//! The event shape follows the Google Calendar `events.insert` resource.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Calendar port errors
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("Calendar service unavailable")]
    ServiceUnavailable,

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Start or end of an event: a UTC instant tagged with a display timezone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    /// RFC 3339 instant
    pub date_time: String,
    /// IANA timezone name
    pub time_zone: String,
}

impl EventTime {
    /// Create an event time from an instant and a timezone name
    pub fn new(instant: DateTime<Utc>, time_zone: impl Into<String>) -> Self {
        Self {
            date_time: instant.to_rfc3339_opts(SecondsFormat::Millis, true),
            time_zone: time_zone.into(),
        }
    }
}

/// How a reminder is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderMethod {
    Email,
    Popup,
}

/// One reminder, `minutes` before the event start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderOverride {
    pub method: ReminderMethod,
    pub minutes: u32,
}

/// Reminder settings of an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventReminders {
    /// Use the calendar's default reminders instead of `overrides`
    pub use_default: bool,
    pub overrides: Vec<ReminderOverride>,
}

impl Default for EventReminders {
    fn default() -> Self {
        Self {
            use_default: true,
            overrides: Vec::new(),
        }
    }
}

/// New event request (for creating events)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    /// Event title
    pub summary: String,
    /// Event description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start: EventTime,
    pub end: EventTime,
    pub reminders: EventReminders,
}

impl NewEvent {
    /// Create a new event request with default reminders
    pub fn new(summary: impl Into<String>, start: EventTime, end: EventTime) -> Self {
        Self {
            summary: summary.into(),
            description: None,
            start,
            end,
            reminders: EventReminders::default(),
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the default reminders with an explicit list
    #[must_use]
    pub fn with_reminder(mut self, method: ReminderMethod, minutes: u32) -> Self {
        self.reminders.use_default = false;
        self.reminders
            .overrides
            .push(ReminderOverride { method, minutes });
        self
    }
}

/// Calendar port trait
///
/// Implemented by adapters that write to a calendar service.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CalendarPort: Send + Sync {
    /// Create a new event in the primary calendar
    ///
    /// # Returns
    /// The created event's ID
    async fn create_event(&self, event: &NewEvent) -> Result<String, CalendarError>;
}
