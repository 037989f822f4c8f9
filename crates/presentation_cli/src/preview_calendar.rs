//! Calendar port that prints events instead of storing them

use std::io::{self, Write};

use application::{CalendarError, CalendarPort, NewEvent};
use async_trait::async_trait;
use tracing::debug;

/// Identifier returned for previewed events
pub const PREVIEW_EVENT_ID: &str = "preview";

/// Writes each event to stdout as pretty JSON
#[derive(Debug, Default)]
pub struct PreviewCalendar;

#[async_trait]
impl CalendarPort for PreviewCalendar {
    async fn create_event(&self, event: &NewEvent) -> Result<String, CalendarError> {
        let json = serde_json::to_string_pretty(event)
            .map_err(|e| CalendarError::OperationFailed(e.to_string()))?;

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "Calendar event:\n{json}")
            .map_err(|e| CalendarError::OperationFailed(e.to_string()))?;

        debug!(summary = %event.summary, "Previewed calendar event");
        Ok(PREVIEW_EVENT_ID.to_string())
    }
}
