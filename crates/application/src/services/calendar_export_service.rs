//! Calendar export service
//!
//! Turns a computed route into a calendar event starting at the departure
//! time and lasting as long as the drive, shown in the origin's timezone.

use std::{fmt, sync::Arc};

use chrono::{DateTime, TimeDelta, Utc};
use domain::Timezone;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{
        AuthProvider, CalendarError, CalendarPort, EventTime, NewEvent, ReminderMethod,
        TimezonePort,
    },
    services::RoutePlan,
};

/// Title of exported route events
pub const EVENT_SUMMARY: &str = "Driving Route";

/// Description of exported route events
pub const EVENT_DESCRIPTION: &str = "Your planned driving route";

/// Email reminder, one day ahead
pub const EMAIL_REMINDER_MINUTES: u32 = 24 * 60;

/// Popup reminder shortly before departure
pub const POPUP_REMINDER_MINUTES: u32 = 10;

/// Build the event for a drive of `duration_seconds` leaving at `departure`
///
/// # Errors
///
/// Returns `InvalidResponse` when the arrival time is not representable.
pub fn route_event(
    departure: DateTime<Utc>,
    duration_seconds: u64,
    timezone: &Timezone,
) -> Result<NewEvent, ApplicationError> {
    let arrival = i64::try_from(duration_seconds)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .and_then(|d| departure.checked_add_signed(d))
        .ok_or_else(|| ApplicationError::InvalidResponse {
            message: format!("route duration {duration_seconds}s is out of range"),
        })?;

    Ok(NewEvent::new(
        EVENT_SUMMARY,
        EventTime::new(departure, timezone.as_str()),
        EventTime::new(arrival, timezone.as_str()),
    )
    .with_description(EVENT_DESCRIPTION)
    .with_reminder(ReminderMethod::Email, EMAIL_REMINDER_MINUTES)
    .with_reminder(ReminderMethod::Popup, POPUP_REMINDER_MINUTES))
}

/// Service exporting route plans to the user's calendar
pub struct CalendarExportService {
    calendar: Arc<dyn CalendarPort>,
    timezone: Arc<dyn TimezonePort>,
    auth: Arc<dyn AuthProvider>,
}

impl fmt::Debug for CalendarExportService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarExportService")
            .field("signed_in", &self.auth.is_signed_in())
            .finish_non_exhaustive()
    }
}

impl CalendarExportService {
    /// Create a new calendar export service
    pub fn new(
        calendar: Arc<dyn CalendarPort>,
        timezone: Arc<dyn TimezonePort>,
        auth: Arc<dyn AuthProvider>,
    ) -> Self {
        Self {
            calendar,
            timezone,
            auth,
        }
    }

    /// Timezone of the route origin at departure, UTC if the lookup fails
    #[instrument(skip(self, plan), fields(sequence = plan.sequence))]
    pub async fn origin_timezone(&self, plan: &RoutePlan, departure: DateTime<Utc>) -> Timezone {
        match self.timezone.lookup(plan.request.origin(), departure).await {
            Ok(tz) => {
                debug!(timezone = %tz.as_str(), "Resolved origin timezone");
                tz
            },
            Err(e) => {
                warn!(error = %e, "Timezone lookup failed, falling back to UTC");
                Timezone::utc()
            },
        }
    }

    /// Build the event for a plan without writing it anywhere
    ///
    /// A plan without a departure time leaves "now".
    pub async fn build_event(&self, plan: &RoutePlan) -> Result<NewEvent, ApplicationError> {
        let departure = plan.request.departure_time().unwrap_or_else(Utc::now);
        let timezone = self.origin_timezone(plan, departure).await;
        route_event(departure, plan.result.duration_seconds, &timezone)
    }

    /// Write the plan to the calendar
    ///
    /// # Returns
    /// The created event's ID
    #[instrument(skip(self, plan), fields(sequence = plan.sequence))]
    pub async fn export(&self, plan: &RoutePlan) -> Result<String, ApplicationError> {
        if !self.auth.is_signed_in() {
            return Err(ApplicationError::NotAuthorized(
                "calendar export requires a signed-in session".to_string(),
            ));
        }

        let event = self.build_event(plan).await?;
        let id = self
            .calendar
            .create_event(&event)
            .await
            .map_err(map_error)?;

        info!(event_id = %id, "Route exported to calendar");
        Ok(id)
    }
}

fn map_error(err: CalendarError) -> ApplicationError {
    match err {
        CalendarError::AuthenticationFailed => ApplicationError::NotAuthorized(err.to_string()),
        CalendarError::ServiceUnavailable | CalendarError::OperationFailed(_) => {
            ApplicationError::ExternalService(err.to_string())
        },
    }
}
