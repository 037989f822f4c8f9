//! Application services - Use case implementations

mod calendar_export_service;
mod place_selection_service;
mod route_planner_service;
mod session_state;

pub use calendar_export_service::{
    CalendarExportService, EMAIL_REMINDER_MINUTES, EVENT_DESCRIPTION, EVENT_SUMMARY,
    POPUP_REMINDER_MINUTES, route_event,
};
pub use place_selection_service::PlaceSelectionService;
pub use route_planner_service::{RoutePlan, RoutePlannerService, SubmissionOutcome};
pub use session_state::SessionState;
