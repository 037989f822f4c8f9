//! Route planner service
//!
//! Submission pipeline: form state → [`RouteRequest`] → routing port →
//! [`RoutePlan`]. Holds the single result slot shown to the user.
//!
//! Every accepted submission is numbered. A completed submission only
//! replaces the slot if no newer one has been issued in the meantime, so a
//! slow response can never overwrite a fresher route.

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicU64, AtomicUsize, Ordering},
    },
};

use chrono::{Local, TimeZone};
use domain::{DecodedPath, DisplayArtifacts, LocationInput, RouteRequest, RouteResult};
use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{error::ApplicationError, ports::RoutesPort};

/// One completed submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    /// Submission number, starting at 1
    pub sequence: u64,
    pub request: RouteRequest,
    pub result: RouteResult,
    /// Decoded route polyline, origin first
    pub path: DecodedPath,
    pub artifacts: DisplayArtifacts,
}

/// What happened to a completed submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The plan is now the current result
    Current(RoutePlan),
    /// A newer submission was issued first; the slot was left alone
    Superseded(RoutePlan),
}

impl SubmissionOutcome {
    pub const fn plan(&self) -> &RoutePlan {
        match self {
            Self::Current(plan) | Self::Superseded(plan) => plan,
        }
    }

    pub fn into_plan(self) -> RoutePlan {
        match self {
            Self::Current(plan) | Self::Superseded(plan) => plan,
        }
    }

    pub const fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded(_))
    }
}

/// Decrements the in-flight counter when a submission finishes, however it ends
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Service computing routes and tracking the latest result
pub struct RoutePlannerService {
    routes: Arc<dyn RoutesPort>,
    issued: AtomicU64,
    in_flight: AtomicUsize,
    current: RwLock<Option<RoutePlan>>,
}

impl fmt::Debug for RoutePlannerService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutePlannerService")
            .field("issued", &self.issued.load(Ordering::SeqCst))
            .field("in_flight", &self.in_flight.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

impl RoutePlannerService {
    /// Create a new route planner service
    pub fn new(routes: Arc<dyn RoutesPort>) -> Self {
        Self {
            routes,
            issued: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
            current: RwLock::new(None),
        }
    }

    /// Build a request from form state, reading the departure in `zone`
    ///
    /// Fails with `InvalidInput` before anything is sent.
    pub fn prepare<Tz: TimeZone>(
        origin: &LocationInput,
        destination: &LocationInput,
        departure_time: &str,
        zone: &Tz,
    ) -> Result<RouteRequest, ApplicationError> {
        RouteRequest::from_form(origin, destination, departure_time, zone).map_err(|e| {
            debug!(error = %e, "Rejected route form");
            ApplicationError::from(e)
        })
    }

    /// Submit form state, reading the departure in the process-local zone
    pub async fn submit(
        &self,
        origin: &LocationInput,
        destination: &LocationInput,
        departure_time: &str,
    ) -> Result<SubmissionOutcome, ApplicationError> {
        let request = Self::prepare(origin, destination, departure_time, &Local)?;
        self.submit_request(request).await
    }

    /// Send a prepared request and apply the result if it is still the latest
    ///
    /// On error the current plan is left untouched.
    #[instrument(skip(self, request), fields(origin = %request.origin(), destination = %request.destination()))]
    pub async fn submit_request(
        &self,
        request: RouteRequest,
    ) -> Result<SubmissionOutcome, ApplicationError> {
        let sequence = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let _in_flight = InFlight::enter(&self.in_flight);
        debug!(sequence, "Submitting route request");

        let result = self
            .routes
            .compute_route(&request)
            .await
            .inspect_err(|e| warn!(sequence, error = %e, "Route request failed"))?;

        let path = result.decode_path()?;
        let artifacts = DisplayArtifacts::derive(&result, request.origin(), request.destination());

        Ok(self.apply(RoutePlan {
            sequence,
            request,
            result,
            path,
            artifacts,
        }))
    }

    fn apply(&self, plan: RoutePlan) -> SubmissionOutcome {
        let mut slot = self.current.write();
        let latest = self.issued.load(Ordering::SeqCst);

        if plan.sequence == latest {
            info!(
                sequence = plan.sequence,
                distance = %plan.artifacts.distance_text,
                duration = %plan.artifacts.duration_text,
                "Route updated"
            );
            *slot = Some(plan.clone());
            SubmissionOutcome::Current(plan)
        } else {
            debug!(sequence = plan.sequence, latest, "Discarding superseded route");
            SubmissionOutcome::Superseded(plan)
        }
    }

    /// The plan currently shown, if any
    pub fn current_plan(&self) -> Option<RoutePlan> {
        self.current.read().clone()
    }

    /// Whether any submission is still waiting for the routing service
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Number of the most recently issued submission (0 before the first)
    pub fn latest_sequence(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }
}
