//! Routing service port
//!
//! Defines the interface for computing a traffic-aware driving route.
//! Adapters in the infrastructure layer implement this port using a
//! routing API.

use async_trait::async_trait;
use domain::{RouteRequest, RouteResult};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for route computation
///
/// One call is one outbound request. Implementations never retry.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutesPort: Send + Sync {
    /// Compute the first route candidate for the request
    async fn compute_route(&self, request: &RouteRequest) -> Result<RouteResult, ApplicationError>;
}
