//! Timezone lookup port

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{GeoPoint, Timezone};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for resolving the IANA timezone of a coordinate
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TimezonePort: Send + Sync {
    /// Timezone in effect at `point` at `timestamp`
    async fn lookup(
        &self,
        point: &GeoPoint,
        timestamp: DateTime<Utc>,
    ) -> Result<Timezone, ApplicationError>;
}
