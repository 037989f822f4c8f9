//! Address resolution port

use async_trait::async_trait;
use domain::{CountryCode, ResolvedPlace};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for turning free-form place queries into coordinates
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeoResolverPort: Send + Sync {
    /// Resolve a query, optionally restricted to one country
    ///
    /// Returns `AddressNotFound` when the query matches nothing.
    async fn resolve(
        &self,
        query: &str,
        country: Option<CountryCode>,
    ) -> Result<ResolvedPlace, ApplicationError>;
}
