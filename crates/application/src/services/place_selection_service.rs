//! Place selection service
//!
//! Resolves the free-form address typed into an endpoint field and writes
//! the selected place back into the form state.

use std::{fmt, sync::Arc};

use domain::{CountryCode, DomainError, LocationInput, ResolvedPlace};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::GeoResolverPort};

/// Service selecting places for route endpoints
pub struct PlaceSelectionService {
    resolver: Arc<dyn GeoResolverPort>,
    country: Option<CountryCode>,
}

impl fmt::Debug for PlaceSelectionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaceSelectionService")
            .field("country", &self.country)
            .finish_non_exhaustive()
    }
}

impl PlaceSelectionService {
    /// Create a new place selection service
    pub fn new(resolver: Arc<dyn GeoResolverPort>) -> Self {
        Self {
            resolver,
            country: None,
        }
    }

    /// Restrict results to one country
    #[must_use]
    pub fn with_country(mut self, country: CountryCode) -> Self {
        self.country = Some(country);
        self
    }

    /// Resolve `input.address` and overwrite `input` with the first match
    ///
    /// `input` is left untouched when resolution fails.
    #[instrument(skip(self, input), fields(address = %input.address))]
    pub async fn select(&self, input: &mut LocationInput) -> Result<ResolvedPlace, ApplicationError> {
        let query = input.address.trim();
        if query.is_empty() {
            return Err(ApplicationError::InvalidInput(DomainError::EmptyAddress));
        }

        let place = self.resolver.resolve(query, self.country.clone()).await?;
        debug!(location = %place.location, "Place selected");
        input.select_place(&place);
        Ok(place)
    }
}
