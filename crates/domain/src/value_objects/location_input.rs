//! Form-level state for one route endpoint

use serde::{Deserialize, Serialize};

use super::{GeoPoint, ResolvedPlace};
use crate::errors::DomainError;

/// One endpoint of the route form: the typed address and, once a place was
/// selected, its coordinates
///
/// Coordinates stay `None` until the geo resolver delivers a place. Selecting
/// a place replaces both coordinates and the address at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationInput {
    /// Latitude of the selected place
    pub latitude: Option<f64>,
    /// Longitude of the selected place
    pub longitude: Option<f64>,
    /// Address text shown in the form
    #[serde(default)]
    pub address: String,
}

impl LocationInput {
    /// An endpoint with only typed text and no resolved coordinates
    pub fn unresolved(address: impl Into<String>) -> Self {
        Self {
            latitude: None,
            longitude: None,
            address: address.into(),
        }
    }

    /// An endpoint with raw coordinates (no address)
    #[must_use]
    pub const fn from_coordinates(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            address: String::new(),
        }
    }

    /// Overwrite this endpoint with a place chosen from the resolver
    pub fn select_place(&mut self, place: &ResolvedPlace) {
        *self = Self::from(place);
    }

    /// Whether both coordinates are present
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    /// The validated point, if both coordinates are present
    ///
    /// # Errors
    ///
    /// `MissingCoordinates` when either coordinate is absent and
    /// `InvalidCoordinates` when they are out of range.
    pub fn to_point(&self, endpoint: &str) -> Result<GeoPoint, DomainError> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => GeoPoint::new(lat, lng),
            _ => Err(DomainError::missing_coordinates(endpoint)),
        }
    }
}

impl From<&ResolvedPlace> for LocationInput {
    fn from(place: &ResolvedPlace) -> Self {
        Self {
            latitude: Some(place.location.latitude()),
            longitude: Some(place.location.longitude()),
            address: place.formatted_address.clone(),
        }
    }
}
