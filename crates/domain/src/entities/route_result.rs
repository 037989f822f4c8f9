//! Route result and the artifacts derived from it

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::formatting::{format_distance, format_duration, maps_deep_link};
use crate::polyline;
use crate::value_objects::GeoPoint;

/// The selected (first) route of a routing response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Total driving distance in meters
    pub distance_meters: u64,
    /// Traffic-aware travel time in whole seconds
    pub duration_seconds: u64,
    /// Route geometry in encoded polyline format
    pub encoded_polyline: String,
}

impl RouteResult {
    /// Create a route result
    pub fn new(
        distance_meters: u64,
        duration_seconds: u64,
        encoded_polyline: impl Into<String>,
    ) -> Self {
        Self {
            distance_meters,
            duration_seconds,
            encoded_polyline: encoded_polyline.into(),
        }
    }

    /// Decode the route geometry
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPolyline` if the geometry is malformed.
    pub fn decode_path(&self) -> Result<DecodedPath, DomainError> {
        DecodedPath::from_encoded(&self.encoded_polyline)
    }
}

/// Route geometry as points in traversal order, origin first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecodedPath(Vec<GeoPoint>);

impl DecodedPath {
    /// Decode an encoded polyline
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPolyline` if the input is malformed.
    pub fn from_encoded(encoded: &str) -> Result<Self, DomainError> {
        polyline::decode(encoded).map(Self)
    }

    #[must_use]
    pub fn points(&self) -> &[GeoPoint] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fewer than two points cannot be drawn as a line
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.0.len() < 2
    }

    #[must_use]
    pub fn first(&self) -> Option<&GeoPoint> {
        self.0.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&GeoPoint> {
        self.0.last()
    }

    /// South-west and north-east corners of the path
    #[must_use]
    pub fn bounds(&self) -> Option<(GeoPoint, GeoPoint)> {
        let first = self.0.first()?;
        let (mut south, mut west) = (first.latitude(), first.longitude());
        let (mut north, mut east) = (south, west);
        for point in &self.0[1..] {
            south = south.min(point.latitude());
            north = north.max(point.latitude());
            west = west.min(point.longitude());
            east = east.max(point.longitude());
        }
        Some((
            GeoPoint::new_unchecked(south, west),
            GeoPoint::new_unchecked(north, east),
        ))
    }

    #[must_use]
    pub fn into_points(self) -> Vec<GeoPoint> {
        self.0
    }
}

impl From<Vec<GeoPoint>> for DecodedPath {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self(points)
    }
}

/// Human-facing strings shown next to the map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayArtifacts {
    /// e.g. "12.35 km"
    pub distance_text: String,
    /// e.g. "1 hrs 30 mins"
    pub duration_text: String,
    /// Google Maps directions link for the submitted endpoints
    pub map_link: String,
}

impl DisplayArtifacts {
    /// Derive display strings from a result and the submitted endpoints
    ///
    /// The link uses `origin`/`destination` as submitted, never points from
    /// the decoded path.
    #[must_use]
    pub fn derive(result: &RouteResult, origin: &GeoPoint, destination: &GeoPoint) -> Self {
        Self {
            distance_text: format_distance(result.distance_meters),
            duration_text: format_duration(result.duration_seconds),
            map_link: maps_deep_link(origin, destination),
        }
    }
}
