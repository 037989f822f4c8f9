//! Map rendering port
//!
//! The route pipeline produces a [`MapView`]; how it is drawn (terminal,
//! browser, image) is up to the adapter.

use domain::{DecodedPath, GeoPoint, LocationInput};
#[cfg(test)]
use mockall::automock;
use serde::Serialize;

use crate::error::ApplicationError;

/// Everything a renderer needs to draw the current state of the form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    /// Map center: the origin when resolved, otherwise the default center
    pub center: GeoPoint,
    /// Origin marker, present once the origin is resolved
    pub origin: Option<GeoPoint>,
    /// Destination marker, present once the destination is resolved
    pub destination: Option<GeoPoint>,
    /// Route polyline, empty until a route has been computed
    pub path: Vec<GeoPoint>,
}

impl MapView {
    /// Build a view from the form state and an optional decoded route
    pub fn new(
        origin: &LocationInput,
        destination: &LocationInput,
        path: Option<&DecodedPath>,
    ) -> Self {
        let origin = origin.to_point("origin").ok();
        let destination = destination.to_point("destination").ok();
        Self {
            center: origin.unwrap_or_else(GeoPoint::default_center),
            origin,
            destination,
            path: path.map(|p| p.points().to_vec()).unwrap_or_default(),
        }
    }

    /// Whether there is a route line to draw
    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Port for drawing a [`MapView`]
#[cfg_attr(test, automock)]
pub trait MapRenderer: Send + Sync {
    /// Draw the view, replacing whatever was drawn before
    fn render(&self, view: &MapView) -> Result<(), ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_form_centers_on_default() {
        let view = MapView::new(
            &LocationInput::unresolved("Nai"),
            &LocationInput::unresolved(""),
            None,
        );
        assert_eq!(view.center, GeoPoint::default_center());
        assert!(view.origin.is_none());
        assert!(view.destination.is_none());
        assert!(!view.has_path());
    }

    #[test]
    fn resolved_origin_becomes_center() {
        let view = MapView::new(
            &LocationInput::from_coordinates(-1.3, 36.8),
            &LocationInput::unresolved(""),
            None,
        );
        assert_eq!(view.center, GeoPoint::new_unchecked(-1.3, 36.8));
        assert_eq!(view.origin, Some(view.center));
    }

    #[test]
    fn path_is_copied_from_decoded_route() {
        let path = DecodedPath::from_encoded("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap();
        let view = MapView::new(
            &LocationInput::from_coordinates(38.5, -120.2),
            &LocationInput::from_coordinates(43.252, -126.453),
            Some(&path),
        );
        assert_eq!(view.path.len(), 3);
        assert!(view.has_path());
        assert!(view.destination.is_some());
    }
}
