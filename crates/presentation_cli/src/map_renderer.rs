//! Terminal map renderer
//!
//! Draws a [`MapView`] as a short text block: center, markers and a
//! summary of the route line.

use std::io::{self, Write};

use application::{ApplicationError, MapRenderer, MapView};
use domain::GeoPoint;

/// Number of path points listed before eliding the middle
const MAX_LISTED_POINTS: usize = 6;

/// Renders map views to stdout
#[derive(Debug, Default)]
pub struct TerminalMapRenderer;

impl TerminalMapRenderer {
    /// Text representation of a view
    pub fn describe(view: &MapView) -> String {
        let mut out = format!("Map center: {}\n", view.center);

        match view.origin {
            Some(point) => out.push_str(&format!("  A  origin       {point}\n")),
            None => out.push_str("  A  origin       (not selected)\n"),
        }
        match view.destination {
            Some(point) => out.push_str(&format!("  B  destination  {point}\n")),
            None => out.push_str("  B  destination  (not selected)\n"),
        }

        if !view.has_path() {
            out.push_str("  no route\n");
            return out;
        }

        out.push_str(&format!("  route: {} points\n", view.path.len()));
        for line in listed_points(&view.path) {
            out.push_str(&format!("    {line}\n"));
        }
        out
    }
}

fn listed_points(path: &[GeoPoint]) -> Vec<String> {
    if path.len() <= MAX_LISTED_POINTS {
        return path.iter().map(ToString::to_string).collect();
    }

    let half = MAX_LISTED_POINTS / 2;
    let mut lines: Vec<String> = path[..half].iter().map(ToString::to_string).collect();
    lines.push(format!("... {} more ...", path.len() - 2 * half));
    lines.extend(path[path.len() - half..].iter().map(ToString::to_string));
    lines
}

impl MapRenderer for TerminalMapRenderer {
    fn render(&self, view: &MapView) -> Result<(), ApplicationError> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(Self::describe(view).as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| ApplicationError::ExternalService(format!("map output failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use domain::{DecodedPath, LocationInput};

    use super::*;

    #[test]
    fn describes_empty_form() {
        let view = MapView::new(
            &LocationInput::default(),
            &LocationInput::default(),
            None,
        );
        let text = TerminalMapRenderer::describe(&view);

        assert!(text.starts_with("Map center: -1.292100, 36.821900"));
        assert!(text.contains("origin       (not selected)"));
        assert!(text.contains("no route"));
    }

    #[test]
    fn lists_short_paths_in_full() {
        let path = DecodedPath::from_encoded("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap();
        let view = MapView::new(
            &LocationInput::from_coordinates(38.5, -120.2),
            &LocationInput::from_coordinates(43.252, -126.453),
            Some(&path),
        );
        let text = TerminalMapRenderer::describe(&view);

        assert!(text.contains("route: 3 points"));
        assert!(text.contains("38.500000, -120.200000"));
        assert!(text.contains("43.252000, -126.453000"));
        assert!(!text.contains("more"));
    }

    #[test]
    fn elides_long_paths() {
        let path: Vec<GeoPoint> = (0..10)
            .map(|i| GeoPoint::new_unchecked(f64::from(i), 0.0))
            .collect();
        let lines = listed_points(&path);

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[3], "... 4 more ...");
        assert_eq!(lines[6], GeoPoint::new_unchecked(9.0, 0.0).to_string());
    }
}
