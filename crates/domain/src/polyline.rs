//! Encoded polyline codec
//!
//! Implements the polyline algorithm used by the Routes API: each coordinate
//! is scaled by 1e5, delta-encoded against the previous point, zig-zag signed,
//! and written as little-endian 5-bit groups offset by 63 into printable ASCII.

use crate::errors::DomainError;
use crate::value_objects::GeoPoint;

/// Fixed-point scale of the encoding (five decimal places)
pub const PRECISION: f64 = 1e5;

const CHAR_OFFSET: u8 = 63;
const CONTINUATION_BIT: i64 = 0x20;
const CHUNK_MASK: i64 = 0x1f;
// 7 groups of 5 bits cover every scaled coordinate in [-180e5, 180e5] deltas.
const MAX_SHIFT: u32 = 30;

/// Decode an encoded polyline into points in traversal order
///
/// An empty string decodes to an empty path.
///
/// # Errors
///
/// Returns `DomainError::InvalidPolyline` for bytes outside `?`..=`~`, a
/// value that ends mid-chunk, a latitude without a longitude, or a decoded
/// coordinate outside the valid range.
pub fn decode(encoded: &str) -> Result<Vec<GeoPoint>, DomainError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::with_capacity(bytes.len() / 4);
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        let (delta_lat, next) = decode_value(bytes, index)?;
        if next >= bytes.len() {
            return Err(DomainError::invalid_polyline(
                next,
                "latitude without longitude",
            ));
        }
        let (delta_lng, next) = decode_value(bytes, next)?;

        lat += delta_lat;
        lng += delta_lng;

        #[allow(clippy::cast_precision_loss)]
        let point = GeoPoint::new(lat as f64 / PRECISION, lng as f64 / PRECISION)
            .map_err(|e| DomainError::invalid_polyline(index, e.to_string()))?;
        points.push(point);
        index = next;
    }

    Ok(points)
}

/// Encode points with the same algorithm [`decode`] reverses
///
/// Coordinates are rounded half away from zero to five decimal places.
#[must_use]
pub fn encode(points: &[GeoPoint]) -> String {
    let mut out = String::with_capacity(points.len() * 8);
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for point in points {
        let lat = scale(point.latitude());
        let lng = scale(point.longitude());
        encode_value(lat - prev_lat, &mut out);
        encode_value(lng - prev_lng, &mut out);
        prev_lat = lat;
        prev_lng = lng;
    }

    out
}

#[allow(clippy::cast_possible_truncation)]
fn scale(degrees: f64) -> i64 {
    (degrees * PRECISION).round() as i64
}

fn decode_value(bytes: &[u8], start: usize) -> Result<(i64, usize), DomainError> {
    let mut result: i64 = 0;
    let mut shift: u32 = 0;
    let mut pos = start;

    loop {
        let byte = *bytes
            .get(pos)
            .ok_or_else(|| DomainError::invalid_polyline(pos, "truncated value"))?;
        if !(CHAR_OFFSET..=b'~').contains(&byte) {
            return Err(DomainError::invalid_polyline(
                pos,
                format!("unexpected character {:?}", char::from(byte)),
            ));
        }
        if shift > MAX_SHIFT {
            return Err(DomainError::invalid_polyline(pos, "value too long"));
        }

        let chunk = i64::from(byte - CHAR_OFFSET);
        result |= (chunk & CHUNK_MASK) << shift;
        shift += 5;
        pos += 1;

        if chunk & CONTINUATION_BIT == 0 {
            break;
        }
    }

    let value = if result & 1 == 0 {
        result >> 1
    } else {
        !(result >> 1)
    };
    Ok((value, pos))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn encode_value(value: i64, out: &mut String) {
    let mut v = if value < 0 { !(value << 1) } else { value << 1 };
    while v >= CONTINUATION_BIT {
        push_chunk((CONTINUATION_BIT | (v & CHUNK_MASK)) as u8, out);
        v >>= 5;
    }
    push_chunk(v as u8, out);
}

fn push_chunk(chunk: u8, out: &mut String) {
    out.push(char::from(chunk + CHAR_OFFSET));
}
