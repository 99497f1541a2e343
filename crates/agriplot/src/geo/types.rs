//! Geographic value types and the meters-per-degree constants.
//!
//! - `GeoPoint`: (latitude, longitude) in decimal degrees, unvalidated.
//! - `PlanarOffset`: local (east, north) displacement in meters.
//! - `BoundingBox`: axis-aligned lat/lng extent of a vertex sequence.

use nalgebra::Vector2;

/// Meters per degree of latitude used by projection (treated as uniform).
pub const METERS_PER_DEG_LAT: f64 = 111_132.0;
/// Meters per degree of longitude at the equator used by projection.
pub const METERS_PER_DEG_LNG: f64 = 111_320.0;
/// Coarser meters-per-degree constant used when converting planting spacing.
pub const METERS_PER_DEG_GRID: f64 = 111_111.0;
/// Below this, `cos(latitude)` is treated as zero (reference point at a pole).
pub(crate) const POLE_COS_EPS: f64 = 1e-12;

/// Local planar offset: `x` = meters east, `y` = meters north.
pub type PlanarOffset = Vector2<f64>;

/// A (latitude, longitude) pair in decimal degrees.
///
/// Out-of-range values are carried as-is; nothing wraps or clamps them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<(f64, f64)> for GeoPoint {
    #[inline]
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Axis-aligned extent in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Extent of `points`; `None` for an empty slice.
    pub fn of(points: &[GeoPoint]) -> Option<Self> {
        let first = points.first()?;
        let init = Self {
            min_lat: first.latitude,
            max_lat: first.latitude,
            min_lng: first.longitude,
            max_lng: first.longitude,
        };
        Some(points[1..].iter().fold(init, |b, p| Self {
            min_lat: b.min_lat.min(p.latitude),
            max_lat: b.max_lat.max(p.latitude),
            min_lng: b.min_lng.min(p.longitude),
            max_lng: b.max_lng.max(p.longitude),
        }))
    }

    #[inline]
    pub fn mean_latitude(&self) -> f64 {
        (self.min_lat + self.max_lat) / 2.0
    }
}
