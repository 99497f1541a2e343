//! Rotated rectangular plots placed on the map.
//!
//! A `Plot` owns only its parameters (center, length, width, rotation); the
//! four corners are always derived on demand so they move together.

use nalgebra::{Rotation2, Vector2};

use crate::crops::{estimated_area, CropSpacing};
use crate::geo::{project, GeoPoint, PlanarOffset};

/// Rotation applied by one press of the rotate buttons (degrees).
pub const ROTATION_STEP_DEG: f64 = 5.0;
/// Distance moved by one press of the arrow buttons (meters).
pub const NUDGE_STEP_M: f64 = 1.0;
/// Meters moved per screen pixel while dragging the plot.
pub const DRAG_METERS_PER_PX: f64 = 0.125;

/// Cardinal direction for nudging a plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    #[inline]
    fn unit(self) -> PlanarOffset {
        match self {
            Direction::North => Vector2::new(0.0, 1.0),
            Direction::South => Vector2::new(0.0, -1.0),
            Direction::East => Vector2::new(1.0, 0.0),
            Direction::West => Vector2::new(-1.0, 0.0),
        }
    }
}

/// Corners of a `length` × `width` rectangle rotated by `rotation_deg` about `center`.
///
/// Order before rotation: north-west, north-east, south-east, south-west.
/// The rotation is `x' = x cosθ − y sinθ, y' = x sinθ + y cosθ` on (east, north)
/// offsets; angles are not normalized. Non-positive (or non-finite)
/// dimensions and an undefined projection (pole reference) yield an empty
/// vector.
pub fn rectangle_corners(
    center: GeoPoint,
    length: f64,
    width: f64,
    rotation_deg: f64,
) -> Vec<GeoPoint> {
    if !(length > 0.0 && width > 0.0) || !length.is_finite() || !width.is_finite() {
        return Vec::new();
    }
    let (hl, hw) = (length / 2.0, width / 2.0);
    let local = [
        Vector2::new(-hw, hl),
        Vector2::new(hw, hl),
        Vector2::new(hw, -hl),
        Vector2::new(-hw, -hl),
    ];
    let rot = Rotation2::new(rotation_deg.to_radians());
    let corners: Option<Vec<GeoPoint>> =
        local.into_iter().map(|v| project(center, rot * v)).collect();
    corners.unwrap_or_default()
}

/// The square side length covering `area` square meters; `None` unless `area > 0`.
#[inline]
pub fn square_side(area: f64) -> Option<f64> {
    (area > 0.0 && area.is_finite()).then(|| area.sqrt())
}

/// The other side of a rectangle of `area` given one `side`; `None` unless `side > 0`.
#[inline]
pub fn complementary_side(area: f64, side: f64) -> Option<f64> {
    (side > 0.0 && area.is_finite() && side.is_finite()).then(|| area / side)
}

/// Rectangle parameters: center, length (north axis), width (east axis), rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plot {
    pub center: GeoPoint,
    pub length: f64,
    pub width: f64,
    pub rotation_deg: f64,
}

impl Plot {
    #[inline]
    pub fn new(center: GeoPoint, length: f64, width: f64) -> Self {
        Self {
            center,
            length,
            width,
            rotation_deg: 0.0,
        }
    }

    /// Square plot with the given area. Zero-sized when `area <= 0`.
    pub fn square_from_area(center: GeoPoint, area: f64) -> Self {
        let side = square_side(area).unwrap_or(0.0);
        Self::new(center, side, side)
    }

    /// Square plot large enough for `quantity` plants of `crop`.
    pub fn from_quantity(center: GeoPoint, crop: &CropSpacing, quantity: u64) -> Self {
        Self::square_from_area(center, estimated_area(crop, quantity))
    }

    #[inline]
    pub fn with_rotation(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.length.max(0.0) * self.width.max(0.0)
    }

    /// Derived corners; see [`rectangle_corners`].
    pub fn corners(&self) -> Vec<GeoPoint> {
        rectangle_corners(self.center, self.length, self.width, self.rotation_deg)
    }

    pub fn rotate_by(&mut self, delta_deg: f64) {
        self.rotation_deg += delta_deg;
    }

    /// Translate the center by a planar offset. Returns false (unchanged) at a pole.
    pub fn translate(&mut self, offset: PlanarOffset) -> bool {
        match project(self.center, offset) {
            Some(c) => {
                self.center = c;
                true
            }
            None => false,
        }
    }

    pub fn nudge(&mut self, direction: Direction, meters: f64) -> bool {
        self.translate(direction.unit() * meters)
    }

    /// Apply a screen-space drag. Screen `y` grows downward, so it maps to south.
    pub fn drag(&mut self, dx_px: f64, dy_px: f64, meters_per_px: f64) -> bool {
        self.translate(Vector2::new(dx_px, -dy_px) * meters_per_px)
    }
}
