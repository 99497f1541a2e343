//! Staggered-row ("square system") planting layout.
//!
//! Model
//! - Walk a lat/lng grid over the polygon's bounding box, half a step in
//!   from each edge, one `spacing` apart along both axes.
//! - Odd rows shift east by half a column step (brick pattern).
//! - Keep candidates that pass the ray-casting membership test, in row-major
//!   order (south to north, west to east), until `max_count` are accepted.

use crate::crops::CropSpacing;
use crate::geo::{is_inside, lng_scale, BoundingBox, GeoPoint, METERS_PER_DEG_GRID};

use super::rect::Plot;

/// Planting positions inside `polygon`, at most `max_count` of them.
///
/// Empty for an empty polygon, `spacing <= 0` (or non-finite), `max_count == 0`,
/// or a bounding box centered on a pole.
///
/// Work is proportional to the bounding-box area divided by `spacing²`, and
/// the result holds up to `max_count` points; callers bound both (see
/// `input::MAX_SIDE_M` and `input::MAX_PLANTS`).
pub fn planting_positions(polygon: &[GeoPoint], spacing: f64, max_count: usize) -> Vec<GeoPoint> {
    if max_count == 0 || !(spacing > 0.0) || !spacing.is_finite() {
        return Vec::new();
    }
    let Some(bb) = BoundingBox::of(polygon) else {
        return Vec::new();
    };
    let Some(cos_lat) = lng_scale(bb.mean_latitude()) else {
        return Vec::new();
    };
    let lat_step = spacing / METERS_PER_DEG_GRID;
    let lng_step = spacing / (METERS_PER_DEG_GRID * cos_lat);

    let mut out = Vec::new();
    let mut lat = bb.min_lat + lat_step / 2.0;
    let mut row = 0usize;
    while lat <= bb.max_lat - lat_step / 2.0 && out.len() < max_count {
        let mut lng = bb.min_lng + lng_step / 2.0;
        if row % 2 == 1 {
            lng += lng_step / 2.0;
        }
        while lng <= bb.max_lng - lng_step / 2.0 && out.len() < max_count {
            let p = GeoPoint::new(lat, lng);
            if is_inside(p, polygon) {
                out.push(p);
            }
            let next = lng + lng_step;
            if next == lng {
                break;
            }
            lng = next;
        }
        let next = lat + lat_step;
        if next == lat {
            break;
        }
        lat = next;
        row += 1;
    }
    tracing::debug!(
        rows = row,
        accepted = out.len(),
        max_count,
        spacing,
        "planting_positions"
    );
    out
}

/// A plot's corner polygon together with the positions placed inside it.
#[derive(Clone, Debug, PartialEq)]
pub struct PlantingPlan {
    pub crop: String,
    pub polygon: Vec<GeoPoint>,
    pub positions: Vec<GeoPoint>,
}

impl PlantingPlan {
    /// Lay out `crop` over `plot`, capped at `max_count` plants.
    pub fn for_plot(plot: &Plot, crop: &CropSpacing, max_count: usize) -> Self {
        Self::for_polygon(plot.corners(), crop, max_count)
    }

    /// Lay out `crop` over an arbitrary simple polygon.
    pub fn for_polygon(polygon: Vec<GeoPoint>, crop: &CropSpacing, max_count: usize) -> Self {
        let positions = planting_positions(&polygon, crop.planting_distance, max_count);
        Self {
            crop: crop.name.clone(),
            polygon,
            positions,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
