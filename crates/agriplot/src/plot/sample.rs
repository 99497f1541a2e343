//! Soil-sampling dot grid over a plot.
//!
//! Unlike the planting layout, the grid is endpoint-inclusive: the first and
//! last dots of each axis sit on the rectangle's edges, and every axis has at
//! least two dots, so the four corners are always sampled.

use nalgebra::{Rotation2, Vector2};

use crate::geo::{project, GeoPoint};

use super::rect::Plot;

/// Smallest distance between neighbouring sample dots (meters).
pub const MIN_SAMPLE_SPACING_M: f64 = 5.0;

/// Dot spacing for a field of `area` square meters: `max(5, sqrt(area / 100))`.
#[inline]
pub fn sample_spacing(area: f64) -> f64 {
    let s = (area / 100.0).sqrt();
    if s.is_finite() {
        s.max(MIN_SAMPLE_SPACING_M)
    } else {
        MIN_SAMPLE_SPACING_M
    }
}

#[inline]
fn dots_along(side: f64, spacing: f64) -> usize {
    ((side / spacing) as usize).max(2)
}

/// Evenly spaced sample points covering `plot`, row-major from the
/// south-west corner (before rotation), rows along the length axis.
///
/// Empty for non-positive sides or a reference point at a pole.
pub fn sample_grid(plot: &Plot, area: f64) -> Vec<GeoPoint> {
    let (l, w) = (plot.length, plot.width);
    if !(l > 0.0 && w > 0.0) || !l.is_finite() || !w.is_finite() {
        return Vec::new();
    }
    let spacing = sample_spacing(area);
    let (n_len, n_wid) = (dots_along(l, spacing), dots_along(w, spacing));
    let rot = Rotation2::new(plot.rotation_deg.to_radians());
    let mut out = Vec::with_capacity(n_len * n_wid);
    for i in 0..n_len {
        let y = i as f64 / (n_len - 1) as f64 * l - l / 2.0;
        for j in 0..n_wid {
            let x = j as f64 / (n_wid - 1) as f64 * w - w / 2.0;
            match project(plot.center, rot * Vector2::new(x, y)) {
                Some(p) => out.push(p),
                None => return Vec::new(),
            }
        }
    }
    out
}
