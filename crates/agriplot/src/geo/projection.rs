//! Small-distance equirectangular projection around a reference point.
//!
//! Latitude uses a uniform `METERS_PER_DEG_LAT`; longitude is scaled by
//! `cos(reference latitude)`, recomputed per call. Valid for tens to low
//! thousands of meters.
//!
//! Pole policy: when the reference cosine is not strictly positive (|lat| at
//! or beyond 90°) or an input is non-finite, both directions return `None`
//! instead of producing infinities or NaN.

use super::types::{
    GeoPoint, PlanarOffset, METERS_PER_DEG_LAT, METERS_PER_DEG_LNG, POLE_COS_EPS,
};

/// `cos(latitude)` if usable as a longitude scale.
#[inline]
pub(crate) fn lng_scale(latitude_deg: f64) -> Option<f64> {
    let c = latitude_deg.to_radians().cos();
    if !c.is_finite() || c <= POLE_COS_EPS {
        return None;
    }
    Some(c)
}

/// Geographic point at `offset` meters (east, north) from `center`.
pub fn project(center: GeoPoint, offset: PlanarOffset) -> Option<GeoPoint> {
    if !center.is_finite() || !offset.x.is_finite() || !offset.y.is_finite() {
        return None;
    }
    let cos_lat = lng_scale(center.latitude)?;
    let d_lat = offset.y / METERS_PER_DEG_LAT;
    let d_lng = offset.x / (METERS_PER_DEG_LNG * cos_lat);
    Some(GeoPoint::new(center.latitude + d_lat, center.longitude + d_lng))
}

/// Planar offset of `target` relative to `center`; inverse of [`project`].
pub fn unproject(center: GeoPoint, target: GeoPoint) -> Option<PlanarOffset> {
    if !center.is_finite() || !target.is_finite() {
        return None;
    }
    let cos_lat = lng_scale(center.latitude)?;
    let y = (target.latitude - center.latitude) * METERS_PER_DEG_LAT;
    let x = (target.longitude - center.longitude) * METERS_PER_DEG_LNG * cos_lat;
    Some(PlanarOffset::new(x, y))
}
