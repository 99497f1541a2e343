//! Even-odd ray casting with longitude as `x` and latitude as `y`.

use super::types::GeoPoint;

/// True if `point` lies inside the implicitly closed `polygon`.
///
/// An edge toggles the result when it straddles the point's longitude
/// (half-open: exactly one endpoint strictly east of the point) and the
/// edge's latitude at that longitude is strictly greater than the point's.
/// Consequently a point on a bottom edge counts as inside and one on a top
/// edge as outside. Polygons with fewer than three vertices are not
/// rejected; their edges pair up and cancel, so nothing is inside.
pub fn is_inside(point: GeoPoint, polygon: &[GeoPoint]) -> bool {
    let n = polygon.len();
    if n == 0 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = polygon[i];
        let pj = polygon[j];
        if (pi.longitude > point.longitude) != (pj.longitude > point.longitude) {
            let lat_at = (pj.latitude - pi.latitude) * (point.longitude - pi.longitude)
                / (pj.longitude - pi.longitude)
                + pi.latitude;
            if point.latitude < lat_at {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
