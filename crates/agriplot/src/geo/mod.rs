//! Geographic primitives for plot planning.
//!
//! Purpose
//! - Carry (latitude, longitude) points and local metric offsets.
//! - Convert between them with a small-distance projection.
//! - Decide polygon membership for candidate planting positions.
//!
//! Code cross-refs: `plot::rectangle_corners`, `plot::planting_positions`

mod polygon;
mod projection;
mod types;

pub use polygon::is_inside;
pub(crate) use projection::lng_scale;
pub use projection::{project, unproject};
pub use types::{
    BoundingBox, GeoPoint, PlanarOffset, METERS_PER_DEG_GRID, METERS_PER_DEG_LAT,
    METERS_PER_DEG_LNG,
};

#[cfg(test)]
mod tests;
