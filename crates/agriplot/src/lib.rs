//! Plot geometry and crop placement.
//!
//! A user picks a crop and either a land area or a plant count; this crate
//! turns that into a rotated rectangle on the map and a staggered grid of
//! planting positions inside it.
//!
//! API Policy
//! - Everything here is a pure function of its inputs: no I/O, no globals.
//! - Invalid geometry yields empty results; raw text is validated once in
//!   `input` and only typed values reach the geometry.

pub mod api;
pub mod crops;
pub mod dms;
pub mod geo;
pub mod input;
pub mod plot;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::crops::{estimated_area, estimated_quantity, CropCatalog, CropSpacing};
    pub use crate::dms::to_dms;
    pub use crate::geo::{is_inside, project, unproject, GeoPoint, PlanarOffset};
    pub use crate::input::{CropQuantityRequest, InputError, LandAreaRequest};
    pub use crate::plot::{planting_positions, rectangle_corners, Direction, PlantingPlan, Plot};
}
