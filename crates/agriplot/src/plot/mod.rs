//! Plot rectangles and the planting layout placed inside them.
//!
//! Purpose
//! - Derive a rotated rectangle's corners from (center, length, width, rotation).
//! - Edit a plot the way the map screen does: rotate in steps, nudge, drag.
//! - Fill a polygon with a staggered planting grid capped at a plant count.
//! - Cover a plot with an edge-to-edge soil-sampling dot grid.
//!
//! Code cross-refs: `geo::{project, is_inside}`, `crops::CropSpacing`

mod layout;
pub mod rand;
mod rect;
mod sample;

pub use layout::{planting_positions, PlantingPlan};
pub use rect::{
    complementary_side, rectangle_corners, square_side, Direction, Plot, DRAG_METERS_PER_PX,
    NUDGE_STEP_M, ROTATION_STEP_DEG,
};
pub use sample::{sample_grid, sample_spacing, MIN_SAMPLE_SPACING_M};
