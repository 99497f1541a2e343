//! Flat re-export surface for callers that drive a planning screen.
//!
//! Groups the engine entry points in one place; the module tree stays the
//! source of truth.

// Geometry
pub use crate::geo::{is_inside, project, unproject, BoundingBox, GeoPoint, PlanarOffset};
// Plots and layout
pub use crate::plot::{
    complementary_side, planting_positions, rectangle_corners, sample_grid, sample_spacing,
    square_side, Direction, PlantingPlan, Plot, DRAG_METERS_PER_PX, MIN_SAMPLE_SPACING_M,
    NUDGE_STEP_M, ROTATION_STEP_DEG,
};
// Crops
pub use crate::crops::{estimated_area, estimated_quantity, total_area, CropCatalog, CropSpacing};
// Input boundary
pub use crate::input::{
    check_polygon_extent, parse_area, parse_count, parse_number, parse_positive, parse_side,
    resolve_crop, CropQuantityRequest, InputError, LandAreaRequest, MAX_AREA_SQM, MAX_EXTENT_M,
    MAX_PLANTS, MAX_SIDE_M,
};
// Display
pub use crate::dms::to_dms;

/// Plan the land-area flow in one call: validate, size the plot, place plants.
pub fn plan_land_area(
    catalog: &CropCatalog,
    center: GeoPoint,
    crop: &str,
    area: &str,
    length: Option<&str>,
    width: Option<&str>,
    rotation_deg: f64,
) -> Result<PlantingPlan, InputError> {
    let req = LandAreaRequest::parse(catalog, crop, area, length, width)?;
    let plot = req.plot(center).with_rotation(rotation_deg);
    Ok(PlantingPlan::for_plot(&plot, &req.crop, req.max_count))
}

/// Plan the crop-quantity flow in one call.
pub fn plan_crop_quantity(
    catalog: &CropCatalog,
    center: GeoPoint,
    crop: &str,
    quantity: &str,
    rotation_deg: f64,
) -> Result<PlantingPlan, InputError> {
    let req = CropQuantityRequest::parse(catalog, crop, quantity)?;
    let plot = req.plot(center).with_rotation(rotation_deg);
    Ok(PlantingPlan::for_plot(&plot, &req.crop, req.max_count()))
}

/// Soil-sampling dots for a land-area plot, validated like [`plan_land_area`].
pub fn soil_samples(
    center: GeoPoint,
    length: &str,
    width: &str,
    area: Option<&str>,
    rotation_deg: f64,
) -> Result<Vec<GeoPoint>, InputError> {
    let length = parse_side("length", length)?;
    let width = parse_side("width", width)?;
    let area = match area {
        Some(a) => parse_area("area", a)?,
        None => length * width,
    };
    let plot = Plot::new(center, length, width).with_rotation(rotation_deg);
    Ok(sample_grid(&plot, area))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CEBU: GeoPoint = GeoPoint::new(10.3157, 123.8854);

    #[test]
    fn land_area_flow() {
        let cat = CropCatalog::default();
        let plan = plan_land_area(&cat, CEBU, "Cassava", "400", Some("25"), None, 15.0).unwrap();
        assert_eq!(plan.crop, "Cassava");
        assert_eq!(plan.polygon.len(), 4);
        assert!(!plan.is_empty() && plan.len() <= 400);
        assert!(plan.positions.iter().all(|p| is_inside(*p, &plan.polygon)));
    }

    #[test]
    fn crop_quantity_flow_caps_at_quantity() {
        let cat = CropCatalog::default();
        let plan = plan_crop_quantity(&cat, CEBU, "Mango", "3", 0.0).unwrap();
        assert!(plan.len() <= 3);
    }

    #[test]
    fn soil_sample_flow() {
        let dots = soil_samples(CEBU, "100", "50", None, 30.0).unwrap();
        // area 5000 -> spacing max(5, 7.07) -> 14 x 7 dots
        assert_eq!(dots.len(), 98);
        assert_eq!(soil_samples(CEBU, "10", "10", Some("100"), 0.0).unwrap().len(), 4);
        assert!(matches!(
            soil_samples(CEBU, "10", "99999", None, 0.0),
            Err(InputError::TooLarge { field: "width", .. })
        ));
    }

    #[test]
    fn flows_surface_validation_errors() {
        let cat = CropCatalog::default();
        assert!(matches!(
            plan_land_area(&cat, CEBU, "Corn", "abc", None, None, 0.0),
            Err(InputError::NotANumber { field: "area", .. })
        ));
        assert!(matches!(
            plan_crop_quantity(&cat, CEBU, "Durian", "3", 0.0),
            Err(InputError::UnknownCrop(_))
        ));
    }
}
