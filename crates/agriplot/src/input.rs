//! Text → typed value boundary.
//!
//! Raw user text (area, length, width, quantity, rotation) is parsed and
//! constrained here exactly once. Everything downstream takes the typed
//! values and never re-parses.
//!
//! Sizes are also bounded here. The projection is only valid for plots up to
//! low thousands of meters, and the planting walk costs time and memory
//! proportional to plot area over spacing squared, so oversized sides, areas,
//! plant counts, and polygons are rejected with `TooLarge`.

use thiserror::Error;

use crate::crops::{estimated_area, estimated_quantity, CropCatalog, CropSpacing};
use crate::geo::{unproject, BoundingBox, GeoPoint};
use crate::plot::{complementary_side, square_side, Plot};

/// Named validation failure for one input field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field}: value is empty")]
    Empty { field: &'static str },
    #[error("{field}: `{raw}` is not a number")]
    NotANumber { field: &'static str, raw: String },
    #[error("{field}: value must be finite")]
    NotFinite { field: &'static str },
    #[error("{field}: {value} must be greater than zero")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field}: `{raw}` is not a whole number")]
    NotAnInteger { field: &'static str, raw: String },
    #[error("{field}: value exceeds the limit of {max}")]
    TooLarge { field: &'static str, max: f64 },
    #[error("unknown crop `{0}`")]
    UnknownCrop(String),
}

/// Longest plot side accepted (meters).
pub const MAX_SIDE_M: f64 = 2_000.0;
/// Largest plot area accepted (square meters).
pub const MAX_AREA_SQM: f64 = MAX_SIDE_M * MAX_SIDE_M;
/// Most plants a single plan may hold.
pub const MAX_PLANTS: u64 = 1_000_000;
/// Largest polygon bounding-box extent accepted along either axis (meters):
/// the diagonal of a maximal square plot, so any rotation of it fits.
pub const MAX_EXTENT_M: f64 = MAX_SIDE_M * std::f64::consts::SQRT_2;

#[inline]
fn at_most(field: &'static str, v: f64, max: f64) -> Result<f64, InputError> {
    if v > max {
        return Err(InputError::TooLarge { field, max });
    }
    Ok(v)
}

/// Parse a finite decimal number (surrounding whitespace ignored).
pub fn parse_number(field: &'static str, raw: &str) -> Result<f64, InputError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(InputError::Empty { field });
    }
    let v: f64 = s.parse().map_err(|_| InputError::NotANumber {
        field,
        raw: s.to_string(),
    })?;
    if !v.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    Ok(v)
}

/// Parse a strictly positive, finite decimal number.
pub fn parse_positive(field: &'static str, raw: &str) -> Result<f64, InputError> {
    let v = parse_number(field, raw)?;
    if v <= 0.0 {
        return Err(InputError::NotPositive { field, value: v });
    }
    Ok(v)
}

/// Parse a plot side length: positive and at most [`MAX_SIDE_M`].
pub fn parse_side(field: &'static str, raw: &str) -> Result<f64, InputError> {
    at_most(field, parse_positive(field, raw)?, MAX_SIDE_M)
}

/// Parse a plot area: positive and at most [`MAX_AREA_SQM`].
pub fn parse_area(field: &'static str, raw: &str) -> Result<f64, InputError> {
    at_most(field, parse_positive(field, raw)?, MAX_AREA_SQM)
}

/// Parse a positive whole plant count, at most [`MAX_PLANTS`].
pub fn parse_count(field: &'static str, raw: &str) -> Result<u64, InputError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(InputError::Empty { field });
    }
    let v: i128 = s.parse().map_err(|_| InputError::NotAnInteger {
        field,
        raw: s.to_string(),
    })?;
    if v <= 0 {
        return Err(InputError::NotPositive {
            field,
            value: v as f64,
        });
    }
    if v > i128::from(MAX_PLANTS) {
        return Err(InputError::TooLarge {
            field,
            max: MAX_PLANTS as f64,
        });
    }
    u64::try_from(v).map_err(|_| InputError::NotAnInteger {
        field,
        raw: s.to_string(),
    })
}

/// Reject polygons whose bounding box spans more than [`MAX_EXTENT_M`].
///
/// An empty polygon passes (it yields an empty plan); a box centered on a
/// pole has no metric extent and is rejected.
pub fn check_polygon_extent(polygon: &[GeoPoint]) -> Result<(), InputError> {
    let Some(bb) = BoundingBox::of(polygon) else {
        return Ok(());
    };
    let reference = GeoPoint::new(bb.mean_latitude(), bb.min_lng);
    let far = GeoPoint::new(bb.max_lat, bb.max_lng);
    let near = GeoPoint::new(bb.min_lat, bb.min_lng);
    let too_large = InputError::TooLarge {
        field: "polygon",
        max: MAX_EXTENT_M,
    };
    let (Some(a), Some(b)) = (unproject(reference, near), unproject(reference, far)) else {
        return Err(too_large);
    };
    let span = b - a;
    if span.x > MAX_EXTENT_M || span.y > MAX_EXTENT_M {
        return Err(too_large);
    }
    Ok(())
}

/// Look up a crop, turning "not found" into a named failure.
pub fn resolve_crop<'a>(
    catalog: &'a CropCatalog,
    name: &str,
) -> Result<&'a CropSpacing, InputError> {
    let name = name.trim();
    catalog
        .spacing(name)
        .ok_or_else(|| InputError::UnknownCrop(name.to_string()))
}

/// Validated land-area request: the plot size and how many plants to place.
#[derive(Clone, Debug, PartialEq)]
pub struct LandAreaRequest {
    pub area: f64,
    pub length: f64,
    pub width: f64,
    pub crop: CropSpacing,
    pub max_count: usize,
}

impl LandAreaRequest {
    /// Validate raw fields from the land-area form.
    ///
    /// With neither `length` nor `width` the plot is square. Given one side,
    /// the other is `area / side`. Given both, they are taken as entered.
    /// Every side, the area, and the resulting plant count must lie within
    /// [`MAX_SIDE_M`], [`MAX_AREA_SQM`], and [`MAX_PLANTS`].
    pub fn parse(
        catalog: &CropCatalog,
        crop: &str,
        area: &str,
        length: Option<&str>,
        width: Option<&str>,
    ) -> Result<Self, InputError> {
        let crop = resolve_crop(catalog, crop)?.clone();
        let area = parse_area("area", area)?;
        let length = length.map(|s| parse_side("length", s)).transpose()?;
        let width = width.map(|s| parse_side("width", s)).transpose()?;
        // `given` is the field that was entered, `derived` the one computed from it.
        let side = |s: f64, given: &'static str, derived: &'static str| {
            let other = complementary_side(area, s)
                .ok_or(InputError::NotPositive { field: given, value: s })?;
            at_most(derived, other, MAX_SIDE_M)
        };
        let (length, width) = match (length, width) {
            (Some(l), Some(w)) => (l, w),
            (Some(l), None) => (l, side(l, "length", "width")?),
            (None, Some(w)) => (side(w, "width", "length")?, w),
            (None, None) => {
                let s = square_side(area).ok_or(InputError::NotPositive {
                    field: "area",
                    value: area,
                })?;
                (s, s)
            }
        };
        let max_count = estimated_quantity(&crop, area);
        if max_count as u64 > MAX_PLANTS {
            return Err(InputError::TooLarge {
                field: "area",
                max: MAX_PLANTS as f64 * crop.area_per_plant,
            });
        }
        Ok(Self {
            area,
            length,
            width,
            crop,
            max_count,
        })
    }

    pub fn plot(&self, center: GeoPoint) -> Plot {
        Plot::new(center, self.length, self.width)
    }
}

/// Validated crop-quantity request: a square plot sized for `quantity` plants.
#[derive(Clone, Debug, PartialEq)]
pub struct CropQuantityRequest {
    pub crop: CropSpacing,
    pub quantity: u64,
}

impl CropQuantityRequest {
    /// The plot needed for `quantity` plants must stay within [`MAX_AREA_SQM`].
    pub fn parse(catalog: &CropCatalog, crop: &str, quantity: &str) -> Result<Self, InputError> {
        let crop = resolve_crop(catalog, crop)?.clone();
        let quantity = parse_count("quantity", quantity)?;
        if estimated_area(&crop, quantity) > MAX_AREA_SQM {
            return Err(InputError::TooLarge {
                field: "quantity",
                max: (MAX_AREA_SQM / crop.area_per_plant).floor(),
            });
        }
        Ok(Self { crop, quantity })
    }

    pub fn area(&self) -> f64 {
        estimated_area(&self.crop, self.quantity)
    }

    pub fn max_count(&self) -> usize {
        usize::try_from(self.quantity).unwrap_or(usize::MAX)
    }

    pub fn plot(&self, center: GeoPoint) -> Plot {
        Plot::from_quantity(center, &self.crop, self.quantity)
    }
}
