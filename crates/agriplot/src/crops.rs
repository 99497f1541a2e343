//! Crop spacing catalog.
//!
//! The catalog is a plain value: build it once (usually via `Default`) and
//! pass it to whatever needs a lookup. Nothing here is global.

use std::collections::BTreeMap;

/// Planting parameters for one crop.
#[derive(Clone, Debug, PartialEq)]
pub struct CropSpacing {
    pub name: String,
    /// Square meters one plant needs; drives quantity/area estimates.
    pub area_per_plant: f64,
    /// Minimum center-to-center distance between plants (meters).
    pub planting_distance: f64,
}

impl CropSpacing {
    pub fn new(name: impl Into<String>, area_per_plant: f64, planting_distance: f64) -> Self {
        Self {
            name: name.into(),
            area_per_plant,
            planting_distance,
        }
    }
}

/// Name → spacing table.
#[derive(Clone, Debug, PartialEq)]
pub struct CropCatalog {
    crops: BTreeMap<String, CropSpacing>,
}

impl Default for CropCatalog {
    /// The five built-in crops.
    fn default() -> Self {
        Self::from_crops([
            CropSpacing::new("Banana", 3.24, 2.0),
            CropSpacing::new("Cassava", 1.0, 1.0),
            CropSpacing::new("Sweet Potato", 0.23, 0.5),
            CropSpacing::new("Mango", 400.0, 20.0),
            CropSpacing::new("Corn", 0.38, 0.75),
        ])
    }
}

impl CropCatalog {
    pub fn empty() -> Self {
        Self {
            crops: BTreeMap::new(),
        }
    }

    /// Later entries replace earlier ones with the same name.
    pub fn from_crops(crops: impl IntoIterator<Item = CropSpacing>) -> Self {
        let mut c = Self::empty();
        for crop in crops {
            c.insert(crop);
        }
        c
    }

    pub fn insert(&mut self, crop: CropSpacing) -> Option<CropSpacing> {
        self.crops.insert(crop.name.clone(), crop)
    }

    /// Exact, case-sensitive lookup.
    pub fn spacing(&self, name: &str) -> Option<&CropSpacing> {
        self.crops.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.crops.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CropSpacing> {
        self.crops.values()
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

/// How many plants fit into `area` square meters: `floor(area / area_per_plant)`.
///
/// Zero when either value is non-positive or the ratio is not finite.
pub fn estimated_quantity(crop: &CropSpacing, area: f64) -> usize {
    if !(crop.area_per_plant > 0.0 && area > 0.0) {
        return 0;
    }
    let q = (area / crop.area_per_plant).floor();
    if q.is_finite() {
        q as usize
    } else {
        0
    }
}

/// Land needed for `quantity` plants (square meters).
#[inline]
pub fn estimated_area(crop: &CropSpacing, quantity: u64) -> f64 {
    quantity as f64 * crop.area_per_plant
}

/// Combined land needed for several crops.
pub fn total_area<'a>(items: impl IntoIterator<Item = (&'a CropSpacing, u64)>) -> f64 {
    items
        .into_iter()
        .map(|(crop, quantity)| estimated_area(crop, quantity))
        .sum()
}
