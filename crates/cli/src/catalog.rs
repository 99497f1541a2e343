//! Crop catalog loading: built-in defaults or a JSON override file.
//!
//! File shape: `{ "<name>": { "area_per_plant": f64, "planting_distance": f64 }, ... }`.

use agriplot::crops::{CropCatalog, CropSpacing};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropEntry {
    pub area_per_plant: f64,
    pub planting_distance: f64,
}

/// Parse a catalog document. Entries must have positive, finite values.
pub fn parse_catalog(text: &str) -> Result<CropCatalog> {
    let raw: BTreeMap<String, CropEntry> =
        serde_json::from_str(text).context("parsing crop catalog JSON")?;
    let mut catalog = CropCatalog::empty();
    for (name, e) in raw {
        for (field, v) in [
            ("area_per_plant", e.area_per_plant),
            ("planting_distance", e.planting_distance),
        ] {
            if !(v.is_finite() && v > 0.0) {
                bail!("crop `{name}`: {field} must be a positive number, got {v}");
            }
        }
        catalog.insert(CropSpacing::new(name, e.area_per_plant, e.planting_distance));
    }
    Ok(catalog)
}

/// Load the catalog once at startup.
pub fn load_catalog(path: Option<&Path>) -> Result<CropCatalog> {
    let Some(path) = path else {
        return Ok(CropCatalog::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading crop catalog {}", path.display()))?;
    let catalog = parse_catalog(&text)?;
    tracing::info!(path = %path.display(), crops = catalog.len(), "catalog_loaded");
    Ok(catalog)
}

/// Serializable view of a catalog (for `crops` output).
pub fn catalog_json(catalog: &CropCatalog) -> BTreeMap<String, CropEntry> {
    catalog
        .iter()
        .map(|c| {
            (
                c.name.clone(),
                CropEntry {
                    area_per_plant: c.area_per_plant,
                    planting_distance: c.planting_distance,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_when_no_path() {
        let c = load_catalog(None).unwrap();
        assert_eq!(c, CropCatalog::default());
    }

    #[test]
    fn parses_override_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("crops.json");
        std::fs::write(
            &path,
            r#"{"Rice": {"area_per_plant": 0.04, "planting_distance": 0.2}}"#,
        )
        .unwrap();
        let c = load_catalog(Some(&path)).unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c.spacing("Rice").unwrap().planting_distance, 0.2);
        assert!(c.spacing("Banana").is_none());
    }

    #[test]
    fn rejects_non_positive_values() {
        let err = parse_catalog(r#"{"Bad": {"area_per_plant": 0, "planting_distance": 1}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("area_per_plant"), "{err}");
        assert!(parse_catalog("not json").is_err());
    }

    #[test]
    fn json_view_round_trips_through_parse() {
        let c = CropCatalog::default();
        let text = serde_json::to_string(&catalog_json(&c)).unwrap();
        assert_eq!(parse_catalog(&text).unwrap(), c);
    }
}
