//! Plan serialization (JSON / CSV / Parquet) and polygon CSV input.

use agriplot::dms::to_dms;
use agriplot::geo::GeoPoint;
use agriplot::plot::PlantingPlan;
use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use polars::prelude::*;
use serde_json::{json, Value};
use std::fs::File;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Csv,
    Parquet,
}

pub fn point_json(p: &GeoPoint) -> Value {
    json!({
        "lat": p.latitude,
        "lng": p.longitude,
        "lat_dms": to_dms(p.latitude, true),
        "lng_dms": to_dms(p.longitude, false),
    })
}

pub fn plan_json(plan: &PlantingPlan) -> Value {
    json!({
        "crop": plan.crop,
        "polygon": plan.polygon.iter().map(point_json).collect::<Vec<_>>(),
        "count": plan.len(),
        "positions": plan.positions.iter().map(point_json).collect::<Vec<_>>(),
    })
}

/// One row per point: `kind` is `corner` or `plant`, `seq` the index within its kind.
fn plan_frame(plan: &PlantingPlan) -> PolarsResult<DataFrame> {
    let rows = plan
        .polygon
        .iter()
        .enumerate()
        .map(|(i, p)| ("corner", i as u32, p))
        .chain(
            plan.positions
                .iter()
                .enumerate()
                .map(|(i, p)| ("plant", i as u32, p)),
        );
    let mut kind = Vec::new();
    let mut seq = Vec::new();
    let mut lat = Vec::new();
    let mut lng = Vec::new();
    for (k, i, p) in rows {
        kind.push(k);
        seq.push(i);
        lat.push(p.latitude);
        lng.push(p.longitude);
    }
    df!(
        "kind" => kind,
        "seq" => seq,
        "lat" => lat,
        "lng" => lng,
    )
}

/// Write `plan` to `path` in `format`, creating parent directories.
pub fn write_plan(plan: &PlantingPlan, path: &Path, format: Format) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    match format {
        Format::Json => {
            std::fs::write(path, serde_json::to_vec_pretty(&plan_json(plan))?)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        Format::Csv => {
            let mut df = plan_frame(plan)?;
            let mut file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            CsvWriter::new(&mut file).finish(&mut df)?;
        }
        Format::Parquet => {
            let mut df = plan_frame(plan)?;
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            ParquetWriter::new(file).finish(&mut df)?;
        }
    }
    tracing::info!(path = %path.display(), ?format, positions = plan.len(), "plan_written");
    Ok(())
}

/// Read polygon vertices from a CSV with `lat` and `lng` columns, in file order.
pub fn read_polygon_csv(path: &Path) -> Result<Vec<GeoPoint>> {
    let df = LazyCsvReader::new(path)
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading polygon {}", path.display()))?;
    let lat = df.column("lat")?.cast(&DataType::Float64)?;
    let lng = df.column("lng")?.cast(&DataType::Float64)?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (a, b)) in lat.f64()?.into_iter().zip(lng.f64()?.into_iter()).enumerate() {
        match (a, b) {
            (Some(a), Some(b)) => out.push(GeoPoint::new(a, b)),
            _ => bail!("{}: row {row} has a missing lat/lng", path.display()),
        }
    }
    tracing::info!(path = %path.display(), vertices = out.len(), "polygon_read");
    Ok(out)
}
