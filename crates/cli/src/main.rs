use agriplot::api::{
    check_polygon_extent, parse_count, parse_number, parse_side, rectangle_corners, resolve_crop,
    soil_samples, to_dms, CropQuantityRequest, GeoPoint, LandAreaRequest, PlantingPlan,
};
use agriplot::crops::CropCatalog;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod catalog;
mod output;
mod provenance;

use output::Format;
use provenance::Provenance;

#[derive(Parser)]
#[command(name = "agriplot")]
#[command(about = "Plan crop placement on a rectangular plot")]
struct Cmd {
    /// JSON crop catalog replacing the built-in crops
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

/// Plot center and orientation. Numbers are taken as text and validated.
#[derive(Args, Debug)]
struct Placement {
    #[arg(long, allow_hyphen_values = true)]
    lat: String,
    #[arg(long, allow_hyphen_values = true)]
    lng: String,
    /// Degrees; accumulates like repeated rotate presses, no wrapping
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    rotation: String,
}

/// Where and how to write the plan. Without `--out`, JSON goes to stdout.
#[derive(Args, Debug)]
struct Sink {
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

#[derive(Subcommand)]
enum Action {
    /// Plan from a land area (square by default, or one/both sides given)
    LandArea {
        #[arg(long)]
        crop: String,
        /// Square meters
        #[arg(long)]
        area: String,
        #[arg(long)]
        length: Option<String>,
        #[arg(long)]
        width: Option<String>,
        #[command(flatten)]
        at: Placement,
        #[command(flatten)]
        sink: Sink,
    },
    /// Plan a square plot sized for a number of plants
    Quantity {
        #[arg(long)]
        crop: String,
        #[arg(long)]
        quantity: String,
        #[command(flatten)]
        at: Placement,
        #[command(flatten)]
        sink: Sink,
    },
    /// Place a crop inside a polygon read from CSV (`lat,lng` columns)
    Place {
        #[arg(long)]
        polygon: PathBuf,
        #[arg(long)]
        crop: String,
        #[arg(long)]
        max: String,
        #[command(flatten)]
        sink: Sink,
    },
    /// Print the four corners of a rotated rectangle
    Corners {
        #[arg(long)]
        length: String,
        #[arg(long)]
        width: String,
        #[command(flatten)]
        at: Placement,
    },
    /// Print the soil-sampling dot grid covering a rotated rectangle
    Samples {
        #[arg(long)]
        length: String,
        #[arg(long)]
        width: String,
        /// Square meters used to pick the dot spacing; defaults to length × width
        #[arg(long)]
        area: Option<String>,
        #[command(flatten)]
        at: Placement,
    },
    /// List the crop catalog in use
    Crops,
    /// Format a decimal degree value as degrees/minutes/seconds
    Dms {
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Treat the value as a longitude (E/W) instead of a latitude (N/S)
        #[arg(long)]
        longitude: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let catalog = catalog::load_catalog(cmd.catalog.as_deref())?;
    match cmd.action {
        Action::LandArea {
            crop,
            area,
            length,
            width,
            at,
            sink,
        } => land_area(&catalog, &crop, &area, length, width, at, sink),
        Action::Quantity {
            crop,
            quantity,
            at,
            sink,
        } => crop_quantity(&catalog, &crop, &quantity, at, sink),
        Action::Place {
            polygon,
            crop,
            max,
            sink,
        } => place(&catalog, polygon, &crop, &max, sink),
        Action::Corners { length, width, at } => corners(&length, &width, at),
        Action::Samples {
            length,
            width,
            area,
            at,
        } => samples(&length, &width, area.as_deref(), at),
        Action::Crops => crops(&catalog),
        Action::Dms { value, longitude } => dms(&value, longitude),
        Action::Report => report(),
    }
}

fn center_and_rotation(at: &Placement) -> Result<(GeoPoint, f64)> {
    let lat = parse_number("lat", &at.lat)?;
    let lng = parse_number("lng", &at.lng)?;
    let rotation = parse_number("rotation", &at.rotation)?;
    Ok((GeoPoint::new(lat, lng), rotation))
}

fn emit(plan: &PlantingPlan, sink: &Sink, record: Provenance) -> Result<()> {
    if plan.polygon.is_empty() {
        tracing::warn!(crop = %plan.crop, "no plot to draw");
    }
    match &sink.out {
        Some(path) => {
            output::write_plan(plan, path, sink.format)?;
            record.with_plan(plan).write_beside(path)?;
        }
        None => println!("{}", serde_json::to_string_pretty(&output::plan_json(plan))?),
    }
    Ok(())
}

fn land_area(
    catalog: &CropCatalog,
    crop: &str,
    area: &str,
    length: Option<String>,
    width: Option<String>,
    at: Placement,
    sink: Sink,
) -> Result<()> {
    let (center, rotation) = center_and_rotation(&at)?;
    let req = LandAreaRequest::parse(catalog, crop, area, length.as_deref(), width.as_deref())?;
    tracing::info!(
        crop = %req.crop.name,
        area = req.area,
        length = req.length,
        width = req.width,
        max_count = req.max_count,
        "land_area"
    );
    let plot = req.plot(center).with_rotation(rotation);
    let plan = PlantingPlan::for_plot(&plot, &req.crop, req.max_count);
    let record = Provenance::new(
        "land-area",
        json!({
            "crop": req.crop.name,
            "area": req.area,
            "length": req.length,
            "width": req.width,
            "center": [center.latitude, center.longitude],
            "rotation_deg": rotation,
            "max_count": req.max_count,
        }),
    );
    emit(&plan, &sink, record)
}

fn crop_quantity(
    catalog: &CropCatalog,
    crop: &str,
    quantity: &str,
    at: Placement,
    sink: Sink,
) -> Result<()> {
    let (center, rotation) = center_and_rotation(&at)?;
    let req = CropQuantityRequest::parse(catalog, crop, quantity)?;
    tracing::info!(crop = %req.crop.name, quantity = req.quantity, area = req.area(), "quantity");
    let plot = req.plot(center).with_rotation(rotation);
    let plan = PlantingPlan::for_plot(&plot, &req.crop, req.max_count());
    let record = Provenance::new(
        "quantity",
        json!({
            "crop": req.crop.name,
            "quantity": req.quantity,
            "area": req.area(),
            "center": [center.latitude, center.longitude],
            "rotation_deg": rotation,
        }),
    );
    emit(&plan, &sink, record)
}

fn place(
    catalog: &CropCatalog,
    polygon: PathBuf,
    crop: &str,
    max: &str,
    sink: Sink,
) -> Result<()> {
    let crop = resolve_crop(catalog, crop)?;
    let max_count = usize::try_from(parse_count("max", max)?).unwrap_or(usize::MAX);
    let vertices = output::read_polygon_csv(&polygon)?;
    check_polygon_extent(&vertices)?;
    tracing::info!(crop = %crop.name, vertices = vertices.len(), max_count, "place");
    let plan = PlantingPlan::for_polygon(vertices, crop, max_count);
    let record = Provenance::new("place", json!({ "crop": crop.name, "max_count": max_count }))
        .with_input(&polygon);
    emit(&plan, &sink, record)
}

fn corners(length: &str, width: &str, at: Placement) -> Result<()> {
    let (center, rotation) = center_and_rotation(&at)?;
    let length = parse_side("length", length)?;
    let width = parse_side("width", width)?;
    let pts = rectangle_corners(center, length, width, rotation);
    tracing::info!(corners = pts.len(), "corners");
    let doc: Vec<_> = pts.iter().map(output::point_json).collect();
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn samples(length: &str, width: &str, area: Option<&str>, at: Placement) -> Result<()> {
    let (center, rotation) = center_and_rotation(&at)?;
    let dots = soil_samples(center, length, width, area, rotation)?;
    tracing::info!(dots = dots.len(), "samples");
    let doc: Vec<_> = dots.iter().map(output::point_json).collect();
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn crops(catalog: &CropCatalog) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&catalog::catalog_json(catalog))?
    );
    Ok(())
}

fn dms(value: &str, longitude: bool) -> Result<()> {
    let v = parse_number("value", value)?;
    println!("{}", to_dms(v, !longitude));
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", Provenance::new("report", json!({})).to_json()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn negative_coordinates_parse() {
        let cmd = Cmd::try_parse_from([
            "agriplot", "corners", "--length", "10", "--width", "5", "--lat", "-33.9",
            "--lng", "-70.6", "--rotation", "-15",
        ])
        .unwrap();
        let Action::Corners { at, .. } = cmd.action else {
            panic!("expected corners");
        };
        let (center, rotation) = center_and_rotation(&at).unwrap();
        assert_eq!(center, GeoPoint::new(-33.9, -70.6));
        assert_eq!(rotation, -15.0);
    }

    #[test]
    fn bad_coordinate_is_a_named_error() {
        let at = Placement {
            lat: "north".into(),
            lng: "0".into(),
            rotation: "0".into(),
        };
        let err = center_and_rotation(&at).unwrap_err();
        assert_eq!(err.to_string(), "lat: `north` is not a number");
    }

    #[test]
    fn samples_subcommand_parses_optional_area() {
        let cmd = Cmd::try_parse_from([
            "agriplot", "samples", "--length", "40", "--width", "20", "--lat", "7.1", "--lng",
            "125.6",
        ])
        .unwrap();
        let Action::Samples { area, length, .. } = cmd.action else {
            panic!("expected samples");
        };
        assert_eq!(area, None);
        assert_eq!(length, "40");
    }
}
