//! Print a planting plan for one crop on a land-area plot.
//!
//! Usage:
//!   cargo run -p agriplot --example plan_plot -- Banana 250
//!
//! Prints the plot corners in DMS and the first few planting positions.

use agriplot::api::{plan_land_area, to_dms, CropCatalog, GeoPoint};

fn main() {
    let mut args = std::env::args().skip(1);
    let crop = args.next().unwrap_or_else(|| "Banana".to_string());
    let area = args.next().unwrap_or_else(|| "250".to_string());
    let catalog = CropCatalog::default();
    let center = GeoPoint::new(9.3093, 123.308);
    match plan_land_area(&catalog, center, &crop, &area, None, None, 0.0) {
        Ok(plan) => {
            for c in &plan.polygon {
                println!(
                    "corner {} {}",
                    to_dms(c.latitude, true),
                    to_dms(c.longitude, false)
                );
            }
            println!("{} positions for {}", plan.len(), plan.crop);
            for p in plan.positions.iter().take(5) {
                println!("  {:.7}, {:.7}", p.latitude, p.longitude);
            }
        }
        Err(e) => eprintln!("error: {e}"),
    }
}
