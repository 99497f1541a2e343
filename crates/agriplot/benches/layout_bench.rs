//! Criterion benchmarks for plot corners and the planting grid.
//! Focus sizes: plot side in {10, 50, 200} meters, Corn spacing (0.75 m).
//! Results: by default under target/criterion.

use agriplot::crops::CropCatalog;
use agriplot::plot::rand::{draw_plots, PlotCfg};
use agriplot::plot::{planting_positions, rectangle_corners};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_layout(c: &mut Criterion) {
    let catalog = CropCatalog::default();
    let spacing = catalog
        .spacing("Corn")
        .map(|crop| crop.planting_distance)
        .unwrap_or(1.0);
    let mut group = c.benchmark_group("layout");
    for &side in &[10.0f64, 50.0, 200.0] {
        let cfg = PlotCfg {
            side_range: (side, side),
            ..PlotCfg::default()
        };
        let plots = draw_plots(cfg, 43, 8);
        let polygons: Vec<_> = plots.iter().map(|p| p.corners()).collect();

        group.bench_with_input(BenchmarkId::new("rectangle_corners", side), &plots, |b, plots| {
            b.iter(|| {
                for p in plots {
                    let _c = rectangle_corners(p.center, p.length, p.width, p.rotation_deg);
                }
            })
        });

        group.bench_with_input(
            BenchmarkId::new("planting_positions", side),
            &polygons,
            |b, polys| {
                b.iter(|| {
                    for poly in polys {
                        let _pts = planting_positions(poly, spacing, usize::MAX);
                    }
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
