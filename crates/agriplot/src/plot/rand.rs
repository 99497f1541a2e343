//! Seeded random plots for property tests and benchmarks.
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//! so the `index`-th draw of a seed can be reproduced in isolation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geo::GeoPoint;

use super::rect::Plot;

/// Sampling ranges for random plots.
#[derive(Clone, Copy, Debug)]
pub struct PlotCfg {
    /// Center latitude range (degrees). Clamped to [-80, 80].
    pub lat_range: (f64, f64),
    /// Center longitude range (degrees).
    pub lng_range: (f64, f64),
    /// Side length range (meters), used for both length and width.
    pub side_range: (f64, f64),
    /// Draw a rotation uniformly from [0, 360)? Otherwise 0.
    pub random_rotation: bool,
}

impl Default for PlotCfg {
    fn default() -> Self {
        Self {
            lat_range: (-60.0, 60.0),
            lng_range: (-179.0, 179.0),
            side_range: (1.0, 200.0),
            random_rotation: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

#[inline]
fn sample_range<R: Rng>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Draw one plot for `tok`.
pub fn draw_plot(cfg: PlotCfg, tok: ReplayToken) -> Plot {
    let mut rng = tok.to_std_rng();
    let lat_lo = cfg.lat_range.0.max(-80.0);
    let lat_hi = cfg.lat_range.1.min(80.0);
    let lat = sample_range(&mut rng, (lat_lo, lat_hi));
    let lng = sample_range(&mut rng, cfg.lng_range);
    let length = sample_range(&mut rng, cfg.side_range);
    let width = sample_range(&mut rng, cfg.side_range);
    let rotation = if cfg.random_rotation {
        rng.gen::<f64>() * 360.0
    } else {
        0.0
    };
    Plot::new(GeoPoint::new(lat, lng), length, width).with_rotation(rotation)
}

/// The first `n` plots of `seed`.
pub fn draw_plots(cfg: PlotCfg, seed: u64, n: usize) -> Vec<Plot> {
    (0..n as u64)
        .map(|index| draw_plot(cfg, ReplayToken { seed, index }))
        .collect()
}
