//! Synthetic spend series
//!
//! Actuals carry a random term, the forecast does not. The asymmetry is
//! intentional and kept: forecast and actual are not comparable draws.

use chrono::{Days, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::catalog;
use super::types::{DailySpend, FixtureBundle, ForecastPoint, ServiceCost};

/// Length of the observed window ending today.
pub const ACTUAL_DAYS: usize = 30;
/// Length of the forecast window starting tomorrow.
pub const FORECAST_DAYS: usize = 14;

const ACTUAL_BASE: f64 = 800.0;
const ACTUAL_AMPLITUDE: f64 = 120.0;
const ACTUAL_SLOPE: f64 = 5.0;
const ACTUAL_NOISE: f64 = 80.0;

const FORECAST_BASE: f64 = 950.0;
const FORECAST_AMPLITUDE: f64 = 90.0;
const FORECAST_SLOPE: f64 = 4.0;

/// Round half up, matching how chart values have always been rounded
/// (`-2.5` rounds to `-2`, not `-3`).
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Spend for actual day `i` given a uniform sample in `[0, 1)`.
pub fn actual_spend(i: usize, noise: f64) -> u64 {
    let i = i as f64;
    let offset = (i / 3.0).sin() * ACTUAL_AMPLITUDE + i * ACTUAL_SLOPE + noise * ACTUAL_NOISE;
    (ACTUAL_BASE + round_half_up(offset)).max(0.0) as u64
}

/// Spend for forecast day `i`. The phase continues where actuals stop.
pub fn forecast_spend(i: usize) -> u64 {
    let t = (i + ACTUAL_DAYS) as f64;
    let offset = (t / 3.0).sin() * FORECAST_AMPLITUDE + t * FORECAST_SLOPE;
    (FORECAST_BASE + round_half_up(offset)).max(0.0) as u64
}

/// Produces fixture bundles.
///
/// Unseeded by default; a seed pins the random term for every bundle
/// this generator produces.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureGenerator {
    seed: Option<u64>,
}

impl FixtureGenerator {
    /// Generator drawing from the thread RNG.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator drawing from a seeded RNG.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Optional seed, as configured.
    pub fn with_seed(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generate a bundle anchored on the current UTC date.
    pub fn generate(&self) -> FixtureBundle {
        let today = Utc::now().date_naive();
        match self.seed {
            Some(seed) => generate_with(today, &mut StdRng::seed_from_u64(seed)),
            None => generate_with(today, &mut rand::thread_rng()),
        }
    }
}

/// Generate a bundle for an explicit `today` and RNG.
pub fn generate_with<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> FixtureBundle {
    let days: Vec<DailySpend> = (0..ACTUAL_DAYS)
        .map(|i| {
            let day = today - Days::new((ACTUAL_DAYS - 1 - i) as u64);
            DailySpend::new(day, actual_spend(i, rng.gen::<f64>()))
        })
        .collect();

    let forecast: Vec<ForecastPoint> = (0..FORECAST_DAYS)
        .map(|i| {
            let day = today + Days::new((i + 1) as u64);
            ForecastPoint::new(day, forecast_spend(i))
        })
        .collect();

    let services = catalog::services();
    let by_service = services.iter().map(ServiceCost::from).collect();
    let anomalies = catalog::anomalies(&days);

    FixtureBundle {
        days,
        forecast,
        services,
        by_service,
        anomalies,
        recs: catalog::recommendations(),
    }
}
