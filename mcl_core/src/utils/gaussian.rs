// mcl_core/src/utils/gaussian.rs

use rand::RngCore;
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;

// --- Gaussian Sampling & Density ---
// The two statistical primitives the particle model is built on: noise
// injection (sample) and likelihood evaluation (density).

/// Draws one value from `Normal(mean, std_dev²)`, consuming the given random
/// stream.
///
/// `std_dev == 0` degenerates to returning `mean` exactly.
///
/// # Panics
/// Panics if `std_dev` is negative or NaN; standard deviations come from
/// configuration and are never negative in a correct driver.
pub fn sample(rng: &mut dyn RngCore, mean: f64, std_dev: f64) -> f64 {
    Normal::new(mean, std_dev)
        .expect("standard deviation must be non-negative")
        .sample(rng)
}

/// The Normal probability density at `x` for `Normal(mean, std_dev²)`:
///
/// `exp(-(mean - x)² / std_dev²) / sqrt(2π·std_dev²)`
///
/// Both the exponent denominator and the normalizing term use the variance
/// `std_dev²`; keep the formula in exactly this shape, likelihood products
/// downstream depend on it bit-for-bit. Undefined at `std_dev == 0` (the
/// division yields NaN or ∞ per IEEE 754); callers must guard the degenerate
/// case themselves.
pub fn density(mean: f64, std_dev: f64, x: f64) -> f64 {
    (-(mean - x).powi(2) / std_dev.powi(2)).exp() / (2.0 * PI * std_dev.powi(2)).sqrt()
}
