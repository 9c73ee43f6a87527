//! Bounded sampling on top of any [`RandomBitGenerator`].
//!
//! Every sampler calibrates from the generator's `MIN`/`MAX`, so the same
//! code works for the engine, a bare [`XoroshiroState`](crate::XoroshiroState),
//! or any other contract implementor.
//!
//! # Bit Quality
//!
//! xoroshiro128+ has weaker low bits. Samplers here either scale the whole
//! word into a real (dominated by the top bits) or read the top bits directly;
//! none of them reduce modulo a small number.
//!
//! # Example
//!
//! ```
//! use xoroshiro_core_rs::sampling;
//! use xoroshiro_core_rs::XoroshiroEngine;
//!
//! let mut rng = XoroshiroEngine::new(42, 0);
//! let x = sampling::uniform(&mut rng, -1.0, 1.0);
//! assert!((-1.0..1.0).contains(&x));
//!
//! let coin = sampling::boolean(&mut rng);
//! let die = sampling::range(&mut rng, 1, 7);
//! assert!((1..7).contains(&die));
//! # let _ = coin;
//! ```

use crate::rng::RandomBitGenerator;

/// Largest mean handed to a single Knuth loop; `exp(-500)` is still a normal f64.
const POISSON_CHUNK: f64 = 500.0;

/// Above this mean `poisson` switches to the normal approximation
/// (skewness `1/sqrt(lambda)` is below 0.004 here).
pub const POISSON_NORMAL_THRESHOLD: f64 = 1.0e5;

/// Real value in the half-open interval `[lower, upper)`.
///
/// Rounding can land exactly on `upper`; such draws are discarded and a
/// fresh raw output is taken until the value falls inside the interval.
/// Intervals wider than `f64::MAX` are interpolated between the bounds
/// instead of scaled from `lower`.
///
/// # Panics
/// Panics if `lower >= upper` or either bound is not finite.
pub fn uniform<G>(rng: &mut G, lower: f64, upper: f64) -> f64
where
    G: RandomBitGenerator + ?Sized,
{
    assert!(lower < upper, "lower bound must be less than upper bound");
    assert!(
        lower.is_finite() && upper.is_finite(),
        "bounds must be finite"
    );
    let length = upper - lower;

    let span = (G::MAX - G::MIN) as f64;
    loop {
        let t = (rng.next_u64() - G::MIN) as f64 / span;
        let value = if length.is_finite() {
            lower + length * t
        } else {
            lower * (1.0 - t) + upper * t
        };
        if value >= lower && value < upper {
            return value;
        }
    }
}

/// Real value in `[0.0, 1.0)`.
#[inline]
pub fn unit_f64<G>(rng: &mut G) -> f64
where
    G: RandomBitGenerator + ?Sized,
{
    uniform(rng, 0.0, 1.0)
}

/// Fair coin from the most significant bit of one raw output.
#[inline]
pub fn boolean<G>(rng: &mut G) -> bool
where
    G: RandomBitGenerator + ?Sized,
{
    (rng.next_u64() as i64) < 0
}

/// Integer in `[min, max)`.
///
/// Uses the high half of `raw * span`, so the result is drawn from the top
/// bits of the output.
///
/// # Panics
/// Panics if `min >= max`.
pub fn range<G>(rng: &mut G, min: i64, max: i64) -> i64
where
    G: RandomBitGenerator + ?Sized,
{
    assert!(min < max, "min must be less than max");

    let span = max.wrapping_sub(min) as u64;
    let offset = ((rng.next_u64() as u128 * span as u128) >> 64) as u64;
    min.wrapping_add(offset as i64)
}

/// Standard normal sample via the Box-Muller transform.
pub fn standard_normal<G>(rng: &mut G) -> f64
where
    G: RandomBitGenerator + ?Sized,
{
    let u1 = unit_f64(rng);
    let u2 = unit_f64(rng);
    // 1 - u1 lies in (0, 1], keeping ln finite
    (-2.0 * (1.0 - u1).ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Exponential sample with the given rate (mean `1 / rate`).
///
/// # Panics
/// Panics unless `rate` is positive and finite.
pub fn exponential<G>(rng: &mut G, rate: f64) -> f64
where
    G: RandomBitGenerator + ?Sized,
{
    assert!(rate > 0.0 && rate.is_finite(), "rate must be positive and finite");
    -(1.0 - unit_f64(rng)).ln() / rate
}

/// Poisson sample with mean `lambda`.
///
/// Means up to [`POISSON_NORMAL_THRESHOLD`] are split into chunks and summed,
/// which keeps Knuth's product method away from `exp` underflow. Larger
/// means use the rounded normal approximation, so the cost stays bounded.
///
/// # Panics
/// Panics unless `lambda` is non-negative and finite.
pub fn poisson<G>(rng: &mut G, lambda: f64) -> u64
where
    G: RandomBitGenerator + ?Sized,
{
    assert!(
        lambda >= 0.0 && lambda.is_finite(),
        "lambda must be non-negative and finite"
    );

    if lambda > POISSON_NORMAL_THRESHOLD {
        let sample = lambda + lambda.sqrt() * standard_normal(rng);
        // Saturating cast; a negative tail clamps to zero
        return sample.round().max(0.0) as u64;
    }

    let mut remaining = lambda;
    let mut total = 0u64;
    while remaining > 0.0 {
        let chunk = remaining.min(POISSON_CHUNK);
        total += knuth_poisson(rng, chunk);
        remaining -= chunk;
    }
    total
}

fn knuth_poisson<G>(rng: &mut G, lambda: f64) -> u64
where
    G: RandomBitGenerator + ?Sized,
{
    let limit = (-lambda).exp();
    let mut count = 0u64;
    let mut product = unit_f64(rng);
    while product > limit {
        count += 1;
        product *= unit_f64(rng);
    }
    count
}
