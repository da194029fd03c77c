//! Exposure time to shutter-speed display conversion.
//!
//! Sub-second exposures read as fractions (`1/250`), longer ones as whole
//! seconds (`3`). Fractions are reduced with a limit-denominator continued
//! fraction search, so noisy rationals such as `10/2499` still come out as a
//! short fraction and float inputs don't leak binary noise into the display.

use std::fmt;

use crate::types::Ratio;

/// Largest denominator a displayed fraction may have.
pub const MAX_DENOMINATOR: u128 = 1_000_000;

/// Display form of an exposure time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutterSpeed {
    /// Exposure below one second, in lowest terms.
    Fraction { num: u64, den: u64 },
    /// Exposure of one second or longer, rounded.
    Whole(u64),
}

impl ShutterSpeed {
    /// Convert an EXIF exposure rational.
    ///
    /// The denominator must be non-zero.
    pub fn from_ratio(ratio: Ratio) -> Self {
        let (num, den) = (ratio.num as u64, ratio.denom as u64);
        if num < den {
            let (p, q) = limit_denominator(num as u128, den as u128, MAX_DENOMINATOR);
            ShutterSpeed::Fraction {
                num: p as u64,
                den: q as u64,
            }
        } else {
            ShutterSpeed::Whole(round_half_even(num, den))
        }
    }

    /// Convert an exposure time given as float seconds.
    ///
    /// Non-finite or negative inputs display as `0`.
    pub fn from_seconds(seconds: f64) -> Self {
        if !seconds.is_finite() || seconds <= 0.0 {
            return ShutterSpeed::Fraction { num: 0, den: 1 };
        }
        if seconds >= 1.0 {
            return ShutterSpeed::Whole(seconds.round_ties_even() as u64);
        }
        // Exact for anything slower than 1/4096s; below that the error is far
        // beneath what MAX_DENOMINATOR can resolve.
        let scale = (1u128 << 64) as f64;
        let num = (seconds * scale).round() as u128;
        let (p, q) = limit_denominator(num, 1u128 << 64, MAX_DENOMINATOR);
        ShutterSpeed::Fraction {
            num: p as u64,
            den: q as u64,
        }
    }
}

impl fmt::Display for ShutterSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ShutterSpeed::Fraction { num, den: 1 } => write!(f, "{num}"),
            ShutterSpeed::Fraction { num, den } => write!(f, "{num}/{den}"),
            ShutterSpeed::Whole(secs) => write!(f, "{secs}"),
        }
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// `num / den` rounded to the nearest integer, ties to even.
fn round_half_even(num: u64, den: u64) -> u64 {
    let (q, r) = (num / den, num % den);
    match (2 * r).cmp(&den) {
        std::cmp::Ordering::Less => q,
        std::cmp::Ordering::Greater => q + 1,
        std::cmp::Ordering::Equal => q + (q & 1),
    }
}

/// Closest fraction to `num / den` whose denominator is at most `max_den`.
///
/// Walks the continued fraction expansion until the next convergent would
/// exceed `max_den`, then picks whichever of the last convergent and the best
/// semiconvergent is nearer. Result is in lowest terms.
fn limit_denominator(num: u128, den: u128, max_den: u128) -> (u128, u128) {
    let g = gcd(num, den);
    if g == 0 {
        return (0, 1);
    }
    let (num, den) = (num / g, den / g);
    if den <= max_den {
        return (num, den);
    }

    let (mut p0, mut q0, mut p1, mut q1) = (0u128, 1u128, 1u128, 0u128);
    let (mut n, mut d) = (num, den);
    loop {
        let a = n / d;
        let q2 = q0 + a * q1;
        if q2 > max_den {
            break;
        }
        (p0, q0, p1, q1) = (p1, q1, p0 + a * p1, q2);
        (n, d) = (d, n - a * d);
    }

    let k = (max_den - q0) / q1;
    if 2 * d * (q0 + k * q1) <= den {
        (p1, q1)
    } else {
        (p0 + k * p1, q0 + k * q1)
    }
}
