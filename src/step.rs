//! Minimal integer step pairs for ratio-locked resizing.
//!
//! A 1920×1080 image has the ratio 16:9, so while the ratio is locked every
//! valid size is `k × (16, 9)` for some positive `k`. The step pair is the
//! natural size divided by the greatest common divisor of its two axes.
//!
//! # Example
//!
//! ```
//! use zenratio::{compute_step, StepPair};
//!
//! assert_eq!(compute_step(1920, 1080).unwrap(), StepPair::new(16, 9));
//! assert_eq!(compute_step(800, 600).unwrap(), StepPair::new(4, 3));
//! ```

use num_traits::{Float, PrimInt, Unsigned};

use crate::dimension::{Dimension, Field};
use crate::error::ResizeError;

/// Smallest width × height increment that reproduces a ratio exactly.
///
/// Both components are at least 1. `{1, 1}` is also the fallback used when a
/// ratio cannot be reduced to integers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepPair {
    /// Width increment in pixels.
    pub width: u32,
    /// Height increment in pixels.
    pub height: u32,
}

impl StepPair {
    /// Unit step: any integer size is reachable, no ratio is enforced.
    pub const UNIT: Self = Self {
        width: 1,
        height: 1,
    };

    /// Create a step pair.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Increment for one axis, never below 1.
    pub const fn get(&self, field: Field) -> u32 {
        let v = match field {
            Field::Width => self.width,
            Field::Height => self.height,
        };
        if v == 0 { 1 } else { v }
    }

    /// Whether this is the `{1, 1}` unit step.
    pub const fn is_unit(&self) -> bool {
        self.width == 1 && self.height == 1
    }
}

/// Greatest common divisor by the Euclidean algorithm.
///
/// `gcd(a, 0) == a`, so `gcd(0, 0) == 0`.
pub fn gcd<T: PrimInt + Unsigned>(mut a: T, mut b: T) -> T {
    while !b.is_zero() {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}

/// Compute the minimal step pair for integer natural dimensions.
///
/// Returns [`ResizeError::ZeroNaturalDimension`] when either axis is zero.
pub fn compute_step(natural_width: u32, natural_height: u32) -> Result<StepPair, ResizeError> {
    if natural_width == 0 || natural_height == 0 {
        return Err(ResizeError::ZeroNaturalDimension);
    }
    let g = gcd(natural_width, natural_height);
    let (cw, ch) = (natural_width / g, natural_height / g);
    // Always divisible after gcd reduction; kept so a custom caller can't
    // observe a non-reproducing step.
    if natural_width % cw != 0 || natural_height % ch != 0 {
        return Ok(StepPair::UNIT);
    }
    Ok(StepPair::new(cw, ch))
}

/// Upper bound on float Euclid iterations before giving up on a ratio.
const MAX_FLOAT_EUCLID_STEPS: u32 = 64;

/// Compute a step pair from non-integer natural dimensions.
///
/// Some hosts report natural sizes already scaled (device pixel ratio,
/// zoom), so they arrive as floats. The reduction runs Euclid on the float
/// values; if the result does not divide both axes into whole numbers, or the
/// reduced pair is not a pair of `u32` values, the step falls back to
/// [`StepPair::UNIT`].
pub fn compute_step_fractional<F: Float>(
    natural_width: F,
    natural_height: F,
) -> Result<StepPair, ResizeError> {
    let zero = F::zero();
    if !natural_width.is_finite()
        || !natural_height.is_finite()
        || natural_width <= zero
        || natural_height <= zero
    {
        return Err(ResizeError::ZeroNaturalDimension);
    }

    let Some(g) = float_gcd(natural_width, natural_height) else {
        return Ok(StepPair::UNIT);
    };
    let (cw, ch) = (natural_width / g, natural_height / g);
    let integral = |v: F| v.fract() == zero;
    if !integral(cw) || !integral(ch) {
        return Ok(StepPair::UNIT);
    }
    match (cw.to_u32(), ch.to_u32()) {
        (Some(w), Some(h)) if w > 0 && h > 0 => Ok(StepPair::new(w, h)),
        _ => Ok(StepPair::UNIT),
    }
}

fn float_gcd<F: Float>(mut a: F, mut b: F) -> Option<F> {
    for _ in 0..MAX_FLOAT_EUCLID_STEPS {
        if b == F::zero() {
            return Some(a);
        }
        let rem = a % b;
        a = b;
        b = rem;
    }
    None
}

/// Source of step pairs for a [`ResizeEngine`](crate::ResizeEngine).
///
/// The engine takes its calculator by value, so tests can substitute a
/// fixed or recording calculator without touching global state. Closures of
/// the right shape implement this trait.
pub trait StepCalculator {
    /// Step pair for an image with the given natural dimensions.
    fn step(&self, natural: Dimension) -> Result<StepPair, ResizeError>;
}

/// Default calculator: gcd reduction via [`compute_step`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GcdStep;

impl StepCalculator for GcdStep {
    fn step(&self, natural: Dimension) -> Result<StepPair, ResizeError> {
        compute_step(natural.width, natural.height)
    }
}

impl<F> StepCalculator for F
where
    F: Fn(Dimension) -> Result<StepPair, ResizeError>,
{
    fn step(&self, natural: Dimension) -> Result<StepPair, ResizeError> {
        self(natural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── gcd ─────────────────────────────────────────────────────────────

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(1920u32, 1080), 120);
        assert_eq!(gcd(1080u32, 1920), 120);
        assert_eq!(gcd(17u32, 5), 1);
        assert_eq!(gcd(7u32, 0), 7);
        assert_eq!(gcd(0u32, 7), 7);
        assert_eq!(gcd(0u64, 0), 0);
    }

    // ── compute_step ────────────────────────────────────────────────────

    #[test]
    fn step_hd() {
        assert_eq!(compute_step(1920, 1080), Ok(StepPair::new(16, 9)));
    }

    #[test]
    fn step_square() {
        assert_eq!(compute_step(512, 512), Ok(StepPair::new(1, 1)));
    }

    #[test]
    fn step_coprime_natural_is_its_own_step() {
        // 1001×999 shares no factor, so the only valid size is the original.
        assert_eq!(compute_step(1001, 999), Ok(StepPair::new(1001, 999)));
    }

    #[test]
    fn step_one_pixel_axis() {
        assert_eq!(compute_step(1, 300), Ok(StepPair::new(1, 300)));
    }

    #[test]
    fn step_rejects_zero() {
        assert_eq!(compute_step(0, 10), Err(ResizeError::ZeroNaturalDimension));
        assert_eq!(compute_step(10, 0), Err(ResizeError::ZeroNaturalDimension));
    }

    // ── compute_step_fractional ─────────────────────────────────────────

    #[test]
    fn fractional_integral_inputs_match_integer_path() {
        assert_eq!(
            compute_step_fractional(1920.0f64, 1080.0),
            Ok(StepPair::new(16, 9))
        );
    }

    #[test]
    fn fractional_half_pixels_reduce() {
        // gcd(1.5, 1.0) = 0.5 → 3:2
        assert_eq!(compute_step_fractional(1.5f64, 1.0), Ok(StepPair::new(3, 2)));
    }

    #[test]
    fn fractional_half_pixel_width_doubles_step() {
        // gcd(960.5, 540) = 0.5 → 1921:1080
        assert_eq!(
            compute_step_fractional(960.5f64, 540.0),
            Ok(StepPair::new(1921, 1080))
        );
        assert_eq!(
            compute_step_fractional(960.5f32, 540.0),
            Ok(StepPair::new(1921, 1080))
        );
    }

    #[test]
    fn fractional_ugly_ratio_falls_back_to_unit() {
        let step = compute_step_fractional(core::f64::consts::PI, 1.0).unwrap();
        assert_eq!(step, StepPair::UNIT);
    }

    #[test]
    fn fractional_rejects_non_positive_and_non_finite() {
        assert_eq!(
            compute_step_fractional(0.0f64, 1.0),
            Err(ResizeError::ZeroNaturalDimension)
        );
        assert_eq!(
            compute_step_fractional(-4.0f32, 3.0),
            Err(ResizeError::ZeroNaturalDimension)
        );
        assert_eq!(
            compute_step_fractional(f64::NAN, 3.0),
            Err(ResizeError::ZeroNaturalDimension)
        );
        assert_eq!(
            compute_step_fractional(f64::INFINITY, 3.0),
            Err(ResizeError::ZeroNaturalDimension)
        );
    }

    // ── StepCalculator ──────────────────────────────────────────────────

    #[test]
    fn closures_are_calculators() {
        let fixed = |_: Dimension| -> Result<StepPair, ResizeError> { Ok(StepPair::new(2, 1)) };
        assert_eq!(
            fixed.step(Dimension::new(1920, 1080)),
            Ok(StepPair::new(2, 1))
        );
        assert_eq!(
            GcdStep.step(Dimension::new(1920, 1080)),
            Ok(StepPair::new(16, 9))
        );
    }

    #[test]
    fn step_get_never_zero() {
        let s = StepPair::new(0, 9);
        assert_eq!(s.get(Field::Width), 1);
        assert_eq!(s.get(Field::Height), 9);
    }
}
