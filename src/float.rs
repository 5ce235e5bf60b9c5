//! Floating-point abstraction so chains run in `f32` or `f64`.

use core::cmp::PartialOrd;
use core::ops::{Add, Sub, Mul, Div, Neg};

/// Scalar operations the chain solver needs.
///
/// Implemented for `f32` and `f64` on top of `libm`, so the crate stays `no_std`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    /// 0.0
    fn zero() -> Self;
    /// 1.0
    fn one() -> Self;
    /// 0.5
    fn half() -> Self;
    /// 2.0
    fn two() -> Self;
    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    /// `false` for NaN and infinities.
    fn is_finite(self) -> bool;
    /// Convert from f32 (for constants and configuration).
    fn from_f32(v: f32) -> Self;
    /// Convert a bone index or count.
    fn from_usize(v: usize) -> Self;

    /// `self + (other - self) * t`
    fn lerp(self, other: Self, t: Self) -> Self {
        self + (other - self) * t
    }

    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }

    /// `true` when `min <= self <= max` (NaN is never in range).
    fn in_range(self, min: Self, max: Self) -> bool {
        self >= min && self <= max
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn is_finite(self) -> bool { f32::is_finite(self) }
    fn from_f32(v: f32) -> Self { v }
    fn from_usize(v: usize) -> Self { v as f32 }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn is_finite(self) -> bool { f64::is_finite(self) }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn from_usize(v: usize) -> Self { v as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(Float::lerp(0.9f32, 0.1, 0.0), 0.9);
        assert!((Float::lerp(0.9f32, 0.1, 1.0) - 0.1).abs() < 1e-7);
        assert!((Float::lerp(0.2f64, 1.2, 0.5) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn in_range_rejects_nan() {
        assert!(0.5f32.in_range(0.0, 1.0));
        assert!(1.0f32.in_range(0.0, 1.0));
        assert!(!f32::NAN.in_range(0.0, 1.0));
        assert!(!(-0.01f64).in_range(0.0, 1.0));
    }

    #[test]
    fn finiteness() {
        assert!(Float::is_finite(1.0f32));
        assert!(!Float::is_finite(f32::INFINITY));
        assert!(!Float::is_finite(f64::NAN));
    }
}
