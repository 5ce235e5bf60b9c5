//! Vector types and the `Vec` trait the solver is generic over.

use crate::float::Float;
use core::ops::{Add, Sub, Neg};

/// A point or displacement in bone space.
///
/// All chain code is generic over this trait, so the same solver drives planar
/// (2D) and spatial (3D) rigs. With the `glam` feature it is also implemented
/// for `glam::Vec2` and `glam::Vec3`.
pub trait Vec:
    Copy
    + Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + PartialEq
    + Default
    + core::fmt::Debug
{
    /// The scalar (float) type for this vector.
    type Scalar: Float;

    fn zero() -> Self;

    fn dot(self, other: Self) -> Self::Scalar;

    /// Scale all components by a scalar.
    fn scale(self, s: Self::Scalar) -> Self;

    /// `true` when every component is finite.
    fn is_finite(self) -> bool;

    fn length_sq(self) -> Self::Scalar {
        self.dot(self)
    }

    fn length(self) -> Self::Scalar {
        self.length_sq().sqrt()
    }

    /// Unit vector, or zero when the length is below `1e-10`.
    fn normalize_or_zero(self) -> Self {
        let len = self.length();
        if len.is_near_zero(Self::Scalar::from_f32(1e-10)) {
            Self::zero()
        } else {
            self.scale(Self::Scalar::one() / len)
        }
    }

    fn distance(self, other: Self) -> Self::Scalar {
        (self - other).length()
    }
}

// --------------------------------------------------------------------------
// Vec2<F>
// --------------------------------------------------------------------------

/// 2D vector for planar rigs (side-view tails, 2D puppets).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> Vec for Vec2<F> {
    type Scalar = F;
    fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }
    fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }
    fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }
    fn is_finite(self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

// --------------------------------------------------------------------------
// Vec3<F>
// --------------------------------------------------------------------------

/// 3D vector for world-space bone chains.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec3 { x: -self.x, y: -self.y, z: -self.z } }
}

impl<F: Float> Vec for Vec3<F> {
    type Scalar = F;
    fn zero() -> Self { Vec3 { x: F::zero(), y: F::zero(), z: F::zero() } }
    fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    fn scale(self, s: F) -> Self {
        Vec3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }
    fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

// --------------------------------------------------------------------------
// glam interop
// --------------------------------------------------------------------------

#[cfg(feature = "glam")]
mod glam_impl {
    use super::Vec;

    impl Vec for glam::Vec2 {
        type Scalar = f32;
        fn zero() -> Self { glam::Vec2::ZERO }
        fn dot(self, other: Self) -> f32 { glam::Vec2::dot(self, other) }
        fn scale(self, s: f32) -> Self { self * s }
        fn is_finite(self) -> bool { glam::Vec2::is_finite(self) }
    }

    impl Vec for glam::Vec3 {
        type Scalar = f32;
        fn zero() -> Self { glam::Vec3::ZERO }
        fn dot(self, other: Self) -> f32 { glam::Vec3::dot(self, other) }
        fn scale(self, s: f32) -> Self { self * s }
        fn is_finite(self) -> bool { glam::Vec3::is_finite(self) }
    }
}
