//! Simulation parameters for a bone chain.

use crate::error::ChainError;
use crate::float::Float;
use crate::vec::{Vec, Vec2, Vec3};

/// A value that varies linearly from the root bone to the tip bone.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gradient<F: Float> {
    pub root: F,
    pub tip: F,
}

impl<F: Float> Gradient<F> {
    pub fn new(root: F, tip: F) -> Self {
        Gradient { root, tip }
    }

    /// Same value for every bone.
    pub fn uniform(value: F) -> Self {
        Gradient { root: value, tip: value }
    }

    /// Value for bone `index` of a chain with `count` bones, `t = index / (count - 1)`.
    pub fn sample(&self, index: usize, count: usize) -> F {
        if count < 2 {
            return self.root;
        }
        let t = F::from_usize(index) / F::from_usize(count - 1);
        self.root.lerp(self.tip, t)
    }
}

/// Configuration for a chain simulator.
///
/// Defaults match a stiff-rooted, loose-tipped appendage: 8 relaxation passes,
/// damping 0.97, stiffness 0.9 → 0.1 and gravity multiplier 0.2 → 1.2.
/// Gravity itself defaults to zero because the vector type decides which axis
/// is "down".
///
/// # Builder Pattern
/// ```
/// use dangle::config::ChainConfig;
/// use dangle::vec::Vec3;
///
/// let config: ChainConfig<Vec3<f32>> = ChainConfig::new()
///     .with_iterations(8)
///     .with_gravity(Vec3::new(0.0, -9.81, 0.0))
///     .with_damping(0.97)
///     .with_stiffness(0.9, 0.1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ChainConfig<V: Vec> {
    /// Relaxation passes per sub-step. Default: 8.
    pub iterations: usize,
    /// Velocity retention per step, (0, 1]. 1.0 = no damping. Default: 0.97.
    pub damping: V::Scalar,
    /// Gravity acceleration. Default: zero, since the vector type decides
    /// which axis is down. See `with_default_gravity` for y-down rigs.
    pub gravity: V,
    /// Resistance to relaxation corrections, 0 = free, 1 = immovable.
    pub stiffness: Gradient<V::Scalar>,
    /// Multiplier on `gravity` per bone.
    pub gravity_scale: Gradient<V::Scalar>,
    /// Sub-steps per `step` call, each with `dt / sub_steps`. Default: 1.
    pub sub_steps: usize,
    /// Integrate bone 0 as well when no root target is supplied. Default: false,
    /// which leaves an untargeted root hanging in place under gravity.
    pub integrate_free_root: bool,
}

impl<V: Vec> ChainConfig<V> {
    pub fn new() -> Self {
        ChainConfig {
            iterations: 8,
            damping: V::Scalar::from_f32(0.97),
            gravity: V::zero(),
            stiffness: Gradient::new(V::Scalar::from_f32(0.9), V::Scalar::from_f32(0.1)),
            gravity_scale: Gradient::new(V::Scalar::from_f32(0.2), V::Scalar::from_f32(1.2)),
            sub_steps: 1,
            integrate_free_root: false,
        }
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_damping(mut self, damping: V::Scalar) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_gravity(mut self, gravity: V) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set root and tip stiffness.
    pub fn with_stiffness(mut self, root: V::Scalar, tip: V::Scalar) -> Self {
        self.stiffness = Gradient::new(root, tip);
        self
    }

    /// Set root and tip gravity multipliers.
    pub fn with_gravity_scale(mut self, root: V::Scalar, tip: V::Scalar) -> Self {
        self.gravity_scale = Gradient::new(root, tip);
        self
    }

    pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
        self.sub_steps = sub_steps.max(1);
        self
    }

    pub fn with_free_root_integration(mut self, enabled: bool) -> Self {
        self.integrate_free_root = enabled;
        self
    }

    /// Check parameter ranges. Called by `ChainSimulator::new`.
    pub fn validate(&self) -> Result<(), ChainError> {
        let zero = V::Scalar::zero();
        let one = V::Scalar::one();

        if !self.stiffness.root.in_range(zero, one) || !self.stiffness.tip.in_range(zero, one) {
            return Err(ChainError::InvalidStiffness);
        }
        if !(self.damping > zero && self.damping <= one) {
            return Err(ChainError::InvalidDamping);
        }
        for g in [self.gravity_scale.root, self.gravity_scale.tip] {
            if !g.is_finite() || g < zero {
                return Err(ChainError::InvalidGravityScale);
            }
        }
        if !self.gravity.is_finite() {
            return Err(ChainError::NonFiniteInput);
        }
        Ok(())
    }
}

impl<V: Vec> Default for ChainConfig<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Standard gravity, in m/s².
const STANDARD_GRAVITY: f32 = 9.81;

impl<F: Float> ChainConfig<Vec3<F>> {
    /// Set gravity to `(0, -9.81, 0)`.
    pub fn with_default_gravity(self) -> Self {
        self.with_gravity(Vec3::new(F::zero(), F::from_f32(-STANDARD_GRAVITY), F::zero()))
    }
}

impl<F: Float> ChainConfig<Vec2<F>> {
    /// Set gravity to `(0, -9.81)`.
    pub fn with_default_gravity(self) -> Self {
        self.with_gravity(Vec2::new(F::zero(), F::from_f32(-STANDARD_GRAVITY)))
    }
}
