//! Follow-target bone chain simulator.

use crate::config::ChainConfig;
use crate::error::ChainError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::pose::{self, BoneSink};
use crate::state::ChainState;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// A bone chain (tail, antenna, strip of fabric) that trails a root target
/// under gravity, damping and per-bone stiffness.
///
/// ```
/// use dangle::{ChainSimulator, ChainConfig, NoOpStepObserver, Vec3};
///
/// let bones = [
///     Vec3::new(0.0f32, 0.0, 0.0),
///     Vec3::new(0.0, -1.0, 0.0),
///     Vec3::new(0.0, -2.0, 0.0),
/// ];
/// let config = ChainConfig::new().with_gravity(Vec3::new(0.0, -9.81, 0.0));
/// let mut chain = ChainSimulator::new(&bones, config).unwrap();
///
/// let head = Vec3::new(0.5, 0.0, 0.0);
/// chain.step(1.0 / 60.0, Some(head), &mut NoOpStepObserver);
/// assert_eq!(chain.root(), head);
/// ```
#[derive(Clone, Debug)]
pub struct ChainSimulator<V: Vec> {
    state: ChainState<V>,
    config: ChainConfig<V>,
}

impl<V: Vec> ChainSimulator<V> {
    /// Capture `bones` (root → tip, world space) as the rest pose.
    ///
    /// Fails on fewer than two bones, non-finite positions, or an invalid
    /// configuration; there is no partially working chain.
    pub fn new(bones: &[V], config: ChainConfig<V>) -> Result<Self, ChainError> {
        config.validate()?;
        let state = ChainState::capture(bones, &config)?;
        log::debug!(
            "chain created: {} bones, rest length {:?}",
            state.len(),
            state.total_rest_length()
        );
        Ok(ChainSimulator { state, config })
    }

    /// Advance the chain by `dt`, pinning the root to `root_target` if given.
    ///
    /// Each sub-step integrates the free bones, pins the root, then runs the
    /// configured relaxation passes.
    pub fn step<O: StepObserver>(&mut self, dt: V::Scalar, root_target: Option<V>, observer: &mut O) {
        let sub_steps = self.config.sub_steps.max(1);
        let sub_dt = dt / V::Scalar::from_usize(sub_steps);
        let first = if root_target.is_none() && self.config.integrate_free_root { 0 } else { 1 };

        for _sub in 0..sub_steps {
            self.state.integrate(first, sub_dt, self.config.damping, self.config.gravity);
            observer.on_integrate();

            if let Some(target) = root_target {
                self.state.pin_root(target);
                observer.on_root_pinned();
            }

            self.state.relax(self.config.iterations, root_target.is_some(), observer);
        }

        log::trace!("chain stepped: dt {:?}, tip {:?}", dt, self.tip());
        observer.on_step_complete();
    }

    /// Write current positions into `sink`, root first.
    pub fn apply_pose<S: BoneSink<V> + ?Sized>(&self, sink: &mut S) -> Result<(), ChainError> {
        pose::write_pose(&self.state.positions, sink)
    }

    /// Unit vectors from each bone toward its child, for orienting bones.
    pub fn aim_directions(&self) -> AllocVec<V> {
        pose::aim_directions(&self.state.positions)
    }

    /// Swap in new parameters, keeping positions and rest lengths.
    ///
    /// Stiffness and gravity gradients are resampled per bone. On error the
    /// previous configuration stays in effect.
    pub fn reconfigure(&mut self, config: ChainConfig<V>) -> Result<(), ChainError> {
        config.validate()?;
        self.state.sample_gradients(&config);
        self.config = config;
        Ok(())
    }

    /// Return to the rest pose with zero velocity.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Shift the whole chain without injecting velocity, for scene cuts.
    pub fn teleport(&mut self, offset: V) {
        self.state.translate(offset);
    }

    pub fn positions(&self) -> &[V] {
        self.state.positions()
    }

    /// Position of bone `index`.
    ///
    /// # Panics
    /// Panics if `index >= len()`. See [`try_position`](Self::try_position).
    pub fn position(&self, index: usize) -> V {
        self.state.positions[index]
    }

    pub fn try_position(&self, index: usize) -> Result<V, ChainError> {
        self.state
            .positions
            .get(index)
            .copied()
            .ok_or(ChainError::BoneOutOfBounds { index, count: self.len() })
    }

    /// `positions[index] - prev_positions[index]`, the per-step displacement.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn velocity_raw(&self, index: usize) -> V {
        self.state.positions[index] - self.state.prev_positions[index]
    }

    pub fn rest_positions(&self) -> &[V] {
        self.state.rest_positions()
    }

    pub fn segment_lengths(&self) -> &[V::Scalar] {
        self.state.segment_lengths()
    }

    pub fn stiffness(&self) -> &[V::Scalar] {
        self.state.stiffness()
    }

    pub fn gravity_scale(&self) -> &[V::Scalar] {
        self.state.gravity_scale()
    }

    pub fn total_rest_length(&self) -> V::Scalar {
        self.state.total_rest_length()
    }

    /// Current length of segment `index` divided by its rest length.
    /// Zero-length rest segments report 1.0.
    ///
    /// # Panics
    /// Panics if `index >= segment_count()`.
    pub fn stretch(&self, index: usize) -> V::Scalar {
        let rest = self.state.segment_lengths[index];
        let current = self.state.positions[index].distance(self.state.positions[index + 1]);
        if rest.is_near_zero(V::Scalar::from_f32(1e-10)) {
            V::Scalar::one()
        } else {
            current / rest
        }
    }

    pub fn root(&self) -> V {
        self.state.positions[0]
    }

    pub fn tip(&self) -> V {
        self.state.positions[self.state.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.state.segment_lengths.len()
    }

    pub fn config(&self) -> &ChainConfig<V> {
        &self.config
    }

    pub fn state(&self) -> &ChainState<V> {
        &self.state
    }
}
