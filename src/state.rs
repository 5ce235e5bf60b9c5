//! Per-chain simulation state, laid out as parallel arrays indexed by bone.

use crate::config::ChainConfig;
use crate::error::ChainError;
use crate::float::Float;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// Verlet state of one bone chain, root at index 0 and tip at `len() - 1`.
///
/// Every array has one entry per bone except `segment_lengths`, which has one
/// per adjacent pair. Rest lengths, stiffness and gravity scale are fixed at
/// capture time; only `positions` and `prev_positions` evolve.
#[derive(Clone, Debug)]
pub struct ChainState<V: Vec> {
    pub(crate) rest_positions: AllocVec<V>,
    pub(crate) positions: AllocVec<V>,
    pub(crate) prev_positions: AllocVec<V>,
    pub(crate) segment_lengths: AllocVec<V::Scalar>,
    pub(crate) stiffness: AllocVec<V::Scalar>,
    pub(crate) gravity_scale: AllocVec<V::Scalar>,
}

impl<V: Vec> ChainState<V> {
    /// Capture the rest pose of `bones` (root → tip).
    pub fn capture(bones: &[V], config: &ChainConfig<V>) -> Result<Self, ChainError> {
        let n = bones.len();
        if n < 2 {
            return Err(ChainError::TooFewBones { count: n });
        }
        if bones.iter().any(|b| !b.is_finite()) {
            return Err(ChainError::NonFiniteInput);
        }

        let rest_positions: AllocVec<V> = bones.to_vec();
        let segment_lengths = bones
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .collect();

        let mut state = ChainState {
            positions: rest_positions.clone(),
            prev_positions: rest_positions.clone(),
            rest_positions,
            segment_lengths,
            stiffness: AllocVec::with_capacity(n),
            gravity_scale: AllocVec::with_capacity(n),
        };
        state.sample_gradients(config);
        Ok(state)
    }

    /// Recompute per-bone stiffness and gravity scale from `config`.
    pub fn sample_gradients(&mut self, config: &ChainConfig<V>) {
        let n = self.positions.len();
        self.stiffness.clear();
        self.stiffness.extend((0..n).map(|i| config.stiffness.sample(i, n)));
        self.gravity_scale.clear();
        self.gravity_scale.extend((0..n).map(|i| config.gravity_scale.sample(i, n)));
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false for a captured chain; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[V] {
        &self.positions
    }

    pub fn prev_positions(&self) -> &[V] {
        &self.prev_positions
    }

    pub fn rest_positions(&self) -> &[V] {
        &self.rest_positions
    }

    pub fn segment_lengths(&self) -> &[V::Scalar] {
        &self.segment_lengths
    }

    pub fn stiffness(&self) -> &[V::Scalar] {
        &self.stiffness
    }

    pub fn gravity_scale(&self) -> &[V::Scalar] {
        &self.gravity_scale
    }

    /// Return every bone to its rest pose with zero velocity.
    pub fn reset(&mut self) {
        self.positions.copy_from_slice(&self.rest_positions);
        self.prev_positions.copy_from_slice(&self.rest_positions);
    }

    /// Move the whole chain by `offset` without changing its implicit velocity.
    pub fn translate(&mut self, offset: V) {
        for (p, prev) in self.positions.iter_mut().zip(self.prev_positions.iter_mut()) {
            *p = *p + offset;
            *prev = *prev + offset;
        }
    }

    pub fn total_rest_length(&self) -> V::Scalar {
        self.segment_lengths
            .iter()
            .fold(V::Scalar::zero(), |acc, &l| acc + l)
    }
}
