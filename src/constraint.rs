//! Distance + stiffness relaxation along the chain.
//!
//! Each pass walks segments root → tip in index order; later segments see the
//! corrections made by earlier ones within the same pass, so the traversal
//! order is part of the result.

use crate::float::Float;
use crate::observer::StepObserver;
use crate::state::ChainState;
use crate::vec::Vec;

/// Segments shorter than this are skipped for the pass instead of divided by.
pub const DEGENERATE_LENGTH: f32 = 1e-4;

/// Outcome of solving one segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SegmentSolve {
    /// Positions were corrected toward the rest length.
    Corrected,
    /// The segment was (near) zero length and left untouched.
    Degenerate,
}

/// Pull bones `index` and `index + 1` toward `rest_length`.
///
/// The half-correction `offset = delta * 0.5 * (len - rest) / len` is split by
/// compliance: bone `index` moves by `offset * (1 - stiffness[index])`, its
/// child by `-offset * (1 - stiffness[index + 1])`. When `root_pinned` is set
/// and `index == 0` the root stays put and the child takes the full correction.
pub fn solve_segment<V: Vec>(
    positions: &mut [V],
    stiffness: &[V::Scalar],
    index: usize,
    rest_length: V::Scalar,
    root_pinned: bool,
) -> SegmentSolve {
    let one = V::Scalar::one();
    let a = positions[index];
    let b = positions[index + 1];

    let delta = b - a;
    let len = delta.length();
    if len < V::Scalar::from_f32(DEGENERATE_LENGTH) {
        return SegmentSolve::Degenerate;
    }

    let diff = (len - rest_length) / len;
    let offset = delta.scale(V::Scalar::half() * diff);

    if index == 0 && root_pinned {
        let w = V::Scalar::two() * (one - stiffness[1]);
        positions[1] = positions[1] - offset.scale(w);
    } else {
        positions[index] = a + offset.scale(one - stiffness[index]);
        positions[index + 1] = b - offset.scale(one - stiffness[index + 1]);
    }
    SegmentSolve::Corrected
}

impl<V: Vec> ChainState<V> {
    /// Run `iterations` relaxation passes over every segment.
    pub fn relax<O: StepObserver>(&mut self, iterations: usize, root_pinned: bool, observer: &mut O) {
        for pass in 0..iterations {
            for i in 0..self.segment_lengths.len() {
                let outcome = solve_segment(
                    &mut self.positions,
                    &self.stiffness,
                    i,
                    self.segment_lengths[i],
                    root_pinned,
                );
                if outcome == SegmentSolve::Degenerate {
                    observer.on_degenerate_segment(i);
                }
            }
            observer.on_constraint_iteration(pass);
        }
    }
}
