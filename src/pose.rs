//! Writing resolved positions back to the host rig.

use crate::error::ChainError;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// Receiver for a chain's resolved world positions, one call per bone in
/// root → tip order.
///
/// Implemented for slices (which must have exactly one slot per bone), for
/// `Vec` (resized to fit), and for closures via [`FnSink`].
pub trait BoneSink<V: Vec> {
    /// Called once before any position is written.
    fn begin_pose(&mut self, _bone_count: usize) -> Result<(), ChainError> {
        Ok(())
    }

    fn set_world_position(&mut self, index: usize, position: V);
}

impl<V: Vec> BoneSink<V> for [V] {
    fn begin_pose(&mut self, bone_count: usize) -> Result<(), ChainError> {
        if self.len() != bone_count {
            return Err(ChainError::PoseLengthMismatch {
                expected: bone_count,
                actual: self.len(),
            });
        }
        Ok(())
    }

    fn set_world_position(&mut self, index: usize, position: V) {
        self[index] = position;
    }
}

impl<V: Vec> BoneSink<V> for AllocVec<V> {
    fn begin_pose(&mut self, bone_count: usize) -> Result<(), ChainError> {
        self.resize(bone_count, V::zero());
        Ok(())
    }

    fn set_world_position(&mut self, index: usize, position: V) {
        self[index] = position;
    }
}

/// Adapts a closure `(bone index, position)` into a sink, e.g. to write into
/// a host's transform hierarchy.
pub struct FnSink<F>(pub F);

impl<V: Vec, F: FnMut(usize, V)> BoneSink<V> for FnSink<F> {
    fn set_world_position(&mut self, index: usize, position: V) {
        (self.0)(index, position)
    }
}

/// Write `positions` into `sink` in index order.
pub fn write_pose<V: Vec, S: BoneSink<V> + ?Sized>(
    positions: &[V],
    sink: &mut S,
) -> Result<(), ChainError> {
    sink.begin_pose(positions.len())?;
    for (i, &p) in positions.iter().enumerate() {
        sink.set_world_position(i, p);
    }
    Ok(())
}

/// Unit direction from each bone to its child; zero for degenerate segments.
///
/// Hosts that need bone orientation aim each bone along its entry.
pub fn aim_directions<V: Vec>(positions: &[V]) -> AllocVec<V> {
    positions
        .windows(2)
        .map(|w| (w[1] - w[0]).normalize_or_zero())
        .collect()
}
