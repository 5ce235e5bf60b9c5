//! A set of independent chains stepped together, one per appendage in a scene.

use crate::chain::ChainSimulator;
use crate::config::ChainConfig;
use crate::error::ChainError;
use crate::observer::StepObserver;
use crate::pose::BoneSink;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// Index of a chain inside a [`ChainRig`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChainHandle(usize);

impl ChainHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

enum Slot<V: Vec> {
    Active {
        chain: ChainSimulator<V>,
        target: Option<V>,
    },
    /// Rejected at creation. Never stepped, never retried.
    Disabled(ChainError),
}

/// Owns many chains, each with its own follow target.
///
/// Chains are stepped in insertion order and never read each other's state.
/// A chain whose bones or configuration are invalid still gets a handle, but
/// stays disabled; the error is logged once when it is added.
pub struct ChainRig<V: Vec> {
    slots: AllocVec<Slot<V>>,
}

impl<V: Vec> ChainRig<V> {
    pub fn new() -> Self {
        ChainRig { slots: AllocVec::new() }
    }

    pub fn add_chain(&mut self, bones: &[V], config: ChainConfig<V>) -> ChainHandle {
        let handle = ChainHandle(self.slots.len());
        let slot = match ChainSimulator::new(bones, config) {
            Ok(chain) => Slot::Active { chain, target: None },
            Err(err) => {
                log::error!("chain {} disabled: {}", handle.0, err);
                Slot::Disabled(err)
            }
        };
        self.slots.push(slot);
        handle
    }

    /// Follow target used by every later `step` until changed.
    pub fn set_target(&mut self, handle: ChainHandle, target: Option<V>) -> Result<(), ChainError> {
        match self.slots.get_mut(handle.0) {
            Some(Slot::Active { target: t, .. }) => {
                *t = target;
                Ok(())
            }
            Some(Slot::Disabled(err)) => Err(err.clone()),
            None => Err(ChainError::UnknownChain),
        }
    }

    pub fn target(&self, handle: ChainHandle) -> Option<V> {
        match self.slots.get(handle.0) {
            Some(Slot::Active { target, .. }) => *target,
            _ => None,
        }
    }

    /// Step every active chain by `dt` with its stored target.
    pub fn step<O: StepObserver>(&mut self, dt: V::Scalar, observer: &mut O) {
        for slot in self.slots.iter_mut() {
            if let Slot::Active { chain, target } = slot {
                chain.step(dt, *target, observer);
            }
        }
    }

    pub fn apply_pose<S: BoneSink<V> + ?Sized>(
        &self,
        handle: ChainHandle,
        sink: &mut S,
    ) -> Result<(), ChainError> {
        self.try_chain(handle)?.apply_pose(sink)
    }

    pub fn chain(&self, handle: ChainHandle) -> Option<&ChainSimulator<V>> {
        match self.slots.get(handle.0) {
            Some(Slot::Active { chain, .. }) => Some(chain),
            _ => None,
        }
    }

    pub fn chain_mut(&mut self, handle: ChainHandle) -> Option<&mut ChainSimulator<V>> {
        match self.slots.get_mut(handle.0) {
            Some(Slot::Active { chain, .. }) => Some(chain),
            _ => None,
        }
    }

    fn try_chain(&self, handle: ChainHandle) -> Result<&ChainSimulator<V>, ChainError> {
        match self.slots.get(handle.0) {
            Some(Slot::Active { chain, .. }) => Ok(chain),
            Some(Slot::Disabled(err)) => Err(err.clone()),
            None => Err(ChainError::UnknownChain),
        }
    }

    pub fn is_active(&self, handle: ChainHandle) -> bool {
        matches!(self.slots.get(handle.0), Some(Slot::Active { .. }))
    }

    /// Why the chain was disabled, if it was.
    pub fn error(&self, handle: ChainHandle) -> Option<&ChainError> {
        match self.slots.get(handle.0) {
            Some(Slot::Disabled(err)) => Some(err),
            _ => None,
        }
    }

    /// Total chains, including disabled ones.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, Slot::Active { .. }))
            .count()
    }

    pub fn handles(&self) -> impl Iterator<Item = ChainHandle> + '_ {
        (0..self.slots.len()).map(ChainHandle)
    }
}

impl<V: Vec> Default for ChainRig<V> {
    fn default() -> Self {
        Self::new()
    }
}
