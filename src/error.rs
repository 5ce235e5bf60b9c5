//! Error types for chain construction and pose output.

use core::fmt;

/// Errors reported by chain construction, the rig, and pose output.
#[derive(Debug, Clone, PartialEq)]
pub enum ChainError {
    /// A chain needs a root and at least one child.
    TooFewBones { count: usize },
    /// Root and tip stiffness must be in [0, 1].
    InvalidStiffness,
    /// Damping must be in (0, 1].
    InvalidDamping,
    /// Gravity multipliers must be finite and non-negative.
    InvalidGravityScale,
    /// A bone position or the gravity vector is NaN or infinite.
    NonFiniteInput,
    /// Bone index is out of bounds.
    BoneOutOfBounds { index: usize, count: usize },
    /// A pose buffer does not have one slot per bone.
    PoseLengthMismatch { expected: usize, actual: usize },
    /// The handle does not name a chain in this rig.
    UnknownChain,
}

impl ChainError {
    /// Configuration errors permanently disable a chain; the rest are API misuse.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ChainError::TooFewBones { .. }
                | ChainError::InvalidStiffness
                | ChainError::InvalidDamping
                | ChainError::InvalidGravityScale
                | ChainError::NonFiniteInput
        )
    }
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainError::TooFewBones { count } => {
                write!(f, "chain needs at least 2 bones, got {}", count)
            }
            ChainError::InvalidStiffness => write!(f, "stiffness must be in [0, 1]"),
            ChainError::InvalidDamping => write!(f, "damping must be in (0, 1]"),
            ChainError::InvalidGravityScale => {
                write!(f, "gravity multipliers must be finite and non-negative")
            }
            ChainError::NonFiniteInput => write!(f, "bone positions and gravity must be finite"),
            ChainError::BoneOutOfBounds { index, count } => {
                write!(f, "bone index {} out of bounds (count: {})", index, count)
            }
            ChainError::PoseLengthMismatch { expected, actual } => {
                write!(f, "pose buffer has {} slots, chain has {} bones", actual, expected)
            }
            ChainError::UnknownChain => write!(f, "unknown chain handle"),
        }
    }
}
