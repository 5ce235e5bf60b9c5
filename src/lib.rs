//! Follow-target Verlet bone chains for rigs.
//!
//! `dangle` simulates hanging appendages (tails, antennae, strips of fabric)
//! as a chain of bones that trails a root target. Each step integrates the
//! free bones with Verlet integration under gravity and damping, pins the root,
//! then relaxes segment lengths with a per-bone stiffness gradient.
//!
//! # Features
//!
//! - **Verlet integration**: implicit velocity, per-bone gravity multiplier
//! - **Stiffness gradient**: firm root, loose tip, interpolated along the chain
//! - **Follow target**: root snapped exactly onto a host-supplied position
//! - **Rigs**: many independent chains with per-chain targets
//! - **Observable**: monitor each phase via the `StepObserver` trait
//! - **`no_std` compatible**: needs only `alloc`
//!
//! Logging goes through the `log` facade; no logger is installed here.

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod config;
pub mod error;
pub mod state;
mod integrate;
pub mod constraint;
pub mod chain;
pub mod pose;
pub mod rig;
pub mod observer;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2, Vec3};
pub use config::{ChainConfig, Gradient};
pub use error::ChainError;
pub use state::ChainState;
pub use constraint::{solve_segment, SegmentSolve, DEGENERATE_LENGTH};
pub use chain::ChainSimulator;
pub use pose::{aim_directions, write_pose, BoneSink, FnSink};
pub use rig::{ChainHandle, ChainRig};
pub use observer::{StepObserver, NoOpStepObserver, StepCounter};
