//! Step observer trait for monitoring chain simulation progress.

/// Hooks called at each phase of `ChainSimulator::step`.
///
/// All methods default to no-ops. Implement the ones you need for debugging,
/// visualization, or profiling. With sub-steps, every hook except
/// `on_step_complete` fires once per sub-step.
pub trait StepObserver {
    /// Called after the free bones have been integrated.
    fn on_integrate(&mut self) {}

    /// Called after the root was snapped onto its follow target.
    fn on_root_pinned(&mut self) {}

    /// Called when a segment was too short to correct during a pass.
    fn on_degenerate_segment(&mut self, _segment: usize) {}

    /// Called after each relaxation pass over all segments.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called when a step, including all sub-steps, is complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use when no observation is needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Counts observer callbacks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepCounter {
    pub integrations: usize,
    pub root_pins: usize,
    pub degenerate_segments: usize,
    pub constraint_iterations: usize,
    pub steps: usize,
}

impl StepObserver for StepCounter {
    fn on_integrate(&mut self) {
        self.integrations += 1;
    }

    fn on_root_pinned(&mut self) {
        self.root_pins += 1;
    }

    fn on_degenerate_segment(&mut self, _segment: usize) {
        self.degenerate_segments += 1;
    }

    fn on_constraint_iteration(&mut self, _iteration: usize) {
        self.constraint_iterations += 1;
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}
