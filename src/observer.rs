//! Step observer trait for monitoring the cloth step.

/// Hooks called during [`Cloth::step_observed`](crate::cloth::Cloth::step_observed).
///
/// Implement this trait to monitor the passes of a step (debug overlays,
/// profiling, degenerate-geometry detection). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after every node's force has been reset to its weight.
    fn on_forces_reset(&mut self) {}

    /// Called after all springs have added their forces.
    fn on_springs_applied(&mut self) {}

    /// Called after all triangles have added their drag.
    fn on_drag_applied(&mut self) {}

    /// Called after all nodes have been integrated.
    fn on_integrate(&mut self) {}

    /// Called when a step is fully complete.
    fn on_step_complete(&mut self) {}

    /// A spring whose endpoints coincide was skipped this step.
    fn on_degenerate_spring(&mut self, _spring: usize) {}

    /// A zero-area triangle was skipped this step.
    fn on_degenerate_triangle(&mut self, _triangle: usize) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
