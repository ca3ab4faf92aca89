// Step history navigation

mod simulation;

pub use simulation::Simulation;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigatorError {
    #[error("Cannot navigate an empty step sequence")]
    EmptySequence,
}

/// A step sequence plus a cursor into it
///
/// Movement saturates at both ends: stepping past the first or last step is a
/// no-op, never an error. The sequence is never empty.
#[derive(Debug, Clone)]
pub struct StepNavigator<S> {
    steps: Vec<S>,
    cursor: usize,
}

impl<S> StepNavigator<S> {
    pub fn new(steps: Vec<S>) -> Result<Self, NavigatorError> {
        if steps.is_empty() {
            return Err(NavigatorError::EmptySequence);
        }
        Ok(StepNavigator { steps, cursor: 0 })
    }

    /// Replace the sequence with a freshly built one and rewind
    pub fn reset(&mut self, steps: Vec<S>) -> Result<(), NavigatorError> {
        if steps.is_empty() {
            return Err(NavigatorError::EmptySequence);
        }
        self.steps = steps;
        self.cursor = 0;
        Ok(())
    }

    /// Move one step forward. Returns whether the cursor moved.
    pub fn forward(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Move one step backward. Returns whether the cursor moved.
    pub fn backward(&mut self) -> bool {
        if self.at_start() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn jump_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.cursor = self.steps.len() - 1;
    }

    pub fn current(&self) -> &S {
        &self.steps[self.cursor]
    }

    pub fn at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn at_end(&self) -> bool {
        self.cursor + 1 >= self.steps.len()
    }

    /// Cursor position, 0-based
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[S] {
        &self.steps
    }
}
