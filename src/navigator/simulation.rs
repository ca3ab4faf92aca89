//! One active simulation run
//!
//! A [`Simulation`] owns the navigator for whichever algorithm is running and
//! dispatches the control surface to it. Each run gets its own instance;
//! submitting new input replaces it wholesale.

use super::{NavigatorError, StepNavigator};
use crate::algorithms::{
    binary::{self, BinaryStep},
    bubble::{self, BubbleStep},
    linear::{self, LinearStep},
    Algorithm, Step,
};
use crate::input::SimulationInput;

#[derive(Debug, Clone)]
pub enum Simulation {
    LinearSearch(StepNavigator<LinearStep>),
    BinarySearch(StepNavigator<BinaryStep>),
    BubbleSort(StepNavigator<BubbleStep>),
}

impl Simulation {
    /// Build the step sequence for `input` and wrap it in a navigator
    pub fn start(input: &SimulationInput) -> Result<Self, NavigatorError> {
        let simulation = match input {
            SimulationInput::LinearSearch { array, target } => {
                Simulation::LinearSearch(StepNavigator::new(linear::build(array, *target))?)
            }
            SimulationInput::BinarySearch { array, target } => {
                Simulation::BinarySearch(StepNavigator::new(binary::build(array, *target))?)
            }
            SimulationInput::BubbleSort { array } => {
                Simulation::BubbleSort(StepNavigator::new(bubble::build(array))?)
            }
        };

        tracing::info!(
            algorithm = simulation.algorithm().slug(),
            elements = input.array().len(),
            steps = simulation.total_steps(),
            "Simulation started"
        );
        Ok(simulation)
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Simulation::LinearSearch(_) => Algorithm::LinearSearch,
            Simulation::BinarySearch(_) => Algorithm::BinarySearch,
            Simulation::BubbleSort(_) => Algorithm::BubbleSort,
        }
    }

    /// The step under the cursor
    pub fn current(&self) -> &dyn Step {
        match self {
            Simulation::LinearSearch(nav) => nav.current(),
            Simulation::BinarySearch(nav) => nav.current(),
            Simulation::BubbleSort(nav) => nav.current(),
        }
    }

    pub fn forward(&mut self) -> bool {
        let moved = match self {
            Simulation::LinearSearch(nav) => nav.forward(),
            Simulation::BinarySearch(nav) => nav.forward(),
            Simulation::BubbleSort(nav) => nav.forward(),
        };
        if !moved {
            tracing::debug!(position = self.position(), "Forward at last step");
        }
        moved
    }

    pub fn backward(&mut self) -> bool {
        let moved = match self {
            Simulation::LinearSearch(nav) => nav.backward(),
            Simulation::BinarySearch(nav) => nav.backward(),
            Simulation::BubbleSort(nav) => nav.backward(),
        };
        if !moved {
            tracing::debug!("Backward at first step");
        }
        moved
    }

    pub fn jump_to_start(&mut self) {
        match self {
            Simulation::LinearSearch(nav) => nav.jump_to_start(),
            Simulation::BinarySearch(nav) => nav.jump_to_start(),
            Simulation::BubbleSort(nav) => nav.jump_to_start(),
        }
    }

    pub fn jump_to_end(&mut self) {
        match self {
            Simulation::LinearSearch(nav) => nav.jump_to_end(),
            Simulation::BinarySearch(nav) => nav.jump_to_end(),
            Simulation::BubbleSort(nav) => nav.jump_to_end(),
        }
    }

    pub fn position(&self) -> usize {
        match self {
            Simulation::LinearSearch(nav) => nav.position(),
            Simulation::BinarySearch(nav) => nav.position(),
            Simulation::BubbleSort(nav) => nav.position(),
        }
    }

    pub fn total_steps(&self) -> usize {
        match self {
            Simulation::LinearSearch(nav) => nav.total_steps(),
            Simulation::BinarySearch(nav) => nav.total_steps(),
            Simulation::BubbleSort(nav) => nav.total_steps(),
        }
    }

    pub fn at_start(&self) -> bool {
        self.position() == 0
    }

    pub fn at_end(&self) -> bool {
        self.position() + 1 >= self.total_steps()
    }

    /// Serialize the whole step sequence as pretty-printed JSON
    pub fn steps_json(&self) -> serde_json::Result<String> {
        match self {
            Simulation::LinearSearch(nav) => serde_json::to_string_pretty(nav.steps()),
            Simulation::BinarySearch(nav) => serde_json::to_string_pretty(nav.steps()),
            Simulation::BubbleSort(nav) => serde_json::to_string_pretty(nav.steps()),
        }
    }

    /// Explanation of every step, in order
    pub fn explanations(&self) -> Vec<String> {
        fn collect<S: Step>(steps: &[S]) -> Vec<String> {
            steps.iter().map(Step::explanation).collect()
        }
        match self {
            Simulation::LinearSearch(nav) => collect(nav.steps()),
            Simulation::BinarySearch(nav) => collect(nav.steps()),
            Simulation::BubbleSort(nav) => collect(nav.steps()),
        }
    }
}
