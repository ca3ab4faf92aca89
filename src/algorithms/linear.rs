//! Linear search step builder

use super::{CellRole, Step};
use serde::Serialize;
use std::rc::Rc;

/// State of a linear search after inspecting `index`
///
/// The final "not found" step has `index == array.len()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearStep {
    pub array: Rc<[f64]>,
    pub target: f64,
    pub index: usize,
    pub found: bool,
    pub done: bool,
}

/// Build the step sequence for a linear search of `target` in `array`.
///
/// `array` must be non-empty. Scanning stops at the first match, so only the
/// earliest occurrence of a repeated target is ever reported.
pub fn build(array: &[f64], target: f64) -> Vec<LinearStep> {
    let shared: Rc<[f64]> = Rc::from(array);
    let mut steps = Vec::with_capacity(array.len() + 1);

    for (index, &value) in array.iter().enumerate() {
        let found = value == target;
        steps.push(LinearStep {
            array: Rc::clone(&shared),
            target,
            index,
            found,
            done: found,
        });
        if found {
            return steps;
        }
    }

    steps.push(LinearStep {
        array: shared,
        target,
        index: array.len(),
        found: false,
        done: true,
    });
    steps
}

impl Step for LinearStep {
    fn array(&self) -> &[f64] {
        &self.array
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn cell_role(&self, index: usize) -> CellRole {
        if index != self.index {
            CellRole::Idle
        } else if self.found {
            CellRole::Found
        } else {
            CellRole::Current
        }
    }

    fn marker(&self, index: usize) -> Option<String> {
        (index == self.index).then(|| "^".to_string())
    }

    fn caption(&self) -> String {
        format!("Target: {}", self.target)
    }

    fn explanation(&self) -> String {
        match self.array.get(self.index) {
            None => format!("Number {} was not found in the array.", self.target),
            Some(value) if self.found => format!(
                "Element at index {} is {}, which matches the target {}. Search complete!",
                self.index, value, self.target
            ),
            Some(value) => format!(
                "Checking element at index {}: {}. Not a match, moving to the next element.",
                self.index, value
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explanation_for_each_kind_of_step() {
        let steps = build(&[3.0, 8.0], 8.0);
        assert_eq!(
            steps[0].explanation(),
            "Checking element at index 0: 3. Not a match, moving to the next element."
        );
        assert_eq!(
            steps[1].explanation(),
            "Element at index 1 is 8, which matches the target 8. Search complete!"
        );

        let missing = build(&[3.0], 2.5);
        assert_eq!(
            missing.last().unwrap().explanation(),
            "Number 2.5 was not found in the array."
        );
    }

    #[test]
    fn test_cell_roles_follow_the_cursor() {
        let steps = build(&[1.0, 2.0, 3.0], 2.0);
        assert_eq!(
            steps[0].cells(),
            vec![CellRole::Current, CellRole::Idle, CellRole::Idle]
        );
        assert_eq!(
            steps[1].cells(),
            vec![CellRole::Idle, CellRole::Found, CellRole::Idle]
        );
    }

    #[test]
    fn test_not_found_step_highlights_nothing() {
        let steps = build(&[1.0, 2.0], 7.0);
        let last = steps.last().unwrap();
        assert!(last.cells().iter().all(|role| *role == CellRole::Idle));
        assert_eq!(last.marker(0), None);
        assert_eq!(last.marker(1), None);
    }

    #[test]
    fn test_steps_share_one_array() {
        let steps = build(&[1.0, 2.0, 3.0], 9.0);
        assert!(Rc::ptr_eq(&steps[0].array, &steps[3].array));
    }
}
