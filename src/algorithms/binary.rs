//! Binary search step builder
//!
//! `high` is signed: narrowing past the left edge (`high = mid - 1` with
//! `mid == 0`) leaves it at `-1`, which is how the empty range is recorded.

use super::{CellRole, Step};
use serde::Serialize;
use std::rc::Rc;

/// State of a binary search over `array[low..=high]`
///
/// `mid` is `None` only on the final "not found" step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryStep {
    pub array: Rc<[f64]>,
    pub target: f64,
    pub low: isize,
    pub high: isize,
    pub mid: Option<usize>,
    pub found: bool,
    pub done: bool,
}

/// Build the step sequence for a binary search of `target` in `sorted`.
///
/// `sorted` must be non-empty and ascending; the caller validates both.
/// The midpoint is `floor((low + high) / 2)`.
pub fn build(sorted: &[f64], target: f64) -> Vec<BinaryStep> {
    let shared: Rc<[f64]> = Rc::from(sorted);
    let mut steps = Vec::new();

    let mut low: isize = 0;
    let mut high: isize = sorted.len() as isize - 1;

    while low <= high {
        // low and high are both non-negative inside the loop
        let mid = ((low + high) / 2) as usize;
        let value = sorted[mid];
        let found = value == target;

        steps.push(BinaryStep {
            array: Rc::clone(&shared),
            target,
            low,
            high,
            mid: Some(mid),
            found,
            done: found,
        });

        if found {
            return steps;
        }
        if value < target {
            low = mid as isize + 1;
        } else {
            high = mid as isize - 1;
        }
    }

    steps.push(BinaryStep {
        array: shared,
        target,
        low,
        high,
        mid: None,
        found: false,
        done: true,
    });
    steps
}

impl BinaryStep {
    fn in_range(&self, index: usize) -> bool {
        let index = index as isize;
        self.low <= index && index <= self.high
    }
}

impl Step for BinaryStep {
    fn array(&self) -> &[f64] {
        &self.array
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn cell_role(&self, index: usize) -> CellRole {
        if self.mid == Some(index) {
            if self.found {
                CellRole::Found
            } else {
                CellRole::Current
            }
        } else if self.in_range(index) {
            CellRole::InRange
        } else {
            CellRole::Eliminated
        }
    }

    fn marker(&self, index: usize) -> Option<String> {
        let mut label = String::new();
        if self.low == index as isize {
            label.push('L');
        }
        if self.mid == Some(index) {
            label.push('M');
        }
        if self.high == index as isize {
            label.push('H');
        }
        (!label.is_empty()).then_some(label)
    }

    fn caption(&self) -> String {
        let mid = self
            .mid
            .map_or_else(|| "-".to_string(), |mid| mid.to_string());
        format!(
            "Target: {}   low = {}   mid = {}   high = {}",
            self.target, self.low, mid, self.high
        )
    }

    fn explanation(&self) -> String {
        let Some(mid) = self.mid else {
            return format!(
                "The search range is empty (low {} > high {}). Number {} was not found in the array.",
                self.low, self.high, self.target
            );
        };

        let value = self.array[mid];
        if self.found {
            format!(
                "Middle index {} holds {}, which matches the target {}. Search complete!",
                mid, value, self.target
            )
        } else if value < self.target {
            format!(
                "Checking middle index {} of range [{}, {}]: {} is less than {}, so the target can only be in the right half. Moving low to {}.",
                mid,
                self.low,
                self.high,
                value,
                self.target,
                mid + 1
            )
        } else {
            format!(
                "Checking middle index {} of range [{}, {}]: {} is greater than {}, so the target can only be in the left half. Moving high to {}.",
                mid,
                self.low,
                self.high,
                value,
                self.target,
                mid as isize - 1
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_element_miss_leaves_negative_high() {
        let steps = build(&[5.0], 1.0);
        assert_eq!(steps.len(), 2);
        let last = &steps[1];
        assert_eq!((last.low, last.high, last.mid), (0, -1, None));
        assert!(last.done && !last.found);
    }

    #[test]
    fn test_cell_roles_mark_range_and_midpoint() {
        let steps = build(&[1.0, 3.0, 5.0, 7.0, 9.0], 9.0);
        // low=0 high=4 mid=2, then low=3 high=4 mid=3, then low=4 high=4 mid=4
        assert_eq!(
            steps[1].cells(),
            vec![
                CellRole::Eliminated,
                CellRole::Eliminated,
                CellRole::Eliminated,
                CellRole::Current,
                CellRole::InRange,
            ]
        );
        assert_eq!(steps[2].cell_role(4), CellRole::Found);
    }

    #[test]
    fn test_markers_combine_when_bounds_coincide() {
        let steps = build(&[1.0, 3.0, 5.0, 7.0, 9.0], 9.0);
        assert_eq!(steps[0].marker(0).as_deref(), Some("L"));
        assert_eq!(steps[0].marker(2).as_deref(), Some("M"));
        assert_eq!(steps[0].marker(4).as_deref(), Some("H"));
        assert_eq!(steps[2].marker(4).as_deref(), Some("LMH"));
        assert_eq!(steps[0].marker(1), None);
    }

    #[test]
    fn test_explanations_name_the_chosen_half() {
        let steps = build(&[1.0, 3.0, 5.0, 7.0, 9.0, 11.0, 13.0], 3.0);
        assert!(steps[0].explanation().contains("left half. Moving high to 2."));
        assert!(steps[1].explanation().ends_with("Search complete!"));

        let steps = build(&[1.0, 3.0, 5.0], 4.0);
        assert!(steps[0].explanation().contains("right half. Moving low to 2."));
        assert!(steps
            .last()
            .unwrap()
            .explanation()
            .starts_with("The search range is empty"));
    }
}
