//! Bubble sort step builder
//!
//! One step is emitted per adjacent comparison, holding the array *after* any
//! swap that comparison caused. Each pass is closed by a boundary step with no
//! comparison, and the run always ends with a terminal step where
//! `sorted_upto == 0`.

use super::{CellRole, Step};
use serde::Serialize;

/// State of a bubble sort run
///
/// Slots at index `sorted_upto` and beyond are in their final position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubbleStep {
    pub array: Vec<f64>,
    /// Pass index, `None` on the terminal step
    pub i: Option<usize>,
    /// Inner index, `None` on pass boundaries and the terminal step
    pub j: Option<usize>,
    pub compared: Option<(usize, usize)>,
    pub swapped: bool,
    pub sorted_upto: usize,
    pub done: bool,
}

/// Build the step sequence for bubble sorting `array` ascending.
///
/// Stops after the first pass that performs no swap. Equal neighbours are
/// never swapped.
pub fn build(array: &[f64]) -> Vec<BubbleStep> {
    let n = array.len();
    let mut working = array.to_vec();
    let mut steps = Vec::new();

    for i in 0..n.saturating_sub(1) {
        let sorted_upto = n - i;
        let mut pass_swapped = false;

        for j in 0..n - i - 1 {
            let swapped = working[j] > working[j + 1];
            if swapped {
                working.swap(j, j + 1);
                pass_swapped = true;
            }
            steps.push(BubbleStep {
                array: working.clone(),
                i: Some(i),
                j: Some(j),
                compared: Some((j, j + 1)),
                swapped,
                sorted_upto,
                done: false,
            });
        }

        steps.push(BubbleStep {
            array: working.clone(),
            i: Some(i),
            j: None,
            compared: None,
            swapped: false,
            sorted_upto,
            done: false,
        });

        if !pass_swapped {
            break;
        }
    }

    steps.push(BubbleStep {
        array: working,
        i: None,
        j: None,
        compared: None,
        swapped: false,
        sorted_upto: 0,
        done: true,
    });
    steps
}

impl Step for BubbleStep {
    fn array(&self) -> &[f64] {
        &self.array
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn cell_role(&self, index: usize) -> CellRole {
        match self.compared {
            Some((left, right)) if index == left || index == right => {
                if self.swapped {
                    CellRole::Swapped
                } else {
                    CellRole::Compared
                }
            }
            _ if index >= self.sorted_upto => CellRole::Sorted,
            _ => CellRole::Idle,
        }
    }

    fn marker(&self, index: usize) -> Option<String> {
        match self.compared {
            Some((left, right)) if index == left || index == right => Some("^".to_string()),
            _ => None,
        }
    }

    fn caption(&self) -> String {
        match self.i {
            Some(i) => format!(
                "Pass {}   sorted from index {}",
                i + 1,
                self.sorted_upto
            ),
            None => "All passes finished".to_string(),
        }
    }

    fn explanation(&self) -> String {
        if self.done {
            return "No more passes are needed. The array is sorted!".to_string();
        }

        match (self.i, self.compared) {
            (_, Some((left, right))) if self.swapped => format!(
                "Compared index {} and {}: {} > {}, so they were swapped.",
                left, right, self.array[right], self.array[left]
            ),
            (_, Some((left, right))) => format!(
                "Compared index {} and {}: {} <= {}, already in order. No swap.",
                left, right, self.array[left], self.array[right]
            ),
            (Some(i), None) => {
                let settled = self.sorted_upto - 1;
                format!(
                    "Pass {} complete: {} has bubbled up to index {}, its final position.",
                    i + 1,
                    self.array[settled],
                    settled
                )
            }
            (None, None) => String::new(),
        }
    }
}
