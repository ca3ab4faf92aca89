//! Validation errors for user-supplied simulation input
//!
//! These are shown to the user and stop the simulation from starting. They
//! never reach the step builders.

use thiserror::Error;

/// Reasons raw input is rejected before a simulation starts
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// No numbers survived parsing
    #[error("Please enter at least one number in the array (e.g. 2, 5, 8, 1, 9).")]
    EmptyArray,

    /// A search was started without a target
    #[error("Please enter the number to search for.")]
    MissingTarget,

    /// The target field is not a number
    #[error("'{input}' is not a valid number to search for.")]
    InvalidTarget { input: String },

    /// Binary search input is out of order at `index`
    #[error(
        "Binary search needs a sorted array: {left} at index {index} is greater than {right} at index {}. Please enter the numbers in ascending order.",
        .index + 1
    )]
    UnsortedArray { index: usize, left: f64, right: f64 },
}
