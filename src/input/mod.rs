//! Parsing and validation of simulation input
//!
//! The array is typed as a comma separated list. Tokens that are not finite
//! numbers are dropped silently; an array with nothing left is rejected. The
//! target must parse as a number. Binary search additionally rejects arrays
//! that are not ascending.

mod errors;

pub use errors::InputError;

use crate::algorithms::Algorithm;

/// Validated input, ready to be handed to a step builder
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationInput {
    LinearSearch { array: Vec<f64>, target: f64 },
    BinarySearch { array: Vec<f64>, target: f64 },
    BubbleSort { array: Vec<f64> },
}

impl SimulationInput {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            SimulationInput::LinearSearch { .. } => Algorithm::LinearSearch,
            SimulationInput::BinarySearch { .. } => Algorithm::BinarySearch,
            SimulationInput::BubbleSort { .. } => Algorithm::BubbleSort,
        }
    }

    pub fn array(&self) -> &[f64] {
        match self {
            SimulationInput::LinearSearch { array, .. }
            | SimulationInput::BinarySearch { array, .. }
            | SimulationInput::BubbleSort { array } => array,
        }
    }
}

/// Parse a single numeric token, `None` if it is not a finite number
fn parse_number(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse a comma separated list of numbers, dropping anything non-numeric
pub fn parse_array(raw: &str) -> Vec<f64> {
    raw.split(',').filter_map(parse_number).collect()
}

/// Parse the target field
pub fn parse_target(raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::MissingTarget);
    }
    parse_number(trimmed).ok_or_else(|| InputError::InvalidTarget {
        input: trimmed.to_string(),
    })
}

/// Find the first adjacent pair that breaks ascending order
pub fn check_sorted(array: &[f64]) -> Result<(), InputError> {
    match array.windows(2).position(|pair| pair[0] > pair[1]) {
        Some(index) => Err(InputError::UnsortedArray {
            index,
            left: array[index],
            right: array[index + 1],
        }),
        None => Ok(()),
    }
}

/// Validate raw form fields for `algorithm`.
///
/// `target` is ignored for algorithms that do not search.
pub fn validate(
    algorithm: Algorithm,
    array: &str,
    target: Option<&str>,
) -> Result<SimulationInput, InputError> {
    let array = parse_array(array);
    if array.is_empty() {
        return Err(InputError::EmptyArray);
    }

    let target = if algorithm.needs_target() {
        Some(parse_target(target.unwrap_or_default())?)
    } else {
        None
    };

    if algorithm.requires_sorted() {
        check_sorted(&array)?;
    }

    Ok(match (algorithm, target) {
        (Algorithm::LinearSearch, Some(target)) => SimulationInput::LinearSearch { array, target },
        (Algorithm::BinarySearch, Some(target)) => SimulationInput::BinarySearch { array, target },
        (Algorithm::BubbleSort, _) => SimulationInput::BubbleSort { array },
        (_, None) => return Err(InputError::MissingTarget),
    })
}
