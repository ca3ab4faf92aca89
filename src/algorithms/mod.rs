//! Step builders for the visualized algorithms
//!
//! Each submodule exposes a pure `build` function that turns validated input
//! into an ordered, non-empty sequence of immutable step records:
//!
//! - [`linear`]: sequential scan, stops at the first match
//! - [`binary`]: range halving over an ascending array
//! - [`bubble`]: adjacent compare/swap passes with early exit
//!
//! The [`Step`] trait is what the presentation layer consumes: an array
//! snapshot, a highlight role per slot, and a natural-language explanation.

pub mod binary;
pub mod bubble;
pub mod linear;
pub mod theory;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The algorithms available for simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    LinearSearch,
    BinarySearch,
    BubbleSort,
}

impl Algorithm {
    /// All algorithms, in the order they are listed to the user
    pub const ALL: [Algorithm; 3] = [
        Algorithm::LinearSearch,
        Algorithm::BinarySearch,
        Algorithm::BubbleSort,
    ];

    /// Human-readable name
    pub fn title(self) -> &'static str {
        match self {
            Algorithm::LinearSearch => "Linear Search",
            Algorithm::BinarySearch => "Binary Search",
            Algorithm::BubbleSort => "Bubble Sort",
        }
    }

    /// Identifier used on the command line and in config files
    pub fn slug(self) -> &'static str {
        match self {
            Algorithm::LinearSearch => "linear-search",
            Algorithm::BinarySearch => "binary-search",
            Algorithm::BubbleSort => "bubble-sort",
        }
    }

    /// Whether the algorithm takes a target value besides the array
    pub fn needs_target(self) -> bool {
        matches!(self, Algorithm::LinearSearch | Algorithm::BinarySearch)
    }

    /// Whether the input array must already be sorted ascending
    pub fn requires_sorted(self) -> bool {
        matches!(self, Algorithm::BinarySearch)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// How a single array slot should be highlighted for a given step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    /// Nothing special about this slot
    Idle,
    /// The slot currently being inspected
    Current,
    /// The slot holding the target
    Found,
    /// Still inside the binary search range
    InRange,
    /// Excluded from the binary search range
    Eliminated,
    /// One of the two slots just compared without a swap
    Compared,
    /// One of the two slots just swapped
    Swapped,
    /// In its final sorted position
    Sorted,
}

/// A snapshot of algorithm state at one decision point
pub trait Step {
    /// The array as it looks at this step
    fn array(&self) -> &[f64];

    /// Whether this step ends the run
    fn is_done(&self) -> bool;

    /// Highlight role for the slot at `index`
    fn cell_role(&self, index: usize) -> CellRole;

    /// Short label drawn under the slot at `index` (e.g. "L", "M", "H")
    fn marker(&self, index: usize) -> Option<String>;

    /// One-line summary of the state shown above the array
    fn caption(&self) -> String;

    /// What happened at this step, in plain words
    fn explanation(&self) -> String;

    /// Roles for every slot, left to right
    fn cells(&self) -> Vec<CellRole> {
        (0..self.array().len()).map(|i| self.cell_role(i)).collect()
    }
}
