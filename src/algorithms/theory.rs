//! Theory text shown next to each simulation

use super::Algorithm;

/// Reference material for one algorithm
#[derive(Debug)]
pub struct Theory {
    pub summary: &'static str,
    pub procedure: &'static [&'static str],
    pub best_case: &'static str,
    pub average_case: &'static str,
    pub worst_case: &'static str,
    pub space: &'static str,
    /// Extra requirement on the input, if any
    pub precondition: Option<&'static str>,
}

static LINEAR_SEARCH: Theory = Theory {
    summary: "Linear search checks every element of the array one by one, from the \
              first to the last, until it finds the target or runs out of elements.",
    procedure: &[
        "Start at index 0.",
        "Compare the element at the current index with the target.",
        "If they match, the search is complete.",
        "Otherwise move to the next index and repeat.",
        "If the end of the array is reached, the target is not present.",
    ],
    best_case: "O(1), the target is the first element",
    average_case: "O(n)",
    worst_case: "O(n), the target is last or missing",
    space: "O(1)",
    precondition: None,
};

static BINARY_SEARCH: Theory = Theory {
    summary: "Binary search repeatedly halves the part of a sorted array that could \
              still contain the target, discarding the half that cannot.",
    procedure: &[
        "Set low to the first index and high to the last index.",
        "While low <= high, look at the middle index mid = floor((low + high) / 2).",
        "If the middle element is the target, the search is complete.",
        "If it is less than the target, continue in the right half (low = mid + 1).",
        "Otherwise continue in the left half (high = mid - 1).",
        "If the range becomes empty, the target is not present.",
    ],
    best_case: "O(1), the target is the first middle element",
    average_case: "O(log n)",
    worst_case: "O(log n)",
    space: "O(1)",
    precondition: Some("The array must be sorted in ascending order."),
};

static BUBBLE_SORT: Theory = Theory {
    summary: "Bubble sort walks through the array comparing neighbours and swapping \
              them when they are out of order. After each pass the largest remaining \
              element has bubbled up to its final position at the end.",
    procedure: &[
        "Compare the first two elements and swap them if the left one is larger.",
        "Move one position to the right and repeat until the end of the unsorted part.",
        "The last element of the pass is now in its final position.",
        "Repeat the pass over the remaining unsorted part.",
        "Stop early when a whole pass makes no swap.",
    ],
    best_case: "O(n), the array is already sorted",
    average_case: "O(n^2)",
    worst_case: "O(n^2), the array is in reverse order",
    space: "O(1)",
    precondition: None,
};

/// Theory for `algorithm`
pub fn theory(algorithm: Algorithm) -> &'static Theory {
    match algorithm {
        Algorithm::LinearSearch => &LINEAR_SEARCH,
        Algorithm::BinarySearch => &BINARY_SEARCH,
        Algorithm::BubbleSort => &BUBBLE_SORT,
    }
}
