//! # Introduction
//!
//! algostep computes a step-by-step trace of linear search, binary search and
//! bubble sort over user-supplied input, then lets the user walk that trace
//! forward and backward in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui), with a plain-language explanation of
//! every decision the algorithm makes.
//!
//! ## Pipeline
//!
//! ```text
//! Raw input → Validation → Step builder → StepNavigator → TUI
//! ```
//!
//! 1. [`input`] — parses the comma separated array and the target, and
//!    rejects empty arrays, non-numeric targets and unsorted binary search
//!    input.
//! 2. [`algorithms`] — pure step builders, one per algorithm, plus the
//!    [`algorithms::Step`] trait (explanations, highlight roles) and theory
//!    text.
//! 3. [`navigator`] — [`navigator::StepNavigator`], a saturating cursor over a
//!    step sequence, and [`navigator::Simulation`], the per-run wrapper that
//!    dispatches on the active algorithm.
//! 4. [`config`] — command-line options and the optional TOML config file.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use algostep::algorithms::linear;
//! use algostep::navigator::StepNavigator;
//!
//! let mut nav = StepNavigator::new(linear::build(&[4.0, 2.0, 7.0], 7.0)).unwrap();
//! while nav.forward() {}
//! assert!(nav.current().found);
//! assert_eq!(nav.current().index, 2);
//! ```

pub mod algorithms;
pub mod config;
pub mod input;
pub mod navigator;
pub mod ui;
