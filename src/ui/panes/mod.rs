//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`menu`]: list of available algorithms
//! - [`form`]: array/target input form
//! - [`array`]: array visualization for the current step
//! - [`explanation`]: natural-language description of the current step
//! - [`theory`]: description, procedure and complexity of an algorithm
//! - [`status`]: status bar with keybindings and navigation state
//!
//! Each pane module exports a stateless `render_*` function; all state lives
//! in [`App`](crate::ui::App).

pub mod array;
pub mod explanation;
pub mod form;
pub mod menu;
pub mod status;
pub mod theory;

pub use array::render_array_pane;
pub use explanation::render_explanation_pane;
pub use form::render_form_pane;
pub use menu::render_menu_pane;
pub use status::render_status_bar;
pub use theory::render_theory_pane;
