//! Quarto rules: line enumeration, shared-attribute test, win detection,
//! and legal-move derivation.
//!
//! These functions are pure and total over any well-formed board or state;
//! the search engine trusts their results without re-validation.

pub mod lines;
pub mod win;

// Re-exports
pub use lines::{common_characteristics, get_all_lines, Line, LINES, NUM_LINES};
pub use win::{check_win, get_available_cells, get_available_pieces};
