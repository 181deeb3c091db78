//! Minimax search with alpha-beta pruning and a depth-qualified memo cache

pub mod cache;
pub mod minimax;

// Re-exports
pub use cache::{CacheKey, SearchCache};
pub use minimax::{search, SearchResult, LOSE_SCORE, WIN_SCORE};
