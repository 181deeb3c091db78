//! Quarto AI agent
//!
//! An agent for the board game Quarto built around minimax search with
//! alpha-beta pruning, phase-adaptive depth control, a positional line
//! heuristic, and a per-session memo cache.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Pieces, cells, the 4x4 board, and bitmask sets
//! - [`rules`]: Game rules (lines, shared attributes, win detection,
//!   legal-move derivation)
//! - [`eval`]: Position evaluation and game-phase classification
//! - [`search`]: Alpha-beta minimax with a depth-qualified memo cache
//! - [`agent`]: Agent implementations and the factory registry
//! - [`server`]: HTTP transport exposing one agent as a service
//!
//! # Quick Start
//!
//! ```
//! use quarto::{Board, GameState, MinimaxAgent, Piece, QuartoAgent};
//!
//! // Shallow depths keep the doc test fast
//! let mut agent = MinimaxAgent::with_config((1, 2, 3), Some(0));
//!
//! // The opponent hands us a piece to place on an empty board
//! let game = GameState::new(Board::new(), Piece::from_index(4));
//! let (cell, piece) = agent.complete_turn(&game).expect("a legal move");
//! println!("place at ({}, {}), hand over {:?}", cell.row, cell.col, piece);
//! ```
//!
//! # Search
//!
//! A Quarto ply is compound: place the piece the opponent handed you, then
//! choose the piece they must place next. The search explores both choices
//! at every node, prunes with alpha-beta, and memoizes results keyed by
//! position, piece in hand, side to move, and remaining depth. Search depth
//! is selected per game phase (early/mid/late, default depths 2/3/5), and
//! the early phase intentionally negates the evaluation function.

pub mod agent;
pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod server;

// Re-export commonly used types for convenience
pub use agent::{build_agent, MinimaxAgent, QuartoAgent, RandomAgent, Turn};
pub use board::{Board, Cell, CellSet, GameState, Piece, PieceSet, BOARD_SIZE};
pub use config::{AgentConfig, AgentKind};
pub use error::{ConfigError, EngineError};
pub use eval::{classify_phase, evaluate, GamePhase};
pub use search::{search, SearchCache, SearchResult, LOSE_SCORE, WIN_SCORE};
