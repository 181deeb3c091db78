//! Error types
//!
//! Errors are fail-fast: a search that reports no placement for a position
//! with open cells is an engine defect, not bad input, and is surfaced
//! immediately rather than retried.

use thiserror::Error;

/// Errors surfaced by agents
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The search returned no placement. Unreachable for any well-formed
    /// state with at least one available piece to hand over.
    #[error("search returned no placement for a position with open cells")]
    NoMoveFound,
}

/// Errors from resolving the process configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown agent kind {0:?} (expected \"minimax\" or \"random\")")]
    UnknownAgentKind(String),

    #[error("invalid depth limits {0:?}: expected three comma-separated integers")]
    InvalidDepthLimits(String),

    #[error("invalid seed {0:?}: expected an unsigned integer")]
    InvalidSeed(String),

    #[error("invalid port {0:?}: expected a TCP port number")]
    InvalidPort(String),
}
