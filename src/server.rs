//! HTTP transport shim
//!
//! Exposes one agent instance over three routes mirroring the agent
//! contract: `GET /` (health plus agent identifier),
//! `POST /choose-initial-piece`, and `POST /complete-turn`. The agent sits
//! behind a mutex because its search cache is a single mutable structure
//! not safe for concurrent mutation; requests against it are serialized
//! here rather than inside the engine.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::agent::QuartoAgent;
use crate::board::{Board, Cell, GameState, Piece, BOARD_SIZE};

/// One agent shared by all requests
pub type SharedAgent = Arc<Mutex<Box<dyn QuartoAgent + Send>>>;

/// Build the router for a single agent instance.
pub fn router(agent: SharedAgent) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/choose-initial-piece", post(choose_initial_piece))
        .route("/complete-turn", post(complete_turn))
        .with_state(agent)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    identifier: String,
}

#[derive(Debug, Serialize)]
struct ChooseInitialPieceResponse {
    piece: u8,
}

#[derive(Debug, Serialize)]
struct CompleteTurnResponse {
    cell: WireCell,
    piece: Option<u8>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WireCell {
    pub row: u8,
    pub col: u8,
}

/// Game state as it appears on the wire: a 4x4 grid of optional piece
/// indices plus the piece in hand.
#[derive(Debug, Deserialize)]
pub struct WireGameState {
    pub board: Vec<Vec<Option<u8>>>,
    pub current_piece: u8,
}

/// Wire decoding failures, reported as client errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    #[error("board must be a 4x4 grid")]
    BadBoardShape,

    #[error("piece index {0} out of range (0..16)")]
    BadPieceIndex(u8),
}

impl TryFrom<WireGameState> for GameState {
    type Error = WireError;

    fn try_from(wire: WireGameState) -> Result<Self, WireError> {
        if wire.board.len() != BOARD_SIZE || wire.board.iter().any(|row| row.len() != BOARD_SIZE) {
            return Err(WireError::BadBoardShape);
        }
        let mut board = Board::new();
        for (r, row) in wire.board.iter().enumerate() {
            for (c, slot) in row.iter().enumerate() {
                if let Some(idx) = slot {
                    let piece = Piece::checked(*idx).ok_or(WireError::BadPieceIndex(*idx))?;
                    board.place(Cell::new(r as u8, c as u8), piece);
                }
            }
        }
        let current_piece =
            Piece::checked(wire.current_piece).ok_or(WireError::BadPieceIndex(wire.current_piece))?;
        Ok(GameState::new(board, current_piece))
    }
}

type HandlerError = (StatusCode, String);

fn lock_agent(agent: &SharedAgent) -> Result<std::sync::MutexGuard<'_, Box<dyn QuartoAgent + Send>>, HandlerError> {
    agent.lock().map_err(|_| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "agent lock poisoned".to_string(),
        )
    })
}

async fn health(State(agent): State<SharedAgent>) -> Result<Json<HealthResponse>, HandlerError> {
    let agent = lock_agent(&agent)?;
    Ok(Json(HealthResponse {
        status: "ok",
        identifier: agent.identifier(),
    }))
}

async fn choose_initial_piece(
    State(agent): State<SharedAgent>,
) -> Result<Json<ChooseInitialPieceResponse>, HandlerError> {
    let mut agent = lock_agent(&agent)?;
    let piece = agent.choose_initial_piece();
    Ok(Json(ChooseInitialPieceResponse {
        piece: piece.index(),
    }))
}

async fn complete_turn(
    State(agent): State<SharedAgent>,
    Json(wire): Json<WireGameState>,
) -> Result<Json<CompleteTurnResponse>, HandlerError> {
    let game =
        GameState::try_from(wire).map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;
    let mut agent = lock_agent(&agent)?;
    let (cell, piece) = agent
        .complete_turn(&game)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    Ok(Json(CompleteTurnResponse {
        cell: WireCell {
            row: cell.row,
            col: cell.col,
        },
        piece: piece.map(Piece::index),
    }))
}
