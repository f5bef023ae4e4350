//! Orchestration services for board views.

mod board;

pub use board::{BoardService, BoardServiceError, BoardServiceResult, BoardSnapshot};
