pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// A piece descriptor returned a malformed view, or was itself malformed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PieceViewError {
    #[display("piece mask has {mask_len} cells for a {height}x{width} bounding box")]
    MaskSizeMismatch {
        mask_len: usize,
        height: usize,
        width: usize,
    },
    #[display("piece bounding box must be non-empty, got {height}x{width}")]
    EmptyBoundingBox { height: usize, width: usize },
    #[display("piece descriptor has no orientations")]
    NoOrientations,
    #[display("piece descriptor has {count} orientations, at most 4 are supported")]
    TooManyOrientations {
        #[error(not(source))]
        count: usize,
    },
}

/// A placement request that would index outside the board.
///
/// The reference behavior here was an unchecked out-of-bounds access;
/// this engine validates the request and reports it instead.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacementError {
    #[display(
        "piece of width {piece_width} at column {left_column} outside board width {board_width}"
    )]
    ColumnsOutOfBounds {
        left_column: i64,
        piece_width: usize,
        board_width: usize,
    },
    #[display("piece height {piece_height} exceeds board height {board_height}")]
    PieceTallerThanBoard {
        piece_height: usize,
        board_height: usize,
    },
}

/// Failure modes of [`SimulationSession::apply_move`](engine::SimulationSession::apply_move).
///
/// Expected simulation outcomes (empty queue, loss) are not errors; these
/// variants cover contract violations and moves issued after a loss.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ApplyMoveError {
    #[display("invalid piece view: {_0}")]
    PieceView(PieceViewError),
    #[display("invalid placement: {_0}")]
    Placement(PlacementError),
    #[display("session already lost, no further moves accepted")]
    SessionLost,
}
