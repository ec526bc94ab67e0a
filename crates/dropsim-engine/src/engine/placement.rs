use crate::{
    PlacementError,
    core::{
        board::Board,
        piece::OrientedPiece,
    },
};

/// Outcome of the downward collision scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum RestPosition {
    /// Topmost row the piece occupies at rest.
    Rest(usize),
    /// The piece overlaps filled cells even at row 0; it cannot be placed
    /// at this column range. This is the loss trigger, not an error.
    NoFit,
}

/// Computes the vertical rest position of a piece dropped at
/// `left_column`.
///
/// Candidate top rows are scanned from the top of the board downward. The
/// first row at which the piece's mask overlaps a filled board cell marks
/// the collision; the piece rests one row above it. With no collision in
/// the scanned range the piece rests flush at the bottom.
///
/// Bounds are validated before any cell access: a column span outside the
/// board or a piece taller than the board is a contract violation reported
/// as [`PlacementError`], never an out-of-range read.
///
/// Pure function of its inputs; the board is not modified.
pub fn resolve_rest_row(
    board: &Board,
    piece: &OrientedPiece,
    left_column: usize,
) -> Result<RestPosition, PlacementError> {
    if piece.height() > board.height() {
        return Err(PlacementError::PieceTallerThanBoard {
            piece_height: piece.height(),
            board_height: board.height(),
        });
    }
    if left_column + piece.width() > board.width() {
        return Err(PlacementError::ColumnsOutOfBounds {
            left_column: i64::try_from(left_column).unwrap(),
            piece_width: piece.width(),
            board_width: board.width(),
        });
    }

    for top_row in 0..=board.height() - piece.height() {
        if overlaps(board, piece, top_row, left_column) {
            if top_row == 0 {
                return Ok(RestPosition::NoFit);
            }
            return Ok(RestPosition::Rest(top_row - 1));
        }
    }
    Ok(RestPosition::Rest(board.height() - piece.height()))
}

fn overlaps(board: &Board, piece: &OrientedPiece, top_row: usize, left_column: usize) -> bool {
    for i in 0..piece.height() {
        for j in 0..piece.width() {
            if piece.is_filled(i, j) && board.cell(top_row + i, left_column + j).is_filled() {
                return true;
            }
        }
    }
    false
}
