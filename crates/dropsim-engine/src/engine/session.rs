use std::collections::VecDeque;

use crate::{
    ApplyMoveError, PlacementError,
    core::{
        board::{Board, BoardSnapshot},
        move_command::MoveCommand,
        piece::PieceSource,
    },
};

use super::placement::{RestPosition, resolve_rest_row};

/// State of a simulation session. `Lost` is terminal: once a piece fails
/// to fit, the session never becomes active again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Active,
    Lost,
}

/// One simulated game, owning a private board copy and a queue of pending
/// pieces.
///
/// A session applies one move at a time: it dequeues the next piece,
/// resolves its rest position for the requested orientation and offset,
/// stamps it, and clears any completed lines. The board is never written
/// back to the authoritative game.
///
/// Sessions provide no snapshot or rollback primitive. An outer search
/// that evaluates several candidate moves must construct a fresh session
/// per candidate from the same snapshot.
#[derive(Debug)]
pub struct SimulationSession {
    board: Board,
    pending: VecDeque<Box<dyn PieceSource>>,
    lines_cleared: usize,
    state: SessionState,
}

impl SimulationSession {
    /// Creates a session whose board is a deep copy of the snapshot's
    /// cell states. No reference to the snapshot is retained.
    #[must_use]
    pub fn from_snapshot(snapshot: &impl BoardSnapshot) -> Self {
        Self {
            board: Board::from_snapshot(snapshot),
            pending: VecDeque::new(),
            lines_cleared: 0,
            state: SessionState::Active,
        }
    }

    /// Appends a piece to the back of the pending queue.
    pub fn enqueue(&mut self, piece: impl PieceSource + 'static) {
        self.pending.push_back(Box::new(piece));
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn has_lost(&self) -> bool {
        self.state.is_lost()
    }

    /// Lines cleared by the most recent move. Overwritten, not
    /// accumulated, on every successful placement.
    #[must_use]
    pub fn lines_cleared(&self) -> usize {
        self.lines_cleared
    }

    #[must_use]
    pub fn pending_pieces(&self) -> usize {
        self.pending.len()
    }

    /// Applies one move to the head of the piece queue.
    ///
    /// With an empty queue this is a no-op, not an error. After a loss
    /// every move is rejected with [`ApplyMoveError::SessionLost`].
    ///
    /// The move's rotate tokens select the orientation (mapped by the
    /// piece descriptor), its left/right tokens offset the piece from its
    /// default starting column. A piece that cannot fit even at the top
    /// row transitions the session to `Lost` without mutating the board.
    ///
    /// A rejected move leaves the session untouched: the head piece is
    /// only dequeued once the move has passed validation.
    pub fn apply_move(&mut self, command: MoveCommand) -> Result<(), ApplyMoveError> {
        if self.state.is_lost() {
            return Err(ApplyMoveError::SessionLost);
        }
        let Some(piece) = self.pending.front() else {
            return Ok(());
        };
        let view = piece.oriented(command.rotations())?;

        let left = i64::try_from(view.start_column()).unwrap() + i64::from(command.offset());
        let board_width = i64::try_from(self.board.width()).unwrap();
        if left < 0 || left + i64::try_from(view.width()).unwrap() > board_width {
            return Err(PlacementError::ColumnsOutOfBounds {
                left_column: left,
                piece_width: view.width(),
                board_width: self.board.width(),
            }
            .into());
        }
        let left_column = usize::try_from(left).unwrap();

        let rest = resolve_rest_row(&self.board, &view, left_column)?;
        self.pending.pop_front();
        match rest {
            RestPosition::NoFit => {
                self.state = SessionState::Lost;
            }
            RestPosition::Rest(top_row) => {
                self.board.stamp_piece(&view, top_row, left_column);
                self.lines_cleared = self.board.clear_filled_lines();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::piece::{OrientedPiece, PieceKind, StaticPiece};

    fn domino(start_column: usize) -> StaticPiece {
        StaticPiece::new([
            OrientedPiece::from_ascii(
                PieceKind::I,
                start_column,
                "
                #
                #
                ",
            ),
            OrientedPiece::from_ascii(PieceKind::I, start_column, "##"),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_queue_is_noop() {
        let mut session = SimulationSession::from_snapshot(&Board::new(6, 4));
        session.apply_move(MoveCommand::from_tokens("ll")).unwrap();
        assert_eq!(session.board(), &Board::new(6, 4));
        assert!(session.state().is_active());
    }

    #[test]
    fn test_drop_rests_flush_at_bottom() {
        let mut session = SimulationSession::from_snapshot(&Board::new(6, 4));
        session.enqueue(domino(2));
        session.apply_move(MoveCommand::from_tokens("")).unwrap();
        assert_eq!(
            session.board(),
            &Board::from_ascii(
                "
                ....
                ....
                ....
                ....
                ..#.
                ..#.
                ",
            )
        );
        assert_eq!(session.lines_cleared(), 0);
        assert!(session.state().is_active());
    }

    #[test]
    fn test_left_tokens_shift_from_starting_column() {
        let mut session = SimulationSession::from_snapshot(&Board::new(6, 4));
        session.enqueue(domino(2));
        session.apply_move(MoveCommand::from_tokens("ll")).unwrap();
        assert_eq!(
            session.board(),
            &Board::from_ascii(
                "
                ....
                ....
                ....
                ....
                #...
                #...
                ",
            )
        );
    }

    #[test]
    fn test_rotation_selects_descriptor_orientation() {
        let mut session = SimulationSession::from_snapshot(&Board::new(6, 4));
        session.enqueue(domino(1));
        session.apply_move(MoveCommand::from_tokens("c")).unwrap();
        assert_eq!(
            session.board(),
            &Board::from_ascii(
                "
                ....
                ....
                ....
                ....
                ....
                .##.
                ",
            )
        );
    }

    #[test]
    fn test_line_clear_count_recorded() {
        let snapshot = Board::from_ascii(
            "
            ....
            ....
            ##.#
            ##.#
            ",
        );
        let mut session = SimulationSession::from_snapshot(&snapshot);
        session.enqueue(domino(2));
        session.apply_move(MoveCommand::from_tokens("")).unwrap();
        assert_eq!(session.lines_cleared(), 2);
        assert_eq!(session.board(), &Board::new(4, 4));
    }

    #[test]
    fn test_lines_cleared_overwritten_by_next_move() {
        let snapshot = Board::from_ascii(
            "
            ....
            ....
            ##.#
            ##.#
            ",
        );
        let mut session = SimulationSession::from_snapshot(&snapshot);
        session.enqueue(domino(2));
        session.enqueue(domino(0));
        session.apply_move(MoveCommand::from_tokens("")).unwrap();
        assert_eq!(session.lines_cleared(), 2);
        session.apply_move(MoveCommand::from_tokens("")).unwrap();
        assert_eq!(session.lines_cleared(), 0);
    }

    #[test]
    fn test_no_fit_transitions_to_lost_without_mutation() {
        let snapshot = Board::from_ascii(
            "
            .#..
            .#..
            .#..
            .#..
            ",
        );
        let mut session = SimulationSession::from_snapshot(&snapshot);
        session.enqueue(domino(1));
        session.apply_move(MoveCommand::from_tokens("")).unwrap();
        assert!(session.has_lost());
        assert_eq!(session.board(), &snapshot);
    }

    #[test]
    fn test_moves_after_loss_are_rejected() {
        let snapshot = Board::from_ascii(
            "
            .#..
            .#..
            ",
        );
        let mut session = SimulationSession::from_snapshot(&snapshot);
        session.enqueue(domino(1));
        session.enqueue(domino(0));
        session.apply_move(MoveCommand::from_tokens("")).unwrap();
        assert!(session.has_lost());

        let err = session.apply_move(MoveCommand::from_tokens("")).unwrap_err();
        assert!(matches!(err, ApplyMoveError::SessionLost));
        // The queue is untouched by the rejected move.
        assert_eq!(session.pending_pieces(), 1);
    }

    #[test]
    fn test_offset_past_left_edge_is_an_error() {
        let mut session = SimulationSession::from_snapshot(&Board::new(6, 4));
        session.enqueue(domino(1));
        let err = session
            .apply_move(MoveCommand::from_tokens("lll"))
            .unwrap_err();
        assert!(matches!(
            err,
            ApplyMoveError::Placement(PlacementError::ColumnsOutOfBounds {
                left_column: -2,
                ..
            })
        ));
    }

    #[test]
    fn test_offset_past_right_edge_is_an_error() {
        let mut session = SimulationSession::from_snapshot(&Board::new(6, 4));
        session.enqueue(domino(1));
        let err = session
            .apply_move(MoveCommand::from_tokens("crr"))
            .unwrap_err();
        assert!(matches!(
            err,
            ApplyMoveError::Placement(PlacementError::ColumnsOutOfBounds { left_column: 3, .. })
        ));
    }

    #[test]
    fn test_rejected_move_leaves_queue_untouched() {
        let mut session = SimulationSession::from_snapshot(&Board::new(6, 4));
        session.enqueue(domino(1));

        let err = session
            .apply_move(MoveCommand::from_tokens("lll"))
            .unwrap_err();
        assert!(matches!(err, ApplyMoveError::Placement(_)));
        assert_eq!(session.pending_pieces(), 1);
        assert_eq!(session.board(), &Board::new(6, 4));

        // The head piece is still available to a valid retry.
        session.apply_move(MoveCommand::from_tokens("l")).unwrap();
        assert_eq!(session.pending_pieces(), 0);
        assert_eq!(
            session.board(),
            &Board::from_ascii(
                "
                ....
                ....
                ....
                ....
                #...
                #...
                ",
            )
        );
    }

    #[test]
    fn test_pieces_consumed_in_fifo_order() {
        let mut session = SimulationSession::from_snapshot(&Board::new(6, 4));
        session.enqueue(domino(0));
        session.enqueue(domino(3));
        session.apply_move(MoveCommand::from_tokens("")).unwrap();
        session.apply_move(MoveCommand::from_tokens("")).unwrap();
        assert_eq!(
            session.board(),
            &Board::from_ascii(
                "
                ....
                ....
                ....
                ....
                #..#
                #..#
                ",
            )
        );
        assert_eq!(session.pending_pieces(), 0);
    }
}
