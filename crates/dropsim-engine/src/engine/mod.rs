//! Placement simulation logic.
//!
//! This module orchestrates the core data structures to simulate one
//! candidate move at a time:
//!
//! - [`resolve_rest_row`] - Downward collision scan producing the piece's
//!   rest position (or [`RestPosition::NoFit`], the loss trigger)
//! - [`SimulationSession`] - Owned board copy, pending piece queue, and
//!   the `Active` -> `Lost` state machine
//!
//! # Simulation Flow
//!
//! A candidate move is evaluated as follows:
//!
//! 1. Create a [`SimulationSession`] from a snapshot of the authoritative
//!    board
//! 2. Enqueue the pending pieces
//! 3. Apply a [`MoveCommand`](crate::MoveCommand) - the session dequeues
//!    the head piece, resolves its rest row, stamps it, and clears lines
//! 4. Score the resulting board (see the evaluator crate)
//!
//! Each session owns its board exclusively; evaluating several candidates
//! means one fresh session per candidate.
//!
//! # Example
//!
//! ```
//! use dropsim_engine::{
//!     Board, MoveCommand, OrientedPiece, PieceKind, SimulationSession, StaticPiece,
//! };
//!
//! let snapshot = Board::new(6, 4);
//! let mut session = SimulationSession::from_snapshot(&snapshot);
//!
//! let piece = StaticPiece::fixed(OrientedPiece::from_ascii(
//!     PieceKind::O,
//!     1,
//!     "
//!     ##
//!     ##
//!     ",
//! ));
//! session.enqueue(piece);
//!
//! session.apply_move(MoveCommand::from_tokens("l"))?;
//! assert!(!session.has_lost());
//! # Ok::<(), dropsim_engine::ApplyMoveError>(())
//! ```

pub use self::{placement::*, session::*};

mod placement;
mod session;
