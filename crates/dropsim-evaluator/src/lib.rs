//! Fitness evaluation for simulated board states.
//!
//! This crate scores the board a [`dropsim_engine::SimulationSession`]
//! produces after a candidate move, so a decision-making agent can compare
//! candidates and commit the best one:
//!
//! - [`board_analysis`] - Lazy-evaluated board metrics (column heights,
//!   max height, adjacent-height variance, buried gaps)
//! - [`weights`] - Configurable weight set with the reference defaults
//! - [`fitness`] - The weighted-sum evaluator and the loss sentinel
//!
//! # Scoring Model
//!
//! Non-loss scores are a linear combination of the analysis metrics:
//!
//! ```text
//! score = base
//!       + max_height_weight      * max_height
//!       + height_variance_weight * height_variance
//!       + gap_weight             * gaps
//!       + sent_lines_weight      * sent_lines
//! ```
//!
//! where `sent_lines` is `0` for exactly one cleared line and the square
//! of the clear count otherwise, rewarding multi-line clears
//! disproportionately. A lost session always scores the fixed
//! [`fitness::LOSS_SCORE`] sentinel.
//!
//! # Example
//!
//! ```
//! use dropsim_engine::{
//!     Board, MoveCommand, OrientedPiece, PieceKind, SimulationSession, StaticPiece,
//! };
//! use dropsim_evaluator::fitness::FitnessEvaluator;
//!
//! let mut session = SimulationSession::from_snapshot(&Board::new(6, 4));
//! session.enqueue(StaticPiece::fixed(OrientedPiece::from_ascii(
//!     PieceKind::O,
//!     1,
//!     "
//!     ##
//!     ##
//!     ",
//! )));
//! session.apply_move(MoveCommand::from_tokens("r"))?;
//!
//! let evaluator = FitnessEvaluator::default();
//! let score = evaluator.score_session(&session);
//! assert!(score <= 1000);
//! # Ok::<(), dropsim_engine::ApplyMoveError>(())
//! ```

pub mod board_analysis;
pub mod fitness;
pub mod weights;
