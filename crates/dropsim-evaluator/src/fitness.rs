use dropsim_engine::{Board, SimulationSession};

use crate::{board_analysis::BoardAnalysis, weights::FitnessWeights};

/// Sentinel score returned for any lost session, regardless of weights.
pub const LOSS_SCORE: i64 = -10_000;

/// Heuristic fitness score of a simulated board state.
///
/// The evaluator is a weighted sum over the [`BoardAnalysis`] metrics plus
/// a bonus for lines cleared by the most recent move. Lost sessions
/// short-circuit to [`LOSS_SCORE`] without analyzing the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FitnessEvaluator {
    weights: FitnessWeights,
}

impl FitnessEvaluator {
    #[must_use]
    pub fn new(weights: FitnessWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> &FitnessWeights {
        &self.weights
    }

    /// Scores a board state.
    ///
    /// `lines_cleared` is the clear count of the most recent move, and
    /// `has_lost` whether the session has reached its terminal state.
    /// Pure function of its inputs; scoring the same state twice returns
    /// the same value.
    #[must_use]
    pub fn score(&self, board: &Board, lines_cleared: usize, has_lost: bool) -> i64 {
        if has_lost {
            return LOSS_SCORE;
        }
        let analysis = BoardAnalysis::from_board(board);
        self.weights.base
            + self.weights.max_height * to_i64(analysis.max_height())
            + self.weights.height_variance * to_i64(analysis.height_variance())
            + self.weights.gap * to_i64(analysis.gaps())
            + self.weights.sent_lines * sent_lines(lines_cleared)
    }

    /// Scores a session's current state: its board, the clear count of
    /// its most recent move, and its loss flag.
    #[must_use]
    pub fn score_session(&self, session: &SimulationSession) -> i64 {
        self.score(session.board(), session.lines_cleared(), session.has_lost())
    }
}

/// Multi-line clear bonus factor.
///
/// Exactly one cleared line contributes nothing; any other count
/// contributes its square. The discontinuity at one line is deliberate:
/// it rewards multi-line clears disproportionately.
fn sent_lines(lines_cleared: usize) -> i64 {
    if lines_cleared == 1 {
        0
    } else {
        to_i64(lines_cleared * lines_cleared)
    }
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap()
}
