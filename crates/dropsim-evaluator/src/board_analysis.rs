use std::cell::OnceCell;

use dropsim_engine::Board;

/// Lazily computed board metrics consumed by the fitness evaluator.
///
/// Each metric is computed at most once per analysis and cached; an
/// analysis is built from a clone of the board, so later board mutations
/// do not invalidate it.
#[derive(Debug)]
pub struct BoardAnalysis {
    board: Board,
    column_heights: OnceCell<Vec<usize>>,
    max_height: OnceCell<usize>,
    height_variance: OnceCell<usize>,
    gaps: OnceCell<usize>,
}

impl BoardAnalysis {
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        Self {
            board: board.clone(),
            column_heights: OnceCell::new(),
            max_height: OnceCell::new(),
            height_variance: OnceCell::new(),
            gaps: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Per-column height: board height minus the topmost filled row, or 0
    /// for an entirely empty column.
    #[must_use]
    pub fn column_heights(&self) -> &[usize] {
        self.column_heights.get_or_init(|| {
            let mut column_heights = vec![0; self.board.width()];
            for (col, height) in column_heights.iter_mut().enumerate() {
                let top = (0..self.board.height())
                    .find(|&row| self.board.cell(row, col).is_filled());
                if let Some(top) = top {
                    *height = self.board.height() - top;
                }
            }
            column_heights
        })
    }

    /// Maximum column height. Weighted at 0 by the reference weights but
    /// retained as a tuning hook.
    #[must_use]
    pub fn max_height(&self) -> usize {
        *self
            .max_height
            .get_or_init(|| self.column_heights().iter().copied().max().unwrap_or(0))
    }

    /// Sum of absolute height differences between adjacent columns.
    #[must_use]
    pub fn height_variance(&self) -> usize {
        *self.height_variance.get_or_init(|| {
            self.column_heights()
                .windows(2)
                .map(|pair| pair[0].abs_diff(pair[1]))
                .sum()
        })
    }

    /// Count of empty cells with at least one filled cell above them in
    /// the same column (buried space).
    #[must_use]
    pub fn gaps(&self) -> usize {
        *self.gaps.get_or_init(|| {
            let mut gaps = 0;
            for col in 0..self.board.width() {
                let mut covered = false;
                for row in 0..self.board.height() {
                    if self.board.cell(row, col).is_filled() {
                        covered = true;
                    } else if covered {
                        gaps += 1;
                    }
                }
            }
            gaps
        })
    }
}
