use serde::{Deserialize, Serialize};

use super::piece::{OrientedPiece, PieceKind};

/// A single cell of the simulated board.
///
/// The piece kind carried by a filled cell is identity metadata for
/// rendering and diagnostics; collision detection and scoring only
/// distinguish filled from empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell (no piece).
    #[default]
    Empty,
    /// Cell occupied by a locked piece of a specific kind.
    Piece(PieceKind),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[must_use]
    pub fn is_filled(self) -> bool {
        !self.is_empty()
    }
}

/// Read-only view of an authoritative board, consumed once when a
/// simulation session is created.
///
/// The simulation deep-copies the cell states and never retains a
/// reference to the source, so the authoritative game can keep mutating
/// its own state while candidate moves are evaluated.
pub trait BoardSnapshot {
    fn height(&self) -> usize;
    fn width(&self) -> usize;
    fn cell(&self, row: usize, col: usize) -> Cell;
}

/// A rectangular grid of [`Cell`]s with dimensions fixed at construction.
///
/// Rows are indexed top to bottom, columns left to right. The board is a
/// plain container: placement validation lives in
/// [`resolve_rest_row`](crate::engine::resolve_rest_row), and the only
/// mutations are [`stamp_piece`](Board::stamp_piece) and
/// [`clear_filled_lines`](Board::clear_filled_lines).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an all-empty board.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        assert!(
            height > 0 && width > 0,
            "board dimensions must be non-zero, got {height}x{width}"
        );
        Self {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        }
    }

    /// Deep-copies the cell states of an authoritative board.
    #[must_use]
    pub fn from_snapshot(snapshot: &impl BoardSnapshot) -> Self {
        let mut board = Self::new(snapshot.height(), snapshot.width());
        for row in 0..board.height {
            for col in 0..board.width {
                board.set_cell(row, col, snapshot.cell(row, col));
            }
        }
        board
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        let index = self.index(row, col);
        self.cells[index] = cell;
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) out of bounds for {}x{} board",
            self.height,
            self.width
        );
        row * self.width + col
    }

    /// Returns an iterator over the cells of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        let start = self.index(row, 0);
        self.cells[start..start + self.width].iter().copied()
    }

    #[must_use]
    pub fn row_is_filled(&self, row: usize) -> bool {
        self.row(row).all(Cell::is_filled)
    }

    /// Writes the piece's filled cells into the board.
    ///
    /// This is a compositing operation: cells where the mask bit is unset
    /// are left untouched. Bounds must have been validated by the caller
    /// (see [`resolve_rest_row`](crate::engine::resolve_rest_row)).
    ///
    /// # Panics
    ///
    /// Panics if the piece's bounding box does not fit at the given
    /// position.
    pub fn stamp_piece(&mut self, piece: &OrientedPiece, top_row: usize, left_column: usize) {
        assert!(
            top_row + piece.height() <= self.height && left_column + piece.width() <= self.width,
            "piece {}x{} at ({top_row}, {left_column}) out of bounds for {}x{} board",
            piece.height(),
            piece.width(),
            self.height,
            self.width
        );
        for i in 0..piece.height() {
            for j in 0..piece.width() {
                if piece.is_filled(i, j) {
                    self.set_cell(top_row + i, left_column + j, Cell::Piece(piece.kind()));
                }
            }
        }
    }

    /// Removes every full row and returns how many were removed.
    ///
    /// Rows are scanned top to bottom. When a full row is found, every row
    /// above it shifts down by one, row 0 becomes empty, and the same
    /// index is examined again before the scan advances. Re-examining the
    /// shifted-in row keeps adjacent full rows from being skipped.
    pub fn clear_filled_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut row = 0;
        while row < self.height {
            if !self.row_is_filled(row) {
                row += 1;
                continue;
            }
            cleared += 1;
            for m in (1..=row).rev() {
                for col in 0..self.width {
                    let above = self.cell(m - 1, col);
                    self.set_cell(m, col, above);
                }
            }
            for col in 0..self.width {
                self.set_cell(0, col, Cell::Empty);
            }
        }
        cleared
    }

    /// Creates a `Board` from ASCII art for testing.
    ///
    /// `'.'` is an empty cell, `'#'` is a filled cell (tagged as an
    /// I-piece), and a piece letter (`IOSZJLT`) is a filled cell of that
    /// kind. Rows are listed top to bottom and must all have the same
    /// width.
    ///
    /// # Panics
    ///
    /// Panics if the art is empty or the rows have inconsistent widths.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let rows: Vec<Vec<Cell>> = art
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.trim()
                    .chars()
                    .map(|ch| match ch {
                        '.' => Cell::Empty,
                        '#' => Cell::Piece(PieceKind::I),
                        _ => Cell::Piece(
                            PieceKind::from_char(ch)
                                .unwrap_or_else(|| panic!("invalid board cell character {ch:?}")),
                        ),
                    })
                    .collect()
            })
            .collect();
        assert!(!rows.is_empty(), "board art must have at least one row");
        let width = rows[0].len();
        let mut board = Self::new(rows.len(), width);
        for (row_index, cells) in rows.iter().enumerate() {
            assert_eq!(
                cells.len(),
                width,
                "each row must have exactly {width} cells, got {} at row {row_index}",
                cells.len()
            );
            for (col, &cell) in cells.iter().enumerate() {
                board.set_cell(row_index, col, cell);
            }
        }
        board
    }
}

impl BoardSnapshot for Board {
    fn height(&self) -> usize {
        Board::height(self)
    }

    fn width(&self) -> usize {
        Board::width(self)
    }

    fn cell(&self, row: usize, col: usize) -> Cell {
        Board::cell(self, row, col)
    }
}
