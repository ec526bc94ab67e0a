use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::PieceViewError;

/// Enum representing the type of piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// O-piece.
    O = 1,
    /// S-piece.
    S = 2,
    /// Z-piece.
    Z = 3,
    /// J-piece.
    J = 4,
    /// L-piece.
    L = 5,
    /// T-piece.
    T = 6,
}

impl PieceKind {
    /// Returns the single character representation of this piece kind.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::T => 'T',
        }
    }

    /// Parses a piece kind from a single character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            'T' => Some(PieceKind::T),
            _ => None,
        }
    }
}

/// One rotated shape variant of a falling piece.
///
/// An `OrientedPiece` is a read-only view supplied by a piece descriptor:
/// the bounding box of the rotated shape (`height` x `width`), the default
/// horizontal placement before any left/right movement (`start_column`),
/// and a row-major boolean mask marking the filled cells of the bounding
/// box. The simulation core consumes these views; it does not define the
/// canonical rotation tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrientedPiece {
    kind: PieceKind,
    height: usize,
    width: usize,
    start_column: usize,
    mask: Vec<bool>,
}

impl OrientedPiece {
    /// Creates a validated piece view.
    ///
    /// The mask is row-major with `height * width` entries. Malformed
    /// views are rejected up front so the resolver and mutator never index
    /// out of range.
    pub fn new(
        kind: PieceKind,
        height: usize,
        width: usize,
        start_column: usize,
        mask: Vec<bool>,
    ) -> Result<Self, PieceViewError> {
        if height == 0 || width == 0 {
            return Err(PieceViewError::EmptyBoundingBox { height, width });
        }
        if mask.len() != height * width {
            return Err(PieceViewError::MaskSizeMismatch {
                mask_len: mask.len(),
                height,
                width,
            });
        }
        Ok(Self {
            kind,
            height,
            width,
            start_column,
            mask,
        })
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Default horizontal placement (leftmost column) before any
    /// left/right movement is applied.
    #[must_use]
    pub fn start_column(&self) -> usize {
        self.start_column
    }

    /// Whether the mask bit at `(row, col)` of the bounding box is set.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the bounding box.
    #[must_use]
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.height && col < self.width,
            "mask position ({row}, {col}) out of bounds for {}x{} piece",
            self.height,
            self.width
        );
        self.mask[row * self.width + col]
    }

    /// Creates an `OrientedPiece` from ASCII art for testing.
    ///
    /// `'.'` is an unset mask bit, any other character is a set bit. Rows
    /// are listed top to bottom and must all have the same width.
    ///
    /// # Panics
    ///
    /// Panics if the art is empty or malformed.
    #[must_use]
    pub fn from_ascii(kind: PieceKind, start_column: usize, art: &str) -> Self {
        let rows: Vec<Vec<bool>> = art
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.trim().chars().map(|ch| ch != '.').collect())
            .collect();
        assert!(!rows.is_empty(), "piece art must have at least one row");
        let height = rows.len();
        let width = rows[0].len();
        let mut mask = Vec::with_capacity(height * width);
        for (row_index, row) in rows.iter().enumerate() {
            assert_eq!(
                row.len(),
                width,
                "each row must have exactly {width} cells, got {} at row {row_index}",
                row.len()
            );
            mask.extend_from_slice(row);
        }
        Self::new(kind, height, width, start_column, mask)
            .unwrap_or_else(|err| panic!("invalid piece art: {err}"))
    }
}

/// The piece descriptor contract consumed by the simulation.
///
/// Given the raw rotation count of a move, a descriptor returns the piece
/// view for the resulting orientation. Mapping the raw count to a valid
/// orientation index (typically modulo the number of distinct
/// orientations) is the descriptor's responsibility, not the core's.
pub trait PieceSource: fmt::Debug {
    fn oriented(&self, rotation_count: usize) -> Result<OrientedPiece, PieceViewError>;
}

/// A piece descriptor backed by explicit, caller-supplied orientation
/// views.
///
/// Tetromino pieces have at most four distinct orientations, so the views
/// are held in a fixed-capacity [`ArrayVec`]. Rotation counts wrap modulo
/// the number of orientations, so any raw count from a move command maps
/// to a valid view.
#[derive(Debug, Clone)]
pub struct StaticPiece {
    orientations: ArrayVec<OrientedPiece, 4>,
}

impl StaticPiece {
    /// Creates a descriptor from its distinct orientation views.
    pub fn new(
        orientations: impl IntoIterator<Item = OrientedPiece>,
    ) -> Result<Self, PieceViewError> {
        let mut views = ArrayVec::new();
        for (count, view) in orientations.into_iter().enumerate() {
            if views.try_push(view).is_err() {
                return Err(PieceViewError::TooManyOrientations { count: count + 1 });
            }
        }
        if views.is_empty() {
            return Err(PieceViewError::NoOrientations);
        }
        Ok(Self {
            orientations: views,
        })
    }

    /// A descriptor with a single orientation (rotation is a no-op).
    #[must_use]
    pub fn fixed(view: OrientedPiece) -> Self {
        Self {
            orientations: ArrayVec::from_iter([view]),
        }
    }

    #[must_use]
    pub fn distinct_orientations(&self) -> usize {
        self.orientations.len()
    }
}

impl PieceSource for StaticPiece {
    fn oriented(&self, rotation_count: usize) -> Result<OrientedPiece, PieceViewError> {
        let index = rotation_count % self.orientations.len();
        Ok(self.orientations[index].clone())
    }
}
