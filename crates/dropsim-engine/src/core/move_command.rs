use std::{convert::Infallible, str::FromStr};

/// A candidate move, decoded from a token string.
///
/// Each token is a single character: `'c'` rotates clockwise, `'l'` moves
/// left, and **any other character** moves right. The lenient right-move
/// default matches the reference encoding and is part of the observable
/// contract, so parsing never fails. There is no drop token; descent is
/// always computed by the placement resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveCommand {
    rotations: usize,
    offset: i32,
}

impl MoveCommand {
    /// Decodes a token string into net rotation count and net horizontal
    /// offset.
    #[must_use]
    pub fn from_tokens(tokens: &str) -> Self {
        let mut rotations = 0;
        let mut offset = 0;
        for token in tokens.chars() {
            match token {
                'c' => rotations += 1,
                'l' => offset -= 1,
                _ => offset += 1,
            }
        }
        Self { rotations, offset }
    }

    /// Raw count of rotate tokens. The piece descriptor maps this to an
    /// orientation index.
    #[must_use]
    pub fn rotations(self) -> usize {
        self.rotations
    }

    /// Net horizontal offset (right-count minus left-count), relative to
    /// the piece's default starting column. May be negative.
    #[must_use]
    pub fn offset(self) -> i32 {
        self.offset
    }
}

impl FromStr for MoveCommand {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tokens(s))
    }
}
