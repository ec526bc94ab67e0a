pub use self::{board::*, move_command::*, piece::*};

pub(crate) mod board;
pub(crate) mod move_command;
pub(crate) mod piece;
