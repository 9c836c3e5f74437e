use lib::reversi::{Game, Position};

mod script;
mod terminal;

pub use script::*;
pub use terminal::*;

/// Trait for types that know where to place the next stone.
#[cfg_attr(test, mockall::automock(type Error = String;))]
pub trait Propose {
    /// The reason why no [`Position`] could be proposed.
    type Error;

    /// Proposes a [`Position`] for the side to move.
    fn propose(&mut self, game: &Game) -> Result<Position, Self::Error>;
}
