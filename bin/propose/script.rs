use super::Propose;
use derive_more::{Display, Error};
use lib::reversi::{Game, Position};
use std::vec::IntoIter;

/// Indicates that a [`Script`] has no more moves to propose.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
#[display(fmt = "the script ran out of moves")]
pub struct ScriptExhausted;

/// Proposes a predetermined sequence of [`Position`]s, regardless of the state of the game.
#[derive(Debug)]
pub struct Script {
    moves: IntoIter<Position>,
}

impl Script {
    pub fn new(moves: Vec<Position>) -> Self {
        Script {
            moves: moves.into_iter(),
        }
    }
}

impl Propose for Script {
    type Error = ScriptExhausted;

    fn propose(&mut self, _: &Game) -> Result<Position, Self::Error> {
        self.moves.next().ok_or(ScriptExhausted)
    }
}
