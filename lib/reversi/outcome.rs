use crate::reversi::{Player, Score};
use derive_more::{Constructor, Display};

/// The reason why a game of reversi ended.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Termination {
    #[display(fmt = "both players failed to set a stone in a row")]
    ConsecutiveRejections,

    #[display(fmt = "the board is full")]
    BoardFull,

    #[display(fmt = "the {_0} player has no stones left")]
    Shutout(Player),
}

/// One of the possible outcomes of a game of reversi.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{reason}, final score {score}")]
pub struct Outcome {
    pub reason: Termination,
    pub score: Score,
}

impl Outcome {
    /// The [`Player`] with more stones on the board, if any.
    pub fn winner(&self) -> Option<Player> {
        self.score.leader()
    }

    /// Whether both players ended with the same number of stones.
    pub fn is_tie(&self) -> bool {
        self.winner().is_none()
    }
}
