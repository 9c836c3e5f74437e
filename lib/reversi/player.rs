use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::ops::Not;
use test_strategy::Arbitrary;

/// One of the two sides competing for the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Player {
    #[display(fmt = "red")]
    Red = 0,
    #[display(fmt = "blue")]
    Blue = 1,
}

impl Player {
    /// Both players, in order of their ids.
    pub const ALL: [Player; 2] = [Player::Red, Player::Blue];

    /// This player's numeric id, either 0 or 1.
    #[inline(always)]
    pub fn id(self) -> u8 {
        self as u8
    }

    /// The other player.
    #[inline(always)]
    pub fn opponent(self) -> Self {
        !self
    }
}

impl Not for Player {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }
}

/// The reason why converting a raw id into a [`Player`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
#[display(fmt = "`{_0}` is not a valid player id, expected 0 or 1")]
pub struct InvalidPlayerId(#[error(not(source))] pub u8);

impl TryFrom<u8> for Player {
    type Error = InvalidPlayerId;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Player::Red),
            1 => Ok(Player::Blue),
            _ => Err(InvalidPlayerId(id)),
        }
    }
}
