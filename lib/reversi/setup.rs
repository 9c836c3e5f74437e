use crate::reversi::{Board, Game, InvalidBoardSize, OutOfRange, Player, Position};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The reason why parsing a [`Setup`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse game setup")]
pub struct ParseSetupError(ron::de::SpannedError);

/// The reason why a [`Setup`] does not describe a valid [`Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error, From)]
pub enum InvalidSetup {
    #[display(fmt = "{_0}")]
    InvalidBoardSize(InvalidBoardSize),

    #[display(fmt = "{_0}")]
    OutOfRange(OutOfRange),

    #[display(fmt = "more than one stone placed at `{_0}`")]
    #[from(ignore)]
    Overlap(#[error(not(source))] Position),
}

/// The initial configuration of a game.
///
/// Serialized as [RON], every field is optional:
///
/// ```text
/// (size: 6, first: blue, stones: Some([((row: 2, col: 2), red), ((row: 2, col: 3), blue)]))
/// ```
///
/// Unless explicitly listed, the stones are laid out as in [`Board::standard`].
///
/// [RON]: https://github.com/ron-rs/ron
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(default, deny_unknown_fields)]
pub struct Setup {
    /// The board dimension.
    #[cfg_attr(test, strategy(proptest::strategy::Strategy::prop_map(1usize..=8, |h| h * 2)))]
    pub size: usize,

    /// The [`Player`] who moves first.
    pub first: Player,

    /// The stones on the board before the first move.
    pub stones: Option<Vec<(Position, Player)>>,
}

impl Default for Setup {
    fn default() -> Self {
        Setup {
            size: Board::SIZE,
            first: Player::Red,
            stones: None,
        }
    }
}

impl Setup {
    /// Lays out the initial [`Board`].
    pub fn board(&self) -> Result<Board, InvalidSetup> {
        let stones = match &self.stones {
            None => return Ok(Board::standard(self.size)?),
            Some(stones) => stones,
        };

        let mut board = Board::empty(self.size)?;
        for &(pos, player) in stones {
            if board.cell_at(pos)?.is_some() {
                return Err(InvalidSetup::Overlap(pos));
            }

            board.place(pos, player);
        }

        Ok(board)
    }

    /// Starts a new [`Game`].
    pub fn game(&self) -> Result<Game, InvalidSetup> {
        Ok(Game::new(self.board()?, self.first))
    }
}

impl fmt::Display for Setup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for Setup {
    type Err = ParseSetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
