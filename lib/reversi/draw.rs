use crate::reversi::{Direction, OutOfRange, Player, Position};
use arrayvec::ArrayVec;
use derive_more::{Constructor, Display, Error, From};
use std::fmt;

/// The set of [`Direction`]s along which a move captures.
pub type Directions = ArrayVec<Direction, 8>;

/// A [`Player`]'s request to place a stone at a [`Position`], not yet validated.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{player} at {position}")]
pub struct Proposal {
    pub player: Player,
    pub position: Position,
}

/// The reason why a [`Proposal`] was rejected.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error, From)]
pub enum Rejection {
    #[display(fmt = "{_0}")]
    OutOfRange(OutOfRange),

    #[display(fmt = "cell `{_0}` is already occupied")]
    #[from(ignore)]
    CellOccupied(#[error(not(source))] Position),

    #[display(fmt = "no stone of the opponent is adjacent to `{_0}`")]
    #[from(ignore)]
    NotAdjacent(#[error(not(source))] Position),

    #[display(fmt = "placing a stone at `{_0}` encloses no stone of the opponent")]
    #[from(ignore)]
    NotFlanking(#[error(not(source))] Position),
}

/// A [`Proposal`] resolved against the rules.
///
/// A draw is accepted if and only if it captures along at least one [`Direction`].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Draw {
    player: Player,
    position: Position,
    directions: Directions,
    rejection: Option<Rejection>,
}

impl Draw {
    /// An accepted draw capturing along the given [`Direction`]s.
    pub(crate) fn accepted(p: Proposal, directions: Directions) -> Self {
        debug_assert!(!directions.is_empty());

        Draw {
            player: p.player,
            position: p.position,
            directions,
            rejection: None,
        }
    }

    /// A rejected draw.
    pub(crate) fn rejected(p: Proposal, reason: Rejection) -> Self {
        Draw {
            player: p.player,
            position: p.position,
            directions: Directions::new(),
            rejection: Some(reason),
        }
    }

    /// The [`Player`] who proposed this draw.
    #[inline(always)]
    pub fn player(&self) -> Player {
        self.player
    }

    /// The [`Position`] proposed.
    #[inline(always)]
    pub fn position(&self) -> Position {
        self.position
    }

    /// The [`Proposal`] this draw resolves.
    #[inline(always)]
    pub fn proposal(&self) -> Proposal {
        Proposal::new(self.player, self.position)
    }

    /// Whether this draw complies with the rules.
    #[inline(always)]
    pub fn is_accepted(&self) -> bool {
        self.rejection.is_none()
    }

    /// The [`Direction`]s along which stones of the opponent are captured.
    ///
    /// Empty if and only if the draw was rejected.
    #[inline(always)]
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// The reason why this draw was rejected, if it was.
    #[inline(always)]
    pub fn rejection(&self) -> Option<Rejection> {
        self.rejection
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "player: {}", self.player)?;
        writeln!(f, "position: {}", self.position)?;
        writeln!(f, "accepted: {}", self.is_accepted())?;
        f.write_str("directions enclosing: [")?;

        for (i, d) in self.directions.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }

            write!(f, "{d}")?;
        }

        f.write_str("]")?;

        if let Some(r) = self.rejection {
            write!(f, "\nrejected: {r}")?;
        }

        Ok(())
    }
}
