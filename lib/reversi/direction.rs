use derive_more::Display;

/// One of the eight rays leaving a cell.
///
/// Rows grow southwards and columns grow eastwards.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Direction {
    #[display(fmt = "south")]
    South,
    #[display(fmt = "north")]
    North,
    #[display(fmt = "east")]
    East,
    #[display(fmt = "west")]
    West,
    #[display(fmt = "north-west")]
    NorthWest,
    #[display(fmt = "north-east")]
    NorthEast,
    #[display(fmt = "south-east")]
    SouthEast,
    #[display(fmt = "south-west")]
    SouthWest,
}

impl Direction {
    /// All directions, in the order in which rays are examined.
    pub const ALL: [Direction; 8] = [
        Direction::South,
        Direction::North,
        Direction::East,
        Direction::West,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// An iterator over all directions.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        Self::ALL.into_iter()
    }

    /// The unit step `(Δrow, Δcol)`.
    #[inline(always)]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::South => (1, 0),
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
            Direction::NorthEast => (-1, 1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
        }
    }
}
