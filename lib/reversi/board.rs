use crate::reversi::{Player, Position, Score};
use derive_more::{Display, Error};
use std::fmt::{self, Write};
use std::ops::Index;

#[cfg(test)]
use proptest::{collection::vec, prelude::*};

/// The reason why a [`Board`] of a given size could not be constructed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
#[display(fmt = "board size `{_0}` is not an even number between 2 and 16")]
pub struct InvalidBoardSize(#[error(not(source))] pub usize);

/// Represents a [`Position`] that lies outside of a [`Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "position `{_0}` is off the board")]
pub struct OutOfRange(#[error(not(source))] pub Position);

/// The reversi board.
///
/// Holds an `N×N` grid of cells, each either empty or owned by a [`Player`], as well as the
/// number of stones placed so far, which always matches the number of occupied cells.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Player>>,
    stones: usize,
}

impl Default for Board {
    /// The standard 8×8 board with four stones at the centre.
    fn default() -> Self {
        let mut board = Board {
            size: Self::SIZE,
            cells: vec![None; Self::SIZE * Self::SIZE],
            stones: 0,
        };

        board.setup();
        board
    }
}

#[cfg(test)]
impl Arbitrary for Board {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        vec(any::<Option<Player>>(), Self::SIZE * Self::SIZE)
            .prop_map(|cells| Board {
                size: Self::SIZE,
                stones: cells.iter().flatten().count(),
                cells,
            })
            .boxed()
    }
}

impl Board {
    /// The default board dimension.
    pub const SIZE: usize = 8;

    /// The largest supported board dimension.
    pub const MAX_SIZE: usize = 16;

    /// Constructs an empty `size×size` board.
    pub fn empty(size: usize) -> Result<Self, InvalidBoardSize> {
        if size % 2 != 0 || !(2..=Self::MAX_SIZE).contains(&size) {
            return Err(InvalidBoardSize(size));
        }

        Ok(Board {
            size,
            cells: vec![None; size * size],
            stones: 0,
        })
    }

    /// Constructs a `size×size` board with the four centre cells occupied.
    ///
    /// The upper two belong to [`Player::Red`], the lower two to [`Player::Blue`].
    pub fn standard(size: usize) -> Result<Self, InvalidBoardSize> {
        let mut board = Self::empty(size)?;
        board.setup();
        Ok(board)
    }

    fn setup(&mut self) {
        let c = self.size as i32 / 2;
        self.place(Position::new(c - 1, c - 1), Player::Red);
        self.place(Position::new(c - 1, c), Player::Red);
        self.place(Position::new(c, c - 1), Player::Blue);
        self.place(Position::new(c, c), Player::Blue);
    }

    /// The board dimension `N`.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The number of cells, `N²`.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// The number of stones on the board.
    #[inline(always)]
    pub fn stones(&self) -> usize {
        self.stones
    }

    /// Whether every cell is occupied.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.stones == self.capacity()
    }

    /// Whether the [`Position`] lies on this board.
    #[inline(always)]
    pub fn contains(&self, pos: Position) -> bool {
        let range = 0..self.size as i32;
        range.contains(&pos.row) && range.contains(&pos.col)
    }

    #[inline(always)]
    fn offset(&self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.row as usize * self.size + pos.col as usize)
        } else {
            None
        }
    }

    /// The contents of the cell at a [`Position`].
    #[inline(always)]
    pub fn cell_at(&self, pos: Position) -> Result<Option<Player>, OutOfRange> {
        match self.offset(pos) {
            Some(i) => Ok(self.cells[i]),
            None => Err(OutOfRange(pos)),
        }
    }

    /// Whether the cell at a [`Position`] is empty.
    ///
    /// # Panics
    ///
    /// Panics if the [`Position`] is off the board.
    #[inline(always)]
    pub fn is_empty(&self, pos: Position) -> bool {
        self[pos].is_none()
    }

    /// Whether the cell at a [`Position`] is owned by a [`Player`].
    ///
    /// Positions off the board are owned by no one.
    #[inline(always)]
    pub fn is_owned_by(&self, pos: Position, player: Player) -> bool {
        self.cell_at(pos) == Ok(Some(player))
    }

    /// Whether the cell at a [`Position`] holds a stone of a [`Player`].
    ///
    /// # Panics
    ///
    /// Panics if the [`Position`] is off the board.
    #[inline(always)]
    pub fn same_colour_as_player(&self, pos: Position, player: Player) -> bool {
        self[pos] == Some(player)
    }

    /// Whether the cells at both positions hold stones of the same [`Player`].
    ///
    /// # Panics
    ///
    /// Panics if either [`Position`] is off the board.
    #[inline(always)]
    pub fn same_colour_as_position(&self, a: Position, b: Position) -> bool {
        self[a].is_some() && self[a] == self[b]
    }

    /// Places a new stone of a [`Player`] on an empty cell.
    ///
    /// # Panics
    ///
    /// Panics if the [`Position`] is off the board.
    #[inline(always)]
    pub fn place(&mut self, pos: Position, player: Player) {
        let i = self.offset_or_panic(pos);
        debug_assert!(self.cells[i].is_none(), "cell {pos} is already occupied");
        self.cells[i] = Some(player);
        self.stones += 1;
    }

    /// Hands the stone at an occupied cell over to a [`Player`].
    ///
    /// # Panics
    ///
    /// Panics if the [`Position`] is off the board.
    #[inline(always)]
    pub fn flip(&mut self, pos: Position, player: Player) {
        let i = self.offset_or_panic(pos);
        debug_assert!(self.cells[i].is_some(), "cell {pos} is empty");
        self.cells[i] = Some(player);
    }

    /// Counts the stones owned by a [`Player`].
    pub fn score(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }

    /// Counts the stones owned by each [`Player`].
    pub fn scores(&self) -> Score {
        Score::new(self.score(Player::Red), self.score(Player::Blue))
    }

    /// An iterator over all cells in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Position, Option<Player>)> + '_ {
        let n = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (Position::new((i / n) as i32, (i % n) as i32), c))
    }

    #[inline(always)]
    fn offset_or_panic(&self, pos: Position) -> usize {
        match self.offset(pos) {
            Some(i) => i,
            None => panic!("position {pos} is off the {n}×{n} board", n = self.size),
        }
    }
}

/// Retrieves the contents of the cell at a given [`Position`].
///
/// # Panics
///
/// Panics if the [`Position`] is off the board.
impl Index<Position> for Board {
    type Output = Option<Player>;

    #[inline(always)]
    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[self.offset_or_panic(pos)]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("  ")?;
        for col in 0..self.size {
            write!(f, "{col:>2}")?;
        }

        for (pos, cell) in self.iter() {
            if pos.col == 0 {
                write!(f, "\n{:>2}", pos.row)?;
            }

            f.write_char(' ')?;
            f.write_char(match cell {
                None => '.',
                Some(Player::Red) => 'R',
                Some(Player::Blue) => 'B',
            })?;
        }

        Ok(())
    }
}
