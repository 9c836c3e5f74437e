use crate::reversi::Player;
use derive_more::Display;
use std::ops::Index;

/// The number of stones each [`Player`] owns.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "[{}, {}]", "_0[0]", "_0[1]")]
pub struct Score([usize; 2]);

impl Score {
    /// Constructs a [`Score`] from the stone counts of [`Player::Red`] and [`Player::Blue`].
    #[inline(always)]
    pub fn new(red: usize, blue: usize) -> Self {
        Score([red, blue])
    }

    /// The total number of stones.
    #[inline(always)]
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// The [`Player`] with strictly more stones, if any.
    pub fn leader(&self) -> Option<Player> {
        match self[Player::Red].cmp(&self[Player::Blue]) {
            std::cmp::Ordering::Greater => Some(Player::Red),
            std::cmp::Ordering::Less => Some(Player::Blue),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Index<Player> for Score {
    type Output = usize;

    #[inline(always)]
    fn index(&self, p: Player) -> &Self::Output {
        &self.0[p as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn score_is_indexed_by_player(red: usize, blue: usize) {
        let s = Score::new(red, blue);
        assert_eq!(s[Player::Red], red);
        assert_eq!(s[Player::Blue], blue);
    }

    #[proptest]
    fn total_sums_both_players(
        #[strategy(0usize..64)] red: usize,
        #[strategy(0usize..64)] blue: usize,
    ) {
        assert_eq!(Score::new(red, blue).total(), red + blue);
    }

    #[proptest]
    fn leader_has_more_stones(s: Score) {
        match s.leader() {
            Some(p) => assert!(s[p] > s[!p]),
            None => assert_eq!(s[Player::Red], s[Player::Blue]),
        }
    }

    #[proptest]
    fn there_is_no_leader_if_tied(n: usize) {
        assert_eq!(Score::new(n, n).leader(), None);
    }

    #[test]
    fn score_is_displayed_as_a_pair() {
        assert_eq!(Score::new(3, 5).to_string(), "[3, 5]");
    }
}
