use crate::reversi::{
    Board, Direction, Directions, Draw, OutOfRange, Player, Position, Proposal, Rejection,
};
use tracing::{debug, instrument};

/// The [`Direction`]s leading from a [`Position`] to an adjacent cell on the [`Board`].
pub fn ingoing_directions(board: &Board, pos: Position) -> impl Iterator<Item = Direction> + '_ {
    Direction::iter().filter(move |&d| board.contains(pos + d))
}

/// Keeps the [`Direction`]s whose adjacent cell holds a stone of the opponent of `player`.
///
/// The adjacent cells must be on the board, see [`ingoing_directions`].
pub fn touching_directions<'a, I>(
    board: &'a Board,
    player: Player,
    pos: Position,
    directions: I,
) -> impl Iterator<Item = Direction> + 'a
where
    I: IntoIterator<Item = Direction>,
    I::IntoIter: 'a,
{
    directions.into_iter().filter(move |&d| {
        let next = pos + d;
        !board.is_empty(next) && !board.same_colour_as_player(next, player)
    })
}

/// Walks along the beam that starts at `start` and heads towards `d`.
///
/// Returns `true` if the beam reaches a stone of `player` before it reaches an empty cell or
/// runs off the board.
pub fn walk_beam(board: &Board, player: Player, start: Position, d: Direction) -> bool {
    let mut pos = start;

    for _ in 1..board.size() {
        pos += d;
        match board.cell_at(pos) {
            Err(_) | Ok(None) => return false,
            Ok(Some(p)) if p == player => return true,
            Ok(Some(_)) => continue,
        }
    }

    false
}

/// Resolves a [`Proposal`] against the rules.
///
/// A stone may only be placed on an empty cell on the board, such that it encloses a straight
/// line of the opponent's stones between itself and another stone of the same player. The
/// resulting [`Draw`] lists every [`Direction`] along which such a line exists.
#[instrument(level = "trace", skip(board), ret)]
pub fn validate(board: &Board, proposal: Proposal) -> Draw {
    let Proposal { player, position } = proposal;

    if !board.contains(position) {
        debug!(%proposal, "position is off the board");
        return Draw::rejected(proposal, OutOfRange(position).into());
    }

    if !board.is_empty(position) {
        debug!(%proposal, "cell is already occupied");
        return Draw::rejected(proposal, Rejection::CellOccupied(position));
    }

    let ingoing = ingoing_directions(board, position);
    let touching: Directions = touching_directions(board, player, position, ingoing).collect();

    if touching.is_empty() {
        debug!(%proposal, "no adjacent stone of the opponent");
        return Draw::rejected(proposal, Rejection::NotAdjacent(position));
    }

    let enclosing: Directions = touching
        .into_iter()
        .filter(|&d| walk_beam(board, player, position + d, d))
        .collect();

    if enclosing.is_empty() {
        debug!(%proposal, "no stone of the opponent is enclosed");
        Draw::rejected(proposal, Rejection::NotFlanking(position))
    } else {
        Draw::accepted(proposal, enclosing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    fn board(stones: &[((i32, i32), Player)]) -> Board {
        let mut b = Board::empty(8).unwrap();
        for &((r, c), p) in stones {
            b.place(Position::new(r, c), p);
        }

        b
    }

    #[proptest]
    fn positions_off_the_board_are_rejected(
        b: Board,
        p: Player,
        #[filter(!#b.contains(#pos))] pos: Position,
    ) {
        let draw = validate(&b, Proposal::new(p, pos));
        assert!(!draw.is_accepted());
        assert!(draw.directions().is_empty());
        assert_eq!(draw.rejection(), Some(OutOfRange(pos).into()));
    }

    #[proptest]
    fn occupied_cells_are_rejected(
        b: Board,
        p: Player,
        #[filter(#b.contains(#pos) && !#b.is_empty(#pos))] pos: Position,
    ) {
        let draw = validate(&b, Proposal::new(p, pos));
        assert!(!draw.is_accepted());
        assert!(draw.directions().is_empty());
        assert_eq!(draw.rejection(), Some(Rejection::CellOccupied(pos)));
    }

    #[proptest]
    fn validation_has_no_side_effects(b: Board, p: Proposal) {
        let before = b.clone();
        assert_eq!(validate(&b, p), validate(&b, p));
        assert_eq!(b, before);
    }

    #[proptest]
    fn draw_is_accepted_iff_it_captures(b: Board, p: Proposal) {
        let draw = validate(&b, p);
        assert_eq!(draw.is_accepted(), !draw.directions().is_empty());
        assert_eq!(draw.is_accepted(), draw.rejection().is_none());
        assert_eq!(draw.proposal(), p);
    }

    #[proptest]
    fn capturing_directions_are_enclosed_by_an_anchor(b: Board, p: Proposal) {
        let draw = validate(&b, p);

        for &d in draw.directions() {
            let mut pos = p.position + d;
            assert_eq!(b.cell_at(pos), Ok(Some(!p.player)));

            while b.cell_at(pos) == Ok(Some(!p.player)) {
                pos += d;
            }

            assert_eq!(b.cell_at(pos), Ok(Some(p.player)));
        }
    }

    #[proptest]
    fn non_capturing_directions_are_not_enclosed(
        b: Board,
        player: Player,
        #[strategy(0i32..8)] row: i32,
        #[strategy(0i32..8)]
        #[filter(#b.is_empty(Position::new(#row, #col)))]
        col: i32,
    ) {
        let p = Proposal::new(player, Position::new(row, col));
        let draw = validate(&b, p);

        for d in Direction::iter().filter(|d| !draw.directions().contains(d)) {
            let mut pos = p.position + d;
            let mut run = 0;

            while b.cell_at(pos) == Ok(Some(!p.player)) {
                pos += d;
                run += 1;
            }

            assert!(run == 0 || b.cell_at(pos) != Ok(Some(p.player)));
        }
    }

    #[proptest]
    fn capturing_directions_follow_the_examination_order(b: Board, p: Proposal) {
        let draw = validate(&b, p);
        let expected: Vec<_> = Direction::iter()
            .filter(|d| draw.directions().contains(d))
            .collect();

        assert_eq!(draw.directions(), &expected[..]);
    }

    #[test]
    fn ingoing_directions_exclude_rays_leaving_the_board() {
        let b = Board::default();

        assert_eq!(
            ingoing_directions(&b, Position::new(0, 0)).collect::<Vec<_>>(),
            vec![Direction::South, Direction::East, Direction::SouthEast]
        );

        assert_eq!(
            ingoing_directions(&b, Position::new(7, 3)).collect::<Vec<_>>(),
            vec![
                Direction::North,
                Direction::East,
                Direction::West,
                Direction::NorthWest,
                Direction::NorthEast
            ]
        );

        assert_eq!(ingoing_directions(&b, Position::new(3, 3)).count(), 8);
    }

    #[test]
    fn touching_directions_only_keep_stones_of_the_opponent() {
        let b = Board::default();
        let pos = Position::new(2, 3);
        let ingoing = ingoing_directions(&b, pos);

        assert_eq!(
            touching_directions(&b, Player::Blue, pos, ingoing).collect::<Vec<_>>(),
            vec![Direction::South, Direction::SouthEast]
        );

        let ingoing = ingoing_directions(&b, pos);
        assert_eq!(touching_directions(&b, Player::Red, pos, ingoing).count(), 0);
    }

    #[test]
    fn beam_fails_if_it_reaches_an_empty_cell() {
        let b = board(&[((0, 1), Player::Blue), ((0, 2), Player::Blue)]);
        let start = Position::new(0, 1);
        assert!(!walk_beam(&b, Player::Red, start, Direction::East));
    }

    #[test]
    fn beam_fails_if_it_runs_off_the_board() {
        let stones: Vec<_> = (1..8).map(|c| ((0, c), Player::Blue)).collect();
        let b = board(&stones);
        let start = Position::new(0, 1);
        assert!(!walk_beam(&b, Player::Red, start, Direction::East));
    }

    #[test]
    fn beam_succeeds_if_it_reaches_an_anchor() {
        let mut stones: Vec<_> = (1..7).map(|c| ((0, c), Player::Blue)).collect();
        stones.push(((0, 7), Player::Red));
        let b = board(&stones);
        let start = Position::new(0, 1);
        assert!(walk_beam(&b, Player::Red, start, Direction::East));
    }

    #[test]
    fn single_stone_followed_by_anchor_is_captured_along_that_ray_only() {
        let b = Board::default();
        let draw = validate(&b, Proposal::new(Player::Blue, Position::new(2, 3)));
        assert!(draw.is_accepted());
        assert_eq!(draw.directions(), &[Direction::South]);
    }

    #[test]
    fn friendly_neighbour_without_opponent_in_between_captures_nothing() {
        let b = Board::default();
        let draw = validate(&b, Proposal::new(Player::Red, Position::new(2, 3)));
        assert_eq!(draw.rejection(), Some(Rejection::NotAdjacent(Position::new(2, 3))));
    }

    #[test]
    fn opponent_line_without_anchor_is_not_flanked() {
        let b = board(&[((0, 1), Player::Blue), ((0, 2), Player::Blue)]);
        let draw = validate(&b, Proposal::new(Player::Red, Position::new(0, 0)));
        assert_eq!(draw.rejection(), Some(Rejection::NotFlanking(Position::new(0, 0))));
    }

    #[test]
    fn last_row_and_column_are_playable() {
        let b = board(&[((7, 6), Player::Blue), ((7, 5), Player::Red)]);
        let draw = validate(&b, Proposal::new(Player::Red, Position::new(7, 7)));
        assert_eq!(draw.directions(), &[Direction::West]);
    }

    #[test]
    fn move_may_capture_along_several_rays() {
        let b = board(&[
            ((3, 4), Player::Blue),
            ((3, 5), Player::Red),
            ((4, 3), Player::Blue),
            ((5, 3), Player::Red),
            ((4, 4), Player::Blue),
            ((5, 5), Player::Red),
            ((2, 4), Player::Blue),
        ]);

        let draw = validate(&b, Proposal::new(Player::Red, Position::new(3, 3)));

        assert_eq!(
            draw.directions(),
            &[Direction::South, Direction::East, Direction::SouthEast]
        );
    }
}
