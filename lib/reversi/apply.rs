use crate::reversi::{Board, Draw};
use tracing::instrument;

/// Commits an accepted [`Draw`] to the [`Board`].
///
/// Every stone of the opponent enclosed along each capturing direction changes hands, then the
/// new stone is placed.
///
/// # Panics
///
/// Panics if the draw was rejected.
#[instrument(level = "trace", skip(board))]
pub fn apply(board: &mut Board, draw: &Draw) {
    assert!(draw.is_accepted(), "attempted to apply a rejected draw");

    let player = draw.player();

    for &d in draw.directions() {
        let mut pos = draw.position() + d;
        while board.is_owned_by(pos, !player) {
            board.flip(pos, player);
            pos += d;
        }

        debug_assert!(board.is_owned_by(pos, player));
    }

    board.place(draw.position(), player);
}
