use crate::reversi::{
    apply, validate, Board, Draw, Outcome, Player, Position, Proposal, Score, Termination,
};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

/// The reason why a [`Proposal`] could not be submitted to the [`Game`].
///
/// Unlike rejections by the rules, these are violations of the turn protocol.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum InvalidProposal {
    #[display(fmt = "the game has ended, {_0}")]
    GameHasEnded(#[error(not(source))] Outcome),

    #[display(fmt = "it is not the {_0} player's turn")]
    TurnOfTheOpponent(#[error(not(source))] Player),
}

/// Holds the state of a game of reversi.
///
/// Players take turns, each proposing one stone. Rejected proposals leave the [`Board`] as it
/// was, but pass the turn nonetheless. The game ends after an attempt if either
///
/// 1. both that attempt and the one before it were rejected,
/// 2. the board is full, or
/// 3. the opponent of the player who just moved has no stones left.
///
/// For the purposes of the first rule, the first attempt of the game is preceded by an accepted
/// one by convention.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Game {
    board: Board,
    turn: Player,
    score: Score,
    history: Vec<Draw>,
    outcome: Option<Outcome>,
}

impl Default for Game {
    fn default() -> Self {
        Game::new(Board::default(), Player::Red)
    }
}

impl Game {
    /// Starts a game on the given [`Board`] with `first` to move.
    pub fn new(board: Board, first: Player) -> Self {
        Game {
            score: board.scores(),
            board,
            turn: first,
            history: Vec::new(),
            outcome: None,
        }
    }

    /// The current state of the board.
    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[inline(always)]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// The number of stones each player owns, as of the last accepted [`Draw`].
    #[inline(always)]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Every [`Draw`] resolved so far, in order.
    #[inline(always)]
    pub fn history(&self) -> &[Draw] {
        &self.history
    }

    /// The most recent [`Draw`], if any.
    #[inline(always)]
    pub fn last(&self) -> Option<&Draw> {
        self.history.last()
    }

    /// The result of the game if it has ended.
    #[inline(always)]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Whether the game has ended.
    #[inline(always)]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Proposes to place a stone for the side to move.
    pub fn play(&mut self, pos: Position) -> Result<&Draw, InvalidProposal> {
        self.execute(Proposal::new(self.turn, pos))
    }

    /// Resolves a [`Proposal`] and, if accepted, commits it to the board.
    ///
    /// Whether accepted or rejected, the resulting [`Draw`] is appended to the history and the
    /// turn passes to the opponent.
    #[instrument(level = "debug", skip(self), fields(turn = %self.turn))]
    pub fn execute(&mut self, proposal: Proposal) -> Result<&Draw, InvalidProposal> {
        if let Some(o) = self.outcome {
            debug!(%proposal, "the game has ended");
            return Err(InvalidProposal::GameHasEnded(o));
        }

        if proposal.player != self.turn {
            debug!(%proposal, "not the proposer's turn");
            return Err(InvalidProposal::TurnOfTheOpponent(proposal.player));
        }

        let draw = validate(&self.board, proposal);

        if draw.is_accepted() {
            apply(&mut self.board, &draw);
            self.score = self.board.scores();
            debug!(score = %self.score, "draw accepted");
        }

        self.outcome = self
            .termination(&draw)
            .map(|reason| Outcome::new(reason, self.score));

        if let Some(o) = self.outcome {
            info!(outcome = %o, "game over");
        }

        self.history.push(draw);
        self.turn = !self.turn;

        Ok(&self.history[self.history.len() - 1])
    }

    fn termination(&self, draw: &Draw) -> Option<Termination> {
        let previous = self.history.last().map_or(true, Draw::is_accepted);
        let opponent = !draw.player();

        if !draw.is_accepted() && !previous {
            Some(Termination::ConsecutiveRejections)
        } else if self.board.is_full() {
            Some(Termination::BoardFull)
        } else if self.score[opponent] == 0 {
            Some(Termination::Shutout(opponent))
        } else {
            None
        }
    }
}
