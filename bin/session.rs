use crate::propose::Propose;
use derive_more::{Display, Error, From};
use lib::reversi::{Game, InvalidProposal, Outcome, Player};
use std::fmt::Display;
use std::io::{self, Write};
use tracing::{info, instrument};

/// The reason why a [`Session`] was interrupted before the game ended.
#[derive(Debug, Display, Error, From)]
pub enum SessionInterrupted<E> {
    #[display(fmt = "failed to obtain the next move")]
    #[from(ignore)]
    Proposer(E),

    #[display(fmt = "{_0}")]
    InvalidProposal(InvalidProposal),

    #[display(fmt = "failed to report the state of the game")]
    Io(io::Error),
}

/// Drives a [`Game`] to its end, reporting its progress as it goes.
#[derive(Debug)]
pub struct Session<P, W> {
    proposer: P,
    writer: W,
}

impl<P: Propose, W: Write> Session<P, W> {
    pub fn new(proposer: P, writer: W) -> Self {
        Session { proposer, writer }
    }

    /// Writes a message ahead of the game.
    pub fn announce<T: Display>(&mut self, msg: T) -> io::Result<()> {
        writeln!(self.writer, "{msg}")?;
        self.writer.flush()
    }

    /// Asks the proposer for moves until the game is over.
    #[instrument(level = "debug", skip_all)]
    pub fn run(&mut self, game: &mut Game) -> Result<Outcome, SessionInterrupted<P::Error>> {
        self.report(game)?;

        let outcome = loop {
            if let Some(o) = game.outcome() {
                break o;
            }

            let pos = self
                .proposer
                .propose(game)
                .map_err(SessionInterrupted::Proposer)?;

            let draw = game.play(pos)?;
            match draw.rejection() {
                None => self.report(game)?,
                Some(r) => writeln!(
                    self.writer,
                    "{} rejected, {r}, the turn passes",
                    draw.proposal()
                )?,
            }
        };

        info!(%outcome);
        writeln!(self.writer, "game over, {outcome}")?;

        match outcome.winner() {
            Some(p) => writeln!(self.writer, "the {p} player wins")?,
            None => writeln!(self.writer, "it's a tie")?,
        }

        self.writer.flush()?;

        Ok(outcome)
    }

    fn report(&mut self, game: &Game) -> io::Result<()> {
        let score = game.score();
        writeln!(self.writer, "{}", game.board())?;
        writeln!(self.writer, "red {}, blue {}", score[Player::Red], score[Player::Blue])?;
        self.writer.flush()
    }
}
