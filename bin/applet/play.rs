use crate::{io::Io, propose::Terminal, session::Session};
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::reversi::Setup;
use std::io::{stdin, stdout};
use tracing::instrument;

const RULES: &str = "\
Red and blue take turns placing stones of their colour on the board.
A stone must enclose a straight line of the opponent's stones between itself and another stone
of the same colour, every enclosed stone then changes colour.
A stone placed anywhere else is rejected, and the turn passes to the opponent.
The game ends when the board is full, when a player has no stones left, or when both players
have a stone rejected in a row.
Enter positions as `row col`, counting from 0 at the top left corner.";

/// A game of reversi between two players sharing the terminal.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The initial configuration in RON notation.
    #[clap(short, long, default_value_t)]
    setup: Setup,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut game = self.setup.game().context("invalid game setup")?;
        let terminal = Terminal::new(Io::new(stdout(), stdin()));
        let mut session = Session::new(terminal, stdout());
        session.announce(RULES)?;
        session.run(&mut game)?;
        Ok(())
    }
}
