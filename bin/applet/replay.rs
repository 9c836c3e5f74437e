use crate::propose::{Script, ScriptExhausted};
use crate::session::{Session, SessionInterrupted};
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::reversi::{Position, Setup};
use std::io::stdout;
use tracing::{instrument, warn};

/// Replays a sequence of moves, alternating between players.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Replay {
    /// The initial configuration in RON notation.
    #[clap(short, long, default_value_t)]
    setup: Setup,

    /// The positions proposed, each as `row,col`.
    moves: Vec<Position>,
}

impl Replay {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut game = self.setup.game().context("invalid game setup")?;
        let script = Script::new(self.moves);

        match Session::new(script, stdout()).run(&mut game) {
            Ok(_) => Ok(()),
            Err(SessionInterrupted::Proposer(ScriptExhausted)) => {
                warn!(moves = game.history().len(), "the game is not over yet");
                println!("{}\nscore {}, {} to move", game.board(), game.score(), game.turn());
                Ok(())
            }

            Err(e) => Err(e.into()),
        }
    }
}
