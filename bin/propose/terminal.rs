use super::Propose;
use crate::io::Io;
use lib::reversi::{Game, Position};
use std::io::{self, Read, Write};
use tracing::{instrument, warn};

/// Asks whoever is at the terminal where to place the next stone.
#[derive(Debug)]
pub struct Terminal<W: Write, R: Read> {
    io: Io<W, R>,
}

impl<W: Write, R: Read> Terminal<W, R> {
    pub fn new(io: Io<W, R>) -> Self {
        Terminal { io }
    }
}

impl<W: Write, R: Read> Propose for Terminal<W, R> {
    type Error = io::Error;

    /// Prompts until a well formed [`Position`] is entered.
    ///
    /// Whether the position is playable is left for the rules to decide.
    #[instrument(level = "trace", skip(self, game), fields(turn = %game.turn()), ret, err)]
    fn propose(&mut self, game: &Game) -> Result<Position, Self::Error> {
        loop {
            self.io.prompt(format_args!("{}, where to? [row col]", game.turn()))?;

            let line = self.io.recv()?;
            match line.parse() {
                Ok(pos) => break Ok(pos),
                Err(e) => {
                    warn!(input = %line, "{e}");
                    self.io.send(format_args!("`{}` is not a position, {e}", line.trim()))?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::reversi::Player;
    use std::{collections::VecDeque, str};
    use test_strategy::proptest;

    #[proptest]
    fn terminal_reads_position_from_input(pos: Position) {
        let mut input = VecDeque::new();
        writeln!(&mut input, "{} {}", pos.row, pos.col)?;

        let mut output = Vec::new();
        let mut t = Terminal::new(Io::new(&mut output, &mut input));
        assert_eq!(t.propose(&Game::default())?, pos);
    }

    #[proptest]
    fn terminal_prompts_the_side_to_move(p: Player) {
        let mut input = VecDeque::new();
        writeln!(&mut input, "3,4")?;

        let mut output = Vec::new();
        let game = Game::new(Default::default(), p);
        Terminal::new(Io::new(&mut output, &mut input)).propose(&game)?;

        assert_eq!(str::from_utf8(&output)?, format!("{p}, where to? [row col] "));
    }

    #[test]
    fn terminal_prompts_again_on_malformed_input() {
        let mut input = VecDeque::new();
        writeln!(&mut input, "two three\n1\n 2, 5 ").unwrap();

        let mut output = Vec::new();
        let mut t = Terminal::new(Io::new(&mut output, &mut input));
        assert_eq!(t.propose(&Game::default()).unwrap(), Position::new(2, 5));
        drop(t);

        let output = str::from_utf8(&output).unwrap();
        assert_eq!(output.matches("where to?").count(), 3);
        assert!(output.contains("`two three` is not a position"));
        assert!(output.contains("`1` is not a position"));
    }

    #[test]
    fn terminal_gives_up_once_input_is_exhausted() {
        let mut output = Vec::new();
        let mut t = Terminal::new(Io::new(&mut output, io::empty()));
        let e = t.propose(&Game::default()).unwrap_err();
        assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof);
    }
}
