use anyhow::Error as Anyhow;
use clap::Parser;

mod applet;
mod cli;
mod io;
mod propose;
mod session;

fn main() -> Result<(), Anyhow> {
    cli::Cli::parse().execute()
}
