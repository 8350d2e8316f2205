use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use placeholder_icons::args::Args;
use placeholder_icons::run;

mod cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = match cli.command {
        Some(Command::Generate(options)) => Args::Generate(options.into()),
        Some(Command::Check(options)) => Args::Check(options.into()),
        None => Args::Generate(cli.generate.into()),
    };

    run(args)
}
