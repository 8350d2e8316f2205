use anyhow::Result;

use crate::args::Args;

pub mod args;
pub mod check;
pub mod error;
pub mod icon;
pub mod png;

pub fn run(args: Args) -> Result<()> {
    // A second run in the same process keeps the first logger.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    match args {
        Args::Generate(args) => icon::generate(&args).map(|_| ()),
        Args::Check(args) => check::check(&args).map(|_| ()),
    }
}
