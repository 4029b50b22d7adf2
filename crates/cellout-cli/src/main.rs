use std::io;

use anyhow::Result;
use cellout_cli::cli::Cli;
use cellout_cli::input::RealStdin;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = cli.log_level() {
        logger.filter_level(level);
    }
    logger.init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cellout_cli::run(&cli, &RealStdin, &mut out)
}
