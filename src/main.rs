mod cli;
mod config;
mod convert;
mod convert_cmd;
mod info_cmd;
mod logging;
mod zone_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};
use config::AlmanacConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AlmanacConfig::load(cli.config.as_deref())?;
    let report = match cli.command {
        Command::Convert(args) => convert_cmd::run(args, &config)?,
        Command::Info(args) => info_cmd::run(args, &config)?,
        Command::Zone(args) => zone_cmd::run(args, &config)?,
        Command::Zones(args) => zone_cmd::list(args, &config)?,
    };
    println!("{report}");
    Ok(())
}
