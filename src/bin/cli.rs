// src/bin/cli.rs
use clap::Parser;

use csp_lookup::cli::{self, Cli};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    csp_lookup::log::init("warn");

    cli::run(Cli::parse())?;
    Ok(())
}
