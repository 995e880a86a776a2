// src/bin/cli.rs
use clap::Parser;
use ztc_catalog::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run(cli::Args::parse())
}
