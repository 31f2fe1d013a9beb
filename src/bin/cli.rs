// src/bin/cli.rs
use clap::Parser;
use provider_dir::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(log::LogSink::Stderr);
    cli::run(cli::Args::parse())
}
