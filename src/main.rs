use clap::Parser;

mod anchors;
mod cli;
mod commands;
mod domain;
mod services;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = cli::Cli::parse();
    commands::run(cli)
}
