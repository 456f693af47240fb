mod args;
mod convert;
mod logger;
mod output;
mod progress;
mod utils;

use args::Args;
use clap::{ColorChoice, Parser};
use kdam::{term, term::Colorizer};
use logger::Logger;
use std::{
    io::{IsTerminal, stderr},
    process,
};

async fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let color = match args.color {
        ColorChoice::Always => true,
        ColorChoice::Auto => stderr().is_terminal(),
        ColorChoice::Never => false,
    };
    term::init(color);
    colored::control::set_override(color);

    Logger::init(args.log_level())?;
    args.execute().await
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".colorize("bold red"), e);
        process::exit(1);
    }
}
