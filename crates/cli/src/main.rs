use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod demo;
mod read;

#[derive(Parser)]
#[command(name = "cli")]
#[command(version = planar::VERSION)]
#[command(about = "Planar point demonstrations and utilities")]
struct Cmd {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Exercise every point operation once and print the results
    Demo,
    /// Read whitespace-separated coordinate pairs and print them as points
    Read {
        /// Input file; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// Fixed number of decimals per coordinate
        #[arg(long)]
        precision: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    // Logs go to stderr; stdout carries only results.
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cmd.action {
        Action::Demo => demo::run(&mut out),
        Action::Read { input, precision } => read::run(input.as_deref(), precision, &mut out),
    }
}
