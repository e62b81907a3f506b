use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ccon::{Console, Encoder};

const USAGE: &str = "Usage: ccon [compress <data>] [lookup <key>]";

#[derive(Parser)]
#[command(
    name = "ccon",
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    #[command(disable_help_flag = true)]
    Compress {
        #[arg(allow_hyphen_values = true)]
        data: Option<String>,
    },
    #[command(disable_help_flag = true)]
    Lookup {
        #[arg(allow_hyphen_values = true)]
        key: Option<String>,
    },
    #[command(disable_help_flag = true)]
    Console,
    #[command(external_subcommand)]
    Other(Vec<String>),
}

fn main() -> Result<()> {
    init_logging();

    // Malformed invocations produce no output and a clean exit.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => return Ok(()),
    };

    match cli.command {
        None => println!("{}", USAGE),
        Some(Command::Compress { data: Some(data) }) => compress(&data),
        Some(Command::Compress { data: None }) => {}
        Some(Command::Lookup { key }) => debug!("Ignoring lookup for key {:?}.", key),
        Some(Command::Console) => {
            let stdin = io::stdin();
            Console::new().run(stdin.lock(), io::stdout())?;
        }
        Some(Command::Other(words)) => debug!("Unrecognized command {:?}.", words),
    }

    Ok(())
}

fn compress(data: &str) {
    println!("From: {}", data);
    let mut encoder = Encoder::new();
    match encoder.compress(data) {
        Ok(compressed) => println!("To: {}", compressed),
        Err(error) => {
            println!("{}", error);
            println!("To: Error");
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(error) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init()
    {
        eprintln!("Log system initialization failed: {}", error);
    }
}
