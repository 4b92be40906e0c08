//! Powerlab command-line interface.

mod mosfet;
mod prompt;
mod wire;

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use crate::mosfet::MosfetArgs;
use crate::prompt::Prompter;
use crate::wire::WireArgs;

#[derive(Parser)]
#[command(name = "powerlab")]
#[command(about = "MOSFET loss/thermal analyzer and wire gauge selector", long_about = None)]
#[command(version)]
struct Cli {
    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Conduction/switching loss, junction temperature and heatsink sizing
    Mosfet(MosfetArgs),
    /// Smallest copper or aluminum gauge meeting ampacity and voltage-drop limits
    Wire(WireArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    match &cli.command {
        Commands::Mosfet(args) => {
            let stdout = io::stdout();
            mosfet::run(args, &mut stdout.lock())
        }
        Commands::Wire(args) => {
            println!("Wire Gauge Selector (Copper or Aluminum, Single-Phase, Basic NEC-based)");
            println!("Enter values below. Press Enter to use defaults where shown.\n");
            let mut io = Prompter::new(io::stdin().lock(), io::stdout());
            wire::run(args, &mut io)
        }
    }
}
