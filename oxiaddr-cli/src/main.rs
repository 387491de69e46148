//! OxiAddr CLI - IPv4/IPv6 address calculator
//!
//! Inspects, converts and resolves IPv4 and IPv6 addresses.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{ConvertArgs, cmd_batch, cmd_convert, cmd_info, cmd_registry};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use utils::InputKind;

#[derive(Parser)]
#[command(name = "oxiaddr")]
#[command(author, version, about = "Pure Rust IPv4/IPv6 address calculator")]
#[command(long_about = "
OxiAddr parses, classifies and reformats IPv4 and IPv6 addresses.

Examples:
  oxiaddr info 2001:db8::1
  oxiaddr info ::ffff:192.0.2.1 --json
  oxiaddr convert 2001:db8::1 --out full
  oxiaddr convert 3ffe:ffff::/32 --out revnibbles-int
  oxiaddr convert 2001:db8:1:2::1/64 --out uncompressed --printprefix
  oxiaddr convert 0210a4fffe012345 --in token
  oxiaddr convert 192.168.1.0/24 --out revipv4
  oxiaddr registry 193.0.0.1
  oxiaddr batch addresses.txt --out compressed
")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show scope, embedded IPv4 and registry of an address
    #[command(alias = "i")]
    Info {
        /// Address to inspect
        address: String,

        /// How to interpret the input
        #[arg(short = 'i', long = "in", value_enum, default_value = "auto")]
        input_kind: InputKind,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,

        /// Output as KEY=value lines
        #[arg(short, long)]
        machine_readable: bool,
    },

    /// Convert an address to another notation
    #[command(alias = "c")]
    Convert {
        /// Address to convert
        address: String,

        #[command(flatten)]
        args: ConvertArgs,
    },

    /// Look up the registry an IPv4 address is assigned to
    #[command(alias = "r")]
    Registry {
        /// IPv4 address, or IPv6 address with embedded IPv4
        address: String,

        /// How to interpret the input
        #[arg(short = 'i', long = "in", value_enum, default_value = "auto")]
        input_kind: InputKind,
    },

    /// Convert one address per line of a file (or - for stdin)
    #[command(alias = "b")]
    Batch {
        /// Input file, one address per line
        source: PathBuf,

        #[command(flatten)]
        args: ConvertArgs,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Info {
            address,
            input_kind,
            json,
            machine_readable,
        } => cmd_info(&address, input_kind, json, machine_readable),
        Commands::Convert { address, args } => cmd_convert(&address, &args),
        Commands::Registry {
            address,
            input_kind,
        } => cmd_registry(&address, input_kind, cli.verbose > 0),
        Commands::Batch {
            source,
            args,
            progress,
        } => cmd_batch(&source, &args, progress),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
