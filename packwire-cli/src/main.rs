mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "packwire")]
#[command(about = "Packwire - Byte-order-aware packed record codec", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the packed layout of a record descriptor
    Layout {
        /// Descriptor JSON file (array of {"name", "type"} entries)
        #[arg(short, long)]
        descriptor: String,
    },

    /// Encode a JSON record into packed bytes
    Encode {
        /// Descriptor JSON file
        #[arg(short, long)]
        descriptor: String,

        /// Input JSON record (object mapping field names to values)
        #[arg(short, long)]
        input: String,

        /// Output file for the packed bytes
        #[arg(short, long)]
        output: String,

        /// Encode big-endian instead of little-endian
        #[arg(long)]
        big_endian: bool,
    },

    /// Decode packed bytes back into a JSON record
    Decode {
        /// Descriptor JSON file
        #[arg(short, long)]
        descriptor: String,

        /// Input file with packed bytes
        #[arg(short, long)]
        input: String,

        /// Output JSON file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Byte offset of the record within the input file
        #[arg(long, default_value = "0")]
        offset: usize,

        /// Decode big-endian instead of little-endian
        #[arg(long)]
        big_endian: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Layout { descriptor } => commands::layout::execute(&descriptor),

        Commands::Encode {
            descriptor,
            input,
            output,
            big_endian,
        } => commands::encode::execute(
            &descriptor,
            &input,
            &output,
            commands::order_from_flag(big_endian),
        ),

        Commands::Decode {
            descriptor,
            input,
            output,
            offset,
            big_endian,
        } => commands::decode::execute(
            &descriptor,
            &input,
            output.as_deref(),
            offset,
            commands::order_from_flag(big_endian),
        ),
    }
}
