use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use protobuf2pydantic::describe_to_json;
use protobuf2pydantic_compiler::{check_input, compile_file, CodegenError, GeneratorOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pb2pydantic")]
#[command(
    about = "Generate pydantic models from compiled protobuf descriptor sets",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` wins when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate pydantic models from a descriptor set
    /// (`protoc --include_imports --descriptor_set_out=...`)
    Pydantic {
        /// Input descriptor set file
        input: PathBuf,

        /// Only emit messages from these files, in this order
        /// (defaults to the files no other file imports)
        #[arg(short, long = "file")]
        files: Vec<String>,

        /// Output `.py` file (if omitted, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Add `class Config: arbitrary_types_allowed = True` to every model
        #[arg(long)]
        arbitrary_types_allowed: bool,
    },

    /// Dump the files, messages and enums of a descriptor set as JSON
    Describe {
        /// Input descriptor set file
        input: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), CodegenError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Pydantic { input, files, output, arbitrary_types_allowed } => {
            let options = GeneratorOptions {
                arbitrary_types_allowed: *arbitrary_types_allowed,
            };
            let python = compile_file(input, files, &options)?;
            if let Some(out_path) = output {
                fs::write(out_path, format!("{}\n", python))?;
                tracing::info!("Generated models written to {}", out_path.display());
            } else {
                println!("{}", python);
            }
            Ok(())
        }

        Commands::Describe { input } => {
            check_input(input)?;
            let data = fs::read(input)?;
            let json = describe_to_json(&data)?;
            println!("{}", json);
            Ok(())
        }
    }
}
