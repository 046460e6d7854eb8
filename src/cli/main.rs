//! CLI binary entry point for schema-validator

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use schema_validator::cli::commands::serve::{ServeArgs, handle_serve};
#[cfg(feature = "cli")]
use schema_validator::cli::commands::validate::{ValidateArgs, handle_validate};
#[cfg(feature = "cli")]
use schema_validator::server::sample_config;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "schema-validator")]
#[command(about = "Validate JSON documents against JSON Schemas")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Address to bind to
        #[arg(short, long)]
        address: Option<String>,
        /// Port to bind to (default: 8888)
        #[arg(short, long)]
        port: Option<u16>,
        /// Configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Serve the UI from a directory instead of the embedded bundle
        #[arg(long)]
        assets_dir: Option<PathBuf>,
    },
    /// Validate a document against a schema and print the report
    Validate {
        /// Schema file path or '-' for stdin
        #[arg(short, long)]
        schema: String,
        /// Document file path or '-' for stdin
        #[arg(short, long, default_value = "-")]
        document: String,
    },
    /// Print a sample configuration file
    Config,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            address,
            port,
            config,
            assets_dir,
        } => handle_serve(&ServeArgs {
            address,
            port,
            config,
            assets_dir,
        }),
        Commands::Validate { schema, document } => {
            handle_validate(&ValidateArgs { schema, document })
        }
        Commands::Config => {
            print!("{}", sample_config());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature is not enabled. Build with --features cli");
    std::process::exit(1);
}
