//! chi-to-json CLI
//!
//! Converts ELDO `.chi` simulation logs into schema-validated JSON.

use anyhow::Result;
use chi_to_json::commands::{
    display_schema, display_version, execute_convert, section_mode_from_flag, validate_args,
    validate_document_file, ConvertArgs,
};
use chi_to_json::utils::config::ParseOptions;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

/// chi-to-json - ELDO simulation log converter
#[derive(Parser, Debug)]
#[command(name = "chi-to-json")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a .chi log to JSON
    Convert {
        /// Input .chi file
        input: PathBuf,

        /// Output JSON path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON Schema to validate against instead of the built-in one
        #[arg(long, env = "CHI_TO_JSON_SCHEMA")]
        schema: Option<PathBuf>,

        /// Skip schema validation
        #[arg(long)]
        no_validate: bool,

        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,

        /// Allow several tables per section before the next section header
        #[arg(long)]
        multi_plot: bool,

        /// Print text summary to stderr
        #[arg(long)]
        summary: bool,
    },

    /// Validate a JSON document against the schema
    Validate {
        /// Path to JSON file
        file: PathBuf,

        /// JSON Schema to validate against instead of the built-in one
        #[arg(long)]
        schema: Option<PathBuf>,
    },

    /// Display schema information
    Schema {
        /// Print the full JSON Schema
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays clean
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Convert {
            input,
            output,
            schema,
            no_validate,
            compact,
            multi_plot,
            summary,
        } => {
            let args = ConvertArgs {
                input,
                output,
                schema,
                validate: !no_validate,
                pretty: !compact,
                parse_options: ParseOptions::new()
                    .with_section_mode(section_mode_from_flag(multi_plot)),
                print_summary: summary,
            };

            validate_args(&args)?;
            execute_convert(args)?;
        }

        Commands::Validate { file, schema } => {
            validate_document_file(&file, schema.as_ref())?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
