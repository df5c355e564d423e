//! Convert command implementation.
//!
//! The convert command:
//! 1. Reads the `.chi` log
//! 2. Parses sections into a SimulationRun
//! 3. Validates the document against the schema (warnings only)
//! 4. Writes JSON to a file or stdout

use crate::output::{validate_output_path, write_run, write_run_to, SchemaValidator, SchemaWarning};
use crate::parser::{parse_chi_with, SimulationRun};
use crate::utils::config::{ParseOptions, SectionMode};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the convert command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    /// Input `.chi` log
    pub input: PathBuf,

    /// Output JSON path; `None` writes to stdout
    pub output: Option<PathBuf>,

    /// Schema file overriding the embedded one
    pub schema: Option<PathBuf>,

    /// Run schema validation
    pub validate: bool,

    /// Pretty-print the JSON
    pub pretty: bool,

    /// Parser options
    pub parse_options: ParseOptions,

    /// Print text summary to stderr
    pub print_summary: bool,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: None,
            schema: None,
            validate: true,
            pretty: true,
            parse_options: ParseOptions::default(),
            print_summary: false,
        }
    }
}

/// Result of a successful conversion
#[derive(Debug)]
pub struct ConvertOutcome {
    pub run: SimulationRun,
    pub warnings: Vec<SchemaWarning>,
}

/// Execute the convert command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input file cannot be read
/// * Any parse error (nothing is written in that case)
/// * Schema file cannot be loaded
/// * Output cannot be written
pub fn execute_convert(args: ConvertArgs) -> Result<ConvertOutcome> {
    let start_time = Instant::now();

    info!("Converting: {}", args.input.display());

    // Step 1: Read input
    info!("Step 1/4: Reading input...");
    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    debug!("Read {} lines", text.lines().count());

    // Step 2: Parse
    info!("Step 2/4: Parsing simulation sections...");
    let run = parse_chi_with(&text, args.parse_options)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    if run.is_empty() {
        warn!("No simulation sections found in {}", args.input.display());
    }

    // Step 3: Validate
    let warnings = if args.validate {
        info!("Step 3/4: Validating against schema...");
        let validator = load_validator(args.schema.as_ref())?;
        validator
            .validate_run(&run)
            .context("Failed to prepare document for validation")?
    } else {
        info!("Step 3/4: Skipping schema validation (disabled)");
        Vec::new()
    };

    if !warnings.is_empty() {
        warn!(
            "Document does not conform to schema ({} issues); writing it anyway",
            warnings.len()
        );
    }

    // Step 4: Write
    info!("Step 4/4: Writing JSON...");
    match &args.output {
        Some(path) => {
            write_run(&run, path, args.pretty).context("Failed to write JSON output")?;
            info!("✓ JSON written to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            write_run_to(&run, &mut lock, args.pretty).context("Failed to write JSON to stdout")?;
            writeln!(lock).context("Failed to write JSON to stdout")?;
        }
    }

    if args.print_summary {
        eprintln!("\n{}", generate_text_summary(&run));
    }

    let elapsed = start_time.elapsed();
    info!("Conversion completed in {:.2}s", elapsed.as_secs_f64());

    Ok(ConvertOutcome { run, warnings })
}

/// Load the schema override or fall back to the embedded one
///
/// **Private** - internal helper for execute_convert
fn load_validator(schema: Option<&PathBuf>) -> Result<SchemaValidator> {
    match schema {
        Some(path) => SchemaValidator::from_file(path)
            .with_context(|| format!("Failed to load schema {}", path.display())),
        None => SchemaValidator::embedded().context("Failed to load embedded schema"),
    }
}

/// Validate convert arguments
///
/// **Public** - can be called before execute_convert for early validation
pub fn validate_args(args: &ConvertArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if !args.input.is_file() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    if let Some(output) = &args.output {
        validate_output_path(output)?;
    }

    match &args.schema {
        Some(schema) if !args.validate => {
            debug!("Validation disabled; ignoring schema {}", schema.display());
        }
        Some(schema) if !schema.is_file() => {
            anyhow::bail!("Schema file not found: {}", schema.display());
        }
        _ => {}
    }

    Ok(())
}

/// Per-group overview of a run
pub fn generate_text_summary(run: &SimulationRun) -> String {
    let mut out = String::new();
    out.push_str(&"=".repeat(60));
    out.push_str("\nCONVERSION SUMMARY\n");
    out.push_str(&"=".repeat(60));
    out.push('\n');

    if run.is_empty() {
        out.push_str("No simulation sections found\n");
    }

    for group in &run.groups {
        out.push_str(&format!("{:<5} {} plot(s)\n", group.sim_type, group.plots.len()));
        for (i, plot) in group.plots.iter().enumerate() {
            let names: Vec<String> = plot
                .traces
                .iter()
                .map(|t| match t.unit {
                    Some(unit) => format!("{} ({})", t.name, unit.symbol()),
                    None => t.name.clone(),
                })
                .collect();
            out.push_str(&format!(
                "      #{:<3} {} rows  [{}]\n",
                i + 1,
                plot.row_count(),
                names.join(", ")
            ));
        }
    }

    out.push_str(&"=".repeat(60));
    out
}

/// Map the `--multi-plot` flag to a section mode
pub fn section_mode_from_flag(multi_plot: bool) -> SectionMode {
    if multi_plot {
        SectionMode::MultiPlot
    } else {
        SectionMode::SinglePlot
    }
}
