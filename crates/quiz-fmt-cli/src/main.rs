use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use quiz_fmt_core::{
    detect_output_format, render_csv, render_template, validate_records, FileRecordRepository,
    OutputFormat, QuizRecord, RecordRepository, SystemClock,
};
use tracing_subscriber::EnvFilter;

const HTML_TEMPLATE: &str = include_str!("../templates/quiz_template.html");
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/quiz_template.md");

#[derive(Parser, Debug)]
#[command(
    name = "quiz-fmt",
    author,
    version,
    about = "Quiz YAML conversion CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a quiz YAML file to CSV, HTML, Markdown, or a custom template rendering
    Convert {
        /// Quiz YAML file to read
        input: PathBuf,
        /// Output file to write
        output: PathBuf,
        /// Output format; defaults to detection from the output extension
        #[arg(long, value_enum)]
        format: Option<Format>,
        /// Custom template file (takes precedence over --format)
        #[arg(long, value_name = "FILE")]
        template: Option<PathBuf>,
    },
    /// Validate the structure and content of a quiz YAML file
    Validate {
        /// Quiz YAML file to check
        input: PathBuf,
        /// Emit the validation report as JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Csv,
    Html,
    Markdown,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Convert {
            input,
            output,
            format,
            template,
        } => convert(&input, &output, format, template.as_deref()),
        Commands::Validate { input, json } => validate(&input, json),
    }
}

fn load_records(input: &Path) -> Result<Vec<QuizRecord>> {
    let repo = FileRecordRepository::new(input);
    repo.load_records()
        .with_context(|| format!("failed to load quiz records from {}", input.display()))
}

fn convert(
    input: &Path,
    output: &Path,
    format: Option<Format>,
    template: Option<&Path>,
) -> Result<()> {
    let records = load_records(input)?;

    let resolved = match (template, format) {
        (Some(_), _) => OutputFormat::Template,
        (None, Some(Format::Csv)) => OutputFormat::Csv,
        (None, Some(Format::Html)) => OutputFormat::Html,
        (None, Some(Format::Markdown)) => OutputFormat::Markdown,
        (None, None) => detect_output_format(output, None),
    };

    let rendered = match resolved {
        OutputFormat::Csv => render_csv(&records)?,
        OutputFormat::Html => render_template(&records, HTML_TEMPLATE, Arc::new(SystemClock))?,
        OutputFormat::Markdown => {
            render_template(&records, MARKDOWN_TEMPLATE, Arc::new(SystemClock))?
        }
        OutputFormat::Template => {
            let Some(path) = template else {
                bail!(
                    "a template file is required for {} (pass --template or --format)",
                    output.display()
                );
            };
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read template file at {}", path.display()))?;
            render_template(&records, &source, Arc::new(SystemClock))?
        }
    };

    fs::write(output, rendered)
        .with_context(|| format!("failed to write output file at {}", output.display()))?;
    println!(
        "converted {} record(s): {} -> {}",
        records.len(),
        input.display(),
        output.display()
    );
    Ok(())
}

fn validate(input: &Path, json: bool) -> Result<()> {
    let records = load_records(input)?;
    let report = validate_records(&records);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.is_valid {
        println!("validation passed: {} record(s) loaded", report.records);
    } else {
        eprintln!("validation failed: {} issue(s) found", report.issues.len());
        for issue in &report.issues {
            eprintln!("  - {issue}");
        }
    }

    if !report.is_valid {
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init();
}
