use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wsdl_typegen::generate::{GenerateConfig, generate_types, write_output};
use wsdl_typegen::output::{ReportFormat, format_report};

/// CLI-specific report format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliReportFormat {
    Json,
    Yaml,
    Markdown,
}

impl From<CliReportFormat> for ReportFormat {
    fn from(fmt: CliReportFormat) -> Self {
        match fmt {
            CliReportFormat::Json => Self::Json,
            CliReportFormat::Yaml => Self::Yaml,
            CliReportFormat::Markdown => Self::Markdown,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "wsdl-typegen")]
#[command(version)]
#[command(about = "Generate TypeScript declarations from WSDL schema type fragments")]
struct Cli {
    /// Directory of structured (complex) type fragments, emitted as interfaces.
    structured_dir: PathBuf,
    /// Directory of simple type fragments, emitted as type aliases.
    simple_dir: PathBuf,
    /// Output TypeScript file.
    output: PathBuf,
    /// Override file (JSON, or YAML with a .yaml/.yml extension).
    overrides: Option<PathBuf>,
    /// Omit all documentation comments from the output.
    #[arg(long)]
    strip: bool,
    /// Write a generation report to this path.
    #[arg(long)]
    report: Option<PathBuf>,
    /// Format of the generation report.
    #[arg(long, default_value = "json")]
    report_format: CliReportFormat,
    /// Number of parallel read jobs (default: number of CPUs, at most 8).
    #[arg(long)]
    jobs: Option<usize>,
    /// Log per-fragment progress.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("wsdl_typegen=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wsdl_typegen=info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    if cli.jobs == Some(0) {
        return Err("--jobs must be at least 1".to_string());
    }

    let config = GenerateConfig {
        structured_dir: cli.structured_dir,
        simple_dir: cli.simple_dir,
        output: cli.output,
        overrides: cli.overrides,
        strip_documentation: cli.strip,
        jobs: cli.jobs,
    };

    let outcome = generate_types(&config).map_err(|err| err.to_string())?;

    if let Some(path) = cli.report {
        let content = format_report(&outcome.report, cli.report_format.into())?;
        write_output(&path, &content).map_err(|err| err.to_string())?;
    }

    println!(
        "Generated {} declarations in {} ({} warnings)",
        outcome.report.declaration_count,
        config.output.display(),
        outcome.report.warning_count()
    );
    Ok(())
}
