//! workstack CLI - weekly completed/cancelled work report
//!
//! Reads the project tracker workbook, keeps the completed and cancelled
//! rows that started in the seven days before the anchor date, prints them
//! as a table and writes them to a report workbook.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use workstack_core::{
    parse_anchor, DateWindow, MatchMode, ReportConfig, ReportRenderer, WeeklyReport,
};
use workstack_loader::RecordLoader;
use workstack_render::{banner, ConsoleRenderer, ExcelReportWriter, JsonRenderer};

mod prompt;

#[derive(Parser)]
#[command(name = "workstack")]
#[command(author, version, about = "Weekly completed/cancelled work report", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Anchor date; the report covers the 7 days before it (prompted for if omitted)
    #[arg(long, env = "WORKSTACK_DATE", value_name = "DD/MM/YYYY")]
    date: Option<String>,

    /// Source tracker workbook
    #[arg(short, long, env = "WORKSTACK_INPUT", value_name = "FILE")]
    input: Option<PathBuf>,

    /// Report workbook to write
    #[arg(short, long, env = "WORKSTACK_OUTPUT", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Do not write the report workbook
    #[arg(long)]
    no_export: bool,

    /// Colour the Status column (green completed, red cancelled)
    #[arg(long)]
    color: bool,

    /// Start-date match mode (exact, calendar)
    #[arg(long = "match", value_name = "MODE")]
    match_mode: Option<MatchMode>,

    /// Leading source rows to skip
    #[arg(long, value_name = "N")]
    skip_rows: Option<usize>,

    /// Console output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Exit without waiting for Enter
    #[arg(long)]
    no_pause: bool,

    /// TOML config file
    #[arg(short, long, env = "WORKSTACK_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Config file values overridden by command-line flags
    fn resolve_config(&self) -> Result<ReportConfig> {
        let mut config = match &self.config {
            Some(path) => ReportConfig::load(path)?,
            None => ReportConfig::default(),
        };

        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(mode) = self.match_mode {
            config.match_mode = mode;
        }
        if let Some(rows) = self.skip_rows {
            config.skip_rows = rows;
        }
        config.export &= !self.no_export;
        config.pause &= !self.no_pause;
        config.color |= self.color;

        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.resolve_config()?;
    tracing::debug!(?config, "resolved configuration");

    run(&cli, &config)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli, config: &ReportConfig) -> Result<()> {
    let stdin = io::stdin();
    // Keep stdout parseable in JSON mode
    let mut interactive: Box<dyn Write> = match cli.format {
        OutputFormat::Text => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
    };

    let anchor = match &cli.date {
        Some(date) => parse_anchor(date)?,
        None => prompt::read_anchor(&mut stdin.lock(), &mut interactive)?,
    };
    let window = DateWindow::trailing_week(anchor)?;

    let records = RecordLoader::new()
        .skip_rows(config.skip_rows)
        .load(&config.input)
        .context("Error reading Excel file")?;

    let report = WeeklyReport::build(window, &records, config.match_mode);

    match cli.format {
        OutputFormat::Text => {
            print!("{}", banner(&report, Local::now().date_naive()));
            ConsoleRenderer::new().color(config.color).print(&report)?;
        }
        OutputFormat::Json => {
            println!("{}", JsonRenderer::new().render(&report)?);
        }
    }

    if config.export {
        writeln!(interactive, "Saving report to: {}", config.output.display())?;

        ExcelReportWriter::new()
            .sheet_name(config.sheet_name.as_str())
            .write(&report, &config.output)
            .with_context(|| format!("failed to save report to {}", config.output.display()))?;
    }

    if config.pause {
        io::stdout().flush()?;
        prompt::pause(&mut stdin.lock(), &mut interactive)?;
    }

    Ok(())
}
