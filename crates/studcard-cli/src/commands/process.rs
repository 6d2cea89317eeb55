//! Process command - extract the student record from a card document.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use console::style;
use tracing::{debug, info};

use studcard_core::pdf::{DocumentDecoder, PdfDecoder};
use studcard_core::report::write_report;
use studcard_core::{StudentCardExtractor, StudentRecord};

use super::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input card PDF (default: `document_path` from the config)
    input: Option<PathBuf>,

    /// Output format for the student record
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Do not write the inspection report next to the input
    #[arg(long)]
    no_report: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    let input = args
        .input
        .clone()
        .or_else(|| config.document_path.clone())
        .context("No input file given and no document_path configured")?;

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    info!("Processing file: {}", input.display());

    let data = tokio::fs::read(&input)
        .await
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let document = PdfDecoder::new().decode(&data)?;
    debug!("PDF has {} pages", document.page_count);

    let extractor = StudentCardExtractor::new().with_layout(config.layout.clone());
    let record = extractor.extract(&document.metadata, &document.text)?;

    println!("{}", format_record(&record, args.format)?);

    if config.report.enabled && !args.no_report {
        let report = write_report(&input, &document.metadata, &document.text)?;
        eprintln!(
            "{} Data successfully written to {}",
            style("✓").green(),
            report.display()
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn format_record(record: &StudentRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_csv(record: &StudentRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "full_name",
        "institution_name_local",
        "institution_name_secondary",
        "course_start",
        "graduation_year",
        "unmodified",
    ])?;

    let course_start = record.course_start.to_string();
    let graduation_year = record.graduation_year.to_string();
    let unmodified = record.unmodified.to_string();
    wtr.write_record([
        record.full_name.as_str(),
        record.institution_name_local.as_str(),
        record.institution_name_secondary.as_str(),
        course_start.as_str(),
        graduation_year.as_str(),
        unmodified.as_str(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &StudentRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Student: {}\n", record.full_name));
    output.push_str("Institution:\n");
    output.push_str(&format!("  {}\n", record.institution_name_local));
    output.push_str(&format!("  {}\n", record.institution_name_secondary));
    output.push_str(&format!("Course start: {}\n", record.course_start));
    output.push_str(&format!("Graduation year: {}\n", record.graduation_year));

    let status = if record.unmodified {
        style("timestamps match").green()
    } else {
        style("modified after creation").yellow()
    };
    output.push_str(&format!("Document: {}\n", status));

    output
}
