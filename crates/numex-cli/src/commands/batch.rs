//! Batch command - extract values from many text files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use numex_core::{ExtractionMatch, NumericExtractor, NumericFinding, NumericKind};

use super::load_config;
use super::output::{format_findings, OutputFormat, RenderOptions};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Entity names to report, comma separated (NUMBER, MEASURE, MONEY)
    #[arg(short, long, value_delimiter = ',')]
    kinds: Vec<String>,

    /// Include byte offsets of each finding
    #[arg(long)]
    spans: bool,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    matches: Option<Vec<ExtractionMatch<NumericFinding>>>,
    error: Option<String>,
    processing_time_ms: u64,
}

impl ProcessResult {
    fn count(&self, kind: NumericKind) -> usize {
        self.matches
            .as_ref()
            .map(|matches| matches.iter().filter(|m| m.value.kind == kind).count())
            .unwrap_or(0)
    }
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| is_text_file(p))
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    // Entity names that select nothing numeric leave every file empty
    let extractor = NumericExtractor::from_config(&config.extraction).for_entities(&args.kinds);
    let extractor = Arc::new(extractor);
    let semaphore = Arc::new(Semaphore::new(args.jobs.max(1)));

    let mut tasks = JoinSet::new();
    for (index, path) in files.into_iter().enumerate() {
        let extractor = Arc::clone(&extractor);
        let semaphore = Arc::clone(&semaphore);

        tasks.spawn(async move {
            let _permit = semaphore.acquire_owned().await;
            let file_start = Instant::now();

            let result = match tokio::fs::read_to_string(&path).await {
                Ok(text) => Ok(match &*extractor {
                    Some(extractor) => extractor.extract_matches(&text),
                    None => Vec::new(),
                }),
                Err(e) => Err(e.to_string()),
            };

            let processing_time_ms = file_start.elapsed().as_millis() as u64;
            let result = match result {
                Ok(matches) => ProcessResult {
                    path,
                    matches: Some(matches),
                    error: None,
                    processing_time_ms,
                },
                Err(error) => ProcessResult {
                    path,
                    matches: None,
                    error: Some(error),
                    processing_time_ms,
                },
            };
            (index, result)
        });
    }

    let mut results: Vec<(usize, ProcessResult)> = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        let (index, result) = joined?;

        if let Some(error_msg) = &result.error {
            if args.continue_on_error {
                warn!("Failed to process {}: {}", result.path.display(), error_msg);
            } else {
                error!("Failed to process {}: {}", result.path.display(), error_msg);
                tasks.abort_all();
                pb.abandon();
                anyhow::bail!("Processing failed: {}", error_msg);
            }
        }

        pb.inc(1);
        results.push((index, result));
    }

    pb.finish_with_message("Complete");

    // Report in glob order regardless of completion order
    results.sort_by_key(|(index, _)| *index);
    let results: Vec<ProcessResult> = results.into_iter().map(|(_, r)| r).collect();

    let options = RenderOptions {
        format: args.format,
        spans: args.spans || config.extraction.include_spans,
        pretty: config.output.pretty,
    };

    if let Some(output_dir) = &args.output_dir {
        for result in &results {
            let Some(matches) = &result.matches else { continue };

            let output_name = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("text");
            let output_path =
                output_dir.join(format!("{}.{}", output_name, args.format.extension()));

            fs::write(&output_path, format_findings(matches, options)?)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let successful = results.iter().filter(|r| r.matches.is_some()).count();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn is_text_file(path: &Path) -> bool {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    matches!(ext.to_lowercase().as_str(), "txt" | "text" | "md")
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "numbers",
        "measures",
        "money",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        if result.matches.is_some() {
            wtr.write_record([
                filename,
                "success",
                &result.count(NumericKind::Number).to_string(),
                &result.count(NumericKind::Measure).to_string(),
                &result.count(NumericKind::Money).to_string(),
                &result.processing_time_ms.to_string(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                &result.processing_time_ms.to_string(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_text_file() {
        assert!(is_text_file(Path::new("notes.txt")));
        assert!(is_text_file(Path::new("README.MD")));
        assert!(!is_text_file(Path::new("invoice.pdf")));
        assert!(!is_text_file(Path::new("noext")));
    }

    #[test]
    fn test_summary_counts() {
        let matches = NumericExtractor::new().extract_matches("R$ 5 e 3 metros e 7 e 8");
        let result = ProcessResult {
            path: PathBuf::from("a.txt"),
            matches: Some(matches),
            error: None,
            processing_time_ms: 1,
        };

        assert_eq!(result.count(NumericKind::Money), 1);
        assert_eq!(result.count(NumericKind::Measure), 1);
        assert_eq!(result.count(NumericKind::Number), 2);
    }
}
