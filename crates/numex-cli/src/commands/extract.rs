//! Extract command - find numeric values in a single text.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use numex_core::{NumericExtractor, NumexConfig};

use super::load_config;
use super::output::{format_findings, OutputFormat, RenderOptions};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Text to scan (default: read --file or stdin)
    text: Option<String>,

    /// Read the text from a file
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Entity names to report, comma separated (NUMBER, MEASURE, MONEY)
    #[arg(short, long, value_delimiter = ',')]
    kinds: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Include byte offsets of each finding
    #[arg(long)]
    spans: bool,

    /// Do not recognize spelled-out numerals
    #[arg(long)]
    no_words: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let text = read_input(&args).await?;
    info!("Scanning {} bytes of text", text.len());

    let extractor = build_extractor(&args, &config);
    let matches = extractor
        .map(|extractor| extractor.extract_matches(&text))
        .unwrap_or_default();

    let options = RenderOptions {
        format: args.format,
        spans: args.spans || config.extraction.include_spans,
        pretty: args.pretty || config.output.pretty,
    };
    let output = format_findings(&matches, options)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} {} values written to {}",
            style("✓").green(),
            matches.len(),
            output_path.display()
        );
    } else {
        println!("{}", output.trim_end());
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Build the extractor from the config, then apply command line overrides.
/// `None` means the requested entity names select nothing numeric.
fn build_extractor(args: &ExtractArgs, config: &NumexConfig) -> Option<NumericExtractor> {
    let extractor = NumericExtractor::from_config(&config.extraction)
        .with_word_numerals(config.extraction.word_numerals && !args.no_words);

    if args.kinds.is_empty() {
        Some(extractor)
    } else {
        extractor.for_entities(&args.kinds)
    }
}

async fn read_input(args: &ExtractArgs) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.file {
        if !path.exists() {
            anyhow::bail!("Input file not found: {}", path.display());
        }
        return Ok(tokio::fs::read_to_string(path).await?);
    }

    let mut text = String::new();
    tokio::io::stdin().read_to_string(&mut text).await?;
    Ok(text)
}
