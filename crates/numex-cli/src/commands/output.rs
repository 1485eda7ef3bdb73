//! Rendering findings as JSON, CSV or text.

use console::style;
use serde::Serialize;

use numex_core::{ExtractionMatch, NumericFinding};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

/// Rendering options.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub spans: bool,
    pub pretty: bool,
}

/// A finding with its byte offsets, flattened for JSON.
#[derive(Serialize)]
struct LocatedFinding<'a> {
    #[serde(flatten)]
    finding: &'a NumericFinding,
    start: usize,
    end: usize,
}

pub fn format_findings(
    matches: &[ExtractionMatch<NumericFinding>],
    options: RenderOptions,
) -> anyhow::Result<String> {
    match options.format {
        OutputFormat::Json => format_json(matches, options),
        OutputFormat::Csv => format_csv(matches, options.spans),
        OutputFormat::Text => Ok(format_text(matches, options.spans)),
    }
}

fn format_json(
    matches: &[ExtractionMatch<NumericFinding>],
    options: RenderOptions,
) -> anyhow::Result<String> {
    let json = if options.spans {
        let located: Vec<LocatedFinding<'_>> = matches
            .iter()
            .map(|m| LocatedFinding {
                finding: &m.value,
                start: m.position.start,
                end: m.position.end,
            })
            .collect();
        serde_json::to_value(located)?
    } else {
        let findings: Vec<&NumericFinding> = matches.iter().map(|m| &m.value).collect();
        serde_json::to_value(findings)?
    };

    if options.pretty {
        Ok(serde_json::to_string_pretty(&json)?)
    } else {
        Ok(serde_json::to_string(&json)?)
    }
}

fn format_csv(matches: &[ExtractionMatch<NumericFinding>], spans: bool) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header = vec!["value", "type", "unit", "symbol", "source"];
    if spans {
        header.extend(["start", "end"]);
    }
    wtr.write_record(&header)?;

    for m in matches {
        let finding = &m.value;
        let mut record = vec![
            finding.value.to_string(),
            finding.kind.to_string(),
            finding.unit.clone().unwrap_or_default(),
            finding.symbol.clone().unwrap_or_default(),
            finding.source.clone(),
        ];
        if spans {
            record.push(m.position.start.to_string());
            record.push(m.position.end.to_string());
        }
        wtr.write_record(&record)?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(matches: &[ExtractionMatch<NumericFinding>], spans: bool) -> String {
    if matches.is_empty() {
        return "No numeric values found.\n".to_string();
    }

    let mut output = String::new();

    for m in matches {
        let finding = &m.value;
        let unit = match (&finding.symbol, &finding.unit) {
            (Some(symbol), Some(code)) => format!(" {} ({})", code, symbol),
            (None, Some(unit)) => format!(" {}", unit),
            _ => String::new(),
        };

        output.push_str(&format!(
            "{:<8} {}{}  \"{}\"",
            style(finding.kind.as_str()).cyan(),
            finding.value,
            unit,
            finding.source
        ));
        if spans {
            output.push_str(&format!(" [{}..{}]", m.position.start, m.position.end));
        }
        output.push('\n');
    }

    output
}
