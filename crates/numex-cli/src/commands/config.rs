//! Config command - manage configuration.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use numex_core::NumexConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize a new configuration file
    Init(InitArgs),

    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g., "extraction.word_numerals")
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// New value (JSON, or a bare string)
        value: String,
    },

    /// Show configuration file path
    Path,
}

#[derive(Args)]
struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite existing file
    #[arg(long)]
    force: bool,
}

pub async fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let path = config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    match args.command {
        ConfigCommand::Show => show_config(&path),
        ConfigCommand::Init(init_args) => init_config(init_args, path),
        ConfigCommand::Get { key } => get_config(&path, &key),
        ConfigCommand::Set { key, value } => set_config(&path, &key, &value),
        ConfigCommand::Path => show_path(&path),
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("numex")
        .join("config.json")
}

fn load_or_default(path: &PathBuf) -> anyhow::Result<NumexConfig> {
    if path.exists() {
        Ok(NumexConfig::from_file(path)?)
    } else {
        Ok(NumexConfig::default())
    }
}

fn show_config(path: &PathBuf) -> anyhow::Result<()> {
    if !path.exists() {
        eprintln!(
            "{} No config file found, showing defaults.",
            style("ℹ").blue()
        );
    }

    let config = load_or_default(path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}

fn init_config(args: InitArgs, path: PathBuf) -> anyhow::Result<()> {
    let output_path = args.output.unwrap_or(path);

    if output_path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    NumexConfig::default().save(&output_path)?;

    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        output_path.display()
    );

    Ok(())
}

fn get_config(path: &PathBuf, key: &str) -> anyhow::Result<()> {
    let json = serde_json::to_value(load_or_default(path)?)?;
    let value = lookup_key(&json, key)?;

    println!("{}", serde_json::to_string_pretty(value)?);

    Ok(())
}

fn set_config(path: &PathBuf, key: &str, value: &str) -> anyhow::Result<()> {
    let config = load_or_default(path)?;

    let parsed_value = parse_value(value);
    let config = apply_key(&config, key, parsed_value.clone())?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    config.save(path)?;

    println!(
        "{} Set {} = {}",
        style("✓").green(),
        key,
        serde_json::to_string(&parsed_value)?
    );

    Ok(())
}

fn show_path(path: &PathBuf) -> anyhow::Result<()> {
    println!("Configuration file: {}", path.display());

    if path.exists() {
        println!("Status: {}", style("exists").green());
    } else {
        println!("Status: {}", style("not created").yellow());
        println!();
        println!("Run 'numex config init' to create a configuration file.");
    }

    Ok(())
}

/// Values are JSON when they parse as JSON, otherwise plain strings.
/// A comma separated list of bare names becomes an array ("MONEY,MEASURE").
fn parse_value(value: &str) -> Value {
    if let Ok(parsed) = serde_json::from_str(value) {
        return parsed;
    }

    if value.contains(',') {
        return Value::Array(
            value
                .split(',')
                .map(|part| Value::String(part.trim().to_string()))
                .collect(),
        );
    }

    Value::String(value.to_string())
}

fn lookup_key<'a>(json: &'a Value, key: &str) -> anyhow::Result<&'a Value> {
    let mut current = json;
    for part in key.split('.') {
        current = current
            .get(part)
            .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;
    }
    Ok(current)
}

/// Set `key` to `value` and check that the result is still a valid config.
/// Unknown keys are rejected rather than silently dropped.
fn apply_key(config: &NumexConfig, key: &str, value: Value) -> anyhow::Result<NumexConfig> {
    let mut json = serde_json::to_value(config)?;

    let (parent, leaf) = match key.rsplit_once('.') {
        Some((parent, leaf)) => (Some(parent), leaf),
        None => (None, key),
    };

    let mut current = &mut json;
    if let Some(parent) = parent {
        for part in parent.split('.') {
            current = current
                .get_mut(part)
                .ok_or_else(|| anyhow::anyhow!("Configuration path not found: {}", key))?;
        }
    }

    let obj = current
        .as_object_mut()
        .ok_or_else(|| anyhow::anyhow!("Cannot set value at non-object path"))?;
    if !obj.contains_key(leaf) {
        anyhow::bail!("Configuration key not found: {}", key);
    }
    obj.insert(leaf.to_string(), value);

    serde_json::from_value(json)
        .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use numex_core::NumericKind;
    use serde_json::json;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("true"), json!(true));
        assert_eq!(parse_value("[\"MONEY\"]"), json!(["MONEY"]));
        assert_eq!(parse_value("MONEY, MEASURE"), json!(["MONEY", "MEASURE"]));
        assert_eq!(parse_value("MONEY"), json!("MONEY"));
    }

    #[test]
    fn test_lookup_key() {
        let json = serde_json::to_value(NumexConfig::default()).unwrap();
        assert_eq!(lookup_key(&json, "extraction.word_numerals").unwrap(), &json!(true));
        assert!(lookup_key(&json, "extraction.missing").is_err());
    }

    #[test]
    fn test_apply_key() {
        let config = NumexConfig::default();

        let updated = apply_key(&config, "extraction.kinds", json!(["MONEY"])).unwrap();
        assert_eq!(updated.extraction.kinds, vec![NumericKind::Money]);

        let updated = apply_key(&config, "output.pretty", json!(true)).unwrap();
        assert!(updated.output.pretty);
    }

    #[test]
    fn test_apply_key_rejects_bad_input() {
        let config = NumexConfig::default();

        assert!(apply_key(&config, "extraction.kinds", json!(["DATE"])).is_err());
        assert!(apply_key(&config, "extraction.word_numerals", json!("often")).is_err());
        assert!(apply_key(&config, "extraction.unknown", json!(1)).is_err());
        assert!(apply_key(&config, "nowhere.pretty", json!(true)).is_err());
    }
}
