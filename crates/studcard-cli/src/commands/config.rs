//! Config command - manage configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use studcard_core::StudcardConfig;

use super::default_config_path;

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
        /// Configuration key (e.g., "layout.institution_local")
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
        ConfigCommand::Show => {
            if !path.exists() {
                eprintln!("{} {} does not exist, using defaults", style("ℹ").blue(), path.display());
            }
            println!("{}", serde_json::to_string_pretty(&read_config(&path)?)?);
            Ok(())
        }
        ConfigCommand::Init(init) => init_config(init.output.unwrap_or(path), init.force),
        ConfigCommand::Get { key } => {
            let tree = serde_json::to_value(read_config(&path)?)?;
            let value = tree
                .pointer(&json_pointer(&key))
                .with_context(|| format!("Unknown configuration key: {}", key))?;
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(())
        }
        ConfigCommand::Set { key, value } => set_config(&path, &key, &value),
        ConfigCommand::Path => {
            let status = if path.exists() {
                style("exists").green()
            } else {
                style("missing, run `studcard config init`").yellow()
            };
            println!("{} ({})", path.display(), status);
            Ok(())
        }
    }
}

/// Saved configuration at `path`, or the defaults when there is no file yet.
fn read_config(path: &Path) -> anyhow::Result<StudcardConfig> {
    if !path.exists() {
        return Ok(StudcardConfig::default());
    }
    Ok(StudcardConfig::from_file(path)?)
}

/// `layout.institution_local` becomes `/layout/institution_local`.
fn json_pointer(key: &str) -> String {
    key.split('.').fold(String::new(), |mut pointer, segment| {
        pointer.push('/');
        pointer.push_str(&segment.replace('~', "~0").replace('/', "~1"));
        pointer
    })
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display())),
        _ => Ok(()),
    }
}

fn init_config(path: PathBuf, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (pass --force to replace it)", path.display());
    }
    ensure_parent(&path)?;
    StudcardConfig::default().save(&path)?;

    println!("{} Wrote default configuration to {}", style("✓").green(), path.display());
    Ok(())
}

fn set_config(path: &Path, key: &str, raw: &str) -> anyhow::Result<()> {
    // Values that are not valid JSON are taken as plain strings.
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));

    let mut tree = serde_json::to_value(read_config(path)?)?;
    let (parent, field) = key.rsplit_once('.').unwrap_or(("", key));
    let parent_pointer = if parent.is_empty() {
        String::new()
    } else {
        json_pointer(parent)
    };
    tree.pointer_mut(&parent_pointer)
        .and_then(Value::as_object_mut)
        .with_context(|| format!("Unknown configuration key: {}", key))?
        .insert(field.to_string(), value.clone());

    let config: StudcardConfig = serde_json::from_value(tree)
        .with_context(|| format!("Invalid value for {}", key))?;
    config.layout.validate()?;

    ensure_parent(path)?;
    config.save(path)?;

    println!("{} {} = {}", style("✓").green(), key, value);
    Ok(())
}
