pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use toml_config::{DEFAULT_DATA_FILE, LOG_FORMATS, LOG_LEVELS};

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "pets")]
#[command(about = "Keep track of the pets in the neighborhood")]
pub struct CliConfig {
    /// JSON file holding the registry (overrides the config file)
    #[arg(long, global = true)]
    pub data_file: Option<String>,

    /// Optional TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log output format: compact or json (overrides the config file)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Register a new pet
    Add {
        name: String,
        species: String,
        owner: String,
    },
    /// Remove a pet by name
    Delete { name: String },
    /// Print the owner of a pet
    Owner { name: String },
    /// Print every species in the registry
    Species,
    /// Print every pet in insertion order
    List,
}

#[cfg(feature = "cli")]
impl Command {
    pub fn mutates(&self) -> bool {
        matches!(self, Command::Add { .. } | Command::Delete { .. })
    }
}

/// Effective settings after layering command-line flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_file: String,
    pub log_level: Option<String>,
    pub log_format: String,
}

impl Settings {
    pub fn resolve<C: ConfigProvider>(
        file: Option<&C>,
        data_file: Option<String>,
        log_format: Option<String>,
    ) -> Self {
        Self {
            data_file: data_file
                .or_else(|| file.map(|c| c.data_file().to_string()))
                .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string()),
            log_level: file.and_then(|c| c.log_level()).map(str::to_string),
            log_format: log_format
                .or_else(|| file.map(|c| c.log_format().to_string()))
                .unwrap_or_else(|| "compact".to_string()),
        }
    }
}

impl ConfigProvider for Settings {
    fn data_file(&self) -> &str {
        &self.data_file
    }

    fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }

    fn log_format(&self) -> &str {
        &self.log_format
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("data_file", &self.data_file)?;
        if let Some(level) = &self.log_level {
            validate_one_of("log_level", level, &LOG_LEVELS)?;
        }
        validate_one_of("log_format", &self.log_format, &LOG_FORMATS)
    }
}
