pub mod cases;
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_optional_path, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "reverse-array")]
#[command(about = "Reverse a sequence of integers: count on line 1, elements on line 2")]
pub struct CliConfig {
    /// Read input from this file instead of standard input
    #[arg(long)]
    pub input: Option<String>,

    /// Write output to this file instead of standard output
    #[arg(long)]
    pub output: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Flags win over the TOML file, the TOML file over defaults.
    pub fn resolve(&self) -> Result<RunConfig> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        Ok(RunConfig::merge(
            self.input.clone(),
            self.output.clone(),
            self.verbose,
            &file,
        ))
    }
}

/// Effective settings for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub input: Option<String>,
    pub output: Option<String>,
    pub verbose: bool,
}

impl RunConfig {
    pub fn merge(
        input: Option<String>,
        output: Option<String>,
        verbose: bool,
        file: &TomlConfig,
    ) -> Self {
        Self {
            input: input.or_else(|| file.input().map(str::to_string)),
            output: output.or_else(|| file.output().map(str::to_string)),
            verbose: verbose || file.verbose(),
        }
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_optional_path("input", self.input_path())?;
        validate_optional_path("output", self.output_path())?;
        validate_distinct_paths(self.input_path(), self.output_path())
    }
}
