#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::pass::PassOptions;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Effective settings for one run, after command-line flags are laid over
/// the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSettings {
    pub input: Option<String>,
    pub output: Option<String>,
    pub pretty: bool,
    pub verbose: bool,
    pub json_logs: bool,
    pub dry_run: bool,
    pub options: PassOptions,
}

impl RunSettings {
    pub fn from_file_config(file: &TomlConfig) -> Result<Self> {
        Ok(Self {
            input: file.model_path().map(str::to_string),
            output: file.output_path().map(str::to_string),
            pretty: file.pretty().unwrap_or(false),
            verbose: file.verbose().unwrap_or(false),
            json_logs: file.json_logs().unwrap_or(false),
            dry_run: false,
            options: PassOptions {
                enabled: file.enabled().unwrap_or(false),
                policy: file.policy()?.unwrap_or_default(),
            },
        })
    }

    /// Boolean flags can only switch a setting on; values replace file values.
    #[cfg(feature = "cli")]
    pub fn apply_cli(mut self, cli: &CliConfig) -> Self {
        if let Some(input) = &cli.input {
            self.input = Some(input.clone());
        }
        if let Some(output) = &cli.output {
            self.output = Some(output.clone());
        }
        if let Some(policy) = cli.policy {
            self.options.policy = policy;
        }
        self.options.enabled |= cli.enable;
        self.pretty |= cli.pretty;
        self.verbose |= cli.verbose;
        self.json_logs |= cli.json_logs;
        self.dry_run |= cli.dry_run;
        self
    }
}

impl Validate for RunSettings {
    fn validate(&self) -> Result<()> {
        let input = validation::validate_required_field("input", &self.input)?;
        validation::validate_path("input", input)?;
        validation::validate_file_extension("input", input, &["json"])?;
        if let Some(output) = &self.output {
            validation::validate_path("output", output)?;
        }
        Ok(())
    }
}
