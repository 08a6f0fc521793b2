//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Translate global loader options into a `ConfigurationLoader`.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).

use clap::{Parser, Subcommand, ValueEnum};
use envschema_config::ConfigurationLoader;
use envschema_config::constants::DEFAULT_PROFILE_VAR;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envschema")]
#[command(about = "Validate environment configuration against a JSON Schema", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envschema --schema config.schema.json check\n  envschema -s config.schema.json --profile production check --output json\n  envschema -s config.schema.json export > .env.resolved\n  envschema -s config.schema.json tokens\n"
)]
pub struct Cli {
    /// Path to the JSON Schema describing the configuration
    #[arg(short, long, global = true, env = "ENVSCHEMA_SCHEMA", value_name = "FILE")]
    pub schema: Option<PathBuf>,

    /// Directory containing the .env override files (defaults to the working directory)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Profile whose .env.<profile> file is consulted (overrides the selector variable)
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Variable that selects the active profile
    #[arg(long, global = true, default_value = DEFAULT_PROFILE_VAR)]
    pub profile_var: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load and validate the configuration, then print it
    Check {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// List the injection tokens derived from the schema
    Tokens {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Print the validated configuration as KEY=value lines
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Loader over the process environment, configured from global flags.
    pub fn loader(&self) -> ConfigurationLoader {
        let mut loader = ConfigurationLoader::new()
            .with_profile_var(self.profile_var.clone())
            .with_write_back(false);
        if let Some(dir) = &self.dir {
            loader = loader.with_dir(dir.clone());
        }
        if let Some(profile) = self.profile.as_deref().filter(|p| !p.trim().is_empty()) {
            loader = loader.with_profile(profile);
        }
        loader
    }
}
