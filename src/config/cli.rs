use crate::config::toml_config::LessonConfig;
use crate::core::lesson::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_no_nul, validate_non_empty_string, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "lang-basics")]
#[command(about = "Checked division, speaker dispatch and greeting lessons")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Print one JSON object per lesson")]
    pub json: bool,

    /// TOML file with lesson inputs
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Divide two integers
    Divide {
        #[arg(allow_negative_numbers = true)]
        dividend: i64,
        #[arg(allow_negative_numbers = true)]
        divisor: i64,
    },
    /// Let a speaker speak
    Speak {
        /// Speaker kind; defaults to the config file's [speaker] kind
        #[arg(long)]
        kind: Option<String>,
    },
    /// Add two integers
    Add {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    /// Greet someone
    Hello { name: String },
    /// Run every lesson with the configured inputs
    All,
}

impl CliConfig {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    /// Only `all` and `speak` without `--kind` read lesson inputs.
    pub fn needs_lesson_config(&self) -> bool {
        matches!(self.command, Command::All | Command::Speak { kind: None })
    }

    /// Loads `--config` if given, otherwise the built-in defaults.
    pub fn lesson_config(&self) -> Result<LessonConfig> {
        let config = match &self.config {
            Some(path) => LessonConfig::from_file(path)?,
            None => LessonConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Speak { kind: Some(kind) } => validate_non_empty_string("kind", kind),
            Command::Hello { name } => validate_no_nul("name", name),
            _ => Ok(()),
        }
    }
}
