pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::LessonConfig;
pub use crate::core::arithmetic::{add, hello};
pub use crate::core::division::divide;
pub use crate::core::lesson::{LessonRunner, OutputFormat};
pub use crate::core::speaker::{speaker_for, Dog};
pub use domain::model::{Lesson, LessonReport, ReportValue};
pub use domain::ports::Speaker;
pub use utils::error::{LessonError, Result};
