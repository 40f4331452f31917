use crate::config::toml_config::LessonConfig;
use crate::core::arithmetic::{add, hello};
use crate::core::division::divide;
use crate::core::speaker::speaker_for;
use crate::domain::model::{Lesson, LessonReport, ReportValue, RESULT_LABEL};
use crate::domain::ports::Speaker;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Runs lessons and writes one line per report to `out`.
pub struct LessonRunner<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> LessonRunner<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// A zero divisor is reported, not returned as `Err`. Only output
    /// failures propagate.
    pub fn run_division(&mut self, dividend: i64, divisor: i64) -> Result<LessonReport> {
        tracing::debug!("division: {} / {}", dividend, divisor);
        self.report_division(&divide(dividend, divisor))
    }

    /// Emits the report for an already computed division; the caller keeps
    /// the `Result` itself.
    pub fn report_division(&mut self, outcome: &Result<i64>) -> Result<LessonReport> {
        let report = match outcome {
            Ok(quotient) => {
                LessonReport::ok(Lesson::Division, RESULT_LABEL, ReportValue::Number(*quotient))
            }
            Err(e) => {
                tracing::warn!("division failed: {}", e);
                LessonReport::error(Lesson::Division, e.to_string())
            }
        };

        self.emit(&report)?;
        Ok(report)
    }

    pub fn run_speaker(&mut self, label: &str, speaker: &dyn Speaker) -> Result<LessonReport> {
        let report = LessonReport::ok(
            Lesson::Speaker,
            label,
            ReportValue::Text(speaker.utterance().to_string()),
        );

        match self.format {
            OutputFormat::Text => speaker.speak_to(&mut self.out)?,
            OutputFormat::Json => self.emit(&report)?,
        }
        Ok(report)
    }

    pub fn run_speaker_kind(&mut self, kind: &str) -> Result<LessonReport> {
        let speaker = speaker_for(kind)?;
        tracing::debug!("speaker: {}", kind);
        self.run_speaker(&format!("{}:", kind.trim().to_ascii_lowercase()), speaker.as_ref())
    }

    pub fn run_arithmetic(&mut self, a: i64, b: i64) -> Result<LessonReport> {
        tracing::debug!("arithmetic: {} + {}", a, b);
        let report = LessonReport::ok(Lesson::Arithmetic, "sum:", ReportValue::Number(add(a, b)));
        self.emit(&report)?;
        Ok(report)
    }

    pub fn run_greeting(&mut self, name: &str) -> Result<LessonReport> {
        tracing::debug!("greeting: {:?}", name);
        let report = LessonReport::ok(
            Lesson::Greeting,
            "greeting:",
            ReportValue::Text(hello(name)),
        );
        self.emit(&report)?;
        Ok(report)
    }

    /// Runs every lesson in order with the configured inputs.
    pub fn run_all(&mut self, config: &LessonConfig) -> Result<Vec<LessonReport>> {
        tracing::info!("Running all lessons");

        let reports = vec![
            self.run_division(config.division.dividend, config.division.divisor)?,
            self.run_speaker_kind(&config.speaker.kind)?,
            self.run_arithmetic(config.arithmetic.a, config.arithmetic.b)?,
            self.run_greeting(&config.greeting.name)?,
        ];

        let failed = reports.iter().filter(|r| r.failed).count();
        tracing::info!("Ran {} lessons, {} reported an error", reports.len(), failed);
        Ok(reports)
    }

    fn emit(&mut self, report: &LessonReport) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", report)?,
            OutputFormat::Json => {
                let line = serde_json::to_string(report)?;
                writeln!(self.out, "{}", line)?;
            }
        }
        Ok(())
    }
}
