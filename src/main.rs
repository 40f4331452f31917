use anyhow::Context;
use clap::Parser;
use lang_basics::utils::{
    error::{ErrorCategory, LessonError},
    logger,
    validation::Validate,
};
use lang_basics::{divide, CliConfig, Command, LessonConfig, LessonReport, LessonRunner};
use std::io::Write;

fn run(config: &CliConfig) -> Result<Vec<LessonReport>, LessonError> {
    let lessons = if config.needs_lesson_config() {
        config.lesson_config()?
    } else {
        LessonConfig::default()
    };
    let stdout = std::io::stdout();
    let mut runner = LessonRunner::new(stdout.lock(), config.output_format());

    let reports = match &config.command {
        Command::Divide { dividend, divisor } => {
            let outcome = divide(*dividend, *divisor);
            let report = runner.report_division(&outcome)?;
            runner.into_inner().flush()?;
            // 除以零以錯誤回傳，由 main 決定退出碼
            outcome?;
            return Ok(vec![report]);
        }
        Command::Speak { kind } => {
            let kind = kind.as_deref().unwrap_or(lessons.speaker.kind.as_str());
            vec![runner.run_speaker_kind(kind)?]
        }
        Command::Add { a, b } => vec![runner.run_arithmetic(*a, *b)?],
        Command::Hello { name } => vec![runner.run_greeting(name)?],
        Command::All => runner.run_all(&lessons)?,
    };

    runner.into_inner().flush()?;
    Ok(reports)
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    match run(&config) {
        Ok(reports) => {
            tracing::debug!("Emitted {} report(s)", reports.len());
        }
        Err(e) => {
            tracing::error!(
                "Lesson run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            // 領域錯誤已寫在 stdout 的報告中
            if e.category() != ErrorCategory::Domain {
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
            }
            std::process::exit(e.exit_code());
        }
    }

    std::io::stderr().flush().context("flushing stderr")?;
    Ok(())
}
