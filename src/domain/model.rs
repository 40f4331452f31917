use serde::{Deserialize, Serialize};
use std::fmt;

pub const RESULT_LABEL: &str = "结果:";
pub const ERROR_LABEL: &str = "错误:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lesson {
    Division,
    Speaker,
    Arithmetic,
    Greeting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportValue {
    Number(i64),
    Text(String),
}

/// One line of lesson output: a label and the value computed for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonReport {
    pub lesson: Lesson,
    pub label: String,
    pub value: ReportValue,
    #[serde(default)]
    pub failed: bool,
}

impl LessonReport {
    pub fn ok(lesson: Lesson, label: &str, value: ReportValue) -> Self {
        Self {
            lesson,
            label: label.to_string(),
            value,
            failed: false,
        }
    }

    pub fn error(lesson: Lesson, message: String) -> Self {
        Self {
            lesson,
            label: ERROR_LABEL.to_string(),
            value: ReportValue::Text(message),
            failed: true,
        }
    }

    /// The numeric result, if the lesson produced one. Always `None` for a
    /// failed report.
    pub fn number(&self) -> Option<i64> {
        match (&self.value, self.failed) {
            (ReportValue::Number(n), false) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportValue::Number(n) => write!(f, "{}", n),
            ReportValue::Text(s) => f.write_str(s),
        }
    }
}

impl fmt::Display for LessonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.value)
    }
}
