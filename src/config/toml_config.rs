use crate::core::speaker::speaker_for;
use crate::utils::error::Result;
use crate::utils::validation::{validate_no_nul, validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Inputs for the `all` run. Every section is optional; missing sections and
/// fields fall back to the demo defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonConfig {
    pub division: DivisionConfig,
    pub arithmetic: ArithmeticConfig,
    pub greeting: GreetingConfig,
    pub speaker: SpeakerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DivisionConfig {
    pub dividend: i64,
    pub divisor: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArithmeticConfig {
    pub a: i64,
    pub b: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeakerConfig {
    pub kind: String,
}

impl Default for DivisionConfig {
    fn default() -> Self {
        Self {
            dividend: 10,
            divisor: 0,
        }
    }
}

impl Default for ArithmeticConfig {
    fn default() -> Self {
        Self { a: 2, b: 3 }
    }
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            name: "World".to_string(),
        }
    }
}

impl Default for SpeakerConfig {
    fn default() -> Self {
        Self {
            kind: "dog".to_string(),
        }
    }
}

impl LessonConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading lesson config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${GREETING_NAME})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex");

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        result.into_owned()
    }
}

impl Validate for LessonConfig {
    fn validate(&self) -> Result<()> {
        validate_no_nul("greeting.name", &self.greeting.name)?;
        validate_non_empty_string("speaker.kind", &self.speaker.kind)?;
        // 在任何課程輸出之前確認 speaker 存在
        speaker_for(&self.speaker.kind)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::LessonError;

    #[test]
    fn test_defaults_match_demo_inputs() {
        let config = LessonConfig::default();
        assert_eq!(config.division.dividend, 10);
        assert_eq!(config.division.divisor, 0);
        assert_eq!(config.arithmetic.a, 2);
        assert_eq!(config.arithmetic.b, 3);
        assert_eq!(config.greeting.name, "World");
        assert_eq!(config.speaker.kind, "dog");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = LessonConfig::from_toml_str(
            r#"
[division]
divisor = 2

[greeting]
name = "Alice"
"#,
        )
        .unwrap();

        assert_eq!(config.division.dividend, 10);
        assert_eq!(config.division.divisor, 2);
        assert_eq!(config.greeting.name, "Alice");
        assert_eq!(config.arithmetic, ArithmeticConfig::default());
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(LessonConfig::from_toml_str("").unwrap(), LessonConfig::default());
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("LANG_BASICS_TEST_NAME", "Bob");
        let config = LessonConfig::from_toml_str(
            r#"
[greeting]
name = "${LANG_BASICS_TEST_NAME}"
"#,
        )
        .unwrap();
        assert_eq!(config.greeting.name, "Bob");
    }

    #[test]
    fn test_unresolved_env_reference_left_verbatim() {
        let config = LessonConfig::from_toml_str(
            r#"
[greeting]
name = "${LANG_BASICS_SURELY_UNSET_VAR}"
"#,
        )
        .unwrap();
        assert_eq!(config.greeting.name, "${LANG_BASICS_SURELY_UNSET_VAR}");
    }

    #[test]
    fn test_validate_rejects_unknown_speaker() {
        let config = LessonConfig::from_toml_str("[speaker]\nkind = \"cat\"").unwrap();
        match config.validate() {
            Err(LessonError::UnknownSpeaker { kind }) => assert_eq!(kind, "cat"),
            other => panic!("expected unknown speaker error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_toml() {
        let err = LessonConfig::from_toml_str("[division]\ndivisor = \"two\"").unwrap_err();
        assert!(matches!(err, LessonError::TomlError(_)));
    }

    #[test]
    fn test_validate() {
        assert!(LessonConfig::default().validate().is_ok());

        let mut config = LessonConfig::default();
        config.speaker.kind = " ".to_string();
        assert!(config.validate().is_err());

        let mut config = LessonConfig::default();
        config.greeting.name = String::new();
        assert!(config.validate().is_ok());
    }
}
