//! User-facing option enumerations: event categories and notification
//! lead-time offsets.
//!
//! Both are closed lists validated only at the UI boundary; the core
//! functions never re-check membership. Defaults match the stock
//! configuration, overridable via `<config_dir>/haru/config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{HaruError, HaruResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationOption {
    /// Minutes before the event start.
    pub value: i64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    pub categories: Vec<String>,
    pub notification_options: Vec<NotificationOption>,
}

impl Default for Options {
    fn default() -> Self {
        let option = |value: i64, label: &str| NotificationOption {
            value,
            label: label.to_string(),
        };
        Options {
            categories: ["업무", "개인", "가족", "기타"].map(String::from).to_vec(),
            notification_options: vec![
                option(1, "1분 전"),
                option(10, "10분 전"),
                option(60, "1시간 전"),
                option(120, "2시간 전"),
                option(1440, "1일 전"),
            ],
        }
    }
}

impl Options {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("haru").join("config.toml"))
    }

    /// Read the options file if present, else the defaults. A file that
    /// exists but fails to parse is an error rather than silently ignored.
    pub fn load() -> HaruResult<Options> {
        let Some(path) = Self::config_path() else {
            return Ok(Options::default());
        };
        match std::fs::read_to_string(&path) {
            Ok(content) => Options::from_toml(&content),
            Err(_) => Ok(Options::default()),
        }
    }

    pub fn from_toml(content: &str) -> HaruResult<Options> {
        toml::from_str(content).map_err(|e| HaruError::Config(e.to_string()))
    }

    pub fn is_valid_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    pub fn is_valid_notification(&self, value: i64) -> bool {
        self.notification_options.iter().any(|o| o.value == value)
    }

    pub fn notification_label(&self, value: i64) -> Option<&str> {
        self.notification_options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories_and_offsets() {
        let options = Options::default();
        assert_eq!(options.categories, ["업무", "개인", "가족", "기타"]);
        assert!(options.is_valid_category("업무"));
        assert!(!options.is_valid_category("기념일"));
        assert!(options.is_valid_notification(1440));
        assert!(!options.is_valid_notification(5));
        assert_eq!(options.notification_label(60), Some("1시간 전"));
        assert_eq!(options.notification_label(5), None);
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
            categories = ["업무", "스터디"]

            [[notification_options]]
            value = 5
            label = "5분 전"
        "#;
        let options = Options::from_toml(toml).unwrap();
        assert!(options.is_valid_category("스터디"));
        assert!(options.is_valid_notification(5));
    }

    #[test]
    fn test_from_toml_rejects_malformed_content() {
        assert!(matches!(
            Options::from_toml("categories = 3"),
            Err(HaruError::Config(_))
        ));
    }
}
