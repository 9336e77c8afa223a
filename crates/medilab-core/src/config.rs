use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Easing curve used by counter animations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    /// Constant speed
    Linear,
    /// f(t) = 1 - (1-t)³
    Cubic,
    /// f(t) = 1 - (1-t)⁴
    #[default]
    Quartic,
    /// f(t) = 1 - (1-t)⁵
    Quintic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Total animation time budget in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Frame interval used by hosts without a display refresh callback
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    /// Intersection ratio (0.0-1.0) at which a counter starts
    #[serde(default = "default_visibility_threshold")]
    pub visibility_threshold: f64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            frame_interval_ms: default_frame_interval_ms(),
            visibility_threshold: default_visibility_threshold(),
            easing: EasingType::default(),
        }
    }
}

impl CounterConfig {
    /// Animation budget as fractional milliseconds
    pub fn budget_ms(&self) -> f64 {
        self.duration_ms as f64
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Minimum length of the contact form message (chars)
    #[serde(default = "default_message_min_length")]
    pub message_min_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            message_min_length: default_message_min_length(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_duration_ms() -> u64 {
    2000
}

fn default_frame_interval_ms() -> u64 {
    16 // ~60fps
}

fn default_visibility_threshold() -> f64 {
    0.5
}

fn default_message_min_length() -> usize {
    10
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML document
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/medilab/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("medilab")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.counter.duration_ms, 2000);
        assert_eq!(config.counter.frame_interval_ms, 16);
        assert_eq!(config.counter.easing, EasingType::Quartic);
        assert_eq!(config.validation.message_min_length, 10);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [counter]
            duration_ms = 500
            easing = "cubic"
            "#,
        )
        .unwrap();
        assert_eq!(config.counter.duration_ms, 500);
        assert_eq!(config.counter.easing, EasingType::Cubic);
        assert_eq!(config.counter.frame_interval_ms, 16);
        assert!((config.counter.visibility_threshold - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.validation.message_min_length, 10);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[counter]\nduration_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }
}
