use colored::*;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::source::DEFAULT_DOG_API_URL;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub source: SourceConfig,
    pub sink: SinkConfig,
    pub render: RenderConfig,
    pub labels: LabelSetConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub url: String,
    pub timeout_ms: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DOG_API_URL.to_string(),
            timeout_ms: 30000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    pub path: PathBuf,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("label_cache.jsonl"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub enabled: bool,
    pub width: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSetConfig {
    pub name: String,
    pub prompt: String,
    pub choices: Vec<LabelChoiceConfig>,
}

impl Default for LabelSetConfig {
    fn default() -> Self {
        Self {
            name: "dog_type".to_string(),
            prompt: "Is this small doggo [s] or a big pupper [b]?".to_string(),
            choices: vec![
                LabelChoiceConfig {
                    key: "b".to_string(),
                    value: "big_pupper".to_string(),
                },
                LabelChoiceConfig {
                    key: "s".to_string(),
                    value: "small_doggo".to_string(),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelChoiceConfig {
    pub key: String,
    pub value: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            source: SourceConfig::default(),
            sink: SinkConfig::default(),
            render: RenderConfig::default(),
            labels: LabelSetConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let project_name = env!("CARGO_PKG_NAME");
        let mut candidates = Vec::new();
        // Primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join(project_name).join(format!("{}.yml", project_name)));
        }
        // Fallback location: ./<project>.yml
        candidates.push(PathBuf::from(format!("{}.yml", project_name)));

        // Logging is not set up yet, so rejected files are reported on stderr too
        let (config, warnings) = Self::load_first_valid(&candidates);
        for warning in &warnings {
            log::warn!("{}", warning);
            eprintln!("{} {}", "Warning:".yellow(), warning);
        }
        Ok(config)
    }

    /// Load the first candidate file that exists and validates.
    ///
    /// Returns defaults when none does, along with one message per
    /// existing file that was rejected.
    pub fn load_first_valid(candidates: &[PathBuf]) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();
        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => return (config, warnings),
                Err(e) => warnings.push(format!("ignoring config {}: {:#}", path.display(), e)),
            }
        }

        log::info!("No usable config file found, using defaults");
        (Self::default(), warnings)
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        config.validate()?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.render.width == 0 {
            eyre::bail!("render.width must be > 0");
        }
        if self.source.timeout_ms == 0 {
            eyre::bail!("source.timeout_ms must be > 0");
        }
        if self.labels.choices.is_empty() {
            eyre::bail!("labels.choices must not be empty");
        }
        let mut seen = HashSet::new();
        for choice in &self.labels.choices {
            let key = choice.key.trim();
            if key.is_empty() {
                eyre::bail!("labels.choices keys must not be empty");
            }
            if !seen.insert(key.to_ascii_lowercase()) {
                eyre::bail!("duplicate label choice key: {}", key);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source.url, "https://dog.ceo/api/breeds/image/random");
        assert_eq!(config.sink.path, PathBuf::from("label_cache.jsonl"));
        assert_eq!(config.render.width, 100);
        assert_eq!(config.labels.name, "dog_type");
        assert_eq!(config.labels.choices.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "sink:\n  path: /tmp/labels.jsonl\nrender:\n  width: 60\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.sink.path, PathBuf::from("/tmp/labels.jsonl"));
        assert_eq!(config.render.width, 60);
        assert!(config.render.enabled);
        assert_eq!(config.source.timeout_ms, 30000);
    }

    #[test]
    fn test_custom_label_set() {
        let yaml = r#"
labels:
  name: is_red
  prompt: "Red [y] or not [n]?"
  choices:
    - key: y
      value: red
    - key: n
      value: not_red
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.labels.name, "is_red");
        assert_eq!(config.labels.choices[1].value, "not_red");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_keys() {
        let mut config = Config::default();
        config.labels.choices.push(LabelChoiceConfig {
            key: "B".to_string(),
            value: "another".to_string(),
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_width() {
        let mut config = Config::default();
        config.render.width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_choices() {
        let mut config = Config::default();
        config.labels.choices.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.yml");
        fs::write(&path, "log_level: debug\nsource:\n  timeout_ms: 5000\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.source.timeout_ms, 5000);
    }

    #[test]
    fn test_invalid_fallback_is_reported_and_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let bad = temp_dir.path().join("bad.yml");
        let good = temp_dir.path().join("good.yml");
        let missing = temp_dir.path().join("missing.yml");
        fs::write(&bad, "render:\n  width: 0\n").unwrap();
        fs::write(&good, "render:\n  width: 42\n").unwrap();

        let (config, warnings) = Config::load_first_valid(&[missing, bad.clone(), good]);
        assert_eq!(config.render.width, 42);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains(&bad.display().to_string()));
        assert!(warnings[0].contains("render.width"));
    }

    #[test]
    fn test_only_invalid_fallback_gives_defaults_with_warning() {
        let temp_dir = TempDir::new().unwrap();
        let bad = temp_dir.path().join("dupes.yml");
        fs::write(
            &bad,
            "labels:\n  choices:\n    - key: b\n      value: big\n    - key: B\n      value: bigger\n",
        )
        .unwrap();

        let (config, warnings) = Config::load_first_valid(&[bad]);
        assert_eq!(config.labels.choices, LabelSetConfig::default().choices);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("duplicate label choice key"));
    }

    #[test]
    fn test_no_candidates_gives_defaults_quietly() {
        let (config, warnings) = Config::load_first_valid(&[]);
        assert_eq!(config.render.width, 100);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let path = PathBuf::from("/definitely/not/here.yml");
        assert!(Config::load(Some(&path)).is_err());
    }
}
