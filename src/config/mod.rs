use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::core::{default_rules, EngineSettings, KeywordRule};
use crate::errors::{MappingError, MappingResult};

const HOME_ENV: &str = "FINUP_MAPPING_HOME";
const APP_DIR: &str = "finup_mapping";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// User-tunable scoring parameters, persisted as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    #[serde(default = "EngineConfig::default_exact_confidence")]
    pub exact_confidence: u8,
    #[serde(default = "EngineConfig::default_similarity_threshold")]
    pub similarity_threshold: f64,
    #[serde(default = "EngineConfig::default_max_similar")]
    pub max_similar: usize,
    #[serde(default = "EngineConfig::default_pattern_confidence_per_keyword")]
    pub pattern_confidence_per_keyword: u8,
    #[serde(default = "EngineConfig::default_pattern_confidence_cap")]
    pub pattern_confidence_cap: u8,
    #[serde(default = "EngineConfig::default_include_builtin_rules")]
    pub include_builtin_rules: bool,
    /// Rules evaluated after the built-in ones.
    #[serde(default)]
    pub extra_rules: Vec<KeywordRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_user: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            exact_confidence: Self::default_exact_confidence(),
            similarity_threshold: Self::default_similarity_threshold(),
            max_similar: Self::default_max_similar(),
            pattern_confidence_per_keyword: Self::default_pattern_confidence_per_keyword(),
            pattern_confidence_cap: Self::default_pattern_confidence_cap(),
            include_builtin_rules: Self::default_include_builtin_rules(),
            extra_rules: Vec::new(),
            default_user: None,
        }
    }
}

impl EngineConfig {
    fn default_exact_confidence() -> u8 {
        95
    }

    fn default_similarity_threshold() -> f64 {
        0.7
    }

    fn default_max_similar() -> usize {
        3
    }

    fn default_pattern_confidence_per_keyword() -> u8 {
        25
    }

    fn default_pattern_confidence_cap() -> u8 {
        85
    }

    fn default_include_builtin_rules() -> bool {
        true
    }

    pub fn validate(&self) -> MappingResult<()> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(MappingError::Config(format!(
                "similarityThreshold must be within 0..=1, got {}",
                self.similarity_threshold
            )));
        }
        for (name, value) in [
            ("exactConfidence", self.exact_confidence),
            ("patternConfidenceCap", self.pattern_confidence_cap),
        ] {
            if value > 100 {
                return Err(MappingError::Config(format!(
                    "{name} must not exceed 100, got {value}"
                )));
            }
        }
        if let Some(rule) = self
            .extra_rules
            .iter()
            .find(|rule| rule.keywords.iter().all(|k| k.trim().is_empty()))
        {
            return Err(MappingError::Config(format!(
                "rule `{}` has no keywords",
                rule.reason
            )));
        }
        Ok(())
    }

    /// Validates the config and converts it into engine settings.
    pub fn settings(&self) -> MappingResult<EngineSettings> {
        self.validate()?;
        let mut rules = if self.include_builtin_rules {
            default_rules()
        } else {
            Vec::new()
        };
        rules.extend(self.extra_rules.iter().cloned().map(|mut rule| {
            rule.keywords = rule.keywords.iter().map(|k| k.to_lowercase()).collect();
            rule
        }));
        Ok(EngineSettings {
            exact_confidence: self.exact_confidence,
            similarity_threshold: self.similarity_threshold,
            max_similar: self.max_similar,
            pattern_confidence_per_keyword: self.pattern_confidence_per_keyword,
            pattern_confidence_cap: self.pattern_confidence_cap,
            rules,
        })
    }
}

/// Returns the application directory, honouring `FINUP_MAPPING_HOME`.
pub fn app_config_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Handles persistence of [`EngineConfig`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_config_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: base.join(CONFIG_FILE),
        }
    }

    /// Loads the config, falling back to defaults when no file exists yet.
    pub fn load(&self) -> MappingResult<EngineConfig> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config: EngineConfig = serde_json::from_str(&data)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(EngineConfig::default())
        }
    }

    pub fn save(&self, config: &EngineConfig) -> MappingResult<()> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

pub(crate) fn write_atomic(path: &Path, data: &str) -> MappingResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AccountType;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_engine_defaults() {
        let settings = EngineConfig::default().settings().unwrap();
        assert_eq!(settings, EngineSettings::default());
    }

    #[test]
    fn load_missing_file_returns_default() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf());
        assert_eq!(manager.load().unwrap(), EngineConfig::default());
    }

    #[test]
    fn save_then_load_preserves_rules() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().join("nested"));
        let mut config = EngineConfig::default();
        config.max_similar = 5;
        config.extra_rules.push(KeywordRule::new(
            &["imposto", "tributo"],
            AccountType::Liability,
            "Regra de negócio: conta de imposto identificada",
        ));
        manager.save(&config).unwrap();
        assert!(!tmp_path(manager.path()).exists());

        let loaded = manager.load().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.settings().unwrap().rules.len(), 3);
    }

    #[test]
    fn partial_file_uses_field_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"similarityThreshold":0.8,"includeBuiltinRules":false}"#)
                .unwrap();
        assert_eq!(config.max_similar, 3);
        let settings = config.settings().unwrap();
        assert!(settings.rules.is_empty());
        assert_eq!(settings.similarity_threshold, 0.8);
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let config = EngineConfig {
            similarity_threshold: 1.5,
            ..EngineConfig::default()
        };
        assert!(matches!(config.settings(), Err(MappingError::Config(_))));
    }
}
