//! Configuration management for the skill matcher

use crate::error::{Result, SkillMatcherError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub skills: SkillsConfig,
    pub matching: MatchingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsConfig {
    /// Skill vocabulary file, one phrase per line
    pub vocabulary_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Number of leading characters compared by the partial-match heuristic
    pub prefix_length: usize,
    pub root_form: RootForm,
    pub phrase_matching: PhraseMatching,
}

/// Which form of a skill the partial-match prefix is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootForm {
    /// The skill string as extracted
    Raw,
    /// Every word of the skill re-lemmatized first
    Lemma,
}

/// How multi-word vocabulary phrases are detected in a token sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseMatching {
    /// Substring search over the space-joined tokens
    Substring,
    /// Phrase must equal a contiguous window of whole tokens
    TokenWindow,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub pretty_json: bool,
    pub chart_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

pub const DEFAULT_PREFIX_LENGTH: usize = 4;

impl Default for Config {
    fn default() -> Self {
        Self {
            skills: SkillsConfig {
                vocabulary_path: PathBuf::from("skills_list.txt"),
            },
            matching: MatchingConfig {
                prefix_length: DEFAULT_PREFIX_LENGTH,
                root_form: RootForm::Raw,
                phrase_matching: PhraseMatching::Substring,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
                pretty_json: true,
                chart_path: None,
            },
        }
    }
}

impl Config {
    /// Load the configuration from the default location, writing defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| SkillMatcherError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| SkillMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skill-matcher")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.matching.prefix_length == 0 {
            return Err(SkillMatcherError::Configuration(
                "matching.prefix_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn vocabulary_path(&self) -> &Path {
        &self.skills.vocabulary_path
    }
}
