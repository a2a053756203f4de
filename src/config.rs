use crate::error::{NexusError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name searched for when no explicit config path is given.
pub const CONFIG_FILE_NAME: &str = ".nexus.toml";

/// Shortest accepted `roadmap.id_length`; shorter ids run out after a few dozen items.
pub const MIN_ID_LENGTH: usize = 4;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NexusConfig {
    #[serde(default)]
    pub roadmap: RoadmapSettings,

    #[serde(default)]
    pub suggest: SuggestSettings,

    #[serde(default)]
    pub tui: TuiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapSettings {
    #[serde(default = "default_id_length")]
    pub id_length: usize,

    /// Optional JSON/YAML file replacing the built-in seed items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
}

fn default_id_length() -> usize {
    9
}

impl Default for RoadmapSettings {
    fn default() -> Self {
        Self {
            id_length: default_id_length(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestSettings {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

impl Default for SuggestSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            api_key_env: default_api_key_env(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DefaultView {
    #[default]
    List,
    Kanban,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TuiSettings {
    #[serde(default)]
    pub default_view: DefaultView,
}

impl NexusConfig {
    /// Load configuration, searching upward from `start_path` for `.nexus.toml`.
    ///
    /// A missing file is not an error; defaults are returned with `start_path` as root.
    pub fn discover(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::find_config_file(start_path) {
            Some(config_path) => {
                let config = Self::load_file(&config_path)?;
                let root = config_path
                    .parent()
                    .ok_or_else(|| {
                        NexusError::Config("Config file has no parent directory".to_string())
                    })?
                    .to_path_buf();
                Ok((config, root))
            }
            None => Ok((Self::default(), start_path.to_path_buf())),
        }
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: NexusConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Seed file path resolved against the project root.
    pub fn seed_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.roadmap.seed.as_ref().map(|s| project_root.join(s))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.roadmap.id_length < MIN_ID_LENGTH {
            return Err(NexusError::Config(format!(
                "roadmap.id_length must be at least {}",
                MIN_ID_LENGTH
            )));
        }
        if self.suggest.api_key_env.trim().is_empty() {
            return Err(NexusError::Config(
                "suggest.api_key_env cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
