use crate::error::{Error, Result};
use networth_types::KNOWN_SECTIONS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. NETWORTH_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.networth (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("NETWORTH_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("networth"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".networth"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// One section pane offered to the router as a container plus tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneConfig {
    pub id: String,
    pub title: String,
}

impl PaneConfig {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_history_limit() -> usize {
    networth_router::location::DEFAULT_HISTORY_LIMIT
}

fn default_panes() -> Vec<PaneConfig> {
    KNOWN_SECTIONS
        .iter()
        .map(|id| PaneConfig::new(*id, default_title(id)))
        .collect()
}

/// Display title for a known section.
pub fn default_title(id: &str) -> String {
    match id {
        "dashboard" => "Dashboard".to_string(),
        "assets-liabilities" => "Assets & Liabilities".to_string(),
        "trends" => "Trends".to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Fragment used when the command line gives none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_fragment: Option<String>,

    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Panes the host offers; a known section without a pane is not routable.
    #[serde(default = "default_panes")]
    pub panes: Vec<PaneConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_fragment: None,
            tick_rate_ms: default_tick_rate_ms(),
            history_limit: default_history_limit(),
            panes: default_panes(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 {
            return Err(Error::Config("tick_rate_ms must be positive".to_string()));
        }
        for (i, pane) in self.panes.iter().enumerate() {
            if self.panes[..i].iter().any(|p| p.id == pane.id) {
                return Err(Error::Config(format!("duplicate pane '{}'", pane.id)));
            }
        }
        Ok(())
    }

    /// Title for `id`, from the configured pane when present.
    pub fn title_for(&self, id: &str) -> String {
        self.panes
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.title.clone())
            .unwrap_or_else(|| default_title(id))
    }
}
