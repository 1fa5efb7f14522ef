use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

const CONFIG_DIR: &str = ".taskdeck";
const CONFIG_FILE: &str = "config.toml";

const DEFAULT_RECENT_TASKS: usize = 5;
const DEFAULT_PROJECT_PREVIEW: usize = 6;

/// View configuration loaded from `.taskdeck/config.toml`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct ViewConfig {
    /// Dashboard section limits.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl ViewConfig {
    /// Load configuration from `workdir`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read, parsed or validated.
    pub fn from_workdir(workdir: impl AsRef<Path>) -> Result<Self> {
        let config_path = workdir.as_ref().join(CONFIG_DIR).join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.dashboard.validate()
    }
}

/// `[dashboard]` block.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DashboardConfig {
    /// How many tasks the "Recent Tasks" section shows.
    #[serde(default = "default_recent_tasks")]
    pub recent_tasks: usize,
    /// How many project cards the "Your Projects" section shows.
    #[serde(default = "default_project_preview")]
    pub project_preview: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_tasks: DEFAULT_RECENT_TASKS,
            project_preview: DEFAULT_PROJECT_PREVIEW,
        }
    }
}

impl DashboardConfig {
    fn validate(&self) -> Result<()> {
        if self.recent_tasks == 0 {
            bail!("dashboard.recent_tasks must be at least 1");
        }
        if self.project_preview == 0 {
            bail!("dashboard.project_preview must be at least 1");
        }
        Ok(())
    }
}

const fn default_recent_tasks() -> usize {
    DEFAULT_RECENT_TASKS
}

const fn default_project_preview() -> usize {
    DEFAULT_PROJECT_PREVIEW
}
