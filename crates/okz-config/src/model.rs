use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DATA_DIR_NAME: &str = "data";

/// Stores user-configurable preferences for the tracker and its shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub budget: BudgetPreferences,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for challenge data. Defaults to `<home>/data`.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "ja-JP".into(),
            currency: "JPY".into(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            budget: BudgetPreferences::default(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn resolve_data_dir(&self, home: &Path) -> PathBuf {
        match &self.data_dir {
            Some(path) => path.clone(),
            None => home.join(DATA_DIR_NAME),
        }
    }
}

/// Envelope and starting range for the budget-setting view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPreferences {
    #[serde(default = "BudgetPreferences::default_floor")]
    pub floor: u32,
    #[serde(default = "BudgetPreferences::default_ceiling")]
    pub ceiling: u32,
    #[serde(default = "BudgetPreferences::default_min")]
    pub default_min: u32,
    #[serde(default = "BudgetPreferences::default_max")]
    pub default_max: u32,
}

impl Default for BudgetPreferences {
    fn default() -> Self {
        Self {
            floor: Self::default_floor(),
            ceiling: Self::default_ceiling(),
            default_min: Self::default_min(),
            default_max: Self::default_max(),
        }
    }
}

impl BudgetPreferences {
    pub fn default_floor() -> u32 {
        500
    }

    pub fn default_ceiling() -> u32 {
        10_000
    }

    pub fn default_min() -> u32 {
        1_000
    }

    pub fn default_max() -> u32 {
        5_000
    }
}
