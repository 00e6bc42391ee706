use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Global configuration (stored in ~/.config/kanban/)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// UI theme/colors
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Board startup settings
    #[serde(default)]
    pub board: BoardConfig,

    /// Log file settings
    #[serde(default)]
    pub log: LogConfig,
}

/// Hex colors used by the board and task form. Missing keys keep their default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Focused column border, selected card and active form field
    pub color_selected: String,
    /// Unfocused column and card borders
    pub color_normal: String,
    /// Footer, empty-column placeholder and inactive form field
    pub color_dimmed: String,
    /// Task titles and form text
    pub color_text: String,
    /// Task description preview
    pub color_description: String,
    /// Header of an unfocused column
    pub color_column_header: String,
    /// Task form border
    pub color_popup_border: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            color_selected: "#e8c547".to_string(),
            color_normal: "#4fb3bf".to_string(),
            color_dimmed: "#8a8a8a".to_string(),
            color_text: "#eeeeee".to_string(),
            color_description: "#b9a7c9".to_string(),
            color_column_header: "#9cc5e8".to_string(),
            color_popup_border: "#7fd1ae".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Parse "#rrggbb" (leading '#' optional) into RGB components
    pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let rgb = u32::from_str_radix(digits, 16).ok()?;
        Some(((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
    }
}

/// Board configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Start with the sample tasks instead of an empty board
    #[serde(default = "default_true")]
    pub seed_sample_tasks: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            seed_sample_tasks: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Output format of the log file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Log file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Write a log file at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Filter directive, e.g. "info" or "kanban=debug". KANBAN_LOG overrides it.
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,

    /// Directory for log files; defaults to the data directory
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            format: LogFormat::default(),
            directory: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl GlobalConfig {
    /// Load config from `path`, falling back to defaults when the file is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            toml::from_str(&content).with_context(|| format!("Failed to parse config {:?}", path))
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from `path`, writing the defaults there first when the file is missing
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }
        let config = Self::default();
        config
            .save_to(path)
            .with_context(|| format!("Failed to write default config to {:?}", path))?;
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

    /// Get the path to the global config file
    /// Always uses ~/.config/kanban/ on all platforms
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").context("Could not determine home directory")?;
        Ok(PathBuf::from(home).join(".config").join("kanban").join("config.toml"))
    }

    /// Get the path to the global data directory
    pub fn data_dir() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "kanban")
            .context("Could not determine data directory")?;
        Ok(dirs.data_dir().to_path_buf())
    }

    /// Directory the log file is written to
    pub fn log_dir(&self) -> Result<PathBuf> {
        match &self.log.directory {
            Some(dir) => Ok(dir.clone()),
            None => Self::data_dir(),
        }
    }
}
