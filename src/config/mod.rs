use anyhow::Context;
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::color::Color;

pub const DEFAULT_INITIAL_COLOR: &str = "#3B82F6";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub palette: PaletteConfig,
    pub export: ExportConfig,
    pub input: InputConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Base color shown at startup and restored by clearing the input.
    pub initial_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory palette JSON files are written to.
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub mouse: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long the "Copié" acknowledgment stays visible.
    pub copied_ack_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// trace, debug, info, warn or error
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            initial_color: DEFAULT_INITIAL_COLOR.to_string(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        let dir = UserDirs::new()
            .and_then(|u| u.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self { dir }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { copied_ack_ms: 2000 }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let proj = ProjectDirs::from("dev", "nuancier", "nuancier");
        let data_dir = proj
            .as_ref()
            .map(|p| p.data_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("nuancier"));
        Self { data_dir }
    }
}

impl Config {
    pub fn initial_color(&self) -> anyhow::Result<Color> {
        Color::parse_hex(&self.palette.initial_color).context("palette.initial_color")
    }

    pub fn copied_ack(&self) -> Duration {
        Duration::from_millis(self.ui.copied_ack_ms)
    }

    pub fn log_level(&self) -> anyhow::Result<tracing::Level> {
        self.log
            .level
            .parse()
            .map_err(|_| anyhow::anyhow!("log.level: unknown level {:?}", self.log.level))
    }

    pub fn log_file(&self) -> PathBuf {
        self.paths.data_dir.join("nuancier.log")
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj =
        ProjectDirs::from("dev", "nuancier", "nuancier").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

/// Load the config, writing a default file first if none exists.
pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
        }
        let cfg = Config::default();
        let raw = toml::to_string_pretty(&cfg).context("serialize default config")?;
        fs::write(&path, raw).with_context(|| format!("write {}", path.display()))?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    cfg.initial_color()
        .with_context(|| format!("invalid {}", path.display()))?;
    cfg.log_level()
        .with_context(|| format!("invalid {}", path.display()))?;
    Ok(cfg)
}
