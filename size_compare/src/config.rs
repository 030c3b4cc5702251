//! Viewer configuration, read from a TOML file

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::scaling::ScalingOptions;
use crate::selection::SelectionPair;

pub const DEFAULT_CONFIG_PATH: &str = "./config/size_compare.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Scene3d,
    Canvas2d,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Scene3d => ViewMode::Canvas2d,
            ViewMode::Canvas2d => ViewMode::Scene3d,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Scene3d => "3D",
            ViewMode::Canvas2d => "2D",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Celestial Size Comparison".to_string(),
            width: 1400,
            height: 900,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    /// Directory holding the preview images
    pub assets_dir: PathBuf,
    /// Initially selected bodies
    pub first: String,
    pub second: String,
    pub mode: ViewMode,
    pub scaling: ScalingOptions,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            assets_dir: PathBuf::from("./assets"),
            first: "earth".to_string(),
            second: "mars".to_string(),
            mode: ViewMode::Scene3d,
            scaling: ScalingOptions::default(),
        }
    }
}

impl ViewerConfig {
    /// Read `path`; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("bad config {}", path.display()))?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let config: ViewerConfig = toml::from_str(text)?;
        config
            .scaling
            .validate()
            .context("invalid [scaling] options")?;
        Ok(config)
    }

    /// The configured initial pair, checked against `catalog`
    pub fn initial_pair(&self, catalog: &Catalog) -> anyhow::Result<SelectionPair> {
        for id in [&self.first, &self.second] {
            catalog
                .get(id)
                .with_context(|| format!("configured body '{}' is not in the catalog", id))?;
        }
        Ok(SelectionPair::new(self.first.clone(), self.second.clone()))
    }
}
