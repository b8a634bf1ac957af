//! Visualizer settings with persistence
//!
//! Settings are saved to `~/.config/linkscape/settings.toml`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use glam::Vec3;
use linkscape_core::Color;
use linkscape_scene::{AnchorStyle, IndicatorStyle, LayoutConfig, PointLight, PrimitiveFactory};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// All visualizer settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub layout: LayoutSettings,
    pub light: LightSettings,
    pub style: StyleSettings,
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("linkscape"))
    }

    /// Get the default settings file path
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load settings from `path`, falling back to defaults when the file is
    /// missing or unreadable
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to the default location
    pub fn save(&self) -> anyhow::Result<PathBuf> {
        let Some(path) = Self::default_path() else {
            anyhow::bail!("Could not determine config directory");
        };
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save settings to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("creating config directory {dir:?}"))?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("writing settings to {path:?}"))?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Point lights re-added after every scene rebuild
    pub fn lights(&self) -> Vec<PointLight> {
        if self.light.enabled {
            vec![self.light.to_point_light()]
        } else {
            Vec::new()
        }
    }

    /// Object factory configured with the anchor/indicator style
    pub fn factory(&self) -> PrimitiveFactory {
        PrimitiveFactory::new(
            AnchorStyle {
                radius: self.style.anchor_radius,
                color: Color::from_hex(self.style.anchor_color),
            },
            IndicatorStyle {
                color: Color::from_hex(self.style.indicator_color),
            },
        )
    }
}

/// Node placement settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Position of the head node
    pub origin: [f32; 3],
    /// Distance between consecutive nodes
    pub spacing: f32,
    /// Direction the list grows along (normalized on use)
    pub axis: [f32; 3],
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            origin: [-6.0, 0.0, 0.0],
            spacing: 3.0,
            axis: [1.0, 0.0, 0.0],
        }
    }
}

impl LayoutSettings {
    pub fn to_layout(&self) -> LayoutConfig {
        LayoutConfig::new(
            Vec3::from_array(self.origin),
            self.spacing,
            Vec3::from_array(self.axis),
        )
    }
}

/// Scene light settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightSettings {
    /// Whether a point light is added to the scene
    pub enabled: bool,
    pub position: [f32; 3],
    /// Light color (0xRRGGBB)
    pub color: u32,
    pub intensity: f32,
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            position: [10.0, 10.0, 20.0],
            color: 0xFFFFFF,
            intensity: 1500.0,
        }
    }
}

impl LightSettings {
    pub fn to_point_light(&self) -> PointLight {
        PointLight {
            position: Vec3::from_array(self.position),
            color: Color::from_hex(self.color),
            intensity: self.intensity,
        }
    }
}

/// Anchor and indicator appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    pub anchor_radius: f32,
    /// Anchor color (0xRRGGBB)
    pub anchor_color: u32,
    /// Indicator color (0xRRGGBB)
    pub indicator_color: u32,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            anchor_radius: 0.5,
            anchor_color: 0x00FFCC,
            indicator_color: 0xFFFFFF,
        }
    }
}
