use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{TOOLBAR_DEFAULT_LEFT, TOOLBAR_DEFAULT_TOP};

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Application configuration persisted to disk.
///
/// Only UI preferences are persisted - annotation and chart contents are
/// intentionally not saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfigData {
    /// Last toolbar position as (top, left) pixels inside the plot area
    #[serde(default)]
    pub toolbar_position: Option<(i32, i32)>,

    /// Whether the toolbar can be repositioned by dragging its grab strip
    #[serde(default = "default_true")]
    pub toolbar_moveable: bool,

    /// Whether the crosshair/tooltip overlay is shown
    #[serde(default = "default_true")]
    pub crosshair_enabled: bool,

    /// Default annotation stroke width in pixels
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
}

fn default_true() -> bool {
    true
}

fn default_stroke_width() -> f32 {
    2.0
}

impl Default for AppConfigData {
    fn default() -> Self {
        Self {
            toolbar_position: Some((TOOLBAR_DEFAULT_TOP, TOOLBAR_DEFAULT_LEFT)),
            toolbar_moveable: true,
            crosshair_enabled: true,
            stroke_width: default_stroke_width(),
        }
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Load configuration from disk, falling back to defaults on any error
fn load_config() -> AppConfig {
    let config_path = crate::paths::config_file();

    let data = if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(data) => {
                    info!("Loaded config from {:?}", config_path);
                    data
                }
                Err(e) => {
                    warn!("Failed to parse config file, using defaults: {}", e);
                    AppConfigData::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file, using defaults: {}", e);
                AppConfigData::default()
            }
        }
    } else {
        info!("No config file found, using defaults");
        AppConfigData::default()
    };

    AppConfig {
        data,
        config_path,
        dirty: false,
    }
}

/// Save configuration to disk
fn save_config(config: &AppConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(mut config: ResMut<AppConfig>) {
    let loaded = load_config();
    config.data = loaded.data;
    config.config_path = loaded.config_path;
    config.dirty = false;
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .add_message::<SaveConfigRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                save_config_system.run_if(on_message::<SaveConfigRequest>),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_data_default() {
        let data = AppConfigData::default();
        assert_eq!(
            data.toolbar_position,
            Some((TOOLBAR_DEFAULT_TOP, TOOLBAR_DEFAULT_LEFT))
        );
        assert!(data.toolbar_moveable);
        assert!(data.crosshair_enabled);
        assert_eq!(data.stroke_width, 2.0);
    }

    #[test]
    fn test_app_config_data_serialization() {
        let data = AppConfigData {
            toolbar_position: Some((40, 120)),
            toolbar_moveable: false,
            crosshair_enabled: true,
            stroke_width: 3.5,
        };

        let json = serde_json::to_string(&data).unwrap();
        let parsed: AppConfigData = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.toolbar_position, data.toolbar_position);
        assert_eq!(parsed.toolbar_moveable, data.toolbar_moveable);
        assert_eq!(parsed.crosshair_enabled, data.crosshair_enabled);
        assert_eq!(parsed.stroke_width, data.stroke_width);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let parsed: AppConfigData = serde_json::from_str("{}").unwrap();
        assert!(parsed.toolbar_moveable);
        assert!(parsed.crosshair_enabled);
        assert_eq!(parsed.stroke_width, 2.0);
        assert!(parsed.toolbar_position.is_none());
    }
}
