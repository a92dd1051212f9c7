//! This module handles persisted container defaults, including loading and
//! saving host preferences to a `toaster.toml` file.
//!
//! Nothing in the engine itself persists state; this is an opt-in
//! convenience for hosts that want toast defaults to survive restarts.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toaster::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.max_toasts = Some(5);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // Apply it to a container at startup
//! let container = iced_toaster::api::Container::new(Default::default());
//! container.toaster().update_defaults(config.container_update());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::options::{ContainerUpdate, Position, Timeout, ToastOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "toaster.toml";
const APP_NAME: &str = "IcedToaster";

/// Persisted container defaults.
///
/// Every field is optional; unset fields leave the engine's built-in
/// defaults untouched. A `timeout_ms` of `0` disables auto-dismiss.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub position: Option<Position>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    #[serde(default)]
    pub max_toasts: Option<usize>,
    #[serde(default)]
    pub newest_on_top: Option<bool>,
    #[serde(default)]
    pub pause_on_hover: Option<bool>,
    #[serde(default)]
    pub pause_on_focus_loss: Option<bool>,
    #[serde(default)]
    pub close_on_click: Option<bool>,
    #[serde(default)]
    pub draggable: Option<bool>,
    #[serde(default)]
    pub draggable_percent: Option<f32>,
    #[serde(default)]
    pub hide_progress_bar: Option<bool>,
    #[serde(default)]
    pub rtl: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            position: Some(Position::default()),
            timeout_ms: Some(DEFAULT_TIMEOUT_MS),
            max_toasts: None,
            newest_on_top: None,
            pause_on_hover: None,
            pause_on_focus_loss: None,
            close_on_click: None,
            draggable: None,
            draggable_percent: None,
            hide_progress_bar: None,
            rtl: None,
        }
    }
}

impl Config {
    /// Maps the set fields into a partial update for a container.
    #[must_use]
    pub fn container_update(&self) -> ContainerUpdate {
        let mut toast = ToastOptions::new();
        if let Some(position) = self.position {
            toast.position = Some(position);
        }
        if let Some(ms) = self.timeout_ms {
            toast.timeout = Some(if ms == 0 {
                Timeout::Disabled
            } else {
                Timeout::millis(ms)
            });
        }
        if let Some(pause) = self.pause_on_hover {
            toast.pause_on_hover = Some(pause);
        }
        if let Some(pause) = self.pause_on_focus_loss {
            toast.pause_on_focus_loss = Some(pause);
        }
        if let Some(close) = self.close_on_click {
            toast.close_on_click = Some(close);
        }
        if let Some(draggable) = self.draggable {
            toast.draggable = Some(draggable);
        }
        if let Some(percent) = self.draggable_percent {
            toast.draggable_percent = Some(crate::options::DraggablePercent::new(percent));
        }
        if let Some(hide) = self.hide_progress_bar {
            toast.hide_progress_bar = Some(hide);
        }
        if let Some(rtl) = self.rtl {
            toast.rtl = Some(rtl);
        }

        let mut update = ContainerUpdate::new().toast(toast);
        update.max_toasts = self.max_toasts;
        update.newest_on_top = self.newest_on_top;
        update
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
