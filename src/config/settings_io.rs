use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::settings::Settings;

pub fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("dragons_of_mugloar");
    path.push("settings.json");
    path
}

pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Missing or unreadable files give the defaults.
pub fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(s) => serde_json::from_str(&s).unwrap_or_else(|err| {
            log::warn!("Ignoring invalid settings in {}: {}", path.display(), err);
            Settings::default()
        }),
        Err(_) => Settings::default(),
    }
}

pub fn save_settings(settings: &Settings) -> Result<PathBuf> {
    let path = settings_path();
    save_settings_to(settings, &path)?;
    Ok(path)
}

pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
