// config.rs
use serde::Deserialize;
use std::path::{Path, PathBuf};
use crate::error::ConfigError;

pub const CONFIG_ENV: &str = "SKIN_MATCH_CONFIG";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_size: [f32; 2],
    pub dark_mode: bool,
    pub log_level: String,
    /// Fixed RNG seed; unset means a fresh seed per run.
    pub seed: Option<u64>,
    pub preview_width: f32,
    #[cfg_attr(not(feature = "camera"), allow(dead_code))]
    pub camera_id: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_size: [1100.0, 800.0],
            dark_mode: true,
            log_level: "info".into(),
            seed: None,
            preview_width: 300.0,
            camera_id: 0,
        }
    }
}

fn get_app_dir() -> PathBuf {
    let base = if cfg!(target_os = "windows") { std::env::var("APPDATA").ok() }
        else if cfg!(target_os = "macos") { std::env::var("HOME").ok().map(|h| format!("{h}/Library/Application Support")) }
        else                              { std::env::var("HOME").ok().map(|h| format!("{h}/.config")) };
    PathBuf::from(base.unwrap_or_else(|| ".".into())).join("SkinMatch")
}

pub fn default_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV).map(PathBuf::from).unwrap_or_else(|| get_app_dir().join("config.json"))
}

impl AppConfig {
    /// A missing file is not an error; it yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(ConfigError::Read { path: path.to_path_buf(), source }),
        };
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Returns the config and, when it had to fall back, the reason. Logging
    /// is not up yet when this runs, so the caller reports it.
    pub fn load_or_default() -> (Self, Option<ConfigError>) {
        match Self::load(&default_path()) {
            Ok(c)  => (c, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(AppConfig::load(&dir.path().join("none.json")).unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "seed": 42, "dark_mode": false }"#).unwrap();
        let c = AppConfig::load(&path).unwrap();
        assert_eq!(c.seed, Some(42));
        assert!(!c.dark_mode);
        assert_eq!(c.log_level, "info");
        assert_eq!(c.window_size, [1100.0, 800.0]);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ seed: ").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Parse { .. })));
    }
}
