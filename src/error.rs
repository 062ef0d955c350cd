// error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset '{0}' is not embedded; add it to json_loader::asset()")]
    NotEmbedded(String),
    #[error("parse error in {name}: {source}")]
    Parse { name: String, #[source] source: serde_json::Error },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read { path: PathBuf, #[source] source: std::io::Error },
    #[error("malformed config {path}: {source}")]
    Parse { path: PathBuf, #[source] source: serde_json::Error },
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("cannot read {path}: {source}")]
    Read { path: PathBuf, #[source] source: std::io::Error },
    #[error("image is empty")]
    Empty,
    #[error("unsupported image format (expected PNG or JPEG)")]
    Unsupported,
    #[error("images can only be attached on the upload page")]
    WrongPage,
    #[cfg(feature = "camera")]
    #[error("camera: {0}")]
    Camera(String),
}
