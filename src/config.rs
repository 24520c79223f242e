//! Optional JSON configuration.
//!
//! The program runs without any configuration file; the defaults open a
//! 640x640 window and read `test_vs.glsl`, `test_fs.glsl` and `test_fs2.glsl`
//! from the working directory. A file only needs the fields it changes.

use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::Deserialize;

use crate::error::Error;

/// Name of the config file looked up in the working directory.
pub const LOCAL_CONFIG: &str = "hello_triangle.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hello Triangle".to_string(),
            width: 640,
            height: 640,
        }
    }
}

/// Paths of the three shader sources, relative to the working directory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShaderPaths {
    pub vertex: PathBuf,
    /// Fragment stage paired with the square.
    pub fragment: PathBuf,
    /// Fragment stage paired with the triangle.
    pub fragment_alt: PathBuf,
}

impl Default for ShaderPaths {
    fn default() -> Self {
        Self {
            vertex: PathBuf::from("test_vs.glsl"),
            fragment: PathBuf::from("test_fs.glsl"),
            fragment_alt: PathBuf::from("test_fs2.glsl"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub clear_color: [f32; 4],
    pub shaders: ShaderPaths,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            clear_color: [0.6, 0.6, 0.8, 1.0],
            shaders: ShaderPaths::default(),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Loads the first config file found, or the defaults if there is none.
    ///
    /// Returns the path the config came from alongside it.
    pub fn load() -> Result<(Self, Option<PathBuf>), Error> {
        for path in Self::candidates() {
            if path.is_file() {
                let config = Self::from_file(&path)?;
                return Ok((config, Some(path)));
            }
        }
        Ok((Self::default(), None))
    }

    /// Reads and parses a config file.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| Error::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    fn candidates() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("hello-triangle").join("config.json"));
        }
        paths
    }
}
