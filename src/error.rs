//! Startup errors.
//!
//! Everything that can stop the program before or during setup ends up in
//! [`Error`], which `main` reports before exiting with status 1.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not start SDL2: {0}")]
    Sdl(String),
    #[error("could not open window with SDL2: {0}")]
    Window(String),
    #[error("OpenGL: {0}")]
    Gl(String),
    #[error("failed to load {} into string: {source}", path.display())]
    ReadShader {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to load {} into string: file is empty", .0.display())]
    EmptyShader(PathBuf),
    #[error("could not read config {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl From<sdl2::video::WindowBuildError> for Error {
    fn from(e: sdl2::video::WindowBuildError) -> Self {
        Error::Window(e.to_string())
    }
}
