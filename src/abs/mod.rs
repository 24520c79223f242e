//! This module contains the thin OpenGL layer the program draws with:
//! window and context setup, shader loading and mesh upload.

pub mod app;
pub mod mesh;
pub mod shader;

pub use app::*;
pub use mesh::*;
pub use shader::*;
