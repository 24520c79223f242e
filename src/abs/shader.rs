//! OpenGL Shaders
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs for managing OpenGL shaders,
//! and [`read_source`] for pulling shader text off disk.

use std::path::Path;
use std::sync::Arc;

use glow::HasContext;

use crate::error::Error;

/// The pipeline stage a shader is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    pub fn gl_enum(self) -> u32 {
        match self {
            ShaderKind::Vertex => glow::VERTEX_SHADER,
            ShaderKind::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

/// Reads a shader source file into a string.
///
/// Fails if the file can't be read or has no content at all. Anything else is
/// handed to the compiler; bytes that aren't valid UTF-8 are replaced rather
/// than rejected.
pub fn read_source(path: &Path) -> Result<String, Error> {
    let bytes = std::fs::read(path).map_err(|source| Error::ReadShader {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.is_empty() {
        return Err(Error::EmptyShader(path.to_path_buf()));
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Represents an individual OpenGL shader.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
}

impl Shader {
    /// Compiles a new shader from the given source code.
    pub fn new(gl: &Arc<glow::Context>, kind: ShaderKind, source: &str) -> Result<Self, Error> {
        unsafe {
            let shader = gl.create_shader(kind.gl_enum()).map_err(Error::Gl)?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            // TODO: check get_shader_compile_status and surface the info log.
            Ok(Self {
                gl: Arc::clone(gl),
                id: shader,
            })
        }
    }

    /// Reads the file at `path` and compiles it as a `kind` shader.
    pub fn load(gl: &Arc<glow::Context>, path: &Path, kind: ShaderKind) -> Result<Self, Error> {
        let source = read_source(path)?;
        log::info!("loaded {kind:?} shader {} ({} bytes)", path.display(), source.len());
        Self::new(gl, kind, &source)
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// Represents an OpenGL shader program composed of multiple shaders.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
}

impl ShaderProgram {
    /// Links a new shader program from the given shaders.
    ///
    /// The link status is not queried; a program that failed to link is still
    /// returned and simply draws nothing useful.
    pub fn new(gl: &Arc<glow::Context>, shaders: &[&Shader]) -> Result<Self, Error> {
        unsafe {
            let program = gl.create_program().map_err(Error::Gl)?;

            for shader in shaders {
                gl.attach_shader(program, shader.id);
            }

            gl.link_program(program);

            Ok(Self {
                gl: Arc::clone(gl),
                id: program,
            })
        }
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}
