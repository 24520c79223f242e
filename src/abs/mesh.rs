//! Mesh management module.
//!
//! This module defines the [`Mesh`] struct for managing vertex data on the GPU side.
//! Vertices should implement the [`Vertex`] trait.

use std::sync::Arc;

use glam::Vec3;
use glow::HasContext;

use crate::error::Error;

/// Trait that defines the necessary methods for a vertex.
pub trait Vertex {
    /// Sets up the vertex attribute pointers for the vertex.
    fn vertex_attribs(gl: &glow::Context);
}

/// A bare position, fed to attribute location 0 as three tightly packed floats.
impl Vertex for Vec3 {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, 0, 0);
        }
    }
}

/// Represents a non-indexed triangle list stored on the GPU side.
pub struct Mesh {
    gl: Arc<glow::Context>,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    vertex_count: i32,
}

/// Converts a vertex count into the `GLsizei` taken by `draw_arrays`.
fn draw_count(len: usize) -> Result<i32, Error> {
    i32::try_from(len).map_err(|_| Error::Gl(format!("{len} vertices exceed GLsizei")))
}

impl Mesh {
    /// Uploads the given vertices once; the buffer is never written again.
    pub fn new<V: Vertex>(gl: &Arc<glow::Context>, vertices: &[V]) -> Result<Self, Error> {
        let vertex_count = draw_count(vertices.len())?;
        unsafe {
            let vbo = gl.create_buffer().map_err(Error::Gl)?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                std::slice::from_raw_parts(
                    vertices.as_ptr() as *const u8,
                    std::mem::size_of_val(vertices),
                ),
                glow::STATIC_DRAW,
            );

            let vao = gl.create_vertex_array().map_err(Error::Gl)?;
            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            V::vertex_attribs(gl);

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            Ok(Self {
                gl: Arc::clone(gl),
                vao,
                vbo,
                vertex_count,
            })
        }
    }

    /// Draws the mesh with whatever program is currently in use.
    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            self.gl.draw_arrays(glow::TRIANGLES, 0, self.vertex_count);
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count as usize
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_vertex_array(self.vao);
            self.gl.delete_buffer(self.vbo);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_count_fits() {
        assert_eq!(draw_count(6).unwrap(), 6);
        assert_eq!(draw_count(i32::MAX as usize).unwrap(), i32::MAX);
    }

    #[test]
    fn test_draw_count_overflow_is_an_error() {
        let err = draw_count(i32::MAX as usize + 1).unwrap_err();
        assert!(matches!(err, Error::Gl(_)));
    }
}
