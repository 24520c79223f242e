//! The two hardcoded meshes, their programs, and the frame loop.

use std::sync::Arc;

use glam::Vec3;
use glow::HasContext;
use sdl2::event::{Event, WindowEvent};

use crate::abs::*;
use crate::config::ShaderPaths;
use crate::error::Error;

/// Two triangles covering a half-size square around the origin.
pub const SQUARE: [Vec3; 6] = [
    Vec3::new(0.5, 0.5, 0.0),
    Vec3::new(0.5, -0.5, 0.0),
    Vec3::new(-0.5, -0.5, 0.0),
    Vec3::new(-0.5, -0.5, 0.0),
    Vec3::new(0.5, 0.5, 0.0),
    Vec3::new(-0.5, 0.5, 0.0),
];

/// A triangle hanging from the origin to the bottom corners of clip space.
pub const TRIANGLE: [Vec3; 3] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(1.0, -1.0, 0.0),
    Vec3::new(-1.0, -1.0, 0.0),
];

/// Whether the frame loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Closed,
}

impl LoopState {
    /// Advances the state for one polled event. Only closing the window
    /// changes anything; once closed the loop stays closed.
    pub fn observe(self, event: &Event) -> Self {
        match event {
            Event::Quit { .. }
            | Event::Window {
                win_event: WindowEvent::Close,
                ..
            } => LoopState::Closed,
            _ => self,
        }
    }
}

/// Everything drawn each frame: the square with the first program and the
/// triangle with the second.
pub struct Scene {
    square: Mesh,
    triangle: Mesh,
    square_program: ShaderProgram,
    triangle_program: ShaderProgram,
}

impl Scene {
    /// Uploads both meshes, then loads the three shader files and links the
    /// two programs sharing the vertex stage.
    pub fn new(gl: &Arc<glow::Context>, paths: &ShaderPaths) -> Result<Self, Error> {
        let square = Mesh::new(gl, &SQUARE)?;
        let triangle = Mesh::new(gl, &TRIANGLE)?;
        log::debug!(
            "uploaded square ({} vertices) and triangle ({} vertices)",
            square.vertex_count(),
            triangle.vertex_count()
        );

        let vert = Shader::load(gl, &paths.vertex, ShaderKind::Vertex)?;
        let frag = Shader::load(gl, &paths.fragment, ShaderKind::Fragment)?;
        let frag_alt = Shader::load(gl, &paths.fragment_alt, ShaderKind::Fragment)?;

        let square_program = ShaderProgram::new(gl, &[&frag, &vert])?;
        let triangle_program = ShaderProgram::new(gl, &[&frag_alt, &vert])?;

        Ok(Self {
            square,
            triangle,
            square_program,
            triangle_program,
        })
    }

    /// Issues both draw calls in their fixed order.
    pub fn draw(&self) {
        self.square_program.use_program();
        self.square.draw();

        self.triangle_program.use_program();
        self.triangle.draw();
    }
}

/// Renders frames until the window is closed. Returns the number of frames
/// presented.
pub fn run(app: &mut App, scene: &Scene) -> u64 {
    let mut state = LoopState::Running;
    let mut frames = 0;

    while state == LoopState::Running {
        unsafe {
            app.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        scene.draw();

        for event in app.event_pump.poll_iter() {
            state = state.observe(&event);
        }

        app.window.gl_swap_window();
        frames += 1;
    }

    frames
}
