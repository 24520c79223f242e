//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! window and the OpenGL context drawn into.

use std::sync::Arc;

use glow::HasContext;

use crate::config::WindowConfig;
use crate::error::Error;

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
pub struct App {
    // Held so SDL and the GL context outlive every GL object.
    _sdl: sdl2::Sdl,
    _video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    _gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
}

impl App {
    /// Opens a fixed-size window and makes a 3.3 core context current on it.
    pub fn new(config: &WindowConfig) -> Result<Self, Error> {
        let sdl = sdl2::init().map_err(Error::Sdl)?;
        let video_subsystem = sdl.video().map_err(Error::Sdl)?;
        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(3, 3);
        gl_attr.set_depth_size(24);

        let window = video_subsystem
            .window(&config.title, config.width, config.height)
            .opengl()
            .build()?;
        let gl_context = window.gl_create_context().map_err(Error::Window)?;
        window.gl_make_current(&gl_context).map_err(Error::Window)?;

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        let event_pump = sdl.event_pump().map_err(Error::Sdl)?;
        let gl = Arc::new(gl);

        Ok(Self {
            _sdl: sdl,
            _video_subsystem: video_subsystem,
            window,
            _gl_context: gl_context,
            gl,
            event_pump,
        })
    }

    /// Returns the renderer and version strings reported by the driver.
    pub fn gl_info(&self) -> (String, String) {
        unsafe {
            (
                self.gl.get_parameter_string(glow::RENDERER),
                self.gl.get_parameter_string(glow::VERSION),
            )
        }
    }

    /// Sets the fixed pipeline state used for every frame: depth testing where
    /// smaller depth is closer, and the colour the frame is cleared to.
    pub fn setup_pipeline(&self, clear_color: [f32; 4]) {
        let [r, g, b, a] = clear_color;
        unsafe {
            self.gl.enable(glow::DEPTH_TEST);
            self.gl.depth_func(glow::LESS);
            self.gl.clear_color(r, g, b, a);
        }
    }
}
