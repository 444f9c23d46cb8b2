pub mod config;
pub mod console;
pub mod graphics;
pub mod io;
pub mod math;
pub mod scene;

use std::sync::Arc;

use anyhow::Result;
use glow::HasContext;
use sdl2::{
    EventPump, Sdl, VideoSubsystem,
    video::{GLContext, SwapInterval, Window, gl_attr::GLAttr},
};

use crate::config::DemoConfig;

/// Everything the window side hands to the demos: the SDL handles, the event
/// pump and the GL function table. Lives for the whole process; dropping it
/// tears the context and window down once, at exit.
pub struct RenderingBlock {
    pub video: VideoSubsystem,
    pub window: Window,
    pub event_pump: EventPump,
    pub sdl: Sdl,
    pub gl: Arc<glow::Context>,
    /// Owned so the GL context stays alive as long as the block does.
    pub gl_context: GLContext,
}

pub fn get_shader_version() -> &'static str {
    #[cfg(target_os = "macos")]
    {
        "#version 330 core"
    }
    #[cfg(not(target_os = "macos"))]
    {
        "#version 300 es"
    }
}

#[cfg(target_os = "macos")]
pub fn set_opengl_attributes(gl_attr: GLAttr<'_>) {
    // MacOS does not support OpenGL ES.
    gl_attr.set_context_version(3, 3);
    gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
    gl_attr.set_multisample_buffers(1);
    gl_attr.set_multisample_samples(4);
    gl_attr.set_context_flags().forward_compatible().set(); // for macOS
}

#[cfg(not(target_os = "macos"))]
pub fn set_opengl_attributes(gl_attr: GLAttr<'_>) {
    gl_attr.set_context_version(3, 0);
    gl_attr.set_multisample_buffers(1);
    gl_attr.set_multisample_samples(4);
}

/// Creates the window, the GL context and the event pump. The window is not
/// resizable: the projection computed at startup stays valid for the whole
/// session.
pub fn init_sdl(config: &DemoConfig) -> Result<RenderingBlock> {
    let sdl = sdl2::init().map_err(anyhow::Error::msg)?;
    let video = sdl.video().map_err(anyhow::Error::msg)?;
    set_opengl_attributes(video.gl_attr());

    let window = video
        .window(&config.title, config.screen_width, config.screen_height)
        .opengl()
        .allow_highdpi() // For Retina displays on macOS
        .position_centered()
        .build()?;

    let event_pump = sdl.event_pump().map_err(anyhow::Error::msg)?;

    let gl_context = window.gl_create_context().map_err(anyhow::Error::msg)?;
    let gl = unsafe {
        glow::Context::from_loader_function(|name| video.gl_get_proc_address(name) as *const _)
    };
    let gl: Arc<glow::Context> = Arc::new(gl);

    let interval = if config.vsync {
        SwapInterval::VSync
    } else {
        SwapInterval::Immediate
    };
    let _ = video.gl_set_swap_interval(interval);

    unsafe {
        let (width, height) = window.drawable_size();
        gl.viewport(0, 0, width as i32, height as i32);

        console::print_info(format!(
            "Renderer: {}",
            gl.get_parameter_string(glow::RENDERER)
        ));
        console::print_info(format!(
            "OpenGL version supported: {}",
            gl.get_parameter_string(glow::VERSION)
        ));
    }

    Ok(RenderingBlock {
        sdl,
        video,
        window,
        event_pump,
        gl,
        gl_context,
    })
}
