use std::{cell::RefCell, sync::Arc};

use glow::HasContext;

use crate::graphics::{glbuffer::GpuVertexData, glprogram::GLProgram, gluniforms::Uniforms};

/// Represents a thing that can be drawn to.
pub struct DrawingTarget {
    gl: Arc<glow::Context>,
    draw_call_counter: RefCell<usize>,
}

impl DrawingTarget {
    pub fn new(gl: &Arc<glow::Context>) -> Self {
        Self {
            gl: gl.clone(),
            draw_call_counter: RefCell::new(0),
        }
    }

    pub fn gl(&self) -> &Arc<glow::Context> {
        &self.gl
    }

    /// One indexed draw with the given program, buffer and uniforms.
    /// Binding is re-issued per call; at this draw-call count that is
    /// equivalent to binding once per frame.
    pub fn draw(&self, vertex_buffer: &GpuVertexData, program: &GLProgram, uniforms: &Uniforms) {
        let gl = self.gl.as_ref();
        program.use_program();
        program.set_uniforms(uniforms);
        vertex_buffer.bind_for_drawing();

        *self.draw_call_counter.borrow_mut() += 1;
        let points = vertex_buffer.drawn_point_count as i32;
        unsafe {
            gl.draw_elements(glow::TRIANGLES, points, glow::UNSIGNED_INT, 0);
        }
    }

    /// Clears the color buffer. There is no depth buffer in use: paint order
    /// is list order.
    pub fn clear(&self, r: f32, g: f32, b: f32, a: f32) {
        let gl = self.gl.as_ref();
        unsafe {
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    pub fn get_draw_call_counter(&self) -> usize {
        *self.draw_call_counter.borrow()
    }

    pub fn reset_draw_call_counter(&self) {
        *self.draw_call_counter.borrow_mut() = 0;
    }
}
