use std::sync::Arc;

use glow::HasContext;

use crate::graphics::gltypes::DataLayout;

/// Device-resident geometry. Created and uploaded once, then reused by every
/// draw call; the per-instance transform lives in uniforms, never here.
pub struct GpuVertexData {
    // vbo + vao
    pub vbo: glow::NativeBuffer,
    pub vao: glow::NativeVertexArray,
    pub ebo: glow::NativeBuffer,
    pub layout: DataLayout,
    pub drawn_point_count: usize,
    pub buffer_row_count: usize,
    gl: Arc<glow::Context>,
}

impl GpuVertexData {
    pub fn new(gl: &Arc<glow::Context>) -> Self {
        let vao = unsafe { gl.create_vertex_array().expect("Cannot create vertex array") };
        let vbo = unsafe { gl.create_buffer().expect("Cannot create vertex buffer") };
        let ebo = unsafe { gl.create_buffer().expect("Cannot create index buffer") };

        Self {
            vbo,
            vao,
            ebo,
            layout: DataLayout::new(),
            drawn_point_count: 0,
            buffer_row_count: 0,
            gl: gl.clone(),
        }
    }

    /// Uploads the vertex and index data with STATIC_DRAW usage. The data is
    /// checked against the currently applied layout first.
    pub fn set_data<T: Copy>(
        &mut self,
        vertex_data: &[T],
        index_data: &[u32],
    ) -> Result<(), String> {
        if self.layout.fields.is_empty() {
            return Err("You must apply a layout before setting data!".to_string());
        }
        self.drawn_point_count = index_data.len();
        let vertex_data_byte_count = std::mem::size_of_val(vertex_data);
        let vertex_raw_data = unsafe {
            std::slice::from_raw_parts(vertex_data.as_ptr() as *const u8, vertex_data_byte_count)
        };

        if let Some(e) = self.layout.is_sound(vertex_raw_data, index_data) {
            return Err(format!(
                "The provided data is not sound for the current layout: {e}"
            ));
        }

        self.buffer_row_count = vertex_data_byte_count / self.layout.stride();

        unsafe {
            let gl = self.gl.as_ref();
            gl.bind_vertex_array(Some(self.vao));

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vbo));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, vertex_raw_data, glow::STATIC_DRAW);

            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(self.ebo));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                convert_u32_to_u8(index_data),
                glow::STATIC_DRAW,
            );

            // The VAO remembers the buffers it is bound to, so the VAO is
            // unbound before the buffers.
            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);
        }
        Ok(())
    }

    /// Transfers the layout information (how the buffer bytes are supposed to
    /// be understood by the GPU) to the vertex array object.
    pub fn apply_layout(&mut self, layout: DataLayout) {
        self.layout = layout;
        unsafe {
            let gl = self.gl.as_ref();
            gl.bind_vertex_array(Some(self.vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vbo));
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(self.ebo));

            let stride = self.layout.stride() as i32;
            let mut offset = 0;

            for (i, (_name, gl_type, _)) in self.layout.fields.iter().enumerate() {
                let size = gl_type.size_in_bytes() as i32;
                let count = gl_type.component_count() as i32;
                let gl_type_enum = gl_type.to_gl_subtype();
                gl.vertex_attrib_pointer_f32(i as u32, count, gl_type_enum, false, stride, offset);
                gl.enable_vertex_attrib_array(i as u32);
                offset += size;
            }

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);
        }
    }

    pub fn bind_for_drawing(&self) {
        unsafe {
            let gl = self.gl.as_ref();
            gl.bind_vertex_array(Some(self.vao));
        }
    }
}

impl std::fmt::Debug for GpuVertexData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "GpuVertexData with {} rows for {} points",
            self.buffer_row_count, self.drawn_point_count
        )?;
        Ok(())
    }
}

impl Drop for GpuVertexData {
    fn drop(&mut self) {
        let gl = self.gl.as_ref();
        unsafe {
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vbo);
            gl.delete_buffer(self.ebo);
        }
    }
}

pub fn convert_u32_to_u8(data: &[u32]) -> &[u8] {
    let len = 4 * data.len();
    let ptr = data.as_ptr() as *const u8;
    unsafe { std::slice::from_raw_parts(ptr, len) }
}
