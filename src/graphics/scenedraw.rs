use std::sync::Arc;

use crate::{
    graphics::{
        glbuffer::GpuVertexData,
        gldraw::DrawingTarget,
        glprogram::GLProgram,
        gltypes::{DataLayout, GLTypes, UsageHint},
        gluniforms::{UniformValue, Uniforms},
        shadersources::{FLAT_FRAG_SHADER_SOURCE, FLAT_VERTEX_SHADER_SOURCE},
        shape::Triangle2,
    },
    math::Mat4,
    scene::Scene,
};

/// Draws a scene of triangle instances: one shader program, one shared shape
/// buffer, one draw call per instance. The projection matrix is uploaded
/// once at construction and never again.
pub struct SceneDraw2d {
    program: GLProgram,
    mesh: GpuVertexData,
    pub drawing_target: DrawingTarget,
}

impl SceneDraw2d {
    pub fn new(
        gl: &Arc<glow::Context>,
        shape: &Triangle2,
        projection: Mat4,
    ) -> Result<Self, String> {
        let mut program =
            GLProgram::from_source(gl, FLAT_VERTEX_SHADER_SOURCE, FLAT_FRAG_SHADER_SOURCE)?;
        let mut layout = DataLayout::new();
        layout.add_field("position", GLTypes::Vec3, Some(UsageHint::Position));
        program.vertex_layout = layout;

        let mut mesh = GpuVertexData::new(gl);
        mesh.apply_layout(program.vertex_layout.clone());
        mesh.set_data(&shape.vertex_data(), &Triangle2::INDICES)?;

        let mut session_uniforms = Uniforms::new();
        session_uniforms.add("projection", UniformValue::Mat4(projection.cols()));
        program.use_program();
        program.set_uniforms(&session_uniforms);
        program.stop_using();

        let drawing_target = DrawingTarget::new(gl);

        Ok(Self {
            program,
            mesh,
            drawing_target,
        })
    }

    /// One draw call per instance, in list order. Later instances paint over
    /// earlier ones.
    pub fn draw_scene(&self, scene: &Scene) {
        for instance in scene.iter() {
            let mut uniforms = Uniforms::new();
            uniforms.add(
                "model",
                UniformValue::Mat4(instance.model_matrix().cols()),
            );
            uniforms.add("input_color", UniformValue::Vec4(instance.color));
            self.drawing_target.draw(&self.mesh, &self.program, &uniforms);
        }
    }
}
