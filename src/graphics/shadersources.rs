//! Embedded GLSL for the flat-color transform pipeline. The `#version` line
//! is prepended by `GLProgram::from_source` since it differs per platform.

pub const FLAT_VERTEX_SHADER_SOURCE: &str = r#"
    layout (location = 0) in vec3 position;
    uniform mat4 projection;
    uniform mat4 model;
    void main() {
        gl_Position = projection * model * vec4(position, 1.0);
    }"#;

pub const FLAT_FRAG_SHADER_SOURCE: &str = r#"precision mediump float;
    uniform vec4 input_color;
    out vec4 frag_color;
    void main() {
        frag_color = input_color;
    }"#;
