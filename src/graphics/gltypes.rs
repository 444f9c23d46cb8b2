use crate::graphics::gluniforms::UniformValue;

/// Internal representation for OpenGL types used in shaders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GLTypes {
    Float,
    Vec2,
    Vec3,
    Vec4,
    Mat4,
    Int,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsageHint {
    Position,
    Color,
    Custom,
}

impl GLTypes {
    pub fn size_in_bytes(&self) -> usize {
        match self {
            GLTypes::Float => 4,
            GLTypes::Vec2 => 8,
            GLTypes::Vec3 => 12,
            GLTypes::Vec4 => 16,
            GLTypes::Mat4 => 64,
            GLTypes::Int => 4,
        }
    }

    pub fn to_gl_subtype(&self) -> u32 {
        match self {
            GLTypes::Float => glow::FLOAT,
            GLTypes::Vec2 => glow::FLOAT,
            GLTypes::Vec3 => glow::FLOAT,
            GLTypes::Vec4 => glow::FLOAT,
            GLTypes::Mat4 => glow::FLOAT,
            GLTypes::Int => glow::INT,
        }
    }

    pub fn component_count(&self) -> usize {
        match self {
            GLTypes::Float => 1,
            GLTypes::Vec2 => 2,
            GLTypes::Vec3 => 3,
            GLTypes::Vec4 => 4,
            GLTypes::Mat4 => 16,
            GLTypes::Int => 1,
        }
    }

    pub fn matches_value(&self, value: &UniformValue) -> bool {
        matches!(
            (self, value),
            (GLTypes::Float, UniformValue::Float(_))
                | (GLTypes::Vec2, UniformValue::Vec2(_))
                | (GLTypes::Vec3, UniformValue::Vec3(_))
                | (GLTypes::Vec4, UniformValue::Vec4(_))
                | (GLTypes::Mat4, UniformValue::Mat4(_))
                | (GLTypes::Int, UniformValue::Int(_))
        )
    }
}

impl std::fmt::Display for GLTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GLTypes::Float => "float",
            GLTypes::Vec2 => "vec2",
            GLTypes::Vec3 => "vec3",
            GLTypes::Vec4 => "vec4",
            GLTypes::Mat4 => "mat4",
            GLTypes::Int => "int",
        };
        write!(f, "{s}")
    }
}

/// Represents how the bytes of a vertex buffer are supposed to be understood
/// by the GPU. This is akin to a type, but it exists at runtime so that
/// buffer uploads can be checked before they reach the driver.
#[derive(Debug, Clone)]
pub struct DataLayout {
    pub fields: Vec<(String, GLTypes, Option<UsageHint>)>,
}

impl DataLayout {
    pub fn new() -> Self {
        Self { fields: vec![] }
    }

    pub fn add_field(
        &mut self,
        name: &str,
        gl_type: GLTypes,
        usage: Option<UsageHint>,
    ) -> &mut Self {
        self.fields.push((name.to_string(), gl_type, usage));
        self
    }

    /// Returns the size in bytes of one row of the layout
    pub fn stride(&self) -> usize {
        self.fields.iter().map(|(_, t, _)| t.size_in_bytes()).sum()
    }

    /// Checks that vertex data made of whole rows and a triangle index list
    /// stay within each other's bounds for this layout.
    pub fn is_sound(&self, vertices: &[u8], indices: &[u32]) -> Option<String> {
        let stride = self.stride();
        // 0 data per row means the buffer needs to be empty for this to be valid.
        if stride == 0 {
            if vertices.is_empty() && indices.is_empty() {
                return None;
            } else {
                return Some("Layout has no data, but buffer is not empty".to_string());
            }
        }
        if !vertices.len().is_multiple_of(stride) {
            return Some(format!(
                "A row is incomplete, the row is made of {stride} bytes but the vertex buffer has {} bytes",
                vertices.len()
            ));
        }
        if !indices.len().is_multiple_of(3) {
            return Some(
                "Index buffer is not a multiple of 3, but we are drawing triangles".to_string(),
            );
        }
        let vertex_count = vertices.len() / stride;
        for i in indices.iter() {
            if *i as usize >= vertex_count {
                return Some(format!(
                    "Index buffer is not valid, {i} is outside 0..<{vertex_count}, the bounds of the vertex data"
                ));
            }
        }
        None
    }
}

impl std::default::Default for DataLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DataLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, gl_type, usage) in &self.fields {
            if let Some(usage) = usage {
                writeln!(f, "{name}: {gl_type} ({usage:?})")?;
            } else {
                writeln!(f, "{name}: {gl_type}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position_layout() -> DataLayout {
        let mut layout = DataLayout::new();
        layout.add_field("position", GLTypes::Vec3, Some(UsageHint::Position));
        layout
    }

    #[test]
    fn stride_sums_field_sizes() {
        let mut layout = position_layout();
        assert_eq!(layout.stride(), 12);
        layout.add_field("color", GLTypes::Vec4, Some(UsageHint::Color));
        assert_eq!(layout.stride(), 28);
    }

    #[test]
    fn sound_triangle_buffer() {
        let layout = position_layout();
        let vertices = [0u8; 36]; // 3 vec3 rows
        assert!(layout.is_sound(&vertices, &[0, 1, 2]).is_none());
    }

    #[test]
    fn incomplete_row_is_rejected() {
        let layout = position_layout();
        let vertices = [0u8; 35];
        assert!(layout.is_sound(&vertices, &[0, 1, 2]).is_some());
    }

    #[test]
    fn out_of_bounds_index_is_rejected() {
        let layout = position_layout();
        let vertices = [0u8; 36];
        assert!(layout.is_sound(&vertices, &[0, 1, 3]).is_some());
    }

    #[test]
    fn uniform_type_matching() {
        assert!(GLTypes::Vec4.matches_value(&UniformValue::Vec4([0.0; 4])));
        assert!(GLTypes::Mat4.matches_value(&UniformValue::Mat4([[0.0; 4]; 4])));
        assert!(!GLTypes::Vec4.matches_value(&UniformValue::Float(1.0)));
    }
}
