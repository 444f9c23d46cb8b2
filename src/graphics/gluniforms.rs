#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Vec4([f32; 4]),
    Mat4([[f32; 4]; 4]),
    Int(i32),
}

/// Named shader inputs for one draw call. Kept as a list: there are at most
/// a handful of entries and insertion order matches the upload order.
#[derive(Debug)]
pub struct Uniforms {
    pub data: Vec<(String, UniformValue)>,
}

impl Uniforms {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn add(&mut self, name: &str, value: UniformValue) {
        self.data.push((name.to_string(), value));
    }

    pub fn set(&mut self, name: &str, value: UniformValue) {
        if let Some((_, v)) = self.data.iter_mut().find(|(n, _)| n == name) {
            *v = value;
        } else {
            self.add(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.data.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}

impl Default for Uniforms {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_existing_entry() {
        let mut uniforms = Uniforms::new();
        uniforms.add("input_color", UniformValue::Vec4([1.0, 0.0, 0.0, 1.0]));
        uniforms.set("input_color", UniformValue::Vec4([0.0, 1.0, 0.0, 1.0]));
        assert_eq!(uniforms.data.len(), 1);
        assert_eq!(
            uniforms.get("input_color"),
            Some(&UniformValue::Vec4([0.0, 1.0, 0.0, 1.0]))
        );
    }

    #[test]
    fn get_missing_entry() {
        let uniforms = Uniforms::new();
        assert!(uniforms.get("model").is_none());
    }
}
