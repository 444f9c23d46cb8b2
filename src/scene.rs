use rand::Rng;

use crate::math::{Mat4, Vec2};

/// One drawable triangle: where the shared shape goes, how big, how rotated,
/// and in what color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Instance {
    /// Window pixel coordinates, origin bottom-left, y up.
    pub position: Vec2,
    /// Extent multiplier applied to the shape, in pixels.
    pub scale: Vec2,
    /// Degrees, counter-clockwise.
    pub rotation: f32,
    /// RGBA, each channel in [0, 1].
    pub color: [f32; 4],
}

impl Instance {
    pub const fn new(position: Vec2, scale: Vec2, rotation: f32, color: [f32; 4]) -> Self {
        Self {
            position,
            scale,
            rotation,
            color,
        }
    }

    /// Builds an instance from a click in window coordinates (y down). The y
    /// axis is flipped into render space and the color is drawn at random.
    /// Clicks outside the framebuffer are not rejected: the instance is
    /// appended anyway and simply never becomes visible.
    pub fn from_click<R: Rng>(
        click: Vec2,
        window_height: f32,
        scale: Vec2,
        rng: &mut R,
    ) -> Self {
        Self {
            position: Vec2::new(click.x(), window_height - click.y()),
            scale,
            rotation: 0.0,
            color: random_opaque_color(rng),
        }
    }

    /// Model matrix: translate, then rotate about Z, then scale. Composed in
    /// that fixed order so one unit shape can stand in for every triangle.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::translation(self.position)
            * Mat4::rotation_z(self.rotation.to_radians())
            * Mat4::scaling(self.scale)
    }
}

/// An opaque color with each channel drawn uniformly from the 100-step
/// discrete set {0.00, 0.01, .., 0.99}.
pub fn random_opaque_color<R: Rng>(rng: &mut R) -> [f32; 4] {
    let mut channel = || rng.random_range(0..100) as f32 / 100.0;
    [channel(), channel(), channel(), 1.0]
}

/// Append-only list of instances. Iteration order is insertion order, which
/// is also the paint order on screen.
#[derive(Debug, Default)]
pub struct Scene {
    instances: Vec<Instance>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_instances(instances: Vec<Instance>) -> Self {
        Self { instances }
    }

    pub fn push(&mut self, instance: Instance) {
        self.instances.push(instance);
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instance> {
        self.instances.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SHAPE_VERTICES: [[f32; 3]; 3] = [[-0.1, -0.1, 0.0], [0.1, -0.1, 0.0], [0.0, 0.1, 0.0]];

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-3, "{a} != {b}");
    }

    #[test]
    fn model_matrix_composes_translate_rotate_scale() {
        for rotation in [0.0f32, 30.0, -45.0, 90.0, 360.0] {
            let instance = Instance::new(
                Vec2::new(200.0, 100.0),
                Vec2::new(100.0, 150.0),
                rotation,
                [0.0, 1.0, 0.0, 1.0],
            );
            let model = instance.model_matrix();
            for local in SHAPE_VERTICES {
                let world = model.transform_point(local);
                // Direct geometric formula: scale, rotate, then translate.
                let scaled = Vec2::new(local[0], local[1]) * instance.scale;
                let expected = scaled.rotated(rotation.to_radians()) + instance.position;
                assert_close(world[0], expected.x());
                assert_close(world[1], expected.y());
                assert_close(world[2], 0.0);
            }
        }
    }

    #[test]
    fn example_instance_lands_on_known_pixels() {
        let instance = Instance::new(
            Vec2::new(400.0, 300.0),
            Vec2::new(300.0, 300.0),
            0.0,
            [1.0, 0.0, 0.0, 1.0],
        );
        let model = instance.model_matrix();
        let world = model.transform_point([-0.1, -0.1, 0.0]);
        assert_close(world[0], 370.0);
        assert_close(world[1], 270.0);
        assert_close(world[2], 0.0);

        let apex = model.transform_point([0.0, 0.1, 0.0]);
        assert_close(apex[0], 400.0);
        assert_close(apex[1], 330.0);
    }

    #[test]
    fn iteration_order_is_insertion_order() {
        let a = Instance::new(Vec2::new(1.0, 0.0), Vec2::one(), 0.0, [1.0, 0.0, 0.0, 1.0]);
        let b = Instance::new(Vec2::new(2.0, 0.0), Vec2::one(), 0.0, [0.0, 1.0, 0.0, 1.0]);
        let c = Instance::new(Vec2::new(3.0, 0.0), Vec2::one(), 0.0, [0.0, 0.0, 1.0, 1.0]);

        let mut scene = Scene::new();
        scene.push(a);
        scene.push(b);
        scene.push(c);

        let order: Vec<f32> = scene.iter().map(|i| i.position.x()).collect();
        assert_eq!(order, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn clicks_append_one_instance_each() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut scene = Scene::new();
        let window_height = 600.0;
        let clicks = [
            Vec2::new(10.0, 20.0),
            Vec2::new(400.0, 300.0),
            Vec2::new(799.0, 599.0),
            // Outside the framebuffer: still appended, never visible.
            Vec2::new(-50.0, 1000.0),
        ];

        for (n, click) in clicks.iter().enumerate() {
            let instance =
                Instance::from_click(*click, window_height, Vec2::new(50.0, 50.0), &mut rng);
            scene.push(instance);
            assert_eq!(scene.len(), n + 1);
        }

        for (instance, click) in scene.iter().zip(clicks.iter()) {
            assert_eq!(instance.position.x(), click.x());
            assert_eq!(instance.position.y(), window_height - click.y());
            assert_eq!(instance.rotation, 0.0);
        }
    }

    #[test]
    fn random_colors_stay_on_the_coarse_grid() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let color = random_opaque_color(&mut rng);
            for channel in &color[0..3] {
                assert!((0.0..=0.99).contains(channel), "channel {channel} out of range");
                // Multiples of 1/100 only.
                let steps = channel * 100.0;
                assert!((steps - steps.round()).abs() < 1e-4);
            }
            assert_eq!(color[3], 1.0);
        }
    }
}
