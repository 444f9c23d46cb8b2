//! Variant 1: a fixed gallery of statically transformed triangles.

use std::path::Path;

use anyhow::Result;

use deltoy::config;
use deltoy::console;
use deltoy::graphics::scenedraw::SceneDraw2d;
use deltoy::graphics::shape::Triangle2;
use deltoy::init_sdl;
use deltoy::io::{self, InputState};
use deltoy::math::{Mat4, Vec2};
use deltoy::scene::{Instance, Scene};

const SHAPE: Triangle2 = Triangle2::new(
    Vec2::new(-0.1, -0.1),
    Vec2::new(0.1, -0.1),
    Vec2::new(0.0, 0.1),
);

fn fixed_scene() -> Scene {
    Scene::from_instances(vec![
        Instance::new(
            Vec2::new(400.0, 300.0),
            Vec2::new(300.0, 300.0),
            0.0,
            [1.0, 0.0, 0.0, 1.0],
        ),
        Instance::new(
            Vec2::new(200.0, 100.0),
            Vec2::new(100.0, 100.0),
            30.0,
            [0.0, 1.0, 0.0, 1.0],
        ),
        Instance::new(
            Vec2::new(600.0, 400.0),
            Vec2::new(150.0, 150.0),
            -45.0,
            [0.0, 0.0, 1.0, 1.0],
        ),
    ])
}

pub fn main() -> Result<()> {
    let mut config = config::load_or_default(Path::new("deltoy.toml"));
    config.title = format!("{} - transform gallery", config.title);

    let mut rendering = init_sdl(&config)?;
    console::consume_logs(|log| println!("{log}"));

    let projection = Mat4::ortho(
        0.0,
        config.screen_width as f32,
        0.0,
        config.screen_height as f32,
        -1.0,
        1.0,
    );
    let renderer = match SceneDraw2d::new(&rendering.gl, &SHAPE, projection) {
        Ok(renderer) => renderer,
        Err(cause) => {
            console::print_err(cause);
            console::consume_logs(|log| println!("{log}"));
            anyhow::bail!("could not build the triangle pipeline");
        }
    };

    let scene = fixed_scene();
    let mut input = InputState::new();

    while !input.close_requested {
        let events = rendering.event_pump.poll_iter().collect::<Vec<_>>();
        io::process_events(&mut input, &events);

        renderer.drawing_target.reset_draw_call_counter();
        renderer.drawing_target.clear(0.0, 0.0, 0.0, 1.0);
        renderer.draw_scene(&scene);
        debug_assert_eq!(renderer.drawing_target.get_draw_call_counter(), scene.len());

        console::consume_logs(|log| println!("{log}"));
        rendering.window.gl_swap_window();
    }

    Ok(())
}
