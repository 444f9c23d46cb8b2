//! Variant 2: left-click anywhere to spawn a triangle with a random color.

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
    Vec2::new(-0.5, -0.5),
    Vec2::new(0.5, -0.5),
    Vec2::new(0.0, 0.5),
);

/// Every spawned triangle gets the same extent; only position and color vary.
const SPAWN_SCALE: Vec2 = Vec2::new(50.0, 50.0);

pub fn main() -> Result<()> {
    let mut config = config::load_or_default(Path::new("deltoy.toml"));
    config.title = format!("{} - click to spawn", config.title);

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

    let mut rng = rand::rng();
    let mut scene = Scene::new();
    let mut input = InputState::new();
    let window_height = config.screen_height as f32;

    while !input.close_requested {
        let events = rendering.event_pump.poll_iter().collect::<Vec<_>>();
        io::process_events(&mut input, &events);

        // Clicks land in window coordinates (y down); from_click flips them
        // into render space. Off-screen clicks append too.
        for click in &input.left_clicks {
            scene.push(Instance::from_click(
                *click,
                window_height,
                SPAWN_SCALE,
                &mut rng,
            ));
        }

        renderer.drawing_target.reset_draw_call_counter();
        renderer.drawing_target.clear(0.0, 0.0, 0.0, 1.0);
        renderer.draw_scene(&scene);
        debug_assert_eq!(renderer.drawing_target.get_draw_call_counter(), scene.len());

        console::consume_logs(|log| println!("{log}"));
        rendering.window.gl_swap_window();
    }

    Ok(())
}
