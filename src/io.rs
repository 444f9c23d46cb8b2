use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::mouse::MouseButton;

use crate::math::Vec2;

/// Input observed by the main loop. Written only by `process_events`, read
/// only by the loop body, both on the same thread.
#[derive(Debug, Default)]
pub struct InputState {
    /// Set by an escape press or a window quit event; the loop checks it
    /// once per frame and terminates after the frame completes.
    pub close_requested: bool,
    /// Left-button presses received this frame, in window coordinates
    /// (origin top-left, y down).
    pub left_clicks: Vec<Vec2>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Folds this frame's SDL events into the input state. Runs synchronously on
/// the loop thread, never concurrently with drawing.
pub fn process_events(state: &mut InputState, events: &[Event]) {
    state.left_clicks.clear();

    for event in events.iter() {
        match event {
            Event::Quit { .. } => {
                state.close_requested = true;
            }
            Event::KeyDown {
                scancode: Some(Scancode::Escape),
                ..
            } => {
                state.close_requested = true;
            }
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                state.left_clicks.push(Vec2::new(*x as f32, *y as f32));
            }
            _ => {}
        }
    }
}
