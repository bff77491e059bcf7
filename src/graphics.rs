use elastic_field::{Canvas, FieldParams, Simulation};
use macroquad::prelude::*;
use tracing::info;

use crate::host::HostEvents;

// Function to configure the macroquad window
pub fn window_conf() -> Conf {
    Conf {
        window_title: "Elastic Grid".to_string(),
        window_width: 1280,
        window_height: 720,
        high_dpi: true,
        window_resizable: true,
        ..
        Default::default()
    }
}

/// Draws onto the macroquad default render target.
pub struct MacroquadCanvas;

impl Canvas for MacroquadCanvas {
    fn clear(&mut self, _width: f32, _height: f32) {
        // The surface is the whole window, so a full clear is the same rectangle.
        clear_background(BLACK);
    }

    fn fill_disc(&mut self, x: f32, y: f32, radius: f32, shade: u8) {
        draw_circle(x, y, radius, Color::from_rgba(shade, shade, shade, 255));
    }
}

/// Runs forever: forward host events, step, draw, wait for the next refresh.
pub async fn run_visualization_loop(params: FieldParams) {
    let size = (screen_width(), screen_height());
    let mut sim = Simulation::new(params, size.0, size.1);
    let mut host = HostEvents::new(size, mouse_position());
    let mut canvas = MacroquadCanvas;

    info!(width = size.0, height = size.1, "Visualization loop starting with {}", sim.grid());

    loop {
        host.sync(&mut sim, (screen_width(), screen_height()), mouse_position());
        sim.frame(&mut canvas);

        next_frame().await
    }
}
