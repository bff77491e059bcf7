//! Drawing the grid onto an immediate-mode surface.

use crate::grid::Grid;
use crate::params::FieldParams;

/// Outbound drawing port: the two primitives the renderer needs from a host
/// surface.
pub trait Canvas {
    /// Clear the rectangle `(0, 0)` to `(width, height)`.
    fn clear(&mut self, width: f32, height: f32);

    /// Fill an opaque disc of `radius` centered at `(x, y)` with the gray
    /// level `shade` on every channel.
    fn fill_disc(&mut self, x: f32, y: f32, radius: f32, shade: u8);
}

/// Clear the surface, then draw one disc per point in grid order.
///
/// There is no depth sorting; later discs cover earlier ones where they
/// overlap.
pub fn render<C: Canvas + ?Sized>(
    grid: &Grid,
    surface: (f32, f32),
    params: &FieldParams,
    canvas: &mut C,
) {
    canvas.clear(surface.0, surface.1);
    for point in grid {
        canvas.fill_disc(point.x, point.y, params.disc_radius, point.brightness);
    }
}

/// A canvas that records every call, for tests.
#[cfg(test)]
pub(crate) mod recording {
    use super::Canvas;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Clear { width: f32, height: f32 },
        Disc { x: f32, y: f32, radius: f32, shade: u8 },
    }

    #[derive(Debug, Default)]
    pub struct RecordingCanvas {
        pub calls: Vec<DrawCall>,
    }

    impl RecordingCanvas {
        pub fn discs(&self) -> impl Iterator<Item = &DrawCall> {
            self.calls.iter().filter(|c| matches!(c, DrawCall::Disc { .. }))
        }
    }

    impl Canvas for RecordingCanvas {
        fn clear(&mut self, width: f32, height: f32) {
            self.calls.push(DrawCall::Clear { width, height });
        }

        fn fill_disc(&mut self, x: f32, y: f32, radius: f32, shade: u8) {
            self.calls.push(DrawCall::Disc { x, y, radius, shade });
        }
    }
}
