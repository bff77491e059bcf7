//! The simulation context driven by the host frame loop.

use crate::grid::Grid;
use crate::params::FieldParams;
use crate::physics;
use crate::pointer::Pointer;
use crate::render::{self, Canvas};

/// Everything one running effect owns: parameters, pointer state, surface
/// size and the current grid.
///
/// The host feeds it pointer-moved and surface-resized notifications between
/// frames and calls [`Simulation::frame`] once per display refresh.
#[derive(Debug, Clone)]
pub struct Simulation {
    params: FieldParams,
    pointer: Pointer,
    width: f32,
    height: f32,
    grid: Grid,
}

impl Simulation {
    /// Start with an absent pointer and a fresh grid for the surface.
    #[must_use]
    pub fn new(params: FieldParams, width: f32, height: f32) -> Self {
        Simulation {
            params,
            pointer: Pointer::new(params.influence_radius),
            width,
            height,
            grid: Grid::build(width, height, params.spacing),
        }
    }

    /// Record the latest pointer position.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.moved(x, y);
    }

    /// Adopt a new surface size and replace the grid.
    ///
    /// Any in-flight displacement is discarded: every point of the new grid
    /// starts at rest.
    pub fn resized(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.grid = Grid::build(width, height, self.params.spacing);
    }

    /// Advance the grid by one step.
    pub fn step(&mut self) {
        physics::step(&mut self.grid, &self.pointer, &self.params);
    }

    /// Draw the current grid.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        render::render(&self.grid, (self.width, self.height), &self.params, canvas);
    }

    /// One full frame: step, then render.
    pub fn frame<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        self.step();
        self.render(canvas);
    }

    /// Current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current pointer state.
    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    /// Current surface size.
    pub fn surface(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Parameters in use.
    pub fn params(&self) -> &FieldParams {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::{DrawCall, RecordingCanvas};

    #[test]
    fn test_new_starts_at_rest_with_absent_pointer() {
        let sim = Simulation::new(FieldParams::default(), 90.0, 60.0);
        assert_eq!(sim.grid().len(), 12);
        assert_eq!(sim.pointer().position(), None);
        assert_eq!(sim.pointer().radius(), 150.0);
        assert!(sim.grid().iter().all(|p| p.is_at_rest()));
    }

    #[test]
    fn test_frames_without_pointer_stay_at_rest() {
        let mut sim = Simulation::new(FieldParams::default(), 90.0, 60.0);
        let mut canvas = RecordingCanvas::default();
        for _ in 0..5 {
            sim.frame(&mut canvas);
        }
        assert!(sim.grid().iter().all(|p| p.is_at_rest()));
        // 5 frames of one clear plus 12 discs each
        assert_eq!(canvas.calls.len(), 5 * 13);
    }

    #[test]
    fn test_frame_steps_before_drawing() {
        let mut sim = Simulation::new(FieldParams::default(), 0.0, 0.0);
        sim.pointer_moved(30.0, 40.0);
        let mut canvas = RecordingCanvas::default();
        sim.frame(&mut canvas);

        let p = sim.grid().points()[0];
        assert_eq!(p.brightness, 170);
        assert_eq!(
            canvas.calls.last(),
            Some(&DrawCall::Disc { x: p.x, y: p.y, radius: 100.0, shade: 170 })
        );
    }

    #[test]
    fn test_resize_discards_displacement() {
        let mut sim = Simulation::new(FieldParams::default(), 90.0, 60.0);
        sim.pointer_moved(45.0, 30.0);
        for _ in 0..10 {
            sim.step();
        }
        assert!(sim.grid().iter().any(|p| !p.is_at_rest()));

        sim.resized(120.0, 90.0);
        assert_eq!(sim.surface(), (120.0, 90.0));
        assert_eq!(sim.grid().len(), 4 * 5);
        assert!(sim.grid().iter().all(|p| p.is_at_rest()));
        // the pointer survives the rebuild
        assert_eq!(sim.pointer().position(), Some((45.0, 30.0)));
    }

    #[test]
    fn test_resize_to_same_size_matches_fresh_grid() {
        let mut sim = Simulation::new(FieldParams::default(), 200.0, 100.0);
        sim.pointer_moved(10.0, 10.0);
        sim.step();
        sim.resized(200.0, 100.0);
        assert_eq!(sim.grid(), &Grid::build(200.0, 100.0, 30.0));
    }

    #[test]
    fn test_render_uses_current_surface() {
        let mut sim = Simulation::new(FieldParams::default(), 10.0, 10.0);
        sim.resized(40.0, 20.0);
        let mut canvas = RecordingCanvas::default();
        sim.render(&mut canvas);
        assert_eq!(canvas.calls[0], DrawCall::Clear { width: 40.0, height: 20.0 });
    }
}
