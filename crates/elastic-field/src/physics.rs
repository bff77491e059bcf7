//! One fixed simulation step per frame.
//!
//! There is no delta-time: the host refresh interval is the step. Points do
//! not interact with each other, so the grid update is a plain loop over
//! independent per-point transitions.

use crate::grid::Grid;
use crate::params::FieldParams;
use crate::point::{Point, REST_BRIGHTNESS};
use crate::pointer::Pointer;

/// Brightness of a point at `distance` from the pointer.
///
/// `round(255 * (1 - min(1, distance / radius)))`. Callers only pass
/// distances below a positive radius.
#[must_use]
pub fn brightness_at(distance: f32, radius: f32) -> u8 {
    let ratio = (distance / radius).min(1.0);
    libm::roundf(255.0 * (1.0 - ratio)) as u8
}

/// Advance a single point by one step.
pub fn step_point(point: &mut Point, pointer: &Pointer, params: &FieldParams) {
    match pointer.influence(point.x, point.y) {
        Some(inf) => {
            let force = (pointer.radius() - inf.distance) / pointer.radius();
            point.velocity_x += force * inf.dx * params.pull_gain;
            point.velocity_y += force * inf.dy * params.pull_gain;
            point.brightness = brightness_at(inf.distance, pointer.radius());
        }
        None => {
            let (dx_home, dy_home) = point.displacement();
            point.velocity_x += dx_home * params.spring_gain;
            point.velocity_y += dy_home * params.spring_gain;

            // Brightness only snaps back once the point is positionally home,
            // leaving the radius alone does not reset it.
            if point.is_settled(params.settle_threshold) {
                point.brightness = REST_BRIGHTNESS;
            }
        }
    }

    point.x += point.velocity_x;
    point.y += point.velocity_y;

    point.velocity_x *= params.damping;
    point.velocity_y *= params.damping;
}

/// Advance every point of `grid` by one step, in grid order.
pub fn step(grid: &mut Grid, pointer: &Pointer, params: &FieldParams) {
    for point in grid.points_mut() {
        step_point(point, pointer, params);
    }
}
