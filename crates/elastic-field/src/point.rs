//! Lattice point state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Brightness of a point at rest (white).
pub const REST_BRIGHTNESS: u8 = 255;

/// One node of the lattice: rest position, current position, velocity and
/// displayed brightness.
///
/// The home position is set once by [`Point::at_rest`] and never written by
/// the physics step.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Current x position.
    pub x: f32,
    /// Current y position.
    pub y: f32,
    home_x: f32,
    home_y: f32,
    /// Current x velocity, in surface units per step.
    pub velocity_x: f32,
    /// Current y velocity, in surface units per step.
    pub velocity_y: f32,
    /// Gray level. 255 at rest; while pulled it fades from 255 under the
    /// pointer to 0 at the edge of the influence radius.
    pub brightness: u8,
}

impl Point {
    /// A point sitting still at `(x, y)`, which also becomes its home.
    #[must_use]
    pub const fn at_rest(x: f32, y: f32) -> Self {
        Point {
            x,
            y,
            home_x: x,
            home_y: y,
            velocity_x: 0.0,
            velocity_y: 0.0,
            brightness: REST_BRIGHTNESS,
        }
    }

    /// Rest x position.
    #[must_use]
    pub const fn home_x(&self) -> f32 {
        self.home_x
    }

    /// Rest y position.
    #[must_use]
    pub const fn home_y(&self) -> f32 {
        self.home_y
    }

    /// Vector from the current position back to home.
    #[must_use]
    pub fn displacement(&self) -> (f32, f32) {
        (self.home_x - self.x, self.home_y - self.y)
    }

    /// Whether the point is within `threshold` of home on both axes.
    #[must_use]
    pub fn is_settled(&self, threshold: f32) -> bool {
        let (dx, dy) = self.displacement();
        libm::fabsf(dx) < threshold && libm::fabsf(dy) < threshold
    }

    /// Whether the point is exactly in its rest state.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.x == self.home_x
            && self.y == self.home_y
            && self.velocity_x == 0.0
            && self.velocity_y == 0.0
            && self.brightness == REST_BRIGHTNESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_rest() {
        let p = Point::at_rest(30.0, 60.0);
        assert_eq!(p.home_x(), 30.0);
        assert_eq!(p.home_y(), 60.0);
        assert_eq!(p.brightness, REST_BRIGHTNESS);
        assert!(p.is_at_rest());
    }

    #[test]
    fn test_settled_is_strict_per_axis() {
        let mut p = Point::at_rest(0.0, 0.0);
        p.x = 0.5;
        p.y = -0.99;
        assert!(p.is_settled(1.0));
        assert!(!p.is_at_rest());

        p.y = 1.0; // exactly on the threshold is not settled
        assert!(!p.is_settled(1.0));
    }
}
