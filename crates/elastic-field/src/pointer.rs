//! Pointer position and the influence test.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pointer state: an optional position plus the influence radius.
///
/// The position is `None` until the first pointer-moved notification.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    position: Option<(f32, f32)>,
    radius: f32,
}

/// Relation between a point and a pointer that is close enough to pull it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Influence {
    /// Pointer x minus point x.
    pub dx: f32,
    /// Pointer y minus point y.
    pub dy: f32,
    /// Euclidean length of `(dx, dy)`, strictly below the radius.
    pub distance: f32,
}

impl Pointer {
    /// A pointer that has not been seen yet.
    #[must_use]
    pub const fn new(radius: f32) -> Self {
        Pointer { position: None, radius }
    }

    /// Overwrite the position with the coordinates of a move event.
    pub fn moved(&mut self, x: f32, y: f32) {
        self.position = Some((x, y));
    }

    /// Last known position, if any.
    #[must_use]
    pub const fn position(&self) -> Option<(f32, f32)> {
        self.position
    }

    /// Influence radius.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Pull vector from `(x, y)` toward the pointer.
    ///
    /// Returns `None` when the pointer is absent or at least `radius` away.
    /// An absent pointer short-circuits before any distance is computed.
    #[must_use]
    pub fn influence(&self, x: f32, y: f32) -> Option<Influence> {
        let (px, py) = self.position?;
        let dx = px - x;
        let dy = py - y;
        let distance = libm::sqrtf(dx * dx + dy * dy);
        (distance < self.radius).then_some(Influence { dx, dy, distance })
    }
}
