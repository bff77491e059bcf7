#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library for a pointer-reactive elastic point lattice."]
#![doc = ""]
#![doc = "A grid of points is pulled toward a pointer that comes within the influence"]
#![doc = "radius, springs back to rest once the pointer leaves, and is drawn as a set of"]
#![doc = "gray discs whose shade encodes the pointer distance. The host supplies a"]
#![doc = "[`Canvas`] and calls [`Simulation::frame`] once per display refresh."]

extern crate alloc;

pub mod error;
pub mod grid;
pub mod params;
pub mod physics;
pub mod point;
pub mod pointer;
pub mod render;
pub mod simulation;

pub use error::FieldError;
pub use grid::Grid;
pub use params::FieldParams;
pub use point::Point;
pub use pointer::Pointer;
pub use render::Canvas;
pub use simulation::Simulation;
