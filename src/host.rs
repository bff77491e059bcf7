use elastic_field::Simulation;
use tracing::{debug, info};

/// Turns the host's polled pointer position and surface size into the
/// pointer-moved and surface-resized notifications the simulation expects.
///
/// The host reports some mouse position from the very first frame. It is
/// only forwarded once it differs from that first reading, so the pointer
/// stays absent until the user actually moves it.
pub struct HostEvents {
    size: (f32, f32),
    mouse: (f32, f32),
    pointer_seen: bool,
}

impl HostEvents {
    pub fn new(size: (f32, f32), mouse: (f32, f32)) -> Self {
        HostEvents { size, mouse, pointer_seen: false }
    }

    /// Forward whatever changed since the previous frame.
    pub fn sync(&mut self, sim: &mut Simulation, size: (f32, f32), mouse: (f32, f32)) {
        if mouse != self.mouse {
            if !self.pointer_seen {
                self.pointer_seen = true;
                debug!(x = mouse.0, y = mouse.1, "First pointer movement");
            }
            self.mouse = mouse;
            sim.pointer_moved(mouse.0, mouse.1);
        }

        if size != self.size {
            self.size = size;
            sim.resized(size.0, size.1);
            info!(width = size.0, height = size.1, "Surface resized, rebuilt {}", sim.grid());
        }
    }
}
