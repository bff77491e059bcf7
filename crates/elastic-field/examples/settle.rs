use elastic_field::{FieldParams, Simulation};

fn main() {
    // A single point at the origin, pointer parked 60 units away for a while
    let mut sim = Simulation::new(FieldParams::default(), 0.0, 0.0);
    sim.pointer_moved(60.0, 0.0);

    println!("step      x        vx   shade");
    for step in 0..120 {
        if step == 30 {
            // Move the pointer out of range so the spring takes over
            sim.pointer_moved(1000.0, 1000.0);
            println!("---- pointer released ----");
        }
        sim.step();

        let p = sim.grid().points()[0];
        if step % 5 == 0 {
            let bar = "#".repeat((p.x.max(0.0) / 2.0) as usize);
            println!("{:4} {:8.2} {:8.3} {:7} {}", step, p.x, p.velocity_x, p.brightness, bar);
        }
    }

    let p = sim.grid().points()[0];
    println!("\nFinal: x={:.3} y={:.3} settled={}", p.x, p.y, p.is_settled(1.0));
}
