//! Particle burst demo: spawns all three populations and prints how they
//! decay over a simulated 30 seconds.
//!
//! Run with: `cargo run --example burst`

use fiesta::prelude::*;

fn main() {
    env_logger::init();

    let mut system = ParticleSystem::new(Viewport::new(1280.0, 720.0)).with_seed(42);
    system.spawn_all();

    println!("frame  confetti  hearts  sparkles");
    let mut elapsed = 0.0f32;
    for frame in 0..1875u32 {
        elapsed += 0.016;
        system.tick(elapsed);

        if frame % 125 == 0 {
            println!(
                "{:>5}  {:>8}  {:>6}  {:>8}",
                frame,
                system.confetti().len(),
                system.hearts().len(),
                system.sparkles().len()
            );
        }
    }
}
