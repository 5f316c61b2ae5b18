//! Demonstrates the lifecycle of items in a `Generator`.
//!
//! Particles are manufactured up front, initialized as they are handed out, reset as they are
//! released and regenerated on demand when the generator runs dry.

use recycle_pool::{Options, Template, arrays, generate};

#[derive(Debug, Default)]
struct Particle {
    position: (f32, f32),
    velocity: (f32, f32),
}

fn main() {
    println!("=== Generator lifecycle ===");
    println!();

    let mut particles = generate(
        Template::constructor(Particle::default),
        Options::new()
            .count(4)
            .regenerate_with(|| 2)
            .init(|particle: &mut Particle, (position, velocity): ((f32, f32), (f32, f32))| {
                particle.position = position;
                particle.velocity = velocity;
            })
            .clear(|particle| *particle = Particle::default()),
    );

    println!("Pre-populated particles: {}", particles.count());

    let mut active = Vec::new();
    for i in 0..6_u8 {
        let offset = f32::from(i);
        if let Some(particle) = particles.get_with(((offset, offset), (1.0, 0.5))) {
            active.push(particle);
        }
        println!("Spawned particle {i}, idle particles: {}", particles.count());
    }

    for particle in &active {
        println!("  {particle:?}");
    }

    for particle in active {
        particles.release(particle);
    }

    println!("Idle particles after release: {}", particles.count());

    particles.delete(0.5);
    println!("Idle particles after deleting half: {}", particles.count());

    println!();
    println!("=== Shared vectors ===");
    println!();

    let mut scratch = arrays::get::<u32>();
    scratch.extend(1..=10);
    println!("Scratch vector holds {} items", scratch.len());

    arrays::release(scratch);
    println!("Shared vectors stored: {}", arrays::count::<u32>());

    let scratch = arrays::get::<u32>();
    println!(
        "Reused scratch vector: len {}, capacity {}",
        scratch.len(),
        scratch.capacity()
    );
}
