use glam::Vec2;
use sprung::prelude::*;

const DT: f32 = 1.0 / 240.0;
const STEPS: usize = 2_400;
const LOG_EVERY: usize = 240;
const CHAIN_LEN: u32 = 12;
const GRAVITY: Vec2 = Vec2::new(0.0, -9.81);

fn init_logging() {
    let mut builder = env_logger::Builder::new();

    match std::env::var("RUST_LOG") {
        Ok(filter) => builder.parse_filters(&filter),
        Err(_) => builder.filter_level(log::LevelFilter::Info),
    };

    builder.init();
}

fn main() -> Result<(), sprung::Error> {
    init_logging();

    // A horizontal chain pinned at its first part, falling under gravity.
    let mut system = System::<Vec2, f32>::with_constants(SpringConstants::new(400.0, 2.0));
    for i in 0..CHAIN_LEN {
        system.create_part(Vec2::new(i as f32 * 0.25, 0.0));
    }
    for i in 1..CHAIN_LEN {
        system.create_link(i - 1, i)?;
    }

    log::info!(
        "simulating {} parts and {} links",
        system.part_count(),
        system.link_count()
    );

    let mut forces = Vec::with_capacity(system.part_count());

    for step in 1..=STEPS {
        system.check_geometry()?;
        compute_forces_into(&system, &mut forces);

        // Integrating using the semi-implicit Euler method, skipping the pinned part.
        for (part, force) in system.parts_mut().iter_mut().zip(&forces).skip(1) {
            part.velocity += (*force / part.mass + GRAVITY) * DT;
            part.position += part.velocity * DT;
        }

        if step % LOG_EVERY == 0 {
            let tail = system.part(CHAIN_LEN - 1)?;
            log::info!(
                "t = {:.2}s, tail position = {:?}, tail velocity = {:?}",
                step as f32 * DT,
                tail.position,
                tail.velocity
            );
        }
    }

    Ok(())
}
