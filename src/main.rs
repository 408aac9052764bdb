//! Rock Split headless runner
//!
//! Drives the simulation with a simple autopilot and a primitive-counting
//! canvas in place of a window. Useful for soak-testing tuning changes:
//!
//! `RUST_LOG=info rock-split [settings.json]`

use rock_split::renderer::DrawStats;
use rock_split::sim::{self, GameState, Rock, Ship, ShipInput};
use rock_split::{Settings, TypeRegistry};

/// Fixed frame time (60 Hz)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Five minutes of play
const FRAMES: u32 = 60 * 60 * 5;
/// Frames between autopilot shots
const FIRE_EVERY: u32 = 12;

fn main() {
    env_logger::init();
    log::info!("Rock Split (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    let mut registry = sim::setup(settings, 0x5EED);
    let mut stats = DrawStats::default();

    for frame in 0..FRAMES {
        let input = autopilot(&registry, frame);
        *registry.get::<ShipInput>() = input;
        sim::tick(&mut registry, FRAME_DT);
        sim::draw(&registry, &mut stats);
    }

    let state = registry.get_ref::<GameState>();
    log::info!(
        "Finished {} frames: score {}, best {}, {} primitives drawn",
        FRAMES,
        state.score,
        state.best_score,
        stats.total()
    );
}

/// Turn toward the nearest rock, shoot at a fixed cadence, restart on death
fn autopilot(registry: &TypeRegistry, frame: u32) -> ShipInput {
    if !registry.get_ref::<GameState>().is_running {
        return ShipInput {
            restart: true,
            ..Default::default()
        };
    }

    let ship = registry.get_ref::<Ship>();
    let nearest = registry
        .get_ref::<Vec<Rock>>()
        .iter()
        .map(|rock| rock.pos - ship.pos)
        .min_by(|a, b| a.length_squared().total_cmp(&b.length_squared()));

    let Some(to_rock) = nearest else {
        return ShipInput::default();
    };

    // Positive perp_dot means the rock is clockwise of the nose in screen space
    let side = ship.forward().perp_dot(to_rock.normalize_or_zero());
    let aligned = ship.forward().dot(to_rock.normalize_or_zero()) > 0.98;
    ShipInput {
        rotate_right: side > 0.05,
        rotate_left: side < -0.05,
        thrust: !aligned && ship.vel.length() < 40.0 && to_rock.length() > 300.0,
        fire: aligned && frame % FIRE_EVERY == 0,
        restart: false,
    }
}
