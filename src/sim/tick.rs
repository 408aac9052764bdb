//! Frame tick
//!
//! Wires a fresh registry, advances it one frame at a time and draws it.
//! Everything the tick touches is fetched from the registry by type.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::bullet::Bullet;
use super::entity::Entity;
use super::rock::{Rock, RockShapes};
use super::ship::Ship;
use super::state::{Camera, GameState, ShipInput, Spawner};
use crate::renderer::Canvas;
use crate::{Settings, TypeRegistry, from_polar};

/// Position, velocity and spin of the rock every session opens with
const OPENING_ROCK: (Vec2, Vec2, f32) = (Vec2::new(150.0, 150.0), Vec2::new(25.0, 25.0), 30.0);

/// Build a registry holding every piece of game state
pub fn setup(settings: Settings, seed: u64) -> TypeRegistry {
    log::info!("Setting up game (seed {})", seed);
    let mut registry = TypeRegistry::new();
    let settings = settings.validated();
    let spawner = Spawner::new(settings.spawn_interval);
    registry.register_or_replace(settings);
    registry.register_or_replace(Pcg32::seed_from_u64(seed));
    registry.register_or_replace(RockShapes::new());
    registry.register_or_replace(GameState::new());
    registry.register_or_replace(ShipInput::default());
    registry.register_or_replace(spawner);
    reset_run(&mut registry);

    let (pos, vel, spin) = OPENING_ROCK;
    let size = registry.get_ref::<Settings>().rock_spawn_size;
    let rock = make_rock(&mut registry, pos, vel, spin, size);
    registry.get::<Vec<Rock>>().push(rock);
    registry
}

/// Replace the ship, entity lists and camera with fresh values and restart
/// scoring. The best score and the spawner's pace carry over.
pub fn reset_run(registry: &mut TypeRegistry) {
    let settings = registry.get_ref::<Settings>();
    let center = settings.center();
    let ship = Ship::new(center, settings.ship_scale);

    registry.register_or_replace(ship);
    registry.register_or_replace(Vec::<Bullet>::new());
    registry.register_or_replace(Vec::<Rock>::new());
    registry.register_or_replace(Camera { target: center });
    registry.get::<GameState>().restart();
}

/// Build a rock with the configured outline, scale and lifetime
pub fn make_rock(registry: &mut TypeRegistry, pos: Vec2, vel: Vec2, spin: f32, size: u8) -> Rock {
    let settings = registry.get_ref::<Settings>();
    let (sides, scale, lifetime) = (settings.rock_sides, settings.rock_scale, settings.rock_lifetime);
    let shape = registry.with_detached::<RockShapes, _>(|shapes, reg| {
        shapes.pick(sides, reg.get::<Pcg32>())
    });
    let mut rock = Rock::new(pos, vel, spin, size, shape);
    rock.scale = scale;
    rock.lifetime = lifetime;
    rock
}

/// A rock on a random bearing, half a screen from the ship, flying back at it
pub fn spawn_random_rock(registry: &mut TypeRegistry) -> Rock {
    let settings = registry.get_ref::<Settings>().clone();
    let ship = registry.get_ref::<Ship>();
    let (ship_pos, ship_vel) = (ship.pos, ship.vel);

    let rng = registry.get::<Pcg32>();
    let bearing = rng.random::<f32>() * TAU;
    let speed = rng.random_range(settings.rock_min_speed..=settings.rock_max_speed);
    let spin = rng.random_range(-settings.rock_max_spin..=settings.rock_max_spin) as f32;

    let offset = from_polar(settings.width.max(settings.height) / 2.0, bearing);
    let vel = ship_vel - offset.normalize() * speed;
    log::debug!("Spawning rock at bearing {:.2} rad, speed {:.0}", bearing, speed);
    make_rock(registry, ship_pos + offset, vel, spin, settings.rock_spawn_size)
}

/// Update every entity in the registered `Vec<E>`, dropping those that die
pub fn update_all<E: Entity + 'static>(registry: &mut TypeRegistry, dt: f32) {
    registry.with_detached::<Vec<E>, _>(|entities, reg| {
        entities.retain_mut(|entity| entity.update(dt, reg));
    });
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(registry: &mut TypeRegistry, dt: f32) {
    if !registry.get_ref::<GameState>().is_running {
        if registry.get_ref::<ShipInput>().restart {
            reset_run(registry);
            log::info!("Run restarted");
        }
        return;
    }

    registry.get::<GameState>().elapsed += dt;
    registry.with_detached::<Ship, _>(|ship, reg| ship.update(dt, reg));
    let ship_pos = registry.get_ref::<Ship>().pos;
    registry.get::<Camera>().target = ship_pos;

    let settings = registry.get_ref::<Settings>();
    let (step, min_interval) = (settings.spawn_interval_step, settings.min_spawn_interval);
    if registry.get::<Spawner>().advance(dt, step, min_interval) {
        let rock = spawn_random_rock(registry);
        registry.get::<Vec<Rock>>().push(rock);
    }

    update_all::<Bullet>(registry, dt);
    update_all::<Rock>(registry, dt);
}

/// Draw the ship, bullets and rocks
pub fn draw(registry: &TypeRegistry, canvas: &mut dyn Canvas) {
    registry.get_ref::<Ship>().draw(canvas);
    for bullet in registry.get_ref::<Vec<Bullet>>() {
        bullet.draw(canvas);
    }
    for rock in registry.get_ref::<Vec<Rock>>() {
        rock.draw(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::renderer::DrawStats;
    use std::sync::Arc;

    const DT: f32 = 1.0 / 60.0;

    fn fresh() -> TypeRegistry {
        setup(Settings::default(), 12345)
    }

    fn place_rock(registry: &mut TypeRegistry, pos: Vec2, size: u8) {
        let rock = make_rock(registry, pos, Vec2::ZERO, 0.0, size);
        registry.get::<Vec<Rock>>().push(rock);
    }

    #[test]
    fn test_setup_registers_everything() {
        let registry = fresh();
        assert!(registry.contains::<Settings>());
        assert!(registry.contains::<Pcg32>());
        assert!(registry.contains::<RockShapes>());
        assert!(registry.contains::<ShipInput>());
        assert!(registry.contains::<Spawner>());
        assert!(registry.contains::<Camera>());
        assert!(registry.get_ref::<Vec<Bullet>>().is_empty());

        let state = registry.get_ref::<GameState>();
        assert!(state.is_running);
        assert_eq!(state.score, 0);

        let rocks = registry.get_ref::<Vec<Rock>>();
        assert_eq!(rocks.len(), 1);
        assert_eq!(rocks[0].pos, Vec2::new(150.0, 150.0));
        assert_eq!(rocks[0].size, ROCK_SPAWN_SIZE);
        assert_eq!(registry.get_ref::<Ship>().pos, Vec2::new(500.0, 500.0));
    }

    #[test]
    fn test_bullet_splits_rock_through_tick() {
        let mut registry = fresh();
        registry.get::<Vec<Rock>>().clear();
        place_rock(&mut registry, Vec2::new(100.0, 100.0), 8);
        registry
            .get::<Vec<Bullet>>()
            .push(Bullet::new(Vec2::new(100.0, 100.0), Vec2::ZERO));

        tick(&mut registry, DT);

        assert!(registry.get_ref::<Vec<Bullet>>().is_empty());
        let rocks = registry.get_ref::<Vec<Rock>>();
        assert_eq!(rocks.len(), 2);
        assert!(rocks.iter().all(|r| r.size == 4));
        assert!(Arc::ptr_eq(rocks[0].shape(), rocks[1].shape()));
        assert_eq!(registry.get_ref::<GameState>().score, 1);
    }

    #[test]
    fn test_smallest_rock_shatters() {
        let mut registry = fresh();
        registry.get::<Vec<Rock>>().clear();
        place_rock(&mut registry, Vec2::new(100.0, 100.0), ROCK_MIN_SPLIT_SIZE);
        registry
            .get::<Vec<Bullet>>()
            .push(Bullet::new(Vec2::new(100.0, 100.0), Vec2::ZERO));

        tick(&mut registry, DT);

        assert!(registry.get_ref::<Vec<Rock>>().is_empty());
        assert_eq!(registry.get_ref::<GameState>().score, 1);
    }

    #[test]
    fn test_expired_entities_are_dropped() {
        let mut registry = fresh();
        registry.get::<Vec<Rock>>()[0].alive_time = ROCK_LIFETIME + 0.01;
        let mut bullet = Bullet::new(Vec2::new(900.0, 900.0), Vec2::ZERO);
        bullet.alive_time = BULLET_LIFETIME + 0.01;
        registry.get::<Vec<Bullet>>().push(bullet);

        tick(&mut registry, DT);

        assert!(registry.get_ref::<Vec<Rock>>().is_empty());
        assert!(registry.get_ref::<Vec<Bullet>>().is_empty());
    }

    #[test]
    fn test_fire_through_tick() {
        let mut registry = fresh();
        registry.get::<ShipInput>().fire = true;
        tick(&mut registry, DT);

        let bullets = registry.get_ref::<Vec<Bullet>>();
        assert_eq!(bullets.len(), 1);
        let ship_pos = registry.get_ref::<Ship>().pos;
        assert!(bullets[0].pos.y < ship_pos.y - SHIP_SCALE);
    }

    #[test]
    fn test_camera_follows_ship() {
        let mut registry = fresh();
        registry.get::<ShipInput>().thrust = true;
        for _ in 0..30 {
            tick(&mut registry, DT);
        }
        let ship_pos = registry.get_ref::<Ship>().pos;
        assert!(ship_pos.y < HEIGHT / 2.0);
        assert_eq!(registry.get_ref::<Camera>().target, ship_pos);
    }

    #[test]
    fn test_collision_ends_run_and_restart_resets() {
        let mut registry = fresh();
        registry.get::<GameState>().score = 6;
        place_rock(&mut registry, Vec2::new(500.0, 500.0), 8);

        tick(&mut registry, DT);
        let state = registry.get_ref::<GameState>().clone();
        assert!(!state.is_running);
        assert_eq!(state.best_score, 6);
        assert_eq!(state.elapsed, DT);

        // Frozen until restart
        let rocks_before = registry.get_ref::<Vec<Rock>>().len();
        tick(&mut registry, DT);
        assert_eq!(registry.get_ref::<Vec<Rock>>().len(), rocks_before);

        registry.get::<ShipInput>().restart = true;
        tick(&mut registry, DT);
        let state = registry.get_ref::<GameState>();
        assert!(state.is_running);
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 6);
        assert!(registry.get_ref::<Vec<Rock>>().is_empty());
        assert_eq!(registry.get_ref::<Ship>().pos, Vec2::new(500.0, 500.0));
    }

    #[test]
    fn test_spawner_adds_rocks_around_ship() {
        let mut registry = fresh();
        registry.get::<Vec<Rock>>().clear();
        registry.get::<Spawner>().since_last = 5.0;

        tick(&mut registry, DT);

        let rocks = registry.get_ref::<Vec<Rock>>();
        assert_eq!(rocks.len(), 1);
        let distance = rocks[0].pos.distance(Vec2::new(500.0, 500.0));
        assert!((distance - 500.0).abs() < 10.0, "distance {}", distance);
        // Heading back toward the ship
        assert!(rocks[0].vel.dot(Vec2::new(500.0, 500.0) - rocks[0].pos) > 0.0);
        assert!((registry.get_ref::<Spawner>().interval - 4.9).abs() < 1e-5);
    }

    #[test]
    fn test_restart_keeps_spawn_pace() {
        let mut registry = fresh();
        for _ in 0..10 {
            registry.get::<Spawner>().since_last = 10.0;
            tick(&mut registry, DT);
            registry.get::<Vec<Rock>>().clear();
        }
        place_rock(&mut registry, Vec2::new(500.0, 500.0), 8);
        tick(&mut registry, DT);
        assert!(!registry.get_ref::<GameState>().is_running);

        let before = registry.get_ref::<Spawner>().clone();
        assert!((before.interval - 4.0).abs() < 1e-4);

        registry.get::<ShipInput>().restart = true;
        tick(&mut registry, DT);
        assert!(registry.get_ref::<GameState>().is_running);
        assert_eq!(registry.get_ref::<Spawner>(), &before);
    }

    #[test]
    fn test_invalid_settings_fall_back_to_defaults() {
        let settings = Settings {
            rock_min_speed: 300.0,
            rock_max_speed: 150.0,
            rock_max_spin: -5,
            ..Default::default()
        };
        let mut registry = setup(settings, 7);
        assert_eq!(registry.get_ref::<Settings>(), &Settings::default());

        registry.get::<Spawner>().since_last = 10.0;
        tick(&mut registry, DT);
        assert_eq!(registry.get_ref::<Vec<Rock>>().len(), 2);
    }

    #[test]
    fn test_determinism() {
        let mut a = setup(Settings::default(), 99999);
        let mut b = setup(Settings::default(), 99999);
        let inputs = [
            ShipInput {
                rotate_left: true,
                thrust: true,
                ..Default::default()
            },
            ShipInput {
                fire: true,
                ..Default::default()
            },
            ShipInput::default(),
        ];

        for frame in 0..900 {
            let input = inputs[frame % inputs.len()];
            *a.get::<ShipInput>() = input;
            *b.get::<ShipInput>() = input;
            tick(&mut a, DT);
            tick(&mut b, DT);
        }

        assert_eq!(a.get_ref::<GameState>(), b.get_ref::<GameState>());
        let rocks_a: Vec<Vec2> = a.get_ref::<Vec<Rock>>().iter().map(|r| r.pos).collect();
        let rocks_b: Vec<Vec2> = b.get_ref::<Vec<Rock>>().iter().map(|r| r.pos).collect();
        assert_eq!(rocks_a, rocks_b);
    }

    #[test]
    fn test_draw_counts_primitives() {
        let mut registry = fresh();
        registry
            .get::<Vec<Bullet>>()
            .push(Bullet::new(Vec2::new(900.0, 900.0), Vec2::ZERO));

        let mut stats = DrawStats::default();
        draw(&registry, &mut stats);
        assert_eq!(stats.triangles, 2);
        assert_eq!(stats.circles, 1);
        assert_eq!(stats.line_strips, 1);
        assert_eq!(stats.line_points, ROCK_SIDES);
    }
}
