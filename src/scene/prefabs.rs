use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{Body, Name};

/// Dynamic box with the given mass, bounce and initial velocity.
pub fn spawn_box(
    world: &mut World,
    name: &'static str,
    position: Vec2,
    size: Vec2,
    mass: f32,
    bounce: Vec2,
    velocity: Vec2,
) -> Entity {
    let body = Body::new(position, size)
        .with_mass(mass)
        .with_bounce(bounce)
        .with_velocity(velocity);
    world.spawn((Name(name), body))
}

/// Static wall or floor.
pub fn spawn_wall(world: &mut World, name: &'static str, position: Vec2, size: Vec2) -> Entity {
    world.spawn((Name(name), Body::fixed(position, size)))
}

/// Immovable, rideable platform travelling at a constant velocity.
pub fn spawn_platform(
    world: &mut World,
    name: &'static str,
    position: Vec2,
    size: Vec2,
    velocity: Vec2,
) -> Entity {
    let mut body = Body::new(position, size).with_velocity(velocity);
    body.immovable = true;
    body.rideable = true;
    body.gravity_scale = 0.0;
    world.spawn((Name(name), body))
}

/// Wide floor under the play area.
pub fn spawn_ground(world: &mut World) -> Entity {
    spawn_wall(world, "ground", Vec2::new(-200.0, 300.0), Vec2::new(800.0, 40.0))
}
