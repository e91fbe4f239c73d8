use clap::ValueEnum;
use glam::Vec2;
use hecs::World;

use crate::scene::prefabs::{spawn_box, spawn_ground, spawn_platform, spawn_wall};

/// Built-in demo scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Row of equal boxes struck by one moving box (horizontal exchange).
    Cradle,
    /// Boxes dropped onto each other until they settle and sleep.
    Stack,
    /// Box riding a lift while another is shoved into it.
    Platform,
    /// Bouncy box thrown at a wall.
    Wall,
}

const CRATE: Vec2 = Vec2::new(20.0, 20.0);

/// Build and populate `scenario` in a fresh world.
pub fn load_scenario(scenario: Scenario) -> World {
    let mut world = World::new();
    spawn_ground(&mut world);

    match scenario {
        Scenario::Cradle => {
            // Elastic sideways, dead vertically so they sit still on the ground.
            let bounce = Vec2::X;
            spawn_box(
                &mut world,
                "striker",
                Vec2::new(0.0, 280.0),
                CRATE,
                1.0,
                bounce,
                Vec2::new(240.0, 0.0),
            );
            for (i, name) in ["ball-1", "ball-2", "ball-3"].into_iter().enumerate() {
                let x = 100.0 + i as f32 * 20.0;
                spawn_box(&mut world, name, Vec2::new(x, 280.0), CRATE, 1.0, bounce, Vec2::ZERO);
            }
        }
        Scenario::Stack => {
            for (i, name) in ["bottom", "middle", "top"].into_iter().enumerate() {
                let y = 200.0 - i as f32 * 60.0;
                let mass = 1.0 + i as f32;
                spawn_box(
                    &mut world,
                    name,
                    Vec2::new(50.0, y),
                    CRATE,
                    mass,
                    Vec2::splat(0.2),
                    Vec2::ZERO,
                );
            }
            spawn_box(
                &mut world,
                "heavy",
                Vec2::new(56.0, -40.0),
                CRATE,
                8.0,
                Vec2::ZERO,
                Vec2::ZERO,
            );
        }
        Scenario::Platform => {
            spawn_platform(
                &mut world,
                "lift",
                Vec2::new(150.0, 200.0),
                Vec2::new(60.0, 16.0),
                Vec2::new(0.0, -30.0),
            );
            spawn_box(
                &mut world,
                "rider",
                Vec2::new(165.0, 180.0),
                CRATE,
                1.0,
                Vec2::splat(0.5),
                Vec2::ZERO,
            );
            spawn_box(
                &mut world,
                "pusher",
                Vec2::new(60.0, 190.0),
                CRATE,
                1.0,
                Vec2::splat(0.5),
                Vec2::new(150.0, 0.0),
            );
        }
        Scenario::Wall => {
            spawn_wall(&mut world, "wall", Vec2::new(300.0, 100.0), Vec2::new(20.0, 200.0));
            spawn_box(
                &mut world,
                "ball",
                Vec2::new(100.0, 200.0),
                CRATE,
                1.0,
                Vec2::splat(0.8),
                Vec2::new(400.0, -200.0),
            );
        }
    }

    world
}
