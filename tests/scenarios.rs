use arcade_phys::components::{Body, Name};
use arcade_phys::config::WorldConfig;
use arcade_phys::scene::test_scene::{load_scenario, Scenario};
use arcade_phys::systems::physics_step;
use hecs::World;

fn run(world: &mut World, steps: usize) {
    let config = WorldConfig::default();
    for _ in 0..steps {
        physics_step(world, &config);
    }
}

fn named(world: &World, name: &str) -> Body {
    world
        .query::<(&Name, &Body)>()
        .iter()
        .find(|(_, (n, _))| n.0 == name)
        .map(|(_, (_, body))| *body)
        .unwrap_or_else(|| panic!("no body named {name}"))
}

#[test]
fn cradle_passes_momentum_down_the_row() {
    let mut world = load_scenario(Scenario::Cradle);
    run(&mut world, 30);

    let striker = named(&world, "striker");
    let last = named(&world, "ball-3");
    assert!(last.velocity.x > 100.0, "ball-3 vx = {}", last.velocity.x);
    assert!(striker.velocity.x.abs() < last.velocity.x);
}

#[test]
fn stack_settles_on_the_ground_and_sleeps() {
    let mut world = load_scenario(Scenario::Stack);
    run(&mut world, 900);

    for name in ["bottom", "middle", "top"] {
        let body = named(&world, name);
        assert!(body.sleeping, "{name} still awake: {:?}", body.velocity);
        assert!(body.max().y <= 300.0 + 0.5, "{name} sank into the ground");
    }

    let bottom = named(&world, "bottom");
    let middle = named(&world, "middle");
    assert!(middle.max().y <= bottom.min().y + 0.5, "middle sank into bottom");
}

#[test]
fn thrown_ball_never_passes_the_wall() {
    let mut world = load_scenario(Scenario::Wall);
    for _ in 0..240 {
        run(&mut world, 1);
        let ball = named(&world, "ball");
        assert!(ball.max().x <= 300.0 + 0.5, "ball at x = {}", ball.position.x);
    }
}
