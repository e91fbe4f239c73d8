use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{Body, Face};
use crate::config::WorldConfig;

use super::collision::Separator;
use super::observer::{NoopObserver, SeparationObserver};
use super::probe::{intersects, penetrates};

/// What happened during one or more physics steps.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub steps: usize,
    /// Candidate pairs handed to the separators.
    pub pairs: usize,
    /// Pairs the separators reported as touching.
    pub contacts: usize,
    /// Bodies asleep after the last step.
    pub asleep: usize,
}

impl StepReport {
    pub fn merge(&mut self, other: StepReport) {
        self.steps += other.steps;
        self.pairs += other.pairs;
        self.contacts += other.contacts;
        self.asleep = other.asleep;
    }
}

/// Advance the world by one fixed step.
pub fn physics_step(world: &mut World, config: &WorldConfig) -> StepReport {
    physics_step_with(world, config, &mut NoopObserver)
}

/// Run as many fixed steps as fit in `frame_dt` plus the leftover in
/// `accumulator`. Returns the merged report and the interpolation alpha (0..1)
/// of the remaining time.
pub fn physics_system(
    world: &mut World,
    config: &WorldConfig,
    accumulator: &mut f32,
    frame_dt: f32,
) -> (StepReport, f32) {
    *accumulator += frame_dt;
    let mut report = StepReport::default();

    while *accumulator >= config.dt {
        report.merge(physics_step(world, config));
        *accumulator -= config.dt;
    }

    (report, *accumulator / config.dt)
}

/// [`physics_step`] with an observer attached to every separation.
pub fn physics_step_with<O: SeparationObserver>(
    world: &mut World,
    config: &WorldConfig,
    observer: &mut O,
) -> StepReport {
    let dt = config.dt;

    // Snapshot the start of the step. Awake bodies rebuild their blocked
    // faces below; sleepers keep the contacts they fell asleep on.
    for (_entity, body) in world.query_mut::<&mut Body>() {
        body.prev_position = body.position;
        body.prev_velocity = body.velocity;
        if !body.sleeping {
            body.blocked.clear();
        }
    }

    // Semi-implicit Euler: update velocity first, then position.
    for (_entity, body) in world.query_mut::<&mut Body>() {
        if body.sleeping {
            continue;
        }
        if body.is_immovable() {
            // Moving platforms carry their own velocity, no gravity.
            body.position += body.velocity * dt;
            continue;
        }
        if !body.moves {
            continue;
        }
        body.velocity += config.gravity * body.gravity_scale * dt;
        body.position += body.velocity * dt;
    }

    // Copy bodies out, resolve on the copies, write back at the end.
    let mut bodies: Vec<(Entity, Body)> = world
        .query::<&Body>()
        .iter()
        .map(|(entity, body)| (entity, *body))
        .collect();
    bodies.sort_by_key(|(entity, _)| entity.id());
    wake_unsupported(&mut bodies);

    let mut report = StepReport {
        steps: 1,
        ..StepReport::default()
    };
    let mut touching = vec![false; bodies.len()];

    // Broadphase: brute force O(n²), in entity order.
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (head, tail) = bodies.split_at_mut(j);
            let (a_id, a) = &mut head[i];
            let (b_id, b) = &mut tail[0];

            if a.is_immovable() && b.is_immovable() {
                continue;
            }
            if !intersects(a, b) {
                continue;
            }
            report.pairs += 1;
            touching[i] = true;
            touching[j] = true;

            let a_still = a.position == a.prev_position;
            let b_still = b.position == b.prev_position;

            let mut contact = false;
            for axis in config.axis_order.axes() {
                contact |= Separator::with_observer(axis, &mut *observer).resolve(
                    (*a_id, &mut *a),
                    (*b_id, &mut *b),
                    false,
                    config.overlap_bias,
                );
            }
            if contact {
                report.contacts += 1;
            }

            if a_still && b_still && penetrates(a, b) {
                a.embedded = true;
                b.embedded = true;
            }
        }
    }

    rest_on_blockers(&mut bodies);

    for (i, (_entity, body)) in bodies.iter_mut().enumerate() {
        if !touching[i] {
            body.embedded = false;
        }
        if config.sleep_steps > 0 {
            update_sleep(body, config.sleep_steps);
        }
        if body.sleeping {
            report.asleep += 1;
        }
    }

    for (entity, body) in bodies {
        if let Ok(mut slot) = world.get::<&mut Body>(entity) {
            *slot = body;
        }
    }

    report
}

/// Wake sleepers whose recorded blocker moved this step or no longer exists.
/// `bodies` must be sorted by entity id.
fn wake_unsupported(bodies: &mut [(Entity, Body)]) {
    for i in 0..bodies.len() {
        let body = &bodies[i].1;
        if !body.sleeping || body.blocked.none() {
            continue;
        }
        let blockers = Face::ALL.into_iter().filter_map(|face| body.blocked.get(face));
        let mut lost = false;
        for blocker in blockers {
            lost |= match bodies.binary_search_by_key(&blocker.id(), |(e, _)| e.id()) {
                Ok(k) => {
                    let (entity, support) = &bodies[k];
                    *entity != blocker || support.position != support.prev_position
                }
                Err(_) => true,
            };
        }
        if lost {
            let body = &mut bodies[i].1;
            log::debug!("body at {} woken, support moved", body.position);
            body.wake();
            body.blocked.clear();
        }
    }
}

/// Move each pushable body that still sinks into one of its blockers flush
/// against that blocker's edge. Repeats until nothing moves so a stack
/// settles from its support upwards. `bodies` must be sorted by entity id.
fn rest_on_blockers(bodies: &mut [(Entity, Body)]) {
    for _ in 0..bodies.len() {
        let mut moved = false;
        for i in 0..bodies.len() {
            if !bodies[i].1.is_pushable() {
                continue;
            }
            for face in Face::ALL {
                let Some(blocker) = bodies[i].1.blocked.get(face) else {
                    continue;
                };
                let Ok(k) = bodies.binary_search_by_key(&blocker.id(), |(e, _)| e.id()) else {
                    continue;
                };
                let (entity, support) = bodies[k];
                let body = &mut bodies[i].1;
                if entity != blocker || !penetrates(body, &support) {
                    continue;
                }
                let axis = face.axis();
                let flush = if face.sign() > 0.0 {
                    axis.of(support.min()) - axis.of(body.size)
                } else {
                    axis.of(support.max())
                };
                let slot = axis.of_mut(&mut body.position);
                if *slot != flush {
                    *slot = flush;
                    moved = true;
                }
            }
        }
        if !moved {
            break;
        }
    }
}

/// Put a dynamic body to sleep once it has been slow for `sleep_steps` steps.
fn update_sleep(body: &mut Body, sleep_steps: u32) {
    if body.is_immovable() || body.sleeping {
        return;
    }
    let slow = body.velocity.x.abs() < body.min_velocity.x
        && body.velocity.y.abs() < body.min_velocity.y;
    if !slow {
        body.rest_steps = 0;
        return;
    }
    body.rest_steps += 1;
    if body.rest_steps >= sleep_steps {
        log::debug!("body asleep at {}", body.position);
        body.sleeping = true;
        body.velocity = Vec2::ZERO;
    }
}
