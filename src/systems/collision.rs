use hecs::Entity;

use crate::components::{Axis, Body, Face};

use super::observer::{NoopObserver, SeparationObserver, VelocityBranch};
use super::probe::measure;

/// Separates overlapping bodies along one axis and exchanges their velocities.
///
/// One instance per axis; the X and Y resolvers share every rule.
pub struct Separator<O: SeparationObserver = NoopObserver> {
    axis: Axis,
    observer: O,
}

impl Separator {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            observer: NoopObserver,
        }
    }
}

impl<O: SeparationObserver> Separator<O> {
    pub fn with_observer(axis: Axis, observer: O) -> Self {
        Self { axis, observer }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Resolve one overlapping pair for one step.
    ///
    /// Returns whether the bodies are in contact. When separation is skipped
    /// (`overlap_only`, both immovable, or either body opting out on this
    /// axis) nothing is mutated but the contact result is still reported.
    pub fn resolve(
        &mut self,
        (a_id, a): (Entity, &mut Body),
        (b_id, b): (Entity, &mut Body),
        overlap_only: bool,
        bias: f32,
    ) -> bool {
        debug_assert!(bias >= 0.0, "overlap bias must be non-negative, got {bias}");
        let axis = self.axis;

        let info = measure(axis, a, b, overlap_only, bias);
        self.observer.probed(axis, &info);

        let a_immovable = a.is_immovable();
        let b_immovable = b.is_immovable();

        if !info.intersects
            || overlap_only
            || (a_immovable && b_immovable)
            || a.opts_out(axis)
            || b.opts_out(axis)
        {
            return (info.intersects && info.overlap != 0.0) || (a.embedded && b.embedded);
        }

        let v1 = axis.of(a.velocity);
        let v2 = axis.of(b.velocity);
        let a_moving = a.is_moving(axis);
        let b_moving = b.is_moving(axis);

        // Contact faces as seen from each body.
        let a_face = info.face;
        let b_face = info.face.opposite();

        let (branch, mut nv1, mut nv2) = if !a_moving && !b_moving {
            (
                VelocityBranch::AtRest,
                if a_immovable { v1 } else { 0.0 },
                if b_immovable { v2 } else { 0.0 },
            )
        } else if !a_immovable && !b_immovable {
            exchange(axis, a, b, v1, v2)
        } else if b_immovable {
            let (branch, nv1) = against_immovable(axis, a, a_moving, a_face, b);
            (branch, nv1, v2)
        } else {
            let (branch, nv2) = against_immovable(axis, b, b_moving, b_face, a);
            (branch, v1, nv2)
        };
        self.observer.branch(axis, branch);

        if info.share1 == 0.0 && info.share2 == 0.0 && info.overlap != 0.0 {
            // Interpenetrating with neither side allowed to give way.
            if !a_immovable {
                *axis.of_mut(&mut a.velocity) = 0.0;
            }
            if !b_immovable {
                *axis.of_mut(&mut b.velocity) = 0.0;
            }
            self.observer.resolved(axis, axis.of(a.velocity), axis.of(b.velocity));
            return true;
        }

        // The ride nudge reverses direction on purpose.
        if branch != VelocityBranch::Ride {
            nv1 = damp_flip_flop(axis, a, v1, nv1);
            nv2 = damp_flip_flop(axis, b, v2, nv2);
        }

        if !a_immovable {
            correct(axis, a, nv1, a_face, info.share1, b, b_id);
        }
        if !b_immovable {
            correct(axis, b, nv2, b_face, info.share2, a, a_id);
        }

        if !a_immovable {
            nv1 = settle(axis, a, nv1);
            *axis.of_mut(&mut a.velocity) = nv1;
        }
        if !b_immovable {
            nv2 = settle(axis, b, nv2);
            *axis.of_mut(&mut b.velocity) = nv2;
        }

        self.observer.resolved(axis, nv1, nv2);
        true
    }
}

/// Mass-weighted velocity exchange, scaled by each body's bounce.
///
/// Deliberately approximate: momentum is not conserved exactly.
fn exchange(axis: Axis, a: &Body, b: &Body, v1: f32, v2: f32) -> (VelocityBranch, f32, f32) {
    let (m1, m2) = (a.mass(), b.mass());
    let (branch, e1, e2) = if m1 == m2 {
        (VelocityBranch::ExchangeEqualMass, v2, v1)
    } else {
        (
            VelocityBranch::Exchange,
            (v2 * v2 * m2 / m1).sqrt() * v2.signum(),
            (v1 * v1 * m1 / m2).sqrt() * v1.signum(),
        )
    };

    let avg = (e1 + e2) * 0.5;
    (
        branch,
        avg + (e1 - avg) * axis.of(a.bounce),
        avg + (e2 - avg) * axis.of(b.bounce),
    )
}

/// New velocity of a movable body touching an immovable `wall` through `face`.
fn against_immovable(
    axis: Axis,
    body: &Body,
    moving: bool,
    face: Face,
    wall: &Body,
) -> (VelocityBranch, f32) {
    if !moving {
        return (VelocityBranch::Pressed, 0.0);
    }
    if wall.rideable {
        // Unit push away from the platform.
        return (VelocityBranch::Ride, -face.sign());
    }
    let v = axis.of(body.velocity);
    (
        VelocityBranch::WallBounce,
        axis.of(wall.velocity) - v * axis.of(body.bounce),
    )
}

/// Zero a small velocity that flipped direction, unless the body sleeps.
fn damp_flip_flop(axis: Axis, body: &Body, before: f32, after: f32) -> f32 {
    let reversed = before * after < 0.0;
    if reversed && after.abs() < axis.of(body.min_velocity) && !body.sleeping {
        0.0
    } else {
        after
    }
}

/// Push `body` out of `other` by `share`, and/or record `other` as blocking it.
///
/// `face` is the side of `body` touching `other`. A moving body that runs
/// into a blocked `other` is marked blocked and left in place; the step loop
/// rests it against its blocker afterwards.
fn correct(
    axis: Axis,
    body: &mut Body,
    velocity: f32,
    face: Face,
    share: f32,
    other: &Body,
    other_id: Entity,
) {
    if velocity != 0.0 {
        if axis.face_toward(velocity) == Some(face) && other.reports_blocked(face) {
            body.blocked.set(face, other_id);
        } else {
            push_out(axis, body, face, share);
        }
    } else if body.moves {
        if !body.blocked.is_blocked(face.opposite()) {
            push_out(axis, body, face, share);
        }
        if other.reports_blocked(face) {
            body.blocked.set(face, other_id);
        }
    }
}

fn push_out(axis: Axis, body: &mut Body, face: Face, share: f32) {
    *axis.of_mut(&mut body.position) -= face.sign() * share;
}

/// Drop velocity into a blocked face, then apply sleep hysteresis.
fn settle(axis: Axis, body: &mut Body, mut velocity: f32) -> f32 {
    if let Some(face) = axis.face_toward(velocity) {
        if body.blocked.is_blocked(face) {
            velocity = 0.0;
        }
    }
    if body.sleeping {
        if velocity.abs() > axis.of(body.min_velocity) {
            body.wake();
        } else {
            velocity = 0.0;
        }
    }
    velocity
}
