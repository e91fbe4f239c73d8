use glam::{BVec2, Vec2};

use super::axis::{Axis, Face};
use super::blocked::Blocked;

/// Default per-axis speed below which a body counts as at rest.
pub const DEFAULT_MIN_VELOCITY: Vec2 = Vec2::new(10.0, 10.0);

/// How the body participates in the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyType {
    #[default]
    Dynamic,
    /// Never moved by collisions (infinite mass for collision response).
    Static,
}

/// Axis-aligned box body. `position` is the top-left corner.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub position: Vec2,
    pub prev_position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    pub prev_velocity: Vec2,
    pub(crate) mass: f32,
    /// Restitution per axis. 0.0 = no bounce, 1.0 = perfect bounce. Not clamped.
    pub bounce: Vec2,
    pub body_type: BodyType,
    pub immovable: bool,
    /// Per-axis opt-out: separation on that axis is left to an external handler.
    pub custom_separate: BVec2,
    pub blocked: Blocked,
    pub sleeping: bool,
    /// Consecutive steps spent below `min_velocity`, owned by the step loop.
    pub rest_steps: u32,
    pub min_velocity: Vec2,
    /// An immovable platform that carries bodies instead of bouncing them.
    pub rideable: bool,
    /// Under physics control even while stationary.
    pub moves: bool,
    pub embedded: bool,
    pub gravity_scale: f32,
}

impl Body {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        assert!(
            size.x >= 0.0 && size.y >= 0.0,
            "body size must be non-negative, got {size}"
        );
        Self {
            position,
            prev_position: position,
            size,
            velocity: Vec2::ZERO,
            prev_velocity: Vec2::ZERO,
            mass: 1.0,
            bounce: Vec2::ZERO,
            body_type: BodyType::Dynamic,
            immovable: false,
            custom_separate: BVec2::FALSE,
            blocked: Blocked::default(),
            sleeping: false,
            rest_steps: 0,
            min_velocity: DEFAULT_MIN_VELOCITY,
            rideable: false,
            moves: true,
            embedded: false,
            gravity_scale: 1.0,
        }
    }

    /// A static body: immovable, unaffected by gravity.
    pub fn fixed(position: Vec2, size: Vec2) -> Self {
        Self {
            body_type: BodyType::Static,
            gravity_scale: 0.0,
            ..Self::new(position, size)
        }
    }

    /// Panics unless `mass` is positive and finite; the impulse exchange
    /// divides by it and takes square roots of ratios involving it.
    pub fn with_mass(mut self, mass: f32) -> Self {
        assert!(
            mass.is_finite() && mass > 0.0,
            "body mass must be positive and finite, got {mass}"
        );
        self.mass = mass;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_bounce(mut self, bounce: Vec2) -> Self {
        self.bounce = bounce;
        self
    }

    pub fn with_min_velocity(mut self, min_velocity: Vec2) -> Self {
        self.min_velocity = min_velocity;
        self
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn is_immovable(&self) -> bool {
        self.immovable || self.body_type == BodyType::Static
    }

    /// Not immovable and under physics control.
    pub fn is_pushable(&self) -> bool {
        !self.is_immovable() && self.moves
    }

    /// Nonzero velocity on `axis` that is not running into a blocked face.
    pub fn is_moving(&self, axis: Axis) -> bool {
        match axis.face_toward(axis.of(self.velocity)) {
            Some(face) => !self.blocked.is_blocked(face),
            None => false,
        }
    }

    /// Whether this body would stop something pushing it through `face`.
    /// Immovable bodies block in every direction.
    pub fn reports_blocked(&self, face: Face) -> bool {
        self.is_immovable() || self.blocked.is_blocked(face)
    }

    pub fn opts_out(&self, axis: Axis) -> bool {
        axis.flag(self.custom_separate)
    }

    pub fn wake(&mut self) {
        self.sleeping = false;
        self.rest_steps = 0;
    }

    pub fn min(&self) -> Vec2 {
        self.position
    }

    pub fn max(&self) -> Vec2 {
        self.position + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Distance travelled on `axis` since the start of the step.
    pub fn delta(&self, axis: Axis) -> f32 {
        axis.of(self.position) - axis.of(self.prev_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hecs::World;

    #[test]
    #[should_panic(expected = "mass must be positive")]
    fn zero_mass_is_rejected_at_construction() {
        let _ = Body::new(Vec2::ZERO, Vec2::ONE).with_mass(0.0);
    }

    #[test]
    #[should_panic(expected = "mass must be positive")]
    fn nan_mass_is_rejected_at_construction() {
        let _ = Body::new(Vec2::ZERO, Vec2::ONE).with_mass(f32::NAN);
    }

    #[test]
    fn static_and_flagged_bodies_are_immovable() {
        let wall = Body::fixed(Vec2::ZERO, Vec2::ONE);
        assert!(wall.is_immovable());
        assert!(!wall.is_pushable());

        let mut crate_box = Body::new(Vec2::ZERO, Vec2::ONE);
        assert!(crate_box.is_pushable());
        crate_box.immovable = true;
        assert!(crate_box.is_immovable());
    }

    #[test]
    fn moving_ignores_velocity_into_a_blocked_face() {
        let mut world = World::new();
        let wall = world.spawn(());
        let mut body = Body::new(Vec2::ZERO, Vec2::ONE).with_velocity(Vec2::new(5.0, 0.0));
        assert!(body.is_moving(Axis::X));
        assert!(!body.is_moving(Axis::Y));

        body.blocked.set(Face::Right, wall);
        assert!(!body.is_moving(Axis::X));

        body.velocity.x = -5.0;
        assert!(body.is_moving(Axis::X));
    }

    #[test]
    fn wake_resets_rest_counter() {
        let mut body = Body::new(Vec2::ZERO, Vec2::ONE);
        body.sleeping = true;
        body.rest_steps = 40;
        body.wake();
        assert!(!body.sleeping);
        assert_eq!(body.rest_steps, 0);
    }
}
