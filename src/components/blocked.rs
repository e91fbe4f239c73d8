use hecs::Entity;

use super::axis::Face;

/// Which faces of a body are currently obstructed, and by whom.
///
/// Cleared by the step loop at the start of every step and rebuilt by the
/// separations of that step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blocked {
    pub left: Option<Entity>,
    pub right: Option<Entity>,
    pub up: Option<Entity>,
    pub down: Option<Entity>,
}

impl Blocked {
    pub fn get(&self, face: Face) -> Option<Entity> {
        match face {
            Face::Left => self.left,
            Face::Right => self.right,
            Face::Up => self.up,
            Face::Down => self.down,
        }
    }

    pub fn is_blocked(&self, face: Face) -> bool {
        self.get(face).is_some()
    }

    /// Record `by` as the body obstructing `face`.
    pub fn set(&mut self, face: Face, by: Entity) {
        *self.slot(face) = Some(by);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn none(&self) -> bool {
        self.left.is_none() && self.right.is_none() && self.up.is_none() && self.down.is_none()
    }

    fn slot(&mut self, face: Face) -> &mut Option<Entity> {
        match face {
            Face::Left => &mut self.left,
            Face::Right => &mut self.right,
            Face::Up => &mut self.up,
            Face::Down => &mut self.down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hecs::World;

    #[test]
    fn set_records_blocker_on_one_face_only() {
        let mut world = World::new();
        let wall = world.spawn(());
        let mut blocked = Blocked::default();
        assert!(blocked.none());

        blocked.set(Face::Right, wall);

        assert_eq!(blocked.get(Face::Right), Some(wall));
        assert!(!blocked.is_blocked(Face::Left));
        assert!(!blocked.is_blocked(Face::Up));
        assert!(!blocked.is_blocked(Face::Down));
        assert!(!blocked.none());
    }

    #[test]
    fn clear_resets_every_face() {
        let mut world = World::new();
        let floor = world.spawn(());
        let mut blocked = Blocked::default();
        blocked.set(Face::Down, floor);
        blocked.set(Face::Left, floor);

        blocked.clear();

        assert!(blocked.none());
    }
}
