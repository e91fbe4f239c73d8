use glam::{BVec2, Vec2};

/// One of the two separation axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Component of `v` along this axis.
    #[inline]
    pub fn of(self, v: Vec2) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }

    #[inline]
    pub fn flag(self, b: BVec2) -> bool {
        match self {
            Axis::X => b.x,
            Axis::Y => b.y,
        }
    }

    /// Mutable component of `v` along this axis.
    #[inline]
    pub fn of_mut(self, v: &mut Vec2) -> &mut f32 {
        match self {
            Axis::X => &mut v.x,
            Axis::Y => &mut v.y,
        }
    }

    /// Face reached by travelling in the negative direction (left / up).
    pub fn negative_face(self) -> Face {
        match self {
            Axis::X => Face::Left,
            Axis::Y => Face::Up,
        }
    }

    /// Face reached by travelling in the positive direction (right / down).
    pub fn positive_face(self) -> Face {
        match self {
            Axis::X => Face::Right,
            Axis::Y => Face::Down,
        }
    }

    /// Face in the direction of travel for a signed velocity, `None` at rest.
    pub fn face_toward(self, velocity: f32) -> Option<Face> {
        if velocity > 0.0 {
            Some(self.positive_face())
        } else if velocity < 0.0 {
            Some(self.negative_face())
        } else {
            None
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

/// A side of an axis-aligned box. Screen coordinates: y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Left,
    Right,
    Up,
    Down,
}

impl Face {
    pub const ALL: [Face; 4] = [Face::Left, Face::Right, Face::Up, Face::Down];

    pub fn axis(self) -> Axis {
        match self {
            Face::Left | Face::Right => Axis::X,
            Face::Up | Face::Down => Axis::Y,
        }
    }

    /// -1.0 for left/up, +1.0 for right/down.
    pub fn sign(self) -> f32 {
        match self {
            Face::Left | Face::Up => -1.0,
            Face::Right | Face::Down => 1.0,
        }
    }

    pub fn opposite(self) -> Face {
        match self {
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Up => Face::Down,
            Face::Down => Face::Up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_toward_follows_velocity_sign() {
        assert_eq!(Axis::X.face_toward(3.0), Some(Face::Right));
        assert_eq!(Axis::X.face_toward(-0.1), Some(Face::Left));
        assert_eq!(Axis::Y.face_toward(2.0), Some(Face::Down));
        assert_eq!(Axis::Y.face_toward(0.0), None);
    }

    #[test]
    fn opposite_faces_share_an_axis_with_flipped_sign() {
        for face in [Face::Left, Face::Right, Face::Up, Face::Down] {
            assert_eq!(face.opposite().axis(), face.axis());
            assert_eq!(face.opposite().sign(), -face.sign());
            assert_eq!(face.opposite().opposite(), face);
        }
    }

    #[test]
    fn of_mut_writes_only_the_selected_component() {
        let mut v = Vec2::new(1.0, 2.0);
        *Axis::Y.of_mut(&mut v) = 7.0;
        assert_eq!(v, Vec2::new(1.0, 7.0));
    }
}
