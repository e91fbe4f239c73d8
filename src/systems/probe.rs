use crate::components::{Axis, Body, Face};

/// Interpenetration of two bodies along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionInfo {
    /// Depth of the overlap on the queried axis, never negative.
    pub overlap: f32,
    /// Face of the first body that touches the second.
    pub face: Face,
    pub intersects: bool,
    /// Part of `overlap` the first body moves by during correction.
    pub share1: f32,
    /// Part of `overlap` the second body moves by during correction.
    pub share2: f32,
}

/// Inclusive AABB test: boxes that only touch still intersect.
pub fn intersects(a: &Body, b: &Body) -> bool {
    let (a_min, a_max) = (a.min(), a.max());
    let (b_min, b_max) = (b.min(), b.max());
    a_min.x <= b_max.x && a_max.x >= b_min.x && a_min.y <= b_max.y && a_max.y >= b_min.y
}

/// Strict interpenetration on both axes; touching does not count.
pub fn penetrates(a: &Body, b: &Body) -> bool {
    let (a_min, a_max) = (a.min(), a.max());
    let (b_min, b_max) = (b.min(), b.max());
    a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
}

/// Measure how far `a` and `b` interpenetrate along `axis`.
///
/// Unless `overlap_only` is set, an overlap deeper than the distance both
/// bodies travelled this step plus `bias` is not treated as a hit on this
/// axis; it came from the perpendicular one. Such a pair is reported as not
/// intersecting.
pub fn measure(axis: Axis, a: &Body, b: &Body, overlap_only: bool, bias: f32) -> CollisionInfo {
    let face = if axis.of(a.center()) < axis.of(b.center()) {
        axis.positive_face()
    } else {
        axis.negative_face()
    };

    let mut hit = intersects(a, b);
    let mut overlap = if hit {
        let lo = axis.of(a.min()).max(axis.of(b.min()));
        let hi = axis.of(a.max()).min(axis.of(b.max()));
        (hi - lo).max(0.0)
    } else {
        0.0
    };

    let max_overlap = a.delta(axis).abs() + b.delta(axis).abs() + bias;
    if !overlap_only && overlap > max_overlap {
        overlap = 0.0;
        hit = false;
    }

    let (share1, share2) = apportion(a, b, overlap);
    CollisionInfo {
        overlap,
        face,
        intersects: hit,
        share1,
        share2,
    }
}

/// Split `overlap` between the two bodies. The heavier the other body, the
/// larger a body's share; a body that cannot be pushed gets nothing.
fn apportion(a: &Body, b: &Body, overlap: f32) -> (f32, f32) {
    match (a.is_pushable(), b.is_pushable()) {
        (true, true) => {
            let share1 = overlap * b.mass() / (a.mass() + b.mass());
            (share1, overlap - share1)
        }
        (true, false) => (overlap, 0.0),
        (false, true) => (0.0, overlap),
        (false, false) => (0.0, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn boxed(x: f32, y: f32) -> Body {
        Body::new(Vec2::new(x, y), Vec2::new(10.0, 10.0))
    }

    #[test]
    fn separated_boxes_do_not_intersect() {
        let a = boxed(0.0, 0.0);
        let b = boxed(20.0, 0.0);
        let info = measure(Axis::X, &a, &b, false, 4.0);
        assert!(!info.intersects);
        assert_eq!(info.overlap, 0.0);
        assert_eq!((info.share1, info.share2), (0.0, 0.0));
    }

    #[test]
    fn touching_boxes_intersect_with_zero_overlap() {
        let a = boxed(0.0, 0.0);
        let b = boxed(10.0, 0.0);
        let info = measure(Axis::X, &a, &b, false, 4.0);
        assert!(info.intersects);
        assert_eq!(info.overlap, 0.0);
    }

    #[test]
    fn face_comes_from_relative_centers() {
        let a = boxed(0.0, 0.0);
        let b = boxed(7.0, 0.0);
        assert_eq!(measure(Axis::X, &a, &b, false, 4.0).face, Face::Right);
        assert_eq!(measure(Axis::X, &b, &a, false, 4.0).face, Face::Left);

        let top = boxed(0.0, 0.0);
        let bottom = boxed(0.0, 8.0);
        assert_eq!(measure(Axis::Y, &top, &bottom, false, 4.0).face, Face::Down);
        assert_eq!(measure(Axis::Y, &bottom, &top, false, 4.0).face, Face::Up);
    }

    #[test]
    fn equal_masses_split_overlap_evenly() {
        let a = boxed(0.0, 0.0);
        let b = boxed(7.0, 0.0);
        let info = measure(Axis::X, &a, &b, false, 4.0);
        assert_eq!(info.overlap, 3.0);
        assert_eq!(info.share1, 1.5);
        assert_eq!(info.share2, 1.5);
    }

    #[test]
    fn lighter_body_takes_the_larger_share() {
        let a = boxed(0.0, 0.0).with_mass(1.0);
        let b = boxed(6.0, 0.0).with_mass(3.0);
        let info = measure(Axis::X, &a, &b, false, 4.0);
        assert_eq!(info.overlap, 4.0);
        assert_eq!(info.share1, 3.0);
        assert_eq!(info.share2, 1.0);
        assert_eq!(info.share1 + info.share2, info.overlap);
    }

    #[test]
    fn immovable_body_gets_zero_share() {
        let a = boxed(0.0, 0.0);
        let wall = Body::fixed(Vec2::new(8.0, 0.0), Vec2::new(10.0, 10.0));
        let info = measure(Axis::X, &a, &wall, false, 4.0);
        assert_eq!(info.share1, 2.0);
        assert_eq!(info.share2, 0.0);

        let info = measure(Axis::X, &wall, &a, false, 4.0);
        assert_eq!(info.share1, 0.0);
        assert_eq!(info.share2, 2.0);
    }

    #[test]
    fn deep_overlap_beyond_travel_and_bias_is_ignored() {
        // Stacked boxes overlap 8 on x but nobody moved horizontally.
        let a = boxed(0.0, 0.0);
        let b = boxed(2.0, 9.0);
        let info = measure(Axis::X, &a, &b, false, 4.0);
        assert_eq!(info.overlap, 0.0);
        assert!(!info.intersects);
        assert_eq!((info.share1, info.share2), (0.0, 0.0));

        let info = measure(Axis::X, &a, &b, true, 4.0);
        assert_eq!(info.overlap, 8.0);
        assert!(info.intersects);

        // Enough horizontal travel makes the same overlap count.
        let mut moved = a;
        moved.prev_position.x = -5.0;
        let info = measure(Axis::X, &moved, &b, false, 4.0);
        assert_eq!(info.overlap, 8.0);
        assert!(info.intersects);
    }
}
