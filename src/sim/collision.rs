//! Collision tests
//!
//! Everything in the game collides as a circle: rocks use `size * scale`,
//! the ship uses its hull scale and bullets are points.

use glam::Vec2;

/// Whether two circles touch or overlap
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance_squared(b) <= (a_radius + b_radius) * (a_radius + b_radius)
}

/// Whether `point` lies inside or on the circle
#[inline]
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    circles_overlap(point, 0.0, center, radius)
}

/// Velocities for the two halves of a split rock.
///
/// Each half keeps the parent's velocity and gains half of it again along
/// one of the two perpendiculars, so the pieces fly apart symmetrically.
pub fn split_velocities(vel: Vec2) -> [Vec2; 2] {
    let kick = Vec2::new(vel.y, -vel.x) / 2.0;
    [vel + kick, vel - kick]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circles_overlap() {
        assert!(circles_overlap(Vec2::ZERO, 10.0, Vec2::new(15.0, 0.0), 5.0));
        assert!(circles_overlap(Vec2::ZERO, 10.0, Vec2::new(3.0, 4.0), 0.0));
        assert!(!circles_overlap(Vec2::ZERO, 10.0, Vec2::new(15.1, 0.0), 5.0));
    }

    #[test]
    fn test_point_in_circle() {
        let center = Vec2::new(150.0, 150.0);
        assert!(point_in_circle(Vec2::new(150.0, 230.0), center, 80.0));
        assert!(!point_in_circle(Vec2::new(150.0, 231.0), center, 80.0));
    }

    #[test]
    fn test_split_velocities() {
        let [a, b] = split_velocities(Vec2::new(20.0, 10.0));
        assert_eq!(a, Vec2::new(25.0, 0.0));
        assert_eq!(b, Vec2::new(15.0, 20.0));
    }

    #[test]
    fn test_split_velocities_at_rest() {
        assert_eq!(split_velocities(Vec2::ZERO), [Vec2::ZERO, Vec2::ZERO]);
    }
}
