//! Immutable 2D vector with arithmetic, rotation, projection, and
//! complex-number style operations. Every method returns a new value.

use crate::math::{approx_eq, EPSILON};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

#[derive(Default, Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };
    pub const ONE: Vector = Vector { x: 1.0, y: 1.0 };
    pub const RIGHT: Vector = Vector { x: 1.0, y: 0.0 };
    pub const DOWN: Vector = Vector { x: 0.0, y: 1.0 };

    pub const fn new(x: f64, y: f64) -> Vector {
        Vector { x, y }
    }

    /// Build a vector from polar coordinates.
    pub fn polar(angle: f64, length: f64) -> Vector {
        Vector::new(angle.cos() * length, angle.sin() * length)
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn equivalent(&self, other: Vector) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }

    /// Unit-length vector in the same direction. The divisor is clamped to a
    /// minimum of 1e-10, so a zero-length input yields zero rather than NaN.
    pub fn unit(&self) -> Vector {
        *self * (1.0 / self.length().max(EPSILON))
    }

    pub fn half(&self) -> Vector {
        *self * 0.5
    }

    pub fn left_normal(&self) -> Vector {
        Vector::new(-self.y, self.x)
    }

    pub fn right_normal(&self) -> Vector {
        Vector::new(self.y, -self.x)
    }

    pub fn dot(&self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn cross(&self, other: Vector) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn lerp(&self, other: Vector, t: f64) -> Vector {
        *self * (1.0 - t) + other * t
    }

    pub fn distance(&self, other: Vector) -> f64 {
        (*self - other).length()
    }

    pub fn distance_squared(&self, other: Vector) -> f64 {
        (*self - other).length_squared()
    }

    pub fn rotated(&self, angle: f64) -> Vector {
        self.complex_product(Vector::polar(angle, 1.0))
    }

    /// Multiply, treating both vectors as complex numbers (x + iy).
    pub fn complex_product(&self, other: Vector) -> Vector {
        Vector::new(
            self.x * other.x - self.y * other.y,
            self.x * other.y + self.y * other.x,
        )
    }

    /// Complex division. `other` must have nonzero length; a degenerate
    /// divisor produces non-finite components.
    pub fn complex_quotient(&self, other: Vector) -> Vector {
        let length_squared = other.length_squared();
        Vector::new(
            (self.x * other.x + self.y * other.y) / length_squared,
            (self.y * other.x - self.x * other.y) / length_squared,
        )
    }

    /// e^(x + iy), as a vector on the complex plane.
    pub fn complex_exponential(&self) -> Vector {
        let magnitude = self.x.exp();
        Vector::new(magnitude * self.y.cos(), magnitude * self.y.sin())
    }

    /// Component of `self` along `other`.
    pub fn projection(&self, other: Vector) -> Vector {
        other * (other.dot(*self) / other.length_squared())
    }

    /// Project onto the line whose unit normal is `normal` at signed
    /// `distance` from the origin.
    pub fn project_to_line(&self, normal: Vector, distance: f64) -> Vector {
        let height_above_line = self.dot(normal) - distance;
        *self - normal * height_above_line
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;
    fn div(self, rhs: f64) -> Vector {
        Vector::new(self.x / rhs, self.y / rhs)
    }
}

impl From<Vector> for bevy_math::Vec2 {
    fn from(v: Vector) -> Self {
        bevy_math::Vec2::new(v.x as f32, v.y as f32)
    }
}

impl From<bevy_math::Vec2> for Vector {
    fn from(v: bevy_math::Vec2) -> Self {
        Vector::new(v.x as f64, v.y as f64)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn unit_has_length_one() {
        let v = Vector::new(3.0, 4.0).unit();
        assert!(approx_eq(v.length(), 1.0));
    }

    #[test]
    fn unit_of_zero_is_finite() {
        let v = Vector::ZERO.unit();
        assert!(v.x.is_finite() && v.y.is_finite());
        assert_eq!(v, Vector::ZERO);
    }

    #[test]
    fn rotated_zero_is_identity() {
        let v = Vector::new(0.3, -1.7);
        assert_eq!(v.rotated(0.0), v);
    }

    #[test]
    fn rotation_round_trips() {
        let v = Vector::new(2.0, 5.0);
        for theta in [0.1, FRAC_PI_2, PI, 2.4, -1.3] {
            assert!(v.rotated(theta).rotated(-theta).equivalent(v));
        }
    }

    #[test]
    fn quarter_turn() {
        let v = Vector::RIGHT.rotated(FRAC_PI_2);
        assert!(v.equivalent(Vector::new(0.0, 1.0)));
    }

    #[test]
    fn complex_product_commutes() {
        let a = Vector::new(1.5, -0.5);
        let b = Vector::new(-2.0, 3.0);
        assert_eq!(a.complex_product(b), b.complex_product(a));
    }

    #[test]
    fn complex_quotient_inverts_product() {
        let a = Vector::new(1.5, -0.5);
        let b = Vector::new(-2.0, 3.0);
        assert!(a.complex_product(b).complex_quotient(b).equivalent(a));
    }

    #[test]
    fn complex_exponential_of_imaginary_is_rotation() {
        let v = Vector::new(0.0, FRAC_PI_2).complex_exponential();
        assert!(v.equivalent(Vector::new(0.0, 1.0)));
    }

    #[test]
    fn projection_onto_axis() {
        let v = Vector::new(3.0, 4.0);
        assert!(v.projection(Vector::RIGHT).equivalent(Vector::new(3.0, 0.0)));
    }

    #[test]
    fn project_to_line_lands_on_line() {
        let normal = Vector::new(0.0, 1.0);
        let p = Vector::new(2.0, 5.0).project_to_line(normal, 1.0);
        assert!(approx_eq(p.dot(normal), 1.0));
        assert!(approx_eq(p.x, 2.0));
    }

    #[test]
    fn polar_matches_angle_and_length() {
        let v = Vector::polar(1.1, 2.5);
        assert!(approx_eq(v.angle(), 1.1));
        assert!(approx_eq(v.length(), 2.5));
    }

    #[test]
    fn lerp_endpoints() {
        let a = Vector::new(0.0, 1.0);
        let b = Vector::new(4.0, -3.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vector::new(2.0, -1.0));
    }

    #[test]
    fn normals_are_perpendicular() {
        let v = Vector::new(2.0, 1.0);
        assert_eq!(v.dot(v.left_normal()), 0.0);
        assert_eq!(v.dot(v.right_normal()), 0.0);
        assert_eq!(v.left_normal(), -v.right_normal());
    }

    #[test]
    fn half_scales_both_components() {
        assert_eq!(Vector::new(2.0, -3.0).half(), Vector::new(1.0, -1.5));
    }
}
