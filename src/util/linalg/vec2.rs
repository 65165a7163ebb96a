#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::linalg::{check_divisor, check_length};
use num_traits::Zero;
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A 2D vector using 32-bit floating point coordinates.
///
/// Mostly produced by [`Vec3::dehomogenized()`]; it offers the same pure/in-place operation
/// pairs as [`Vec3`] and [`Vec4`].
///
/// # Examples
///
/// ```
/// use ggmath::core::prelude::*;
///
/// let mut v = Vec2::new(3.0, 4.0);
/// assert_eq!(v.length(), 5.0);
/// v.normalize();
/// assert_eq!(v, Vec2::new(0.6, 0.8));
/// ```
#[derive(
    Default,
    Debug,
    Copy,
    Clone,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    bincode::Encode,
    bincode::Decode,
)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::splat(0.0);
    pub const ONE: Vec2 = Vec2::splat(1.0);
    pub const X: Vec2 = Vec2::new(1.0, 0.0);
    pub const Y: Vec2 = Vec2::new(0.0, 1.0);

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }
    #[must_use]
    pub const fn splat(v: f32) -> Vec2 {
        Vec2 { x: v, y: v }
    }

    /// Returns the homogeneous coordinates of this point, i.e. `z = 1`.
    #[must_use]
    pub fn homogenized(&self) -> Vec3 {
        Vec3 {
            x: self.x,
            y: self.y,
            z: 1.0,
        }
    }
    /// Returns the homogeneous coordinates of the direction of this vector, i.e. `z = 0`.
    #[must_use]
    pub fn homogenized_as_direction(&self) -> Vec3 {
        Vec3 {
            x: self.x,
            y: self.y,
            z: 0.0,
        }
    }
    #[must_use]
    pub fn extend(&self, z: f32) -> Vec3 {
        Vec3 {
            x: self.x,
            y: self.y,
            z,
        }
    }

    #[must_use]
    pub fn plus(&self, b: Vec2) -> Vec2 {
        *self + b
    }

    #[must_use]
    pub fn minus(&self, b: Vec2) -> Vec2 {
        *self - b
    }
    pub fn subtract(&mut self, b: Vec2) {
        *self -= b;
    }

    #[must_use]
    pub fn inverse(&self) -> Vec2 {
        -self
    }
    pub fn invert(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
    }

    #[must_use]
    pub fn times(&self, s: f32) -> Vec2 {
        *self * s
    }
    pub fn multiply(&mut self, s: f32) {
        *self *= s;
    }

    #[must_use]
    pub fn slash(&self, s: f32) -> Vec2 {
        *self / s
    }
    pub fn divide(&mut self, s: f32) {
        *self /= s;
    }
    pub fn checked_slash(&self, s: f32) -> Result<Vec2, InvalidArgument> {
        check_divisor(s)?;
        Ok(self.slash(s))
    }
    pub fn try_divide(&mut self, s: f32) -> Result<(), InvalidArgument> {
        check_divisor(s)?;
        self.divide(s);
        Ok(())
    }

    #[must_use]
    pub fn dot(&self, b: Vec2) -> f32 {
        self.x * b.x + self.y * b.y
    }

    /// Computes the 2D cross product, i.e. the `z` component of the 3D cross product of the
    /// two vectors extended with `z = 0`.
    ///
    /// It is positive if `b` is counter-clockwise from `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggmath::core::prelude::*;
    /// assert_eq!(Vec2::X.cross(Vec2::Y), 1.0);
    /// assert_eq!(Vec2::X.cross(Vec2::Y), Vec3::X.cross(Vec3::Y).z);
    /// ```
    #[must_use]
    pub fn cross(&self, b: Vec2) -> f32 {
        self.x * b.y - self.y * b.x
    }

    #[must_use]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }
    #[must_use]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns `self / |self|`. The vector must be non-zero.
    #[must_use]
    pub fn normalized(&self) -> Vec2 {
        let len = self.length();
        Vec2 {
            x: self.x / len,
            y: self.y / len,
        }
    }
    /// Sets `self` to `self / |self|`. The vector must be non-zero.
    pub fn normalize(&mut self) {
        let len = self.length();
        self.x /= len;
        self.y /= len;
    }
    pub fn checked_normalized(&self) -> Result<Vec2, InvalidArgument> {
        check_length(self.length())?;
        Ok(self.normalized())
    }
    pub fn try_normalize(&mut self) -> Result<(), InvalidArgument> {
        check_length(self.length())?;
        self.normalize();
        Ok(())
    }

    /// Rotates counter-clockwise by `angle` radians. A zero angle returns `self` unchanged.
    #[must_use]
    pub fn rotated(&self, angle: f32) -> Vec2 {
        if angle == 0.0 {
            return *self;
        }
        let (s, c) = angle.sin_cos();
        Vec2 {
            x: self.x * c - self.y * s,
            y: self.x * s + self.y * c,
        }
    }

    /// Checks if the vector is approximately equal to another vector.
    ///
    /// Two vectors are considered approximately equal if the length of their difference
    /// is less than [`EPSILON`](crate::core::config::EPSILON).
    #[must_use]
    pub fn almost_eq(&self, rhs: Vec2) -> bool {
        (*self - rhs).length() < EPSILON
    }

    #[must_use]
    pub fn lerp(&self, to: Vec2, t: f32) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        Vec2 {
            x: linalg::lerp(self.x, to.x, t),
            y: linalg::lerp(self.y, to.y, t),
        }
    }
}

impl Zero for Vec2 {
    fn zero() -> Self {
        Vec2::ZERO
    }

    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Vec2 {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        [value.x, value.y]
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        write!(f, "vec(")?;
        if let Some(p) = precision {
            write!(f, "{0:.1$}", self.x, p)?;
            write!(f, ", {0:.1$}", self.y, p)?;
        } else {
            write!(f, "{}, {}", self.x, self.y)?;
        }
        write!(f, ")")
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign<Vec2> for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl SubAssign<Vec2> for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Sum<Vec2> for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Self {
        iter.fold(Vec2::ZERO, Vec2::add)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Self::Output {
        Vec2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
impl Mul<Vec2> for f32 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f32) -> Self::Output {
        Vec2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl DivAssign<f32> for Vec2 {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}
impl Neg for &Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}
