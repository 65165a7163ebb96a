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

/// A 4D vector using 32-bit floating point coordinates, usually holding homogeneous
/// coordinates.
///
/// By convention `w = 1` for a point and `w = 0` for a direction (a point at infinity).
/// Arithmetic treats all four components alike; [`cross()`](Vec4::cross),
/// [`dot3()`](Vec4::dot3) and [`dehomogenized()`](Vec4::dehomogenized) are the operations
/// that give `w` its special meaning.
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
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Vec4 = Vec4::splat(0.0);
    pub const ONE: Vec4 = Vec4::splat(1.0);
    pub const X: Vec4 = Vec4::new(1.0, 0.0, 0.0, 0.0);
    pub const Y: Vec4 = Vec4::new(0.0, 1.0, 0.0, 0.0);
    pub const Z: Vec4 = Vec4::new(0.0, 0.0, 1.0, 0.0);
    pub const W: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
        Vec4 { x, y, z, w }
    }
    #[must_use]
    pub const fn splat(v: f32) -> Vec4 {
        Vec4 {
            x: v,
            y: v,
            z: v,
            w: v,
        }
    }

    /// Returns the perspective divide `(x / w, y / w, z / w)`.
    ///
    /// `w` must be non-zero; directions (`w = 0`) have no Cartesian equivalent.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggmath::core::prelude::*;
    /// let v = Vec4::new(1.0, 2.0, 3.0, 2.0);
    /// assert_eq!(v.dehomogenized(), Vec3::new(0.5, 1.0, 1.5));
    /// ```
    #[must_use]
    pub fn dehomogenized(&self) -> Vec3 {
        Vec3 {
            x: self.x / self.w,
            y: self.y / self.w,
            z: self.z / self.w,
        }
    }
    pub fn checked_dehomogenized(&self) -> Result<Vec3, InvalidArgument> {
        if self.w == 0.0 {
            return Err(InvalidArgument::ZeroHomogeneousCoordinate("w"));
        }
        Ok(self.dehomogenized())
    }
    /// Drops `w` without dividing by it.
    #[must_use]
    pub fn xyz(&self) -> Vec3 {
        Vec3 {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }

    /// Returns the sum `self + b`. The in-place form is `+=`.
    #[must_use]
    pub fn plus(&self, b: Vec4) -> Vec4 {
        *self + b
    }

    #[must_use]
    pub fn minus(&self, b: Vec4) -> Vec4 {
        *self - b
    }
    pub fn subtract(&mut self, b: Vec4) {
        *self -= b;
    }

    #[must_use]
    pub fn inverse(&self) -> Vec4 {
        -self
    }
    pub fn invert(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self.w = -self.w;
    }

    #[must_use]
    pub fn times(&self, s: f32) -> Vec4 {
        *self * s
    }
    pub fn multiply(&mut self, s: f32) {
        *self *= s;
    }

    /// Returns the division of `self` by the scalar `s`, which must be non-zero.
    #[must_use]
    pub fn slash(&self, s: f32) -> Vec4 {
        *self / s
    }
    /// Sets `self` to the division of `self` by the scalar `s`, which must be non-zero.
    pub fn divide(&mut self, s: f32) {
        *self /= s;
    }
    pub fn checked_slash(&self, s: f32) -> Result<Vec4, InvalidArgument> {
        check_divisor(s)?;
        Ok(self.slash(s))
    }
    pub fn try_divide(&mut self, s: f32) -> Result<(), InvalidArgument> {
        check_divisor(s)?;
        self.divide(s);
        Ok(())
    }

    /// Computes the cross product of the `xyz` parts of `self` and `b`.
    ///
    /// The `w` of the result is copied from `self`; `b.w` is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggmath::core::prelude::*;
    /// let a = Vec4::new(1.0, 0.0, 0.0, 1.0);
    /// let b = Vec4::new(0.0, 1.0, 0.0, 5.0);
    /// assert_eq!(a.cross(b), Vec4::new(0.0, 0.0, 1.0, 1.0));
    /// ```
    #[must_use]
    pub fn cross(&self, b: Vec4) -> Vec4 {
        Vec4 {
            x: self.y * b.z - self.z * b.y,
            y: self.z * b.x - self.x * b.z,
            z: self.x * b.y - self.y * b.x,
            w: self.w,
        }
    }

    #[must_use]
    pub fn dot(&self, b: Vec4) -> f32 {
        self.x * b.x + self.y * b.y + self.z * b.z + self.w * b.w
    }
    /// Dot product of the `xyz` parts only, for when `w` is not a geometric coordinate.
    #[must_use]
    pub fn dot3(&self, b: Vec4) -> f32 {
        self.x * b.x + self.y * b.y + self.z * b.z
    }

    #[must_use]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }
    /// Returns the Euclidean length over all four components.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns `self / |self|`. The vector must be non-zero.
    #[must_use]
    pub fn normalized(&self) -> Vec4 {
        let len = self.length();
        Vec4 {
            x: self.x / len,
            y: self.y / len,
            z: self.z / len,
            w: self.w / len,
        }
    }
    /// Sets `self` to `self / |self|`. The vector must be non-zero.
    pub fn normalize(&mut self) {
        let len = self.length();
        self.x /= len;
        self.y /= len;
        self.z /= len;
        self.w /= len;
    }
    pub fn checked_normalized(&self) -> Result<Vec4, InvalidArgument> {
        check_length(self.length())?;
        Ok(self.normalized())
    }
    pub fn try_normalize(&mut self) -> Result<(), InvalidArgument> {
        check_length(self.length())?;
        self.normalize();
        Ok(())
    }

    #[must_use]
    pub fn almost_eq(&self, rhs: Vec4) -> bool {
        (*self - rhs).length() < EPSILON
    }

    /// Linearly interpolates between this vector and `to`. `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(&self, to: Vec4, t: f32) -> Vec4 {
        let t = t.clamp(0.0, 1.0);
        Vec4 {
            x: linalg::lerp(self.x, to.x, t),
            y: linalg::lerp(self.y, to.y, t),
            z: linalg::lerp(self.z, to.z, t),
            w: linalg::lerp(self.w, to.w, t),
        }
    }
}

impl Zero for Vec4 {
    fn zero() -> Self {
        Vec4::ZERO
    }

    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0 && self.w == 0.0
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(value: [f32; 4]) -> Self {
        Vec4 {
            x: value[0],
            y: value[1],
            z: value[2],
            w: value[3],
        }
    }
}

impl From<Vec4> for [f32; 4] {
    fn from(value: Vec4) -> Self {
        [value.x, value.y, value.z, value.w]
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "vec(")?;
        if let Some(p) = f.precision() {
            write!(
                f,
                "{0:.4$}, {1:.4$}, {2:.4$}, {3:.4$}",
                self.x, self.y, self.z, self.w, p
            )?;
        } else {
            write!(f, "{}, {}, {}, {}", self.x, self.y, self.z, self.w)?;
        }
        write!(f, ")")
    }
}

impl Add<Vec4> for Vec4 {
    type Output = Vec4;

    fn add(self, rhs: Vec4) -> Self::Output {
        Vec4 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}
impl AddAssign<Vec4> for Vec4 {
    fn add_assign(&mut self, rhs: Vec4) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
        self.w += rhs.w;
    }
}

impl Sub<Vec4> for Vec4 {
    type Output = Vec4;

    fn sub(self, rhs: Vec4) -> Self::Output {
        Vec4 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}
impl SubAssign<Vec4> for Vec4 {
    fn sub_assign(&mut self, rhs: Vec4) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
        self.w -= rhs.w;
    }
}

impl Sum<Vec4> for Vec4 {
    fn sum<I: Iterator<Item = Vec4>>(iter: I) -> Self {
        iter.fold(Vec4::ZERO, Vec4::add)
    }
}

impl Mul<f32> for Vec4 {
    type Output = Vec4;

    fn mul(self, rhs: f32) -> Self::Output {
        Vec4 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            w: self.w * rhs,
        }
    }
}
impl Mul<Vec4> for f32 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Vec4 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
        self.w *= rhs;
    }
}

impl Div<f32> for Vec4 {
    type Output = Vec4;

    fn div(self, rhs: f32) -> Self::Output {
        Vec4 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
            w: self.w / rhs,
        }
    }
}
impl DivAssign<f32> for Vec4 {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
        self.w /= rhs;
    }
}

impl Neg for Vec4 {
    type Output = Vec4;

    fn neg(self) -> Self::Output {
        Vec4 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}
impl Neg for &Vec4 {
    type Output = Vec4;

    fn neg(self) -> Self::Output {
        -*self
    }
}
