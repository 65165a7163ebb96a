#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::gg_float;
use crate::util::linalg::{check_divisor, check_length};
use num_traits::Zero;
use std::cmp::Ordering;
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A 3D vector using 32-bit floating point coordinates.
///
/// [`Vec3`] is a plain value type: it is [`Copy`], and every operation either returns a new
/// vector or mutates the receiver in place. See the [module documentation](super) for how the
/// pure and in-place forms pair up.
///
/// # Examples
///
/// ```
/// use ggmath::core::prelude::*;
///
/// let a = Vec3::new(1.0, 2.0, 3.0);
/// let b = Vec3::new(4.0, 5.0, 6.0);
/// assert_eq!(a.plus(b), Vec3::new(5.0, 7.0, 9.0));
///
/// let mut c = a;
/// c += b;
/// assert_eq!(c, a + b);
/// ```
///
/// # Equality
/// Equality is exact IEEE equality of each component, so `NaN != NaN` and `0.0 == -0.0`.
/// Use [`almost_eq()`](Vec3::almost_eq) for comparisons that should tolerate rounding.
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
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::splat(0.0);
    pub const ONE: Vec3 = Vec3::splat(1.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }

    /// Creates a new vector with all components set to the given value.
    #[must_use]
    pub const fn splat(v: f32) -> Vec3 {
        Vec3 { x: v, y: v, z: v }
    }

    /// Returns the homogeneous coordinates of this point, i.e. `w = 1`.
    #[must_use]
    pub fn homogenized(&self) -> Vec4 {
        Vec4 {
            x: self.x,
            y: self.y,
            z: self.z,
            w: 1.0,
        }
    }

    /// Returns the homogeneous coordinates of the point at infinity in the direction of this
    /// vector, i.e. `w = 0`. Transforming the result ignores translation.
    #[must_use]
    pub fn homogenized_as_direction(&self) -> Vec4 {
        Vec4 {
            x: self.x,
            y: self.y,
            z: self.z,
            w: 0.0,
        }
    }

    /// Returns the perspective divide `(x / z, y / z)`.
    ///
    /// `z` must be non-zero; otherwise the result contains infinities or NaN. See
    /// [`checked_dehomogenized()`](Vec3::checked_dehomogenized).
    ///
    /// # Examples
    ///
    /// ```
    /// use ggmath::core::prelude::*;
    /// let v = Vec3::new(2.0, 4.0, 2.0);
    /// assert_eq!(v.dehomogenized(), Vec2::new(1.0, 2.0));
    /// ```
    #[must_use]
    pub fn dehomogenized(&self) -> Vec2 {
        Vec2 {
            x: self.x / self.z,
            y: self.y / self.z,
        }
    }
    pub fn checked_dehomogenized(&self) -> Result<Vec2, InvalidArgument> {
        if self.z == 0.0 {
            return Err(InvalidArgument::ZeroHomogeneousCoordinate("z"));
        }
        Ok(self.dehomogenized())
    }

    /// Returns the sum `self + b`.
    ///
    /// The in-place form is `+=`.
    #[must_use]
    pub fn plus(&self, b: Vec3) -> Vec3 {
        *self + b
    }

    /// Returns the difference `self - b`.
    ///
    /// See also [`subtract()`](Vec3::subtract).
    #[must_use]
    pub fn minus(&self, b: Vec3) -> Vec3 {
        *self - b
    }
    /// Sets `self` to the difference `self - b`.
    pub fn subtract(&mut self, b: Vec3) {
        *self -= b;
    }

    /// Returns the additive inverse `-self`.
    ///
    /// See also [`invert()`](Vec3::invert).
    #[must_use]
    pub fn inverse(&self) -> Vec3 {
        -self
    }
    /// Sets `self` to its additive inverse.
    pub fn invert(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    /// Returns the product of `self` with the scalar `s`.
    ///
    /// See also [`multiply()`](Vec3::multiply).
    #[must_use]
    pub fn times(&self, s: f32) -> Vec3 {
        *self * s
    }
    /// Sets `self` to the product of `self` with the scalar `s`.
    pub fn multiply(&mut self, s: f32) {
        *self *= s;
    }

    /// Returns the division of `self` by the scalar `s`, which must be non-zero.
    ///
    /// See also [`divide()`](Vec3::divide) and [`checked_slash()`](Vec3::checked_slash).
    #[must_use]
    pub fn slash(&self, s: f32) -> Vec3 {
        *self / s
    }
    /// Sets `self` to the division of `self` by the scalar `s`, which must be non-zero.
    pub fn divide(&mut self, s: f32) {
        *self /= s;
    }
    pub fn checked_slash(&self, s: f32) -> Result<Vec3, InvalidArgument> {
        check_divisor(s)?;
        Ok(self.slash(s))
    }
    /// Like [`divide()`](Vec3::divide), but leaves `self` untouched if `s` is zero.
    pub fn try_divide(&mut self, s: f32) -> Result<(), InvalidArgument> {
        check_divisor(s)?;
        self.divide(s);
        Ok(())
    }

    /// Computes the right-handed cross product `self × b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggmath::core::prelude::*;
    /// assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    /// assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
    /// ```
    #[must_use]
    pub fn cross(&self, b: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * b.z - self.z * b.y,
            y: self.z * b.x - self.x * b.z,
            z: self.x * b.y - self.y * b.x,
        }
    }

    #[must_use]
    pub fn dot(&self, b: Vec3) -> f32 {
        self.x * b.x + self.y * b.y + self.z * b.z
    }

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`length()`](Vec3::length) when comparing lengths to avoid the
    /// square root.
    #[must_use]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns the Euclidean length `|self|`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggmath::core::prelude::*;
    /// assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
    /// ```
    #[must_use]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns `self / |self|`.
    ///
    /// The vector must be non-zero: a zero vector yields NaN components. See
    /// [`normalize()`](Vec3::normalize) for the in-place form and
    /// [`checked_normalized()`](Vec3::checked_normalized) for a validating one.
    #[must_use]
    pub fn normalized(&self) -> Vec3 {
        let len = self.length();
        Vec3 {
            x: self.x / len,
            y: self.y / len,
            z: self.z / len,
        }
    }
    /// Sets `self` to `self / |self|`. The vector must be non-zero.
    pub fn normalize(&mut self) {
        let len = self.length();
        self.x /= len;
        self.y /= len;
        self.z /= len;
    }
    pub fn checked_normalized(&self) -> Result<Vec3, InvalidArgument> {
        check_length(self.length())?;
        Ok(self.normalized())
    }
    /// Like [`normalize()`](Vec3::normalize), but leaves `self` untouched if it has zero length.
    pub fn try_normalize(&mut self) -> Result<(), InvalidArgument> {
        check_length(self.length())?;
        self.normalize();
        Ok(())
    }

    /// Rotates around the x-axis by `angle` radians.
    ///
    /// A zero angle returns `self` unchanged, bit for bit.
    #[must_use]
    pub fn rotate_x(&self, angle: f32) -> Vec3 {
        if angle == 0.0 {
            return *self;
        }
        let (s, c) = angle.sin_cos();
        Vec3 {
            x: self.x,
            y: self.y * c - self.z * s,
            z: self.y * s + self.z * c,
        }
    }

    /// Rotates around the y-axis by `angle` radians.
    ///
    /// A zero angle returns `self` unchanged, bit for bit.
    #[must_use]
    pub fn rotate_y(&self, angle: f32) -> Vec3 {
        if angle == 0.0 {
            return *self;
        }
        let (s, c) = angle.sin_cos();
        Vec3 {
            x: self.x * c + self.z * s,
            y: self.y,
            z: -self.x * s + self.z * c,
        }
    }

    /// Rotates around the z-axis by `angle` radians.
    ///
    /// A zero angle returns `self` unchanged, bit for bit.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggmath::core::prelude::*;
    /// let rotated = Vec3::X.rotate_z(std::f32::consts::FRAC_PI_2);
    /// assert!(rotated.almost_eq(Vec3::Y));
    /// ```
    #[must_use]
    pub fn rotate_z(&self, angle: f32) -> Vec3 {
        if angle == 0.0 {
            return *self;
        }
        let (s, c) = angle.sin_cos();
        Vec3 {
            x: self.x * c - self.y * s,
            y: self.x * s + self.y * c,
            z: self.z,
        }
    }

    /// Rotates around an arbitrary `axis` by `angle` radians, using the Rodrigues rotation
    /// matrix:
    /// ```text
    /// | c + t·x²      t·x·y - s·z   t·x·z + s·y |
    /// | t·x·y + s·z   c + t·y²      t·y·z - s·x |
    /// | t·x·z - s·y   t·y·z + s·x   c + t·z²    |
    /// ```
    /// where `(x, y, z)` is `axis` normalised, `c = cos(angle)`, `s = sin(angle)` and
    /// `t = 1 - c`.
    ///
    /// `axis` must be non-zero. A zero angle returns `self` unchanged without looking at `axis`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggmath::core::prelude::*;
    /// let angle = 0.7;
    /// let v = Vec3::new(1.0, 2.0, 3.0);
    /// assert!(v.rotate_axis(Vec3::Z, angle).almost_eq(v.rotate_z(angle)));
    /// ```
    #[must_use]
    pub fn rotate_axis(&self, axis: Vec3, angle: f32) -> Vec3 {
        if angle == 0.0 {
            return *self;
        }
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let u = axis.normalized();

        let rm0 = Vec3 {
            x: u.x * u.x + c * (1.0 - u.x * u.x),
            y: u.x * u.y * t - s * u.z,
            z: u.x * u.z * t + s * u.y,
        };
        let rm1 = Vec3 {
            x: u.x * u.y * t + s * u.z,
            y: u.y * u.y + c * (1.0 - u.y * u.y),
            z: u.y * u.z * t - s * u.x,
        };
        let rm2 = Vec3 {
            x: u.x * u.z * t - s * u.y,
            y: u.y * u.z * t + s * u.x,
            z: u.z * u.z + c * (1.0 - u.z * u.z),
        };
        Vec3 {
            x: self.dot(rm0),
            y: self.dot(rm1),
            z: self.dot(rm2),
        }
    }

    /// The axis rotation shipped by earlier versions of this library, kept for callers whose
    /// stored data depends on its exact output. New code should use
    /// [`rotate_axis()`](Vec3::rotate_axis).
    ///
    /// Three matrix entries differ from the Rodrigues matrix: row 0 column 2 adds `s·z`
    /// instead of `s·y`, row 1 column 0 uses `t·x·x` instead of `t·x·y`, and row 2 column 1
    /// scales `y·z` by `c` instead of `t`. The result is therefore only a rotation for some
    /// inputs; for example with `axis = Z` it agrees with [`rotate_z()`](Vec3::rotate_z) only
    /// when `self.z == 0`.
    #[must_use]
    pub fn rotate_axis_legacy(&self, axis: Vec3, angle: f32) -> Vec3 {
        if angle == 0.0 {
            return *self;
        }
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let u = axis.normalized();

        let rm0 = Vec3 {
            x: u.x * u.x + c * (1.0 - u.x * u.x),
            y: u.x * u.y * t - s * u.z,
            z: u.x * u.z * t + s * u.z,
        };
        let rm1 = Vec3 {
            x: u.x * u.x * t + s * u.z,
            y: u.y * u.y + c * (1.0 - u.y * u.y),
            z: u.y * u.z * t - s * u.x,
        };
        let rm2 = Vec3 {
            x: u.x * u.z * t - s * u.y,
            y: u.y * u.z * c + s * u.x,
            z: u.z * u.z + c * (1.0 - u.z * u.z),
        };
        Vec3 {
            x: self.dot(rm0),
            y: self.dot(rm1),
            z: self.dot(rm2),
        }
    }

    /// Checks if the vector is approximately equal to another vector.
    ///
    /// Two vectors are considered approximately equal if the length of their difference
    /// is less than [`EPSILON`](crate::core::config::EPSILON).
    #[must_use]
    pub fn almost_eq(&self, rhs: Vec3) -> bool {
        (*self - rhs).length() < EPSILON
    }

    #[must_use]
    pub fn distance(&self, other: Vec3) -> f32 {
        (other - *self).length()
    }

    /// Linearly interpolates between this vector and `to`. `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(&self, to: Vec3, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        Vec3 {
            x: linalg::lerp(self.x, to.x, t),
            y: linalg::lerp(self.y, to.y, t),
            z: linalg::lerp(self.z, to.z, t),
        }
    }

    #[must_use]
    pub fn abs(&self) -> Vec3 {
        Vec3 {
            x: self.x.abs(),
            y: self.y.abs(),
            z: self.z.abs(),
        }
    }

    /// Performs a component-wise multiplication of two vectors.
    #[must_use]
    pub fn component_wise(&self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }

    /// Compares two vectors based on their squared length.
    ///
    /// If either vector contains NaN, [`partial_cmp()`](f32::partial_cmp) fails and the
    /// comparison falls back to [`total_cmp()`](f32::total_cmp), logging a warning.
    #[must_use]
    pub fn cmp_by_length(&self, other: &Vec3) -> Ordering {
        let self_len = self.length_squared();
        let other_len = other.length_squared();
        self_len.partial_cmp(&other_len).unwrap_or_else(|| {
            warn!(
                "cmp_by_length(): partial_cmp() failed: {} vs. {}",
                self, other
            );
            self_len.total_cmp(&other_len)
        })
    }

    #[must_use]
    pub fn extend(&self, w: f32) -> Vec4 {
        Vec4 {
            x: self.x,
            y: self.y,
            z: self.z,
            w,
        }
    }
    /// Drops the `z` component without dividing by it.
    #[must_use]
    pub fn truncate(&self) -> Vec2 {
        Vec2 {
            x: self.x,
            y: self.y,
        }
    }

    /// Converts to an [`IVec3`] by rounding each component to the nearest integer.
    ///
    /// Out-of-range components saturate and NaN becomes 0; see
    /// [`try_as_ivec3()`](Vec3::try_as_ivec3) for a conversion that rejects them.
    #[must_use]
    pub fn as_ivec3_lossy(&self) -> IVec3 {
        IVec3 {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
            z: self.z.round() as i32,
        }
    }
    pub fn try_as_ivec3(&self) -> Result<IVec3> {
        Ok(IVec3 {
            x: gg_float::f32_to_i32(self.x).with_context(|| format!("{self}: x"))?,
            y: gg_float::f32_to_i32(self.y).with_context(|| format!("{self}: y"))?,
            z: gg_float::f32_to_i32(self.z).with_context(|| format!("{self}: z"))?,
        })
    }
}

impl Zero for Vec3 {
    fn zero() -> Self {
        Vec3::ZERO
    }

    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Vec3 {
            x: value[0],
            y: value[1],
            z: value[2],
        }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        [value.x, value.y, value.z]
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "vec(")?;
        if let Some(p) = f.precision() {
            write!(f, "{0:.3$}, {1:.3$}, {2:.3$}", self.x, self.y, self.z, p)?;
        } else {
            write!(f, "{}, {}, {}", self.x, self.y, self.z)?;
        }
        write!(f, ")")
    }
}

impl Add<Vec3> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl AddAssign<Vec3> for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub<Vec3> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl SubAssign<Vec3> for Vec3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Sum<Vec3> for Vec3 {
    fn sum<I: Iterator<Item = Vec3>>(iter: I) -> Self {
        iter.fold(Vec3::ZERO, Vec3::add)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Self::Output {
        Vec3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}
impl Mul<Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}
impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f32) -> Self::Output {
        Vec3 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}
impl DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
impl Neg for &Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        -*self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, PI};

    const SAMPLES: usize = 200;

    fn random_vec3(rng: &mut StdRng) -> Vec3 {
        Vec3 {
            x: rng.gen_range(-100.0..100.0),
            y: rng.gen_range(-100.0..100.0),
            z: rng.gen_range(-100.0..100.0),
        }
    }

    fn assert_bits_eq(a: Vec3, b: Vec3) {
        assert_eq!(a.x.to_bits(), b.x.to_bits(), "{a:?} vs. {b:?}");
        assert_eq!(a.y.to_bits(), b.y.to_bits(), "{a:?} vs. {b:?}");
        assert_eq!(a.z.to_bits(), b.z.to_bits(), "{a:?} vs. {b:?}");
    }

    fn assert_close(a: Vec3, b: Vec3, tolerance: f32) {
        let scale = a.length().max(b.length()).max(1.0);
        assert!(
            (a - b).length() <= tolerance * scale,
            "{a} vs. {b} (tolerance {tolerance})"
        );
    }

    // ==================== Arithmetic ====================

    #[test]
    fn vec3_addition() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, -5.0, 6.5);
        assert_eq!(a.plus(b), Vec3::new(5.0, -3.0, 9.5));
        assert_eq!(a + b, a.plus(b));

        let mut c = a;
        c += b;
        assert_eq!(c, Vec3::new(5.0, -3.0, 9.5));
    }

    #[test]
    fn vec3_addition_is_commutative_and_associative() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..SAMPLES {
            let a = random_vec3(&mut rng);
            let b = random_vec3(&mut rng);
            let c = random_vec3(&mut rng);
            assert_eq!(a.plus(b), b.plus(a));
            let error = (a.plus(b).plus(c) - a.plus(b.plus(c))).length();
            assert!(error <= 1e-6 * (a.length() + b.length() + c.length()));
        }
    }

    #[test]
    fn vec3_subtraction() {
        let a = Vec3::new(5.0, 6.0, 7.0);
        let b = Vec3::new(3.0, 4.0, 9.0);
        assert_eq!(a.minus(b), Vec3::new(2.0, 2.0, -2.0));

        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..SAMPLES {
            let a = random_vec3(&mut rng);
            let b = random_vec3(&mut rng);
            assert_eq!(a.minus(b), a.plus(b.inverse()));
        }
    }

    #[test]
    fn vec3_negation() {
        let a = Vec3::new(1.0, -2.0, 0.0);
        assert_eq!(a.inverse(), Vec3::new(-1.0, 2.0, 0.0));
        assert_eq!(-a, a.inverse());
        assert_eq!(-&a, a.inverse());
        assert!(a.inverse().z.is_sign_negative());
    }

    #[test]
    fn vec3_scalar_multiplication_and_division() {
        let a = Vec3::new(1.0, -2.0, 3.0);
        assert_eq!(a.times(2.0), Vec3::new(2.0, -4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a.slash(2.0), Vec3::new(0.5, -1.0, 1.5));

        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..SAMPLES {
            let a = random_vec3(&mut rng);
            let s = rng.gen_range(0.1..10.0);
            assert_close(a.times(s).slash(s), a, 1e-6);
        }
    }

    #[test]
    fn vec3_pure_and_in_place_agree() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..SAMPLES {
            let a = random_vec3(&mut rng);
            let b = random_vec3(&mut rng);
            let s = rng.gen_range(-10.0..10.0);

            let mut c = a;
            c += b;
            assert_bits_eq(a.plus(b), c);

            let mut c = a;
            c.subtract(b);
            assert_bits_eq(a.minus(b), c);

            let mut c = a;
            c.invert();
            assert_bits_eq(a.inverse(), c);

            let mut c = a;
            c.multiply(s);
            assert_bits_eq(a.times(s), c);

            let mut c = a;
            c.divide(s);
            assert_bits_eq(a.slash(s), c);

            let mut c = a;
            c.normalize();
            assert_bits_eq(a.normalized(), c);
        }
    }

    #[test]
    fn vec3_unchecked_division_by_zero_is_not_finite() {
        let v = Vec3::new(1.0, -1.0, 0.0).slash(0.0);
        assert_eq!(v.x, f32::INFINITY);
        assert_eq!(v.y, f32::NEG_INFINITY);
        assert!(v.z.is_nan());
        assert!(!v.is_finite());

        let n = Vec3::ZERO.normalized();
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
    }

    // ==================== Products and length ====================

    #[test]
    fn vec3_cross_product() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);

        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.cross(b), Vec3::new(-3.0, 6.0, -3.0));
    }

    #[test]
    fn vec3_cross_is_anti_commutative() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..SAMPLES {
            let a = random_vec3(&mut rng);
            let b = random_vec3(&mut rng);
            assert_eq!(a.cross(b), b.cross(a).inverse());
        }
    }

    #[test]
    fn vec3_dot_product() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, -5.0, 6.0);
        assert_eq!(a.dot(b), 12.0);
        assert_eq!(a.dot(a.cross(b)), 0.0);
    }

    #[test]
    fn vec3_dot_self_is_length_squared() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..SAMPLES {
            let a = random_vec3(&mut rng);
            let len = a.length();
            assert!((a.dot(a) - len * len).abs() <= 1e-5 * a.dot(a));
        }
    }

    #[test]
    fn vec3_length() {
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vec3::new(2.0, 3.0, 6.0).length(), 7.0);
        assert_eq!(Vec3::new(2.0, 3.0, 6.0).length_squared(), 49.0);
        assert_eq!(Vec3::ZERO.length(), 0.0);
    }

    #[test]
    fn vec3_normalized() {
        let n = Vec3::new(0.0, 3.0, 4.0).normalized();
        assert_eq!(n, Vec3::new(0.0, 0.6, 0.8));

        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..SAMPLES {
            let a = random_vec3(&mut rng);
            assert!((a.normalized().length() - 1.0).abs() < EPSILON);
        }
    }

    // ==================== Homogeneous coordinates ====================

    #[test]
    fn vec3_homogenized() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.homogenized(), Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(v.homogenized_as_direction(), Vec4::new(1.0, 2.0, 3.0, 0.0));
    }

    #[test]
    fn vec3_homogenized_round_trip_is_exact() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..SAMPLES {
            let v = random_vec3(&mut rng);
            assert_bits_eq(v.homogenized().dehomogenized(), v);
            assert_eq!(v.homogenized_as_direction().w, 0.0);
        }
    }

    #[test]
    fn vec3_dehomogenized() {
        assert_eq!(
            Vec3::new(2.0, 4.0, 2.0).dehomogenized(),
            Vec2::new(1.0, 2.0)
        );
        assert_eq!(
            Vec3::new(1.0, -3.0, -0.5).dehomogenized(),
            Vec2::new(-2.0, 6.0)
        );
    }

    // ==================== Rotation ====================

    #[test]
    fn vec3_rotation_by_zero_is_exact() {
        let inputs = [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-0.0, 0.1, 1e-30),
            Vec3::new(f32::NAN, f32::INFINITY, -0.0),
        ];
        for v in inputs {
            assert_bits_eq(v.rotate_x(0.0), v);
            assert_bits_eq(v.rotate_y(0.0), v);
            assert_bits_eq(v.rotate_z(0.0), v);
            assert_bits_eq(v.rotate_z(-0.0), v);
            assert_bits_eq(v.rotate_axis(Vec3::new(1.0, 1.0, 0.0), 0.0), v);
            // The axis is never inspected on the fast path.
            assert_bits_eq(v.rotate_axis(Vec3::ZERO, 0.0), v);
            assert_bits_eq(v.rotate_axis_legacy(Vec3::ZERO, 0.0), v);
        }
    }

    #[test]
    fn vec3_rotate_principal_axes() {
        assert!((Vec3::X.rotate_z(FRAC_PI_2) - Vec3::Y).length() < 1e-6);
        assert!((Vec3::Y.rotate_x(FRAC_PI_2) - Vec3::Z).length() < 1e-6);
        assert!((Vec3::Z.rotate_y(FRAC_PI_2) - Vec3::X).length() < 1e-6);

        // Rotating a vector lying on the axis leaves it alone.
        assert_eq!(Vec3::Z.rotate_z(1.0), Vec3::Z);
        assert_eq!(Vec3::X.rotate_x(1.0).x, 1.0);

        // Half turn.
        assert!(Vec3::new(1.0, 2.0, 3.0)
            .rotate_z(PI)
            .almost_eq(Vec3::new(-1.0, -2.0, 3.0)));
    }

    #[test]
    fn vec3_rotation_preserves_length() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..SAMPLES {
            let v = random_vec3(&mut rng);
            let axis = random_vec3(&mut rng);
            let angle = rng.gen_range(-PI..PI);
            let len = v.length();
            assert!((v.rotate_x(angle).length() - len).abs() <= 1e-5 * len);
            assert!((v.rotate_y(angle).length() - len).abs() <= 1e-5 * len);
            assert!((v.rotate_z(angle).length() - len).abs() <= 1e-5 * len);
            assert!((v.rotate_axis(axis, angle).length() - len).abs() <= 1e-5 * len);
        }
    }

    #[test]
    fn vec3_rotate_axis_matches_principal_rotations() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..SAMPLES {
            let v = random_vec3(&mut rng);
            let angle = rng.gen_range(-PI..PI);
            assert_close(v.rotate_axis(Vec3::X, angle), v.rotate_x(angle), 1e-6);
            assert_close(v.rotate_axis(Vec3::Y, angle), v.rotate_y(angle), 1e-6);
            assert_close(v.rotate_axis(Vec3::Z, angle), v.rotate_z(angle), 1e-6);
            // Axis length does not matter.
            assert_close(
                v.rotate_axis(Vec3::new(0.0, 0.0, 7.5), angle),
                v.rotate_z(angle),
                1e-6,
            );
        }
    }

    #[test]
    fn vec3_rotate_axis_keeps_axis_fixed() {
        let axis = Vec3::new(1.0, 1.0, 1.0);
        assert!(axis.rotate_axis(axis, 1.234).almost_eq(axis));

        // A third of a turn around the diagonal cycles the basis vectors.
        let turn = 2.0 * FRAC_PI_3;
        assert!(Vec3::X.rotate_axis(axis, turn).almost_eq(Vec3::Y));
        assert!(Vec3::Y.rotate_axis(axis, turn).almost_eq(Vec3::Z));
        assert!(Vec3::Z.rotate_axis(axis, turn).almost_eq(Vec3::X));
    }

    #[test]
    fn vec3_rotate_axis_legacy_reproduces_historical_matrix() {
        // Agrees with rotate_z in the xy-plane...
        let v = Vec3::new(1.0, 2.0, 0.0);
        assert!(v
            .rotate_axis_legacy(Vec3::Z, FRAC_PI_2)
            .almost_eq(v.rotate_z(FRAC_PI_2)));

        // ...but leaks z into x off the plane.
        let rotated = Vec3::Z.rotate_axis_legacy(Vec3::Z, FRAC_PI_2);
        assert!(rotated.almost_eq(Vec3::new(1.0, 0.0, 1.0)));
        assert!(!rotated.almost_eq(Vec3::Z.rotate_z(FRAC_PI_2)));

        // Around the x-axis, the legacy row 1 uses t·x·x in place of t·x·y.
        // With c = 0, s = 1, t = 1: rm1 = (1, 0, -1).
        let rotated = Vec3::new(1.0, 0.0, 0.0).rotate_axis_legacy(Vec3::X, FRAC_PI_2);
        assert!(rotated.almost_eq(Vec3::new(1.0, 1.0, 0.0)));
    }

    // ==================== Checked operations ====================

    #[test]
    fn vec3_checked_slash() {
        let v = Vec3::new(2.0, 4.0, 6.0);
        assert_eq!(v.checked_slash(2.0), Ok(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(v.checked_slash(0.0), Err(InvalidArgument::ZeroDivisor));
        assert_eq!(v.checked_slash(-0.0), Err(InvalidArgument::ZeroDivisor));

        let mut w = v;
        assert_eq!(w.try_divide(0.0), Err(InvalidArgument::ZeroDivisor));
        assert_bits_eq(w, v);
        assert_eq!(w.try_divide(2.0), Ok(()));
        assert_eq!(w, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn vec3_checked_normalized() {
        let v = Vec3::new(0.0, 0.0, 5.0);
        assert_eq!(v.checked_normalized(), Ok(Vec3::Z));
        assert_eq!(
            Vec3::ZERO.checked_normalized(),
            Err(InvalidArgument::ZeroLength)
        );

        let mut w = Vec3::ZERO;
        assert_eq!(w.try_normalize(), Err(InvalidArgument::ZeroLength));
        assert_bits_eq(w, Vec3::ZERO);

        let mut w = v;
        assert_eq!(w.try_normalize(), Ok(()));
        assert_eq!(w, Vec3::Z);
    }

    #[test]
    fn vec3_checked_dehomogenized() {
        assert_eq!(
            Vec3::new(2.0, 4.0, 2.0).checked_dehomogenized(),
            Ok(Vec2::new(1.0, 2.0))
        );
        assert_eq!(
            Vec3::new(2.0, 4.0, 0.0).checked_dehomogenized(),
            Err(InvalidArgument::ZeroHomogeneousCoordinate("z"))
        );
    }

    // ==================== Conversions and utilities ====================

    #[test]
    fn vec3_constants() {
        assert_eq!(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(Vec3::ONE, Vec3::splat(1.0));
        assert_eq!(Vec3::default(), Vec3::ZERO);
        assert!(Vec3::zero().is_zero());
        assert!(!Vec3::X.is_zero());
    }

    #[test]
    fn vec3_array_conversions() {
        let v: Vec3 = [1.0, 2.0, 3.0].into();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        let arr: [f32; 3] = v.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn vec3_extend_and_truncate() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.extend(4.0), Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(v.truncate(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn vec3_sum() {
        let vecs = vec![
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(3.0, -4.0, 0.5),
            Vec3::new(5.0, 6.0, -1.5),
        ];
        let sum: Vec3 = vecs.into_iter().sum();
        assert_eq!(sum, Vec3::new(9.0, 4.0, 2.0));
    }

    #[test]
    fn vec3_display() {
        let v = Vec3::new(1.5, 2.5, -3.0);
        assert_eq!(format!("{}", v), "vec(1.5, 2.5, -3)");
        let v = Vec3::new(1.23456, 7.89012, 0.0);
        assert_eq!(format!("{:.2}", v), "vec(1.23, 7.89, 0.00)");
    }

    #[test]
    fn vec3_almost_eq() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        assert!(a.almost_eq(Vec3::new(1.0 + EPSILON / 2.0, 2.0, 3.0)));
        assert!(!a.almost_eq(Vec3::new(1.1, 2.0, 3.0)));
        assert!(!a.almost_eq(Vec3::new(f32::NAN, 2.0, 3.0)));
    }

    #[test]
    fn vec3_distance_and_lerp() {
        let a = Vec3::new(1.0, 1.0, 1.0);
        let b = Vec3::new(3.0, 4.0, 7.0);
        assert_eq!(a.distance(b), 7.0);
        assert_eq!(a.lerp(b, 0.5), Vec3::new(2.0, 2.5, 4.0));
        assert_eq!(a.lerp(b, -1.0), a);
        assert_eq!(a.lerp(b, 2.0), b);
    }

    #[test]
    fn vec3_abs_and_component_wise() {
        let a = Vec3::new(-1.0, 2.0, -3.0);
        assert_eq!(a.abs(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(
            a.component_wise(Vec3::new(2.0, 3.0, -1.0)),
            Vec3::new(-2.0, 6.0, 3.0)
        );
    }

    #[test]
    fn vec3_cmp_by_length() {
        let short = Vec3::new(2.0, 3.0, 6.0);
        let long = Vec3::new(4.0, 6.0, 12.0);
        assert_eq!(short.cmp_by_length(&long), Ordering::Less);
        assert_eq!(long.cmp_by_length(&short), Ordering::Greater);
        assert_eq!(short.cmp_by_length(&short), Ordering::Equal);

        // Falls back to total_cmp rather than panicking.
        let nan = Vec3::new(f32::NAN, 0.0, 0.0);
        assert_ne!(short.cmp_by_length(&nan), Ordering::Equal);
    }

    #[test]
    fn vec3_ivec3_conversions() {
        let v = Vec3::new(1.4, -2.6, 3.5);
        assert_eq!(v.as_ivec3_lossy(), IVec3::new(1, -3, 4));
        assert_eq!(v.try_as_ivec3().unwrap(), IVec3::new(1, -3, 4));

        let too_big = Vec3::new(0.0, 1e10, 0.0);
        assert_eq!(too_big.as_ivec3_lossy(), IVec3::new(0, i32::MAX, 0));
        let err = too_big.try_as_ivec3().unwrap_err();
        assert!(format!("{err:#}").contains(": y"));
        assert!(Vec3::new(f32::NAN, 0.0, 0.0).try_as_ivec3().is_err());
    }

    #[test]
    fn vec3_bincode_round_trip() {
        let v = Vec3::new(1.0, -2.5, f32::MAX);
        let config = bincode::config::standard();
        let bytes = bincode::encode_to_vec(v, config).unwrap();
        let (decoded, len): (Vec3, usize) = bincode::decode_from_slice(&bytes, config).unwrap();
        assert_eq!(len, bytes.len());
        assert_bits_eq(decoded, v);
    }
}
