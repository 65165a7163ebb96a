#[allow(unused_imports)]
use crate::core::prelude::*;

use num_traits::Zero;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
};

/// An integer vector with 3 components, e.g. a cell in a voxel grid.
#[derive(
    Default,
    Debug,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Copy,
    Clone,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    bincode::Encode,
    bincode::Decode,
)]
pub struct IVec3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl IVec3 {
    pub const ZERO: IVec3 = IVec3::splat(0);
    pub const ONE: IVec3 = IVec3::splat(1);

    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> IVec3 {
        IVec3 { x, y, z }
    }
    #[must_use]
    pub const fn splat(value: i32) -> IVec3 {
        IVec3 {
            x: value,
            y: value,
            z: value,
        }
    }

    #[must_use]
    pub fn as_vec3(&self) -> Vec3 {
        Vec3 {
            x: self.x as f32,
            y: self.y as f32,
            z: self.z as f32,
        }
    }

    /// Iterates over every point in the half-open box `[start, end)`, varying `z` fastest.
    ///
    /// # Examples
    ///
    /// ```
    /// use ggmath::core::prelude::*;
    /// let points = IVec3::range(IVec3::ZERO, IVec3::new(2, 1, 2)).collect::<Vec<_>>();
    /// assert_eq!(points, vec![
    ///     IVec3::new(0, 0, 0),
    ///     IVec3::new(0, 0, 1),
    ///     IVec3::new(1, 0, 0),
    ///     IVec3::new(1, 0, 1),
    /// ]);
    /// ```
    pub fn range(start: IVec3, end: IVec3) -> impl Iterator<Item = IVec3> {
        (start.x..end.x)
            .cartesian_product(start.y..end.y)
            .cartesian_product(start.z..end.z)
            .map(|((x, y), z)| IVec3 { x, y, z })
    }
    pub fn range_from_zero(end: impl Into<IVec3>) -> impl Iterator<Item = IVec3> {
        Self::range(IVec3::ZERO, end.into())
    }
}

impl Zero for IVec3 {
    fn zero() -> Self {
        IVec3::ZERO
    }

    fn is_zero(&self) -> bool {
        *self == IVec3::ZERO
    }
}

impl From<[i32; 3]> for IVec3 {
    fn from(value: [i32; 3]) -> Self {
        IVec3 {
            x: value[0],
            y: value[1],
            z: value[2],
        }
    }
}

impl From<IVec3> for [i32; 3] {
    fn from(value: IVec3) -> Self {
        [value.x, value.y, value.z]
    }
}

impl From<IVec3> for Vec3 {
    fn from(value: IVec3) -> Self {
        value.as_vec3()
    }
}

impl fmt::Display for IVec3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "vec({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add<IVec3> for IVec3 {
    type Output = IVec3;

    fn add(self, rhs: IVec3) -> Self::Output {
        IVec3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl AddAssign<IVec3> for IVec3 {
    fn add_assign(&mut self, rhs: IVec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub<IVec3> for IVec3 {
    type Output = IVec3;

    fn sub(self, rhs: IVec3) -> Self::Output {
        IVec3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl SubAssign<IVec3> for IVec3 {
    fn sub_assign(&mut self, rhs: IVec3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Mul<i32> for IVec3 {
    type Output = IVec3;

    fn mul(self, rhs: i32) -> Self::Output {
        IVec3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}
impl Mul<IVec3> for i32 {
    type Output = IVec3;

    fn mul(self, rhs: IVec3) -> Self::Output {
        rhs * self
    }
}

impl Neg for IVec3 {
    type Output = IVec3;

    fn neg(self) -> Self::Output {
        IVec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
