//! Fixed-size vector types.
//!
//! Every arithmetic operation comes as a pair: a pure form returning a new value
//! (`plus`, `minus`, `inverse`, `times`, `slash`, `normalized`) and an in-place form mutating
//! the receiver (`+=`, `subtract`, `invert`, `multiply`, `divide`, `normalize`). Both forms
//! perform the same floating point operations in the same order, so their results are
//! bit-identical.
//!
//! The unchecked operations do not validate their arguments: dividing by zero, normalising a
//! zero vector or dehomogenising with a zero divisor yields infinities or NaN. Each of these
//! also has a checked counterpart (`checked_*`, `try_*`) that reports an [`InvalidArgument`].

mod ivec3;
mod vec2;
mod vec3;
mod vec4;

pub use ivec3::IVec3;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// The argument passed to a checked vector operation would have produced a non-finite result.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgument {
    #[error("division by a zero scalar")]
    ZeroDivisor,
    #[error("cannot normalise a zero-length vector")]
    ZeroLength,
    #[error("cannot dehomogenise: `{0}` component is zero")]
    ZeroHomogeneousCoordinate(&'static str),
}

/// A linear interpolation between two values.
///
/// # Examples
/// ```
/// use ggmath::core::prelude::*;
/// let start = 0.0;
/// let end = 10.0;
/// assert_eq!(linalg::lerp(start, end, 0.0), start);
/// assert_eq!(linalg::lerp(start, end, 1.0), end);
/// assert_eq!(linalg::lerp(start, end, 0.5), 5.0);
/// ```
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

fn check_divisor(s: f32) -> Result<(), InvalidArgument> {
    if s == 0.0 {
        Err(InvalidArgument::ZeroDivisor)
    } else {
        Ok(())
    }
}

fn check_length(len: f32) -> Result<(), InvalidArgument> {
    if len == 0.0 {
        Err(InvalidArgument::ZeroLength)
    } else {
        Ok(())
    }
}
