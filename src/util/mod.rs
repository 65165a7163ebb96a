use crate::core::prelude::*;

use tracing_subscriber::fmt::time::OffsetTime;

pub mod linalg;

/// Installs a global `tracing` subscriber writing to [`LOG_FILE`].
///
/// Only the first call can succeed; later calls return an error instead of replacing the
/// existing subscriber.
pub fn setup_log() -> Result<()> {
    let logfile = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(LOG_FILE)
        .with_context(|| format!("could not open log file `{LOG_FILE}`"))?;
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_writer(logfile)
        .try_init()
        .map_err(|e| anyhow!("could not install log subscriber: {e}"))?;
    Ok(())
}

pub mod gg_float {
    use crate::util::linalg::{Vec2, Vec3, Vec4};
    use anyhow::{Result, bail};
    use num_traits::Zero;
    use std::num::FpCategory;

    /// Finiteness in the engine's sense: zero or normal. Subnormals, infinities and NaN are
    /// all rejected.
    pub trait GgFloat {
        fn is_finite(&self) -> bool;
    }

    impl GgFloat for f32 {
        fn is_finite(&self) -> bool {
            self.is_normal() || self.is_zero()
        }
    }

    impl GgFloat for Vec2 {
        fn is_finite(&self) -> bool {
            is_finite(self.x) && is_finite(self.y)
        }
    }

    impl GgFloat for Vec3 {
        fn is_finite(&self) -> bool {
            is_finite(self.x) && is_finite(self.y) && is_finite(self.z)
        }
    }

    impl GgFloat for Vec4 {
        fn is_finite(&self) -> bool {
            is_finite(self.x) && is_finite(self.y) && is_finite(self.z) && is_finite(self.w)
        }
    }

    pub fn is_finite(x: f32) -> bool {
        matches!(x.classify(), FpCategory::Zero | FpCategory::Normal)
    }

    /// Rounds `x` to the nearest integer, failing if the result does not fit in an `i32`.
    pub fn f32_to_i32(x: f32) -> Result<i32> {
        let rounded = x.round();
        if rounded.is_nan() || rounded >= i32::MAX as f32 || rounded < i32::MIN as f32 {
            bail!("{x} does not fit in range of i32");
        }
        #[allow(clippy::cast_possible_truncation)]
        Ok(rounded as i32)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn is_finite_rejects_subnormals() {
            assert!(is_finite(0.0));
            assert!(is_finite(-0.0));
            assert!(is_finite(1.5));
            assert!(!is_finite(f32::MIN_POSITIVE / 2.0));
            assert!(!is_finite(f32::INFINITY));
            assert!(!is_finite(f32::NAN));
        }

        #[test]
        fn vectors_are_finite_only_if_every_component_is() {
            assert!(Vec2::new(1.0, 2.0).is_finite());
            assert!(!Vec2::new(1.0, f32::NAN).is_finite());
            assert!(Vec3::new(1.0, 2.0, 3.0).is_finite());
            assert!(!Vec3::new(1.0, 2.0, f32::NEG_INFINITY).is_finite());
            assert!(Vec4::new(1.0, 2.0, 3.0, 0.0).is_finite());
            assert!(!Vec4::new(1.0, 2.0, 3.0, f32::INFINITY).is_finite());
        }

        #[test]
        fn f32_to_i32_rounds() {
            assert_eq!(f32_to_i32(1.4).unwrap(), 1);
            assert_eq!(f32_to_i32(-2.6).unwrap(), -3);
            assert!(f32_to_i32(3e9).is_err());
            assert!(f32_to_i32(-3e9).is_err());
            assert!(f32_to_i32(f32::NAN).is_err());
        }
    }
}
