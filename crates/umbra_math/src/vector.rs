use crate::{Vec3, EPSILON};

/// Extra vector operations used by the tracer on top of glam.
pub trait VecExt {
    /// Normalize with `EPSILON` added to the length.
    ///
    /// Unlike `normalize()`, this never produces NaN or infinity: a zero
    /// vector stays zero and a near-zero vector stays small.
    fn normalize_guarded(self) -> Self;

    /// Mean of the three channels.
    fn average(self) -> f64;
}

impl VecExt for Vec3 {
    #[inline]
    fn normalize_guarded(self) -> Self {
        self * (1.0 / (self.length() + EPSILON))
    }

    #[inline]
    fn average(self) -> f64 {
        (self.x + self.y + self.z) / 3.0
    }
}
