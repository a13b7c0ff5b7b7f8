/// A point in normalized chord coordinates, `[x, y]`.
pub type Point = [f64; 2];

pub trait PointOps {
    /// Mirror the point in the chord line (negate the vertical component).
    fn mirrored(&self) -> Point;
}

impl PointOps for Point {
    /// Mirror the point in the chord line (negate the vertical component).
    fn mirrored(&self) -> Point {
        [self[0], -self[1]]
    }
}

/// Clear the sign of a negative zero so it prints as `0`.
pub fn unsigned_zero(val: f64) -> f64 {
    if val == 0.0 {
        0.0
    } else {
        val
    }
}
