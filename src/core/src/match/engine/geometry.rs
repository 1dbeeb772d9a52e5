use nalgebra::Vector2;

/// Length guard for direction math: a zero denominator becomes 1, so the
/// result degenerates to a zero vector instead of NaN.
#[inline]
pub fn non_zero(len: f32) -> f32 {
    if len == 0.0 {
        1.0
    } else {
        len
    }
}

pub fn distance(a: Vector2<f32>, b: Vector2<f32>) -> f32 {
    (b - a).norm()
}

/// Unit vector from `from` toward `to`; zero vector when both coincide.
pub fn direction(from: Vector2<f32>, to: Vector2<f32>) -> Vector2<f32> {
    let delta = to - from;
    delta / non_zero(delta.norm())
}

/// Distance from `point` to the segment `a`-`b`, with the projection
/// parameter clamped to [0, 1].
pub fn distance_to_segment(point: Vector2<f32>, a: Vector2<f32>, b: Vector2<f32>) -> f32 {
    let ab = b - a;
    let t = ((point - a).dot(&ab) / non_zero(ab.norm_squared())).clamp(0.0, 1.0);
    let projection = a + ab * t;
    (point - projection).norm()
}
