use crate::cordic::{cordic, Mode, Vector3, CORDIC_GAIN};
use crate::round::round_half_up;

// Sign-only reflection into the first quadrant, then the gain-corrected
// 2^16-scaled norm from the converged x component.
fn scaled_norm(x: i32, y: i32) -> i64 {
    let v = cordic(
        Vector3 {
            x: (x as i64).abs(),
            y: (y as i64).abs(),
            z: 0,
        },
        Mode::Vector,
    );
    v.x * CORDIC_GAIN
}

/// Euclidean norm of `(x, y)`, rounded back into the input scale.
pub fn magnitude(x: i32, y: i32) -> u32 {
    round_half_up(scaled_norm(x, y), 16) as u32
}

/// Unrounded 2^16-scaled norm of `(x, y)` for callers that need the
/// extra range or precision of the raw gain product.
pub fn magnitude_wide(x: i32, y: i32) -> u64 {
    scaled_norm(x, y) as u64
}
