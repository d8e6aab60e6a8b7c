include!(concat!(env!("OUT_DIR"), "/cordic_table.rs"));

/// Reciprocal of the pseudo-rotation gain accumulated over the 24
/// microrotations, as a 2^16-scaled integer (0.60725293 * 2^16).
pub const CORDIC_GAIN: i64 = 0x9b75;

/// Engine operating mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Drive `z` toward zero, rotating `(x, y)` by the initial angle.
    Rotation,
    /// Drive `y` toward zero; `z` accumulates the angle of the input
    /// vector and `x` converges to its gain-scaled magnitude.
    Vector,
}

/// Working triple of the engine: vector components and angle
/// accumulator in a shared fixed-point scale where `1 << 24` on `z`
/// represents pi.
///
/// `i64` leaves headroom for the shift-add growth of 24 compounding
/// stages on inputs up to 32 bits wide.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Vector3 {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

/// Run the 24-stage CORDIC shift-add pipeline.
///
/// All stages always execute; latency does not depend on the data.
/// Rotation mode converges for `|z|` within the cumulative sum of the
/// angle table (about +-99.7 degrees in its scale). Out-of-range
/// inputs silently lose angular accuracy, so callers fold into the
/// first quadrant beforehand.
pub fn cordic(v: Vector3, mode: Mode) -> Vector3 {
    let Vector3 {
        mut x,
        mut y,
        mut z,
    } = v;
    for (i, &a) in CORDIC_ATAN.iter().enumerate() {
        let up = match mode {
            Mode::Rotation => z < 0,
            Mode::Vector => y >= 0,
        };
        // Both branches must read the pre-update x and y.
        let (dx, dy) = (y >> i, x >> i);
        if up {
            x += dx;
            y -= dy;
            z += a;
        } else {
            x -= dx;
            y += dy;
            z -= a;
        }
    }
    Vector3 { x, y, z }
}

/// Fold `(x, y)` into its first-quadrant equivalent.
///
/// Returns the folded vector and the quadrant index (0..=3) that
/// callers re-apply as an angular offset of a quarter turn per count
/// when unfolding.
pub fn fold_quadrant(x: i64, y: i64) -> (i64, i64, u32) {
    if x > 0 && y >= 0 {
        (x, y, 0)
    } else if x <= 0 && y > 0 {
        (y, -x, 1)
    } else if x < 0 && y <= 0 {
        (-x, -y, 2)
    } else {
        (-y, x, 3)
    }
}
