use crate::cordic::{cordic, fold_quadrant, Mode, Vector3};
use crate::round::round_half_up;

// The engine shifts truncate small components to zero within a few
// stages. Scaling the folded vector up keeps every 16 bit input in the
// accurate range; the angle is unaffected.
const SCALE: u32 = 16;

/// Phase angle of `(x, y)` in units of 1/65536 turn.
///
/// `0` is 0 degrees and the value wraps at a full turn, so `16384` is
/// 90 degrees. Axis-aligned inputs map exactly to the four cardinal
/// angles, bypassing the iteration so rounding can not push them into
/// the wrong quadrant.
pub fn phase_16(x: i16, y: i16) -> u16 {
    if x == 0 {
        return if y >= 0 { 0x4000 } else { 0xc000 };
    }
    if y == 0 {
        return if x >= 0 { 0 } else { 0x8000 };
    }

    let (xf, yf, quadrant) = fold_quadrant(x as i64, y as i64);
    let v = cordic(
        Vector3 {
            x: xf << SCALE,
            y: yf << SCALE,
            z: 0,
        },
        Mode::Vector,
    );
    // z is in pi/2^24 units; 9 bits down gives a 14 bit quarter turn.
    let a = round_half_up(v.z, 9) as u16;
    ((quadrant as u16) << 14) | (a & 0x3fff)
}

/// Phase angle of `(x, y)` in units of 1/2^24 turn.
///
/// Same structure as [`phase_16`] with a 22 bit quarter turn. The
/// quarter-turn value is added, not or-ed, so a rounding carry at the
/// top of a quadrant propagates into the quadrant bits.
pub fn phase_24(x: i16, y: i16) -> u32 {
    if x == 0 {
        return if y >= 0 { 0x40_0000 } else { 0xc0_0000 };
    }
    if y == 0 {
        return if x >= 0 { 0 } else { 0x80_0000 };
    }

    let (xf, yf, quadrant) = fold_quadrant(x as i64, y as i64);
    let v = cordic(
        Vector3 {
            x: xf << SCALE,
            y: yf << SCALE,
            z: 0,
        },
        Mode::Vector,
    );
    let a = round_half_up(v.z, 1);
    ((((quadrant as i64) << 22) + a) & 0xff_ffff) as u32
}
