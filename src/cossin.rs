use crate::complex::Complex;
use crate::cordic::{cordic, Mode, Vector3};

// 1/1.647 * 2^24: seeding x with the gain reciprocal pre-corrects the
// pseudo-rotation gain, leaving the output amplitude just under 2^24.
const GAIN_INV_24B: i64 = 0x9b_6f23;

/// Cosine and sine of `theta` over a full turn.
///
/// `theta` is in units of 1/2^24 turn; bits above the low 24 wrap.
/// Bits 23:22 select the quadrant of the cosine/sine pair: the low 22
/// bits are folded straight or mirrored onto the first quarter turn
/// and the converged components negated to restore full-circle
/// symmetry. Output amplitude is about 0.99985 * 2^24.
pub fn cossin_24(theta: i32) -> Complex<i32> {
    let bit22 = (theta >> 22) & 1 != 0;
    let bit23 = (theta >> 23) & 1 != 0;
    let low = (theta & 0x3f_ffff) as i64;
    let folded = if bit22 { 0x3f_ffff - low } else { low };

    // The angle table is pi-based while theta counts a full turn, so
    // the folded angle is rescaled by one bit.
    let v = cordic(
        Vector3 {
            x: GAIN_INV_24B,
            y: 0,
            z: folded << 1,
        },
        Mode::Rotation,
    );

    let cos = if bit22 != bit23 { -v.x } else { v.x };
    let sin = if bit23 { -v.y } else { v.y };
    Complex(cos as i32, sin as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    const GAIN: f64 = 1.646760258121;
    const AMPLITUDE: f64 = GAIN_INV_24B as f64 * GAIN;

    #[test]
    fn cardinal_points() {
        let c = cossin_24(0);
        assert!((c.0 as f64 - AMPLITUDE).abs() < 256.0);
        assert!((c.1 as f64).abs() < 256.0);

        let c = cossin_24(1 << 22);
        assert!((c.0 as f64).abs() < 256.0);
        assert!((c.1 as f64 - AMPLITUDE).abs() < 256.0);

        let c = cossin_24(1 << 23);
        assert!((c.0 as f64 + AMPLITUDE).abs() < 256.0);
        assert!((c.1 as f64).abs() < 256.0);

        let c = cossin_24(3 << 22);
        assert!((c.0 as f64).abs() < 256.0);
        assert!((c.1 as f64 + AMPLITUDE).abs() < 256.0);
    }

    #[test]
    fn wraparound_exact() {
        for &theta in &[0, 1, 12_345, 1 << 22, 0x2b_1234, (1 << 24) - 1] {
            assert_eq!(cossin_24(theta), cossin_24(theta + (1 << 24)));
        }
    }

    #[test]
    fn sweep_error_max_rms() {
        const PHASE_DEPTH: usize = 14;
        const STEPS: usize = 1 << PHASE_DEPTH;

        let mut max_err = (0f64, 0f64);
        let mut rms_err = (0f64, 0f64);
        for i in 0..STEPS {
            let theta = (i << (24 - PHASE_DEPTH)) as i32;
            let have = cossin_24(theta);

            let radians = 2. * PI * theta as f64 / (1 << 24) as f64;
            let want = (AMPLITUDE * radians.cos(), AMPLITUDE * radians.sin());

            let err = (have.0 as f64 - want.0, have.1 as f64 - want.1);
            max_err.0 = max_err.0.max(err.0.abs());
            max_err.1 = max_err.1.max(err.1.abs());
            rms_err.0 += err.0 * err.0;
            rms_err.1 += err.1 * err.1;
        }
        rms_err.0 = (rms_err.0 / STEPS as f64).sqrt();
        rms_err.1 = (rms_err.1 / STEPS as f64).sqrt();

        println!("max: {:.2} {:.2}", max_err.0, max_err.1);
        println!("rms: {:.2} {:.2}", rms_err.0, rms_err.1);

        assert!(max_err.0 < 300.0);
        assert!(max_err.1 < 300.0);
        assert!(rms_err.0 < 64.0);
        assert!(rms_err.1 < 64.0);
    }
}
