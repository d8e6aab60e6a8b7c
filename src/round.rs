use num_traits::{PrimInt, Signed};

/// Round-half-up right shift.
///
/// Shifts `din` right by `bits` and adds one if the highest bit shifted
/// out was set. This is the MATLAB-style `round()` on a power-of-two
/// divide (half always rounds toward positive infinity), not
/// round-to-even, and every narrowing of a wide accumulator in this
/// crate goes through it.
///
/// Callers must guarantee `1 <= bits < width`. The contract is checked
/// with `debug_assert!` only; release builds produce garbage outside it.
pub fn round_half_up<T: PrimInt + Signed>(din: T, bits: u32) -> T {
    debug_assert!(bits >= 1);
    debug_assert!(bits < T::zero().count_zeros());
    let half = (din >> (bits - 1) as usize) & T::one();
    (din >> bits as usize) + half
}
