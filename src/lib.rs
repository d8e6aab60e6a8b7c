#![cfg_attr(not(test), no_std)]

mod complex;
pub use complex::*;
mod cordic;
pub use cordic::*;
mod cossin;
pub use cossin::*;
mod magnitude;
pub use magnitude::*;
mod phase;
pub use phase::*;
mod round;
pub use round::*;
