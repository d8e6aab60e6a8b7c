use serde::{Deserialize, Serialize};

/// An `(in-phase, quadrature)` pair, also used as the `(cos, sin)`
/// result of [`crate::cossin_24`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Complex<T>(pub T, pub T);
