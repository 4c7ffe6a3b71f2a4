//! Derivative routine errors.

//---------------------------------------------------------------------------------------------------- DerivativeError
/// Errors returned by [`derivative`](crate::derivative) and [`Derivative`](crate::Derivative).
///
/// Failing to converge is _not_ an error, see [`Status`](crate::Status).
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum DerivativeError {
    /// An order of `0` was requested.
    #[error("differentiation order must be positive")]
    ZeroOrder,

    /// The point to differentiate at was `NaN` or infinite.
    #[error("evaluation point is not finite: {0}")]
    NonFinitePoint(f64),

    /// The target function returned `NaN` or an infinity inside the stencil.
    #[error("target function returned {value} at x = {x}")]
    NonFiniteValue {
        /// The stencil node that was evaluated.
        x: f64,
        /// What the target returned.
        value: f64,
    },

    /// [`Options`](crate::Options) failed validation.
    #[error("invalid derivative options: {0}")]
    InvalidOptions(&'static str),
}
