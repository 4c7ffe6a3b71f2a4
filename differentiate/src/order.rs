//! Differentiation order.

//---------------------------------------------------------------------------------------------------- Use
use std::{fmt, num::NonZeroU8};

use crate::DerivativeError;

//---------------------------------------------------------------------------------------------------- Order
/// Accuracy order of the finite difference formula.
///
/// Higher orders use wider stencils: an order `n` formula has a truncation
/// error of `O(h^n)` and evaluates the target at `n + 1` nodes.
///
/// Central stencils are symmetric, so odd orders are rounded up to the next
/// even order; [`Order::get`] still returns what was requested.
///
/// ```rust
/// # use diffbench_differentiate::*;
/// let order = Order::new(7).unwrap();
/// assert_eq!(order.get(), 7);
/// assert_eq!(order.accuracy(), 8);
/// assert_eq!(order.half_width(), 4);
///
/// assert_eq!(Order::new(0), Err(DerivativeError::ZeroOrder));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Order(NonZeroU8);

impl Order {
    /// The order used when none is specified.
    pub const DEFAULT: Self = match NonZeroU8::new(8) {
        Some(n) => Self(n),
        None => unreachable!(),
    };

    /// Create an [`Order`].
    ///
    /// # Errors
    /// Returns [`DerivativeError::ZeroOrder`] if `order` is `0`.
    pub const fn new(order: u8) -> Result<Self, DerivativeError> {
        match NonZeroU8::new(order) {
            Some(n) => Ok(Self(n)),
            None => Err(DerivativeError::ZeroOrder),
        }
    }

    /// The requested order.
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// The order actually used, always even.
    pub const fn accuracy(self) -> u16 {
        let n = self.0.get() as u16;
        n + (n & 1)
    }

    /// Number of stencil nodes on each side of the evaluation point.
    pub const fn half_width(self) -> usize {
        (self.accuracy() / 2) as usize
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Order {
    type Error = DerivativeError;

    fn try_from(order: u8) -> Result<Self, Self::Error> {
        Self::new(order)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
