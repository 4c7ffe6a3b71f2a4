#![doc = include_str!("../README.md")]

//---------------------------------------------------------------------------------------------------- Public API
mod derivative;
mod error;
mod function;
mod order;
pub mod stencil;

pub use derivative::{derivative, Derivative, Estimate, Options, Status, ERROR_GROWTH};
pub use error::DerivativeError;
pub use function::{Polynomial, Sin, Target, TargetFunction, TargetKind};
pub use order::Order;

/// Name of this derivative routine, as shown in benchmark reports.
pub const SOURCE: &str = "diffbench";

//---------------------------------------------------------------------------------------------------- Private Usage
#[cfg(test)]
use pretty_assertions as _;
#[cfg(test)]
use proptest as _;

//----------------------------------------------------------------------------------------------------
