//! The derivative routine.

//---------------------------------------------------------------------------------------------------- Use
use std::cell::RefCell;

use diffbench_helper::reclaim;

use crate::{stencil::Stencil, DerivativeError, Order, Target};

//---------------------------------------------------------------------------------------------------- Constants
/// Iteration stops with [`Status::ErrorIncreased`] once the error
/// estimate exceeds the previous one by more than this factor.
pub const ERROR_GROWTH: f64 = 10.0;

thread_local! {
    /// Node values of the outermost [`Derivative::estimate`] running on this thread.
    static SCRATCH: RefCell<Vec<f64>> = const { RefCell::new(Vec::new()) };
}

//---------------------------------------------------------------------------------------------------- Options
/// Step and tolerance settings of [`Derivative`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Options {
    /// Step used in the first iteration.
    pub initial_step: f64,
    /// The step is divided by this after each iteration, must be `> 1`.
    pub step_factor: f64,
    /// Maximum number of iterations, must be `> 0`.
    pub max_iter: usize,
    /// Absolute tolerance of the stopping condition.
    pub atol: f64,
    /// Relative tolerance of the stopping condition.
    pub rtol: f64,
}

impl Options {
    /// Default [`Options::initial_step`].
    pub const INITIAL_STEP: f64 = 0.5;
    /// Default [`Options::step_factor`].
    pub const STEP_FACTOR: f64 = 2.0;
    /// Default [`Options::max_iter`].
    pub const MAX_ITER: usize = 10;

    /// Check every field is usable.
    ///
    /// # Errors
    /// Returns [`DerivativeError::InvalidOptions`] naming the first bad field.
    pub fn validate(&self) -> Result<(), DerivativeError> {
        if !(self.initial_step.is_finite() && self.initial_step > 0.0) {
            return Err(DerivativeError::InvalidOptions(
                "initial_step must be positive and finite",
            ));
        }
        if !(self.step_factor.is_finite() && self.step_factor > 1.0) {
            return Err(DerivativeError::InvalidOptions(
                "step_factor must be finite and greater than 1",
            ));
        }
        if self.max_iter == 0 {
            return Err(DerivativeError::InvalidOptions("max_iter must be positive"));
        }
        if !(self.atol >= 0.0 && self.rtol >= 0.0) {
            return Err(DerivativeError::InvalidOptions(
                "tolerances must be non-negative",
            ));
        }

        Ok(())
    }
}

impl Default for Options {
    /// `atol` is the smallest positive normal [`f64`],
    /// `rtol` is the square root of [`f64::EPSILON`].
    fn default() -> Self {
        Self {
            initial_step: Self::INITIAL_STEP,
            step_factor: Self::STEP_FACTOR,
            max_iter: Self::MAX_ITER,
            atol: f64::MIN_POSITIVE,
            rtol: f64::EPSILON.sqrt(),
        }
    }
}

//---------------------------------------------------------------------------------------------------- Status
/// Why iteration stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// The error estimate met the tolerances.
    Converged,
    /// The error estimate grew past [`ERROR_GROWTH`] times the previous one,
    /// the previous estimate was kept.
    ErrorIncreased,
    /// [`Options::max_iter`] was reached before converging.
    MaxIterations,
}

impl Status {
    /// Returns `true` for [`Status::Converged`].
    pub const fn is_converged(self) -> bool {
        matches!(self, Self::Converged)
    }
}

//---------------------------------------------------------------------------------------------------- Estimate
/// Result of one derivative computation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Estimate {
    /// The derivative estimate.
    pub df: f64,
    /// Difference from the previous iteration's estimate,
    /// infinite if only one iteration ran.
    pub error: f64,
    /// Why iteration stopped.
    pub status: Status,
    /// Iterations whose estimate was considered.
    pub iterations: usize,
    /// Total calls to the target function.
    pub evaluations: usize,
}

//---------------------------------------------------------------------------------------------------- Derivative
/// A reusable derivative routine for a fixed [`Order`] and [`Options`].
///
/// ```rust
/// # use diffbench_differentiate::*;
/// let routine = Derivative::new(Order::new(4).unwrap());
/// let poly = Polynomial::ascending(10);
///
/// let estimate = routine.estimate(&poly, 0.0).unwrap();
/// assert!((estimate.df - 2.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Derivative {
    order: Order,
    options: Options,
    stencil: Stencil,
}

impl Derivative {
    /// Create a routine with default [`Options`].
    pub fn new(order: Order) -> Self {
        Self {
            order,
            options: Options::default(),
            stencil: Stencil::central(order),
        }
    }

    /// Create a routine with custom [`Options`].
    ///
    /// # Errors
    /// Returns an error if `options` fails [`Options::validate`].
    pub fn with_options(order: Order, options: Options) -> Result<Self, DerivativeError> {
        options.validate()?;

        Ok(Self {
            order,
            options,
            stencil: Stencil::central(order),
        })
    }

    /// The order of this routine.
    pub const fn order(&self) -> Order {
        self.order
    }

    /// The options of this routine.
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Estimate the first derivative of `target` at `x`.
    ///
    /// # Errors
    /// - [`DerivativeError::NonFinitePoint`] if `x` is not finite
    /// - [`DerivativeError::NonFiniteValue`] if `target` returns `NaN` or an infinity at any node
    pub fn estimate<T>(&self, target: &T, x: f64) -> Result<Estimate, DerivativeError>
    where
        T: Target + ?Sized,
    {
        if !x.is_finite() {
            return Err(DerivativeError::NonFinitePoint(x));
        }

        let len = self.stencil.len();

        SCRATCH.with(|scratch| {
            if let Ok(mut values) = scratch.try_borrow_mut() {
                if values.capacity() < len {
                    let old = std::mem::replace(&mut *values, Vec::with_capacity(len));
                    reclaim::retire(old);
                }
                return self.iterate(target, x, &mut values);
            }

            // `target` is itself computing a derivative.
            let mut values = Vec::with_capacity(len);
            let result = self.iterate(target, x, &mut values);
            reclaim::retire(values);
            result
        })
    }

    /// The refinement loop, `values` is scratch space for node evaluations.
    fn iterate<T>(
        &self,
        target: &T,
        x: f64,
        values: &mut Vec<f64>,
    ) -> Result<Estimate, DerivativeError>
    where
        T: Target + ?Sized,
    {
        let Options {
            initial_step,
            step_factor,
            max_iter,
            atol,
            rtol,
        } = self.options;

        let mut h = initial_step;
        let mut evaluations = 0;
        // (df, error) of the previous iteration.
        let mut previous: Option<(f64, f64)> = None;

        for iteration in 1..=max_iter {
            values.clear();
            for offset in self.stencil.offsets() {
                let node = x + offset * h;
                let value = target.eval(node);
                evaluations += 1;

                if !value.is_finite() {
                    return Err(DerivativeError::NonFiniteValue { x: node, value });
                }
                values.push(value);
            }

            let df = self.stencil.apply(values) / h;
            let error = previous.map_or(f64::INFINITY, |(last_df, _)| (df - last_df).abs());

            if let Some((last_df, last_error)) = previous {
                if iteration > 2 && error_increased(error, last_error) {
                    return Ok(Estimate {
                        df: last_df,
                        error: last_error,
                        status: Status::ErrorIncreased,
                        iterations: iteration - 1,
                        evaluations,
                    });
                }
            }

            if error < atol + rtol * df.abs() {
                return Ok(Estimate {
                    df,
                    error,
                    status: Status::Converged,
                    iterations: iteration,
                    evaluations,
                });
            }

            previous = Some((df, error));
            h /= step_factor;
        }

        // `max_iter > 0` is validated, so at least one iteration ran.
        let (df, error) = previous.unwrap_or((f64::NAN, f64::INFINITY));

        Ok(Estimate {
            df,
            error,
            status: Status::MaxIterations,
            iterations: max_iter,
            evaluations,
        })
    }
}

//---------------------------------------------------------------------------------------------------- Free functions
/// Returns `true` if `error` grew past [`ERROR_GROWTH`] times `last_error`.
fn error_increased(error: f64, last_error: f64) -> bool {
    error > ERROR_GROWTH * last_error
}

/// Estimate the first derivative of `target` at `x` with default [`Options`].
///
/// This builds the stencil on every call,
/// use [`Derivative`] to compute it once.
///
/// ```rust
/// # use diffbench_differentiate::*;
/// let estimate = derivative(&Sin, 0.0, Order::new(8).unwrap()).unwrap();
/// assert!((estimate.df - 1.0).abs() < 1e-9);
/// assert!(estimate.status.is_converged());
/// ```
///
/// # Errors
/// See [`Derivative::estimate`].
pub fn derivative<T>(target: &T, x: f64, order: Order) -> Result<Estimate, DerivativeError>
where
    T: Target + ?Sized,
{
    Derivative::new(order).estimate(target, x)
}
