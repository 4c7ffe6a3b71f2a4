//! Finite difference stencils.
//!
//! Weights are generated with Fornberg's algorithm
//! (B. Fornberg, "Generation of finite difference formulas on arbitrarily
//! spaced grids", Math. Comp. 51, 1988), which works for any node layout
//! and derivative order.

//---------------------------------------------------------------------------------------------------- Use
use crate::Order;

//---------------------------------------------------------------------------------------------------- Stencil
/// A first-derivative stencil on unit-spaced nodes.
///
/// For a step `h`, the derivative estimate at `x` is
/// `sum(weights[i] * f(x + offsets[i] * h)) / h`.
///
/// ```rust
/// # use diffbench_differentiate::{stencil::Stencil, Order};
/// let stencil = Stencil::central(Order::new(2).unwrap());
/// assert_eq!(stencil.offsets(), &[-1.0, 0.0, 1.0]);
/// assert_eq!(stencil.weights(), &[-0.5, 0.0, 0.5]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Stencil {
    /// Node positions, in units of the step.
    offsets: Vec<f64>,
    /// Weight of each node.
    weights: Vec<f64>,
}

impl Stencil {
    /// Symmetric stencil for `order`: nodes `-m..=m` with `m = order.half_width()`.
    pub fn central(order: Order) -> Self {
        let m = i32::from(order.accuracy() / 2);
        let offsets: Vec<f64> = (-m..=m).map(f64::from).collect();
        let weights = fornberg(1, &offsets);

        Self { offsets, weights }
    }

    /// Node positions, in units of the step.
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// Weight of each node, same order as [`Stencil::offsets`].
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Number of nodes, i.e. function evaluations per application.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Always `false`, a stencil has at least 3 nodes.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Weighted sum of `values`, which must be `f` evaluated at each node.
    ///
    /// The result still has to be divided by the step.
    pub fn apply(&self, values: &[f64]) -> f64 {
        debug_assert_eq!(values.len(), self.len());

        self.weights
            .iter()
            .zip(values)
            .map(|(w, v)| w * v)
            .sum()
    }
}

//---------------------------------------------------------------------------------------------------- Free functions
/// Finite difference weights for the `derivative`-th derivative at `0`,
/// given arbitrary distinct `nodes`.
///
/// Returns one weight per node. `nodes.len()` must be greater than `derivative`.
///
/// ```rust
/// # use diffbench_differentiate::stencil::fornberg;
/// // Second derivative, 3-point central.
/// assert_eq!(fornberg(2, &[-1.0, 0.0, 1.0]), vec![1.0, -2.0, 1.0]);
///
/// // First derivative, 2-point forward.
/// assert_eq!(fornberg(1, &[0.0, 1.0]), vec![-1.0, 1.0]);
/// ```
///
/// # Panics
/// Panics if `nodes` is empty.
pub fn fornberg(derivative: usize, nodes: &[f64]) -> Vec<f64> {
    let n = nodes.len();
    assert!(n > 0, "fornberg() needs at least one node");

    // c[j][k]: weight of node j for the k-th derivative.
    let mut c = vec![vec![0.0_f64; derivative + 1]; n];
    c[0][0] = 1.0;

    let mut c1 = 1.0;
    let mut c4 = nodes[0];

    for i in 1..n {
        let mn = i.min(derivative);
        let mut c2 = 1.0;
        let c5 = c4;
        c4 = nodes[i];

        for j in 0..i {
            let c3 = nodes[i] - nodes[j];
            c2 *= c3;

            if j == i - 1 {
                for k in (1..=mn).rev() {
                    c[i][k] = c1 * (as_f64(k) * c[i - 1][k - 1] - c5 * c[i - 1][k]) / c2;
                }
                c[i][0] = -c1 * c5 * c[i - 1][0] / c2;
            }

            for k in (1..=mn).rev() {
                c[j][k] = (c4 * c[j][k] - as_f64(k) * c[j][k - 1]) / c3;
            }
            c[j][0] = c4 * c[j][0] / c3;
        }

        c1 = c2;
    }

    c.into_iter().map(|row| row[derivative]).collect()
}

/// Derivative orders are tiny, this is always exact.
#[expect(clippy::cast_precision_loss)]
const fn as_f64(k: usize) -> f64 {
    k as f64
}
