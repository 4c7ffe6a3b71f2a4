//! Target functions.

//---------------------------------------------------------------------------------------------------- Use
use std::{fmt, str::FromStr};

//---------------------------------------------------------------------------------------------------- Target
/// A real function of one real argument that can be differentiated.
///
/// Implemented for every `Fn(f64) -> f64`, so closures work directly:
///
/// ```rust
/// # use diffbench_differentiate::*;
/// let square = |x: f64| x * x;
/// assert_eq!(square.eval(3.0), 9.0);
/// ```
pub trait Target {
    /// Evaluate the function at `x`.
    fn eval(&self, x: f64) -> f64;
}

impl<F> Target for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

//---------------------------------------------------------------------------------------------------- Sin
/// `sin(x)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Sin;

impl Target for Sin {
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        x.sin()
    }
}

//---------------------------------------------------------------------------------------------------- Polynomial
/// A polynomial `c_0 + c_1*x + ... + c_n*x^n` over a fixed coefficient list.
///
/// ```rust
/// # use diffbench_differentiate::*;
/// // 1 + 2x + 3x^2
/// let p = Polynomial::new(vec![1.0, 2.0, 3.0]);
/// assert_eq!(p.eval(2.0), 17.0);
/// assert_eq!(p.degree(), Some(2));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polynomial {
    /// `coefficients[i]` multiplies `x^i`.
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Create a polynomial from coefficients in ascending power order.
    pub const fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// The polynomial with coefficients `1, 2, ..., len`, i.e. `c_i = i + 1`.
    ///
    /// ```rust
    /// # use diffbench_differentiate::*;
    /// let p = Polynomial::ascending(10);
    /// assert_eq!(p.coefficients()[0], 1.0);
    /// assert_eq!(p.coefficients()[9], 10.0);
    /// assert_eq!(p.eval(1.0), 55.0);
    /// ```
    pub fn ascending(len: u32) -> Self {
        Self::new((1..=len).map(f64::from).collect())
    }

    /// The coefficients, in ascending power order.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Index of the highest coefficient, [`None`] for the empty polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    /// The derivative polynomial `c_1 + 2*c_2*x + ...`.
    ///
    /// ```rust
    /// # use diffbench_differentiate::*;
    /// let p = Polynomial::new(vec![5.0, 1.0, 3.0]).differentiate();
    /// assert_eq!(p.coefficients(), &[1.0, 6.0]);
    /// ```
    #[must_use]
    pub fn differentiate(&self) -> Self {
        let coefficients = self
            .coefficients
            .iter()
            .zip(1_u32..)
            .skip(1)
            .map(|(c, power)| c * f64::from(power - 1))
            .collect();

        Self::new(coefficients)
    }
}

impl Target for Polynomial {
    /// Horner evaluation of `sum(c_i * x^i)`.
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc * x + c)
    }
}

//---------------------------------------------------------------------------------------------------- TargetKind
/// The target functions selectable by name.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// [`Sin`].
    #[default]
    Sin,
    /// [`Polynomial::ascending`] with 10 coefficients.
    Polynomial,
}

impl TargetKind {
    /// Every [`TargetKind`].
    pub const ALL: [Self; 2] = [Self::Sin, Self::Polynomial];

    /// Number of coefficients of the [`TargetKind::Polynomial`] target.
    pub const POLYNOMIAL_LEN: u32 = 10;

    /// The name used in reports and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Polynomial => "polynomial",
        }
    }

    /// Build the function this kind names.
    pub fn build(self) -> TargetFunction {
        match self {
            Self::Sin => TargetFunction::Sin(Sin),
            Self::Polynomial => {
                TargetFunction::Polynomial(Polynomial::ascending(Self::POLYNOMIAL_LEN))
            }
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown target function: {s}"))
    }
}

//---------------------------------------------------------------------------------------------------- TargetFunction
/// One of the built-in target functions.
#[derive(Clone, Debug, PartialEq)]
pub enum TargetFunction {
    /// `sin(x)`.
    Sin(Sin),
    /// A fixed polynomial.
    Polynomial(Polynomial),
}

impl From<TargetKind> for TargetFunction {
    fn from(kind: TargetKind) -> Self {
        kind.build()
    }
}

impl Target for TargetFunction {
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Sin(f) => f.eval(x),
            Self::Polynomial(f) => f.eval(x),
        }
    }
}
