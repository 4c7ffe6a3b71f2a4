//! Number related
//!
//! `#[no_std]` compatible.

//---------------------------------------------------------------------------------------------------- Use
use core::ops::{Add, Div, Mul, Sub};

//---------------------------------------------------------------------------------------------------- Free Functions
#[inline]
/// Returns the average of two numbers; works with at least all integral and floating point types
///
/// ```rust
/// # use diffbench_helper::num::*;
/// assert_eq!(get_mid(0,        10),       5);
/// assert_eq!(get_mid(0.0,      10.0),     5.0);
/// assert_eq!(get_mid(-10.0,    10.0),     0.0);
/// assert_eq!(get_mid(i16::MIN, i16::MAX), -1);
/// assert_eq!(get_mid(u8::MIN,  u8::MAX),  127);
///
/// assert!(get_mid(f32::NAN, f32::NAN).is_nan());
/// ```
pub fn get_mid<T>(a: T, b: T) -> T
where
    T: Add<Output = T> + Sub<Output = T> + Div<Output = T> + Mul<Output = T> + Copy + From<u8>,
{
    let two: T = 2_u8.into();

    // Halve before adding so integer inputs near `MAX` cannot overflow.
    (a / two) + (b / two) + ((a - two * (a / two)) + (b - two * (b / two))) / two
}

#[inline]
/// Gets the median from a sorted slice.
///
/// ```rust
/// # use diffbench_helper::num::*;
/// let mut vec = vec![10, 5, 1, 4, 2, 8, 9, 7, 3, 6];
/// vec.sort();
///
/// assert_eq!(median(vec), 5);
/// assert_eq!(median([1.0, 2.0, 4.0]), 2.0);
/// ```
///
/// # Invariant
/// If not sorted the output will be invalid.
///
/// # Panics
/// This function panics if `array` is empty.
pub fn median<T>(array: impl AsRef<[T]>) -> T
where
    T: Add<Output = T>
        + Sub<Output = T>
        + Div<Output = T>
        + Mul<Output = T>
        + PartialOrd
        + Copy
        + From<u8>,
{
    let array = array.as_ref();
    let len = array.len();

    debug_assert!(array.is_sorted());

    let mid = len / 2;

    if len == 1 {
        return array[0];
    }

    if len % 2 == 0 {
        get_mid(array[mid - 1], array[mid])
    } else {
        array[mid]
    }
}

#[inline]
/// Returns the arithmetic mean of a slice of [`f64`]s.
///
/// Returns [`None`] if `array` is empty.
///
/// ```rust
/// # use diffbench_helper::num::*;
/// assert_eq!(mean([1.0_f64, 2.0, 3.0, 4.0]), Some(2.5));
/// assert_eq!(mean([0.25_f64]), Some(0.25));
/// assert_eq!(mean([0.0_f64; 0]), None);
/// ```
#[expect(
    clippy::cast_precision_loss,
    reason = "sample counts never approach 2^52"
)]
pub fn mean(array: impl AsRef<[f64]>) -> Option<f64> {
    let array = array.as_ref();

    if array.is_empty() {
        return None;
    }

    let sum: f64 = array.iter().sum();
    Some(sum / array.len() as f64)
}
