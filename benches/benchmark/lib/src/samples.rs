//! Timing samples.

//---------------------------------------------------------------------------------------------------- Use
use std::{slice, time::Duration};

use diffbench_helper::num;

//---------------------------------------------------------------------------------------------------- Samples
/// Per-repetition durations of one experiment, in execution order.
///
/// Each sample is a non-negative [`Duration`]; aggregates are in seconds
/// except where a [`Duration`] is returned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Samples(Vec<Duration>);

impl Samples {
    /// Create empty [`Samples`] with room for `capacity` durations.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Append a sample.
    pub fn push(&mut self, sample: Duration) {
        self.0.push(sample);
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The samples, in execution order.
    pub fn as_slice(&self) -> &[Duration] {
        &self.0
    }

    /// Iterate over the samples, in execution order.
    pub fn iter(&self) -> slice::Iter<'_, Duration> {
        self.0.iter()
    }

    /// Every sample converted to seconds.
    pub fn secs(&self) -> Vec<f64> {
        self.0.iter().map(Duration::as_secs_f64).collect()
    }

    /// Sum of all samples.
    pub fn total(&self) -> Duration {
        self.0.iter().sum()
    }

    /// Arithmetic mean in seconds, [`None`] if empty.
    ///
    /// ```rust
    /// # use std::time::Duration;
    /// # use diffbench_benchmark_lib::Samples;
    /// let samples: Samples = [1, 2, 6].map(Duration::from_secs).into_iter().collect();
    /// assert_eq!(samples.mean(), Some(3.0));
    /// assert_eq!(Samples::default().mean(), None);
    /// ```
    pub fn mean(&self) -> Option<f64> {
        num::mean(self.secs())
    }

    /// Shortest sample.
    pub fn min(&self) -> Option<Duration> {
        self.0.iter().min().copied()
    }

    /// Longest sample.
    pub fn max(&self) -> Option<Duration> {
        self.0.iter().max().copied()
    }

    /// Median sample, [`None`] if empty.
    ///
    /// ```rust
    /// # use std::time::Duration;
    /// # use diffbench_benchmark_lib::Samples;
    /// let samples: Samples = [9, 1, 4, 2].map(Duration::from_millis).into_iter().collect();
    /// assert_eq!(samples.median(), Some(Duration::from_millis(3)));
    /// ```
    pub fn median(&self) -> Option<Duration> {
        if self.0.is_empty() {
            return None;
        }

        let mut nanos: Vec<u128> = self.0.iter().map(Duration::as_nanos).collect();
        nanos.sort_unstable();

        let median = num::median(nanos);
        Some(u64::try_from(median).map_or(Duration::MAX, Duration::from_nanos))
    }
}

impl From<Vec<Duration>> for Samples {
    fn from(samples: Vec<Duration>) -> Self {
        Self(samples)
    }
}

impl FromIterator<Duration> for Samples {
    fn from_iter<I: IntoIterator<Item = Duration>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Samples {
    type Item = &'a Duration;
    type IntoIter = slice::Iter<'a, Duration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Samples {
    type Item = Duration;
    type IntoIter = std::vec::IntoIter<Duration>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn odd_median_is_middle_sample() {
        let samples: Samples = [5, 1, 3].map(Duration::from_micros).into_iter().collect();
        assert_eq!(samples.median(), Some(Duration::from_micros(3)));
        assert_eq!(samples.min(), Some(Duration::from_micros(1)));
        assert_eq!(samples.max(), Some(Duration::from_micros(5)));
        assert_eq!(samples.total(), Duration::from_micros(9));
    }

    #[test]
    fn empty_samples_have_no_aggregates() {
        let samples = Samples::default();
        assert_eq!(samples.mean(), None);
        assert_eq!(samples.median(), None);
        assert_eq!(samples.min(), None);
        assert_eq!(samples.total(), Duration::ZERO);
    }

    proptest! {
        #[test]
        fn mean_is_bounded_by_min_and_max(nanos in prop::collection::vec(0_u64..10_000_000_000, 1..64)) {
            let samples: Samples = nanos.into_iter().map(Duration::from_nanos).collect();
            let mean = samples.mean().unwrap();
            let min = samples.min().unwrap().as_secs_f64();
            let max = samples.max().unwrap().as_secs_f64();

            prop_assert!(mean.is_finite());
            prop_assert!(mean >= 0.0);
            prop_assert!(mean >= min * (1.0 - 1e-12));
            prop_assert!(mean <= max * (1.0 + 1e-12));
        }
    }
}
