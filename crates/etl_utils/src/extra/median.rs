use core::cell::Cell;
use core::fmt;

use num_traits::AsPrimitive;

use crate::vec::StackVec;

// -----------------------------------------------------------------------------
// Median

/// Accumulates up to `N` numeric samples and reports their median.
///
/// The median is computed lazily on the first read after a change and
/// cached until the next [`insert`](Self::insert) or [`clear`](Self::clear).
///
/// Samples are used in insertion order: the median is the middle sample
/// for an odd count, or the average of the two middle samples for an even
/// count. Callers that want the statistical median must insert the samples
/// in sorted order. An empty calculator reports `0.0`.
///
/// # Examples
///
/// ```
/// use etl_utils::extra::Median;
///
/// let mut median: Median<u32, 8> = Median::new();
/// median.insert(1).unwrap();
/// median.insert(3).unwrap();
/// median.insert(8).unwrap();
/// assert_eq!(median.median(), 3.0);
///
/// median.insert(10).unwrap();
/// assert_eq!(median.median(), 5.5);
/// ```
pub struct Median<T, const N: usize> {
    samples: StackVec<T, N>,
    cached: Cell<Option<f64>>,
}

impl<T, const N: usize> Default for Median<T, N> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Median<T, N> {
    /// Creates an empty calculator.
    #[inline]
    pub fn new() -> Self {
        Self {
            samples: StackVec::new(),
            cached: Cell::new(None),
        }
    }

    /// Creates a calculator holding the given samples.
    ///
    /// Returns the first sample that does not fit in `Err`.
    pub fn from_values<I>(values: I) -> Result<Self, T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut median = Self::new();
        median.insert_iter(values)?;
        Ok(median)
    }

    /// Adds a sample.
    ///
    /// Returns the sample in `Err` if `N` samples are already stored.
    #[inline]
    pub fn insert(&mut self, value: T) -> Result<(), T> {
        if self.samples.is_full() {
            return Err(value);
        }
        self.samples.push(value);
        self.cached.set(None);
        Ok(())
    }

    /// Adds every sample of `values`, stopping at the first one that
    /// does not fit and returning it in `Err`.
    pub fn insert_iter<I>(&mut self, values: I) -> Result<(), T>
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().try_for_each(|value| self.insert(value))
    }

    /// Returns the number of stored samples.
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.samples.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.samples.len() == 0
    }

    /// The stored samples, in insertion order.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        self.samples.as_slice()
    }

    /// Removes every sample.
    #[inline]
    pub fn clear(&mut self) {
        self.samples.clear();
        self.cached.set(None);
    }
}

impl<T: AsPrimitive<f64>, const N: usize> Median<T, N> {
    /// Returns the median of the stored samples.
    pub fn median(&self) -> f64 {
        if let Some(median) = self.cached.get() {
            return median;
        }

        let samples = self.as_slice();
        let mid = samples.len() / 2;

        let median = match samples.len() {
            0 => 0.0,
            len if len % 2 == 1 => samples[mid].as_(),
            // Average in `f64`, the sum may not fit in `T`.
            _ => (samples[mid - 1].as_() + samples[mid].as_()) / 2.0,
        };

        self.cached.set(Some(median));
        median
    }

    /// Returns the median truncated to a `u32`.
    ///
    /// Negative values saturate to `0`, see `as` casts from float to int.
    #[inline]
    pub fn median_u32(&self) -> u32 {
        self.median() as u32
    }
}

impl<T: AsPrimitive<f64>, const N: usize> From<&Median<T, N>> for f64 {
    #[inline]
    fn from(median: &Median<T, N>) -> Self {
        median.median()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Median<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Median")
            .field("samples", &self.as_slice())
            .field("cached", &self.cached.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Median;

    #[test]
    fn empty_is_zero() {
        let median: Median<i32, 4> = Median::new();

        assert!(median.is_empty());
        assert_eq!(median.median(), 0.0);
        assert_eq!(median.count(), 0);
    }

    #[test]
    fn odd_and_even_counts() {
        let mut median = Median::<i32, 8>::from_values([1, 2, 3, 4, 5]).unwrap();
        assert_eq!(median.median(), 3.0);

        median.insert(6).unwrap();
        assert_eq!(median.median(), 3.5);
        assert_eq!(median.count(), 6);
    }

    #[test]
    fn cache_is_invalidated() {
        let mut median = Median::<f32, 4>::new();
        median.insert(2.0).unwrap();
        assert_eq!(median.median(), 2.0);
        assert_eq!(median.median(), 2.0);

        median.insert(4.0).unwrap();
        assert_eq!(median.median(), 3.0);

        median.clear();
        assert_eq!(median.median(), 0.0);
    }

    #[test]
    fn even_average_does_not_overflow() {
        let median = Median::<u8, 2>::from_values([250, 252]).unwrap();

        assert_eq!(median.median(), 251.0);
        assert_eq!(f64::from(&median), 251.0);
    }

    #[test]
    fn uses_insertion_order() {
        let median = Median::<u32, 3>::from_values([9, 1, 5]).unwrap();

        assert_eq!(median.median(), 1.0);
    }

    #[test]
    fn full_calculator_rejects_sample() {
        let mut median = Median::<u16, 2>::new();

        assert_eq!(median.insert_iter([1, 2, 3]), Err(3));
        assert_eq!(median.as_slice(), &[1, 2]);
        assert_eq!(median.median_u32(), 1);
    }
}
