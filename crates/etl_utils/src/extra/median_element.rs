use core::ops::Index;

// -----------------------------------------------------------------------------
// MedianElement

/// Picks the middle element of a sample set of `N` values.
///
/// The element at index `(N - 1) / 2` is copied out of the sample set when
/// the picker is built; there is no insertion or sorting. For an even `N`
/// this is the lower of the two middle elements.
///
/// The sample set can be anything indexable by `usize`: arrays, slices,
/// or a caller's own ring buffer.
///
/// # Examples
///
/// ```
/// use etl_utils::extra::MedianElement;
///
/// let samples = [3, 5, 8, 13, 21];
/// let median = MedianElement::<_, 5>::new(&samples);
///
/// assert_eq!(*median.get(), 8);
/// assert_eq!(median.count(), 5);
/// ```
///
/// An empty sample set does not compile:
///
/// ```compile_fail
/// use etl_utils::extra::MedianElement;
///
/// let median = MedianElement::<u32, 0>::new(&[]);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MedianElement<T, const N: usize> {
    element: T,
}

impl<T: Clone, const N: usize> MedianElement<T, N> {
    /// Index of the picked element.
    pub const INDEX: usize = {
        assert!(N > 0, "a median element needs at least one sample");
        (N - 1) / 2
    };

    /// Picks the middle element of `samples`.
    ///
    /// # Panics
    /// Panics if `samples` has fewer than `(N - 1) / 2 + 1` elements.
    #[inline]
    pub fn new<S>(samples: &S) -> Self
    where
        S: Index<usize, Output = T> + ?Sized,
    {
        Self {
            element: samples[Self::INDEX].clone(),
        }
    }
}

impl<T, const N: usize> MedianElement<T, N> {
    /// Returns the picked element.
    #[inline(always)]
    pub const fn get(&self) -> &T {
        &self.element
    }

    /// Returns a copy of the picked element.
    #[inline(always)]
    pub fn value(&self) -> T
    where
        T: Clone,
    {
        self.element.clone()
    }

    /// Returns the size of the sample set, `N`.
    #[inline(always)]
    pub const fn count(&self) -> usize {
        N
    }

    /// Resets the picked element to `T::default()`.
    #[inline]
    pub fn clear(&mut self)
    where
        T: Default,
    {
        self.element = T::default();
    }
}

impl<T: Clone, const N: usize> From<[T; N]> for MedianElement<T, N> {
    #[inline]
    fn from(samples: [T; N]) -> Self {
        Self::new(&samples)
    }
}
