//! Size and alignment of the largest member of a set of types.
//!
//! Used to size placement buffers that must be able to host any of
//! several candidate types.

// -----------------------------------------------------------------------------
// Largest

/// The largest `size_of` and `align_of` over a set of types.
///
/// Implemented for native tuples with up to 12 fields and for
/// [`Tuple!`](crate::Tuple) lists of any length. The empty set has
/// `SIZE == 0` and `ALIGN == 1`.
///
/// The two maxima are independent: the type with the largest size
/// does not need to be the one with the largest alignment.
///
/// # Examples
///
/// ```
/// use etl_utils::Largest;
///
/// type Set = (u8, [u16; 5], u32);
///
/// assert_eq!(<Set as Largest>::SIZE, 10);
/// assert_eq!(<Set as Largest>::ALIGN, 4);
/// ```
pub trait Largest {
    /// The largest size, in bytes.
    const SIZE: usize;
    /// The largest alignment, in bytes.
    const ALIGN: usize;
}

/// `const` version of [`Ord::max`] for `usize`.
#[inline(always)]
pub const fn max(a: usize, b: usize) -> usize {
    if a > b { a } else { b }
}

macro_rules! impl_largest_tuple {
    ($(($idx:tt $T:ident $v:ident))*) => {
        impl<$($T),*> Largest for ($($T,)*) {
            const SIZE: usize = {
                let size = 0;
                $( let size = max(size, size_of::<$T>()); )*
                size
            };
            const ALIGN: usize = {
                let align = 1;
                $( let align = max(align, align_of::<$T>()); )*
                align
            };
        }
    };
}

crate::macros::all_tuples!(impl_largest_tuple);

#[cfg(test)]
mod tests {
    use super::{Largest, max};

    #[repr(align(16))]
    struct Wide;

    #[test]
    fn empty_set() {
        assert_eq!(<() as Largest>::SIZE, 0);
        assert_eq!(<() as Largest>::ALIGN, 1);
    }

    #[test]
    fn size_and_alignment_are_independent() {
        type Set = ([u8; 40], Wide, u32);

        assert_eq!(<Set as Largest>::SIZE, 40);
        assert_eq!(<Set as Largest>::ALIGN, 16);
    }

    #[test]
    fn single_type() {
        assert_eq!(<(u64,) as Largest>::SIZE, size_of::<u64>());
        assert_eq!(<(u64,) as Largest>::ALIGN, align_of::<u64>());
    }

    #[test]
    fn const_max() {
        const M: usize = max(3, 7);
        assert_eq!(M, 7);
        assert_eq!(max(9, 2), 9);
    }
}
