//! A heterogeneous tuple built from single-element holders.
//!
//! A tuple is a chain of [`Cons`] cells closed by [`Nil`]. Each cell holds
//! exactly one value and the rest of the tuple, so `Tuple![i32, f64, &str]`
//! is `Cons<i32, Cons<f64, Cons<&str, Nil>>>`.
//!
//! Fields are accessed by a compile-time index through [`Element`]. An index
//! past the end of the tuple is a compilation error, not a runtime one.
//!
//! # Examples
//!
//! ```
//! use etl_utils::tuple::IntoNative;
//! use etl_utils::{Tuple, tuple};
//!
//! let mut t: Tuple![i32, f64, &str] = tuple!(1, 2.2, "3");
//!
//! assert_eq!(t.len(), 3);
//! assert_eq!(*t.get::<0>(), 1);
//! assert_eq!(*t.get::<1>(), 2.2);
//!
//! *t.get_mut::<2>() = "4";
//! assert_eq!(t.into_native(), (1, 2.2, "4"));
//! ```
//!
//! Several variables can be assigned at once with [`tie!`](crate::tie).
//!
//! A pair, or any native tuple with up to 12 fields, converts directly:
//!
//! ```
//! use etl_utils::Tuple;
//!
//! let t: Tuple![u8, char] = (1, 'a').into();
//! assert_eq!(*t.get::<1>(), 'a');
//! ```
//!
//! ```compile_fail
//! use etl_utils::tuple;
//!
//! let t = tuple!(1, 2);
//! let _ = t.get::<2>();
//! ```

// -----------------------------------------------------------------------------
// Modules

mod element;
mod native;
mod tie;

// -----------------------------------------------------------------------------
// Exports

pub use element::{Element, ElementOf};
pub use native::IntoNative;
pub use tie::{Ignore, Tie};

use crate::largest::{Largest, max};

// -----------------------------------------------------------------------------
// Holders

/// The empty tuple, closing every [`Cons`] chain.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nil;

/// A single-element holder: one value and the rest of the tuple.
///
/// Usually spelled with the [`Tuple!`](crate::Tuple) and
/// [`tuple!`](crate::tuple) macros rather than by hand.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cons<H, T> {
    pub head: H,
    pub tail: T,
}

impl<H, T> Cons<H, T> {
    /// Prepends `head` to the tuple `tail`.
    #[inline(always)]
    pub const fn new(head: H, tail: T) -> Self {
        Self { head, tail }
    }

    /// Returns the number of fields.
    #[inline(always)]
    pub const fn len(&self) -> usize
    where
        Self: TupleLen,
    {
        <Self as TupleLen>::LEN
    }

    /// Returns a reference to the field at index `I`.
    #[inline(always)]
    pub fn get<const I: usize>(&self) -> &<Self as Element<I>>::Output
    where
        Self: Element<I>,
    {
        <Self as Element<I>>::element(self)
    }

    /// Returns a mutable reference to the field at index `I`.
    #[inline(always)]
    pub fn get_mut<const I: usize>(&mut self) -> &mut <Self as Element<I>>::Output
    where
        Self: Element<I>,
    {
        <Self as Element<I>>::element_mut(self)
    }

    /// Consumes the tuple, returning the field at index `I`.
    #[inline(always)]
    pub fn take<const I: usize>(self) -> <Self as Element<I>>::Output
    where
        Self: Element<I>,
    {
        <Self as Element<I>>::into_element(self)
    }
}

// -----------------------------------------------------------------------------
// Length

/// The number of fields of a tuple, known at compile time.
pub trait TupleLen {
    const LEN: usize;

    #[inline(always)]
    fn len(&self) -> usize {
        Self::LEN
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        Self::LEN == 0
    }
}

impl TupleLen for Nil {
    const LEN: usize = 0;
}

impl<H, T: TupleLen> TupleLen for Cons<H, T> {
    const LEN: usize = T::LEN + 1;
}

// -----------------------------------------------------------------------------
// Largest

impl Largest for Nil {
    const SIZE: usize = 0;
    const ALIGN: usize = 1;
}

impl<H, T: Largest> Largest for Cons<H, T> {
    const SIZE: usize = max(size_of::<H>(), T::SIZE);
    const ALIGN: usize = max(align_of::<H>(), T::ALIGN);
}

// -----------------------------------------------------------------------------
// Macros

/// Spells the type of a [`Cons`] chain.
///
/// `Tuple![A, B]` is `Cons<A, Cons<B, Nil>>` and `Tuple![]` is [`Nil`].
#[macro_export]
macro_rules! Tuple {
    () => { $crate::tuple::Nil };
    ($head:ty $(, $rest:ty)* $(,)?) => {
        $crate::tuple::Cons<$head, $crate::Tuple![$($rest),*]>
    };
}

/// Builds a [`Cons`] chain from a list of values.
///
/// # Examples
///
/// ```
/// use etl_utils::tuple;
///
/// let t = tuple!(1_u8, "two", 3.0_f32);
/// assert_eq!(*t.get::<1>(), "two");
/// ```
#[macro_export]
macro_rules! tuple {
    () => { $crate::tuple::Nil };
    ($head:expr $(, $rest:expr)* $(,)?) => {
        $crate::tuple::Cons::new($head, $crate::tuple!($($rest),*))
    };
}

#[cfg(test)]
mod tests {
    use std::string::String;

    use super::{Cons, ElementOf, Nil, TupleLen};
    use crate::Largest;

    #[derive(Debug, Default, PartialEq)]
    struct MoveOnly(String);

    #[test]
    fn size() {
        type T = crate::Tuple![i32, f64, i32, String];

        assert_eq!(<T as TupleLen>::LEN, 4);
        assert_eq!(T::default().len(), 4);
        assert!(Nil.is_empty());
    }

    #[test]
    fn default_constructor() {
        let t: crate::Tuple![i32, f64, i32, String] = Default::default();

        assert_eq!(*t.get::<0>(), 0);
        assert_eq!(*t.get::<1>(), 0.0);
        assert_eq!(*t.get::<2>(), 0);
        assert!(t.get::<3>().is_empty());
    }

    #[test]
    fn construct_from_parameters() {
        let t = crate::tuple!(1, 2.2, 3, String::from("4"));

        assert_eq!(*t.get::<0>(), 1);
        assert_eq!(*t.get::<1>(), 2.2);
        assert_eq!(*t.get::<2>(), 3);
        assert_eq!(t.get::<3>(), "4");
    }

    #[test]
    fn construct_with_move_only() {
        let t = crate::tuple!(1, MoveOnly(String::from("4")));

        let m = t.take::<1>();
        assert_eq!(m, MoveOnly(String::from("4")));
    }

    #[test]
    fn construct_from_pair() {
        let pair = (1, String::from("2"));

        let t: crate::Tuple![i32, String] = pair.into();

        assert_eq!(*t.get::<0>(), 1);
        assert_eq!(t.get::<1>(), "2");
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut t = crate::tuple!(1_u8, 2_u16, 3_u32);

        *t.get_mut::<2>() += 10;
        *t.get_mut::<0>() = 7;

        assert_eq!(t, crate::tuple!(7_u8, 2_u16, 13_u32));
    }

    #[test]
    fn element_type() {
        fn same<A: 'static, B: 'static>() -> bool {
            core::any::TypeId::of::<A>() == core::any::TypeId::of::<B>()
        }

        type T = crate::Tuple![i32, f64, i32, String];

        assert!(same::<ElementOf<T, 0>, i32>());
        assert!(same::<ElementOf<T, 1>, f64>());
        assert!(same::<ElementOf<T, 2>, i32>());
        assert!(same::<ElementOf<T, 3>, String>());
    }

    #[test]
    fn largest_of_cons() {
        type T = crate::Tuple![u8, [u8; 12], u32];

        assert_eq!(<T as Largest>::SIZE, 12);
        assert_eq!(<T as Largest>::ALIGN, 4);
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = Cons::new(1, Cons::new(5, Nil));
        let b = Cons::new(2, Cons::new(0, Nil));

        assert!(a < b);
    }
}
