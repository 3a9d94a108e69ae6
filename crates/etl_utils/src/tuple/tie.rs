//! Assignment to several variables at once through a tuple of references.

use super::{Cons, Nil};

/// A slot of a [`tie!`](crate::tie) that discards the value assigned to it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ignore;

/// Writes a tuple of values through a tuple of references.
///
/// Implemented for the chains built by [`tie!`](crate::tie): every
/// `&mut A` field receives the value at the same index, every
/// [`Ignore`] field drops it.
pub trait Tie<Values> {
    fn set(self, values: Values);
}

impl Tie<Nil> for Nil {
    #[inline(always)]
    fn set(self, _values: Nil) {}
}

impl<H, T, R> Tie<Cons<H, R>> for Cons<&mut H, T>
where
    T: Tie<R>,
{
    #[inline]
    fn set(self, values: Cons<H, R>) {
        *self.head = values.head;
        self.tail.set(values.tail);
    }
}

impl<V, T, R> Tie<Cons<V, R>> for Cons<Ignore, T>
where
    T: Tie<R>,
{
    #[inline]
    fn set(self, values: Cons<V, R>) {
        self.tail.set(values.tail);
    }
}

/// Builds a [`Cons`] chain of mutable references to the given places.
///
/// A `_` slot becomes [`Ignore`].
///
/// # Examples
///
/// ```
/// use etl_utils::tuple::Tie;
/// use etl_utils::{tie, tuple};
///
/// let (mut id, mut name) = (0, "");
///
/// tie!(id, _, name).set(tuple!(7, 2.5, "seven"));
///
/// assert_eq!((id, name), (7, "seven"));
/// ```
#[macro_export]
macro_rules! tie {
    () => { $crate::tuple::Nil };
    (_ $(, $($rest:tt)*)?) => {
        $crate::tuple::Cons::new($crate::tuple::Ignore, $crate::tie!($($($rest)*)?))
    };
    ($head:expr $(, $($rest:tt)*)?) => {
        $crate::tuple::Cons::new(&mut $head, $crate::tie!($($($rest)*)?))
    };
}

#[cfg(test)]
mod tests {
    use std::string::String;

    use super::Tie;

    #[test]
    fn assigns_every_reference() {
        let mut a = 0_i32;
        let mut b = 0.0_f64;
        let mut c = String::new();

        crate::tie!(a, b, c).set(crate::tuple!(1, 2.2, String::from("3")));

        assert_eq!(a, 1);
        assert_eq!(b, 2.2);
        assert_eq!(c, "3");
    }

    #[test]
    fn ignored_slots_keep_their_place() {
        let mut first = 'x';
        let mut last = 'x';

        crate::tie!(_, first, _, last,).set(crate::tuple!(1_u8, 'a', "skipped", 'b'));

        assert_eq!((first, last), ('a', 'b'));
    }

    #[test]
    fn from_native_tuple() {
        let mut x = 0_u16;
        let mut y = 0_u16;

        crate::tie!(x, y).set(<crate::Tuple![u16, u16]>::from((3, 4)));

        assert_eq!((x, y), (3, 4));
    }

    #[test]
    fn take_yields_the_reference() {
        let mut value = 5_u32;

        let tied = crate::tie!(value);
        *tied.take::<0>() += 1;

        assert_eq!(value, 6);
    }
}
