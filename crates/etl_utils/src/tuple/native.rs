//! Conversions between [`Cons`](super::Cons) chains and native tuples.

/// Converts a [`Cons`](super::Cons) chain back into the native tuple
/// with the same fields.
///
/// Implemented for chains of up to 12 fields. The opposite direction
/// is a plain [`From`] impl on the chain.
pub trait IntoNative {
    type Native;

    fn into_native(self) -> Self::Native;
}

macro_rules! tuple_pattern {
    () => { $crate::tuple::Nil };
    ($head:ident $(, $rest:ident)*) => {
        $crate::tuple::Cons { head: $head, tail: tuple_pattern!($($rest),*) }
    };
}

macro_rules! impl_native {
    ($(($idx:tt $T:ident $v:ident))*) => {
        impl<$($T),*> From<($($T,)*)> for crate::Tuple![$($T),*] {
            #[inline]
            fn from(value: ($($T,)*)) -> Self {
                let ($($v,)*) = value;
                crate::tuple!($($v),*)
            }
        }

        impl<$($T),*> IntoNative for crate::Tuple![$($T),*] {
            type Native = ($($T,)*);

            #[inline]
            fn into_native(self) -> Self::Native {
                let tuple_pattern!($($v),*) = self;
                ($($v,)*)
            }
        }
    };
}

crate::macros::all_tuples!(impl_native);

#[cfg(test)]
mod tests {
    use std::string::String;

    use super::IntoNative;
    use crate::tuple::Nil;

    #[test]
    fn empty() {
        let nil: Nil = ().into();
        nil.into_native();
    }

    #[test]
    fn round_trip_keeps_field_order() {
        let native = (1_u8, String::from("b"), 'c');

        let t: crate::Tuple![u8, String, char] = native.clone().into();
        assert_eq!(t.get::<1>(), "b");

        assert_eq!(t.into_native(), native);
    }
}
