/// Call the target macro once per arity, from `0` up to the number of items.
///
/// Every item is a parenthesized `(index Type binding)` triple, so the target
/// macro can name the tuple field, its type parameter and a local binding.
///
/// # Example
///
/// ```ignore
/// for_each_tuple!(my_macro; (0 P0 p0) (1 P1 p1));
/// // eq  to ↓
/// my_macro!();
/// my_macro!((0 P0 p0));
/// my_macro!((0 P0 p0) (1 P1 p1));
/// ```
macro_rules! for_each_tuple {
    ($macro:ident; $($item:tt)*) => {
        $crate::macros::for_each_tuple!(@ $macro []; $($item)*);
    };
    (@ $macro:ident [$($done:tt)*]; ) => {
        $macro!($($done)*);
    };
    (@ $macro:ident [$($done:tt)*]; $next:tt $($rest:tt)*) => {
        $macro!($($done)*);
        $crate::macros::for_each_tuple!(@ $macro [$($done)* $next]; $($rest)*);
    };
}

/// [`for_each_tuple`] over the native tuple arities `0..=12`.
macro_rules! all_tuples {
    ($macro:ident) => {
        $crate::macros::for_each_tuple!(
            $macro;
            (0 P0 p0) (1 P1 p1) (2 P2 p2) (3 P3 p3)
            (4 P4 p4) (5 P5 p5) (6 P6 p6) (7 P7 p7)
            (8 P8 p8) (9 P9 p9) (10 P10 p10) (11 P11 p11)
        );
    };
}

pub(crate) use {all_tuples, for_each_tuple};
