use super::Cons;

/// Positional access to the field at index `I`.
///
/// Index `0` is the head of a [`Cons`] cell; index `I + 1` is index `I`
/// of its tail. The recursion is spelled out for indices below 16.
pub trait Element<const I: usize> {
    /// The type of the field.
    type Output;

    fn element(&self) -> &Self::Output;

    fn element_mut(&mut self) -> &mut Self::Output;

    fn into_element(self) -> Self::Output;
}

/// The type of the field at index `I` of the tuple `T`.
pub type ElementOf<T, const I: usize> = <T as Element<I>>::Output;

impl<H, T> Element<0> for Cons<H, T> {
    type Output = H;

    #[inline(always)]
    fn element(&self) -> &H {
        &self.head
    }

    #[inline(always)]
    fn element_mut(&mut self) -> &mut H {
        &mut self.head
    }

    #[inline(always)]
    fn into_element(self) -> H {
        self.head
    }
}

macro_rules! impl_element {
    ($($index:literal => $prev:literal),* $(,)?) => {
        $(
            impl<H, T: Element<$prev>> Element<$index> for Cons<H, T> {
                type Output = <T as Element<$prev>>::Output;

                #[inline(always)]
                fn element(&self) -> &Self::Output {
                    <T as Element<$prev>>::element(&self.tail)
                }

                #[inline(always)]
                fn element_mut(&mut self) -> &mut Self::Output {
                    <T as Element<$prev>>::element_mut(&mut self.tail)
                }

                #[inline(always)]
                fn into_element(self) -> Self::Output {
                    <T as Element<$prev>>::into_element(self.tail)
                }
            }
        )*
    };
}

impl_element!(
    1 => 0, 2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7,
    9 => 8, 10 => 9, 11 => 10, 12 => 11, 13 => 12, 14 => 13, 15 => 14,
);
