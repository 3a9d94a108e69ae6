use core::fmt;

// -----------------------------------------------------------------------------
// Align

/// A zero-sized type whose alignment is `N` bytes.
///
/// Placing an `Align<N>` as the first field of a `#[repr(C)]` struct raises
/// the alignment of the whole struct to at least `N` without taking space.
///
/// `N` must be a power of two in `1..=32768`. Any other value fails to
/// compile, since [`Alignment`] is only implemented for those.
///
/// # Examples
///
/// ```
/// use etl_ptr::Align;
///
/// #[repr(C)]
/// struct Aligned {
///     _align: Align<64>,
///     bytes: [u8; 3],
/// }
///
/// assert_eq!(size_of::<Align<64>>(), 0);
/// assert_eq!(align_of::<Aligned>(), 64);
/// ```
///
/// ```compile_fail
/// let _ = etl_ptr::Align::<3>::new();
/// ```
#[repr(transparent)]
pub struct Align<const N: usize>(<Self as Alignment>::Archetype)
where
    Self: Alignment;

/// Implemented by [`Align<N>`] for every supported alignment `N`.
pub trait Alignment {
    /// A zero-sized type with the requested alignment.
    type Archetype: Copy;

    /// The only value of [`Archetype`](Self::Archetype).
    const ARCHETYPE: Self::Archetype;
}

impl<const N: usize> Align<N>
where
    Self: Alignment,
{
    /// The alignment, in bytes.
    pub const VALUE: usize = N;

    #[inline(always)]
    pub const fn new() -> Self {
        Self(<Self as Alignment>::ARCHETYPE)
    }
}

impl<const N: usize> Clone for Align<N>
where
    Self: Alignment,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<const N: usize> Copy for Align<N> where Self: Alignment {}

impl<const N: usize> Default for Align<N>
where
    Self: Alignment,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Align<N>
where
    Self: Alignment,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Align<{N}>")
    }
}

// -----------------------------------------------------------------------------
// Archetypes

#[doc(hidden)]
pub mod archetype {
    #[derive(Clone, Copy)]
    #[repr(align(1))]
    pub struct Align1;
    #[derive(Clone, Copy)]
    #[repr(align(2))]
    pub struct Align2;
    #[derive(Clone, Copy)]
    #[repr(align(4))]
    pub struct Align4;
    #[derive(Clone, Copy)]
    #[repr(align(8))]
    pub struct Align8;
    #[derive(Clone, Copy)]
    #[repr(align(16))]
    pub struct Align16;
    #[derive(Clone, Copy)]
    #[repr(align(32))]
    pub struct Align32;
    #[derive(Clone, Copy)]
    #[repr(align(64))]
    pub struct Align64;
    #[derive(Clone, Copy)]
    #[repr(align(128))]
    pub struct Align128;
    #[derive(Clone, Copy)]
    #[repr(align(256))]
    pub struct Align256;
    #[derive(Clone, Copy)]
    #[repr(align(512))]
    pub struct Align512;
    #[derive(Clone, Copy)]
    #[repr(align(1024))]
    pub struct Align1024;
    #[derive(Clone, Copy)]
    #[repr(align(2048))]
    pub struct Align2048;
    #[derive(Clone, Copy)]
    #[repr(align(4096))]
    pub struct Align4096;
    #[derive(Clone, Copy)]
    #[repr(align(8192))]
    pub struct Align8192;
    #[derive(Clone, Copy)]
    #[repr(align(16384))]
    pub struct Align16384;
    #[derive(Clone, Copy)]
    #[repr(align(32768))]
    pub struct Align32768;
}

macro_rules! impl_alignment {
    ($($n:literal => $archetype:ident),* $(,)?) => {$(
        impl Alignment for Align<$n> {
            type Archetype = archetype::$archetype;
            const ARCHETYPE: Self::Archetype = archetype::$archetype;
        }
    )*};
}

impl_alignment! {
    1 => Align1,
    2 => Align2,
    4 => Align4,
    8 => Align8,
    16 => Align16,
    32 => Align32,
    64 => Align64,
    128 => Align128,
    256 => Align256,
    512 => Align512,
    1024 => Align1024,
    2048 => Align2048,
    4096 => Align4096,
    8192 => Align8192,
    16384 => Align16384,
    32768 => Align32768,
}
