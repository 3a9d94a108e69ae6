use core::fmt;
use core::mem::MaybeUninit;

use crate::align::{Align, Alignment};
use crate::error::{MemCastError, fits, locate};

// -----------------------------------------------------------------------------
// MemCast

/// An inline buffer of `SIZE` bytes aligned to `ALIGN`, hosting one value
/// at a time of any type that fits.
///
/// The buffer starts zeroed. Values are written with the `assign*` and
/// `emplace*` families and read back with the `as_ref*` / `as_mut*` views.
///
/// - Without an offset, or with a `const` offset, the size check happens at
///   compile time. A type that does not fit fails the build.
/// - Without an offset the alignment check also happens at compile time,
///   since the buffer start is aligned to `ALIGN`.
/// - With a `const` offset the alignment is checked at call time.
/// - With a runtime offset both checks happen at call time and failures are
///   returned as [`MemCastError`].
///
/// Written values are never dropped: the buffer forgets them, as if passed
/// to [`core::mem::forget`]. Views are `unsafe` because the buffer does not
/// track which type it currently holds.
///
/// Use [`mem_cast_types!`](crate::mem_cast_types) to size a buffer for a
/// set of types.
///
/// # Examples
///
/// ```
/// use etl_ptr::MemCast;
///
/// let mut buffer = MemCast::<16, 8>::new();
///
/// buffer.assign(42_i32);
/// buffer.assign_at::<i16, 8>(7).unwrap();
///
/// assert_eq!(unsafe { *buffer.as_ref::<i32>() }, 42);
/// assert_eq!(unsafe { *buffer.as_ref_at::<i16, 8>().unwrap() }, 7);
/// ```
///
/// A type larger than the buffer does not compile:
///
/// ```compile_fail
/// let mut buffer = etl_ptr::MemCast::<4, 4>::new();
/// buffer.assign(0_u64);
/// ```
///
/// Nor does a type that needs more alignment than the buffer has:
///
/// ```compile_fail
/// let mut buffer = etl_ptr::MemCast::<8, 4>::new();
/// buffer.assign(0_u64);
/// ```
#[derive(Clone, Copy)]
#[repr(C)]
pub struct MemCast<const SIZE: usize, const ALIGN: usize>
where
    Align<ALIGN>: Alignment,
{
    _align: Align<ALIGN>,
    buffer: [MaybeUninit<u8>; SIZE],
}

impl<const SIZE: usize, const ALIGN: usize> Default for MemCast<SIZE, ALIGN>
where
    Align<ALIGN>: Alignment,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize, const ALIGN: usize> MemCast<SIZE, ALIGN>
where
    Align<ALIGN>: Alignment,
{
    /// Creates a zeroed buffer.
    #[inline]
    pub const fn new() -> Self {
        Self {
            _align: Align::new(),
            buffer: [MaybeUninit::new(0); SIZE],
        }
    }

    /// The size of the buffer, in bytes.
    #[inline(always)]
    pub const fn size() -> usize {
        SIZE
    }

    /// The alignment of the buffer, in bytes.
    #[inline(always)]
    pub const fn alignment() -> usize {
        ALIGN
    }

    /// Returns a pointer to the first byte of the buffer.
    #[inline(always)]
    pub const fn data(&self) -> *const u8 {
        self.buffer.as_ptr().cast()
    }

    /// Returns a mutable pointer to the first byte of the buffer.
    #[inline(always)]
    pub const fn data_mut(&mut self) -> *mut u8 {
        self.buffer.as_mut_ptr().cast()
    }

    /// The raw bytes. Bytes covered by padding of a written value may be
    /// uninitialized.
    #[inline(always)]
    pub const fn as_uninit_bytes(&self) -> &[MaybeUninit<u8>; SIZE] {
        &self.buffer
    }

    /// The raw bytes, see [`as_uninit_bytes`](Self::as_uninit_bytes).
    #[inline(always)]
    pub const fn as_uninit_bytes_mut(&mut self) -> &mut [MaybeUninit<u8>; SIZE] {
        &mut self.buffer
    }

    /// Copies the bytes of a smaller buffer into the start of this one.
    ///
    /// Bytes past `S2` are left untouched. `S2 <= SIZE` and `A2 <= ALIGN`
    /// are checked at compile time.
    ///
    /// # Examples
    ///
    /// ```
    /// use etl_ptr::MemCast;
    ///
    /// let mut small = MemCast::<4, 4>::new();
    /// small.assign(0xAABB_CCDD_u32);
    ///
    /// let mut large = MemCast::<8, 8>::new();
    /// large.assign_at::<u32, 4>(1).unwrap();
    /// large.copy_from(&small);
    ///
    /// assert_eq!(unsafe { *large.as_ref::<u32>() }, 0xAABB_CCDD);
    /// assert_eq!(unsafe { *large.as_ref_at::<u32, 4>().unwrap() }, 1);
    /// ```
    pub fn copy_from<const S2: usize, const A2: usize>(&mut self, other: &MemCast<S2, A2>)
    where
        Align<A2>: Alignment,
    {
        const {
            assert!(S2 <= SIZE, "source buffer is larger than the destination");
            assert!(A2 <= ALIGN, "source buffer is more aligned than the destination");
        }
        self.buffer[..S2].copy_from_slice(&other.buffer);
    }

    // -------------------------------------------------------------------------
    // Placement

    /// Writes `value` at the start of the buffer.
    ///
    /// Size and alignment are checked at compile time.
    #[inline]
    pub fn assign<T>(&mut self, value: T) {
        let _ = self.emplace(|| value);
    }

    /// Writes `value` at `offset` bytes into the buffer.
    pub fn assign_at_offset<T>(&mut self, offset: usize, value: T) -> Result<(), MemCastError> {
        self.emplace_at_offset(offset, || value).map(|_| ())
    }

    /// Writes `value` at `OFFSET` bytes into the buffer.
    ///
    /// The size is checked at compile time, the alignment at call time.
    pub fn assign_at<T, const OFFSET: usize>(&mut self, value: T) -> Result<(), MemCastError> {
        self.emplace_at::<T, _, OFFSET>(|| value).map(|_| ())
    }

    /// Builds a value with `f` directly at the start of the buffer and
    /// returns a reference to it.
    ///
    /// Size and alignment are checked at compile time.
    pub fn emplace<T, F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        const {
            assert!(fits::<T>(SIZE, 0), "type does not fit in the buffer");
            assert!(align_of::<T>() <= ALIGN, "type needs more alignment than the buffer has");
        }
        let target = self.data_mut().cast::<T>();
        // SAFETY: `T` fits in the buffer and its start is aligned to `ALIGN`.
        unsafe {
            target.write(f());
            &mut *target
        }
    }

    /// Builds a value with `f` at `offset` bytes into the buffer and
    /// returns a reference to it.
    ///
    /// `f` is only called if the checks pass.
    pub fn emplace_at_offset<T, F>(&mut self, offset: usize, f: F) -> Result<&mut T, MemCastError>
    where
        F: FnOnce() -> T,
    {
        let target = locate::<T>(self.data_mut(), Some(SIZE), offset)?;
        // SAFETY: `locate` checked bounds and alignment.
        unsafe {
            target.write(f());
            Ok(&mut *target)
        }
    }

    /// Builds a value with `f` at `OFFSET` bytes into the buffer and
    /// returns a reference to it.
    ///
    /// The size is checked at compile time, the alignment at call time.
    pub fn emplace_at<T, F, const OFFSET: usize>(&mut self, f: F) -> Result<&mut T, MemCastError>
    where
        F: FnOnce() -> T,
    {
        const {
            assert!(fits::<T>(SIZE, OFFSET), "type does not fit at this offset");
        }
        self.emplace_at_offset(OFFSET, f)
    }

    // -------------------------------------------------------------------------
    // Views

    /// Views the start of the buffer as a `T`.
    ///
    /// Size and alignment are checked at compile time.
    ///
    /// # Safety
    /// The bytes must hold a valid `T`, usually one written with
    /// [`assign`](Self::assign) or [`emplace`](Self::emplace).
    #[inline]
    pub unsafe fn as_ref<T>(&self) -> &T {
        const {
            assert!(fits::<T>(SIZE, 0), "type does not fit in the buffer");
            assert!(align_of::<T>() <= ALIGN, "type needs more alignment than the buffer has");
        }
        // SAFETY: in bounds and aligned, the caller guarantees validity.
        unsafe { &*self.data().cast::<T>() }
    }

    /// Views the start of the buffer as a mutable `T`.
    ///
    /// # Safety
    /// See [`as_ref`](Self::as_ref).
    #[inline]
    pub unsafe fn as_mut<T>(&mut self) -> &mut T {
        const {
            assert!(fits::<T>(SIZE, 0), "type does not fit in the buffer");
            assert!(align_of::<T>() <= ALIGN, "type needs more alignment than the buffer has");
        }
        // SAFETY: in bounds and aligned, the caller guarantees validity.
        unsafe { &mut *self.data_mut().cast::<T>() }
    }

    /// Views the bytes at `offset` as a `T`.
    ///
    /// # Safety
    /// If the checks pass, the bytes must hold a valid `T`.
    pub unsafe fn as_ref_at_offset<T>(&self, offset: usize) -> Result<&T, MemCastError> {
        let target = locate::<T>(self.data().cast_mut(), Some(SIZE), offset)?;
        // SAFETY: checked by `locate`, the caller guarantees validity.
        Ok(unsafe { &*target })
    }

    /// Views the bytes at `offset` as a mutable `T`.
    ///
    /// # Safety
    /// See [`as_ref_at_offset`](Self::as_ref_at_offset).
    pub unsafe fn as_mut_at_offset<T>(&mut self, offset: usize) -> Result<&mut T, MemCastError> {
        let target = locate::<T>(self.data_mut(), Some(SIZE), offset)?;
        // SAFETY: checked by `locate`, the caller guarantees validity.
        Ok(unsafe { &mut *target })
    }

    /// Views the bytes at `OFFSET` as a `T`.
    ///
    /// The size is checked at compile time, the alignment at call time.
    ///
    /// # Safety
    /// See [`as_ref_at_offset`](Self::as_ref_at_offset).
    pub unsafe fn as_ref_at<T, const OFFSET: usize>(&self) -> Result<&T, MemCastError> {
        const {
            assert!(fits::<T>(SIZE, OFFSET), "type does not fit at this offset");
        }
        // SAFETY: forwarded to the caller.
        unsafe { self.as_ref_at_offset(OFFSET) }
    }

    /// Views the bytes at `OFFSET` as a mutable `T`.
    ///
    /// # Safety
    /// See [`as_ref_at_offset`](Self::as_ref_at_offset).
    pub unsafe fn as_mut_at<T, const OFFSET: usize>(&mut self) -> Result<&mut T, MemCastError> {
        const {
            assert!(fits::<T>(SIZE, OFFSET), "type does not fit at this offset");
        }
        // SAFETY: forwarded to the caller.
        unsafe { self.as_mut_at_offset(OFFSET) }
    }
}

impl<const SIZE: usize, const ALIGN: usize, const S2: usize, const A2: usize>
    From<&MemCast<S2, A2>> for MemCast<SIZE, ALIGN>
where
    Align<ALIGN>: Alignment,
    Align<A2>: Alignment,
{
    /// Copies a smaller buffer into a new, zeroed one.
    #[inline]
    fn from(other: &MemCast<S2, A2>) -> Self {
        let mut this = Self::new();
        this.copy_from(other);
        this
    }
}

impl<const SIZE: usize, const ALIGN: usize> fmt::Debug for MemCast<SIZE, ALIGN>
where
    Align<ALIGN>: Alignment,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemCast")
            .field("size", &SIZE)
            .field("alignment", &ALIGN)
            .field("data", &self.data())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// mem_cast_types

/// Names a [`MemCast`] large enough and aligned enough for every listed type.
///
/// # Examples
///
/// ```
/// use etl_ptr::mem_cast_types;
///
/// type Message = mem_cast_types!(u8, [u16; 5], u32);
///
/// assert_eq!(Message::size(), 10);
/// assert_eq!(Message::alignment(), 4);
///
/// let mut message = Message::new();
/// message.assign([1_u16; 5]);
/// message.assign(3_u32);
/// ```
#[macro_export]
macro_rules! mem_cast_types {
    ($($T:ty),+ $(,)?) => {
        $crate::MemCast<
            { <($($T,)+) as $crate::__Largest>::SIZE },
            { <($($T,)+) as $crate::__Largest>::ALIGN },
        >
    };
}
