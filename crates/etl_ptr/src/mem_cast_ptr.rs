use core::fmt;
use core::marker::PhantomData;
use core::mem::MaybeUninit;
use core::ptr;

use crate::align::{Align, Alignment};
use crate::error::{MemCastError, locate, report};
use crate::mem_cast::MemCast;

// -----------------------------------------------------------------------------
// MemCastPtr

/// A view over borrowed bytes, hosting one value at a time of any type
/// that fits.
///
/// This is the runtime-checked counterpart of [`MemCast`]: the address may
/// be null and the size may be unknown, so every operation checks, in order,
/// that the address is not null, that the value fits (when the size is
/// known) and that the target address is aligned for the value's type.
///
/// The view never owns the bytes. Dropping or rebinding it leaves them as
/// they are. Values written through it are never dropped.
///
/// # Examples
///
/// ```
/// use etl_ptr::{MemCast, MemCastError, MemCastPtr};
///
/// let mut storage = MemCast::<8, 8>::new();
/// let mut view = MemCastPtr::from_mem_cast(&mut storage);
///
/// view.assign(123456789_i64).unwrap();
/// assert_eq!(unsafe { *view.as_ref::<i64>().unwrap() }, 123456789);
///
/// view.reset();
/// assert_eq!(unsafe { view.as_ref::<i64>() }, Err(MemCastError::NullPointer));
/// ```
pub struct MemCastPtr<'a> {
    ptr: *mut u8,
    size: Option<usize>,
    _marker: PhantomData<&'a mut [MaybeUninit<u8>]>,
}

impl Default for MemCastPtr<'_> {
    #[inline(always)]
    fn default() -> Self {
        Self::null()
    }
}

impl<'a> MemCastPtr<'a> {
    /// A size that is not known. Size checks are skipped.
    pub const UNDEFINED_SIZE: Option<usize> = None;

    /// Creates a view with a null address.
    ///
    /// Every operation on it fails with [`MemCastError::NullPointer`].
    #[inline(always)]
    pub const fn null() -> Self {
        Self {
            ptr: ptr::null_mut(),
            size: Self::UNDEFINED_SIZE,
            _marker: PhantomData,
        }
    }

    /// Creates a view over `bytes`.
    #[inline]
    pub const fn from_slice(bytes: &'a mut [MaybeUninit<u8>]) -> Self {
        Self {
            size: Some(bytes.len()),
            ptr: bytes.as_mut_ptr().cast(),
            _marker: PhantomData,
        }
    }

    /// Creates a view over the bytes of a [`MemCast`].
    #[inline]
    pub const fn from_mem_cast<const SIZE: usize, const ALIGN: usize>(
        buffer: &'a mut MemCast<SIZE, ALIGN>,
    ) -> Self
    where
        Align<ALIGN>: Alignment,
    {
        Self {
            ptr: buffer.data_mut(),
            size: Some(SIZE),
            _marker: PhantomData,
        }
    }

    /// Creates a view over `size` bytes at `ptr`.
    ///
    /// # Safety
    /// Unless `ptr` is null:
    /// - With `Some(size)`, `ptr` must be valid for reads and writes of
    ///   `size` bytes for `'a`.
    /// - With `None`, every access made through the view must stay within
    ///   memory valid for reads and writes for `'a`.
    /// - Nothing else may access those bytes during `'a`.
    #[inline(always)]
    pub const unsafe fn from_raw(ptr: *mut u8, size: Option<usize>) -> Self {
        Self {
            ptr,
            size,
            _marker: PhantomData,
        }
    }

    /// Rebinds the view to `size` bytes at `ptr`.
    ///
    /// # Safety
    /// See [`from_raw`](Self::from_raw).
    #[inline(always)]
    pub const unsafe fn set_raw(&mut self, ptr: *mut u8, size: Option<usize>) {
        self.ptr = ptr;
        self.size = size;
    }

    /// Rebinds the view to `bytes`.
    #[inline]
    pub const fn set_slice(&mut self, bytes: &'a mut [MaybeUninit<u8>]) {
        *self = Self::from_slice(bytes);
    }

    /// Rebinds the view to a null address.
    #[inline(always)]
    pub const fn reset(&mut self) {
        *self = Self::null();
    }

    /// Returns the viewed address.
    #[inline(always)]
    pub const fn data(&self) -> *const u8 {
        self.ptr
    }

    /// Returns the viewed address.
    #[inline(always)]
    pub const fn data_mut(&mut self) -> *mut u8 {
        self.ptr
    }

    #[inline(always)]
    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }

    /// Returns the size of the viewed bytes, if known.
    #[inline(always)]
    pub const fn size(&self) -> Option<usize> {
        self.size
    }

    /// Returns the largest power of two dividing the viewed address.
    ///
    /// This is the alignment the address happens to have, not one the
    /// owner of the bytes promised.
    pub fn alignment(&self) -> Result<usize, MemCastError> {
        let address = self.ptr.addr();
        if address == 0 {
            return Err(report(MemCastError::NullPointer));
        }
        Ok(1 << address.trailing_zeros())
    }

    #[inline]
    fn locate<T>(&self, offset: usize) -> Result<*mut T, MemCastError> {
        locate::<T>(self.ptr, self.size, offset)
    }

    // -------------------------------------------------------------------------
    // Placement

    /// Writes `value` at the start of the viewed bytes.
    #[inline]
    pub fn assign<T>(&mut self, value: T) -> Result<(), MemCastError> {
        self.assign_at_offset(0, value)
    }

    /// Writes `value` at `offset` bytes into the viewed bytes.
    pub fn assign_at_offset<T>(&mut self, offset: usize, value: T) -> Result<(), MemCastError> {
        self.emplace_at_offset(offset, || value).map(|_| ())
    }

    /// Writes `value` at `OFFSET` bytes into the viewed bytes.
    #[inline]
    pub fn assign_at<T, const OFFSET: usize>(&mut self, value: T) -> Result<(), MemCastError> {
        self.assign_at_offset(OFFSET, value)
    }

    /// Builds a value with `f` at the start of the viewed bytes and returns
    /// a reference to it.
    ///
    /// `f` is only called if the checks pass.
    #[inline]
    pub fn emplace<T, F>(&mut self, f: F) -> Result<&mut T, MemCastError>
    where
        F: FnOnce() -> T,
    {
        self.emplace_at_offset(0, f)
    }

    /// Builds a value with `f` at `offset` bytes into the viewed bytes and
    /// returns a reference to it.
    pub fn emplace_at_offset<T, F>(&mut self, offset: usize, f: F) -> Result<&mut T, MemCastError>
    where
        F: FnOnce() -> T,
    {
        let target = self.locate::<T>(offset)?;
        // SAFETY: non-null, aligned, in bounds when the size is known and
        // trusted by the constructor's contract otherwise.
        unsafe {
            target.write(f());
            Ok(&mut *target)
        }
    }

    /// Builds a value with `f` at `OFFSET` bytes into the viewed bytes and
    /// returns a reference to it.
    #[inline]
    pub fn emplace_at<T, F, const OFFSET: usize>(&mut self, f: F) -> Result<&mut T, MemCastError>
    where
        F: FnOnce() -> T,
    {
        self.emplace_at_offset(OFFSET, f)
    }

    // -------------------------------------------------------------------------
    // Views

    /// Views the start of the viewed bytes as a `T`.
    ///
    /// # Safety
    /// If the checks pass, the bytes must hold a valid `T`.
    #[inline]
    pub unsafe fn as_ref<T>(&self) -> Result<&T, MemCastError> {
        // SAFETY: forwarded to the caller.
        unsafe { self.as_ref_at_offset(0) }
    }

    /// Views the start of the viewed bytes as a mutable `T`.
    ///
    /// # Safety
    /// See [`as_ref`](Self::as_ref).
    #[inline]
    pub unsafe fn as_mut<T>(&mut self) -> Result<&mut T, MemCastError> {
        // SAFETY: forwarded to the caller.
        unsafe { self.as_mut_at_offset(0) }
    }

    /// Views the bytes at `offset` as a `T`.
    ///
    /// # Safety
    /// See [`as_ref`](Self::as_ref).
    pub unsafe fn as_ref_at_offset<T>(&self, offset: usize) -> Result<&T, MemCastError> {
        let target = self.locate::<T>(offset)?;
        // SAFETY: checked by `locate`, the caller guarantees validity.
        Ok(unsafe { &*target })
    }

    /// Views the bytes at `offset` as a mutable `T`.
    ///
    /// # Safety
    /// See [`as_ref`](Self::as_ref).
    pub unsafe fn as_mut_at_offset<T>(&mut self, offset: usize) -> Result<&mut T, MemCastError> {
        let target = self.locate::<T>(offset)?;
        // SAFETY: checked by `locate`, the caller guarantees validity.
        Ok(unsafe { &mut *target })
    }

    /// Views the bytes at `OFFSET` as a `T`.
    ///
    /// # Safety
    /// See [`as_ref`](Self::as_ref).
    #[inline]
    pub unsafe fn as_ref_at<T, const OFFSET: usize>(&self) -> Result<&T, MemCastError> {
        // SAFETY: forwarded to the caller.
        unsafe { self.as_ref_at_offset(OFFSET) }
    }

    /// Views the bytes at `OFFSET` as a mutable `T`.
    ///
    /// # Safety
    /// See [`as_ref`](Self::as_ref).
    #[inline]
    pub unsafe fn as_mut_at<T, const OFFSET: usize>(&mut self) -> Result<&mut T, MemCastError> {
        // SAFETY: forwarded to the caller.
        unsafe { self.as_mut_at_offset(OFFSET) }
    }
}

impl<'a, const SIZE: usize, const ALIGN: usize> From<&'a mut MemCast<SIZE, ALIGN>> for MemCastPtr<'a>
where
    Align<ALIGN>: Alignment,
{
    #[inline(always)]
    fn from(buffer: &'a mut MemCast<SIZE, ALIGN>) -> Self {
        Self::from_mem_cast(buffer)
    }
}

impl fmt::Pointer for MemCastPtr<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&self.ptr, f)
    }
}

impl fmt::Debug for MemCastPtr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemCastPtr")
            .field("data", &self.ptr)
            .field("size", &self.size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use core::mem::MaybeUninit;
    use core::ptr;

    use super::MemCastPtr;
    use crate::{MemCast, MemCastError};

    #[test]
    fn null_view_rejects_everything() {
        let mut view = MemCastPtr::default();

        assert!(view.is_null());
        assert_eq!(view.size(), MemCastPtr::UNDEFINED_SIZE);
        assert_eq!(view.alignment(), Err(MemCastError::NullPointer));

        assert_eq!(view.assign(1_u8), Err(MemCastError::NullPointer));
        assert_eq!(view.assign_at_offset(4, 1_u8), Err(MemCastError::NullPointer));
        assert_eq!(view.assign_at::<u8, 4>(1), Err(MemCastError::NullPointer));

        assert_eq!(view.emplace(|| 1_u8).map(|v| *v), Err(MemCastError::NullPointer));
        assert_eq!(view.emplace_at_offset(2, || 1_u16).map(|v| *v), Err(MemCastError::NullPointer));
        assert_eq!(view.emplace_at::<u32, _, 8>(|| 1).map(|v| *v), Err(MemCastError::NullPointer));

        unsafe {
            assert_eq!(view.as_ref::<u8>(), Err(MemCastError::NullPointer));
            assert_eq!(view.as_ref_at_offset::<u16>(2), Err(MemCastError::NullPointer));
            assert_eq!(view.as_ref_at::<u32, 4>(), Err(MemCastError::NullPointer));
            assert_eq!(view.as_mut::<u64>(), Err(MemCastError::NullPointer));
            assert_eq!(view.as_mut_at_offset::<u8>(1), Err(MemCastError::NullPointer));
            assert_eq!(view.as_mut_at::<u8, 2>(), Err(MemCastError::NullPointer));
        }
    }

    #[test]
    fn violations_are_logged() {
        let mut storage = MemCast::<8, 8>::new();
        let mut view = MemCastPtr::from_mem_cast(&mut storage);

        let before = warnings::count();
        view.assign(1_u64).unwrap();
        assert_eq!(warnings::count(), before);

        let _ = view.assign_at_offset(4, 1_u64);
        let _ = view.assign_at_offset(2, 1_u32);
        view.reset();
        let _ = view.alignment();
        assert_eq!(warnings::count(), before + 3);
    }

    /// Counts `warn` records emitted on the current thread.
    mod warnings {
        use core::cell::Cell;

        use log::{Level, LevelFilter, Log, Metadata, Record};

        std::thread_local! {
            static COUNT: Cell<usize> = const { Cell::new(0) };
        }

        struct Counter;

        impl Log for Counter {
            fn enabled(&self, metadata: &Metadata<'_>) -> bool {
                metadata.level() == Level::Warn
            }

            fn log(&self, record: &Record<'_>) {
                if self.enabled(record.metadata()) {
                    COUNT.with(|count| count.set(count.get() + 1));
                }
            }

            fn flush(&self) {}
        }

        static LOGGER: Counter = Counter;

        pub(super) fn count() -> usize {
            let _ = log::set_logger(&LOGGER);
            log::set_max_level(LevelFilter::Warn);
            COUNT.with(Cell::get)
        }
    }

    #[test]
    fn assign_then_rebind_to_null() {
        let mut storage = MemCast::<8, 8>::new();
        let mut view = MemCastPtr::from(&mut storage);

        view.assign(123456789_i64).unwrap();
        assert_eq!(unsafe { *view.as_ref::<i64>().unwrap() }, 123456789);

        unsafe { view.set_raw(ptr::null_mut(), Some(8)) };
        assert_eq!(unsafe { view.as_ref::<i64>() }, Err(MemCastError::NullPointer));

        assert_eq!(unsafe { *storage.as_ref::<i64>() }, 123456789);
    }

    #[test]
    fn too_small_for_type() {
        let mut storage = MemCast::<4, 8>::new();
        let view = MemCastPtr::from_mem_cast(&mut storage);

        assert!(matches!(
            unsafe { view.as_ref::<u64>() },
            Err(MemCastError::Size { required: 8, available: 4, offset: 0, .. })
        ));
    }

    #[test]
    fn misaligned_for_type() {
        let mut storage = MemCast::<16, 8>::new();
        let bytes = storage.as_uninit_bytes_mut();
        let mut view = MemCastPtr::from_slice(&mut bytes[1..]);

        assert_eq!(view.size(), Some(15));
        assert_eq!(view.alignment(), Ok(1));
        assert!(matches!(
            unsafe { view.as_ref::<u64>() },
            Err(MemCastError::Alignment { required: 8, .. })
        ));
        assert!(matches!(view.assign(0_u32), Err(MemCastError::Alignment { required: 4, .. })));

        view.assign(0xAB_u8).unwrap();
        view.assign_at::<u32, 3>(0xDEAD_BEEF).unwrap();
        assert_eq!(unsafe { *view.as_ref_at::<u32, 3>().unwrap() }, 0xDEAD_BEEF);
    }

    #[test]
    fn offsets_do_not_overlap() {
        let mut storage = MemCast::<16, 8>::new();
        let mut view = MemCastPtr::from_mem_cast(&mut storage);

        view.assign_at_offset(0, 1_u32).unwrap();
        view.assign_at_offset(4, 2_u32).unwrap();
        view.emplace_at::<u64, _, 8>(|| 3).unwrap();

        unsafe {
            *view.as_mut_at_offset::<u32>(4).unwrap() += 10;

            assert_eq!(*view.as_ref_at_offset::<u32>(0).unwrap(), 1);
            assert_eq!(*view.as_ref_at_offset::<u32>(4).unwrap(), 12);
            assert_eq!(*view.as_mut::<u32>().unwrap(), 1);
            assert_eq!(*view.as_ref_at::<u64, 8>().unwrap(), 3);
        }

        assert!(matches!(
            view.assign_at_offset(12, 0_u64),
            Err(MemCastError::Size { offset: 12, .. })
        ));
    }

    #[test]
    fn undefined_size_skips_size_check() {
        let mut words = [0_u32; 4];
        let mut view = unsafe {
            MemCastPtr::from_raw((&raw mut words).cast(), MemCastPtr::UNDEFINED_SIZE)
        };

        view.assign_at_offset(12, 7_u32).unwrap();
        assert_eq!(view.size(), None);
        assert_eq!(words[3], 7);
    }

    #[test]
    fn natural_alignment() {
        let mut storage = MemCast::<64, 64>::new();
        let bytes = storage.as_uninit_bytes_mut();

        assert!(MemCastPtr::from_slice(&mut bytes[..]).alignment().unwrap() >= 64);
        assert_eq!(MemCastPtr::from_slice(&mut bytes[8..]).alignment(), Ok(8));
        assert_eq!(MemCastPtr::from_slice(&mut bytes[12..]).alignment(), Ok(4));
        assert_eq!(MemCastPtr::from_slice(&mut bytes[33..]).alignment(), Ok(1));
    }

    #[test]
    fn set_slice_rebinds() {
        let mut first = [MaybeUninit::new(0_u8); 2];
        let mut second = [MaybeUninit::new(0_u8); 4];

        let mut view = MemCastPtr::from_slice(&mut first);
        view.assign([1_u8, 2]).unwrap();
        assert!(matches!(view.assign([0_u8; 3]), Err(MemCastError::Size { .. })));

        view.set_slice(&mut second);
        view.assign([3_u8, 4, 5]).unwrap();
        assert_eq!(view.size(), Some(4));

        view.reset();
        assert!(view.is_null());

        assert_eq!(unsafe { first.map(|b| b.assume_init()) }, [1, 2]);
        assert_eq!(unsafe { second.map(|b| b.assume_init()) }, [3, 4, 5, 0]);
    }
}
