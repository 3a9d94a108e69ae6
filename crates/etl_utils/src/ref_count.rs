//! Objects that carry their own reference count.
//!
//! The count is not tied to any smart pointer: owners call
//! [`increment_reference_count`] and [`decrement_reference_count`]
//! themselves, and decide what to do when the count drops to zero.
//! This suits pools of statically allocated messages shared between
//! several consumers.
//!
//! How the count is stored is chosen at compile time through the
//! counter type parameter:
//!
//! - [`LocalCounter`]: a plain integer, single-threaded.
//! - [`AtomicCounter`]: lock-free atomic integer, may be shared across threads.
//! - [`NullCounter`]: always `1`, for objects that are never released.
//!
//! Consumers written against [`ReferenceCounted`] or [`ReferenceCounter`]
//! work with any of them.
//!
//! [`increment_reference_count`]: ReferenceCounter::increment_reference_count
//! [`decrement_reference_count`]: ReferenceCounter::decrement_reference_count
//!
//! # Examples
//!
//! ```
//! use etl_utils::ref_count::{ReferenceCounted, ReferenceCountedObject, ReferenceCounter};
//!
//! fn release<R: ReferenceCounted>(object: &R) -> bool {
//!     object.reference_counter().decrement_reference_count() == 0
//! }
//!
//! let message = ReferenceCountedObject::<_>::new("hello");
//! message.reference_counter().set_reference_count(2);
//!
//! assert!(!release(&message));
//! assert!(release(&message));
//! assert_eq!(*message.object(), "hello");
//! ```

use core::cell::Cell;
use core::fmt;

use etl_os::sync::atomic::{AtomicI32, Ordering};

// -----------------------------------------------------------------------------
// Counters

/// Operations on a reference count.
///
/// All methods take `&self` so that a counter can be reached through a
/// shared reference to the object it counts.
pub trait ReferenceCounter {
    /// Overwrites the count.
    fn set_reference_count(&self, value: i32);

    /// Adds one to the count.
    ///
    /// # Panics
    /// Panics if the count is already `i32::MAX`.
    fn increment_reference_count(&self);

    /// Subtracts one from the count and returns the new count.
    ///
    /// # Panics
    /// Panics if the count is not positive.
    fn decrement_reference_count(&self) -> i32;

    /// Returns the current count.
    fn reference_count(&self) -> i32;
}

#[cold]
#[inline(never)]
#[track_caller]
fn underflow() -> ! {
    log::error!("reference count decremented below zero");
    panic!("reference count decremented below zero");
}

#[cold]
#[inline(never)]
#[track_caller]
fn overflow() -> ! {
    log::error!("reference count incremented past i32::MAX");
    panic!("reference count incremented past i32::MAX");
}

/// A non-atomic counter, starting at `0`.
#[derive(Default)]
pub struct LocalCounter(Cell<i32>);

impl LocalCounter {
    #[inline(always)]
    pub const fn new() -> Self {
        Self(Cell::new(0))
    }
}

impl ReferenceCounter for LocalCounter {
    #[inline]
    fn set_reference_count(&self, value: i32) {
        self.0.set(value);
    }

    #[inline]
    #[track_caller]
    fn increment_reference_count(&self) {
        match self.0.get().checked_add(1) {
            Some(count) => self.0.set(count),
            None => overflow(),
        }
    }

    #[inline]
    #[track_caller]
    fn decrement_reference_count(&self) -> i32 {
        let count = self.0.get();
        if count <= 0 {
            underflow();
        }
        self.0.set(count - 1);
        count - 1
    }

    #[inline]
    fn reference_count(&self) -> i32 {
        self.0.get()
    }
}

/// An atomic counter, starting at `0`.
///
/// Only the count is synchronized. The counted object still needs
/// its own synchronization if it is mutated from several threads.
#[derive(Default)]
pub struct AtomicCounter(AtomicI32);

impl AtomicCounter {
    #[inline(always)]
    pub const fn new() -> Self {
        Self(AtomicI32::new(0))
    }
}

impl ReferenceCounter for AtomicCounter {
    #[inline]
    fn set_reference_count(&self, value: i32) {
        self.0.store(value, Ordering::Release);
    }

    #[inline]
    #[track_caller]
    fn increment_reference_count(&self) {
        if self
            .0
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |c| c.checked_add(1))
            .is_err()
        {
            overflow();
        }
    }

    #[inline]
    #[track_caller]
    fn decrement_reference_count(&self) -> i32 {
        match self
            .0
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |c| (c > 0).then(|| c - 1))
        {
            Ok(previous) => previous - 1,
            Err(_) => underflow(),
        }
    }

    #[inline]
    fn reference_count(&self) -> i32 {
        self.0.load(Ordering::Acquire)
    }
}

/// A counter for objects that are never released.
///
/// Always reports `1`; writes are ignored and decrementing never
/// reaches zero.
#[derive(Default, Clone, Copy)]
pub struct NullCounter;

impl ReferenceCounter for NullCounter {
    #[inline(always)]
    fn set_reference_count(&self, _value: i32) {}

    #[inline(always)]
    fn increment_reference_count(&self) {}

    #[inline(always)]
    fn decrement_reference_count(&self) -> i32 {
        1
    }

    #[inline(always)]
    fn reference_count(&self) -> i32 {
        1
    }
}

// -----------------------------------------------------------------------------
// Counted objects

/// Access to the counter of a reference counted object.
pub trait ReferenceCounted {
    type Counter: ReferenceCounter;

    fn reference_counter(&self) -> &Self::Counter;
}

/// An immutable object paired with a reference counter.
///
/// The object is neither `Clone` nor `Copy`: copies would share a
/// value without sharing its count.
pub struct ReferenceCountedObject<T, C = LocalCounter> {
    object: T,
    counter: C,
}

/// A reference counted object whose count may be shared across threads.
pub type AtomicCountedObject<T> = ReferenceCountedObject<T, AtomicCounter>;

/// An object that is never released, its count is always `1`.
pub type PersistentObject<T> = ReferenceCountedObject<T, NullCounter>;

impl<T, C: ReferenceCounter + Default> ReferenceCountedObject<T, C> {
    /// Wraps `object` with a fresh counter.
    #[inline]
    pub fn new(object: T) -> Self {
        Self {
            object,
            counter: C::default(),
        }
    }
}

impl<T, C: ReferenceCounter> ReferenceCountedObject<T, C> {
    /// Returns the counted object.
    #[inline(always)]
    pub const fn object(&self) -> &T {
        &self.object
    }

    /// Unwraps the object, discarding the count.
    #[inline]
    pub fn into_object(self) -> T {
        self.object
    }
}

impl<T, C: ReferenceCounter> ReferenceCounted for ReferenceCountedObject<T, C> {
    type Counter = C;

    #[inline(always)]
    fn reference_counter(&self) -> &C {
        &self.counter
    }
}

impl<T: fmt::Debug, C: ReferenceCounter> fmt::Debug for ReferenceCountedObject<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceCountedObject")
            .field("object", &self.object)
            .field("count", &self.counter.reference_count())
            .finish()
    }
}
