use core::fmt;
use core::ops::Index;

use crate::vec::StackVec;

// -----------------------------------------------------------------------------
// Lookup

/// A fixed-capacity lookup table of keys and their values.
///
/// Keys and values live in two parallel arrays that always grow in
/// lockstep, so the value of the key at position `i` is at position `i`.
/// Entries can only be appended; there is no removal besides [`clear`].
///
/// Searching is either linear ([`index_of`], [`get`]) or binary
/// ([`index_of_sorted`], [`get_sorted`]). The binary variants require the
/// keys to have been inserted in ascending order; the table never sorts.
///
/// [`clear`]: Self::clear
/// [`index_of`]: Self::index_of
/// [`get`]: Self::get
/// [`index_of_sorted`]: Self::index_of_sorted
/// [`get_sorted`]: Self::get_sorted
///
/// # Examples
///
/// ```
/// use etl_utils::collections::Lookup;
///
/// let mut table: Lookup<u32, &str, 4> = Lookup::new();
///
/// table.insert(10, "ten").unwrap();
/// table.insert(20, "twenty").unwrap();
///
/// assert_eq!(table.index_of(&20), Some(1));
/// assert_eq!(table.get(&10), Some(&"ten"));
/// assert_eq!(table.get_sorted(&20), Some(&"twenty"));
/// assert_eq!(table.get(&30), None);
/// assert_eq!(table[1], "twenty");
/// ```
pub struct Lookup<K, V, const N: usize> {
    keys: StackVec<K, N>,
    values: StackVec<V, N>,
}

impl<K, V, const N: usize> Default for Lookup<K, V, N> {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, const N: usize> Lookup<K, V, N> {
    /// Creates an empty table.
    #[inline]
    pub fn new() -> Self {
        Self {
            keys: StackVec::new(),
            values: StackVec::new(),
        }
    }

    /// Creates a table from an iterator of `(key, value)` pairs.
    ///
    /// If the iterator yields more than `N` pairs, the first pair that
    /// does not fit is returned in `Err` and the table is discarded.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, (K, V)>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut table = Self::new();
        for pair in pairs {
            table.insert_pair(pair)?;
        }
        Ok(table)
    }

    /// Appends a key and its value.
    ///
    /// Duplicate keys are accepted; both searches return the first match.
    ///
    /// Returns the pair in `Err` if the table is full.
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> Result<(), (K, V)> {
        if self.keys.is_full() {
            return Err((key, value));
        }
        self.keys.push(key);
        self.values.push(value);
        Ok(())
    }

    /// Appends a `(key, value)` pair. See [`insert`](Self::insert).
    #[inline(always)]
    pub fn insert_pair(&mut self, (key, value): (K, V)) -> Result<(), (K, V)> {
        self.insert(key, value)
    }

    /// Returns the number of entries.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns the number of entries, same as [`len`](Self::len).
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Returns the maximum number of entries.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.keys.len() == 0
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.keys.is_full()
    }

    /// Removes every entry.
    #[inline]
    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    /// The keys, in insertion order.
    #[inline(always)]
    pub fn keys(&self) -> &[K] {
        self.keys.as_slice()
    }

    /// The values, in insertion order.
    #[inline(always)]
    pub fn values(&self) -> &[V] {
        self.values.as_slice()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&K, &V)> + '_ {
        self.keys().iter().zip(self.values())
    }
}

impl<K: PartialEq, V, const N: usize> Lookup<K, V, N> {
    /// Finds the position of `key` with a linear search.
    #[inline]
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.keys().iter().position(|k| k == key)
    }

    /// Finds the value of `key` with a linear search.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        let index = self.index_of(key)?;
        self.values().get(index)
    }

    /// Finds the value of `key` with a linear search.
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.index_of(key)?;
        self.values.as_mut_slice().get_mut(index)
    }
}

impl<K: Ord, V, const N: usize> Lookup<K, V, N> {
    /// Finds the position of `key` with a binary search.
    ///
    /// Among equal keys the first one is found, as with
    /// [`index_of`](Self::index_of).
    ///
    /// The keys must be sorted in ascending order, otherwise the
    /// result is unspecified (but never out of bounds).
    #[inline]
    pub fn index_of_sorted(&self, key: &K) -> Option<usize> {
        let keys = self.keys();
        let index = keys.partition_point(|k| k < key);
        (index < keys.len() && keys[index] == *key).then_some(index)
    }

    /// Finds the value of `key` with a binary search.
    ///
    /// See [`index_of_sorted`](Self::index_of_sorted) for the precondition.
    #[inline]
    pub fn get_sorted(&self, key: &K) -> Option<&V> {
        let index = self.index_of_sorted(key)?;
        self.values().get(index)
    }

    /// Finds the value of `key` with a binary search.
    ///
    /// See [`index_of_sorted`](Self::index_of_sorted) for the precondition.
    #[inline]
    pub fn get_sorted_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.index_of_sorted(key)?;
        self.values.as_mut_slice().get_mut(index)
    }
}

impl<K, V, const N: usize> Index<usize> for Lookup<K, V, N> {
    type Output = V;

    /// Returns the value at `index`, in insertion order.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    #[inline]
    fn index(&self, index: usize) -> &V {
        &self.values()[index]
    }
}

impl<K: fmt::Debug, V: fmt::Debug, const N: usize> fmt::Debug for Lookup<K, V, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::format;
    use std::string::String;

    use super::Lookup;

    #[test]
    fn keys_and_values_stay_paired() {
        let mut table: Lookup<u32, String, 8> = Lookup::new();

        for (k, v) in [(3, "c"), (1, "a"), (2, "b")] {
            table.insert(k, String::from(v)).unwrap();
        }

        assert_eq!(table.len(), 3);
        assert_eq!(table.count(), 3);
        assert_eq!(table.keys(), &[3, 1, 2]);
        assert_eq!(table.index_of(&1), Some(1));
        assert_eq!(table.get(&2).map(String::as_str), Some("b"));
        assert_eq!(&table[0], "c");
    }

    #[test]
    fn full_table_rejects_pair() {
        let mut table: Lookup<u8, u8, 2> = Lookup::new();

        assert!(table.insert(1, 10).is_ok());
        assert!(table.insert_pair((2, 20)).is_ok());
        assert!(table.is_full());
        assert_eq!(table.insert(3, 30), Err((3, 30)));
        assert_eq!(table.len(), 2);
        assert_eq!(table.capacity(), 2);
    }

    #[test]
    fn from_pairs_overflow() {
        let ok = Lookup::<u8, char, 3>::from_pairs([(1, 'a'), (2, 'b')]).unwrap();
        assert_eq!(ok.get(&2), Some(&'b'));

        let err = Lookup::<u8, char, 1>::from_pairs([(1, 'a'), (2, 'b')]);
        assert_eq!(err.err(), Some((2, 'b')));
    }

    #[test]
    fn binary_search_on_sorted_keys() {
        let mut table = Lookup::<i32, i32, 16>::from_pairs((0..10).map(|k| (k * 3, k))).unwrap();

        assert_eq!(table.index_of_sorted(&12), Some(4));
        assert_eq!(table.index_of_sorted(&13), None);
        assert_eq!(table.get_sorted(&27), Some(&9));

        *table.get_sorted_mut(&27).unwrap() = 90;
        assert_eq!(table.get(&27), Some(&90));
    }

    #[test]
    fn binary_search_returns_first_duplicate() {
        let mut table =
            Lookup::<u8, char, 8>::from_pairs([(1, 'a'), (5, 'x'), (5, 'y'), (5, 'z'), (9, 'b')])
                .unwrap();

        assert_eq!(table.index_of_sorted(&5), Some(1));
        assert_eq!(table.index_of_sorted(&5), table.index_of(&5));
        assert_eq!(table.get_sorted(&5), Some(&'x'));
        assert_eq!(table.index_of_sorted(&9), Some(4));
        assert_eq!(table.index_of_sorted(&1), Some(0));
        assert_eq!(table.index_of_sorted(&10), None);
        assert_eq!(table.index_of_sorted(&0), None);

        *table.get_sorted_mut(&5).unwrap() = 'w';
        assert_eq!(table.values(), &['a', 'w', 'y', 'z', 'b']);
    }

    #[test]
    fn missing_key() {
        let mut table: Lookup<&str, u32, 4> = Lookup::new();
        table.insert("one", 1).unwrap();

        assert_eq!(table.index_of(&"two"), None);
        assert_eq!(table.get_mut(&"two"), None);
        assert_eq!(table.get_sorted(&"two"), None);
    }

    #[test]
    fn linear_search_returns_first_duplicate() {
        let table = Lookup::<u8, u8, 4>::from_pairs([(5, 1), (5, 2)]).unwrap();

        assert_eq!(table.index_of(&5), Some(0));
        assert_eq!(table.get(&5), Some(&1));
    }

    #[test]
    fn clear_and_debug() {
        let mut table = Lookup::<u8, char, 4>::from_pairs([(1, 'x')]).unwrap();
        assert_eq!(format!("{table:?}"), "{1: 'x'}");

        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.iter().len(), 0);
    }
}
