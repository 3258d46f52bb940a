//! A hash table using separate chaining with load-factor-driven resizing.
//!
//! Keys are placed by [`StructuralHash`] and disambiguated within a bucket
//! by [`StructuralEq`], so arbitrarily nested composite keys work as long
//! as the two stay consistent (equal keys hash identically).

use alloc::vec::Vec;
use core::fmt;
use core::fmt::Debug;
use core::fmt::Display;
use core::iter;
use core::mem;

use crate::equals::StructuralEq;
use crate::hash::StructuralHash;

/// The minimum bucket count. Shrinking never goes below this, no matter how
/// small the table gets.
pub const MIN_CAPACITY: usize = 32;

/// Below this load factor the table halves its capacity.
const MIN_LOAD: f64 = 0.25;

/// Above this load factor the table doubles its capacity.
const MAX_LOAD: f64 = 1.0;

/// Cap on capacity adjustments after a single mutation. With one-key-at-a-
/// time mutations a single step always restores the load bounds; the loop
/// re-checks rather than assuming it.
const MAX_RESIZE_STEPS: usize = 4;

/// Seed under which the table hashes keys for bucket placement.
const TABLE_SEED: u64 = 0;

fn new_buckets<K, V>(capacity: usize) -> Vec<Vec<(K, V)>> {
    iter::repeat_with(Vec::new).take(capacity).collect()
}

fn slot<K: StructuralHash>(key: &K, capacity: usize) -> usize {
    (key.structural_hash(TABLE_SEED) % capacity as u64) as usize
}

/// A hash table mapping structurally hashable keys to values.
///
/// `HashTable<K, V>` stores key-value pairs in `Vec` buckets selected by
/// `structural_hash(key) mod capacity`. Within a bucket, keys are found by
/// a linear [`StructuralEq`] scan, so at most one pair exists per distinct
/// key. Capacity starts at [`MIN_CAPACITY`], stays a power of two, and is
/// doubled or halved whenever a mutation pushes the load factor out of
/// `[0.25, 1.0]`; every pair is rehashed into fresh buckets when that
/// happens, amortized the same way as any open-hashing table.
///
/// Lookups return [`Option`], never a sentinel: a stored value that happens
/// to be empty, zero, or null-like is always distinguishable from a missing
/// key.
///
/// No operation fails at runtime. The only precondition is the trait bound
/// itself; a hand-written key type whose hash and equality disagree will
/// silently lose keys, not panic.
///
/// # Examples
///
/// ```rust
/// use struct_hash::HashTable;
///
/// let mut table = HashTable::new();
/// table.insert("x", 1);
/// table.insert("y", 2);
///
/// assert_eq!(table.get(&"x"), Some(&1));
/// assert_eq!(table.get(&"z"), None);
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Clone)]
pub struct HashTable<K, V> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
}

impl<K, V> HashTable<K, V>
where
    K: StructuralHash + StructuralEq,
{
    /// Creates an empty table at the minimum capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use struct_hash::HashTable;
    ///
    /// let table: HashTable<i32, &str> = HashTable::new();
    /// assert!(table.is_empty());
    /// assert_eq!(table.capacity(), 32);
    /// ```
    pub fn new() -> Self {
        Self {
            buckets: new_buckets(MIN_CAPACITY),
            len: 0,
        }
    }

    /// Creates an empty table that can hold at least `capacity` keys before
    /// resizing.
    ///
    /// The actual capacity is the smallest power of two at least as large
    /// as both `capacity` and the minimum capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use struct_hash::HashTable;
    ///
    /// let table: HashTable<i32, &str> = HashTable::with_capacity(100);
    /// assert!(table.capacity() >= 100);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: new_buckets(capacity.max(MIN_CAPACITY).next_power_of_two()),
            len: 0,
        }
    }

    /// Returns the number of distinct keys in the table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use struct_hash::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// assert_eq!(table.len(), 0);
    /// table.insert(1, "a");
    /// table.insert(1, "b");
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table contains no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current bucket count.
    ///
    /// Grows and shrinks by factors of two as the table mutates; never
    /// drops below [`MIN_CAPACITY`].
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Removes every pair, returning the table to its initial
    /// minimum-capacity state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use struct_hash::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert(1, "a");
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert_eq!(table.capacity(), 32);
    /// ```
    pub fn clear(&mut self) {
        self.buckets = new_buckets(MIN_CAPACITY);
        self.len = 0;
    }

    /// Returns a reference to the value for `key`, or `None` if the key is
    /// not present.
    ///
    /// Never mutates the table: repeated lookups return the same result and
    /// leave length and capacity untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use struct_hash::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert(1, "a");
    /// assert_eq!(table.get(&1), Some(&"a"));
    /// assert_eq!(table.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.buckets[slot(key, self.buckets.len())]
            .iter()
            .find(|(k, _)| k.structural_eq(key))
            .map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use struct_hash::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert(1, 10);
    /// if let Some(v) = table.get_mut(&1) {
    ///     *v += 1;
    /// }
    /// assert_eq!(table.get(&1), Some(&11));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = slot(key, self.buckets.len());
        self.buckets[index]
            .iter_mut()
            .find(|(k, _)| k.structural_eq(key))
            .map(|(_, v)| v)
    }

    /// Returns `true` if the table contains `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Inserts a key-value pair.
    ///
    /// If an equal key is already present its value is replaced in place
    /// and the old value returned; length is unchanged and no resize
    /// happens. Otherwise the pair is appended to its bucket, `None` is
    /// returned, and the table grows if the insertion pushed the load
    /// factor above 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use struct_hash::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// assert_eq!(table.insert(37, "a"), None);
    /// assert_eq!(table.insert(37, "b"), Some("a"));
    /// assert_eq!(table.get(&37), Some(&"b"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = slot(&key, self.buckets.len());
        let bucket = &mut self.buckets[index];
        if let Some((_, v)) = bucket.iter_mut().find(|(k, _)| k.structural_eq(&key)) {
            return Some(mem::replace(v, value));
        }
        bucket.push((key, value));
        self.len += 1;
        self.rebalance();
        None
    }

    /// Removes `key`, returning its value if it was present.
    ///
    /// A no-op returning `None` when the key is absent. When a pair is
    /// removed the table shrinks if the removal dropped the load factor
    /// below 0.25 (but never below the minimum capacity).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use struct_hash::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert(1, "a");
    /// assert_eq!(table.remove(&1), Some("a"));
    /// assert_eq!(table.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = slot(key, self.buckets.len());
        let bucket = &mut self.buckets[index];
        let position = bucket.iter().position(|(k, _)| k.structural_eq(key))?;
        let (_, value) = bucket.remove(position);
        self.len -= 1;
        self.rebalance();
        Some(value)
    }

    /// Builds a new table by applying `transform` to every pair.
    ///
    /// The receiver is not mutated. If `transform` maps two keys to the
    /// same new key, the later pair overwrites the earlier one, matching
    /// the semantics of repeated [`insert`](Self::insert).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use struct_hash::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert("x", 1);
    /// table.insert("y", 2);
    ///
    /// let scaled = table.map(|k, v| (*k, v * 10));
    /// assert_eq!(scaled.get(&"x"), Some(&10));
    /// assert_eq!(scaled.get(&"y"), Some(&20));
    /// assert_eq!(table.get(&"x"), Some(&1));
    /// ```
    pub fn map<K2, V2, F>(&self, mut transform: F) -> HashTable<K2, V2>
    where
        K2: StructuralHash + StructuralEq,
        F: FnMut(&K, &V) -> (K2, V2),
    {
        let mut mapped = HashTable::new();
        for (k, v) in self.iter() {
            let (k2, v2) = transform(k, v);
            mapped.insert(k2, v2);
        }
        mapped
    }

    /// Returns an iterator over the table's key-value pairs.
    ///
    /// The order is bucket order then in-bucket append order; it is
    /// deterministic between mutations but not stable across them, and no
    /// particular order is guaranteed. The iterator is restartable; call
    /// `iter` again for a fresh pass.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use struct_hash::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert(1, "one");
    /// table.insert(2, "two");
    ///
    /// let mut pairs: Vec<_> = table.iter().map(|(k, v)| (*k, *v)).collect();
    /// pairs.sort();
    /// assert_eq!(pairs, vec![(1, "one"), (2, "two")]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            outer: self.buckets.iter(),
            inner: [].iter(),
        }
    }

    /// Returns an iterator over the table's keys.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the table's values.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Doubles or halves capacity until the load factor is back in bounds.
    fn rebalance(&mut self) {
        for _ in 0..MAX_RESIZE_STEPS {
            let target = self.target_capacity();
            if target == self.buckets.len() {
                break;
            }
            self.rehash(target);
        }
    }

    fn target_capacity(&self) -> usize {
        let capacity = self.buckets.len();
        let load = self.len as f64 / capacity as f64;
        if load < MIN_LOAD {
            (capacity / 2).max(MIN_CAPACITY)
        } else if load > MAX_LOAD {
            capacity * 2
        } else {
            capacity
        }
    }

    /// Reinserts every pair into fresh buckets of the target capacity.
    ///
    /// Keys are already distinct, so pairs go straight to their new bucket
    /// without an equality scan.
    fn rehash(&mut self, new_capacity: usize) {
        let old = mem::replace(&mut self.buckets, new_buckets(new_capacity));
        for (key, value) in old.into_iter().flatten() {
            let index = slot(&key, new_capacity);
            self.buckets[index].push((key, value));
        }
    }
}

impl<K, V> Default for HashTable<K, V>
where
    K: StructuralHash + StructuralEq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Debug for HashTable<K, V>
where
    K: StructuralHash + StructuralEq + Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in self.iter() {
            map.entry(k, v);
        }
        map.finish()
    }
}

impl<K, V> Display for HashTable<K, V>
where
    K: StructuralHash + StructuralEq + Display,
    V: Display,
{
    /// Renders `{ (k1,v1),(k2,v2),... }` in iteration order.
    ///
    /// Diagnostic only: the order is whatever the buckets currently hold,
    /// not a canonical form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use struct_hash::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert(1, "one");
    /// assert_eq!(table.to_string(), "{ (1,one) }");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "({k},{v})")?;
        }
        f.write_str(" }")
    }
}

impl<K, V> FromIterator<(K, V)> for HashTable<K, V>
where
    K: StructuralHash + StructuralEq,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<K, V> Extend<(K, V)> for HashTable<K, V>
where
    K: StructuralHash + StructuralEq,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

/// An iterator over the key-value pairs of a `HashTable`.
pub struct Iter<'a, K, V> {
    outer: core::slice::Iter<'a, Vec<(K, V)>>,
    inner: core::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((k, v)) = self.inner.next() {
                return Some((k, v));
            }
            self.inner = self.outer.next()?.iter();
        }
    }
}

/// An iterator over the keys of a `HashTable`.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

/// An iterator over the values of a `HashTable`.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }
}

/// An owning iterator over the key-value pairs of a `HashTable`.
pub struct IntoIter<K, V> {
    outer: alloc::vec::IntoIter<Vec<(K, V)>>,
    inner: alloc::vec::IntoIter<(K, V)>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pair) = self.inner.next() {
                return Some(pair);
            }
            self.inner = self.outer.next()?.into_iter();
        }
    }
}

impl<K, V> IntoIterator for HashTable<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            outer: self.buckets.into_iter(),
            inner: Vec::new().into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a HashTable<K, V>
where
    K: StructuralHash + StructuralEq,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
