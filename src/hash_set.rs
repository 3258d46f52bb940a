//! A hash set of structurally hashable keys.
//!
//! This module provides a `HashSet` that wraps the chained `HashTable`
//! with a presence-only payload and adds the set algebra: union,
//! intersection, and symmetric difference.

use core::fmt;
use core::fmt::Debug;
use core::fmt::Display;

use crate::equals::StructuralEq;
use crate::hash::StructuralHash;
use crate::hash_table::HashTable;

/// A hash set implemented as a `HashTable` whose values carry no
/// information.
///
/// Every operation delegates to the table: membership is a table lookup,
/// insertion stores the key against `()`, and the resize policy, bucket
/// placement, and key disambiguation are exactly the table's. The set adds
/// the algebraic operations, each of which builds and returns a fresh set
/// and leaves both operands untouched.
///
/// # Examples
///
/// ```rust
/// use struct_hash::HashSet;
///
/// let mut set = HashSet::new();
/// assert!(set.insert(1));
/// assert!(!set.insert(1));
/// assert!(set.contains(&1));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Clone)]
pub struct HashSet<K> {
    table: HashTable<K, ()>,
}

impl<K> HashSet<K>
where
    K: StructuralHash + StructuralEq,
{
    /// Creates an empty set at the minimum capacity.
    pub fn new() -> Self {
        Self {
            table: HashTable::new(),
        }
    }

    /// Creates an empty set that can hold at least `capacity` keys before
    /// resizing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: HashTable::with_capacity(capacity),
        }
    }

    /// Returns the number of keys in the set.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the set contains no keys.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the current bucket count of the underlying table.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Removes every key, returning the set to its initial
    /// minimum-capacity state.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Adds a key to the set.
    ///
    /// Returns `true` if the key was not already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use struct_hash::HashSet;
    ///
    /// let mut set = HashSet::new();
    /// assert!(set.insert("a"));
    /// assert!(!set.insert("a"));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        self.table.insert(key, ()).is_none()
    }

    /// Removes a key from the set.
    ///
    /// Returns `true` if the key was present; a no-op returning `false`
    /// otherwise.
    pub fn remove(&mut self, key: &K) -> bool {
        self.table.remove(key).is_some()
    }

    /// Returns `true` if the set contains `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use struct_hash::HashSet;
    ///
    /// let mut set = HashSet::new();
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&2));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        self.table.contains_key(key)
    }

    /// Returns an iterator over the set's keys in unspecified order.
    ///
    /// Restartable; deterministic between mutations.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Builds a new set by applying `transform` to every key.
    ///
    /// Duplicate images collapse to a single key, so the result may be
    /// smaller than the receiver.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use struct_hash::HashSet;
    ///
    /// let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
    /// let parity = set.map(|k| k % 2);
    /// assert_eq!(parity.len(), 2);
    /// assert!(parity.contains(&0));
    /// assert!(parity.contains(&1));
    /// ```
    pub fn map<K2, F>(&self, mut transform: F) -> HashSet<K2>
    where
        K2: StructuralHash + StructuralEq,
        F: FnMut(&K) -> K2,
    {
        let mut mapped = HashSet::new();
        for key in self.iter() {
            mapped.insert(transform(key));
        }
        mapped
    }

    /// Returns `true` if the two sets share no keys.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.iter().all(|k| !other.contains(k))
    }

    /// Returns `true` if every key of `self` is in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|k| other.contains(k))
    }

    /// Returns `true` if every key of `other` is in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }
}

impl<K> HashSet<K>
where
    K: StructuralHash + StructuralEq + Clone,
{
    /// Returns a new set with every key present in either operand.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use struct_hash::HashSet;
    ///
    /// let a: HashSet<i32> = [1, 2, 3].into_iter().collect();
    /// let b: HashSet<i32> = [2, 3, 4].into_iter().collect();
    ///
    /// let u = a.union(&b);
    /// assert_eq!(u.len(), 4);
    /// assert!(u.contains(&1) && u.contains(&4));
    /// ```
    pub fn union(&self, other: &Self) -> Self {
        let mut joined = Self::with_capacity(self.len().max(other.len()));
        for key in self.iter() {
            joined.insert(key.clone());
        }
        for key in other.iter() {
            joined.insert(key.clone());
        }
        joined
    }

    /// Returns a new set with every key present in both operands.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use struct_hash::HashSet;
    ///
    /// let a: HashSet<i32> = [1, 2, 3].into_iter().collect();
    /// let b: HashSet<i32> = [2, 3, 4].into_iter().collect();
    ///
    /// let i = a.intersection(&b);
    /// assert_eq!(i.len(), 2);
    /// assert!(i.contains(&2) && i.contains(&3));
    /// ```
    pub fn intersection(&self, other: &Self) -> Self {
        let mut shared = Self::new();
        for key in self.iter() {
            if other.contains(key) {
                shared.insert(key.clone());
            }
        }
        shared
    }

    /// Returns a new set with the keys present in exactly one operand:
    /// the receiver's keys not in `other`, plus `other`'s keys not in the
    /// receiver.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use struct_hash::HashSet;
    ///
    /// let a: HashSet<i32> = [1, 2, 3].into_iter().collect();
    /// let b: HashSet<i32> = [2, 3, 4].into_iter().collect();
    ///
    /// let d = a.symmetric_difference(&b);
    /// assert_eq!(d.len(), 2);
    /// assert!(d.contains(&1) && d.contains(&4));
    /// ```
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut only_one = Self::new();
        for key in self.iter() {
            if !other.contains(key) {
                only_one.insert(key.clone());
            }
        }
        for key in other.iter() {
            if !self.contains(key) {
                only_one.insert(key.clone());
            }
        }
        only_one
    }
}

impl<K> Default for HashSet<K>
where
    K: StructuralHash + StructuralEq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> PartialEq for HashSet<K>
where
    K: StructuralHash + StructuralEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|k| other.contains(k))
    }
}

impl<K> Debug for HashSet<K>
where
    K: StructuralHash + StructuralEq + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> Display for HashSet<K>
where
    K: StructuralHash + StructuralEq + Display,
{
    /// Renders `{ k1,k2,... }` in iteration order. Diagnostic only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for (i, key) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{key}")?;
        }
        f.write_str(" }")
    }
}

impl<K> FromIterator<K> for HashSet<K>
where
    K: StructuralHash + StructuralEq,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K> Extend<K> for HashSet<K>
where
    K: StructuralHash + StructuralEq,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

/// An iterator over the keys of a `HashSet`.
pub struct Iter<'a, K> {
    inner: crate::hash_table::Iter<'a, K, ()>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

/// An owning iterator over the keys of a `HashSet`.
pub struct IntoIter<K> {
    inner: crate::hash_table::IntoIter<K, ()>,
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, ())| k)
    }
}

impl<K> IntoIterator for HashSet<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.table.into_iter(),
        }
    }
}

impl<'a, K> IntoIterator for &'a HashSet<K>
where
    K: StructuralHash + StructuralEq,
{
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
