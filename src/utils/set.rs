/*!
# Generalized Sets

Abstraction over set-like collections so that algorithms (e.g. modularity of a community) can accept
whatever set type the caller already holds.

The module includes:
- [`Set<T>`]: trait for generic set-like operations
- Concrete implementations: `HashSet` (and thus `FxHashSet`) and [`IndexedSet`], a set
  supporting uniform sampling in constant time.
*/

use std::{
    collections::{HashSet, hash_set},
    hash::{BuildHasher, Hash},
    iter::{Cloned, Copied},
};

use fxhash::FxHashMap;
use rand::Rng;

/// Minimalist trait for a set-like collection.
///
/// Supports insertion, removal, membership queries and iteration.
pub trait Set<T> {
    /// Inserts `value` into the set.
    /// Returns `true` if the element was already present.
    fn insert(&mut self, value: T) -> bool;

    /// Inserts multiple elements from an iterator.
    fn insert_multiple<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }

    /// Removes `value` from the set.
    /// Returns `true` if the element was present.
    fn remove(&mut self, value: &T) -> bool;

    /// Iterator over elements in set.
    ///
    /// Returned by [`Set::iter`].
    type SetIter<'a>: Iterator<Item = T>
    where
        Self: 'a,
        T: Clone;

    /// Returns an iterator over all elements in the set.
    fn iter(&self) -> Self::SetIter<'_>
    where
        T: Clone;

    /// Returns `true` if the set contains `value`.
    fn contains(&self, value: &T) -> bool;

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, value: T) -> bool {
        !HashSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        HashSet::remove(self, value)
    }

    type SetIter<'a>
        = Cloned<hash_set::Iter<'a, T>>
    where
        Self: 'a,
        T: Clone;

    fn iter(&self) -> Self::SetIter<'_>
    where
        T: Clone,
    {
        HashSet::iter(self).cloned()
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

/// A set supporting insertion, removal and uniform sampling in (expected) constant time.
///
/// Elements are stored densely in a `Vec`; a hash map remembers the position of every element so
/// that removal can `swap_remove` the element and patch the position of the moved one.
#[derive(Debug, Clone)]
pub struct IndexedSet<T> {
    data: Vec<T>,
    positions: FxHashMap<T, usize>,
}

impl<T> Default for IndexedSet<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            positions: FxHashMap::default(),
        }
    }
}

impl<T> IndexedSet<T>
where
    T: Copy + Eq + Hash,
{
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a uniformly random element or `None` if the set is empty
    pub fn random_element<R: Rng>(&self, rng: &mut R) -> Option<T> {
        if self.data.is_empty() {
            None
        } else {
            Some(self.data[rng.random_range(0..self.data.len())])
        }
    }
}

impl<T> Set<T> for IndexedSet<T>
where
    T: Copy + Eq + Hash,
{
    fn insert(&mut self, value: T) -> bool {
        if self.positions.contains_key(&value) {
            return true;
        }

        self.positions.insert(value, self.data.len());
        self.data.push(value);
        false
    }

    fn remove(&mut self, value: &T) -> bool {
        let Some(pos) = self.positions.remove(value) else {
            return false;
        };

        self.data.swap_remove(pos);
        if let Some(moved) = self.data.get(pos) {
            self.positions.insert(*moved, pos);
        }

        true
    }

    type SetIter<'a>
        = Copied<std::slice::Iter<'a, T>>
    where
        Self: 'a,
        T: Clone;

    fn iter(&self) -> Self::SetIter<'_> {
        self.data.iter().copied()
    }

    fn contains(&self, value: &T) -> bool {
        self.positions.contains_key(value)
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T> FromIterator<T> for IndexedSet<T>
where
    T: Copy + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.insert_multiple(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use fxhash::FxHashSet;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn insert_remove_contains() {
        let mut set = IndexedSet::new();
        assert!(!set.insert(3u32));
        assert!(!set.insert(5));
        assert!(!set.insert(7));
        assert!(set.insert(5));
        assert_eq!(set.len(), 3);

        assert!(set.remove(&3));
        assert!(!set.remove(&3));
        assert!(!set.contains(&3));
        assert!(set.contains(&5) && set.contains(&7));
        assert_eq!(set.iter().sorted().collect_vec(), vec![5, 7]);

        assert!(set.remove(&7) && set.remove(&5));
        assert!(set.is_empty());
    }

    #[test]
    fn hash_set_follows_set_convention() {
        let mut set = FxHashSet::default();
        assert!(!Set::insert(&mut set, 1u32));
        assert!(Set::insert(&mut set, 1u32));
        assert!(Set::remove(&mut set, &1));
    }

    #[test]
    fn random_element_is_uniform_enough() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        let mut set: IndexedSet<u32> = (0..4).collect();
        assert!(set.remove(&1));

        let mut hits = [0usize; 4];
        for _ in 0..4000 {
            hits[set.random_element(rng).unwrap() as usize] += 1;
        }

        assert_eq!(hits[1], 0);
        for i in [0, 2, 3] {
            assert!((1100..1600).contains(&hits[i]), "{hits:?}");
        }

        for x in [0, 2, 3] {
            assert!(set.remove(&x));
        }
        assert!(set.random_element(rng).is_none());
    }
}
