use crate::red_black_tree::map::{
    RedBlackMap, RedBlackMapIntoIter, RedBlackMapIter, RedBlackMapRange,
};
use crate::red_black_tree::Result;
use std::borrow::Borrow;
use std::fmt::{self, Debug};
use std::iter::FromIterator;

/// An ordered set implemented using a left-leaning red black tree.
///
/// The set shares the balancing and order-statistics machinery of `RedBlackMap`, so every
/// operation runs in worst-case logarithmic time.
///
/// # Examples
///
/// ```
/// use llrb_collections::red_black_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Ok(&0));
/// assert_eq!(set.ceil(&2), Ok(&3));
/// assert_eq!(set.rank(&3), 1);
///
/// assert_eq!(set.remove(&0), Ok(Some(0)));
/// assert_eq!(set.remove(&1), Ok(None));
/// ```
pub struct RedBlackSet<T> {
    map: RedBlackMap<T, ()>,
}

impl<T> RedBlackSet<T> {
    /// Constructs a new, empty `RedBlackSet<T>`
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        RedBlackSet {
            map: RedBlackMap::new(),
        }
    }

    /// Inserts a key into the set. If the key already exists in the set, it will return and
    /// replace the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert_eq!(set.insert(1), None);
    /// assert!(set.contains(&1));
    /// assert_eq!(set.insert(1), Some(1));
    /// ```
    pub fn insert(&mut self, key: T) -> Option<T>
    where
        T: Ord,
    {
        self.map.insert(key, ()).map(|pair| pair.0)
    }

    /// Removes a key from the set. If the key exists in the set, it will return the associated
    /// key. Removing a key that does not exist is a no-op that returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Underflow` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.remove(&1), Ok(Some(1)));
    /// assert_eq!(set.remove(&1), Ok(None));
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Result<Option<T>>
    where
        T: Ord + Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.remove(key).map(|pair| pair.map(|pair| pair.0))
    }

    /// Removes and returns the minimum key of the set.
    ///
    /// # Errors
    ///
    /// Returns `Error::Underflow` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.remove_min(), Ok(1));
    /// ```
    pub fn remove_min(&mut self) -> Result<T>
    where
        T: Ord,
    {
        self.map.remove_min().map(|pair| pair.0)
    }

    /// Removes and returns the maximum key of the set.
    ///
    /// # Errors
    ///
    /// Returns `Error::Underflow` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.remove_max(), Ok(3));
    /// ```
    pub fn remove_max(&mut self) -> Result<T>
    where
        T: Ord,
    {
        self.map.remove_max().map(|pair| pair.0)
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the greatest key in the set that is less than or equal to a particular key.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(set.floor(&0).is_err());
    /// assert_eq!(set.floor(&2), Ok(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Result<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.floor(key)
    }

    /// Returns the least key in the set that is greater than or equal to a particular key.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Ok(&1));
    /// assert!(set.ceil(&2).is_err());
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Result<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.ceil(key)
    }

    /// Returns the minimum key of the set.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Ok(&1));
    /// ```
    pub fn min(&self) -> Result<&T> {
        self.map.min()
    }

    /// Returns the maximum key of the set.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Ok(&3));
    /// ```
    pub fn max(&self) -> Result<&T> {
        self.map.max()
    }

    /// Returns the key with exactly `rank` smaller keys in the set.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `rank` is not less than the length of the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.select(0), Ok(&1));
    /// assert!(set.select(2).is_err());
    /// ```
    pub fn select(&self, rank: usize) -> Result<&T> {
        self.map.select(rank)
    }

    /// Returns the number of keys in the set that are strictly less than a particular key.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.rank(&2), 1);
    /// ```
    pub fn rank<V>(&self, key: &V) -> usize
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.rank(key)
    }

    /// Returns the number of keys in the set that are in the inclusive range `[lo, hi]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = (0..10).collect();
    /// assert_eq!(set.range_len(&2, &4), 3);
    /// ```
    pub fn range_len<V>(&self, lo: &V, hi: &V) -> usize
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.map.range_len(lo, hi)
    }

    /// Verifies the structural invariants of the underlying tree.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvariantViolation` with the first invariant that does not hold.
    pub fn check(&self) -> Result<()>
    where
        T: Ord,
    {
        self.map.check()
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackSetIter<'_, T> {
        RedBlackSetIter {
            map_iter: self.map.iter(),
        }
    }

    /// Returns an iterator over the keys of the set in the inclusive range `[lo, hi]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = (0..10).collect();
    /// assert_eq!(set.range(&2, &4).collect::<Vec<&u32>>(), vec![&2, &3, &4]);
    /// ```
    pub fn range<'a, V>(&'a self, lo: &V, hi: &'a V) -> RedBlackSetRange<'a, T, V>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        RedBlackSetRange {
            map_range: self.map.range(lo, hi),
        }
    }
}

impl<T> IntoIterator for RedBlackSet<T> {
    type IntoIter = RedBlackSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            map_iter: self.map.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a RedBlackSet<T>
where
    T: 'a,
{
    type IntoIter = RedBlackSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct RedBlackSetIntoIter<T> {
    map_iter: RedBlackMapIntoIter<T, ()>,
}

impl<T> Iterator for RedBlackSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }
}

/// An iterator for `RedBlackSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct RedBlackSetIter<'a, T>
where
    T: 'a,
{
    map_iter: RedBlackMapIter<'a, T, ()>,
}

impl<'a, T> Clone for RedBlackSetIter<'a, T> {
    fn clone(&self) -> Self {
        RedBlackSetIter {
            map_iter: self.map_iter.clone(),
        }
    }
}

impl<'a, T> Iterator for RedBlackSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }
}

/// An iterator over a range of a `RedBlackSet<T>`.
pub struct RedBlackSetRange<'a, T, V>
where
    T: 'a,
    V: 'a + ?Sized,
{
    map_range: RedBlackMapRange<'a, T, (), V>,
}

impl<'a, T, V> Clone for RedBlackSetRange<'a, T, V>
where
    V: ?Sized,
{
    fn clone(&self) -> Self {
        RedBlackSetRange {
            map_range: self.map_range.clone(),
        }
    }
}

impl<'a, T, V> Iterator for RedBlackSetRange<'a, T, V>
where
    T: 'a + Borrow<V>,
    V: 'a + Ord + ?Sized,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_range.next().map(|pair| pair.0)
    }
}

impl<T> Default for RedBlackSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for RedBlackSet<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = RedBlackSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.map.extend(iter.into_iter().map(|key| (key, ())));
    }
}
