use crate::entry::Entry;
use crate::red_black_tree::node::Node;
use crate::red_black_tree::{check, tree, Error, Result};
use std::borrow::Borrow;
use std::fmt::{self, Debug};
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};

/// The order in which `RedBlackMap::traverse` visits the nodes of the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// A node is visited before its left and right subtrees.
    PreOrder,
    /// A node is visited between its left and right subtrees, which yields sorted keys.
    InOrder,
    /// A node is visited after its left and right subtrees.
    PostOrder,
}

/// An ordered map implemented using a left-leaning red black tree.
///
/// A left-leaning red black tree is a binary encoding of a 2-3 tree. Every red link leans left,
/// no path has two red links in a row, and every path from the root to an empty subtree crosses
/// the same number of black links. Insertions and removals repair these invariants on the way
/// back up from the modified node, so every operation runs in worst-case logarithmic time.
///
/// Each node caches the size of its subtree, which allows the map to answer order-statistics
/// queries such as `rank` and `select` in logarithmic time.
///
/// # Examples
///
/// ```
/// use llrb_collections::red_black_tree::{Error, RedBlackMap};
///
/// let mut map = RedBlackMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Ok(&0));
/// assert_eq!(map.ceil(&2), Ok(&3));
/// assert_eq!(map.rank(&3), 1);
/// assert_eq!(map.select(1), Ok(&3));
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Ok(Some((0, 2))));
/// assert_eq!(map.remove(&1), Ok(None));
///
/// map.clear();
/// assert_eq!(map.remove_min(), Err(Error::Underflow));
/// ```
pub struct RedBlackMap<T, U> {
    tree: tree::Tree<T, U>,
}

impl<T, U> RedBlackMap<T, U> {
    /// Constructs a new, empty `RedBlackMap<T, U>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// ```
    pub fn new() -> Self {
        RedBlackMap { tree: None }
    }

    // Runs the integrity checker after a mutation in test builds, or when the
    // `check-invariants` feature is enabled.
    fn assert_invariants(&self)
    where
        T: Ord,
    {
        if cfg!(any(test, feature = "check-invariants")) {
            if let Err(error) = check::check(&self.tree) {
                panic!("{}", error);
            }
        }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, it will return
    /// and replace the old key-value pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some((1, 1)));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<(T, U)>
    where
        T: Ord,
    {
        let ret = tree::insert(&mut self.tree, Node::new(key, value));
        tree::blacken_root(&mut self.tree);
        self.assert_invariants();
        ret.map(Entry::into_pair)
    }

    /// Inserts a key-value pair into the map if `value` is `Some`, and removes the key from the
    /// map if `value` is `None`. Returns the key-value pair that was replaced or removed.
    ///
    /// # Errors
    ///
    /// Returns `Error::Underflow` if `value` is `None` and the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.insert_or_remove(1, Some(1)), Ok(None));
    /// assert_eq!(map.insert_or_remove(1, Some(2)), Ok(Some((1, 1))));
    /// assert_eq!(map.insert_or_remove(1, None), Ok(Some((1, 2))));
    /// assert!(map.is_empty());
    /// ```
    pub fn insert_or_remove(&mut self, key: T, value: Option<U>) -> Result<Option<(T, U)>>
    where
        T: Ord,
    {
        match value {
            Some(value) => Ok(self.insert(key, value)),
            None => self.remove(&key),
        }
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Removing a key that does not exist is a no-op that returns
    /// `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Underflow` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Ok(Some((1, 1))));
    /// assert!(map.remove(&1).is_err());
    /// ```
    pub fn remove<V>(&mut self, key: &V) -> Result<Option<(T, U)>>
    where
        T: Ord + Borrow<V>,
        V: Ord + ?Sized,
    {
        if self.is_empty() {
            return Err(Error::Underflow);
        }
        if !self.contains_key(key) {
            log::trace!("ignoring removal of a key that is not in the map");
            return Ok(None);
        }

        tree::redden_root(&mut self.tree);
        let entry = tree::remove(&mut self.tree, key);
        tree::blacken_root(&mut self.tree);
        self.assert_invariants();
        Ok(Some(entry.into_pair()))
    }

    /// Removes and returns the key-value pair with the minimum key.
    ///
    /// # Errors
    ///
    /// Returns `Error::Underflow` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.remove_min(), Ok((1, 1)));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn remove_min(&mut self) -> Result<(T, U)>
    where
        T: Ord,
    {
        if self.is_empty() {
            return Err(Error::Underflow);
        }

        tree::redden_root(&mut self.tree);
        let node = tree::remove_min(&mut self.tree);
        tree::blacken_root(&mut self.tree);
        self.assert_invariants();
        Ok(node.entry.into_pair())
    }

    /// Removes and returns the key-value pair with the maximum key.
    ///
    /// # Errors
    ///
    /// Returns `Error::Underflow` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.remove_max(), Ok((3, 3)));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn remove_max(&mut self) -> Result<(T, U)>
    where
        T: Ord,
    {
        if self.is_empty() {
            return Err(Error::Underflow);
        }

        tree::redden_root(&mut self.tree);
        let node = tree::remove_max(&mut self.tree);
        tree::blacken_root(&mut self.tree);
        self.assert_invariants();
        Ok(node.entry.into_pair())
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get(&self.tree, key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut<V>(&mut self, key: &V) -> Option<&mut U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::get_mut(&mut self.tree, key).map(|entry| &mut entry.value)
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        tree::size(&self.tree)
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
    }

    /// Returns the greatest key in the map that is less than or equal to a particular key.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert!(map.floor(&0).is_err());
    /// assert_eq!(map.floor(&2), Ok(&1));
    /// ```
    pub fn floor<V>(&self, key: &V) -> Result<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::floor(&self.tree, key)
            .map(|entry| &entry.key)
            .ok_or(Error::NotFound("floor"))
    }

    /// Returns the least key in the map that is greater than or equal to a particular key.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.ceil(&0), Ok(&1));
    /// assert!(map.ceil(&2).is_err());
    /// ```
    pub fn ceil<V>(&self, key: &V) -> Result<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::ceil(&self.tree, key)
            .map(|entry| &entry.key)
            .ok_or(Error::NotFound("ceil"))
    }

    /// Returns the minimum key of the map.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Ok(&1));
    /// ```
    pub fn min(&self) -> Result<&T> {
        tree::min(&self.tree)
            .map(|entry| &entry.key)
            .ok_or(Error::NotFound("min"))
    }

    /// Returns the maximum key of the map.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Ok(&3));
    /// ```
    pub fn max(&self) -> Result<&T> {
        tree::max(&self.tree)
            .map(|entry| &entry.key)
            .ok_or(Error::NotFound("max"))
    }

    /// Returns the key with exactly `rank` smaller keys in the map, so `select(0)` is the minimum
    /// key.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `rank` is not less than the length of the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.select(1), Ok(&3));
    /// assert!(map.select(2).is_err());
    /// ```
    pub fn select(&self, rank: usize) -> Result<&T> {
        tree::select(&self.tree, rank)
            .map(|entry| &entry.key)
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "rank {} is out of bounds for a map of length {}",
                    rank,
                    self.len(),
                ))
            })
    }

    /// Returns the number of keys in the map that are strictly less than a particular key.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.rank(&0), 0);
    /// assert_eq!(map.rank(&3), 1);
    /// assert_eq!(map.rank(&4), 2);
    /// ```
    pub fn rank<V>(&self, key: &V) -> usize
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::rank(&self.tree, key)
    }

    /// Returns the number of keys in the map that are in the inclusive range `[lo, hi]`. Returns
    /// `0` if `lo` is greater than `hi`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// for key in 0..10 {
    ///     map.insert(key * 2, ());
    /// }
    /// assert_eq!(map.range_len(&3, &8), 3);
    /// assert_eq!(map.range_len(&8, &3), 0);
    /// ```
    pub fn range_len<V>(&self, lo: &V, hi: &V) -> usize
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        if lo > hi {
            return 0;
        }
        let ret = self.rank(hi) - self.rank(lo);
        if self.contains_key(hi) {
            ret + 1
        } else {
            ret
        }
    }

    /// Returns the height of the tree, which is the number of links on the longest path from the
    /// root to a node. Returns `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.height(), None);
    /// map.insert(1, 1);
    /// assert_eq!(map.height(), Some(0));
    /// ```
    pub fn height(&self) -> Option<usize> {
        tree::height(&self.tree)
    }

    /// Returns the key-value pairs of the map in the order that a particular traversal of the
    /// underlying tree visits them.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::{RedBlackMap, Traversal};
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(2, 'b');
    /// map.insert(1, 'a');
    /// map.insert(3, 'c');
    ///
    /// assert_eq!(map.traverse(Traversal::PreOrder), vec![(&2, &'b'), (&1, &'a'), (&3, &'c')]);
    /// assert_eq!(map.traverse(Traversal::PostOrder), vec![(&1, &'a'), (&3, &'c'), (&2, &'b')]);
    /// ```
    pub fn traverse(&self, order: Traversal) -> Vec<(&T, &U)> {
        let mut entries = Vec::with_capacity(self.len());
        match order {
            Traversal::PreOrder => tree::pre_order(&self.tree, &mut entries),
            Traversal::InOrder => tree::in_order(&self.tree, &mut entries),
            Traversal::PostOrder => tree::post_order(&self.tree, &mut entries),
        }
        entries
            .into_iter()
            .map(|entry| (&entry.key, &entry.value))
            .collect()
    }

    /// Verifies the structural invariants of the underlying tree: symmetric order, consistent
    /// subtree sizes, consistent ranks, 2-3 correspondence, and black balance.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvariantViolation` with the first invariant that does not hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// for key in 0..100 {
    ///     map.insert(key, key);
    /// }
    /// assert_eq!(map.check(), Ok(()));
    /// ```
    pub fn check(&self) -> Result<()>
    where
        T: Ord,
    {
        check::check(&self.tree)
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackMapIter<'_, T, U> {
        RedBlackMapIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }

    /// Returns a mutable iterator over the map. The iterator will yield key-value pairs using
    /// in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// for (key, value) in &mut map {
    ///     *value += 1;
    /// }
    ///
    /// let mut iterator = map.iter_mut();
    /// assert_eq!(iterator.next(), Some((&1, &mut 2)));
    /// assert_eq!(iterator.next(), Some((&2, &mut 3)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> RedBlackMapIterMut<'_, T, U> {
        RedBlackMapIterMut {
            current: self.tree.as_mut().map(|node| &mut **node),
            stack: Vec::new(),
        }
    }

    /// Returns an iterator over the keys of the map in ascending order. The iterator can be cloned
    /// to restart the traversal from its current position.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(3, 'c');
    /// map.insert(1, 'a');
    /// assert_eq!(map.keys().collect::<Vec<&u32>>(), vec![&1, &3]);
    /// ```
    pub fn keys(&self) -> RedBlackMapKeys<'_, T, U> {
        RedBlackMapKeys { iter: self.iter() }
    }

    /// Returns an iterator over the values of the map in ascending order of their keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(3, 'c');
    /// map.insert(1, 'a');
    /// assert_eq!(map.values().collect::<Vec<&char>>(), vec![&'a', &'c']);
    /// ```
    pub fn values(&self) -> RedBlackMapValues<'_, T, U> {
        RedBlackMapValues { iter: self.iter() }
    }

    /// Returns an iterator over the key-value pairs whose keys are in the inclusive range
    /// `[lo, hi]`. The iterator is lazy and skips every subtree that lies entirely outside of the
    /// range. It yields nothing if `lo` is greater than `hi`.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// for key in 0..10 {
    ///     map.insert(key, key * key);
    /// }
    ///
    /// let mut iterator = map.range(&3, &5);
    /// assert_eq!(iterator.next(), Some((&3, &9)));
    /// assert_eq!(iterator.next(), Some((&4, &16)));
    /// assert_eq!(iterator.next(), Some((&5, &25)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn range<'a, V>(&'a self, lo: &V, hi: &'a V) -> RedBlackMapRange<'a, T, U, V>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut stack = Vec::new();
        let mut curr = &self.tree;
        while let Some(node) = curr {
            if node.entry.key.borrow() < lo {
                curr = &node.right;
            } else {
                stack.push(&**node);
                curr = &node.left;
            }
        }
        RedBlackMapRange { hi, stack }
    }

    /// Returns an iterator over the keys in the inclusive range `[lo, hi]` in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb_collections::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// for key in ["S", "E", "A", "R", "C", "H"].iter() {
    ///     map.insert(*key, ());
    /// }
    /// assert_eq!(map.range_keys("B", "R").cloned().collect::<Vec<&str>>(), vec!["C", "E", "H", "R"]);
    /// ```
    pub fn range_keys<'a, V>(&'a self, lo: &V, hi: &'a V) -> RedBlackMapRangeKeys<'a, T, U, V>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        RedBlackMapRangeKeys {
            range: self.range(lo, hi),
        }
    }
}

impl<T, U> IntoIterator for RedBlackMap<T, U> {
    type IntoIter = RedBlackMapIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T, U> IntoIterator for &'a RedBlackMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = RedBlackMapIter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, U> IntoIterator for &'a mut RedBlackMap<T, U>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = RedBlackMapIterMut<'a, T, U>;
    type Item = (&'a T, &'a mut U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator for `RedBlackMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct RedBlackMapIntoIter<T, U> {
    current: tree::Tree<T, U>,
    stack: Vec<Node<T, U>>,
}

impl<T, U> Iterator for RedBlackMapIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { entry, right, .. } = node;
            self.current = right;
            entry.into_pair()
        })
    }
}

/// An iterator for `RedBlackMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields immutable references.
pub struct RedBlackMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    current: &'a tree::Tree<T, U>,
    stack: Vec<&'a Node<T, U>>,
}

impl<'a, T, U> Clone for RedBlackMapIter<'a, T, U> {
    fn clone(&self) -> Self {
        RedBlackMapIter {
            current: self.current,
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T, U> Iterator for RedBlackMapIter<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node {
                entry: Entry { ref key, ref value },
                ref right,
                ..
            } = node;
            self.current = right;
            (key, value)
        })
    }
}

type BorrowedIterEntryMut<'a, T, U> = Option<(&'a mut Entry<T, U>, BorrowedTreeMut<'a, T, U>)>;
type BorrowedTreeMut<'a, T, U> = Option<&'a mut Node<T, U>>;

/// A mutable iterator for `RedBlackMap<T, U>`.
///
/// This iterator traverses the elements of the map in-order and yields mutable references.
pub struct RedBlackMapIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    current: Option<&'a mut Node<T, U>>,
    stack: Vec<BorrowedIterEntryMut<'a, T, U>>,
}

impl<'a, T, U> Iterator for RedBlackMapIterMut<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = (&'a T, &'a mut U);

    fn next(&mut self) -> Option<Self::Item> {
        let RedBlackMapIterMut {
            ref mut current,
            ref mut stack,
        } = self;
        while current.is_some() {
            stack.push(current.take().map(|node| {
                *current = node.left.as_mut().map(|node| &mut **node);
                (&mut node.entry, node.right.as_mut().map(|node| &mut **node))
            }));
        }
        stack.pop().and_then(|pair_opt| {
            pair_opt.map(|(entry, right)| {
                let Entry {
                    ref key,
                    ref mut value,
                } = entry;
                *current = right;
                (key, value)
            })
        })
    }
}

/// An iterator over the keys of a `RedBlackMap<T, U>` in ascending order.
pub struct RedBlackMapKeys<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    iter: RedBlackMapIter<'a, T, U>,
}

impl<'a, T, U> Clone for RedBlackMapKeys<'a, T, U> {
    fn clone(&self) -> Self {
        RedBlackMapKeys {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, T, U> Iterator for RedBlackMapKeys<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|pair| pair.0)
    }
}

/// An iterator over the values of a `RedBlackMap<T, U>` in ascending order of their keys.
pub struct RedBlackMapValues<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    iter: RedBlackMapIter<'a, T, U>,
}

impl<'a, T, U> Clone for RedBlackMapValues<'a, T, U> {
    fn clone(&self) -> Self {
        RedBlackMapValues {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, T, U> Iterator for RedBlackMapValues<'a, T, U>
where
    T: 'a,
    U: 'a,
{
    type Item = &'a U;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|pair| pair.1)
    }
}

/// An iterator over a range of a `RedBlackMap<T, U>`.
///
/// The stack holds the nodes whose keys are at least the lower bound and whose left subtrees have
/// already been visited, with the smallest key on top.
pub struct RedBlackMapRange<'a, T, U, V>
where
    T: 'a,
    U: 'a,
    V: 'a + ?Sized,
{
    hi: &'a V,
    stack: Vec<&'a Node<T, U>>,
}

impl<'a, T, U, V> Clone for RedBlackMapRange<'a, T, U, V>
where
    V: ?Sized,
{
    fn clone(&self) -> Self {
        RedBlackMapRange {
            hi: self.hi,
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T, U, V> Iterator for RedBlackMapRange<'a, T, U, V>
where
    T: 'a + Borrow<V>,
    U: 'a,
    V: 'a + Ord + ?Sized,
{
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if node.entry.key.borrow() > self.hi {
            self.stack.clear();
            return None;
        }

        let mut curr = &node.right;
        while let Some(child) = curr {
            self.stack.push(child);
            curr = &child.left;
        }
        Some((&node.entry.key, &node.entry.value))
    }
}

/// An iterator over the keys in a range of a `RedBlackMap<T, U>`.
pub struct RedBlackMapRangeKeys<'a, T, U, V>
where
    T: 'a,
    U: 'a,
    V: 'a + ?Sized,
{
    range: RedBlackMapRange<'a, T, U, V>,
}

impl<'a, T, U, V> Clone for RedBlackMapRangeKeys<'a, T, U, V>
where
    V: ?Sized,
{
    fn clone(&self) -> Self {
        RedBlackMapRangeKeys {
            range: self.range.clone(),
        }
    }
}

impl<'a, T, U, V> Iterator for RedBlackMapRangeKeys<'a, T, U, V>
where
    T: 'a + Borrow<V>,
    U: 'a,
    V: 'a + Ord + ?Sized,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(|pair| pair.0)
    }
}

impl<T, U> Default for RedBlackMap<T, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U> Debug for RedBlackMap<T, U>
where
    T: Debug,
    U: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T, U> FromIterator<(T, U)> for RedBlackMap<T, U>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
    {
        let mut map = RedBlackMap::new();
        map.extend(iter);
        map
    }
}

impl<T, U> Extend<(T, U)> for RedBlackMap<T, U>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (T, U)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, T, U, V> Index<&'a V> for RedBlackMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    type Output = U;

    fn index(&self, key: &V) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, T, U, V> IndexMut<&'a V> for RedBlackMap<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    fn index_mut(&mut self, key: &V) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}

#[cfg(test)]
mod tests {
    use super::{RedBlackMap, Traversal};
    use crate::red_black_tree::Error;

    fn letters() -> RedBlackMap<&'static str, u32> {
        let mut map = RedBlackMap::new();
        for (index, key) in ["S", "E", "A", "R", "C", "H"].iter().enumerate() {
            map.insert(*key, index as u32 + 1);
        }
        map
    }

    fn numbers() -> RedBlackMap<u32, ()> {
        [50, 25, 60, 20, 35, 90, 30, 75, 70]
            .iter()
            .map(|key| (*key, ()))
            .collect()
    }

    #[test]
    fn test_len_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert!(map.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert_eq!(map.min(), Err(Error::NotFound("min")));
        assert_eq!(map.max(), Err(Error::NotFound("max")));
    }

    #[test]
    fn test_insert() {
        let mut map = RedBlackMap::new();
        assert_eq!(map.insert(1, 1), None);
        assert!(map.contains_key(&1));
        assert_eq!(map.get(&1), Some(&1));
    }

    #[test]
    fn test_insert_replace() {
        let mut map = RedBlackMap::new();
        assert_eq!(map.insert("X", 1), None);
        assert_eq!(map.insert("X", 2), Some(("X", 1)));
        assert_eq!(map.get("X"), Some(&2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_insert_or_remove() {
        let mut map = RedBlackMap::new();
        assert_eq!(map.insert_or_remove(1, None), Err(Error::Underflow));
        assert_eq!(map.insert_or_remove(1, Some(1)), Ok(None));
        assert_eq!(map.insert_or_remove(2, None), Ok(None));
        assert_eq!(map.insert_or_remove(1, None), Ok(Some((1, 1))));
        assert!(map.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        assert_eq!(map.remove(&1), Ok(Some((1, 1))));
        assert!(!map.contains_key(&1));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut map = numbers();
        assert_eq!(map.remove(&55), Ok(None));
        assert_eq!(map.len(), 9);
    }

    #[test]
    fn test_remove_empty() {
        let mut map: RedBlackMap<u32, u32> = RedBlackMap::new();
        assert_eq!(map.remove(&1), Err(Error::Underflow));
        assert_eq!(map.remove_min(), Err(Error::Underflow));
        assert_eq!(map.remove_max(), Err(Error::Underflow));
    }

    #[test]
    fn test_remove_every_key() {
        let mut map: RedBlackMap<u32, u32> = (0..100).map(|key| (key, key)).collect();
        for key in (0..100).filter(|key| key % 2 == 0) {
            assert_eq!(map.remove(&key), Ok(Some((key, key))));
        }
        for key in (0..100).filter(|key| key % 2 == 1).rev() {
            assert_eq!(map.remove(&key), Ok(Some((key, key))));
        }
        assert!(map.is_empty());
    }

    #[test]
    fn test_remove_min_drains() {
        let mut map = numbers();
        let mut keys = Vec::new();
        while let Ok((key, _)) = map.remove_min() {
            keys.push(key);
        }
        assert_eq!(keys, vec![20, 25, 30, 35, 50, 60, 70, 75, 90]);
        assert!(map.is_empty());
        assert_eq!(map.remove_min(), Err(Error::Underflow));
    }

    #[test]
    fn test_remove_max_drains() {
        let mut map = numbers();
        let mut keys = Vec::new();
        while let Ok((key, _)) = map.remove_max() {
            keys.push(key);
        }
        assert_eq!(keys, vec![90, 75, 70, 60, 50, 35, 30, 25, 20]);
        assert!(map.is_empty());
    }

    #[test]
    fn test_min_max() {
        let map = numbers();
        assert_eq!(map.min(), Ok(&20));
        assert_eq!(map.max(), Ok(&90));
    }

    #[test]
    fn test_get_mut() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        {
            let value = map.get_mut(&1);
            *value.unwrap() = 3;
        }
        assert_eq!(map.get(&1), Some(&3));
    }

    #[test]
    fn test_index() {
        let mut map = letters();
        map["H"] += 10;
        assert_eq!(map["H"], 16);
    }

    #[test]
    #[should_panic]
    fn test_index_missing_key() {
        let map = letters();
        let _value = &map["Z"];
    }

    #[test]
    fn test_floor_ceil() {
        let mut map = RedBlackMap::new();
        map.insert(1, 1);
        map.insert(3, 3);
        map.insert(5, 5);

        assert_eq!(map.floor(&0), Err(Error::NotFound("floor")));
        assert_eq!(map.floor(&2), Ok(&1));
        assert_eq!(map.floor(&4), Ok(&3));
        assert_eq!(map.floor(&6), Ok(&5));

        assert_eq!(map.ceil(&0), Ok(&1));
        assert_eq!(map.ceil(&2), Ok(&3));
        assert_eq!(map.ceil(&4), Ok(&5));
        assert_eq!(map.ceil(&6), Err(Error::NotFound("ceil")));
    }

    #[test]
    fn test_letters() {
        let map = letters();
        assert_eq!(
            map.keys().cloned().collect::<Vec<&str>>(),
            vec!["A", "C", "E", "H", "R", "S"],
        );
        assert_eq!(map.rank("H"), 2);
        assert_eq!(map.select(2), Ok(&"H"));
        assert_eq!(map.floor("F"), Ok(&"E"));
        assert_eq!(map.ceil("F"), Ok(&"H"));
    }

    #[test]
    fn test_select_rank() {
        let map = numbers();
        for index in 0..map.len() {
            let key = map.select(index).unwrap();
            assert_eq!(map.rank(key), index);
        }
        assert_eq!(map.rank(&0), 0);
        assert_eq!(map.rank(&100), map.len());
    }

    #[test]
    fn test_select_out_of_bounds() {
        let map = numbers();
        assert_eq!(
            map.select(9),
            Err(Error::InvalidArgument(String::from(
                "rank 9 is out of bounds for a map of length 9"
            ))),
        );
    }

    #[test]
    fn test_range_len() {
        let map = numbers();
        assert_eq!(map.range_len(&25, &70), 6);
        assert_eq!(map.range_len(&21, &69), 5);
        assert_eq!(map.range_len(&0, &100), 9);
        assert_eq!(map.range_len(&70, &25), 0);
        assert_eq!(map.range_len(&91, &100), 0);
    }

    #[test]
    fn test_range() {
        let map = numbers();
        assert_eq!(
            map.range_keys(&25, &70).cloned().collect::<Vec<u32>>(),
            vec![25, 30, 35, 50, 60, 70],
        );
        assert_eq!(
            map.range_keys(&26, &74).cloned().collect::<Vec<u32>>(),
            vec![30, 35, 50, 60, 70],
        );
        assert_eq!(map.range_keys(&70, &25).count(), 0);
        assert_eq!(map.range_keys(&91, &100).count(), 0);
        assert_eq!(map.range(&0, &100).count(), 9);
    }

    #[test]
    fn test_range_restartable() {
        let map = numbers();
        let mut range = map.range_keys(&25, &70);
        range.next();
        let restarted = range.clone();
        assert_eq!(range.collect::<Vec<&u32>>(), restarted.collect::<Vec<&u32>>());
    }

    #[test]
    fn test_height() {
        let map: RedBlackMap<u32, u32> = (0..1024).map(|key| (key, key)).collect();
        assert!(map.height().unwrap() <= 20);
    }

    #[test]
    fn test_traverse() {
        let mut map = RedBlackMap::new();
        map.insert(2, 'b');
        map.insert(1, 'a');
        map.insert(3, 'c');
        assert_eq!(
            map.traverse(Traversal::InOrder),
            map.iter().collect::<Vec<(&u32, &char)>>(),
        );
        assert_eq!(
            map.traverse(Traversal::PreOrder),
            vec![(&2, &'b'), (&1, &'a'), (&3, &'c')],
        );
        assert_eq!(
            map.traverse(Traversal::PostOrder),
            vec![(&1, &'a'), (&3, &'c'), (&2, &'b')],
        );
    }

    #[test]
    fn test_check() {
        assert_eq!(letters().check(), Ok(()));
        assert_eq!(numbers().check(), Ok(()));
    }

    #[test]
    fn test_debug() {
        let map: RedBlackMap<u32, u32> = vec![(2, 4), (1, 2)].into_iter().collect();
        assert_eq!(format!("{:?}", map), "{1: 2, 2: 4}");
    }

    #[test]
    fn test_into_iter() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.into_iter().collect::<Vec<(u32, u32)>>(),
            vec![(1, 2), (3, 4), (5, 6)],
        );
    }

    #[test]
    fn test_iter() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &2), (&3, &4), (&5, &6)],
        );
        assert_eq!(map.values().collect::<Vec<&u32>>(), vec![&2, &4, &6]);
    }

    #[test]
    fn test_iter_mut() {
        let mut map = RedBlackMap::new();
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        for (_, value) in &mut map {
            *value += 1;
        }

        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            vec![(&1, &3), (&3, &5), (&5, &7)],
        );
    }
}
