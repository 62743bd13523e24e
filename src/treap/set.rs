use crate::error::{Result, TreapError};
use crate::treap::node::Node;
use crate::treap::tree;
use log::{debug, trace};
use rand::{Rng, SeedableRng, XorShiftRng};
use std::fmt;
use std::iter::FromIterator;
use std::ops::Add;

/// An ordered set implemented by a treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property. Each
/// node has a key and a priority. The key of any node is greater than all keys in its left subtree
/// and less than all keys occuring in its right subtree. The priority of a node is greater than or
/// equal to the priority of all nodes in its subtrees. By randomly generating priorities, the
/// expected height of the tree is proportional to the logarithm of the number of keys.
///
/// Keys are unique. Inserting a key that already exists is rejected with
/// `TreapError::DuplicateKey` and leaves the treap unchanged.
///
/// # Examples
///
/// ```
/// use treap::TreapSet;
///
/// let mut t = TreapSet::new();
/// t.insert(0).unwrap();
/// t.insert(3).unwrap();
///
/// assert_eq!(t.len(), 2);
/// assert_eq!(t.min(), Some(&0));
///
/// assert_eq!(t.erase(&0), Ok(0));
/// assert!(t.erase(&1).is_err());
/// ```
pub struct TreapSet<T> {
    tree: tree::Tree<T>,
    rng: XorShiftRng,
}

impl<T: Ord> TreapSet<T> {
    /// Constructs a new, empty `TreapSet<T>` whose priorities are drawn from a generator seeded
    /// with OS entropy.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap::TreapSet;
    ///
    /// let t: TreapSet<u32> = TreapSet::new();
    /// ```
    pub fn new() -> Self {
        TreapSet {
            tree: None,
            rng: rand::weak_rng(),
        }
    }

    /// Constructs a new, empty `TreapSet<T>` whose priorities are drawn from a generator with a
    /// fixed seed. Two treaps built from the same seed and the same operations have the same shape.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is all zeros.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap::TreapSet;
    ///
    /// let t: TreapSet<u32> = TreapSet::from_seed([1, 2, 3, 4]);
    /// ```
    pub fn from_seed(seed: [u32; 4]) -> Self {
        TreapSet {
            tree: None,
            rng: SeedableRng::from_seed(seed),
        }
    }

    /// Inserts a key into the treap with a randomly generated priority. Returns
    /// `TreapError::DuplicateKey` if the key already exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap::{TreapError, TreapSet};
    ///
    /// let mut t = TreapSet::new();
    /// assert_eq!(t.insert(1), Ok(()));
    /// assert_eq!(t.insert(1), Err(TreapError::DuplicateKey));
    /// assert!(t.contains(&1));
    /// ```
    pub fn insert(&mut self, key: T) -> Result<()> {
        let priority = self.rng.next_u64();
        self.insert_with_priority(key, priority)
    }

    /// Inserts a key into the treap with a particular priority. Returns
    /// `TreapError::DuplicateKey` if the key already exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// t.insert_with_priority(1, 100).unwrap();
    /// t.insert_with_priority(2, 200).unwrap();
    /// t.insert_with_priority(3, 700).unwrap();
    /// assert_eq!(t.root(), Some(&3));
    /// ```
    pub fn insert_with_priority(&mut self, key: T, priority: u64) -> Result<()> {
        let ret = tree::insert(&mut self.tree, Box::new(Node::new(key, priority)));
        match ret {
            Ok(()) => trace!("inserted key with priority {}", priority),
            Err(ref err) => debug!("rejected insert: {}", err),
        }
        ret
    }

    /// Removes a key from the treap and returns it. Returns `TreapError::KeyNotFound` and leaves
    /// the treap unchanged if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap::{TreapError, TreapSet};
    ///
    /// let mut t = TreapSet::new();
    /// t.insert(1).unwrap();
    /// assert_eq!(t.erase(&1), Ok(1));
    /// assert_eq!(t.erase(&1), Err(TreapError::KeyNotFound));
    /// ```
    pub fn erase(&mut self, key: &T) -> Result<T> {
        let ret = tree::erase(&mut self.tree, key);
        if let Err(ref err) = ret {
            debug!("rejected erase: {}", err);
        }
        ret
    }

    /// Checks if a key exists in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// t.insert(1).unwrap();
    /// assert!(!t.contains(&0));
    /// assert!(t.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        tree::contains(&self.tree, key)
    }

    /// Returns an immutable reference to the stored key that is equal to a particular key.
    /// Returns `None` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// t.insert(1).unwrap();
    /// assert_eq!(t.get(&1), Some(&1));
    /// assert_eq!(t.get(&2), None);
    /// ```
    pub fn get(&self, key: &T) -> Option<&T> {
        tree::get(&self.tree, key)
    }

    /// Returns an immutable reference to the stored key that is equal to a particular key.
    /// Returns `TreapError::KeyNotFound` if the key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap::{TreapError, TreapSet};
    ///
    /// let mut t = TreapSet::new();
    /// t.insert(1).unwrap();
    /// assert_eq!(t.find(&1), Ok(&1));
    /// assert_eq!(t.find(&2), Err(TreapError::KeyNotFound));
    /// ```
    pub fn find(&self, key: &T) -> Result<&T> {
        self.get(key).ok_or(TreapError::KeyNotFound)
    }

    /// Returns the priority of the node holding a particular key. Returns `None` if the key does
    /// not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// t.insert_with_priority(1, 100).unwrap();
    /// assert_eq!(t.priority_of(&1), Some(100));
    /// assert_eq!(t.priority_of(&2), None);
    /// ```
    pub fn priority_of(&self, key: &T) -> Option<u64> {
        tree::get_node(&self.tree, key).map(|node| node.priority)
    }

    /// Splits the treap into the keys strictly less than `key` and the keys greater than or
    /// equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// t.insert(1).unwrap();
    /// t.insert(2).unwrap();
    /// t.insert(3).unwrap();
    ///
    /// let (left, right) = t.split(&2);
    /// assert_eq!(left.iter().collect::<Vec<&u32>>(), vec![&1]);
    /// assert_eq!(right.iter().collect::<Vec<&u32>>(), vec![&2, &3]);
    /// ```
    pub fn split(self, key: &T) -> (Self, Self) {
        let TreapSet { tree: root, mut rng } = self;
        let right_rng = rng.gen::<XorShiftRng>();
        let (left, right) = tree::split(root, key);
        trace!("split into {} and {} keys", tree::len(&left), tree::len(&right));
        (
            TreapSet { tree: left, rng },
            TreapSet { tree: right, rng: right_rng },
        )
    }

    /// Merges two treaps where every key in `left` is less than every key in `right`. The merged
    /// treap keeps the priority generator of `left`.
    ///
    /// The ordering of the two treaps is not checked in release builds. Merging treaps that
    /// overlap breaks the ordering of the result; use `union` instead.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the maximum key of `left` is not less than the minimum key of
    /// `right`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap::TreapSet;
    ///
    /// let mut n = TreapSet::new();
    /// n.insert(1).unwrap();
    /// n.insert(2).unwrap();
    ///
    /// let mut m = TreapSet::new();
    /// m.insert(3).unwrap();
    ///
    /// let merged = TreapSet::merge(n, m);
    /// assert_eq!(merged.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
    /// ```
    pub fn merge(left: Self, right: Self) -> Self {
        debug_assert!(
            match (left.max(), right.min()) {
                (Some(left_max), Some(right_min)) => left_max < right_min,
                _ => true,
            },
            "merged treaps are not ordered",
        );
        let TreapSet { tree: mut root, rng } = left;
        tree::merge(&mut root, right.tree);
        TreapSet { tree: root, rng }
    }

    /// Returns the union of two treaps with arbitrary keys. If both treaps contain a key, the key
    /// stored in `left` is kept. The `+` operator is implemented to take the union of two treaps.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap::TreapSet;
    ///
    /// let mut n = TreapSet::new();
    /// n.insert(1).unwrap();
    /// n.insert(2).unwrap();
    ///
    /// let mut m = TreapSet::new();
    /// m.insert(2).unwrap();
    /// m.insert(3).unwrap();
    ///
    /// let union = TreapSet::union(n, m);
    /// assert_eq!(union.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
    /// ```
    pub fn union(left: Self, right: Self) -> Self {
        let TreapSet { tree: left_tree, rng } = left;
        let (root, dups) = tree::union(left_tree, right.tree, false);
        debug!("discarded {} duplicate keys while uniting", dups);
        TreapSet { tree: root, rng }
    }

    /// Returns the number of keys in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// t.insert(1).unwrap();
    /// assert_eq!(t.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        tree::len(&self.tree)
    }

    /// Returns `true` if the treap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap::TreapSet;
    ///
    /// let t: TreapSet<u32> = TreapSet::new();
    /// assert!(t.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Clears the treap, removing all keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// t.insert(1).unwrap();
    /// t.insert(2).unwrap();
    /// t.clear();
    /// assert!(t.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
    }

    /// Returns the minimum key of the treap. Returns `None` if the treap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// t.insert(1).unwrap();
    /// t.insert(3).unwrap();
    /// assert_eq!(t.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum key of the treap. Returns `None` if the treap is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// t.insert(1).unwrap();
    /// t.insert(3).unwrap();
    /// assert_eq!(t.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns the key at a particular position in ascending order. Returns `None` if the index
    /// is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// t.insert(5).unwrap();
    /// t.insert(1).unwrap();
    /// assert_eq!(t.nth(0), Some(&1));
    /// assert_eq!(t.nth(1), Some(&5));
    /// assert_eq!(t.nth(2), None);
    /// ```
    pub fn nth(&self, index: usize) -> Option<&T> {
        tree::nth(&self.tree, index)
    }

    /// Returns the number of keys in the treap that are strictly less than a particular key.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// t.insert(1).unwrap();
    /// t.insert(5).unwrap();
    /// assert_eq!(t.rank(&1), 0);
    /// assert_eq!(t.rank(&3), 1);
    /// assert_eq!(t.rank(&9), 2);
    /// ```
    pub fn rank(&self, key: &T) -> usize {
        tree::rank(&self.tree, key)
    }

    /// Returns the key at the root of the treap, which is the key with the highest priority.
    /// Returns `None` if the treap is empty.
    pub fn root(&self) -> Option<&T> {
        self.tree.as_ref().map(|node| &node.key)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Returns `true` if every node satisfies the binary search tree property and the heap
    /// property. Runs in `O(N)` time.
    pub fn is_valid(&self) -> bool {
        tree::is_valid(&self.tree)
    }

    /// Returns an iterator over the treap. The iterator will yield keys in ascending order, or in
    /// descending order when reversed.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap::TreapSet;
    ///
    /// let mut t = TreapSet::new();
    /// t.insert(1).unwrap();
    /// t.insert(3).unwrap();
    /// t.insert(2).unwrap();
    ///
    /// assert_eq!(t.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
    /// assert_eq!(t.iter().rev().collect::<Vec<&u32>>(), vec![&3, &2, &1]);
    /// ```
    pub fn iter(&self) -> TreapSetIter<'_, T> {
        TreapSetIter {
            front: &self.tree,
            front_stack: Vec::new(),
            back: &self.tree,
            back_stack: Vec::new(),
            remaining: self.len(),
        }
    }
}

impl<T: Ord> IntoIterator for TreapSet<T> {
    type Item = T;
    type IntoIter = TreapSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let remaining = self.len();
        TreapSetIntoIter {
            current: self.tree,
            stack: Vec::new(),
            remaining,
        }
    }
}

impl<'a, T: 'a + Ord> IntoIterator for &'a TreapSet<T> {
    type Item = &'a T;
    type IntoIter = TreapSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `TreapSet<T>`.
///
/// This iterator traverses the keys of a treap in-order and yields owned keys.
pub struct TreapSetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
    remaining: usize,
}

impl<T> Iterator for TreapSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            self.remaining -= 1;
            key
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for TreapSetIntoIter<T> {}

/// An iterator for `TreapSet<T>`.
///
/// This iterator traverses the keys of a treap in-order and yields immutable references. The
/// front and back of the iterator walk the tree independently and stop once they meet.
pub struct TreapSetIter<'a, T: 'a> {
    front: &'a tree::Tree<T>,
    front_stack: Vec<&'a Node<T>>,
    back: &'a tree::Tree<T>,
    back_stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T: 'a> Iterator for TreapSetIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        while let Some(ref node) = *self.front {
            self.front = &node.left;
            self.front_stack.push(node);
        }
        self.front_stack.pop().map(|node| {
            self.front = &node.right;
            self.remaining -= 1;
            &node.key
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a> DoubleEndedIterator for TreapSetIter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        while let Some(ref node) = *self.back {
            self.back = &node.right;
            self.back_stack.push(node);
        }
        self.back_stack.pop().map(|node| {
            self.back = &node.left;
            self.remaining -= 1;
            &node.key
        })
    }
}

impl<'a, T: 'a> ExactSizeIterator for TreapSetIter<'a, T> {}

impl<T: Ord> Default for TreapSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Add for TreapSet<T> {
    type Output = TreapSet<T>;

    fn add(self, other: TreapSet<T>) -> TreapSet<T> {
        Self::union(self, other)
    }
}

impl<T: Ord> Extend<T> for TreapSet<T> {
    /// Inserts every key of the iterator. Keys that already exist are skipped.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            if self.insert(key).is_err() {
                trace!("skipped duplicate key while extending");
            }
        }
    }
}

impl<T: Ord> FromIterator<T> for TreapSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = TreapSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for TreapSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::TreapSet;
    use crate::error::TreapError;

    #[test]
    fn test_len_empty() {
        let tree: TreapSet<u32> = TreapSet::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let tree: TreapSet<u32> = TreapSet::new();
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
        assert_eq!(tree.root(), None);
    }

    #[test]
    fn test_insert() {
        let mut tree = TreapSet::new();
        assert_eq!(tree.insert(1), Ok(()));
        assert!(tree.contains(&1));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_insert_duplicate() {
        let mut tree = TreapSet::new();
        assert_eq!(tree.insert(1), Ok(()));
        assert_eq!(tree.insert(1), Err(TreapError::DuplicateKey));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_insert_with_priority() {
        let mut tree = TreapSet::new();
        tree.insert_with_priority(1, 100).unwrap();
        tree.insert_with_priority(2, 200).unwrap();
        tree.insert_with_priority(3, 700).unwrap();
        assert_eq!(tree.root(), Some(&3));
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);

        assert_eq!(tree.insert_with_priority(1, 300), Err(TreapError::DuplicateKey));
        assert_eq!(tree.insert_with_priority(2, 300), Err(TreapError::DuplicateKey));
        assert_eq!(tree.insert_with_priority(3, 150), Err(TreapError::DuplicateKey));
        assert_eq!(tree.priority_of(&1), Some(100));
        assert_eq!(tree.priority_of(&3), Some(700));
        assert!(tree.is_valid());

        assert_eq!(tree.erase(&2), Ok(2));
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &3]);
        assert_eq!(tree.root(), Some(&3));
        assert!(tree.is_valid());
    }

    #[test]
    fn test_erase() {
        let mut tree = TreapSet::new();
        tree.insert(1).unwrap();
        assert_eq!(tree.erase(&1), Ok(1));
        assert!(!tree.contains(&1));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_erase_missing() {
        let mut tree = TreapSet::new();
        tree.insert(1).unwrap();
        tree.insert(3).unwrap();
        assert_eq!(tree.erase(&2), Err(TreapError::KeyNotFound));
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &3]);
        assert!(tree.is_valid());
    }

    #[test]
    fn test_find() {
        let mut tree = TreapSet::new();
        tree.insert(1).unwrap();
        assert_eq!(tree.find(&1), Ok(&1));
        assert_eq!(tree.find(&2), Err(TreapError::KeyNotFound));
    }

    #[test]
    fn test_min_max() {
        let mut tree = TreapSet::new();
        tree.insert(1).unwrap();
        tree.insert(3).unwrap();
        tree.insert(5).unwrap();

        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&5));
    }

    #[test]
    fn test_split() {
        let mut tree = TreapSet::from_seed([1, 1, 1, 1]);
        tree.insert(1).unwrap();
        tree.insert(2).unwrap();
        tree.insert(3).unwrap();

        let (left, right) = tree.split(&2);
        assert_eq!(left.iter().collect::<Vec<&u32>>(), vec![&1]);
        assert_eq!(right.iter().collect::<Vec<&u32>>(), vec![&2, &3]);
        assert!(left.is_valid());
        assert!(right.is_valid());
    }

    #[test]
    fn test_split_then_insert() {
        let tree: TreapSet<u32> = (0..10).collect();
        let (mut left, mut right) = tree.split(&5);
        left.insert(20).unwrap();
        right.insert(5).unwrap_err();
        assert_eq!(left.len(), 6);
        assert_eq!(right.len(), 5);
    }

    #[test]
    fn test_merge() {
        let left: TreapSet<u32> = (0..5).collect();
        let right: TreapSet<u32> = (5..10).collect();
        let tree = TreapSet::merge(left, right);
        assert_eq!(tree.into_iter().collect::<Vec<u32>>(), (0..10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_merge_empty() {
        let left: TreapSet<u32> = TreapSet::new();
        let right: TreapSet<u32> = (5..10).collect();
        let tree = TreapSet::merge(left, right);
        assert_eq!(tree.len(), 5);
        assert!(tree.is_valid());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "merged treaps are not ordered")]
    fn test_merge_overlapping() {
        let left: TreapSet<u32> = (0..5).collect();
        let right: TreapSet<u32> = (3..10).collect();
        TreapSet::merge(left, right);
    }

    #[test]
    fn test_union() {
        let mut n = TreapSet::new();
        n.insert(1).unwrap();
        n.insert(2).unwrap();
        n.insert(3).unwrap();

        let mut m = TreapSet::new();
        m.insert(3).unwrap();
        m.insert(4).unwrap();
        m.insert(5).unwrap();

        let union = n + m;

        assert_eq!(union.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3, &4, &5]);
        assert_eq!(union.len(), 5);
        assert!(union.is_valid());
    }

    #[test]
    fn test_union_keeps_left_key() {
        #[derive(Debug)]
        struct Tagged(u32, &'static str);

        impl PartialEq for Tagged {
            fn eq(&self, other: &Tagged) -> bool {
                self.0 == other.0
            }
        }

        impl Eq for Tagged {}

        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Tagged) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for Tagged {
            fn cmp(&self, other: &Tagged) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        for priority in &[1, 50, 100] {
            let mut n = TreapSet::new();
            n.insert_with_priority(Tagged(1, "left"), 50).unwrap();
            let mut m = TreapSet::new();
            m.insert_with_priority(Tagged(1, "right"), *priority).unwrap();

            let union = TreapSet::union(n, m);
            assert_eq!(union.len(), 1);
            assert_eq!(union.get(&Tagged(1, "")).map(|key| key.1), Some("left"));
        }
    }

    #[test]
    fn test_nth_rank() {
        let tree: TreapSet<u32> = vec![10, 40, 20, 30].into_iter().collect();
        assert_eq!(tree.nth(0), Some(&10));
        assert_eq!(tree.nth(3), Some(&40));
        assert_eq!(tree.nth(4), None);
        assert_eq!(tree.rank(&25), 2);
    }

    #[test]
    fn test_from_iter_skips_duplicates() {
        let tree: TreapSet<u32> = vec![3, 1, 3, 2, 1].into_iter().collect();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
    }

    #[test]
    fn test_clear() {
        let mut tree: TreapSet<u32> = (0..10).collect();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.iter().next(), None);
    }

    #[test]
    fn test_into_iter() {
        let mut tree = TreapSet::new();
        tree.insert(1).unwrap();
        tree.insert(5).unwrap();
        tree.insert(3).unwrap();

        let iter = tree.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_iter() {
        let mut tree = TreapSet::new();
        tree.insert(1).unwrap();
        tree.insert(5).unwrap();
        tree.insert(3).unwrap();

        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
        assert_eq!(tree.iter().rev().collect::<Vec<&u32>>(), vec![&5, &3, &1]);
    }

    #[test]
    fn test_iter_both_ends() {
        let tree: TreapSet<u32> = (0..5).collect();
        let mut iter = tree.iter();
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_debug() {
        let tree: TreapSet<u32> = vec![2, 1].into_iter().collect();
        assert_eq!(format!("{:?}", tree), "{1, 2}");
    }
}
