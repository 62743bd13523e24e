use crate::error::{Result, TreapError};
use crate::treap::node::Node;
use std::cmp::{self, Ordering};
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn len<T>(tree: &Tree<T>) -> usize {
    match tree {
        Some(node) => node.len,
        None => 0,
    }
}

/// Appends `r_tree` to `l_tree`. Every key in `l_tree` must be less than every key in `r_tree`.
///
/// The root with the strictly greater priority wins; on ties the root of `r_tree` wins.
pub fn merge<T: Ord>(l_tree: &mut Tree<T>, r_tree: Tree<T>) {
    match (l_tree.take(), r_tree) {
        (Some(mut l_node), Some(mut r_node)) => {
            debug_assert!(l_node.key < r_node.key, "merged trees are not ordered");
            if l_node.priority > r_node.priority {
                merge(&mut l_node.right, Some(r_node));
                l_node.update();
                *l_tree = Some(l_node);
            } else {
                let mut new_tree = Some(l_node);
                merge(&mut new_tree, r_node.left.take());
                r_node.left = new_tree;
                r_node.update();
                *l_tree = Some(r_node);
            }
        },
        (new_tree, None) | (None, new_tree) => *l_tree = new_tree,
    }
}

/// Splits `tree` into the nodes with keys strictly less than `key` and the nodes with keys greater
/// than or equal to `key`.
pub fn split<T: Ord>(tree: Tree<T>, key: &T) -> (Tree<T>, Tree<T>) {
    match tree {
        Some(mut node) => match node.key.cmp(key) {
            Ordering::Less => {
                let (left, right) = split(node.right.take(), key);
                node.right = left;
                node.update();
                (Some(node), right)
            },
            Ordering::Equal | Ordering::Greater => {
                let (left, right) = split(node.left.take(), key);
                node.left = right;
                node.update();
                (left, Some(node))
            },
        },
        None => (None, None),
    }
}

/// Inserts `new_node` into `tree`, rejecting keys that are already present.
///
/// The node descends until its priority is greater than the priority of the subtree it reached,
/// and then becomes the root of that subtree split around its key.
pub fn insert<T: Ord>(tree: &mut Tree<T>, mut new_node: Box<Node<T>>) -> Result<()> {
    let mut node = match tree.take() {
        Some(node) => node,
        None => {
            *tree = Some(new_node);
            return Ok(());
        },
    };

    let ret = match new_node.key.cmp(&node.key) {
        Ordering::Equal => Err(TreapError::DuplicateKey),
        ordering => {
            if new_node.priority > node.priority {
                let subtree = Some(node);
                if contains(&subtree, &new_node.key) {
                    *tree = subtree;
                    return Err(TreapError::DuplicateKey);
                }
                let (left, right) = split(subtree, &new_node.key);
                new_node.left = left;
                new_node.right = right;
                new_node.update();
                *tree = Some(new_node);
                return Ok(());
            }

            if ordering == Ordering::Less {
                insert(&mut node.left, new_node)
            } else {
                insert(&mut node.right, new_node)
            }
        },
    };

    node.update();
    *tree = Some(node);
    ret
}

/// Removes the node with a particular key from `tree` and returns its key. The tree is left
/// unchanged if the key does not exist.
pub fn erase<T: Ord>(tree: &mut Tree<T>, key: &T) -> Result<T> {
    let mut node = tree.take().ok_or(TreapError::KeyNotFound)?;
    let ret = match key.cmp(&node.key) {
        Ordering::Less => erase(&mut node.left, key),
        Ordering::Greater => erase(&mut node.right, key),
        Ordering::Equal => {
            let Node {
                key: removed,
                mut left,
                right,
                ..
            } = *node;
            merge(&mut left, right);
            *tree = left;
            return Ok(removed);
        },
    };

    node.update();
    *tree = Some(node);
    ret
}

/// Takes the union of two trees. Returns the new tree and the number of duplicate keys that were
/// discarded.
///
/// When both trees contain a key, the key stored in `left_tree` is kept. `swapped` tracks whether
/// the arguments have been exchanged relative to the top-level call and must be `false` there.
pub fn union<T: Ord>(left_tree: Tree<T>, right_tree: Tree<T>, mut swapped: bool) -> (Tree<T>, usize) {
    match (left_tree, right_tree) {
        (Some(mut left_node), Some(mut right_node)) => {
            if left_node.priority < right_node.priority {
                mem::swap(&mut left_node, &mut right_node);
                swapped = !swapped;
            }

            let (lower, mut upper) = split(Some(right_node), &left_node.key);
            let duplicate_opt = erase(&mut upper, &left_node.key).ok();
            let (new_left_subtree, left_dups) = union(left_node.left.take(), lower, swapped);
            let (new_right_subtree, right_dups) = union(left_node.right.take(), upper, swapped);
            left_node.left = new_left_subtree;
            left_node.right = new_right_subtree;
            left_node.update();

            let mut dups = left_dups + right_dups;
            if let Some(duplicate_key) = duplicate_opt {
                if swapped {
                    left_node.key = duplicate_key;
                }
                dups += 1;
            }
            (Some(left_node), dups)
        },
        (None, tree) | (tree, None) => (tree, 0),
    }
}

pub fn get_node<'a, T: Ord>(tree: &'a Tree<T>, key: &T) -> Option<&'a Node<T>> {
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.key) {
            Ordering::Less => get_node(&node.left, key),
            Ordering::Greater => get_node(&node.right, key),
            Ordering::Equal => Some(&**node),
        }
    })
}

pub fn get<'a, T: Ord>(tree: &'a Tree<T>, key: &T) -> Option<&'a T> {
    get_node(tree, key).map(|node| &node.key)
}

pub fn contains<T: Ord>(tree: &Tree<T>, key: &T) -> bool {
    get_node(tree, key).is_some()
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

/// Returns the key at a particular zero-based position of the in-order traversal.
pub fn nth<T>(tree: &Tree<T>, index: usize) -> Option<&T> {
    tree.as_ref().and_then(|node| {
        let left_len = len(&node.left);
        match index.cmp(&left_len) {
            Ordering::Less => nth(&node.left, index),
            Ordering::Greater => nth(&node.right, index - left_len - 1),
            Ordering::Equal => Some(&node.key),
        }
    })
}

/// Returns the number of keys in `tree` that are strictly less than `key`.
pub fn rank<T: Ord>(tree: &Tree<T>, key: &T) -> usize {
    match tree {
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => rank(&node.left, key),
            Ordering::Greater => len(&node.left) + 1 + rank(&node.right, key),
            Ordering::Equal => len(&node.left),
        },
        None => 0,
    }
}

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        Some(node) => 1 + cmp::max(height(&node.left), height(&node.right)),
        None => 0,
    }
}

/// Checks the ordering, heap and length invariants of every node in `tree`.
pub fn is_valid<T: Ord>(tree: &Tree<T>) -> bool {
    is_valid_between(tree, None, None)
}

fn is_valid_between<'a, T: Ord>(tree: &'a Tree<T>, lower: Option<&'a T>, upper: Option<&'a T>) -> bool {
    match tree {
        Some(node) => {
            lower.map_or(true, |lower| *lower < node.key)
                && upper.map_or(true, |upper| node.key < *upper)
                && !node.is_heap_property_violated(&node.left)
                && !node.is_heap_property_violated(&node.right)
                && node.len == 1 + len(&node.left) + len(&node.right)
                && is_valid_between(&node.left, lower, Some(&node.key))
                && is_valid_between(&node.right, Some(&node.key), upper)
        },
        None => true,
    }
}
