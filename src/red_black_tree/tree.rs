use crate::entry::Entry;
use crate::red_black_tree::node::{Color, Node};
use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

pub fn is_red<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => false,
        Some(ref node) => node.color == Color::Red,
    }
}

pub fn size<T, U>(tree: &Tree<T, U>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.size,
    }
}

// Number of edges on the longest path from the root to a node.
pub fn height<T, U>(tree: &Tree<T, U>) -> Option<usize> {
    tree.as_ref().map(|node| {
        let left = height(&node.left).map_or(0, |height| height + 1);
        let right = height(&node.right).map_or(0, |height| height + 1);
        cmp::max(left, right)
    })
}

// A child is a black 2-node when neither it nor its left child is red. Descending into it during
// a removal would shorten the black height of that side.
fn is_two_node<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => false,
        Some(ref node) => node.color != Color::Red && !is_red(&node.left),
    }
}

pub fn blacken_root<T, U>(tree: &mut Tree<T, U>) {
    if let Some(ref mut node) = tree {
        node.color = Color::Black;
    }
}

// Before a removal starts, a root whose children are both black is made red so that the root
// satisfies the precondition of `move_red_left` and `move_red_right`.
pub fn redden_root<T, U>(tree: &mut Tree<T, U>) {
    if let Some(ref mut node) = tree {
        if !is_red(&node.left) && !is_red(&node.right) {
            log::trace!("coloring root red before removal");
            node.color = Color::Red;
        }
    }
}

pub fn insert<T, U>(tree: &mut Tree<T, U>, new_node: Node<T, U>) -> Option<Entry<T, U>>
where
    T: Ord,
{
    match tree {
        Some(ref mut node) => {
            let ret = match new_node.entry.key.cmp(&node.entry.key) {
                Ordering::Less => insert(&mut node.left, new_node),
                Ordering::Greater => insert(&mut node.right, new_node),
                Ordering::Equal => {
                    let Node { ref mut entry, .. } = &mut **node;
                    Some(mem::replace(entry, new_node.entry))
                },
            };
            node.balance();
            ret
        },
        None => {
            *tree = Some(Box::new(new_node));
            None
        },
    }
}

// precondition: there exists a minimum node in the tree
pub fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    if let Some(ref mut node) = tree {
        if node.left.is_some() {
            if is_two_node(&node.left) {
                node.move_red_left();
            }

            let ret = remove_min(&mut node.left);
            node.balance();
            return ret;
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.right.take();
    node
}

// precondition: there exists a maximum node in the tree
pub fn remove_max<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    if let Some(ref mut node) = tree {
        if is_red(&node.left) {
            node.rotate_right();
        }

        if node.right.is_some() {
            if is_two_node(&node.right) {
                node.move_red_right();
            }

            let ret = remove_max(&mut node.right);
            node.balance();
            return ret;
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.left.take();
    node
}

// precondition: the key exists in the tree
pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Entry<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut node = tree.take().expect("Expected the key to exist in the tree.");
    let ret = if key < node.entry.key.borrow() {
        if is_two_node(&node.left) {
            node.move_red_left();
        }
        remove(&mut node.left, key)
    } else {
        if is_red(&node.left) {
            node.rotate_right();
        }

        if key == node.entry.key.borrow() && node.right.is_none() {
            let Node { entry, left, .. } = *node;
            *tree = left;
            return entry;
        }

        if is_two_node(&node.right) {
            node.move_red_right();
        }

        if key == node.entry.key.borrow() {
            // Replace the entry with its in-order successor, then drop the successor's node.
            let successor = remove_min(&mut node.right);
            mem::replace(&mut node.entry, successor.entry)
        } else {
            remove(&mut node.right, key)
        }
    };

    node.balance();
    *tree = Some(node);
    ret
}

pub fn get<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut curr = tree;
    while let Some(node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.entry),
        }
    }
    None
}

pub fn get_mut<'a, T, U, V>(tree: &'a mut Tree<T, U>, key: &V) -> Option<&'a mut Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_mut().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => get_mut(&mut node.left, key),
            Ordering::Greater => get_mut(&mut node.right, key),
            Ordering::Equal => Some(&mut node.entry),
        }
    })
}

pub fn ceil<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Greater => ceil(&node.right, key),
            Ordering::Less => {
                match ceil(&node.left, key) {
                    None => Some(&node.entry),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn floor<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => floor(&node.left, key),
            Ordering::Greater => {
                match floor(&node.right, key) {
                    None => Some(&node.entry),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn min<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}

// Returns the entry with exactly `rank` smaller keys in the tree.
pub fn select<T, U>(tree: &Tree<T, U>, mut rank: usize) -> Option<&Entry<T, U>> {
    let mut curr = tree;
    while let Some(node) = curr {
        let left_size = size(&node.left);
        match rank.cmp(&left_size) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => {
                rank -= left_size + 1;
                curr = &node.right;
            },
            Ordering::Equal => return Some(&node.entry),
        }
    }
    None
}

// Returns the number of keys in the tree strictly less than `key`.
pub fn rank<T, U, V>(tree: &Tree<T, U>, key: &V) -> usize
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut ret = 0;
    let mut curr = tree;
    while let Some(node) = curr {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => {
                ret += size(&node.left) + 1;
                curr = &node.right;
            },
            Ordering::Equal => return ret + size(&node.left),
        }
    }
    ret
}

pub fn pre_order<'a, T, U>(tree: &'a Tree<T, U>, entries: &mut Vec<&'a Entry<T, U>>) {
    if let Some(ref node) = tree {
        entries.push(&node.entry);
        pre_order(&node.left, entries);
        pre_order(&node.right, entries);
    }
}

pub fn in_order<'a, T, U>(tree: &'a Tree<T, U>, entries: &mut Vec<&'a Entry<T, U>>) {
    if let Some(ref node) = tree {
        in_order(&node.left, entries);
        entries.push(&node.entry);
        in_order(&node.right, entries);
    }
}

pub fn post_order<'a, T, U>(tree: &'a Tree<T, U>, entries: &mut Vec<&'a Entry<T, U>>) {
    if let Some(ref node) = tree {
        post_order(&node.left, entries);
        post_order(&node.right, entries);
        entries.push(&node.entry);
    }
}
