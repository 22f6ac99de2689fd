//! Integrity checks for the structural invariants of a red black tree. None of the checks mutate
//! the tree.

use crate::red_black_tree::node::Color;
use crate::red_black_tree::tree::{self, Tree};
use crate::red_black_tree::{Error, Invariant, Result};

// Keys must be strictly increasing, which also rules out a node appearing twice.
pub fn is_bst<T, U>(tree: &Tree<T, U>) -> bool
where
    T: Ord,
{
    fn is_bst_between<T, U>(tree: &Tree<T, U>, min: Option<&T>, max: Option<&T>) -> bool
    where
        T: Ord,
    {
        match tree {
            None => true,
            Some(node) => {
                let key = &node.entry.key;
                if min.map_or(false, |min| key <= min) || max.map_or(false, |max| key >= max) {
                    return false;
                }
                is_bst_between(&node.left, min, Some(key))
                    && is_bst_between(&node.right, Some(key), max)
            },
        }
    }

    is_bst_between(tree, None, None)
}

pub fn is_size_consistent<T, U>(tree: &Tree<T, U>) -> bool {
    match tree {
        None => true,
        Some(node) => {
            node.size == tree::size(&node.left) + tree::size(&node.right) + 1
                && is_size_consistent(&node.left)
                && is_size_consistent(&node.right)
        },
    }
}

pub fn is_rank_consistent<T, U>(tree: &Tree<T, U>) -> bool
where
    T: Ord,
{
    let selects_match = (0..tree::size(tree)).all(|index| {
        tree::select(tree, index).map_or(false, |entry| tree::rank(tree, &entry.key) == index)
    });
    if !selects_match {
        return false;
    }

    let mut entries = Vec::new();
    tree::in_order(tree, &mut entries);
    entries.iter().all(|entry| {
        let rank = tree::rank(tree, &entry.key);
        tree::select(tree, rank).map_or(false, |selected| selected.key == entry.key)
    })
}

// No red right links, and no red node with a red left child. The root is exempt from the second
// rule since its color is only forced black after a mutation completes.
pub fn is_23<T, U>(tree: &Tree<T, U>) -> bool {
    fn is_23_below<T, U>(tree: &Tree<T, U>, is_root: bool) -> bool {
        match tree {
            None => true,
            Some(node) => {
                if tree::is_red(&node.right) {
                    return false;
                }
                if !is_root && node.color == Color::Red && tree::is_red(&node.left) {
                    return false;
                }
                is_23_below(&node.left, false) && is_23_below(&node.right, false)
            },
        }
    }

    is_23_below(tree, true)
}

pub fn is_balanced<T, U>(tree: &Tree<T, U>) -> bool {
    fn is_balanced_below<T, U>(tree: &Tree<T, U>, mut black: usize) -> bool {
        match tree {
            None => black == 0,
            Some(node) => {
                if node.color == Color::Black {
                    if black == 0 {
                        return false;
                    }
                    black -= 1;
                }
                is_balanced_below(&node.left, black) && is_balanced_below(&node.right, black)
            },
        }
    }

    // Number of black links on the path from the root to the minimum.
    let mut black = 0;
    let mut curr = tree;
    while let Some(node) = curr {
        if node.color == Color::Black {
            black += 1;
        }
        curr = &node.left;
    }
    is_balanced_below(tree, black)
}

/// Runs every integrity check and returns the first invariant that does not hold. Each failing
/// invariant is logged.
pub fn check<T, U>(tree: &Tree<T, U>) -> Result<()>
where
    T: Ord,
{
    let checks: [(Invariant, fn(&Tree<T, U>) -> bool); 5] = [
        (Invariant::SymmetricOrder, is_bst),
        (Invariant::SizeConsistency, is_size_consistent),
        (Invariant::RankConsistency, is_rank_consistent),
        (Invariant::TwoThree, is_23),
        (Invariant::BlackBalance, is_balanced),
    ];

    let mut ret = Ok(());
    for (invariant, holds) in checks.iter() {
        if !holds(tree) {
            log::error!("red black tree integrity check failed: {}", invariant);
            if ret.is_ok() {
                ret = Err(Error::InvariantViolation(*invariant));
            }
        }
    }
    ret
}
