//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! balanced during insertions and deletions.
//!
//! Every red link leans left and no path has two red links in a row, which makes the tree a
//! binary encoding of a 2-3 tree. Each node also caches the size of its subtree so that rank and
//! select queries run in logarithmic time.

mod check;
mod map;
mod node;
mod set;
mod tree;

pub use self::map::{
    RedBlackMap, RedBlackMapIntoIter, RedBlackMapIter, RedBlackMapIterMut, RedBlackMapKeys,
    RedBlackMapRange, RedBlackMapRangeKeys, RedBlackMapValues, Traversal,
};
pub use self::set::{RedBlackSet, RedBlackSetIntoIter, RedBlackSetIter, RedBlackSetRange};

use std::fmt;
use std::result;
use thiserror::Error;

/// A structural property that every red black tree must satisfy after a public operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Invariant {
    /// Every key in a left subtree is less than its parent, which is less than every key in its
    /// right subtree.
    SymmetricOrder,
    /// The cached size of every node equals the number of nodes in its subtree.
    SizeConsistency,
    /// `rank` and `select` are inverses of each other.
    RankConsistency,
    /// There are no red right links and no two red links in a row.
    TwoThree,
    /// Every path from the root to an empty subtree crosses the same number of black links.
    BlackBalance,
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Invariant::SymmetricOrder => "keys are not in symmetric order",
            Invariant::SizeConsistency => "subtree sizes are not consistent",
            Invariant::RankConsistency => "ranks are not consistent",
            Invariant::TwoThree => "tree is not a 2-3 tree",
            Invariant::BlackBalance => "tree is not black balanced",
        };
        write!(f, "{}", description)
    }
}

/// Errors returned by the operations of a red black tree.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An argument was outside of the domain of the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No key satisfies the query of the named operation.
    #[error("no key satisfies `{0}`")]
    NotFound(&'static str),

    /// A removal was attempted on an empty tree.
    #[error("cannot remove from an empty tree")]
    Underflow,

    /// The integrity checker found a broken invariant.
    #[error("invariant violated: {0}")]
    InvariantViolation(Invariant),
}

pub type Result<T> = result::Result<T, Error>;
