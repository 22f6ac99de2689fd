//! Ordered symbol tables backed by a left-leaning red-black tree.
//!
//! [`RedBlackMap`](red_black_tree/struct.RedBlackMap.html) is a sorted key-value map that supports
//! insertion, lookup, and deletion in worst-case logarithmic time, together with order-statistics
//! queries: `rank`, `select`, `floor`, `ceil`, and range iteration and counting.
//!
//! # Examples
//!
//! ```
//! use llrb_collections::red_black_tree::RedBlackMap;
//!
//! let mut map = RedBlackMap::new();
//! for (value, key) in ["S", "E", "A", "R", "C", "H"].iter().enumerate() {
//!     map.insert(*key, value + 1);
//! }
//!
//! assert_eq!(map.keys().cloned().collect::<Vec<&str>>(), vec!["A", "C", "E", "H", "R", "S"]);
//! assert_eq!(map.rank("H"), 2);
//! assert_eq!(map.select(2), Ok(&"H"));
//! assert_eq!(map.floor("F"), Ok(&"E"));
//! assert_eq!(map.ceil("F"), Ok(&"H"));
//! ```

mod entry;
pub mod red_black_tree;
