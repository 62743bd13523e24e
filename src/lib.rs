//! An ordered set backed by a randomized treap.
//!
//! Keys are kept in binary search tree order while per-node random priorities are kept in max-heap
//! order, which keeps the expected height logarithmic without any explicit rebalancing. Every
//! mutating operation is built from two structural primitives, `split` and `merge`.
//!
//! # Examples
//!
//! ```
//! use treap::{TreapError, TreapSet};
//!
//! let mut set = TreapSet::new();
//! set.insert(2).unwrap();
//! set.insert(1).unwrap();
//! assert_eq!(set.insert(2), Err(TreapError::DuplicateKey));
//!
//! let (left, right) = set.split(&2);
//! assert_eq!(left.iter().collect::<Vec<&u32>>(), vec![&1]);
//! assert_eq!(right.iter().collect::<Vec<&u32>>(), vec![&2]);
//! ```

pub mod error;
pub mod treap;

pub use crate::error::{Result, TreapError};
pub use crate::treap::TreapSet;
