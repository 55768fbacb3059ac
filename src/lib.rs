// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Bigcollections - lists whose length is not bounded by the machine word.
//!
//! A [`BigList`] stores elements in bounded leaves under a tree of branches
//! and addresses them with arbitrary-precision [`Index`] values. Reversal
//! is a flag on a node, range copies run through an explicit work-list, and
//! repeated nearby reads go through a cached descent path.
//!
//! # Quick Start
//!
//! ```
//! use bigcollections::{BigList, BigListConfig, Index};
//!
//! // Small leaves so the tree grows branches quickly
//! let config = BigListConfig::new(2, 1).unwrap();
//! let mut list: BigList<u32> = BigList::with_config(config);
//!
//! for i in 0..10u32 {
//!     list.push(i);
//! }
//! assert_eq!(list.len(), Index::from(10u32));
//! assert_eq!(list.height(), 2);
//!
//! list.reverse();
//! assert_eq!(list.get(0u32), Some(&9));
//!
//! list.remove_range(2u32, 5u32).unwrap();
//! assert_eq!(list.to_vec(), vec![9, 8, 2, 1, 0]);
//! ```

pub mod big_list;
pub mod config;
pub mod error;
pub mod index;
pub mod leaf;
pub mod sum_table;

pub use big_list::BigList;
pub use config::BigListConfig;
pub use error::{BigListError, Result};
pub use index::Index;
pub use leaf::{DequeLeaf, Leaf};
pub use sum_table::SumTable;
