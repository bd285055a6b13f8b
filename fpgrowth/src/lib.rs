//! Frequent itemset mining with FP-Growth.
//!
//! Transactions are compressed into a prefix-sharing FP-tree whose header table
//! links every occurrence of each frequent item. Patterns are then grown from
//! conditional trees, least frequent item first, without generating candidates.
//!
//! ```
//! let transactions = vec![
//!     vec!["a", "b", "c"],
//!     vec!["a", "b"],
//!     vec!["a", "c"],
//!     vec!["b", "c"],
//!     vec!["a"],
//! ];
//! let patterns = fpgrowth::find_frequent_patterns(transactions, 3).unwrap();
//! assert_eq!(patterns.len(), 3);
//! ```

pub mod config;
pub mod error;
pub mod fp;

pub use config::{MinSupport, MiningConfig};
pub use error::{FpGrowthError, Result};
pub use fp::{find_frequent_patterns, fp_growth_algorithm, FpGrowth, FrequentItemset, FrequentLevel};
