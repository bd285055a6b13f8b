pub mod growth;
pub mod itemizer;
pub mod matrix;
pub mod patterns;
pub mod support;
pub mod utils;


pub use growth::{FPNode, FPTree, HeaderTable};
pub use itemizer::Itemizer;
pub use matrix::{fp_growth_algorithm, fp_growth_matrix};
pub use patterns::{find_frequent_patterns, FpGrowth, FrequentItemset};
pub use support::{count_item_supports, SupportCounter};
pub use utils::{FrequentLevel, ItemsetStorage};
