pub mod builder;
pub mod combinations;
pub mod header;
pub mod mining;
pub mod tree;

pub use builder::{build_conditional_fp_tree, build_fp_tree};
pub use header::HeaderTable;
pub use mining::{fp_growth, mine, MiningContext, MiningParams};
pub use tree::{ConditionalPatternBase, FPNode, FPTree};
