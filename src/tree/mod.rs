//! Tree listing
//!
//! The tree is never materialized as nodes: [`TreeBuilder`] walks the
//! filesystem depth-first and emits a flat list of [`TreeRow`]s in print
//! order, each carrying its box-drawing prefix.

mod builder;
mod prefix;

pub use builder::{TreeBuilder, TreeRow};
pub use prefix::{BLANK, CORNER, PIPE, TEE, tree_prefix};
