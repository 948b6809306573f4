//! Test helpers shared across crates.
//!
//! This crate provides temporary fragment trees for loader tests.

mod tree;

pub use tree::FragmentTree;
