pub mod clades;
pub mod context;
pub mod lookup;
pub mod subtree;
