//! Arena identifiers for tree nodes.
//!
//! Parent links and child maps hold these copyable indices instead of owning
//! references, so re-parenting a subtree is a single index update and the tree
//! never forms a reference cycle.

/// Index of a directory slot in the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirId(pub(crate) usize);

/// Index of a file slot in the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId(pub(crate) usize);
