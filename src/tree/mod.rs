//! Tree node model: directories, files, and the arena that owns them.

mod arena;
mod node;

pub use arena::NodeArena;
pub use node::{DirectoryNode, FileNode};
