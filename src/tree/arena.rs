//! Slot arena owning every node in one tree.

use crate::types::{DirId, FileId};

use super::node::{DirectoryNode, FileNode};

/// Owns directory and file nodes in slot vectors with free lists.
///
/// Allocation hands out ids; freeing returns the slot for reuse. The child
/// maps in [`DirectoryNode`] are the only place ids are retained long-term,
/// so a freed id is unreachable once its map entry is gone. Dereferencing an
/// id after freeing it is an engine bug and panics.
#[derive(Debug, Default)]
pub struct NodeArena {
    dirs: Vec<Option<DirectoryNode>>,
    files: Vec<Option<FileNode>>,
    free_dirs: Vec<usize>,
    free_files: Vec<usize>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc_dir(&mut self, node: DirectoryNode) -> DirId {
        match self.free_dirs.pop() {
            Some(slot) => {
                self.dirs[slot] = Some(node);
                DirId(slot)
            }
            None => {
                self.dirs.push(Some(node));
                DirId(self.dirs.len() - 1)
            }
        }
    }

    pub fn alloc_file(&mut self, node: FileNode) -> FileId {
        match self.free_files.pop() {
            Some(slot) => {
                self.files[slot] = Some(node);
                FileId(slot)
            }
            None => {
                self.files.push(Some(node));
                FileId(self.files.len() - 1)
            }
        }
    }

    pub fn dir(&self, id: DirId) -> &DirectoryNode {
        self.dirs[id.0].as_ref().expect("dereferenced freed directory id")
    }

    pub fn dir_mut(&mut self, id: DirId) -> &mut DirectoryNode {
        self.dirs[id.0].as_mut().expect("dereferenced freed directory id")
    }

    pub fn file(&self, id: FileId) -> &FileNode {
        self.files[id.0].as_ref().expect("dereferenced freed file id")
    }

    pub fn file_mut(&mut self, id: FileId) -> &mut FileNode {
        self.files[id.0].as_mut().expect("dereferenced freed file id")
    }

    /// Whether the directory slot is still occupied.
    pub fn is_dir_live(&self, id: DirId) -> bool {
        self.dirs.get(id.0).map_or(false, |slot| slot.is_some())
    }

    /// Free one directory slot, returning the node that occupied it.
    pub fn free_dir(&mut self, id: DirId) -> DirectoryNode {
        let node = self.dirs[id.0].take().expect("freed directory id twice");
        self.free_dirs.push(id.0);
        node
    }

    /// Free one file slot, returning the node that occupied it.
    pub fn free_file(&mut self, id: FileId) -> FileNode {
        let node = self.files[id.0].take().expect("freed file id twice");
        self.free_files.push(id.0);
        node
    }

    /// Free a directory and every node reachable below it.
    pub fn release_subtree(&mut self, id: DirId) {
        let node = self.free_dir(id);
        for (_, child) in node.child_directories {
            self.release_subtree(child);
        }
        for (_, file) in node.files {
            self.free_file(file);
        }
    }

    pub fn live_dir_count(&self) -> usize {
        self.dirs.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn live_file_count(&self) -> usize {
        self.files.iter().filter(|slot| slot.is_some()).count()
    }
}
