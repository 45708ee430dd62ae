//! Namespace engine: the mutating operations over the tree.
//!
//! Every operation resolves its path first and fails before touching the
//! tree, so a failed call leaves no partial mutation behind. The one
//! documented exception is recursive directory creation, where intermediates
//! built by the resolver persist even if the final insertion fails.

use crate::error::FsError;
use crate::naming::rename_if_colliding;
use crate::resolve;
use crate::tree::{DirectoryNode, FileNode, NodeArena};
use crate::types::DirId;
use tracing::debug;

/// The in-memory file tree and its working-directory pointer.
///
/// Single-threaded by design: every operation is a blocking procedure that
/// completes fully before the next request. See [`crate::concurrency`] for
/// the embedding discipline in a concurrent host.
pub struct Namespace {
    arena: NodeArena,
    root: DirId,
    working_directory: DirId,
}

impl Namespace {
    pub fn new() -> Self {
        let mut arena = NodeArena::new();
        let root = arena.alloc_dir(DirectoryNode::new(None, ""));
        Self {
            arena,
            root,
            working_directory: root,
        }
    }

    /// Set the working directory to the directory at `path`.
    pub fn change_directory(&mut self, path: &[String]) -> Result<(), FsError> {
        self.working_directory = self.lookup(path)?;
        Ok(())
    }

    /// Render the working directory as an absolute path; the root is `/`.
    pub fn working_directory(&self) -> String {
        let mut rendered = String::new();
        let mut current = self.working_directory;
        while let Some(parent) = self.arena.dir(current).parent {
            rendered = format!("/{}{}", self.arena.dir(current).name, rendered);
            current = parent;
        }
        if rendered.is_empty() {
            "/".to_string()
        } else {
            rendered
        }
    }

    /// List child directory names followed by file names, space-joined, in
    /// insertion order. Without a path, lists the working directory.
    pub fn list_contents(&self, path: Option<&[String]>) -> Result<String, FsError> {
        let dir = match path {
            Some(path) => self.lookup(path)?,
            None => self.working_directory,
        };
        let node = self.arena.dir(dir);
        let names: Vec<&str> = node
            .child_directories
            .keys()
            .chain(node.files.keys())
            .map(String::as_str)
            .collect();
        Ok(names.join(" "))
    }

    /// Create a directory at `path`. With `recursive`, missing intermediate
    /// directories are created as well. Fails with `AlreadyExists` if the
    /// final name collides with an existing directory or file.
    pub fn make_directory(&mut self, path: &[String], recursive: bool) -> Result<(), FsError> {
        let (name, prefix) = split_target(path);
        let parent = if recursive {
            resolve::resolve_or_create(&mut self.arena, self.root, self.working_directory, prefix)?
        } else {
            self.lookup(prefix)?
        };
        if self.arena.dir(parent).has_child(name) {
            return Err(FsError::AlreadyExists(name.to_string()));
        }
        let dir = self.arena.alloc_dir(DirectoryNode::new(Some(parent), name));
        self.arena
            .dir_mut(parent)
            .child_directories
            .insert(name.to_string(), dir);
        debug!(directory = name, "created directory");
        Ok(())
    }

    /// Create an empty file at `path`. A colliding name is renamed per the
    /// duplicate-name policy, so creation never fails on collision.
    pub fn create_file(&mut self, path: &[String]) -> Result<(), FsError> {
        let (name, prefix) = split_target(path);
        let parent = self.lookup(prefix)?;
        let final_name = rename_if_colliding(self.arena.dir_mut(parent), name);
        let file = self.arena.alloc_file(FileNode::new(parent, final_name.clone()));
        self.arena.dir_mut(parent).files.insert(final_name.clone(), file);
        debug!(file = %final_name, "created file");
        Ok(())
    }

    /// Remove the directory or file named by `path`, whichever matches.
    /// Directory removal is unconditional: a non-empty subtree is released
    /// wholesale. If the working directory was inside the removed subtree it
    /// is reset to the removal point's parent.
    pub fn remove(&mut self, path: &[String]) -> Result<(), FsError> {
        let (name, prefix) = split_target(path);
        let parent = self.lookup(prefix)?;

        let removed = self
            .arena
            .dir_mut(parent)
            .child_directories
            .shift_remove(name);
        if let Some(dir) = removed {
            self.arena.release_subtree(dir);
            if !self.arena.is_dir_live(self.working_directory) {
                self.working_directory = parent;
            }
            debug!(removed = name, "removed directory subtree");
            return Ok(());
        }

        if let Some(file) = self.arena.dir_mut(parent).files.shift_remove(name) {
            self.arena.free_file(file);
            debug!(removed = name, "removed file");
            return Ok(());
        }

        Err(FsError::NotFound(name.to_string()))
    }

    /// Write `content` to the file at `path`, creating the file if absent.
    /// The implicit creation does not consult the duplicate-name policy, but
    /// a name that already exists as a directory is rejected rather than
    /// shadowed.
    pub fn write_content(&mut self, path: &[String], content: &str) -> Result<(), FsError> {
        let (name, prefix) = split_target(path);
        let parent = self.lookup(prefix)?;
        if self.arena.dir(parent).child_directories.contains_key(name) {
            return Err(FsError::AlreadyExists(name.to_string()));
        }
        let file = match self.arena.dir(parent).files.get(name).copied() {
            Some(file) => file,
            None => {
                let file = self.arena.alloc_file(FileNode::new(parent, name));
                self.arena.dir_mut(parent).files.insert(name.to_string(), file);
                debug!(file = name, "created file on write");
                file
            }
        };
        self.arena.file_mut(file).content = content.to_string();
        Ok(())
    }

    /// Read the content of the file at `path`.
    pub fn read_content(&self, path: &[String]) -> Result<&str, FsError> {
        let (name, prefix) = split_target(path);
        let parent = self.lookup(prefix)?;
        match self.arena.dir(parent).files.get(name).copied() {
            Some(file) => Ok(self.arena.file(file).content.as_str()),
            None => Err(FsError::FileNotFound(name.to_string())),
        }
    }

    /// Move the node named by the final segment of `src` into the directory
    /// at `dest`.
    ///
    /// A file is re-parented under a name resolved against the destination's
    /// duplicate counters. A directory is re-parented wholesale, unless the
    /// destination already has a same-named child directory, in which case
    /// the source subtree is merged into it and the emptied source entry
    /// removed. Moving a directory into itself or its own subtree is
    /// rejected.
    pub fn move_node(&mut self, src: &[String], dest: &[String]) -> Result<(), FsError> {
        let (name, src_prefix) = split_target(src);
        let src_parent = self.lookup(src_prefix)?;
        let dest_dir = self.lookup(dest)?;

        if let Some(file) = self.arena.dir(src_parent).files.get(name).copied() {
            let final_name = rename_if_colliding(self.arena.dir_mut(dest_dir), name);
            let node = self.arena.file_mut(file);
            node.parent = dest_dir;
            node.name = final_name.clone();
            self.arena.dir_mut(dest_dir).files.insert(final_name.clone(), file);
            self.arena.dir_mut(src_parent).files.shift_remove(name);
            debug!(source = name, moved_as = %final_name, "moved file");
            return Ok(());
        }

        let moving = match self.arena.dir(src_parent).child_directories.get(name).copied() {
            Some(dir) => dir,
            None => return Err(FsError::SourceNotFound(name.to_string())),
        };
        if self.is_within(dest_dir, moving) {
            return Err(FsError::MoveIntoSelf(name.to_string()));
        }

        match self.arena.dir(dest_dir).child_directories.get(name).copied() {
            Some(existing) if existing == moving => Err(FsError::MoveIntoSelf(name.to_string())),
            Some(existing) => {
                self.merge(moving, existing);
                self.arena
                    .dir_mut(src_parent)
                    .child_directories
                    .shift_remove(name);
                self.arena.free_dir(moving);
                if !self.arena.is_dir_live(self.working_directory) {
                    self.working_directory = existing;
                }
                debug!(source = name, "merged directory into destination");
                Ok(())
            }
            None => {
                self.arena.dir_mut(moving).parent = Some(dest_dir);
                self.arena
                    .dir_mut(dest_dir)
                    .child_directories
                    .insert(name.to_string(), moving);
                self.arena
                    .dir_mut(src_parent)
                    .child_directories
                    .shift_remove(name);
                debug!(source = name, "moved directory");
                Ok(())
            }
        }
    }

    /// Recursively merge `src`'s children into `dest`. Same-named child
    /// directories merge in turn; everything else is re-parented, with files
    /// renamed against `dest`'s duplicate counters. `src` is left empty; the
    /// caller removes its entry and frees it.
    fn merge(&mut self, src: DirId, dest: DirId) {
        let (child_dirs, files) = {
            let src_node = self.arena.dir_mut(src);
            (
                std::mem::take(&mut src_node.child_directories),
                std::mem::take(&mut src_node.files),
            )
        };

        for (name, child) in child_dirs {
            match self.arena.dir(dest).child_directories.get(&name).copied() {
                Some(target) => {
                    self.merge(child, target);
                    self.arena.free_dir(child);
                }
                None => {
                    self.arena.dir_mut(child).parent = Some(dest);
                    self.arena
                        .dir_mut(dest)
                        .child_directories
                        .insert(name, child);
                }
            }
        }

        for (_, file) in files {
            let incoming = self.arena.file(file).name.clone();
            let final_name = rename_if_colliding(self.arena.dir_mut(dest), &incoming);
            let node = self.arena.file_mut(file);
            node.parent = dest;
            node.name = final_name.clone();
            self.arena.dir_mut(dest).files.insert(final_name, file);
        }
    }

    /// Depth-first pre-order search from the working directory. Each
    /// directory whose immediate children include `name` contributes the
    /// slash-joined path from the search root to the match; searching from
    /// the filesystem root prefixes paths with `/`, elsewhere paths are
    /// relative. Matches are space-joined in traversal order.
    pub fn find(&self, name: &str) -> String {
        let mut matches = Vec::new();
        let prefix = if self.working_directory == self.root {
            "/"
        } else {
            ""
        };
        self.find_into(name, self.working_directory, prefix, &mut matches);
        matches.join(" ")
    }

    fn find_into(&self, name: &str, dir: DirId, path: &str, matches: &mut Vec<String>) {
        let node = self.arena.dir(dir);
        if node.has_child(name) {
            matches.push(format!("{}{}", path, name));
        }
        for (child_name, &child) in &node.child_directories {
            self.find_into(name, child, &format!("{}{}/", path, child_name), matches);
        }
    }

    fn lookup(&self, path: &[String]) -> Result<DirId, FsError> {
        resolve::lookup(&self.arena, self.root, self.working_directory, path)
    }

    /// Whether `node` is `ancestor` or lies inside its subtree.
    fn is_within(&self, node: DirId, ancestor: DirId) -> bool {
        let mut current = Some(node);
        while let Some(dir) = current {
            if dir == ancestor {
                return true;
            }
            current = self.arena.dir(dir).parent;
        }
        false
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a path into its final segment and the prefix leading to it. An
/// empty path addresses the empty name in the working directory.
fn split_target(path: &[String]) -> (&str, &[String]) {
    match path.split_last() {
        Some((name, prefix)) => (name.as_str(), prefix),
        None => ("", &[]),
    }
}
