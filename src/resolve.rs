//! Path resolution over the node arena.
//!
//! Two distinct entry points: [`lookup`] is a pure query, [`resolve_or_create`]
//! builds missing intermediate directories as it descends. Keeping the paths
//! separate lets callers (and tests) rely on lookup never mutating the tree.

use crate::error::FsError;
use crate::tree::{DirectoryNode, NodeArena};
use crate::types::DirId;

/// Resolve `segments` to a directory without mutating the tree.
///
/// An empty sequence resolves to `start`. A leading empty segment encodes an
/// absolute path and restarts resolution at `root`. `".."` ascends to the
/// parent; at the root it stays at the root. A segment with no matching child
/// directory fails with `DirectoryNotFound`.
pub fn lookup(
    arena: &NodeArena,
    root: DirId,
    start: DirId,
    segments: &[String],
) -> Result<DirId, FsError> {
    let (mut current, segments) = entry_point(root, start, segments);
    for segment in segments {
        current = match segment.as_str() {
            ".." => ascend(arena, current),
            name => match arena.dir(current).child_directories.get(name).copied() {
                Some(child) => child,
                None => return Err(FsError::DirectoryNotFound(name.to_string())),
            },
        };
    }
    Ok(current)
}

/// Resolve `segments` to a directory, creating missing intermediates.
///
/// Same traversal as [`lookup`], but a segment with no matching child
/// directory is created and entered. A segment that exists as a file fails
/// with `AlreadyExists`: a name may not be both kinds at one level, and
/// descending "through" a file would shadow it.
pub fn resolve_or_create(
    arena: &mut NodeArena,
    root: DirId,
    start: DirId,
    segments: &[String],
) -> Result<DirId, FsError> {
    let (mut current, segments) = entry_point(root, start, segments);
    for segment in segments {
        current = match segment.as_str() {
            ".." => ascend(arena, current),
            name => match arena.dir(current).child_directories.get(name).copied() {
                Some(child) => child,
                None if arena.dir(current).files.contains_key(name) => {
                    return Err(FsError::AlreadyExists(name.to_string()));
                }
                None => {
                    let child = arena.alloc_dir(DirectoryNode::new(Some(current), name));
                    arena
                        .dir_mut(current)
                        .child_directories
                        .insert(name.to_string(), child);
                    child
                }
            },
        };
    }
    Ok(current)
}

fn entry_point<'a>(root: DirId, start: DirId, segments: &'a [String]) -> (DirId, &'a [String]) {
    match segments.split_first() {
        Some((first, rest)) if first.is_empty() => (root, rest),
        _ => (start, segments),
    }
}

fn ascend(arena: &NodeArena, current: DirId) -> DirId {
    // ".." at the root is a no-op
    arena.dir(current).parent.unwrap_or(current)
}
