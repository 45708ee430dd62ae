//! Duplicate-name policy: per-directory counters producing `name(n)` suffixes.

use crate::tree::DirectoryNode;

/// Resolve a candidate name against the directory's duplicate counters.
///
/// Once a base name has issued a suffix, the counter only ever moves forward:
/// removing `x(1)` does not let `x(1)` be reissued, the next collision on `x`
/// yields `x(2)`. A candidate that neither has a counter nor collides with an
/// existing child passes through unchanged and records nothing.
pub fn rename_if_colliding(dir: &mut DirectoryNode, candidate: &str) -> String {
    if let Some(count) = dir.duplicate_count.get_mut(candidate) {
        *count += 1;
        let issued = *count;
        return format!("{}({})", candidate, issued);
    }
    if dir.has_child(candidate) {
        dir.duplicate_count.insert(candidate.to_string(), 1);
        return format!("{}(1)", candidate);
    }
    candidate.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileId;

    #[test]
    fn test_unique_name_passes_through() {
        let mut dir = DirectoryNode::new(None, "");
        assert_eq!(rename_if_colliding(&mut dir, "notes"), "notes");
        assert!(dir.duplicate_count.is_empty());
    }

    #[test]
    fn test_first_collision_issues_suffix_one() {
        let mut dir = DirectoryNode::new(None, "");
        dir.files.insert("notes".to_string(), FileId(0));
        assert_eq!(rename_if_colliding(&mut dir, "notes"), "notes(1)");
        assert_eq!(dir.duplicate_count.get("notes"), Some(&1));
    }

    #[test]
    fn test_counter_is_monotonic_even_after_removal() {
        let mut dir = DirectoryNode::new(None, "");
        dir.files.insert("notes".to_string(), FileId(0));
        assert_eq!(rename_if_colliding(&mut dir, "notes"), "notes(1)");

        // entry that earned the suffix disappears, counter stays
        dir.files.shift_remove("notes");
        assert_eq!(rename_if_colliding(&mut dir, "notes"), "notes(2)");
        assert_eq!(rename_if_colliding(&mut dir, "notes"), "notes(3)");
    }

    #[test]
    fn test_directory_children_collide_too() {
        let mut dir = DirectoryNode::new(None, "");
        dir.child_directories
            .insert("docs".to_string(), crate::types::DirId(1));
        assert_eq!(rename_if_colliding(&mut dir, "docs"), "docs(1)");
    }
}
