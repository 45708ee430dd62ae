//! Single-writer embedding for concurrent hosts.
//!
//! The namespace engine is synchronous and single-threaded: every operation
//! completes fully before the next request runs. A concurrent host must
//! serialize whole requests, so that partial mutation (a half-finished
//! directory merge) is never observable from another caller.
//! [`SharedNamespace`] encodes that discipline as one mutex around the whole
//! tree.

use crate::namespace::Namespace;
use parking_lot::Mutex;
use std::sync::Arc;

/// Clonable handle to a namespace behind a single writer lock.
#[derive(Clone)]
pub struct SharedNamespace {
    inner: Arc<Mutex<Namespace>>,
}

impl SharedNamespace {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Namespace::new())),
        }
    }

    /// Run one whole request under the lock.
    pub fn with<R>(&self, op: impl FnOnce(&mut Namespace) -> R) -> R {
        let mut guard = self.inner.lock();
        op(&mut guard)
    }
}

impl Default for SharedNamespace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn segs(path: &str) -> Vec<String> {
        crate::command::parse_path(path)
    }

    #[test]
    fn test_parallel_creates_all_land() {
        let shared = SharedNamespace::new();

        let mut handles = vec![];
        for i in 0..8 {
            let shared = shared.clone();
            handles.push(thread::spawn(move || {
                shared.with(|fs| fs.make_directory(&segs(&format!("dir{}", i)), false))
            }));
        }
        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        let listing = shared.with(|fs| fs.list_contents(None)).unwrap();
        for i in 0..8 {
            assert!(listing.contains(&format!("dir{}", i)));
        }
    }

    #[test]
    fn test_colliding_creates_serialize_through_the_policy() {
        let shared = SharedNamespace::new();

        let mut handles = vec![];
        for _ in 0..8 {
            let shared = shared.clone();
            handles.push(thread::spawn(move || {
                shared.with(|fs| fs.create_file(&segs("notes")))
            }));
        }
        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        // each create ran whole under the lock, so every suffix is distinct
        let listing = shared.with(|fs| fs.list_contents(None)).unwrap();
        let names: Vec<&str> = listing.split(' ').collect();
        assert_eq!(names.len(), 8);
        assert!(names.contains(&"notes"));
        for i in 1..8 {
            let expected = format!("notes({})", i);
            assert!(names.iter().any(|n| *n == expected));
        }
    }
}
