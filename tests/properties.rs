use std::collections::HashSet;

use memfs::command::parse_path;
use memfs::namespace::Namespace;
use proptest::prelude::*;

fn split_listing(listing: &str) -> Vec<&str> {
    if listing.is_empty() {
        Vec::new()
    } else {
        listing.split(' ').collect()
    }
}

proptest! {
    #[test]
    fn created_absolute_paths_round_trip(names in prop::collection::vec("[a-z]{1,6}", 1..6)) {
        let mut fs = Namespace::new();
        let mut path = vec![String::new()];
        path.extend(names.iter().cloned());

        fs.make_directory(&path, true).unwrap();
        fs.change_directory(&path).unwrap();
        prop_assert_eq!(fs.working_directory(), format!("/{}", names.join("/")));
    }

    #[test]
    fn duplicate_suffixes_are_issued_in_order(n in 1usize..8) {
        let mut fs = Namespace::new();
        for _ in 0..n {
            fs.create_file(&parse_path("notes")).unwrap();
        }

        let listing = fs.list_contents(None).unwrap();
        let names = split_listing(&listing);
        prop_assert_eq!(names.len(), n);
        prop_assert!(names.contains(&"notes"));
        for i in 1..n {
            let expected = format!("notes({})", i);
            prop_assert!(names.iter().any(|name| *name == expected));
        }
    }

    #[test]
    fn merge_preserves_uniqueness_and_count(names in prop::collection::vec("[a-c]{1,2}", 0..8)) {
        let mut fs = Namespace::new();
        fs.make_directory(&parse_path("a/sub"), true).unwrap();
        fs.make_directory(&parse_path("b/sub"), true).unwrap();
        for name in &names {
            fs.create_file(&["a".to_string(), "sub".to_string(), name.clone()]).unwrap();
            fs.create_file(&["b".to_string(), "sub".to_string(), name.clone()]).unwrap();
        }

        fs.move_node(&parse_path("a/sub"), &parse_path("b")).unwrap();

        let listing = fs.list_contents(Some(&parse_path("b/sub"))).unwrap();
        let merged = split_listing(&listing);
        prop_assert_eq!(merged.len(), names.len() * 2);

        let unique: HashSet<&str> = merged.iter().copied().collect();
        prop_assert_eq!(unique.len(), merged.len());
        prop_assert_eq!(fs.list_contents(Some(&parse_path("a"))).unwrap(), "");
    }
}
