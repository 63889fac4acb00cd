use super::*;
use std::collections::HashSet;

#[test]
fn every_icon_has_path_data() {
    for icon in Icon::ALL {
        let paths = icon.paths();
        assert!(!paths.is_empty(), "{icon:?} has no paths");
        for d in paths {
            assert!(d.starts_with('M'), "{icon:?} path must start with a move: {d}");
        }
    }
}

#[test]
fn all_lists_each_variant_once() {
    let unique = Icon::ALL.iter().collect::<HashSet<_>>();
    assert_eq!(unique.len(), Icon::ALL.len());
}

#[test]
fn labels_are_nonempty() {
    assert!(Icon::ALL.iter().all(|icon| !icon.label().is_empty()));
    assert_eq!(Icon::Github.label(), "GitHub");
}
