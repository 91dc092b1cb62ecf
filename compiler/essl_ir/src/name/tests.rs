use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_name_layout() {
    let name = Name::new(7, 4242);
    assert_eq!(name.shard(), 7);
    assert_eq!(name.local(), 4242);

    let last = Name::new(15, Name::MAX_LOCAL);
    assert_eq!(last.shard(), 15);
    assert_eq!(last.local(), Name::MAX_LOCAL as usize);
}

#[test]
fn test_empty_name() {
    assert_eq!(Name::default(), Name::EMPTY);
    assert!(Name::EMPTY.is_empty());
    assert!(!Name::new(0, 1).is_empty());
}

#[test]
fn test_same_local_in_different_shards_differs() {
    use rustc_hash::FxHashSet;
    let mut set = FxHashSet::default();
    set.insert(Name::new(0, 1));
    set.insert(Name::new(0, 1));
    set.insert(Name::new(1, 1));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_name_debug() {
    assert_eq!(format!("{:?}", Name::new(2, 9)), "Name(2:9)");
}
