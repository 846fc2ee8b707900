//! File-level round trips through real files.

use proptest::prelude::*;

use randlist::{load_from_path, save_to_path, PersistError, RandList};
use randlist_testkit::generators::{list_from_params, random_list, ListParams};
use randlist_testkit::{rand_positions, three_node_list, THREE_NODE_ENCODING};

#[test]
fn three_node_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list.txt");

    let list = three_node_list();
    save_to_path(&list, &path).unwrap();

    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert_eq!(on_disk, THREE_NODE_ENCODING);

    let decoded = load_from_path(&path).unwrap();
    assert_eq!(decoded.len(), 3);
    assert_eq!(
        decoded.iter().collect::<Vec<_>>(),
        vec!["Node 1", "Node 2", "Node 3"]
    );
    // Node 1's forward reference is gone; the two backward ones survive.
    assert_eq!(rand_positions(&decoded), vec![None, Some(0), Some(1)]);
}

#[test]
fn empty_list_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");

    save_to_path(&RandList::new(), &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "-1\n");

    let decoded = load_from_path(&path).unwrap();
    assert!(decoded.is_empty());
    assert_eq!(decoded.head(), None);
    assert_eq!(decoded.tail(), None);
}

#[test]
fn large_generated_list_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("large.txt");

    let list = random_list(7, 5_000);
    save_to_path(&list, &path).unwrap();
    let decoded = load_from_path(&path).unwrap();

    assert_eq!(decoded.len(), 5_000);
    assert_eq!(
        decoded.iter().collect::<Vec<_>>(),
        list.iter().collect::<Vec<_>>()
    );
}

#[test]
fn second_save_is_byte_stable() {
    let dir = tempfile::tempdir().unwrap();
    let first_path = dir.path().join("first.txt");
    let second_path = dir.path().join("second.txt");

    save_to_path(&three_node_list(), &first_path).unwrap();
    let once = load_from_path(&first_path).unwrap();

    save_to_path(&once, &second_path).unwrap();
    let twice = load_from_path(&second_path).unwrap();

    let second_bytes = std::fs::read_to_string(&second_path).unwrap();
    let third_path = dir.path().join("third.txt");
    save_to_path(&twice, &third_path).unwrap();
    let third_bytes = std::fs::read_to_string(&third_path).unwrap();

    assert_eq!(second_bytes, third_bytes);
}

#[test]
fn missing_file_surfaces_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.txt");

    let err = load_from_path(&path).unwrap_err();
    match err {
        PersistError::Open { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unwritable_path_surfaces_open_error() {
    let dir = tempfile::tempdir().unwrap();
    // The directory itself is not a writable file target.
    let err = save_to_path(&RandList::new(), dir.path()).unwrap_err();
    assert!(matches!(err, PersistError::Open { .. }));
}

proptest! {
    // File I/O per case; keep the case count moderate.
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn arbitrary_lists_round_trip_through_files(params: ListParams) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");

        let list = list_from_params(&params);
        save_to_path(&list, &path).unwrap();
        let decoded = load_from_path(&path).unwrap();

        prop_assert_eq!(decoded.len(), list.len());
        prop_assert_eq!(
            decoded.iter().collect::<Vec<_>>(),
            list.iter().collect::<Vec<_>>()
        );

        let expected: Vec<Option<usize>> = rand_positions(&list)
            .into_iter()
            .enumerate()
            .map(|(position, target)| target.filter(|&t| t < position))
            .collect();
        prop_assert_eq!(rand_positions(&decoded), expected);
    }
}
