use bid_sort::sort::{partition, quick_sort, quick_sort_all, selection_sort};
use bid_sort::store::BidStore;

mod common;

#[test]
fn test_selection_sort_example() {
    let mut store = common::store_from_titles(&["Wrench", "Hammer", "Drill", "Hammer"]);
    selection_sort(&mut store);
    assert_eq!(store.titles(), vec!["Drill", "Hammer", "Hammer", "Wrench"]);
}

#[test]
fn test_quick_sort_example() -> Result<(), anyhow::Error> {
    let mut store = common::store_from_titles(&["Wrench", "Hammer", "Drill", "Hammer"]);
    quick_sort(&mut store, 0, 3)?;
    assert_eq!(store.titles(), vec!["Drill", "Hammer", "Hammer", "Wrench"]);
    Ok(())
}

#[test]
fn test_empty_and_singleton() -> Result<(), anyhow::Error> {
    let mut empty = BidStore::new();
    assert_eq!(selection_sort(&mut empty), 0);
    quick_sort_all(&mut empty);
    quick_sort(&mut empty, 0, 0)?;
    assert!(empty.is_empty());

    let mut single = common::store_from_titles(&["Lamp"]);
    assert_eq!(selection_sort(&mut single), 0);
    quick_sort_all(&mut single);
    quick_sort(&mut single, 0, 0)?;
    assert_eq!(single.titles(), vec!["Lamp"]);
    Ok(())
}

#[test]
fn test_quick_sort_degenerate_range_is_untouched() -> Result<(), anyhow::Error> {
    let mut store = common::store_from_titles(&["c", "b", "a"]);
    quick_sort(&mut store, 2, 2)?;
    quick_sort(&mut store, 2, 0)?;
    // begin >= end is accepted even past the end of the store
    quick_sort(&mut store, 10, 5)?;
    assert_eq!(store.titles(), vec!["c", "b", "a"]);
    Ok(())
}

#[test]
fn test_quick_sort_out_of_range() {
    let mut store = common::store_from_titles(&["c", "b", "a"]);
    let result = quick_sort(&mut store, 0, 3);
    assert!(result.is_err());
    assert_eq!(store.titles(), vec!["c", "b", "a"]);
}

#[test]
fn test_quick_sort_sub_range() -> Result<(), anyhow::Error> {
    let mut store = common::store_from_titles(&["z", "d", "c", "b", "a", "y"]);
    quick_sort(&mut store, 1, 4)?;
    assert_eq!(store.titles(), vec!["z", "a", "b", "c", "d", "y"]);
    Ok(())
}

#[test]
fn test_byte_wise_order() -> Result<(), anyhow::Error> {
    let titles = ["apple", "Banana", "banana", "Apple", "apple pie", "_"];
    let expected = vec!["Apple", "Banana", "_", "apple", "apple pie", "banana"];

    let mut by_selection = common::store_from_titles(&titles);
    selection_sort(&mut by_selection);
    assert_eq!(by_selection.titles(), expected);

    let mut by_quick = common::store_from_titles(&titles);
    quick_sort(&mut by_quick, 0, titles.len() - 1)?;
    assert_eq!(by_quick.titles(), expected);
    Ok(())
}

#[test]
fn test_random_permutation_sorted() {
    for size in [2, 3, 10, 100, 1000] {
        let original = common::random_store(size, 1 + size / 4);

        let mut by_selection = original.clone();
        selection_sort(&mut by_selection);
        assert!(by_selection.is_sorted_by_title());
        assert_eq!(common::sorted_ids(&by_selection), common::sorted_ids(&original));

        let mut by_quick = original.clone();
        quick_sort_all(&mut by_quick);
        assert!(by_quick.is_sorted_by_title());
        assert_eq!(common::sorted_ids(&by_quick), common::sorted_ids(&original));

        assert_eq!(by_selection.titles(), by_quick.titles());
    }
}

#[test]
fn test_idempotent() {
    let mut store = common::random_store(500, 40);
    quick_sort_all(&mut store);
    let once = common::owned_titles(&store);
    quick_sort_all(&mut store);
    assert_eq!(common::owned_titles(&store), once);

    // nothing left to exchange
    assert_eq!(selection_sort(&mut store), 0);
    assert_eq!(common::owned_titles(&store), once);
}

#[test]
fn test_quick_sort_skewed_inputs() {
    let ascending: Vec<String> = (0..5000).map(|i| format!("{:05}", i)).collect();
    let descending: Vec<String> = ascending.iter().rev().cloned().collect();
    let equal: Vec<String> = vec!["Same".to_string(); 5000];
    let organ_pipe: Vec<String> = ascending.iter().take(2500)
        .chain(ascending.iter().take(2500).rev())
        .cloned()
        .collect();

    for titles in [ascending, descending, equal, organ_pipe] {
        let refs: Vec<&str> = titles.iter().map(|t| t.as_str()).collect();
        let mut store = common::store_from_titles(&refs);
        quick_sort_all(&mut store);
        assert!(store.is_sorted_by_title());
        assert_eq!(store.len(), 5000);
    }
}

#[test]
fn test_partition_boundary() {
    for _ in 0..50 {
        let mut store = common::random_store(64, 10);
        let end = store.len() - 1;
        let boundary = partition(&mut store, 0, end);
        assert!(boundary < end);

        let titles = common::owned_titles(&store);
        let left_max = titles[..=boundary].iter().max().unwrap();
        let right_min = titles[boundary + 1..].iter().min().unwrap();
        assert!(left_max <= right_min);
    }
}

#[test]
fn test_partition_two_elements() {
    let mut store = common::store_from_titles(&["b", "a"]);
    let boundary = partition(&mut store, 0, 1);
    assert_eq!(boundary, 0);
    assert_eq!(store.titles(), vec!["a", "b"]);
}

#[test]
fn test_selection_sort_swap_count() {
    let mut sorted = common::store_from_titles(&["a", "b", "c", "d"]);
    assert_eq!(selection_sort(&mut sorted), 0);

    let mut reversed = common::store_from_titles(&["d", "c", "b", "a"]);
    assert_eq!(selection_sort(&mut reversed), 2);
    assert_eq!(reversed.titles(), vec!["a", "b", "c", "d"]);
}

#[test]
#[should_panic]
fn test_partition_past_end_panics() {
    let mut store = common::store_from_titles(&["b", "a"]);
    partition(&mut store, 0, 2);
}
