// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Tests for the public BigList API.

use bigcollections::{BigList, BigListConfig, BigListError, Index};

// =============================================================================
// Helper functions
// =============================================================================

/// Four elements per leaf, two children per branch.
fn tiny() -> BigListConfig {
    return BigListConfig::new(2, 1).unwrap();
}

fn range(n: u32) -> BigList<u32> {
    let mut list = BigList::with_config(tiny());
    for i in 0..n {
        list.push(i);
    }
    return list;
}

fn idx(v: u64) -> Index {
    return Index::from(v);
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn push_grows_levels() {
    let mut list: BigList<u32> = BigList::with_config(tiny());
    for i in 0..10u32 {
        list.push(i);
        list.verify();
        match i {
            3 => assert_eq!(list.height(), 0, "four elements fit one leaf"),
            4 => assert_eq!(list.height(), 1, "fifth element promotes the leaf"),
            8 => assert_eq!(list.height(), 2, "ninth element adds a level"),
            _ => {}
        }
    }
    assert_eq!(list.len(), idx(10));
    assert_eq!(list.get_range(0u32, 10u32).unwrap().to_vec(), (0..10).collect::<Vec<_>>());
}

#[test]
fn remove_middle_range() {
    let mut list = range(16);
    list.remove_range(4u32, 8u32).unwrap();
    assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 12, 13, 14, 15]);
    list.verify();
}

#[test]
fn reverse_then_push() {
    let mut list = range(8);
    list.reverse();
    assert_eq!(list.get_range(0u32, 8u32).unwrap().to_vec(), vec![7, 6, 5, 4, 3, 2, 1, 0]);
    list.push(8);
    assert_eq!(list.to_vec(), vec![7, 6, 5, 4, 3, 2, 1, 0, 8]);
    list.verify();
}

#[test]
fn reverse_twice_is_identity() {
    let mut list = range(37);
    list.reverse();
    list.reverse();
    assert_eq!(list.to_vec(), (0..37).collect::<Vec<_>>());
}

// =============================================================================
// Element access
// =============================================================================

#[test]
fn first_and_last() {
    let mut list = range(20);
    assert_eq!(list.first(), Some(&0));
    assert_eq!(list.last(), Some(&19));
    list.reverse();
    assert_eq!(list.first(), Some(&19));
    assert_eq!(list.last(), Some(&0));

    let empty: BigList<u32> = BigList::new();
    assert_eq!(empty.first(), None);
    assert_eq!(empty.last(), None);
}

#[test]
fn set_returns_previous() {
    let mut list = range(12);
    assert_eq!(list.set(5u32, 50).unwrap(), 5);
    assert_eq!(list.get(5u32), Some(&50));
    assert_eq!(
        list.set(12u32, 0),
        Err(BigListError::IndexOutOfRange {
            index: idx(12),
            length: idx(12)
        })
    );
}

#[test]
fn set_or_push_appends_at_end() {
    let mut list = range(3);
    list.set_or_push(3u32, 30).unwrap();
    list.set_or_push(0u32, 10).unwrap();
    assert_eq!(list.to_vec(), vec![10, 1, 2, 30]);
    assert!(list.set_or_push(9u32, 0).is_err());
}

// =============================================================================
// Insertion and removal
// =============================================================================

#[test]
fn insert_everywhere() {
    let mut list = range(10);
    let mut model: Vec<u32> = (0..10).collect();
    for (k, pos) in [0usize, 11, 5, 3, 13, 7].into_iter().enumerate() {
        list.insert(pos, 100 + k as u32).unwrap();
        model.insert(pos, 100 + k as u32);
        list.verify();
    }
    assert_eq!(list.to_vec(), model);
    assert!(matches!(list.insert(100u32, 0), Err(BigListError::IndexOutOfRange { .. })));
}

#[test]
fn remove_then_insert_restores() {
    let mut list = range(30);
    for i in [0u32, 29, 13, 4] {
        let value = list.remove_at(i).unwrap();
        list.insert(i, value).unwrap();
    }
    assert_eq!(list.to_vec(), (0..30).collect::<Vec<_>>());
    list.verify();
}

#[test]
fn pop_until_empty() {
    let mut list = range(9);
    for expected in (0..9).rev() {
        assert_eq!(list.pop(), Some(expected));
        list.verify();
    }
    assert_eq!(list.pop(), None);
    assert!(list.is_empty());
}

#[test]
fn insert_list_splices() {
    let mut list = range(13);
    let other: BigList<u32> = BigList::from_iter_with_config(100..109, tiny());
    list.insert_list(6u32, &other).unwrap();
    let mut model: Vec<u32> = (0..13).collect();
    model.splice(6..6, 100..109);
    assert_eq!(list.to_vec(), model);
    list.verify();
}

#[test]
fn insert_iter_into_reversed() {
    let mut list = range(10);
    list.reverse();
    list.insert_iter(4u32, [50, 51, 52]).unwrap();
    assert_eq!(list.to_vec(), vec![9, 8, 7, 6, 50, 51, 52, 5, 4, 3, 2, 1, 0]);
    list.verify();
}

#[test]
fn append_and_extend() {
    let mut list = range(5);
    let other = range(6);
    list.append_list(&other);
    list.extend([7u32, 8]);
    assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4, 0, 1, 2, 3, 4, 5, 7, 8]);
    list.verify();
}

#[test]
fn truncate_and_clear() {
    let mut list = range(25);
    list.truncate(10u32).unwrap();
    assert_eq!(list.to_vec(), (0..10).collect::<Vec<_>>());
    assert!(list.truncate(11u32).is_err());
    let capacity = list.capacity();
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.capacity(), capacity);
    list.push(1);
    assert_eq!(list.to_vec(), vec![1]);
    list.verify();
}

#[test]
fn resize_fills_and_truncates() {
    let mut list = range(6);
    list.resize(20u32, 7);
    list.verify();
    let mut expected: Vec<u32> = (0..6).collect();
    expected.resize(20, 7);
    assert_eq!(list.to_vec(), expected);

    list.reverse();
    list.resize(23u32, 9);
    expected.reverse();
    expected.extend([9, 9, 9]);
    assert_eq!(list.to_vec(), expected);

    list.resize(4u32, 0);
    assert_eq!(list.to_vec(), expected[..4].to_vec());
    list.verify();
}

#[test]
fn remove_value_first_match() {
    let mut list: BigList<u32> = BigList::from_iter_with_config([1, 2, 3, 2, 1], tiny());
    assert!(list.remove_value(&2));
    assert_eq!(list.to_vec(), vec![1, 3, 2, 1]);
    assert!(!list.remove_value(&9));
}

#[test]
fn remove_range_errors() {
    let mut list = range(5);
    assert_eq!(
        list.remove_range(3u32, 3u32),
        Err(BigListError::RangeOutOfBounds {
            index: idx(3),
            count: idx(3),
            length: idx(5)
        })
    );
    list.remove_range(5u32, 0u32).unwrap();
    assert_eq!(list.len(), idx(5));
}

// =============================================================================
// Capacity
// =============================================================================

#[test]
fn capacity_changes_keep_contents() {
    let mut list = range(20);
    list.set_capacity(200u32).unwrap();
    assert_eq!(list.capacity(), idx(200));
    assert_eq!(list.len(), idx(20));
    list.verify();
    list.set_capacity(20u32).unwrap();
    assert_eq!(list.capacity(), idx(20));
    assert_eq!(list.to_vec(), (0..20).collect::<Vec<_>>());
    list.verify();
    assert_eq!(
        list.set_capacity(19u32),
        Err(BigListError::CapacityBelowLength {
            capacity: idx(19),
            length: idx(20)
        })
    );
}

#[test]
fn shrink_after_sparse_removals() {
    let mut list = range(64);
    for i in (0..64u32).rev().step_by(3) {
        list.remove_at(i).unwrap();
    }
    let model: Vec<u32> = (0..64).filter(|i| (63 - i) % 3 != 0).collect();
    list.trim_excess();
    assert_eq!(list.capacity(), Index::from(model.len()));
    assert_eq!(list.to_vec(), model);
    list.verify();
}

#[test]
fn with_capacity_starts_empty() {
    let list: BigList<u8> = BigList::with_capacity_and_config(100u32, tiny());
    assert!(list.is_empty());
    assert_eq!(list.capacity(), idx(100));
    list.verify();
}

#[test]
fn reserve_never_drops() {
    let mut list = range(7);
    list.reserve(50u32);
    assert!(list.capacity() >= idx(57));
    assert_eq!(list.len(), idx(7));
    list.ensure_capacity(3u32);
    assert!(list.capacity() >= idx(57));
}

// =============================================================================
// Ranges and copying
// =============================================================================

#[test]
fn get_range_of_reversed() {
    let mut list = range(20);
    list.reverse();
    let part = list.get_range(3u32, 6u32).unwrap();
    assert_eq!(part.to_vec(), vec![16, 15, 14, 13, 12, 11]);
    assert!(list.get_range(15u32, 6u32).is_err());
}

#[test]
fn set_range_overwrites() {
    let mut list = range(12);
    let patch: BigList<u32> = BigList::from_iter_with_config([90, 91, 92, 93, 94], tiny());
    list.set_range(6u32, &patch).unwrap();
    assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4, 5, 90, 91, 92, 93, 94, 11]);
    assert!(list.set_range(8u32, &patch).is_err());
}

#[test]
fn replace_with_copies() {
    let mut list = range(3);
    let other = range(11);
    list.replace_with(&other);
    assert_eq!(list, other);
    assert_eq!(list.get(10u32), Some(&10));
}

#[test]
fn replace_with_keeps_config() {
    let mut list = range(3);
    let wide = BigListConfig::new(5, 3).unwrap();
    let other: BigList<u32> = BigList::from_iter_with_config(0..100, wide);
    list.replace_with(&other);
    assert_eq!(list.config(), tiny());
    assert_eq!(list, other);
    assert_eq!(list.capacity(), idx(100));
    list.push(100);
    assert_eq!(list.last(), Some(&100));
    list.verify();
}

#[test]
fn copy_range_to_grows_destination() {
    let src = range(10);
    let mut dest: BigList<u32> = BigList::from_iter_with_config([100, 101, 102], tiny());
    src.copy_range_to(2u32, &mut dest, 1u32, 6u32).unwrap();
    assert_eq!(dest.to_vec(), vec![100, 2, 3, 4, 5, 6, 7]);
    dest.verify();
    assert!(src.copy_range_to(0u32, &mut dest, 8u32, 1u32).is_err());
}

#[test]
fn copy_within_overlapping_forward() {
    let mut list = range(20);
    list.copy_within(2u32, 5u32, 10u32).unwrap();
    let mut model: Vec<u32> = (0..20).collect();
    model.copy_within(2..12, 5);
    assert_eq!(list.to_vec(), model);
    list.verify();
}

#[test]
fn copy_within_past_end() {
    let mut list = range(10);
    list.copy_within(0u32, 7u32, 6u32).unwrap();
    assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4, 5, 6, 0, 1, 2, 3, 4, 5]);
    list.verify();
}

#[test]
fn reverse_range_middle() {
    let mut list = range(20);
    list.reverse_range(3u32, 11u32).unwrap();
    let mut model: Vec<u32> = (0..20).collect();
    model[3..14].reverse();
    assert_eq!(list.to_vec(), model);
    list.verify();
}

#[test]
fn insert_into_full_binary_root() {
    let mut list: BigList<u32> = BigList::with_capacity_and_config(78u32, tiny());
    list.extend(0..21);
    list.insert(5u32, 999).unwrap();
    let mut expected: Vec<u32> = (0..21).collect();
    expected.insert(5, 999);
    assert_eq!(list.to_vec(), expected);
    assert!(list.capacity() <= idx(256));
    list.verify();
}

#[test]
fn insert_after_exact_capacity() {
    for capacity in 1..40u32 {
        for at in [0, capacity / 2, capacity] {
            let mut list: BigList<u32> = BigList::with_capacity_and_config(capacity, tiny());
            list.extend(0..capacity);
            list.insert(at, 999).unwrap();
            let mut expected: Vec<u32> = (0..capacity).collect();
            expected.insert(at as usize, 999);
            assert_eq!(list.to_vec(), expected, "capacity {capacity}, insert at {at}");
            assert!(list.capacity() <= idx(8 * capacity as u64 + 8));
            list.verify();
        }
    }
}

#[test]
fn trim_excess_keeps_small_slack() {
    let mut list: BigList<u32> = BigList::with_capacity_and_config(11u32, tiny());
    list.extend(0..9);
    list.trim_excess();
    assert_eq!(list.capacity(), idx(11));
    list.truncate(8u32).unwrap();
    list.trim_excess();
    assert_eq!(list.capacity(), idx(8));
    list.verify();
}

// =============================================================================
// Search, iteration and traits
// =============================================================================

#[test]
fn search() {
    let list: BigList<u32> = BigList::from_iter_with_config([5, 6, 7, 6, 5], tiny());
    assert!(list.contains(&7));
    assert!(!list.contains(&8));
    assert_eq!(list.index_of(&6), Some(idx(1)));
    assert_eq!(list.last_index_of(&6), Some(idx(3)));
    assert_eq!(list.index_of(&9), None);
}

#[test]
fn search_in_range() {
    let list: BigList<u32> = BigList::from_iter_with_config([5, 6, 7, 6, 5, 8, 6], tiny());
    assert_eq!(list.index_of_in(&6, 2u32, 5u32), Ok(Some(idx(3))));
    assert_eq!(list.last_index_of_in(&6, 0u32, 5u32), Ok(Some(idx(3))));
    assert_eq!(list.last_index_of_in(&6, 0u32, 3u32), Ok(Some(idx(1))));
    assert_eq!(list.index_of_in(&5, 1u32, 3u32), Ok(None));
    assert_eq!(list.contains_in(&8, 0u32, 5u32), Ok(false));
    assert_eq!(list.contains_in(&8, 4u32, 2u32), Ok(true));
    assert_eq!(list.index_of_in(&5, 7u32, 0u32), Ok(None));
    assert_eq!(
        list.index_of_in(&5, 6u32, 2u32),
        Err(BigListError::RangeOutOfBounds {
            index: idx(6),
            count: idx(2),
            length: idx(7)
        })
    );
    assert!(list.contains_in(&5, 8u32, 0u32).is_err());
    assert!(list.last_index_of_in(&5, 0u32, 8u32).is_err());
}

#[test]
fn search_reversed_range() {
    let mut list = range(30);
    list.reverse_range(5u32, 20u32).unwrap();
    // positions 5..25 now hold 24 down to 5
    assert_eq!(list.index_of_in(&20, 0u32, 30u32), Ok(Some(idx(9))));
    assert_eq!(list.last_index_of_in(&24, 0u32, 10u32), Ok(Some(idx(5))));
    assert_eq!(list.iter_range(8u32, 3u32).unwrap().copied().collect::<Vec<_>>(), vec![21, 20, 19]);
}

#[test]
fn contains_subsequence() {
    let list: BigList<u32> = BigList::from_iter_with_config([1, 2, 1, 2, 3, 4], tiny());
    assert!(list.contains_seq(&[1, 2, 3]));
    assert!(list.contains_seq(&[4]));
    assert!(!list.contains_seq(&[3, 2]));
    assert!(!list.contains_seq(&[]));
    assert!(!list.contains_seq(&[1, 2, 1, 2, 3, 4, 5]));
    assert_eq!(list.contains_seq_in(&[1, 2, 3], 0u32, 4u32), Ok(false));
    assert_eq!(list.contains_seq_in(&[1, 2, 3], 2u32, 3u32), Ok(true));
    assert_eq!(list.contains_seq_in(&[2], 3u32, 0u32), Ok(false));
    assert!(list.contains_seq_in(&[2], 5u32, 2u32).is_err());
}

#[test]
fn contains_any_of_set() {
    let list: BigList<u32> = BigList::from_iter_with_config([3, 3, 4, 3, 9], tiny());
    assert!(list.contains_any(&[7, 9]));
    assert!(!list.contains_any(&[7, 8]));
    assert!(!list.contains_any(&[]));
    assert_eq!(list.contains_any_in(&[9], 0u32, 4u32), Ok(false));
    assert_eq!(list.contains_any_in(&[4], 1u32, 2u32), Ok(true));
    assert!(list.contains_any_in(&[4], 4u32, 2u32).is_err());

    assert!(list.contains_any_excluding(&[3, 4]));
    assert!(!list.contains_any_excluding(&[3, 4, 9]));
    assert_eq!(list.contains_any_excluding_in(&[3, 4], 0u32, 4u32), Ok(false));
    assert_eq!(list.contains_any_excluding_in(&[3], 0u32, 3u32), Ok(true));
    assert_eq!(list.contains_any_excluding_in(&[], 2u32, 0u32), Ok(false));
    assert!(list.contains_any_excluding_in(&[3], 3u32, 3u32).is_err());
}

#[test]
fn fill_and_clear_range() {
    let mut list = range(30);
    list.reverse_range(4u32, 12u32).unwrap();
    list.fill_range(10u32, 8u32, 7).unwrap();
    let mut expected: Vec<u32> = (0..30).collect();
    expected[4..16].reverse();
    expected[10..18].fill(7);
    assert_eq!(list.to_vec(), expected);
    let capacity = list.capacity();

    list.clear_range(0u32, 3u32).unwrap();
    expected[0..3].fill(0);
    assert_eq!(list.to_vec(), expected);
    assert_eq!(list.capacity(), capacity);
    list.verify();

    assert_eq!(
        list.clear_range(25u32, 6u32),
        Err(BigListError::RangeOutOfBounds {
            index: idx(25),
            count: idx(6),
            length: idx(30)
        })
    );
    list.clear_range(30u32, 0u32).unwrap();
    assert_eq!(list.to_vec(), expected);
}

#[test]
fn iterate_by_reference() {
    let list = range(15);
    let mut sum = 0;
    for item in &list {
        sum += item;
    }
    assert_eq!(sum, (0..15).sum());
    assert_eq!(list.iter().rev().next(), Some(&14));
    assert_eq!(list.iter().size_hint(), (15, Some(15)));
}

#[test]
fn equality_and_hash() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let a = range(9);
    let b: BigList<u32> = (0..9).collect();
    assert_eq!(a, b);

    let hash = |list: &BigList<u32>| {
        let mut h = DefaultHasher::new();
        list.hash(&mut h);
        h.finish()
    };
    assert_eq!(hash(&a), hash(&b));

    let mut c = a.clone();
    c.push(9);
    assert_ne!(a, c);
}

#[test]
fn debug_prints_as_list() {
    let mut list = range(4);
    list.reverse();
    assert_eq!(format!("{list:?}"), "[3, 2, 1, 0]");
}

#[test]
fn clone_is_independent() {
    let mut a = range(10);
    let b = a.clone();
    a.set(0u32, 99).unwrap();
    assert_eq!(b.get(0u32), Some(&0));
}

#[test]
fn config_validation() {
    assert!(BigListConfig::new(0, 4).is_err());
    assert!(BigListConfig::new(4, 25).is_err());
    let config = BigListConfig::default().with_leaf_bits(3).unwrap();
    assert_eq!(config.leaf_size(), 8);
    let list: BigList<u8> = BigList::with_config(config);
    assert_eq!(list.config(), config);
}
