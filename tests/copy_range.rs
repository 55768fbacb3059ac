// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Targeted tests for range copies across leaf and branch shapes.

use bigcollections::{BigList, BigListConfig};

// =============================================================================
// Helper functions
// =============================================================================

fn tiny() -> BigListConfig {
    return BigListConfig::new(2, 1).unwrap();
}

fn values(config: BigListConfig, from: u32, n: u32) -> BigList<u32> {
    let mut list = BigList::with_config(config);
    for i in from..from + n {
        list.push(i);
    }
    return list;
}

/// Vec version of a copy that may run past the end of `dst`.
fn model_copy(src: &[u32], i: usize, dst: &mut Vec<u32>, j: usize, n: usize) {
    let copied = src[i..i + n].to_vec();
    let overlap = n.min(dst.len() - j);
    dst[j..j + overlap].copy_from_slice(&copied[..overlap]);
    dst.extend_from_slice(&copied[overlap..]);
}

fn check_copy(src: &BigList<u32>, i: usize, dst: &mut BigList<u32>, j: usize, n: usize) {
    let src_before = src.to_vec();
    let mut expected = dst.to_vec();
    model_copy(&src_before, i, &mut expected, j, n);
    src.copy_range_to(i, dst, j, n).unwrap();
    assert_eq!(dst.to_vec(), expected);
    assert_eq!(src.to_vec(), src_before);
    dst.verify();
}

fn check_within(list: &mut BigList<u32>, i: usize, j: usize, n: usize) {
    let before = list.to_vec();
    let mut expected = before.clone();
    model_copy(&before, i, &mut expected, j, n);
    list.copy_within(i, j, n).unwrap();
    assert_eq!(list.to_vec(), expected);
    list.verify();
}

// =============================================================================
// Between lists
// =============================================================================

#[test]
fn leaf_to_leaf() {
    let src = values(tiny(), 0, 4);
    let mut dst = values(tiny(), 100, 4);
    assert_eq!((src.height(), dst.height()), (0, 0));
    check_copy(&src, 1, &mut dst, 0, 3);
}

#[test]
fn branch_into_leaf() {
    let src = values(tiny(), 0, 30);
    let mut dst = values(tiny(), 100, 4);
    assert!(src.height() > 0);
    check_copy(&src, 6, &mut dst, 1, 3);
}

#[test]
fn leaf_over_branch() {
    let src = values(tiny(), 0, 4);
    let mut dst = values(tiny(), 100, 30);
    check_copy(&src, 0, &mut dst, 6, 4);
}

#[test]
fn branch_to_branch_unaligned() {
    let src = values(tiny(), 0, 40);
    let mut dst = values(tiny(), 100, 40);
    check_copy(&src, 3, &mut dst, 10, 25);
}

#[test]
fn reversed_source() {
    let mut src = values(tiny(), 0, 40);
    src.reverse();
    let mut dst = values(tiny(), 100, 40);
    check_copy(&src, 5, &mut dst, 2, 30);
}

#[test]
fn reversed_destination() {
    let src = values(tiny(), 0, 40);
    let mut dst = values(tiny(), 100, 40);
    dst.reverse();
    check_copy(&src, 0, &mut dst, 7, 33);
}

#[test]
fn both_sides_partly_reversed() {
    let mut src = values(tiny(), 0, 40);
    src.reverse_range(4usize, 20usize).unwrap();
    let mut dst = values(tiny(), 100, 40);
    dst.reverse_range(10usize, 25usize).unwrap();
    dst.reverse();
    check_copy(&src, 2, &mut dst, 3, 30);
}

#[test]
fn copy_runs_past_destination_end() {
    let src = values(tiny(), 0, 40);
    let mut dst = values(tiny(), 100, 9);
    check_copy(&src, 10, &mut dst, 5, 30);
}

#[test]
fn copy_into_empty() {
    let src = values(tiny(), 0, 20);
    let mut dst = BigList::with_config(tiny());
    check_copy(&src, 4, &mut dst, 0, 12);
}

#[test]
fn different_shapes() {
    // Sparse source with lots of spare capacity.
    let mut src = BigList::with_capacity_and_config(200u32, tiny());
    for i in 0..60u32 {
        src.push(i);
    }
    for k in 0..10usize {
        src.remove_at(k * 4).unwrap();
    }
    let mut dst = values(tiny(), 100, 30);
    dst.trim_excess();
    check_copy(&src, 5, &mut dst, 12, 40);
}

#[test]
fn different_configs() {
    let src = values(BigListConfig::new(1, 1).unwrap(), 0, 50);
    let mut dst = values(BigListConfig::new(3, 2).unwrap(), 100, 50);
    check_copy(&src, 7, &mut dst, 11, 35);
    check_copy(&dst.clone(), 0, &mut values(BigListConfig::new(1, 1).unwrap(), 0, 20), 3, 40);
}

// =============================================================================
// Within one list
// =============================================================================

#[test]
fn within_one_leaf() {
    let mut list = values(tiny(), 0, 4);
    check_within(&mut list, 0, 1, 3);
    check_within(&mut list, 1, 0, 3);
}

#[test]
fn within_backward_overlap() {
    let mut list = values(tiny(), 0, 40);
    check_within(&mut list, 3, 9, 20);
}

#[test]
fn within_forward_overlap() {
    let mut list = values(tiny(), 0, 40);
    check_within(&mut list, 9, 3, 20);
}

#[test]
fn within_reversed_root() {
    let mut list = values(tiny(), 0, 40);
    list.reverse();
    check_within(&mut list, 2, 11, 25);
    check_within(&mut list, 11, 2, 25);
}

#[test]
fn within_partly_reversed() {
    let mut list = values(tiny(), 0, 40);
    list.reverse_range(8usize, 16usize).unwrap();
    check_within(&mut list, 5, 6, 30);
    check_within(&mut list, 6, 5, 30);
}

#[test]
fn within_past_end() {
    let mut list = values(tiny(), 0, 20);
    check_within(&mut list, 4, 15, 12);
}

#[test]
fn within_onto_itself() {
    let mut list = values(tiny(), 0, 20);
    check_within(&mut list, 3, 3, 10);
    assert_eq!(list.to_vec(), (0..20).collect::<Vec<_>>());
}
