//! AFL fuzz harness for BigList
//!
//! Decodes the input into a stream of list operations and runs them
//! against a `Vec` model. After every operation the contents must match
//! and the tree must pass its structural self-check.

mod fuzz_ops;

use afl::fuzz;
use fuzz_ops::{apply, new_list, FuzzOp};

fn main() {
    fuzz!(|data: &[u8]| {
        let mut list = new_list();
        let mut model = Vec::new();
        let mut counter = 1000u32;
        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;
            apply(&mut list, &mut model, op, &mut counter);
        }

        // A cloned list must compare equal and stay independent
        let snapshot = list.clone();
        assert_eq!(snapshot, list);
        list.push(0);
        assert_eq!(snapshot.len() + 1u32, list.len());
    });
}
