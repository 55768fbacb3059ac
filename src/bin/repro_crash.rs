//! Reproduce AFL crashes without AFL instrumentation
//!
//! Usage: cargo run --bin repro_crash -- <crash_file>

mod fuzz_ops;

use std::fs;

use fuzz_ops::{apply, new_list, FuzzOp};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <crash_file>", args[0]);
        std::process::exit(1);
    }
    let data = fs::read(&args[1]).expect("Failed to read file");

    eprintln!("Input: {} bytes", data.len());
    eprintln!("Hex: {}", data.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(" "));

    let mut list = new_list();
    let mut model = Vec::new();
    let mut counter = 1000u32;
    let mut remaining = data.as_slice();
    let mut op_num = 0;

    while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
        remaining = rest;
        op_num += 1;

        eprintln!("Op {}: {:?}", op_num, op);
        eprintln!("  Before: len={} height={} {:?}", model.len(), list.height(), model);

        apply(&mut list, &mut model, op, &mut counter);

        eprintln!("  After: len={} capacity={} {:?}", model.len(), list.capacity(), model);
    }

    eprintln!("\nAll checks passed!");
}
