//! Operation stream shared by the fuzz harness and the crash reproducer.
//!
//! Every operation is applied to a `BigList` with tiny leaves and to a
//! `Vec` model. Positions are given as fractions of the current length so
//! any byte string decodes to valid operations.

use bigcollections::{BigList, BigListConfig, Index};

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
pub enum FuzzOp {
    Push { value: u8 },
    Insert { pos_frac: u8, value: u8 },
    InsertMany { pos_frac: u8, len: u8 },
    Remove { pos_frac: u8 },
    RemoveRange { pos_frac: u8, len: u8 },
    Reverse,
    ReverseRange { pos_frac: u8, len: u8 },
    CopyWithin { src_frac: u8, dst_frac: u8, len: u8 },
    TrimExcess,
    SetCapacity { extra: u8 },
    Resize { len: u8, value: u8 },
    Truncate { pos_frac: u8 },
    Clear,
}

impl FuzzOp {
    pub fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 13;
        let rest = &bytes[1..];

        match op_type {
            0 if !rest.is_empty() => Some((FuzzOp::Push { value: rest[0] }, &rest[1..])),
            1 if rest.len() >= 2 => {
                let op = FuzzOp::Insert {
                    pos_frac: rest[0],
                    value: rest[1],
                };
                Some((op, &rest[2..]))
            }
            2 if rest.len() >= 2 => {
                let op = FuzzOp::InsertMany {
                    pos_frac: rest[0],
                    len: (rest[1] % 40).saturating_add(1), // 1-40 items
                };
                Some((op, &rest[2..]))
            }
            3 if !rest.is_empty() => Some((FuzzOp::Remove { pos_frac: rest[0] }, &rest[1..])),
            4 if rest.len() >= 2 => {
                let op = FuzzOp::RemoveRange {
                    pos_frac: rest[0],
                    len: rest[1] % 24,
                };
                Some((op, &rest[2..]))
            }
            5 => Some((FuzzOp::Reverse, rest)),
            6 if rest.len() >= 2 => {
                let op = FuzzOp::ReverseRange {
                    pos_frac: rest[0],
                    len: rest[1] % 24,
                };
                Some((op, &rest[2..]))
            }
            7 if rest.len() >= 3 => {
                let op = FuzzOp::CopyWithin {
                    src_frac: rest[0],
                    dst_frac: rest[1],
                    len: rest[2] % 24,
                };
                Some((op, &rest[3..]))
            }
            8 => Some((FuzzOp::TrimExcess, rest)),
            9 if !rest.is_empty() => Some((FuzzOp::SetCapacity { extra: rest[0] }, &rest[1..])),
            10 if rest.len() >= 2 => {
                let op = FuzzOp::Resize {
                    len: rest[0],
                    value: rest[1],
                };
                Some((op, &rest[2..]))
            }
            11 if !rest.is_empty() => Some((FuzzOp::Truncate { pos_frac: rest[0] }, &rest[1..])),
            12 => Some((FuzzOp::Clear, rest)),
            _ => None,
        }
    }
}

pub fn new_list() -> BigList<u32> {
    let config = match BigListConfig::new(2, 1) {
        Ok(config) => config,
        Err(err) => panic!("fuzz config rejected: {err}"),
    };
    return BigList::with_config(config);
}

/// Position inside `0..=len` (or `0..len` when `inclusive` is false).
fn position(frac: u8, len: usize, inclusive: bool) -> usize {
    if len == 0 {
        return 0;
    }
    let limit = if inclusive { len } else { len - 1 };
    return ((frac as usize) * len / 256).min(limit);
}

/// Apply `op` to both sides and panic on any divergence.
pub fn apply(list: &mut BigList<u32>, model: &mut Vec<u32>, op: FuzzOp, counter: &mut u32) {
    let len = model.len();
    match op {
        FuzzOp::Push { value } => {
            list.push(value as u32);
            model.push(value as u32);
        }
        FuzzOp::Insert { pos_frac, value } => {
            let pos = position(pos_frac, len, true);
            list.insert(pos, value as u32).unwrap();
            model.insert(pos, value as u32);
        }
        FuzzOp::InsertMany { pos_frac, len: count } => {
            let pos = position(pos_frac, len, true);
            let items: Vec<u32> = (0..count as u32).map(|i| *counter + i).collect();
            *counter += count as u32;
            list.insert_iter(pos, items.iter().copied()).unwrap();
            model.splice(pos..pos, items);
        }
        FuzzOp::Remove { pos_frac } => {
            if len > 0 {
                let pos = position(pos_frac, len, false);
                assert_eq!(list.remove_at(pos).unwrap(), model.remove(pos));
            }
        }
        FuzzOp::RemoveRange { pos_frac, len: count } => {
            let pos = position(pos_frac, len, true);
            let count = (count as usize).min(len - pos);
            list.remove_range(pos, count).unwrap();
            model.drain(pos..pos + count);
        }
        FuzzOp::Reverse => {
            list.reverse();
            model.reverse();
        }
        FuzzOp::ReverseRange { pos_frac, len: count } => {
            let pos = position(pos_frac, len, true);
            let count = (count as usize).min(len - pos);
            list.reverse_range(pos, count).unwrap();
            model[pos..pos + count].reverse();
        }
        FuzzOp::CopyWithin { src_frac, dst_frac, len: count } => {
            let src = position(src_frac, len, true);
            let dst = position(dst_frac, len, true);
            let count = (count as usize).min(len - src);
            list.copy_within(src, dst, count).unwrap();
            let copied: Vec<u32> = model[src..src + count].to_vec();
            let overlap = count.min(len - dst);
            model[dst..dst + overlap].copy_from_slice(&copied[..overlap]);
            model.extend_from_slice(&copied[overlap..]);
        }
        FuzzOp::TrimExcess => {
            list.trim_excess();
        }
        FuzzOp::SetCapacity { extra } => {
            list.set_capacity(len + extra as usize).unwrap();
        }
        FuzzOp::Resize { len: new_len, value } => {
            list.resize(new_len as usize, value as u32);
            model.resize(new_len as usize, value as u32);
        }
        FuzzOp::Truncate { pos_frac } => {
            let pos = position(pos_frac, len, true);
            list.truncate(pos).unwrap();
            model.truncate(pos);
        }
        FuzzOp::Clear => {
            list.clear();
            model.clear();
        }
    }

    assert_eq!(list.len(), Index::from(model.len()), "length mismatch after {op:?}");
    assert_eq!(&list.to_vec(), model, "content mismatch after {op:?}");
    list.verify();
}
