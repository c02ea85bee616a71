#![no_main]
use libfuzzer_sys::arbitrary::{self, Arbitrary};
use libfuzzer_sys::fuzz_target;

use slotpool::{ItemRef, SlotPool};

#[derive(Arbitrary, Debug)]
struct Target {
    ctor: Constructor,
    ops: Vec<Op>,
}

#[derive(Arbitrary, Debug)]
enum Constructor {
    New,
    WithCapacity(u8),
}

#[derive(Arbitrary, Debug)]
enum Op {
    Reserve(u8),
    Insert,
    InsertWithKey,
    Remove(usize),
    GetAt(usize),
    KeyAt(usize),
    Resolve(usize),
    Retain(Vec<bool>),
    Clear,
    Drain,
}

fuzz_target!(|data: Target| {
    let mut pool = match data.ctor {
        Constructor::New => SlotPool::new(),
        Constructor::WithCapacity(n) => SlotPool::with_capacity(n as usize),
    };

    let mut keys = Vec::new();

    for op in data.ops {
        match op {
            Op::Reserve(n) => pool.reserve(n as usize),
            Op::Insert => keys.push(pool.insert(0u64)),
            Op::InsertWithKey => keys.push(pool.insert_with_key(|k| u64::from(k.index()))),
            Op::Remove(k) => {
                if let Some(k) = keys.get(k) {
                    pool.remove(*k);
                } else {
                    return;
                }
            }
            Op::GetAt(pos) => {
                let _ = pool.get_at(pos);
            }
            Op::KeyAt(pos) => {
                // A dense position must round-trip through its owning key.
                if let Some(key) = pool.key_at(pos) {
                    assert_eq!(pool.get(key), pool.get_at(pos));
                }
            }
            Op::Resolve(k) => {
                if let Some(k) = keys.get(k) {
                    let _ = ItemRef::new(Some(&pool), *k).get();
                } else {
                    return;
                }
            }
            Op::Retain(s) => {
                let mut i = s.into_iter();
                pool.retain(|_k, _v| i.next().unwrap_or(false));
            }
            Op::Clear => pool.clear(),
            Op::Drain => {
                pool.drain();
            }
        }
    }
});
