//! Buffer registry key allocation, serial and concurrent.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use cadenza::prelude::*;

use crate::helpers::constant_buffer;

#[test]
fn keys_are_sequential_from_zero() {
    let store = BufferStore::new();
    for expected in 0..8u64 {
        let key = store.insert(constant_buffer(1, 4, 0.0));
        assert_eq!(key, expected);
    }
    assert_eq!(store.len(), 8);
}

#[test]
fn removed_keys_are_never_reused() {
    let store = BufferStore::new();
    let first = store.insert(constant_buffer(1, 4, 0.0));
    assert!(store.remove(first));
    assert!(!store.remove(first));

    let second = store.insert(constant_buffer(1, 4, 0.0));
    assert_eq!(second, first + 1);
    assert!(store.get(first).is_none());
    assert!(store.get(second).is_some());
}

#[test]
fn stored_buffers_are_shared_not_copied() {
    let store = BufferStore::new();
    let buffer = constant_buffer(2, 16, 0.5);
    let key = store.insert(Arc::clone(&buffer));

    let fetched = store.get(key).unwrap();
    assert!(Arc::ptr_eq(&buffer, &fetched));
}

#[test]
fn concurrent_inserts_yield_unique_dense_keys() {
    let store = Arc::new(BufferStore::with_capacity(256));
    let threads = 8;
    let inserts_per_thread = 32;

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..inserts_per_thread)
                    .map(|_| store.insert(constant_buffer(1, 4, 0.0)))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut keys = Vec::new();
    for handle in handles {
        keys.extend(handle.join().unwrap());
    }

    let total = (threads * inserts_per_thread) as u64;
    let unique: HashSet<_> = keys.iter().copied().collect();
    assert_eq!(unique.len() as u64, total);
    assert_eq!(*keys.iter().max().unwrap(), total - 1);
    assert_eq!(store.len() as u64, total);
}

#[test]
fn store_feeds_players_by_key() {
    let store = BufferStore::new();
    let key = store.insert(constant_buffer(1, 32, 0.25));

    let player = SamplePlayer::new(store.get(key).unwrap());
    player.play();

    let mut out = AudioBuffer::new(1, 16);
    player.process(&mut out);
    assert_eq!(out.at(0, 0).unwrap(), 0.25);
}
