//! Control-plane registry of shared, immutable audio buffers.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::AudioBuffer;

/// Key assigned to a stored buffer. Strictly increasing, never reused.
pub type BufferKey = u64;

#[derive(Default)]
struct Inner {
    next_key: BufferKey,
    entries: HashMap<BufferKey, Arc<AudioBuffer>>,
}

/// Concurrent key-to-buffer cache for the control plane.
///
/// Hands out shared, read-only buffer handles by integer key. Readers
/// proceed concurrently; inserts and removals serialize with each other.
/// Nothing on the render path touches this store, so an ordinary
/// reader-writer lock is fine here.
#[derive(Default)]
pub struct BufferStore {
    inner: RwLock<Inner>,
}

impl BufferStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-reserves space for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        debug!(capacity, "buffer store initialized");
        Self {
            inner: RwLock::new(Inner {
                next_key: 0,
                entries: HashMap::with_capacity(capacity),
            }),
        }
    }

    /// Stores a shared buffer and returns its key. Each call consumes one
    /// key from the monotonic counter.
    pub fn insert(&self, buffer: Arc<AudioBuffer>) -> BufferKey {
        let mut inner = self.inner.write();
        let key = inner.next_key;
        inner.next_key += 1;
        inner.entries.insert(key, buffer);
        debug!(key, "buffer stored");
        key
    }

    /// Looks up a buffer; `None` when absent.
    pub fn get(&self, key: BufferKey) -> Option<Arc<AudioBuffer>> {
        self.inner.read().entries.get(&key).cloned()
    }

    /// Removes an entry, reporting whether anything was removed. The key
    /// is never reused afterwards.
    pub fn remove(&self, key: BufferKey) -> bool {
        let removed = self.inner.write().entries.remove(&key).is_some();
        if removed {
            debug!(key, "buffer removed");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
