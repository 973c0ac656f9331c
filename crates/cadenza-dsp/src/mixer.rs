//! Lock-free summing bus.

use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::debug;

use cadenza_core::AudioBuffer;

use crate::AudioSource;

/// Sums a set of child sources into one output, lock-free on both sides.
///
/// The source list is published as an immutable snapshot behind an
/// [`ArcSwap`]. Mutation is read-copy-update: build a new list from the
/// current one and swap it in atomically. The render thread loads the
/// snapshot once per `process` call and never observes a half-applied
/// edit; a snapshot it is still iterating stays alive through its `Arc`
/// even after being replaced.
pub struct Mixer {
    sources: ArcSwap<Vec<Arc<dyn AudioSource>>>,
}

impl Mixer {
    pub fn new() -> Self {
        Self {
            sources: ArcSwap::from_pointee(Vec::new()),
        }
    }

    /// Appends a source. Safe to call from any control thread while the
    /// render thread is processing; concurrent adds all land.
    pub fn add_source(&self, source: Arc<dyn AudioSource>) {
        self.sources.rcu(|current| {
            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend(current.iter().cloned());
            next.push(Arc::clone(&source));
            next
        });
        debug!(sources = self.len(), "added mixer source");
    }

    /// Detaches every source by publishing an empty snapshot. Sources
    /// still render to completion in any `process` call that loaded the
    /// previous snapshot first.
    pub fn clear_sources(&self) {
        self.sources.store(Arc::new(Vec::new()));
        debug!("cleared mixer sources");
    }

    /// Number of sources in the current snapshot.
    pub fn len(&self) -> usize {
        self.sources.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.load().is_empty()
    }
}

impl Default for Mixer {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSource for Mixer {
    fn process(&self, buffer: &mut AudioBuffer) {
        let snapshot = self.sources.load();
        for source in snapshot.iter() {
            source.process(buffer);
        }
    }

    fn is_finished(&self) -> bool {
        let snapshot = self.sources.load();
        snapshot.iter().all(|source| source.is_finished())
    }
}
