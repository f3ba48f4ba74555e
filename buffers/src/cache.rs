//! Bounded recency cache for vertex welding.
//!
//! [`RecencyCache`] remembers the last few source vertices emitted into a
//! growing render buffer, so corners that repeat a source vertex with
//! identical attributes can reuse the existing buffer index instead of
//! appending a duplicate.
//!
//! The cache is a fixed ring: insertions overwrite slots in cursor order,
//! so the entry evicted is the oldest *inserted* one, not the least
//! recently *used* one. A bounded ring keeps lookup and insertion
//! O(capacity) per corner with no per-mesh memory growth, at the cost of
//! missing repeats that fall outside the window; index-coherent triangle
//! streams keep their repeats inside the window in practice.
//!
//! # Thread Safety
//!
//! `RecencyCache` is not shared: each build call owns its own cache.

use std::fmt;

use bytemuck::Zeroable;

use crate::vertex::RenderVertex;

/// One ring slot: a source vertex id, the buffer index it was emitted at,
/// and the vertex data it was emitted with.
#[derive(Debug, Clone, Copy)]
struct CacheSlot {
    source_vertex: Option<u32>,
    buffer_index: u32,
    vertex: RenderVertex,
}

impl CacheSlot {
    fn empty() -> Self {
        Self {
            source_vertex: None,
            buffer_index: 0,
            vertex: RenderVertex::zeroed(),
        }
    }
}

/// A fixed-capacity ring of recently emitted vertices.
pub struct RecencyCache {
    slots: Vec<CacheSlot>,
    cursor: usize,
}

impl RecencyCache {
    /// Default ring capacity.
    pub const DEFAULT_CAPACITY: usize = 32;

    /// Create a cache with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) slots.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a cache with the given number of slots (clamped to at least 1).
    ///
    /// The capacity is fixed for the cache's lifetime.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: vec![CacheSlot::empty(); capacity],
            cursor: 0,
        }
    }

    /// Number of slots in the ring.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Look up a source vertex id.
    ///
    /// Scans the ring linearly and returns the buffer index and emitted
    /// vertex data of the first slot holding `source_vertex`, or `None`.
    pub fn find(&self, source_vertex: u32) -> Option<(u32, &RenderVertex)> {
        self.slots
            .iter()
            .find(|slot| slot.source_vertex == Some(source_vertex))
            .map(|slot| (slot.buffer_index, &slot.vertex))
    }

    /// Record an emitted vertex in the slot under the cursor and advance.
    ///
    /// The slot's previous entry is evicted regardless of how recently it
    /// was looked up. Inserting an id still present in an older slot
    /// leaves that older entry in place; [`find`] keeps returning the
    /// older entry until the ring evicts it.
    ///
    /// [`find`]: Self::find
    pub fn insert(&mut self, source_vertex: u32, buffer_index: u32, vertex: RenderVertex) {
        self.slots[self.cursor] = CacheSlot {
            source_vertex: Some(source_vertex),
            buffer_index,
            vertex,
        };
        self.cursor = (self.cursor + 1) % self.slots.len();
    }
}

impl Default for RecencyCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RecencyCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecencyCache")
            .field("capacity", &self.slots.len())
            .field("cursor", &self.cursor)
            .field(
                "occupied",
                &self
                    .slots
                    .iter()
                    .filter(|slot| slot.source_vertex.is_some())
                    .count(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex_with_uv(u: f32) -> RenderVertex {
        let mut v = RenderVertex::zeroed();
        v.uv = [u, 0.0];
        v
    }

    #[test]
    fn test_find_on_empty() {
        let cache = RecencyCache::new();
        assert!(cache.find(0).is_none());
        assert!(cache.find(42).is_none());
    }

    #[test]
    fn test_insert_and_find() {
        let mut cache = RecencyCache::new();
        cache.insert(7, 3, vertex_with_uv(0.5));

        let (buffer_index, vertex) = cache.find(7).unwrap();
        assert_eq!(buffer_index, 3);
        assert_eq!(vertex.uv, [0.5, 0.0]);
        assert!(cache.find(8).is_none());
    }

    #[test]
    fn test_capacity_clamped_to_one() {
        let mut cache = RecencyCache::with_capacity(0);
        assert_eq!(cache.capacity(), 1);
        cache.insert(1, 0, vertex_with_uv(0.0));
        cache.insert(2, 1, vertex_with_uv(0.0));
        assert!(cache.find(1).is_none());
        assert!(cache.find(2).is_some());
    }

    #[test]
    fn test_ring_eviction_order() {
        let mut cache = RecencyCache::with_capacity(4);
        for id in 0..4 {
            cache.insert(id, id, vertex_with_uv(0.0));
        }
        // Ring is full; the next insert evicts the oldest-inserted entry.
        cache.insert(100, 4, vertex_with_uv(0.0));
        assert!(cache.find(0).is_none());
        for id in 1..4 {
            assert!(cache.find(id).is_some());
        }
        assert!(cache.find(100).is_some());
    }

    #[test]
    fn test_eviction_ignores_lookups() {
        let mut cache = RecencyCache::with_capacity(2);
        cache.insert(1, 0, vertex_with_uv(0.0));
        cache.insert(2, 1, vertex_with_uv(0.0));
        // Looking up id 1 does not refresh its slot; the next insert
        // still evicts it (insertion order, not use order).
        assert!(cache.find(1).is_some());
        cache.insert(3, 2, vertex_with_uv(0.0));
        assert!(cache.find(1).is_none());
        assert!(cache.find(2).is_some());
    }

    #[test]
    fn test_duplicate_id_shadowed_by_older_slot() {
        let mut cache = RecencyCache::with_capacity(4);
        cache.insert(5, 0, vertex_with_uv(0.1));
        cache.insert(5, 9, vertex_with_uv(0.9));
        // First match in slot order wins until the older slot is evicted.
        let (buffer_index, vertex) = cache.find(5).unwrap();
        assert_eq!(buffer_index, 0);
        assert_eq!(vertex.uv, [0.1, 0.0]);

        cache.insert(6, 2, vertex_with_uv(0.0));
        cache.insert(7, 3, vertex_with_uv(0.0));
        // Cursor wraps; this evicts the older slot for id 5.
        cache.insert(8, 4, vertex_with_uv(0.0));
        let (buffer_index, vertex) = cache.find(5).unwrap();
        assert_eq!(buffer_index, 9);
        assert_eq!(vertex.uv, [0.9, 0.0]);
    }

    #[test]
    fn test_cursor_wraparound() {
        let mut cache = RecencyCache::with_capacity(3);
        for id in 0..9 {
            cache.insert(id, id, vertex_with_uv(0.0));
        }
        // Only the last 3 inserts survive.
        for id in 0..6 {
            assert!(cache.find(id).is_none());
        }
        for id in 6..9 {
            assert!(cache.find(id).is_some());
        }
    }
}
