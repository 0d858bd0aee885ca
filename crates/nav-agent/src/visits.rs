//! Per-pedestrian record of visited rooms.

use nav_core::RoomId;

#[cfg(feature = "fx-hash")]
type RoomCounts = rustc_hash::FxHashMap<RoomId, u32>;
#[cfg(not(feature = "fx-hash"))]
type RoomCounts = std::collections::HashMap<RoomId, u32>;

/// How many times a pedestrian has entered each room.
///
/// Navigation registers a visit every time the pedestrian settles into a new
/// room; strategies read the counts to prefer unexplored rooms.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitLog {
    counts: RoomCounts,
}

impl VisitLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one entry into `room`.
    pub fn register(&mut self, room: RoomId) {
        *self.counts.entry(room).or_insert(0) += 1;
    }

    #[inline]
    pub fn count(&self, room: RoomId) -> u32 {
        self.counts.get(&room).copied().unwrap_or(0)
    }

    #[inline]
    pub fn has_visited(&self, room: RoomId) -> bool {
        self.count(room) > 0
    }

    /// Number of distinct rooms entered.
    pub fn distinct_rooms(&self) -> usize {
        self.counts.len()
    }

    /// Total entries across all rooms.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }
}
