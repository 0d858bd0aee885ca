//! The read-only graph contract consumed by navigation.

use nav_core::{DoorId, RoomId};
use nav_geometry::{Point2, Segment};

// ── CrossingPoints ────────────────────────────────────────────────────────────

/// The pair of points used to traverse a door: `first` on the source room's
/// boundary, `second` on the target room's.  They coincide when the two rooms
/// share the door's edge.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossingPoints {
    pub first:  Point2,
    pub second: Point2,
}

impl CrossingPoints {
    #[inline]
    pub fn new(first: Point2, second: Point2) -> Self {
        Self { first, second }
    }

    /// Both crossing points at the same location.
    #[inline]
    pub fn at(point: Point2) -> Self {
        Self { first: point, second: point }
    }

    /// `true` if the points coincide, so the second approach can be skipped.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.first.fuzzy_eq(self.second)
    }

    /// The same crossing walked in the opposite direction.
    #[inline]
    pub fn reversed(self) -> Self {
        Self { first: self.second, second: self.first }
    }

    #[inline]
    pub fn as_segment(&self) -> Segment {
        Segment::new(self.first, self.second)
    }
}

// ── RegionGraph ───────────────────────────────────────────────────────────────

/// Read-only view of a directed graph of convex rooms.
///
/// Room and door ids are dense indices; passing an id that does not belong
/// to the graph is a caller bug and implementations may panic.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: every agent queries the same graph,
/// possibly from several worker threads at once, and the graph is never
/// mutated while a simulation round is in flight.
pub trait RegionGraph: Send + Sync {
    fn room_count(&self) -> usize;

    /// Boundary-inclusive point containment.
    fn contains(&self, room: RoomId, point: Point2) -> bool;

    fn centroid(&self, room: RoomId) -> Point2;

    /// Doors leaving `room`, in a stable order.
    fn outgoing_doors(&self, room: RoomId) -> &[DoorId];

    fn source(&self, door: DoorId) -> RoomId;

    fn target(&self, door: DoorId) -> RoomId;

    fn crossing_points(&self, door: DoorId) -> CrossingPoints;

    /// The first room, in ascending `RoomId` order, containing `point`.
    fn room_containing(&self, point: Point2) -> Option<RoomId> {
        (0..self.room_count() as u32)
            .map(RoomId)
            .find(|&room| self.contains(room, point))
    }

    /// Distinct rooms reachable through one door, in door order.
    fn neighbors(&self, room: RoomId) -> Vec<RoomId> {
        let mut out: Vec<RoomId> = Vec::new();
        for &door in self.outgoing_doors(room) {
            let to = self.target(door);
            if !out.contains(&to) {
                out.push(to);
            }
        }
        out
    }

    /// Distinct rooms joined to `room` by a door in either direction:
    /// targets of its outgoing doors first, then sources of doors leading
    /// into it in ascending `RoomId` order.
    fn adjacent_rooms(&self, room: RoomId) -> Vec<RoomId> {
        let mut out = self.neighbors(room);
        for other in (0..self.room_count() as u32).map(RoomId) {
            if other != room
                && !out.contains(&other)
                && self.outgoing_doors(other).iter().any(|&d| self.target(d) == room)
            {
                out.push(other);
            }
        }
        out
    }

    /// The first door from `from` into `to`, if any.
    fn door_between(&self, from: RoomId, to: RoomId) -> Option<DoorId> {
        self.outgoing_doors(from)
            .iter()
            .copied()
            .find(|&door| self.target(door) == to)
    }
}
