//! In-memory room graph and builder.
//!
//! # Data layout
//!
//! Doors are stored in **Compressed Sparse Row (CSR)** form.  Given a
//! `RoomId r`, its outgoing doors are the `DoorId`s
//!
//! ```text
//! room_out_start[r] .. room_out_start[r+1]
//! ```
//!
//! and every per-door array (`door_from`, `door_to`, `door_crossing`) is
//! sorted by source room and indexed by `DoorId`.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) holds each room's bounding box.  Point lookups
//! query the boxes containing the point and then run the exact polygon test
//! on that short candidate list.

use rstar::{AABB, RTree, RTreeObject};

use nav_core::{DoorId, RoomId};
use nav_geometry::{ConvexPolygon, EPSILON, Point2};

use crate::{CrossingPoints, GraphError, GraphResult, RegionGraph};

// ── R-tree room entry ─────────────────────────────────────────────────────────

#[derive(Clone)]
struct RoomEntry {
    lo: [f64; 2],
    hi: [f64; 2],
    id: RoomId,
}

impl RTreeObject for RoomEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.lo, self.hi)
    }
}

// ── NavigationGraph ───────────────────────────────────────────────────────────

/// Directed room graph in CSR format plus a spatial index for room lookup.
///
/// Do not construct directly; use [`NavigationGraphBuilder`].
pub struct NavigationGraph {
    // ── Room data ─────────────────────────────────────────────────────────
    /// Shape of each room.  Indexed by `RoomId`.
    pub rooms: Vec<ConvexPolygon>,

    /// Cached centroid of each room.
    pub room_centroid: Vec<Point2>,

    // ── CSR door adjacency ────────────────────────────────────────────────
    /// Length = `room_count + 1`.
    pub room_out_start: Vec<u32>,

    // ── Door data (indexed by DoorId = position in sorted order) ──────────
    pub door_from: Vec<RoomId>,
    pub door_to: Vec<RoomId>,
    pub door_crossing: Vec<CrossingPoints>,

    /// `DoorId(i)` at position `i`, so a room's doors can be lent as a slice.
    door_ids: Vec<DoorId>,

    // ── Spatial index ─────────────────────────────────────────────────────
    spatial_idx: RTree<RoomEntry>,
}

impl NavigationGraph {
    pub fn door_count(&self) -> usize {
        self.door_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    #[inline]
    pub fn room(&self, room: RoomId) -> &ConvexPolygon {
        &self.rooms[room.index()]
    }

    #[inline]
    pub fn out_degree(&self, room: RoomId) -> usize {
        let start = self.room_out_start[room.index()] as usize;
        let end   = self.room_out_start[room.index() + 1] as usize;
        end - start
    }
}

impl RegionGraph for NavigationGraph {
    fn room_count(&self) -> usize {
        self.rooms.len()
    }

    #[inline]
    fn contains(&self, room: RoomId, point: Point2) -> bool {
        self.rooms[room.index()].contains(point)
    }

    #[inline]
    fn centroid(&self, room: RoomId) -> Point2 {
        self.room_centroid[room.index()]
    }

    #[inline]
    fn outgoing_doors(&self, room: RoomId) -> &[DoorId] {
        let start = self.room_out_start[room.index()] as usize;
        let end   = self.room_out_start[room.index() + 1] as usize;
        &self.door_ids[start..end]
    }

    #[inline]
    fn source(&self, door: DoorId) -> RoomId {
        self.door_from[door.index()]
    }

    #[inline]
    fn target(&self, door: DoorId) -> RoomId {
        self.door_to[door.index()]
    }

    #[inline]
    fn crossing_points(&self, door: DoorId) -> CrossingPoints {
        self.door_crossing[door.index()]
    }

    /// R-tree candidates, then the exact test; lowest `RoomId` wins.
    fn room_containing(&self, point: Point2) -> Option<RoomId> {
        self.spatial_idx
            .locate_in_envelope_intersecting(&AABB::from_point([point.x, point.y]))
            .filter(|entry| self.rooms[entry.id.index()].contains(point))
            .map(|entry| entry.id)
            .min()
    }
}

// ── NavigationGraphBuilder ────────────────────────────────────────────────────

/// Construct a [`NavigationGraph`] incrementally, then call [`build`](Self::build).
///
/// Rooms and doors may be added in any order.  `build()` validates door
/// endpoints, sorts doors by source room, constructs the CSR arrays, and
/// bulk-loads the R-tree.
///
/// # Example
///
/// ```
/// use nav_geometry::{ConvexPolygon, Point2};
/// use nav_graph::{CrossingPoints, NavigationGraphBuilder, RegionGraph};
///
/// let mut b = NavigationGraphBuilder::new();
/// let hall  = b.add_room(ConvexPolygon::rectangle(0.0, 0.0, 4.0, 4.0).unwrap());
/// let annex = b.add_room(ConvexPolygon::rectangle(4.0, 0.0, 4.0, 4.0).unwrap());
/// b.add_passage(hall, annex, CrossingPoints::at(Point2::new(4.0, 2.0)));
/// let graph = b.build().unwrap();
/// assert_eq!(graph.room_count(), 2);
/// assert_eq!(graph.door_count(), 2); // one door each way
/// ```
pub struct NavigationGraphBuilder {
    rooms:     Vec<ConvexPolygon>,
    raw_doors: Vec<RawDoor>,
}

struct RawDoor {
    from:     RoomId,
    to:       RoomId,
    crossing: CrossingPoints,
}

impl NavigationGraphBuilder {
    pub fn new() -> Self {
        Self { rooms: Vec::new(), raw_doors: Vec::new() }
    }

    pub fn with_capacity(rooms: usize, doors: usize) -> Self {
        Self {
            rooms:     Vec::with_capacity(rooms),
            raw_doors: Vec::with_capacity(doors),
        }
    }

    /// Add a room and return its `RoomId` (sequential from 0).
    pub fn add_room(&mut self, shape: ConvexPolygon) -> RoomId {
        let id = RoomId(self.rooms.len() as u32);
        self.rooms.push(shape);
        id
    }

    /// Add a room from raw vertices.
    ///
    /// # Errors
    ///
    /// [`GraphError::Geometry`] if the vertices do not form a convex polygon.
    pub fn add_room_from_vertices(&mut self, vertices: Vec<Point2>) -> GraphResult<RoomId> {
        Ok(self.add_room(ConvexPolygon::new(vertices)?))
    }

    /// Add a **directed** door from `from` to `to`.
    pub fn add_door(&mut self, from: RoomId, to: RoomId, crossing: CrossingPoints) {
        self.raw_doors.push(RawDoor { from, to, crossing });
    }

    /// Convenience: doors in **both directions**, the reverse door walking
    /// the crossing points in the opposite order.
    pub fn add_passage(&mut self, a: RoomId, b: RoomId, crossing: CrossingPoints) {
        self.add_door(a, b, crossing);
        self.add_door(b, a, crossing.reversed());
    }

    pub fn room_count(&self) -> usize { self.rooms.len() }
    pub fn door_count(&self) -> usize { self.raw_doors.len() }

    /// Consume the builder and produce a [`NavigationGraph`].
    ///
    /// # Errors
    ///
    /// - [`GraphError::RoomNotFound`] if a door names a room never added.
    /// - [`GraphError::CrossingOutsideRoom`] if a door's first crossing point
    ///   is outside its source room or its second outside its target room.
    pub fn build(self) -> GraphResult<NavigationGraph> {
        let room_count = self.rooms.len();
        let door_count = self.raw_doors.len();

        // Stable sort keeps insertion order among a room's doors.
        let mut raw = self.raw_doors;
        raw.sort_by_key(|d| d.from.0);

        for (i, d) in raw.iter().enumerate() {
            for room in [d.from, d.to] {
                if room.index() >= room_count {
                    return Err(GraphError::RoomNotFound(room));
                }
            }
            let door = DoorId(i as u32);
            if !self.rooms[d.from.index()].contains(d.crossing.first) {
                return Err(GraphError::CrossingOutsideRoom { door, room: d.from });
            }
            if !self.rooms[d.to.index()].contains(d.crossing.second) {
                return Err(GraphError::CrossingOutsideRoom { door, room: d.to });
            }
        }

        let door_from:     Vec<RoomId>         = raw.iter().map(|d| d.from).collect();
        let door_to:       Vec<RoomId>         = raw.iter().map(|d| d.to).collect();
        let door_crossing: Vec<CrossingPoints> = raw.iter().map(|d| d.crossing).collect();
        let door_ids:      Vec<DoorId>         = (0..door_count as u32).map(DoorId).collect();

        let mut room_out_start = vec![0u32; room_count + 1];
        for d in &raw {
            room_out_start[d.from.index() + 1] += 1;
        }
        for i in 1..=room_count {
            room_out_start[i] += room_out_start[i - 1];
        }
        debug_assert_eq!(room_out_start[room_count] as usize, door_count);

        let room_centroid: Vec<Point2> = self.rooms.iter().map(ConvexPolygon::centroid).collect();

        // Boxes are widened by EPSILON so boundary points within tolerance
        // still reach the exact test.
        let entries: Vec<RoomEntry> = self
            .rooms
            .iter()
            .enumerate()
            .map(|(i, shape)| {
                let (lo, hi) = shape.bounding_box();
                RoomEntry {
                    lo: [lo.x - EPSILON, lo.y - EPSILON],
                    hi: [hi.x + EPSILON, hi.y + EPSILON],
                    id: RoomId(i as u32),
                }
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        Ok(NavigationGraph {
            rooms: self.rooms,
            room_centroid,
            room_out_start,
            door_from,
            door_to,
            door_crossing,
            door_ids,
            spatial_idx,
        })
    }
}

impl Default for NavigationGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
