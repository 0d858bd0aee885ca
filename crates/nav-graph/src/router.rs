//! Room-level routing trait and default Dijkstra implementation.
//!
//! # Cost model
//!
//! Walking through door `d` from room `a` to room `b` costs the length of the
//! polyline `centroid(a) → first → second → centroid(b)`, where `first` and
//! `second` are the door's crossing points.  A route's total is therefore
//! the centroid-to-centroid walking distance along the chosen doors.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use nav_core::{DoorId, RoomId};

use crate::{GraphError, GraphResult, RegionGraph};

// ── RoomRoute ─────────────────────────────────────────────────────────────────

/// Doors to cross in order, from source room to destination room.
#[derive(Debug, Clone)]
pub struct RoomRoute {
    pub doors:        Vec<DoorId>,
    pub total_length: f64,
}

impl RoomRoute {
    /// `true` if source and destination are the same room.
    pub fn is_trivial(&self) -> bool {
        self.doors.is_empty()
    }

    /// The first door to cross, if any.
    pub fn next_door(&self) -> Option<DoorId> {
        self.doors.first().copied()
    }
}

// ── RoomRouter trait ──────────────────────────────────────────────────────────

/// Pluggable room-to-room routing.
///
/// Implementations must be `Send + Sync` so a strategy holding one can be
/// shared across worker threads.
pub trait RoomRouter: Send + Sync {
    /// Route from `from` to `to`.  `from == to` yields an empty route.
    ///
    /// # Errors
    ///
    /// [`GraphError::NoRoute`] if `to` is unreachable from `from`.
    fn route(&self, graph: &dyn RegionGraph, from: RoomId, to: RoomId) -> GraphResult<RoomRoute>;
}

// ── DijkstraRoomRouter ────────────────────────────────────────────────────────

/// Dijkstra's algorithm over the door graph.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRoomRouter;

impl RoomRouter for DijkstraRoomRouter {
    fn route(&self, graph: &dyn RegionGraph, from: RoomId, to: RoomId) -> GraphResult<RoomRoute> {
        dijkstra(graph, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Total order on `f64` costs so they can key a `BinaryHeap`.
#[derive(Copy, Clone, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[inline]
fn door_cost(graph: &dyn RegionGraph, door: DoorId) -> f64 {
    let crossing = graph.crossing_points(door);
    graph.centroid(graph.source(door)).distance_to(crossing.first)
        + crossing.as_segment().length()
        + crossing.second.distance_to(graph.centroid(graph.target(door)))
}

fn dijkstra(graph: &dyn RegionGraph, from: RoomId, to: RoomId) -> GraphResult<RoomRoute> {
    let n = graph.room_count();
    for room in [from, to] {
        if room.index() >= n {
            return Err(GraphError::RoomNotFound(room));
        }
    }
    if from == to {
        return Ok(RoomRoute { doors: vec![], total_length: 0.0 });
    }

    let mut dist      = vec![f64::INFINITY; n];
    let mut prev_door = vec![DoorId::INVALID; n];
    dist[from.index()] = 0.0;

    // Secondary key RoomId makes tie-breaking deterministic.
    let mut heap: BinaryHeap<Reverse<(Cost, RoomId)>> = BinaryHeap::new();
    heap.push(Reverse((Cost(0.0), from)));

    while let Some(Reverse((Cost(cost), room))) = heap.pop() {
        if room == to {
            return Ok(reconstruct(graph, &prev_door, to, cost));
        }
        if cost > dist[room.index()] {
            continue;
        }
        for &door in graph.outgoing_doors(room) {
            let next = graph.target(door);
            let new_cost = cost + door_cost(graph, door);
            if new_cost < dist[next.index()] {
                dist[next.index()] = new_cost;
                prev_door[next.index()] = door;
                heap.push(Reverse((Cost(new_cost), next)));
            }
        }
    }

    Err(GraphError::NoRoute { from, to })
}

fn reconstruct(graph: &dyn RegionGraph, prev_door: &[DoorId], to: RoomId, total: f64) -> RoomRoute {
    let mut doors = Vec::new();
    let mut cur = to;
    loop {
        let d = prev_door[cur.index()];
        if !d.is_valid() {
            break;
        }
        doors.push(d);
        cur = graph.source(d);
    }
    doors.reverse();
    RoomRoute { doors, total_length: total }
}
