//! Commands a strategy hands back to the navigation state machine.

use nav_core::DoorId;
use nav_geometry::Point2;
use nav_graph::{CrossingPoints, RegionGraph};

/// The next sub-goal chosen by a strategy hook.
///
/// `CrossDoor` and `MoveToFinal` are validated by the state machine before
/// any state changes: the door must leave the current room and the
/// destination must lie inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Walk through `door` via `crossing`.
    CrossDoor {
        door:     DoorId,
        crossing: CrossingPoints,
    },

    /// Walk to a point inside the current room and stop there.
    MoveToFinal(Point2),

    /// Remain where the agent is.
    Stay,
}

impl Command {
    /// Cross `door` using the crossing points the graph declares for it.
    #[inline]
    pub fn cross(graph: &dyn RegionGraph, door: DoorId) -> Command {
        Command::CrossDoor { door, crossing: graph.crossing_points(door) }
    }
}
