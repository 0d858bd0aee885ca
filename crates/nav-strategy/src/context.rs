//! Read-only agent view passed to every strategy hook.

use nav_agent::VisitLog;
use nav_core::{AgentId, DoorId, RoomId, Tick};
use nav_geometry::Point2;
use nav_graph::RegionGraph;

/// What a strategy may look at when choosing the next sub-goal.
///
/// Built by the navigation state machine immediately before a hook is
/// invoked; every borrow ends when the hook returns.
pub struct NavContext<'a> {
    pub tick: Tick,

    pub agent: AgentId,

    /// The shared room graph.
    pub graph: &'a dyn RegionGraph,

    /// The agent's position at the start of this update.
    pub position: Point2,

    /// Room the agent is in, after disambiguation.
    pub current_room: Option<RoomId>,

    /// Doors leaving `current_room`; empty when it is `None`.
    pub doors_in_sight: &'a [DoorId],

    /// The agent's visit history, including the room just entered.
    pub visits: &'a VisitLog,
}
