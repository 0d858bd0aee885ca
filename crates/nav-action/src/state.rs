//! Per-agent navigation state.

use nav_core::{DoorId, RoomId};
use nav_geometry::Point2;
use nav_graph::CrossingPoints;

/// Everything known about a door crossing in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorTraversal {
    pub door:     DoorId,
    /// The room being left.
    pub previous: RoomId,
    /// The door's target room.
    pub expected: RoomId,
    pub crossing: CrossingPoints,
}

/// Navigation state, carrying exactly the data each state needs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NavState {
    #[default]
    Start,

    /// Settled in a room, waiting for the strategy to pick a sub-goal.
    /// `expected` is the target of the door just crossed, if any.
    NewRoom { expected: Option<RoomId> },

    MovingToCrossingPoint1(DoorTraversal),

    MovingToCrossingPoint2(DoorTraversal),

    /// Past the crossing points, heading for the expected room's centroid
    /// until the agent is inside it.
    CrossingDoor(DoorTraversal),

    /// Walking to `destination` inside `previous`.
    MovingToFinal { previous: RoomId, destination: Point2 },

    Arrived,
}

impl NavState {
    pub fn phase(&self) -> NavPhase {
        match self {
            NavState::Start                     => NavPhase::Start,
            NavState::NewRoom { .. }            => NavPhase::NewRoom,
            NavState::MovingToCrossingPoint1(_) => NavPhase::MovingToCrossingPoint1,
            NavState::MovingToCrossingPoint2(_) => NavPhase::MovingToCrossingPoint2,
            NavState::CrossingDoor(_)           => NavPhase::CrossingDoor,
            NavState::MovingToFinal { .. }      => NavPhase::MovingToFinal,
            NavState::Arrived                   => NavPhase::Arrived,
        }
    }

    /// The door crossing in progress, if any.
    pub fn traversal(&self) -> Option<&DoorTraversal> {
        match self {
            NavState::MovingToCrossingPoint1(t)
            | NavState::MovingToCrossingPoint2(t)
            | NavState::CrossingDoor(t) => Some(t),
            _ => None,
        }
    }
}

/// The state tag alone, ordered along the traversal protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NavPhase {
    Start,
    NewRoom,
    MovingToCrossingPoint1,
    MovingToCrossingPoint2,
    CrossingDoor,
    MovingToFinal,
    Arrived,
}

impl NavPhase {
    /// `true` for the states that run the moving sub-protocol.
    #[inline]
    pub fn is_moving(self) -> bool {
        (NavPhase::MovingToCrossingPoint1..=NavPhase::MovingToFinal).contains(&self)
    }
}
