use nav_core::{AgentId, DoorId, RoomId};
use nav_geometry::Point2;
use thiserror::Error;

use crate::NavPhase;

/// A strategy asked for something the current state does not allow.
///
/// Every variant is a strategy bug: the offending command is rejected before
/// any state changes.
#[derive(Debug, Error, PartialEq)]
pub enum NavError {
    #[error("{agent} in {phase:?}: {door} does not leave {room}")]
    DoorNotInSight { agent: AgentId, door: DoorId, room: RoomId, phase: NavPhase },

    #[error("{agent} in {phase:?}: destination {destination} is not inside {room}")]
    DestinationOutsideRoom { agent: AgentId, destination: Point2, room: RoomId, phase: NavPhase },

    #[error("{agent} is not inside any room in {phase:?}")]
    NotInRoom { agent: AgentId, phase: NavPhase },
}

pub type NavResult<T> = Result<T, NavError>;
