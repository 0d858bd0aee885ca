//! Graph-subsystem error type.

use thiserror::Error;

use nav_core::{DoorId, RoomId};
use nav_geometry::GeometryError;

/// Errors produced by `nav-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("room {0} not found in graph")]
    RoomNotFound(RoomId),

    #[error("crossing point of {door} lies outside {room}")]
    CrossingOutsideRoom { door: DoorId, room: RoomId },

    #[error("no route from {from} to {to}")]
    NoRoute { from: RoomId, to: RoomId },

    #[error("invalid room shape: {0}")]
    Geometry(#[from] GeometryError),
}

pub type GraphResult<T> = Result<T, GraphError>;
