//! `nav-graph` — the room graph the navigation state machine walks.
//!
//! Vertices are convex rooms, edges are directed doors.  The state machine
//! only ever reads the graph through the [`RegionGraph`] trait, so any
//! environment representation can be plugged in; [`NavigationGraph`] is the
//! in-memory implementation used by the simulator.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`region`]  | `RegionGraph` trait, `CrossingPoints`                           |
//! | [`network`] | `NavigationGraph` (CSR doors + R-tree), `NavigationGraphBuilder` |
//! | [`router`]  | `RoomRouter` trait, `RoomRoute`, `DijkstraRoomRouter`           |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |

pub mod error;
pub mod network;
pub mod region;
pub mod router;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use network::{NavigationGraph, NavigationGraphBuilder};
pub use region::{CrossingPoints, RegionGraph};
pub use router::{DijkstraRoomRouter, RoomRoute, RoomRouter};
