//! `nav-core` — foundational types shared by every `nav-*` crate.
//!
//! This crate has no `nav-*` dependencies and minimal external ones (only
//! `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `AgentId`, `RoomId`, `DoorId`                             |
//! | [`time`]    | `Tick`, `SimConfig`                                       |
//! | [`rng`]     | `AgentRng` (per-agent deterministic RNG)                  |
//! | [`error`]   | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, DoorId, RoomId};
pub use rng::AgentRng;
pub use time::{SimConfig, Tick};
