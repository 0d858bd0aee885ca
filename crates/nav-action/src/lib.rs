//! `nav-action` — the per-agent navigation state machine.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                         |
//! |------------|------------------------------------------------------------------|
//! | [`state`]  | `NavState` (tagged per-state data), `NavPhase`, `DoorTraversal`  |
//! | [`action`] | `NavigationAction` — `update`, `desired_position`, door crossing |
//! | [`error`]  | `NavError`, `NavResult<T>`                                       |
//!
//! # Traversal protocol
//!
//! ```text
//! START ──► NEW_ROOM ──► MOVING_TO_CROSSING_POINT_1 ──► MOVING_TO_CROSSING_POINT_2 ──► CROSSING_DOOR
//!   │          ▲  │                                                                       │
//!   │          │  └──► MOVING_TO_FINAL ──► ARRIVED                                         │
//!   │          └───────────────────── expected room entered ◄──────────────────────────────┘
//!   └──► ARRIVED  (start position outside every room)
//! ```
//!
//! When both crossing points coincide the second approach is skipped.
//!
//! The state machine never moves the agent.  Each tick the caller refreshes
//! the agent's position through [`NavigationAction::update`], then walks it
//! toward [`NavigationAction::desired_position`].
//!
//! Decisions are delegated to a [`NavigationStrategy`][nav_strategy::NavigationStrategy]
//! whose hooks return a [`Command`][nav_strategy::Command]; the action
//! validates the command before touching any state.

pub mod action;
pub mod error;
pub mod state;


pub use action::{NavEnv, NavigationAction};
pub use error::{NavError, NavResult};
pub use state::{DoorTraversal, NavPhase, NavState};
