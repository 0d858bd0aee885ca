//! `nav-strategy` — the decision side of navigation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                          |
//! |---------------|-------------------------------------------------------------------|
//! | [`command`]   | `Command` enum (`CrossDoor`, `MoveToFinal`, `Stay`)               |
//! | [`context`]   | `NavContext<'a>` — read-only view of one agent handed to hooks    |
//! | [`strategy`]  | `NavigationStrategy` trait                                        |
//! | [`stay`]      | `StayPut` — placeholder that never moves                          |
//! | [`knowledge`] | `CognitiveMap`, known/unknown destination classification          |
//! | [`reaching`]  | `DestinationReaching` reference strategy                          |
//! | [`error`]     | `StrategyError`, `StrategyResult<T>`                              |
//!
//! # Design notes
//!
//! Hooks never call back into the navigation state machine.  They inspect a
//! [`NavContext`] and return a [`Command`]; the state machine validates and
//! applies it after the hook returns.  A strategy is therefore shared,
//! immutable, and only needs to be `Send + Sync`.

pub mod command;
pub mod context;
pub mod error;
pub mod knowledge;
pub mod reaching;
pub mod stay;
pub mod strategy;


pub use command::Command;
pub use context::NavContext;
pub use error::{StrategyError, StrategyResult};
pub use knowledge::{CognitiveMap, DestinationKnowledge};
pub use reaching::DestinationReaching;
pub use stay::StayPut;
pub use strategy::NavigationStrategy;
