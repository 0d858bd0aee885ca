//! `nav-sim` — tick driver for room-graph navigation.
//!
//! # Two-phase tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Navigate — NavigationAction::update for every pedestrian with its
//!                current position (parallel with the `parallel` feature).
//!                Strategy hooks fire here.
//!   ② Walk     — in ascending AgentId order, step each pedestrian toward
//!                its desired position by at most its max walk length.
//!   stop early once every pedestrian has arrived.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the navigation phase on Rayon's thread pool.      |
//! | `fx-hash`  | Visit logs use `rustc_hash::FxHashMap`.                |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use nav_agent::PedestrianStoreBuilder;
//! use nav_core::SimConfig;
//! use nav_sim::{NoopObserver, SimBuilder};
//! use nav_strategy::StayPut;
//!
//! let (store, rngs) = PedestrianStoreBuilder::from_positions(starts, 42).build();
//! let mut sim = SimBuilder::new(config, store, rngs, StayPut, graph).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TracingObserver};
pub use sim::Sim;
