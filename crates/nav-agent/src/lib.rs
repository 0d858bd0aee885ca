//! `nav-agent` — Structure-of-Arrays pedestrian storage.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`store`]   | `PedestrianStore` (SoA arrays), `AgentRngs` (per-agent RNG)   |
//! | [`visits`]  | `VisitLog` (per-agent room visit counts)                      |
//! | [`builder`] | `PedestrianStoreBuilder` (fluent construction)                |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | Visit logs use `rustc_hash::FxHashMap`.                    |
//! | `serde`   | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod builder;
pub mod store;
pub mod visits;


pub use builder::PedestrianStoreBuilder;
pub use store::{AgentRngs, PedestrianStore};
pub use visits::VisitLog;
