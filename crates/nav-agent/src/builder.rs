//! Fluent builder for constructing `PedestrianStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use nav_agent::PedestrianStoreBuilder;
//! use nav_geometry::Point2;
//!
//! let (store, rngs) = PedestrianStoreBuilder::from_positions(
//!         vec![Point2::new(1.0, 1.0), Point2::new(2.0, 3.0)],
//!         /*seed=*/ 42,
//!     )
//!     .diameter(0.4)
//!     .max_walk(0.3)
//!     .build();
//!
//! assert_eq!(store.count, 2);
//! assert_eq!(rngs.len(),  2);
//! assert_eq!(store.diameter[1], 0.4);
//! ```

use nav_geometry::Point2;

use crate::{AgentRngs, PedestrianStore};

/// Default body diameter, in world units.
pub const DEFAULT_DIAMETER: f64 = 0.5;

/// Default per-tick step length, in world units.
pub const DEFAULT_MAX_WALK: f64 = 0.4;

/// Fluent builder for [`PedestrianStore`] + [`AgentRngs`].
///
/// Every pedestrian shares the configured body parameters; per-pedestrian
/// values can be written directly to the store's `pub` arrays afterwards.
pub struct PedestrianStoreBuilder {
    positions: Vec<Point2>,
    seed:      u64,
    diameter:  f64,
    max_walk:  f64,
}

impl PedestrianStoreBuilder {
    /// `count` pedestrians, all starting at the origin.
    pub fn new(count: usize, seed: u64) -> Self {
        Self::from_positions(vec![Point2::ORIGIN; count], seed)
    }

    /// One pedestrian per starting position.
    pub fn from_positions(positions: Vec<Point2>, seed: u64) -> Self {
        Self {
            positions,
            seed,
            diameter: DEFAULT_DIAMETER,
            max_walk: DEFAULT_MAX_WALK,
        }
    }

    pub fn diameter(mut self, diameter: f64) -> Self {
        self.diameter = diameter;
        self
    }

    pub fn max_walk(mut self, max_walk: f64) -> Self {
        self.max_walk = max_walk;
        self
    }

    /// Construct `PedestrianStore` and `AgentRngs`.
    pub fn build(self) -> (PedestrianStore, AgentRngs) {
        let count = self.positions.len();
        let store = PedestrianStore::new(self.positions, self.diameter, self.max_walk);
        let rngs = AgentRngs::new(count, self.seed);
        (store, rngs)
    }
}
