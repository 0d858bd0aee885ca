//! Core pedestrian storage: `PedestrianStore` (SoA data) and `AgentRngs`
//! (per-agent RNG).
//!
//! # Why two structs?
//!
//! The parallel navigation phase needs `&mut AgentRngs` (exclusive access to
//! each agent's RNG) while the pedestrian positions are read through a
//! shared borrow.  Keeping RNGs outside the store lets both borrows coexist:
//!
//! ```ignore
//! // nav-sim navigation phase (simplified):
//! let positions = store.position.as_slice();
//! actions.par_iter_mut()
//!     .zip(rngs.inner.par_iter_mut())
//!     .zip(store.visits.par_iter_mut().zip(positions.par_iter()))
//!     .map(|((action, rng), (visits, &pos))| action.update(pos, &env, strategy, rng, visits))
//! ```

use nav_core::{AgentId, AgentRng};
use nav_geometry::Point2;

use crate::VisitLog;

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`PedestrianStore`].
///
/// `AgentRngs` is `Send` but never shared between threads; Rayon's
/// `par_iter_mut()` hands each worker exclusive access to its slice.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── PedestrianStore ───────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all pedestrian state.
///
/// Every `Vec` field has exactly `count` elements and `AgentId` is the index
/// into all of them.
pub struct PedestrianStore {
    /// Number of pedestrians.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Kinematics ────────────────────────────────────────────────────────
    /// Current position in world coordinates.
    pub position: Vec<Point2>,

    // ── Body ──────────────────────────────────────────────────────────────
    /// Body diameter.  A target counts as reached once the pedestrian is
    /// within this distance of it.
    pub diameter: Vec<f64>,

    /// Longest step the pedestrian takes in one tick.
    pub max_walk: Vec<f64>,

    // ── Memory ────────────────────────────────────────────────────────────
    /// Rooms each pedestrian has entered, with visit counts.
    pub visits: Vec<VisitLog>,
}

impl PedestrianStore {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn position_of(&self, agent: AgentId) -> Point2 {
        self.position[agent.index()]
    }

    /// Move `agent` toward `target` by at most its `max_walk`, returning the
    /// new position.
    pub fn step_toward(&mut self, agent: AgentId, target: Point2) -> Point2 {
        let i = agent.index();
        let step = (target - self.position[i]).coerce_at_most(self.max_walk[i]);
        self.position[i] = self.position[i] + step;
        self.position[i]
    }

    // ── Package-private constructor used by PedestrianStoreBuilder ────────

    pub(crate) fn new(position: Vec<Point2>, diameter: f64, max_walk: f64) -> Self {
        let count = position.len();
        Self {
            count,
            position,
            diameter: vec![diameter; count],
            max_walk: vec![max_walk; count],
            visits:   (0..count).map(|_| VisitLog::new()).collect(),
        }
    }
}
