//! Fluent builder for constructing a [`Sim`].

use nav_action::NavigationAction;
use nav_agent::{AgentRngs, PedestrianStore};
use nav_core::{SimConfig, Tick};
use nav_graph::RegionGraph;
use nav_strategy::NavigationStrategy;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<S, G>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, threads, snapshot interval
/// - [`PedestrianStore`] + [`AgentRngs`] — from [`nav_agent::PedestrianStoreBuilder`]
/// - `S: NavigationStrategy` — decides sub-goals on entering a room
/// - `G: RegionGraph` — the rooms and doors (e.g. [`nav_graph::NavigationGraph`])
///
/// Every pedestrian gets a [`NavigationAction`] in `START` whose reach
/// tolerance is its body diameter.
///
/// # Example
///
/// ```rust,ignore
/// let (store, rngs) = PedestrianStoreBuilder::from_positions(starts, seed).build();
/// let mut sim = SimBuilder::new(config, store, rngs, strategy, graph).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: NavigationStrategy, G: RegionGraph> {
    config:   SimConfig,
    store:    PedestrianStore,
    rngs:     AgentRngs,
    strategy: S,
    graph:    G,
}

impl<S: NavigationStrategy, G: RegionGraph> SimBuilder<S, G> {
    /// Create a builder with all required inputs.
    pub fn new(
        config:   SimConfig,
        store:    PedestrianStore,
        rngs:     AgentRngs,
        strategy: S,
        graph:    G,
    ) -> Self {
        Self { config, store, rngs, strategy, graph }
    }

    /// Validate inputs, create one navigation action per pedestrian, and
    /// return a ready-to-run [`Sim`].
    ///
    /// # Errors
    ///
    /// - [`SimError::Core`] if the configuration fails validation.
    /// - [`SimError::AgentCountMismatch`] if the RNG count differs from the
    ///   pedestrian count.
    /// - [`SimError::Config`] if the worker pool cannot be created.
    pub fn build(self) -> SimResult<Sim<S, G>> {
        self.config.validate()?;

        let agent_count = self.store.count;
        if self.rngs.len() != agent_count {
            return Err(SimError::AgentCountMismatch {
                expected: agent_count,
                got:      self.rngs.len(),
                what:     "agent RNGs",
            });
        }

        let actions = self
            .store
            .agent_ids()
            .map(|agent| {
                let i = agent.index();
                NavigationAction::new(agent, self.store.position[i], self.store.diameter[i])
            })
            .collect();

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| SimError::Config(e.to_string()))?,
            ),
            None => None,
        };

        Ok(Sim {
            config:   self.config,
            tick:     Tick::ZERO,
            store:    self.store,
            rngs:     self.rngs,
            actions,
            strategy: self.strategy,
            graph:    self.graph,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
