//! Simulation observer trait for progress reporting and data collection.

use nav_action::{NavPhase, NavigationAction};
use nav_agent::PedestrianStore;
use nav_core::{AgentId, Tick};
use tracing::{debug, info};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — arrival counter
///
/// ```rust,ignore
/// struct Arrivals(usize);
///
/// impl SimObserver for Arrivals {
///     fn on_transition(&mut self, _: AgentId, _: NavPhase, to: NavPhase, _: Tick) {
///         if to == NavPhase::Arrived {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per pedestrian whose phase changed during the navigation
    /// phase, in ascending `AgentId` order.
    fn on_transition(&mut self, _agent: AgentId, _from: NavPhase, _to: NavPhase, _tick: Tick) {}

    /// Called at the end of each tick.
    ///
    /// `active` is the number of pedestrians that have not yet arrived.
    fn on_tick_end(&mut self, _tick: Tick, _active: usize) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`
    /// ticks), after locomotion.
    fn on_snapshot(
        &mut self,
        _tick:    Tick,
        _store:   &PedestrianStore,
        _actions: &[NavigationAction],
    ) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Reports progress through `tracing`: a `debug!` summary per tick and an
/// `info!` line at the end of the run.
#[derive(Debug, Default)]
pub struct TracingObserver {
    transitions: usize,
    arrivals:    usize,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Phase changes seen so far.
    pub fn transitions(&self) -> usize {
        self.transitions
    }

    /// Pedestrians seen reaching `ARRIVED`.
    pub fn arrivals(&self) -> usize {
        self.arrivals
    }
}

impl SimObserver for TracingObserver {
    fn on_transition(&mut self, _agent: AgentId, _from: NavPhase, to: NavPhase, _tick: Tick) {
        self.transitions += 1;
        if to == NavPhase::Arrived {
            self.arrivals += 1;
        }
    }

    fn on_tick_end(&mut self, tick: Tick, active: usize) {
        debug!(%tick, active, arrivals = self.arrivals, "tick complete");
    }

    fn on_snapshot(&mut self, tick: Tick, store: &PedestrianStore, actions: &[NavigationAction]) {
        for (agent, action) in store.agent_ids().zip(actions) {
            debug!(%tick, %agent, position = %store.position_of(agent), phase = ?action.phase(), "snapshot");
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        info!(%final_tick, transitions = self.transitions, arrivals = self.arrivals, "simulation finished");
    }
}
