//! The `Sim` struct and its tick loop.

use nav_action::{NavEnv, NavPhase, NavigationAction};
use nav_agent::{AgentRngs, PedestrianStore, VisitLog};
use nav_core::{AgentId, AgentRng, CoreError, SimConfig, Tick};
use nav_geometry::Point2;
use nav_graph::RegionGraph;
use nav_strategy::NavigationStrategy;
use tracing::info;

use crate::{SimObserver, SimResult};

/// A phase change reported by the navigation phase.
type Transition = (AgentId, NavPhase, NavPhase);

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<S, G>` owns every pedestrian's state and drives the two-phase tick
/// loop described in the crate docs.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: NavigationStrategy, G: RegionGraph> {
    /// Global configuration (total ticks, seed, threads, snapshots).
    pub config: SimConfig,

    /// The next tick to be processed.
    pub tick: Tick,

    /// Pedestrian positions, body parameters, and visit logs (SoA arrays).
    pub store: PedestrianStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// One navigation state machine per pedestrian, indexed by `AgentId`.
    pub actions: Vec<NavigationAction>,

    /// Decides each pedestrian's next sub-goal.  Shared by all of them.
    pub strategy: S,

    /// The rooms and doors being walked.
    pub graph: G,

    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl<S: NavigationStrategy, G: RegionGraph> Sim<S, G> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick until `config.end_tick()` or until every
    /// pedestrian has arrived, whichever comes first.
    ///
    /// # Errors
    ///
    /// The first [`NavError`][nav_action::NavError] raised by any pedestrian
    /// aborts the run.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            agents = self.store.count,
            rooms  = self.graph.room_count(),
            start  = %self.tick,
            end    = %self.config.end_tick(),
            "simulation starting"
        );
        while self.tick < self.config.end_tick() && !self.all_arrived() {
            self.step(observer)?;
        }
        info!(
            final_tick = %self.tick,
            arrived    = self.arrived_count(),
            agents     = self.store.count,
            "simulation complete"
        );
        observer.on_sim_end(self.tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`
    /// and arrivals).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// The navigation state machine of `agent`.
    pub fn action(&self, agent: AgentId) -> SimResult<&NavigationAction> {
        self.actions
            .get(agent.index())
            .ok_or_else(|| CoreError::AgentNotFound(agent).into())
    }

    pub fn arrived_count(&self) -> usize {
        self.actions.iter().filter(|a| a.is_arrived()).count()
    }

    pub fn all_arrived(&self) -> bool {
        self.actions.iter().all(NavigationAction::is_arrived)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.tick;
        observer.on_tick_start(now);

        // ── Phase 1: navigation ───────────────────────────────────────────
        let transitions = self.navigate(now)?;
        for (agent, from, to) in transitions {
            observer.on_transition(agent, from, to, now);
        }

        // ── Phase 2: locomotion ───────────────────────────────────────────
        //
        // Sequential, ascending AgentId.  Desired positions depend only on
        // each pedestrian's own state, so the order does not change results.
        for (i, action) in self.actions.iter().enumerate() {
            if action.phase().is_moving() {
                let target = action.desired_position(&self.graph);
                self.store.step_toward(AgentId(i as u32), target);
            }
        }

        observer.on_tick_end(now, self.store.count - self.arrived_count());
        if self.config.snapshot_due(now) {
            observer.on_snapshot(now, &self.store, &self.actions);
        }

        self.tick = now.next();
        Ok(())
    }

    /// Update every pedestrian's state machine and collect phase changes in
    /// ascending `AgentId` order.
    ///
    /// With the `parallel` Cargo feature the updates run on Rayon's thread
    /// pool.  Each pedestrian touches only its own action, RNG, and visit
    /// log, so the outcome is the same either way.
    fn navigate(&mut self, now: Tick) -> SimResult<Vec<Transition>> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let env       = NavEnv { tick: now, graph: &self.graph };
        let strategy  = &self.strategy;
        let positions = self.store.position.as_slice();
        let visits    = &mut self.store.visits;
        let rngs      = &mut self.rngs.inner;
        let actions   = &mut self.actions;

        let update = |((action, rng), (visits, &position)): (
            (&mut NavigationAction, &mut AgentRng),
            (&mut VisitLog, &Point2),
        )| {
            let from = action.phase();
            action
                .update(position, &env, strategy, rng, visits)
                .map(|to| (action.agent(), from, to))
        };

        #[cfg(not(feature = "parallel"))]
        let results: Vec<Transition> = actions
            .iter_mut()
            .zip(rngs.iter_mut())
            .zip(visits.iter_mut().zip(positions))
            .map(update)
            .collect::<Result<_, _>>()?;

        #[cfg(feature = "parallel")]
        let results: Vec<Transition> = {
            use rayon::prelude::*;

            let mut run = || {
                actions
                    .par_iter_mut()
                    .zip(rngs.par_iter_mut())
                    .zip(visits.par_iter_mut().zip(positions.par_iter()))
                    .map(update)
                    .collect::<Result<Vec<_>, _>>()
            };
            match &self.pool {
                Some(pool) => pool.install(run)?,
                None => run()?,
            }
        };

        Ok(results.into_iter().filter(|(_, from, to)| from != to).collect())
    }
}
