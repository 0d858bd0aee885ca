//! Integration tests for nav-sim.

use nav_action::{NavError, NavPhase};
use nav_agent::{AgentRngs, PedestrianStore, PedestrianStoreBuilder};
use nav_core::{AgentId, AgentRng, CoreError, RoomId, SimConfig, Tick};
use nav_geometry::{ConvexPolygon, Point2};
use nav_graph::{CrossingPoints, DijkstraRoomRouter, NavigationGraph, NavigationGraphBuilder};
use nav_strategy::{CognitiveMap, Command, DestinationReaching, NavContext, NavigationStrategy, StayPut};

use crate::{NoopObserver, SimBuilder, SimError, SimObserver, TracingObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig {
        total_ticks,
        seed:                    42,
        num_threads:             Some(1),
        snapshot_interval_ticks: 0,
    }
}

fn store_at(starts: Vec<Point2>) -> (PedestrianStore, AgentRngs) {
    PedestrianStoreBuilder::from_positions(starts, 42).build()
}

/// Three 4×4 rooms in a row, `0 | 1 | 2` spanning x = 0..12, joined by
/// passages at (4, 2) and (8, 2).
fn corridor() -> NavigationGraph {
    let mut b = NavigationGraphBuilder::new();
    let rooms: Vec<RoomId> = (0..3)
        .map(|i| b.add_room(ConvexPolygon::rectangle(4.0 * f64::from(i), 0.0, 4.0, 4.0).unwrap()))
        .collect();
    b.add_passage(rooms[0], rooms[1], CrossingPoints::at(p(4.0, 2.0)));
    b.add_passage(rooms[1], rooms[2], CrossingPoints::at(p(8.0, 2.0)));
    b.build().unwrap()
}

/// Explores toward (10, 2) in room 2 with no landmarks known.
fn explorer(graph: &NavigationGraph, agents: usize) -> DestinationReaching<DijkstraRoomRouter> {
    let maps = vec![CognitiveMap::empty(); agents];
    DestinationReaching::new(DijkstraRoomRouter, graph, &maps, &[p(10.0, 2.0)]).unwrap()
}

/// Records every observer callback.
#[derive(Default)]
struct Recorder {
    starts:      u64,
    ends:        Vec<usize>,
    transitions: Vec<(AgentId, NavPhase, NavPhase, Tick)>,
    snapshots:   Vec<Tick>,
    finished:    Option<Tick>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, _t: Tick) {
        self.starts += 1;
    }
    fn on_transition(&mut self, agent: AgentId, from: NavPhase, to: NavPhase, tick: Tick) {
        self.transitions.push((agent, from, to, tick));
    }
    fn on_tick_end(&mut self, _t: Tick, active: usize) {
        self.ends.push(active);
    }
    fn on_snapshot(&mut self, tick: Tick, _: &PedestrianStore, _: &[nav_action::NavigationAction]) {
        self.snapshots.push(tick);
    }
    fn on_sim_end(&mut self, tick: Tick) {
        self.finished = Some(tick);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_one_action_per_pedestrian() {
        let (store, rngs) = store_at(vec![p(1.0, 1.0), p(5.0, 1.0)]);
        let sim = SimBuilder::new(test_config(10), store, rngs, StayPut, corridor()).build().unwrap();
        assert_eq!(sim.actions.len(), 2);
        assert_eq!(sim.tick, Tick::ZERO);
        let a = sim.action(AgentId(1)).unwrap();
        assert_eq!(a.phase(), NavPhase::Start);
        assert_eq!(a.position(), p(5.0, 1.0));
        assert_eq!(a.min_distance(), sim.store.diameter[1]);
    }

    #[test]
    fn rng_count_mismatch_errors() {
        let (store, _) = store_at(vec![p(1.0, 1.0); 2]);
        let (_, rngs) = store_at(vec![p(1.0, 1.0); 3]);
        let result = SimBuilder::new(test_config(10), store, rngs, StayPut, corridor()).build();
        assert!(matches!(
            result,
            Err(SimError::AgentCountMismatch { expected: 2, got: 3, .. })
        ));
    }

    #[test]
    fn invalid_config_errors() {
        let (store, rngs) = store_at(vec![p(1.0, 1.0)]);
        let result = SimBuilder::new(test_config(0), store, rngs, StayPut, corridor()).build();
        assert!(matches!(result, Err(SimError::Core(CoreError::Config(_)))));
    }

    #[test]
    fn unknown_agent_lookup_errors() {
        let (store, rngs) = store_at(vec![p(1.0, 1.0)]);
        let sim = SimBuilder::new(test_config(10), store, rngs, StayPut, corridor()).build().unwrap();
        assert!(matches!(
            sim.action(AgentId(7)),
            Err(SimError::Core(CoreError::AgentNotFound(AgentId(7))))
        ));
    }
}

// ── Running ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn explorer_reaches_destination_and_stops_early() {
        let graph = corridor();
        let strategy = explorer(&graph, 1);
        let (store, rngs) = store_at(vec![p(2.0, 2.0)]);
        let mut sim = SimBuilder::new(test_config(500), store, rngs, strategy, graph).build().unwrap();

        sim.run(&mut NoopObserver).unwrap();

        assert!(sim.all_arrived());
        assert!(sim.tick < Tick(500), "run should stop once everyone arrived");
        let end = sim.store.position_of(AgentId(0));
        assert!(end.distance_to(p(10.0, 2.0)) <= sim.store.diameter[0]);

        let visits = &sim.store.visits[0];
        for room in [RoomId(0), RoomId(1), RoomId(2)] {
            assert_eq!(visits.count(room), 1, "{room} visited once");
        }
    }

    #[test]
    fn transitions_follow_traversal_protocol() {
        let graph = corridor();
        let strategy = explorer(&graph, 1);
        let (store, rngs) = store_at(vec![p(2.0, 2.0)]);
        let mut sim = SimBuilder::new(test_config(500), store, rngs, strategy, graph).build().unwrap();
        let mut rec = Recorder::default();

        sim.run(&mut rec).unwrap();

        let phases: Vec<NavPhase> = rec.transitions.iter().map(|t| t.2).collect();
        use NavPhase::*;
        assert_eq!(
            phases,
            vec![
                NewRoom,
                MovingToCrossingPoint1, CrossingDoor, NewRoom,
                MovingToCrossingPoint1, CrossingDoor, NewRoom,
                MovingToFinal, Arrived,
            ]
        );
        assert_eq!(rec.transitions[0].3, Tick::ZERO);
        assert!(rec.transitions.windows(2).all(|w| w[0].3 <= w[1].3));
        assert_eq!(rec.finished, Some(sim.tick));
    }

    #[test]
    fn observer_called_once_per_tick() {
        let (store, rngs) = store_at(vec![p(1.0, 1.0), p(5.0, 1.0)]);
        let mut config = test_config(6);
        config.snapshot_interval_ticks = 2;
        let mut sim = SimBuilder::new(config, store, rngs, StayPut, corridor()).build().unwrap();
        let mut rec = Recorder::default();

        sim.run(&mut rec).unwrap();

        assert_eq!(rec.starts, 6);
        assert_eq!(rec.ends, vec![2; 6]);
        assert_eq!(rec.snapshots, vec![Tick(0), Tick(2), Tick(4)]);
        assert_eq!(sim.tick, Tick(6));
        // Both settle in NEW_ROOM and stay there.
        assert_eq!(rec.transitions.len(), 2);
        assert!(sim.actions.iter().all(|a| a.phase() == NavPhase::NewRoom));
    }

    #[test]
    fn stationary_agents_do_not_move() {
        let (store, rngs) = store_at(vec![p(1.0, 1.0)]);
        let mut sim = SimBuilder::new(test_config(20), store, rngs, StayPut, corridor()).build().unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.store.position_of(AgentId(0)), p(1.0, 1.0));
    }

    #[test]
    fn run_ticks_advances_exactly() {
        let (store, rngs) = store_at(vec![p(1.0, 1.0)]);
        let mut sim = SimBuilder::new(test_config(2), store, rngs, StayPut, corridor()).build().unwrap();
        sim.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.tick, Tick(5));
    }

    #[test]
    fn start_outside_every_room_arrives_immediately() {
        let (store, rngs) = store_at(vec![p(50.0, 50.0)]);
        let mut sim = SimBuilder::new(test_config(100), store, rngs, StayPut, corridor()).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert_eq!(sim.tick, Tick(1));
        assert_eq!(rec.transitions, vec![(AgentId(0), NavPhase::Start, NavPhase::Arrived, Tick::ZERO)]);
        assert_eq!(sim.arrived_count(), 1);
    }

    #[test]
    fn tracing_observer_counts_arrivals() {
        let graph = corridor();
        let strategy = explorer(&graph, 2);
        let (store, rngs) = store_at(vec![p(2.0, 2.0), p(6.0, 3.0)]);
        let mut sim = SimBuilder::new(test_config(500), store, rngs, strategy, graph).build().unwrap();
        let mut obs = TracingObserver::new();
        sim.run(&mut obs).unwrap();
        assert_eq!(obs.arrivals(), 2);
        assert!(obs.transitions() >= 2 * 4);
    }
}

// ── Error propagation ─────────────────────────────────────────────────────────

#[cfg(test)]
mod error_tests {
    use super::*;

    /// Asks every pedestrian to walk somewhere outside its room.
    struct Misguided;

    impl NavigationStrategy for Misguided {
        fn on_entered_new_room(&self, _: RoomId, _: &NavContext<'_>, _: &mut AgentRng) -> Command {
            Command::MoveToFinal(Point2::new(100.0, 100.0))
        }
    }

    #[test]
    fn navigation_error_aborts_run() {
        let (store, rngs) = store_at(vec![p(1.0, 1.0)]);
        let mut sim = SimBuilder::new(test_config(50), store, rngs, Misguided, corridor()).build().unwrap();
        let mut rec = Recorder::default();

        let err = sim.run(&mut rec).unwrap_err();

        assert!(matches!(
            err,
            SimError::Navigation(NavError::DestinationOutsideRoom { room: RoomId(0), .. })
        ));
        // Tick 0 settles the agent, tick 1 asks the strategy and fails.
        assert_eq!(sim.tick, Tick(1));
        assert_eq!(rec.starts, 2);
        assert_eq!(rec.finished, None);
        assert_eq!(sim.action(AgentId(0)).unwrap().phase(), NavPhase::NewRoom);
    }
}

// ── Parallel navigation phase ─────────────────────────────────────────────────

#[cfg(all(test, feature = "parallel"))]
mod parallel_tests {
    use super::*;

    fn explore_with_threads(threads: usize) -> (Vec<(AgentId, NavPhase, NavPhase, Tick)>, Vec<Point2>, Tick) {
        let graph = corridor();
        let strategy = explorer(&graph, 4);
        let (store, rngs) = store_at(vec![p(2.0, 2.0), p(6.0, 3.0), p(5.0, 1.0), p(1.0, 3.0)]);
        let mut config = test_config(500);
        config.num_threads = Some(threads);
        let mut sim = SimBuilder::new(config, store, rngs, strategy, graph).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert!(sim.all_arrived());
        (rec.transitions, sim.store.position.clone(), sim.tick)
    }

    #[test]
    fn thread_count_does_not_change_outcome() {
        let single = explore_with_threads(1);
        let pooled = explore_with_threads(2);
        assert_eq!(single.0, pooled.0);
        assert_eq!(single.1, pooled.1);
        assert_eq!(single.2, pooled.2);
    }

    #[test]
    fn transitions_reported_in_agent_order() {
        let (transitions, _, _) = explore_with_threads(2);
        for tick_group in transitions.chunk_by(|a, b| a.3 == b.3) {
            assert!(tick_group.windows(2).all(|w| w[0].0 < w[1].0));
        }
    }
}
