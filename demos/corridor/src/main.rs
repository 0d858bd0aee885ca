//! corridor — smallest runnable example for the room-graph navigation core.
//!
//! Six pedestrians walk through four rooms looking for an exit in the
//! courtyard.  Half of them carry a cognitive map with a landmark near the
//! exit and head straight for it; the rest explore room by room.
//!
//! ```text
//!  y=8 +-----------+
//!      |   store   |
//!  y=4 +---(3,4)---+-------+          +-----------+
//!      |   hall  (6,2) office (10,2)==(12,2) courtyard |
//!  y=0 +-----------+-------+          +-----------+
//!     x=0         x=6     x=10       x=12        x=18
//! ```
//!
//! Usage: `corridor [config.json]` where the optional file holds a
//! `SimConfig` as JSON.  Set `RUST_LOG=debug` to see every transition.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use nav_agent::PedestrianStoreBuilder;
use nav_core::{AgentId, SimConfig};
use nav_geometry::{ConvexPolygon, Point2};
use nav_graph::{CrossingPoints, DijkstraRoomRouter, NavigationGraph, NavigationGraphBuilder};
use nav_sim::{SimBuilder, TracingObserver};
use nav_strategy::{CognitiveMap, DestinationReaching};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:        u64 = 42;
const TOTAL_TICKS: u64 = 2_000;
const DIAMETER:    f64 = 0.5;
const MAX_WALK:    f64 = 0.4;

const EXIT: Point2 = Point2 { x: 16.0, y: 2.0 };

// ── Floor plan ────────────────────────────────────────────────────────────────

fn build_floor_plan() -> Result<NavigationGraph> {
    let mut b = NavigationGraphBuilder::new();
    let hall      = b.add_room(ConvexPolygon::rectangle(0.0, 0.0, 6.0, 4.0)?);
    let office    = b.add_room(ConvexPolygon::rectangle(6.0, 0.0, 4.0, 4.0)?);
    let courtyard = b.add_room(ConvexPolygon::rectangle(12.0, 0.0, 6.0, 4.0)?);
    let store     = b.add_room(ConvexPolygon::rectangle(0.0, 4.0, 6.0, 4.0)?);

    b.add_passage(hall, office, CrossingPoints::at(Point2::new(6.0, 2.0)));
    b.add_passage(hall, store, CrossingPoints::at(Point2::new(3.0, 4.0)));
    // A short walkway across the gap between office and courtyard.
    b.add_passage(
        office,
        courtyard,
        CrossingPoints::new(Point2::new(10.0, 2.0), Point2::new(12.0, 2.0)),
    );

    Ok(b.build()?)
}

fn load_config() -> Result<SimConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(Path::new(&path))
                .with_context(|| format!("reading {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
        }
        None => Ok(SimConfig { total_ticks: TOTAL_TICKS, seed: SEED, ..SimConfig::default() }),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // 1. Config and floor plan.
    let config = load_config()?;
    let graph = build_floor_plan()?;
    println!("Floor plan: {} rooms, {} doors", graph.rooms.len(), graph.door_count());

    // 2. Pedestrians.
    let starts = vec![
        Point2::new(1.0, 1.0),
        Point2::new(5.0, 3.0),
        Point2::new(2.0, 6.0),
        Point2::new(8.0, 1.0),
        Point2::new(3.0, 2.0),
        Point2::new(4.0, 7.0),
    ];
    let agent_count = starts.len();
    let (store, rngs) = PedestrianStoreBuilder::from_positions(starts, config.seed)
        .diameter(DIAMETER)
        .max_walk(MAX_WALK)
        .build();

    // 3. Strategy: even agents know a landmark next to the exit.
    let landmark = ConvexPolygon::rectangle(15.0, 1.0, 2.0, 2.0)?;
    let maps: Vec<CognitiveMap> = (0..agent_count)
        .map(|i| {
            if i % 2 == 0 {
                CognitiveMap::new(vec![landmark.clone()])
            } else {
                CognitiveMap::empty()
            }
        })
        .collect();
    let strategy = DestinationReaching::new(DijkstraRoomRouter, &graph, &maps, &[EXIT])?;

    // 4. Build and run.
    let mut sim = SimBuilder::new(config, store, rngs, strategy, graph).build()?;
    let mut obs = TracingObserver::new();

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    // 5. Summary.
    println!(
        "Finished at {} in {:.3} s: {}/{} arrived, {} transitions",
        sim.tick,
        elapsed.as_secs_f64(),
        sim.arrived_count(),
        agent_count,
        obs.transitions(),
    );
    println!();
    println!("{:<8} {:<12} {:<24} {:<8}", "Agent", "Knows exit", "Position", "Rooms");
    println!("{}", "-".repeat(56));
    for agent in sim.store.agent_ids() {
        let knows = sim
            .strategy
            .knowledge_of(agent)
            .is_some_and(|k| !k.known.is_empty());
        println!(
            "{:<8} {:<12} {:<24} {:<8}",
            agent.0,
            if knows { "yes" } else { "no" },
            sim.store.position_of(agent).to_string(),
            sim.store.visits[agent.index()].distinct_rooms(),
        );
    }
    if let Ok(first) = sim.action(AgentId(0)) {
        println!();
        println!("Agent 0 ended in {:?}", first.phase());
    }

    Ok(())
}
