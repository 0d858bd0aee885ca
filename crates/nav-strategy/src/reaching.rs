//! `DestinationReaching` — head for a destination, exploring when lost.
//!
//! On entering a room the strategy applies, in order:
//!
//! 1. **Final approach.**  If a destination lies inside the room, walk to it
//!    (known destinations are checked before unknown ones).
//! 2. **Pursuit.**  Otherwise, if any destination is known, route to the
//!    nearest reachable one and cross the first door of that route.
//! 3. **Exploration.**  Otherwise cross a door leading to the least-visited
//!    neighbouring room, breaking ties with the agent's RNG.
//! 4. With no door in sight, stay.

use nav_core::{AgentId, AgentRng, DoorId, RoomId};
use nav_geometry::Point2;
use nav_graph::{RegionGraph, RoomRoute, RoomRouter};
use tracing::trace;

use crate::{
    CognitiveMap, Command, DestinationKnowledge, NavContext, NavigationStrategy, StrategyError,
    StrategyResult,
};

pub struct DestinationReaching<R: RoomRouter> {
    router:    R,
    /// Indexed by `AgentId`.
    knowledge: Vec<DestinationKnowledge>,
}

impl<R: RoomRouter> DestinationReaching<R> {
    /// Classify `destinations` once per pedestrian, one cognitive map each.
    ///
    /// # Errors
    ///
    /// - [`StrategyError::Config`] if `destinations` is empty.
    /// - [`StrategyError::UnreachableDestination`] if a destination lies
    ///   outside every room and could never be approached.
    pub fn new(
        router:       R,
        graph:        &dyn RegionGraph,
        maps:         &[CognitiveMap],
        destinations: &[Point2],
    ) -> StrategyResult<Self> {
        if destinations.is_empty() {
            return Err(StrategyError::Config("no destinations given".into()));
        }
        if let Some(&d) = destinations.iter().find(|&&d| graph.room_containing(d).is_none()) {
            return Err(StrategyError::UnreachableDestination(d));
        }
        let knowledge = maps.iter().map(|m| m.classify(graph, destinations)).collect();
        Ok(Self { router, knowledge })
    }

    /// What `agent` knows, or `None` if it had no cognitive map.
    pub fn knowledge_of(&self, agent: AgentId) -> Option<&DestinationKnowledge> {
        self.knowledge.get(agent.index())
    }

    fn pursue(&self, room: RoomId, known: &[Point2], graph: &dyn RegionGraph) -> Option<DoorId> {
        known
            .iter()
            .filter_map(|&d| graph.room_containing(d))
            .filter_map(|target| self.router.route(graph, room, target).ok())
            .filter(|route| !route.is_trivial())
            .min_by(|a, b| a.total_length.total_cmp(&b.total_length))
            .and_then(|route: RoomRoute| route.next_door())
    }
}

/// Doors from `ctx.doors_in_sight` leading to the least-visited rooms.
fn least_visited_doors(ctx: &NavContext<'_>) -> Vec<DoorId> {
    let visits = |door: &DoorId| ctx.visits.count(ctx.graph.target(*door));
    let Some(fewest) = ctx.doors_in_sight.iter().map(visits).min() else {
        return Vec::new();
    };
    ctx.doors_in_sight.iter().copied().filter(|d| visits(d) == fewest).collect()
}

impl<R: RoomRouter + 'static> NavigationStrategy for DestinationReaching<R> {
    fn on_entered_new_room(
        &self,
        room: RoomId,
        ctx:  &NavContext<'_>,
        rng:  &mut AgentRng,
    ) -> Command {
        let Some(knowledge) = self.knowledge.get(ctx.agent.index()) else {
            return Command::Stay;
        };

        if let Some(dest) = knowledge.all().find(|&d| ctx.graph.contains(room, d)) {
            trace!(agent = %ctx.agent, %room, %dest, "destination in sight");
            return Command::MoveToFinal(dest);
        }

        if let Some(door) = self.pursue(room, &knowledge.known, ctx.graph) {
            trace!(agent = %ctx.agent, %room, %door, "pursuing known destination");
            return Command::cross(ctx.graph, door);
        }

        match rng.choose(&least_visited_doors(ctx)) {
            Some(&door) => {
                trace!(agent = %ctx.agent, %room, %door, "exploring");
                Command::cross(ctx.graph, door)
            }
            None => Command::Stay,
        }
    }
}
