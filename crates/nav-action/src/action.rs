//! `NavigationAction` — advances one agent's navigation state per tick.

use nav_agent::VisitLog;
use nav_core::{AgentId, AgentRng, DoorId, RoomId, Tick};
use nav_geometry::Point2;
use nav_graph::{CrossingPoints, RegionGraph};
use nav_strategy::{Command, NavContext, NavigationStrategy};
use tracing::{debug, warn};

use crate::{DoorTraversal, NavError, NavPhase, NavResult, NavState};

/// Shared, read-only inputs to one round of updates.
#[derive(Clone, Copy)]
pub struct NavEnv<'a> {
    pub tick:  Tick,
    pub graph: &'a dyn RegionGraph,
}

/// One agent's navigation state machine.
///
/// Owned exclusively by its agent; nothing here is shared, so disjoint
/// agents can be updated from different threads without locking.
#[derive(Debug, Clone)]
pub struct NavigationAction {
    agent:        AgentId,
    state:        NavState,
    position:     Point2,
    current_room: Option<RoomId>,
    /// A target is reached once the agent is within this distance of it.
    min_distance: f64,
}

impl NavigationAction {
    /// A fresh action in `START`.  `diameter` is the agent's body size and
    /// becomes the reach tolerance.
    pub fn new(agent: AgentId, position: Point2, diameter: f64) -> Self {
        Self {
            agent,
            state: NavState::Start,
            position,
            current_room: None,
            min_distance: diameter,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn agent(&self) -> AgentId {
        self.agent
    }

    #[inline]
    pub fn state(&self) -> &NavState {
        &self.state
    }

    #[inline]
    pub fn phase(&self) -> NavPhase {
        self.state.phase()
    }

    #[inline]
    pub fn is_arrived(&self) -> bool {
        self.state == NavState::Arrived
    }

    /// Position cached by the last [`update`](Self::update).
    #[inline]
    pub fn position(&self) -> Point2 {
        self.position
    }

    /// Room cached by the last [`update`](Self::update).
    #[inline]
    pub fn current_room(&self) -> Option<RoomId> {
        self.current_room
    }

    #[inline]
    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    /// Doors leaving the current room; empty outside every room.
    pub fn doors_in_sight<'g>(&self, graph: &'g dyn RegionGraph) -> &'g [DoorId] {
        match self.current_room {
            Some(room) => graph.outgoing_doors(room),
            None => &[],
        }
    }

    /// Where the agent should walk next.
    ///
    /// Outside the moving states this is the position refreshed by the last
    /// update, so the agent stays put.
    pub fn desired_position(&self, graph: &dyn RegionGraph) -> Point2 {
        match &self.state {
            NavState::MovingToCrossingPoint1(t) => t.crossing.first,
            NavState::MovingToCrossingPoint2(t) => t.crossing.second,
            NavState::CrossingDoor(t) => graph.centroid(t.expected),
            NavState::MovingToFinal { destination, .. } => *destination,
            NavState::Start | NavState::NewRoom { .. } | NavState::Arrived => self.position,
        }
    }

    // ── Update ────────────────────────────────────────────────────────────

    /// Refresh the cached position and room, then react to the current
    /// state.  Returns the phase after the update.
    ///
    /// # Errors
    ///
    /// A [`NavError`] if a strategy hook returned a command the current
    /// state cannot honour, or if a settled agent is outside every room.
    /// The state is left as it was before the offending command.
    pub fn update<S: NavigationStrategy + ?Sized>(
        &mut self,
        position: Point2,
        env:      &NavEnv<'_>,
        strategy: &S,
        rng:      &mut AgentRng,
        visits:   &mut VisitLog,
    ) -> NavResult<NavPhase> {
        self.position = position;
        self.current_room = self.locate(env.graph);

        match self.state {
            NavState::Start => self.on_start(env.tick),
            NavState::NewRoom { .. } => self.in_new_room(env, strategy, rng, visits)?,
            NavState::MovingToCrossingPoint1(_)
            | NavState::MovingToCrossingPoint2(_)
            | NavState::CrossingDoor(_)
            | NavState::MovingToFinal { .. } => self.moving(env, strategy, rng, visits)?,
            NavState::Arrived => {}
        }
        Ok(self.phase())
    }

    /// Room containing the cached position.
    ///
    /// On shared boundaries the room being left wins while heading for the
    /// first crossing point or a final destination, and the room being
    /// entered wins from the second crossing point until the next sub-goal
    /// is chosen.  Otherwise the lowest `RoomId` containing the point.
    fn locate(&self, graph: &dyn RegionGraph) -> Option<RoomId> {
        let p = self.position;
        match &self.state {
            NavState::MovingToCrossingPoint1(t) if graph.contains(t.previous, p) => Some(t.previous),
            NavState::MovingToFinal { previous, .. } if graph.contains(*previous, p) => Some(*previous),
            NavState::MovingToCrossingPoint2(t) | NavState::CrossingDoor(t)
                if graph.contains(t.expected, p) =>
            {
                Some(t.expected)
            }
            NavState::NewRoom { expected: Some(room) } if graph.contains(*room, p) => Some(*room),
            _ => graph.room_containing(p),
        }
    }

    fn on_start(&mut self, tick: Tick) {
        if self.current_room.is_some() {
            self.transition(NavState::NewRoom { expected: None }, tick);
        } else {
            warn!(agent = %self.agent, position = %self.position, "start position is outside every room");
            self.transition(NavState::Arrived, tick);
        }
    }

    fn in_new_room<S: NavigationStrategy + ?Sized>(
        &mut self,
        env:      &NavEnv<'_>,
        strategy: &S,
        rng:      &mut AgentRng,
        visits:   &mut VisitLog,
    ) -> NavResult<()> {
        let room = self.current_room.ok_or(NavError::NotInRoom {
            agent: self.agent,
            phase: self.phase(),
        })?;
        visits.register(room);
        let command = strategy.on_entered_new_room(room, &self.context(env, visits), rng);
        self.apply(command, env)
    }

    /// The moving sub-protocol shared by every in-transit state.
    fn moving<S: NavigationStrategy + ?Sized>(
        &mut self,
        env:      &NavEnv<'_>,
        strategy: &S,
        rng:      &mut AgentRng,
        visits:   &VisitLog,
    ) -> NavResult<()> {
        // While approaching a final destination there is no door target;
        // the room being walked in is the one expected.
        let (previous, expected) = match &self.state {
            NavState::MovingToFinal { previous, .. } => (*previous, *previous),
            state => match state.traversal() {
                Some(t) => (t.previous, t.expected),
                None => return Ok(()),
            },
        };

        if let Some(room) = self.current_room.filter(|&r| r != previous) {
            if room == expected {
                self.transition(NavState::NewRoom { expected: Some(expected) }, env.tick);
                return Ok(());
            }
            warn!(
                agent = %self.agent,
                %previous, %expected, actual = %room,
                "entered an unexpected room"
            );
            let command =
                strategy.on_unexpected_room(previous, expected, room, &self.context(env, visits), rng);
            return self.apply(command, env);
        }

        if self.desired_position(env.graph).distance_to(self.position) > self.min_distance {
            return Ok(());
        }
        let next = match self.state {
            NavState::MovingToCrossingPoint1(t) if t.crossing.is_degenerate() => NavState::CrossingDoor(t),
            NavState::MovingToCrossingPoint1(t) => NavState::MovingToCrossingPoint2(t),
            NavState::MovingToCrossingPoint2(t) => NavState::CrossingDoor(t),
            NavState::MovingToFinal { .. } => NavState::Arrived,
            _ => return Ok(()),
        };
        self.transition(next, env.tick);
        Ok(())
    }

    // ── Commands ──────────────────────────────────────────────────────────

    fn context<'a>(&self, env: &NavEnv<'a>, visits: &'a VisitLog) -> NavContext<'a> {
        NavContext {
            tick:           env.tick,
            agent:          self.agent,
            graph:          env.graph,
            position:       self.position,
            current_room:   self.current_room,
            doors_in_sight: self.doors_in_sight(env.graph),
            visits,
        }
    }

    fn apply(&mut self, command: Command, env: &NavEnv<'_>) -> NavResult<()> {
        match command {
            Command::CrossDoor { door, crossing } => self.cross_door(door, crossing, env),
            Command::MoveToFinal(destination) => self.move_to_final(destination, env),
            Command::Stay => Ok(()),
        }
    }

    fn require_room(&self) -> NavResult<RoomId> {
        self.current_room.ok_or(NavError::NotInRoom { agent: self.agent, phase: self.phase() })
    }

    /// Start crossing `door`, which must leave the current room.
    pub(crate) fn cross_door(
        &mut self,
        door:     DoorId,
        crossing: CrossingPoints,
        env:      &NavEnv<'_>,
    ) -> NavResult<()> {
        let room = self.require_room()?;
        if !env.graph.outgoing_doors(room).contains(&door) {
            return Err(NavError::DoorNotInSight {
                agent: self.agent,
                door,
                room,
                phase: self.phase(),
            });
        }
        let traversal = DoorTraversal {
            door,
            previous: room,
            expected: env.graph.target(door),
            crossing,
        };
        self.transition(NavState::MovingToCrossingPoint1(traversal), env.tick);
        Ok(())
    }

    /// Start walking to `destination`, which must lie in the current room.
    pub(crate) fn move_to_final(&mut self, destination: Point2, env: &NavEnv<'_>) -> NavResult<()> {
        let room = self.require_room()?;
        if !env.graph.contains(room, destination) {
            return Err(NavError::DestinationOutsideRoom {
                agent: self.agent,
                destination,
                room,
                phase: self.phase(),
            });
        }
        self.transition(NavState::MovingToFinal { previous: room, destination }, env.tick);
        Ok(())
    }

    fn transition(&mut self, next: NavState, tick: Tick) {
        debug!(
            agent = %self.agent,
            %tick,
            from = ?self.state.phase(),
            to = ?next.phase(),
            room = ?self.current_room,
            "navigation transition"
        );
        self.state = next;
    }
}
