//! The `NavigationStrategy` trait — the extension point for route choice.

use nav_core::{AgentRng, RoomId};

use crate::{Command, NavContext};

/// Pluggable navigation decisions.
///
/// The state machine decides *when* a decision is needed; a strategy decides
/// *what* to do.  Hooks fire when the agent settles into a new room and when
/// it ends up in a room it did not expect.  Each returns one [`Command`].
///
/// # Required methods
///
/// Only [`on_entered_new_room`][Self::on_entered_new_room] is required.  The
/// unexpected-room hook defaults to re-planning as if `actual` had just been
/// entered normally.
///
/// # Thread safety
///
/// Agents may be updated in parallel, so implementations must be
/// `Send + Sync`.  Per-agent state belongs in the agent store or in data
/// indexed by `ctx.agent`, never in interior mutability.
pub trait NavigationStrategy: Send + Sync + 'static {
    /// The agent has entered `room` and it has been recorded as visited.
    fn on_entered_new_room(
        &self,
        room: RoomId,
        ctx:  &NavContext<'_>,
        rng:  &mut AgentRng,
    ) -> Command;

    /// The agent left `previous` heading for `expected` but is now in
    /// `actual`.
    fn on_unexpected_room(
        &self,
        _previous: RoomId,
        _expected: RoomId,
        actual:    RoomId,
        ctx:       &NavContext<'_>,
        rng:       &mut AgentRng,
    ) -> Command {
        self.on_entered_new_room(actual, ctx, rng)
    }
}
