//! A strategy that never moves.

use nav_core::{AgentRng, RoomId};

use crate::{Command, NavContext, NavigationStrategy};

/// A [`NavigationStrategy`] that always answers [`Command::Stay`].
///
/// Useful as a placeholder in tests or for pedestrians that only occupy a
/// room.
pub struct StayPut;

impl NavigationStrategy for StayPut {
    fn on_entered_new_room(
        &self,
        _room: RoomId,
        _ctx:  &NavContext<'_>,
        _rng:  &mut AgentRng,
    ) -> Command {
        Command::Stay
    }
}
