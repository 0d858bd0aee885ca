//! Strongly typed identifier wrappers.
//!
//! Rooms are the vertices of the navigation graph and doors its directed
//! edges; both are dense indices assigned in insertion order, so the inner
//! integer doubles as a `Vec` index.  Agents are indexed the same way in the
//! pedestrian store.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel for "no such element".
            pub const INVALID: $name = $name(<$inner>::MAX);

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }
    };
}

typed_id! {
    /// Index of a pedestrian in the agent store.
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of a convex room (navigation-graph vertex).
    ///
    /// Ascending `RoomId` order is the graph's vertex iteration order, which
    /// resolves ties when several rooms contain the same point.
    pub struct RoomId(u32);
}

typed_id! {
    /// Index of a directed door (navigation-graph edge).
    pub struct DoorId(u32);
}
