//! Cognitive maps and the known/unknown destination classifier.
//!
//! A pedestrian's cognitive map is a private set of landmark shapes.  A
//! destination counts as *known* when a landmark's centroid lies in the
//! room containing the destination or in a room one door away from it,
//! whichever way that door points.
//! Known destinations can be pursued directly; unknown ones call for
//! exploration.

use nav_geometry::{ConvexPolygon, Point2};
use nav_graph::RegionGraph;

/// Landmarks a pedestrian remembers.
#[derive(Clone, Debug, Default)]
pub struct CognitiveMap {
    landmarks: Vec<ConvexPolygon>,
    centroids: Vec<Point2>,
}

impl CognitiveMap {
    pub fn new(landmarks: Vec<ConvexPolygon>) -> Self {
        let centroids = landmarks.iter().map(ConvexPolygon::centroid).collect();
        Self { landmarks, centroids }
    }

    /// A map with no landmarks: every destination is unknown.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn landmarks(&self) -> &[ConvexPolygon] {
        &self.landmarks
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// `true` if a landmark centroid lies in the room containing
    /// `destination` or in a room adjacent to it through a door in either
    /// direction.
    ///
    /// A destination outside every room is never known.
    pub fn is_known(&self, graph: &dyn RegionGraph, destination: Point2) -> bool {
        let Some(room) = graph.room_containing(destination) else {
            return false;
        };
        let mut neighborhood = graph.adjacent_rooms(room);
        neighborhood.push(room);
        self.centroids
            .iter()
            .any(|&c| neighborhood.iter().any(|&r| graph.contains(r, c)))
    }

    /// Partition `destinations` into known and unknown, keeping input order
    /// within each side.
    pub fn classify(&self, graph: &dyn RegionGraph, destinations: &[Point2]) -> DestinationKnowledge {
        let (known, unknown) = destinations
            .iter()
            .copied()
            .partition(|&d| self.is_known(graph, d));
        DestinationKnowledge { known, unknown }
    }
}

/// Destinations split by whether the pedestrian knows where they are.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DestinationKnowledge {
    pub known:   Vec<Point2>,
    pub unknown: Vec<Point2>,
}

impl DestinationKnowledge {
    /// Known destinations first, then unknown ones.
    pub fn all(&self) -> impl Iterator<Item = Point2> + '_ {
        self.known.iter().chain(self.unknown.iter()).copied()
    }
}
