//! Unit tests for nav-graph.
//!
//! All tests use a hand-crafted floor plan.

#[cfg(test)]
mod helpers {
    use nav_core::RoomId;
    use nav_geometry::{ConvexPolygon, Point2};

    use crate::{CrossingPoints, NavigationGraph, NavigationGraphBuilder};

    pub fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    pub fn rect(x: f64, y: f64, w: f64, h: f64) -> ConvexPolygon {
        ConvexPolygon::rectangle(x, y, w, h).unwrap()
    }

    /// Floor plan:
    ///
    /// ```text
    ///   y=8 +------+
    ///       |  3   |
    ///   y=4 +------+------+     +------+
    ///       |  0   |  1   |     |  2   |
    ///   y=0 +------+------+     +------+
    ///       x=0    4      8    10     14
    /// ```
    ///
    /// Passages: 0-1 at (4,2), 1-2 across the gap (8,2)→(10,2), 0-3 at (2,4).
    pub fn floor_plan() -> (NavigationGraph, [RoomId; 4]) {
        let mut b = NavigationGraphBuilder::new();
        let r0 = b.add_room(rect(0.0, 0.0, 4.0, 4.0));
        let r1 = b.add_room(rect(4.0, 0.0, 4.0, 4.0));
        let r2 = b.add_room(rect(10.0, 0.0, 4.0, 4.0));
        let r3 = b.add_room(rect(0.0, 4.0, 4.0, 4.0));
        b.add_passage(r0, r1, CrossingPoints::at(p(4.0, 2.0)));
        b.add_passage(r1, r2, CrossingPoints::new(p(8.0, 2.0), p(10.0, 2.0)));
        b.add_passage(r0, r3, CrossingPoints::at(p(2.0, 4.0)));
        (b.build().unwrap(), [r0, r1, r2, r3])
    }
}

// ── Builder & graph structure ─────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use nav_core::RoomId;

    use super::helpers::{floor_plan, p, rect};
    use crate::{CrossingPoints, GraphError, NavigationGraphBuilder, RegionGraph};

    #[test]
    fn empty_build() {
        let graph = NavigationGraphBuilder::new().build().unwrap();
        assert_eq!(graph.room_count(), 0);
        assert_eq!(graph.door_count(), 0);
        assert!(graph.is_empty());
        assert!(graph.room_containing(p(0.0, 0.0)).is_none());
    }

    #[test]
    fn csr_outgoing_doors() {
        let (graph, [r0, r1, r2, r3]) = floor_plan();
        assert_eq!(graph.door_count(), 6);
        assert_eq!(graph.out_degree(r0), 2);
        assert_eq!(graph.out_degree(r1), 2);
        assert_eq!(graph.out_degree(r2), 1);
        assert_eq!(graph.out_degree(r3), 1);
        for room in [r0, r1, r2, r3] {
            for &door in graph.outgoing_doors(room) {
                assert_eq!(graph.source(door), room);
            }
        }
    }

    #[test]
    fn doors_keep_insertion_order_per_room() {
        let (graph, [r0, r1, _, r3]) = floor_plan();
        let targets: Vec<RoomId> =
            graph.outgoing_doors(r0).iter().map(|&d| graph.target(d)).collect();
        assert_eq!(targets, vec![r1, r3]);
    }

    #[test]
    fn passage_reverses_crossing_points() {
        let (graph, [_, r1, r2, _]) = floor_plan();
        let forward = graph.door_between(r1, r2).unwrap();
        let back = graph.door_between(r2, r1).unwrap();
        assert_eq!(graph.crossing_points(forward).first, p(8.0, 2.0));
        assert_eq!(graph.crossing_points(back).first, p(10.0, 2.0));
        assert!(!graph.crossing_points(forward).is_degenerate());
    }

    #[test]
    fn neighbors_are_distinct() {
        let mut b = NavigationGraphBuilder::new();
        let a = b.add_room(rect(0.0, 0.0, 4.0, 4.0));
        let c = b.add_room(rect(4.0, 0.0, 4.0, 4.0));
        b.add_door(a, c, CrossingPoints::at(p(4.0, 1.0)));
        b.add_door(a, c, CrossingPoints::at(p(4.0, 3.0)));
        let graph = b.build().unwrap();
        assert_eq!(graph.outgoing_doors(a).len(), 2);
        assert_eq!(graph.neighbors(a), vec![c]);
        assert!(graph.neighbors(c).is_empty());
    }

    #[test]
    fn adjacent_rooms_follow_doors_both_ways() {
        let mut b = NavigationGraphBuilder::new();
        let a = b.add_room(rect(0.0, 0.0, 4.0, 4.0));
        let c = b.add_room(rect(4.0, 0.0, 4.0, 4.0));
        let d = b.add_room(rect(8.0, 0.0, 4.0, 4.0));
        b.add_door(a, c, CrossingPoints::at(p(4.0, 2.0)));
        b.add_passage(c, d, CrossingPoints::at(p(8.0, 2.0)));
        let graph = b.build().unwrap();
        assert_eq!(graph.neighbors(c), vec![d]);
        assert_eq!(graph.adjacent_rooms(c), vec![d, a]);
        assert_eq!(graph.adjacent_rooms(a), vec![c]);
        assert_eq!(graph.adjacent_rooms(d), vec![c]);
    }

    #[test]
    fn unknown_room_rejected() {
        let mut b = NavigationGraphBuilder::new();
        let a = b.add_room(rect(0.0, 0.0, 4.0, 4.0));
        b.add_door(a, RoomId(7), CrossingPoints::at(p(4.0, 1.0)));
        assert!(matches!(b.build(), Err(GraphError::RoomNotFound(RoomId(7)))));
    }

    #[test]
    fn crossing_outside_room_rejected() {
        let mut b = NavigationGraphBuilder::new();
        let a = b.add_room(rect(0.0, 0.0, 4.0, 4.0));
        let c = b.add_room(rect(10.0, 0.0, 4.0, 4.0));
        b.add_door(a, c, CrossingPoints::at(p(4.0, 2.0)));
        assert!(matches!(
            b.build(),
            Err(GraphError::CrossingOutsideRoom { room, .. }) if room == c
        ));
    }

    #[test]
    fn bad_vertices_rejected() {
        let mut b = NavigationGraphBuilder::new();
        let err = b.add_room_from_vertices(vec![p(0.0, 0.0), p(1.0, 1.0)]).unwrap_err();
        assert!(matches!(err, GraphError::Geometry(_)));
        assert_eq!(b.room_count(), 0);
    }
}

// ── Room lookup ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod lookup {
    use super::helpers::{floor_plan, p};
    use crate::RegionGraph;

    #[test]
    fn interior_points() {
        let (graph, [r0, r1, r2, r3]) = floor_plan();
        assert_eq!(graph.room_containing(p(1.0, 1.0)), Some(r0));
        assert_eq!(graph.room_containing(p(6.0, 1.0)), Some(r1));
        assert_eq!(graph.room_containing(p(12.0, 3.0)), Some(r2));
        assert_eq!(graph.room_containing(p(2.0, 6.0)), Some(r3));
    }

    #[test]
    fn gap_is_outside_every_room() {
        let (graph, _) = floor_plan();
        assert_eq!(graph.room_containing(p(9.0, 2.0)), None);
        assert_eq!(graph.room_containing(p(-1.0, 2.0)), None);
    }

    #[test]
    fn shared_edge_prefers_lowest_id() {
        let (graph, [r0, ..]) = floor_plan();
        // (4, 2) is on the edge between room 0 and room 1.
        assert_eq!(graph.room_containing(p(4.0, 2.0)), Some(r0));
        // (2, 4) is on the edge between room 0 and room 3.
        assert_eq!(graph.room_containing(p(2.0, 4.0)), Some(r0));
    }

    #[test]
    fn indexed_lookup_matches_linear_scan() {
        struct Linear<'a>(&'a crate::NavigationGraph);

        impl RegionGraph for Linear<'_> {
            fn room_count(&self) -> usize { self.0.room_count() }
            fn contains(&self, r: nav_core::RoomId, q: nav_geometry::Point2) -> bool { self.0.contains(r, q) }
            fn centroid(&self, r: nav_core::RoomId) -> nav_geometry::Point2 { self.0.centroid(r) }
            fn outgoing_doors(&self, r: nav_core::RoomId) -> &[nav_core::DoorId] { self.0.outgoing_doors(r) }
            fn source(&self, d: nav_core::DoorId) -> nav_core::RoomId { self.0.source(d) }
            fn target(&self, d: nav_core::DoorId) -> nav_core::RoomId { self.0.target(d) }
            fn crossing_points(&self, d: nav_core::DoorId) -> crate::CrossingPoints { self.0.crossing_points(d) }
        }

        let (graph, _) = floor_plan();
        let linear = Linear(&graph);
        for x in -2..16 {
            for y in -2..10 {
                let q = p(f64::from(x) * 0.5 + 0.25, f64::from(y));
                assert_eq!(graph.room_containing(q), linear.room_containing(q), "at {q}");
            }
        }
    }

    #[test]
    fn centroids_cached() {
        let (graph, [r0, _, r2, _]) = floor_plan();
        assert!(graph.centroid(r0).fuzzy_eq(p(2.0, 2.0)));
        assert!(graph.centroid(r2).fuzzy_eq(p(12.0, 2.0)));
    }
}

// ── Routing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use super::helpers::{floor_plan, p, rect};
    use crate::{
        CrossingPoints, DijkstraRoomRouter, GraphError, NavigationGraphBuilder, RegionGraph,
        RoomRouter,
    };

    #[test]
    fn trivial_same_room() {
        let (graph, [r0, ..]) = floor_plan();
        let route = DijkstraRoomRouter.route(&graph, r0, r0).unwrap();
        assert!(route.is_trivial());
        assert_eq!(route.next_door(), None);
        assert_eq!(route.total_length, 0.0);
    }

    #[test]
    fn multi_hop_route() {
        let (graph, [r0, r1, r2, r3]) = floor_plan();
        let route = DijkstraRoomRouter.route(&graph, r3, r2).unwrap();
        assert_eq!(route.doors.len(), 3);
        assert_eq!(graph.source(route.doors[0]), r3);
        assert_eq!(graph.target(route.doors[0]), r0);
        assert_eq!(graph.target(route.doors[1]), r1);
        assert_eq!(graph.target(route.doors[2]), r2);
        // centroids (2,6)→(2,2)→(6,2)→(12,2) via doors on the straight line.
        assert!((route.total_length - (4.0 + 4.0 + 6.0)).abs() < 1e-9);
    }

    #[test]
    fn shorter_of_two_doors() {
        let mut b = NavigationGraphBuilder::new();
        let a = b.add_room(rect(0.0, 0.0, 4.0, 4.0));
        let c = b.add_room(rect(4.0, 0.0, 4.0, 4.0));
        b.add_door(a, c, CrossingPoints::at(p(4.0, 0.0)));
        b.add_door(a, c, CrossingPoints::at(p(4.0, 2.0)));
        let graph = b.build().unwrap();
        let route = DijkstraRoomRouter.route(&graph, a, c).unwrap();
        assert_eq!(route.doors.len(), 1);
        assert_eq!(graph.crossing_points(route.doors[0]).first, p(4.0, 2.0));
    }

    #[test]
    fn no_route_one_way() {
        let mut b = NavigationGraphBuilder::new();
        let a = b.add_room(rect(0.0, 0.0, 4.0, 4.0));
        let c = b.add_room(rect(4.0, 0.0, 4.0, 4.0));
        b.add_door(a, c, CrossingPoints::at(p(4.0, 2.0)));
        let graph = b.build().unwrap();
        assert!(DijkstraRoomRouter.route(&graph, a, c).is_ok());
        assert!(matches!(
            DijkstraRoomRouter.route(&graph, c, a),
            Err(GraphError::NoRoute { .. })
        ));
    }

    #[test]
    fn router_is_object_safe() {
        let (graph, [r0, r1, ..]) = floor_plan();
        let router: Box<dyn RoomRouter> = Box::new(DijkstraRoomRouter);
        let dyn_graph: &dyn RegionGraph = &graph;
        assert_eq!(router.route(dyn_graph, r0, r1).unwrap().doors.len(), 1);
    }
}
