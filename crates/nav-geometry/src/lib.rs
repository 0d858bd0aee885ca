//! `nav-geometry` — the geometric kernel used by the navigation state machine.
//!
//! Everything here is pure and stateless: values are `Copy` (or cheaply
//! `Clone`), operations are functions of their inputs, and no type holds
//! interior mutability.  The kernel can therefore be shared freely across
//! agents and worker threads.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                    |
//! |------------------|-------------------------------------------------------------|
//! | [`tolerance`]    | `EPSILON` and the fuzzy comparison helpers                  |
//! | [`point`]        | `Point2` — position and vector in the Euclidean plane       |
//! | [`segment`]      | `Segment` — distance, containment, collinearity, intersect  |
//! | [`line`]         | `Line` — slope / intercept form derived from a segment      |
//! | [`circle`]       | `Circle`                                                     |
//! | [`intersection`] | `Intersection` result enum                                  |
//! | [`polygon`]      | `ConvexPolygon` — room shape with containment and centroid  |
//! | [`error`]        | `GeometryError`, `GeometryResult<T>`                        |
//!
//! # Tolerance
//!
//! All comparisons go through [`tolerance::fuzzy_eq`] and friends rather than
//! `==` on floats, consistently for lengths, parameters, and coordinates.

pub mod circle;
pub mod error;
pub mod intersection;
pub mod line;
pub mod point;
pub mod polygon;
pub mod segment;
pub mod tolerance;


pub use circle::Circle;
pub use error::{GeometryError, GeometryResult};
pub use intersection::Intersection;
pub use line::Line;
pub use point::Point2;
pub use polygon::ConvexPolygon;
pub use segment::Segment;
pub use tolerance::{EPSILON, fuzzy_eq, fuzzy_zero};
