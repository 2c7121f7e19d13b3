//! Planar geometry used by the distance-based evidence sources.
//!
//! All coordinates are projected metres. The only non-trivial operation is
//! point-to-polyline distance: for each consecutive vertex pair the query
//! point is projected onto the segment, the projection parameter is clamped
//! to the segment span, and the minimum distance over all segments wins.
//!
//! Complexity is O(segments) per query.

mod bounds;
mod polyline;
mod segment;

pub use bounds::BoundingBox;
pub use polyline::{distance_to_polyline, Polyline};
pub use segment::Segment;
