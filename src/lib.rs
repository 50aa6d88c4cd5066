//! Closed-boundary reconstruction for floor plans.
//!
//! A [`Plan`] holds nodes, the walls joining them, and areas naming subsets
//! of walls. [`CalculatePaths`] turns one area's walls back into the ordered
//! loops that bound it, marking loops nested inside others as holes.

pub mod error;
pub mod math;
pub mod model;
pub mod operations;

pub use error::{Result, RoomtraceError};
pub use model::{Area, AreaId, Hole, HoleId, Node, NodeId, Plan, Wall, WallId};
pub use operations::{CalculatePaths, Path, PathWall};
