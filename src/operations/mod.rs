pub mod paths;

pub use paths::{CalculatePaths, Path, PathWall};
