pub use builder::{build, Matrices};
pub use directions::Directions;
pub use grid::Grid;

mod builder;
mod directions;
mod grid;
