//! Geometry of everything drawn on the board: cell mapping, region outlines, colors

mod color;
pub mod grid;
mod offset;
pub mod path;
pub mod point;
mod round;
mod shape;
pub mod svg;

pub use color::Color;
pub use grid::GridPoint;
pub use offset::offset_outward;
pub use path::{Path, PathCommand, PathFromDataError};
pub use point::{Distance, Point};
pub use round::round_corners;
pub use shape::Shape;
