mod edges;
mod enums;

pub use edges::Edges;
pub use enums::{Direction, Display, Position, Size};
