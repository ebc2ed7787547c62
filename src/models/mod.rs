pub use self::body::Body;
pub use self::food::Food;
pub use self::vector::{HasPoint, Vector};
pub use self::world::World;

mod body;
mod food;
mod vector;
mod world;
