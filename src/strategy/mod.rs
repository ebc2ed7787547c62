pub use self::greedy::{legal_moves, GreedyStrategy};
pub use self::strategy::{Strategy, Turn};
#[cfg(feature = "debug")]
pub use self::timing_wrapper::TimingWrapper;
pub use crate::direction::Direction;
pub use crate::models::*;

mod greedy;
mod strategy;
#[cfg(feature = "debug")]
mod timing_wrapper;
