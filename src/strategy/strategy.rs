use crate::direction::Direction;
use crate::error::Error;
use crate::models::{Body, Food, World};

pub type Turn = i64;

pub trait Strategy {
    /// One turn's decision over a fully built snapshot. `Ok(None)` is the
    /// no-candidates outcome: every direction was eliminated and the
    /// caller has to pick the wire token itself. `Err` only on invalid
    /// state, such as an empty own body.
    fn decide(
        &mut self,
        turn: Turn,
        world: &World,
        food: &[Food],
        you: &Body,
    ) -> Result<Option<Direction>, Error>;
}
