use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::direction::Direction;
use crate::error::Error;
use crate::models::{Body, Food, World};
use crate::strategy::{Strategy, Turn};

/// The engine must answer well inside the API's per-move deadline.
const MOVE_TIME_BUDGET: Duration = Duration::from_millis(500);

pub struct TimingWrapper<S: Strategy> {
    strategy: S,
}

impl<S: Strategy> TimingWrapper<S> {
    pub fn new(strategy: S) -> TimingWrapper<S> {
        TimingWrapper { strategy }
    }
}

impl<S: Strategy> Strategy for TimingWrapper<S> {
    fn decide(
        &mut self,
        turn: Turn,
        world: &World,
        food: &[Food],
        you: &Body,
    ) -> Result<Option<Direction>, Error> {
        let start = Instant::now();
        let decision = self.strategy.decide(turn, world, food, you);
        let elapsed = start.elapsed();
        if elapsed > MOVE_TIME_BUDGET {
            warn!("SLOW: turn {} took {:?}", turn, elapsed);
        } else {
            debug!("OK: turn {} took {:?}", turn, elapsed);
        }
        decision
    }
}
