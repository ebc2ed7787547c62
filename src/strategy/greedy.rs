use log::debug;
use rand::seq::SliceRandom;

use crate::direction::Direction;
use crate::error::Error;
use crate::models::{Body, Food, HasPoint, Vector, World};
use crate::strategy::{Strategy, Turn};

/// Greedy one-step strategy: walk toward the nearest food, never into a
/// wall or a body. No look-ahead, no opponent modeling; each turn stands
/// alone.
#[derive(Debug, Default)]
pub struct GreedyStrategy;

impl GreedyStrategy {
    pub fn new() -> GreedyStrategy {
        Default::default()
    }
}

impl Strategy for GreedyStrategy {
    fn decide(
        &mut self,
        turn: Turn,
        world: &World,
        food: &[Food],
        you: &Body,
    ) -> Result<Option<Direction>, Error> {
        let head = you.head().ok_or(Error::EmptyBody)?;
        let target = nearest(head, food);
        if let Some(target) = target {
            debug!(
                "turn {}: nearest food at ({}, {}), {:.2} away",
                turn,
                target.x(),
                target.y(),
                head.dist(target.point())
            );
        }

        let in_bounds = legal_moves(world, head);

        // One pass over the post-boundary set; each direction is judged
        // on its own, so dropping one never changes the verdict on
        // another.
        let mut open: Vec<Direction> = in_bounds
            .iter()
            .copied()
            .filter(|dir| {
                !world.is_obstacle(head + dir.vector())
                    && target.map_or(true, |f| dir.approaches(head, f.point()))
            })
            .collect();

        if open.is_empty() && target.is_some() {
            // Every food-approaching move is blocked. Survival beats
            // appetite: retry with the food constraint dropped.
            debug!("turn {}: food unreachable, falling back to any safe move", turn);
            open = in_bounds
                .iter()
                .copied()
                .filter(|dir| !world.is_obstacle(head + dir.vector()))
                .collect();
        }

        Ok(open.choose(&mut rand::thread_rng()).copied())
    }
}

/// The directions that keep the head on the board.
pub fn legal_moves(world: &World, head: Vector) -> Vec<Direction> {
    Direction::ALL
        .iter()
        .copied()
        .filter(|dir| match dir {
            Direction::Left => head.x > 0,
            Direction::Right => head.x < world.width() - 1,
            Direction::Up => head.y > 0,
            Direction::Down => head.y < world.height() - 1,
        })
        .collect()
}

/// Strictly-closer-wins scan; on equal distance the earliest item is
/// kept.
fn nearest<T: HasPoint>(from: Vector, items: &[T]) -> Option<&T> {
    let mut best: Option<(&T, i64)> = None;
    for item in items {
        let d = from.qdist(item.point());
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((item, d));
        }
    }
    best.map(|(item, _)| item)
}
