use crate::models::{Body, Vector};

/// The board for one turn: dimensions plus every player's body. Single
/// use; there is no removal.
#[derive(Debug)]
pub struct World {
    width_: i64,
    height_: i64,
    bodies_: Vec<Body>,
}

impl World {
    pub fn new(width: i64, height: i64) -> World {
        World {
            width_: width,
            height_: height,
            bodies_: vec![],
        }
    }

    pub fn width(&self) -> i64 {
        self.width_
    }

    pub fn height(&self) -> i64 {
        self.height_
    }

    pub fn add_body(&mut self, body: Body) {
        self.bodies_.push(body);
    }

    /// True iff any registered body occupies the cell. The agent's own
    /// body counts: moving into yourself is a collision like any other.
    pub fn is_obstacle(&self, point: Vector) -> bool {
        self.bodies_.iter().any(|body| body.intersects(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obstacles_span_all_bodies() {
        let mut world = World::new(5, 5);
        let mut a = Body::new();
        a.add_part(Vector::new(1, 1));
        let mut b = Body::new();
        b.add_part(Vector::new(3, 3));
        b.add_part(Vector::new(3, 4));
        world.add_body(a);
        world.add_body(b);

        assert!(world.is_obstacle(Vector::new(1, 1)));
        assert!(world.is_obstacle(Vector::new(3, 4)));
        assert!(!world.is_obstacle(Vector::new(2, 2)));
    }

    #[test]
    fn empty_world_has_no_obstacles() {
        let world = World::new(3, 3);
        assert!(!world.is_obstacle(Vector::new(0, 0)));
    }
}
