use crate::models::{HasPoint, Vector};

/// A cell tagged as food. Plain position, nothing else to it.
#[derive(Debug, Clone, Copy)]
pub struct Food {
    pub point_: Vector,
}

impl HasPoint for Food {
    fn point(&self) -> Vector {
        self.point_
    }
}
