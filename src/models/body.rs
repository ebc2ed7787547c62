use crate::models::Vector;

/// One player's occupied cells, head first, in wire order. Built fresh
/// each turn; no identity is carried across turns.
#[derive(Debug, Clone, Default)]
pub struct Body {
    parts_: Vec<Vector>,
}

impl Body {
    pub fn new() -> Body {
        Default::default()
    }

    pub fn add_part(&mut self, part: Vector) {
        self.parts_.push(part);
    }

    /// The first segment. `None` on an empty body, which is invalid input
    /// the caller has to reject.
    pub fn head(&self) -> Option<Vector> {
        self.parts_.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.parts_.is_empty()
    }

    pub fn intersects(&self, point: Vector) -> bool {
        self.parts_.iter().any(|part| *part == point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_is_first_part() {
        let mut body = Body::new();
        body.add_part(Vector::new(3, 3));
        body.add_part(Vector::new(3, 4));
        assert_eq!(body.head(), Some(Vector::new(3, 3)));
    }

    #[test]
    fn empty_body_has_no_head() {
        assert_eq!(Body::new().head(), None);
        assert!(Body::new().is_empty());
    }

    #[test]
    fn intersects_any_segment() {
        let mut body = Body::new();
        body.add_part(Vector::new(1, 1));
        body.add_part(Vector::new(1, 2));
        assert!(body.intersects(Vector::new(1, 2)));
        assert!(!body.intersects(Vector::new(2, 1)));
    }
}
