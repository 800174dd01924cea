/// Axis-aligned box in field units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    // Strict on both axes, boxes sharing an edge do not overlap
    pub fn overlaps(&self, other: &Bounds) -> bool {
        interval_sec(self.x, self.right(), other.x, other.right())
            && interval_sec(self.y, self.bottom(), other.y, other.bottom())
    }
}

fn interval_sec(l1: f64, r1: f64, l2: f64, r2: f64) -> bool {
    l1 < r2 && r1 > l2
}

/// Anything that takes part in collision checks.
pub trait Object {
    fn bounds(&self) -> Bounds;

    fn collides_with<T: Object>(&self, other: &T) -> bool {
        self.bounds().overlaps(&other.bounds())
    }
}

/// Items drifting towards the left edge.
pub trait Scrolling {
    fn move_left(&mut self, step: f64);

    /// Rightmost x the item still covers.
    fn right_edge(&self) -> f64;

    fn culled(&self) -> bool {
        self.right_edge() <= 0.0
    }
}

/// Shifts every item left by `step`, then drops the ones fully past the left edge.
pub fn scroll<T: Scrolling>(items: &mut Vec<T>, step: f64) {
    for item in items.iter_mut() {
        item.move_left(step);
    }
    items.retain(|item| !item.culled());
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Plank(f64);

    impl Scrolling for Plank {
        fn move_left(&mut self, step: f64) {
            self.0 -= step;
        }

        fn right_edge(&self) -> f64 {
            self.0 + 10.0
        }
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Bounds { x: 0.0, y: 0.0, width: 10.0, height: 10.0 };
        let touching = Bounds { x: 10.0, y: 0.0, width: 10.0, height: 10.0 };
        let inside = Bounds { x: 9.0, y: 9.0, width: 10.0, height: 10.0 };
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn test_scroll_culls_in_the_same_pass() {
        let mut planks = vec![Plank(-7.0), Plank(-6.0), Plank(100.0)];
        scroll(&mut planks, 3.0);
        // -10 + 10 == 0 is culled, -9 + 10 survives
        assert_eq!(planks, vec![Plank(-9.0), Plank(97.0)]);
    }
}
