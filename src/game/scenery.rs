//! Decorative background items. They never collide with anything, they only
//! spawn at the right edge, drift left and disappear.

use rand::Rng;

use super::{
    is_due,
    object::{scroll, Scrolling},
    Field,
};
use crate::constants::game;

#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Ground-anchored, `x` is the left foot.
#[derive(Debug, Clone, PartialEq)]
pub struct Mountain {
    pub x: f64,
    pub height: f64,
}

/// Ground-anchored, `x` is the trunk axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    pub x: f64,
    pub height: f64,
}

impl Scrolling for Cloud {
    fn move_left(&mut self, step: f64) {
        self.x -= step;
    }

    fn right_edge(&self) -> f64 {
        self.x + self.radius
    }
}

impl Scrolling for Mountain {
    fn move_left(&mut self, step: f64) {
        self.x -= step;
    }

    fn right_edge(&self) -> f64 {
        self.x + game::MOUNTAIN_WIDTH
    }
}

impl Scrolling for Tree {
    fn move_left(&mut self, step: f64) {
        self.x -= step;
    }

    fn right_edge(&self) -> f64 {
        self.x + game::TREE_WIDTH
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scenery {
    pub clouds: Vec<Cloud>,
    pub mountains: Vec<Mountain>,
    pub trees: Vec<Tree>,
}

impl Scenery {
    pub fn update<R: Rng + ?Sized>(&mut self, field: &Field, frame: u64, rng: &mut R) {
        if is_due(frame, game::CLOUD_PERIOD) {
            let y = rng.gen::<f64>() * field.height() / 2.0;
            let radius = rng.gen_range(game::CLOUD_RADIUS);
            self.clouds.push(Cloud { x: field.width(), y, radius });
        }
        scroll(&mut self.clouds, game::SCENERY_SPEED);

        if is_due(frame, game::MOUNTAIN_PERIOD) {
            let height = rng.gen_range(game::MOUNTAIN_HEIGHT);
            self.mountains.push(Mountain { x: field.width(), height });
        }
        if is_due(frame, game::TREE_PERIOD) {
            let height = rng.gen_range(game::TREE_HEIGHT);
            self.trees.push(Tree { x: field.width(), height });
        }
        scroll(&mut self.mountains, game::SCENERY_SPEED);
        scroll(&mut self.trees, game::SCENERY_SPEED);
    }

    pub fn len(&self) -> usize {
        self.clouds.len() + self.mountains.len() + self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn run(scenery: &mut Scenery, frames: std::ops::Range<u64>, seed: u64) {
        let field = Field::default();
        let mut rng = StdRng::seed_from_u64(seed);
        for frame in frames {
            scenery.update(&field, frame, &mut rng);
        }
    }

    #[test]
    fn test_first_frame_spawns_everything() {
        let mut scenery = Scenery::default();
        run(&mut scenery, 0..1, 11);
        assert_eq!((scenery.clouds.len(), scenery.mountains.len(), scenery.trees.len()), (1, 1, 1));
        assert_eq!(scenery.clouds[0].x, 798.0);
        assert_eq!(scenery.mountains[0].x, 798.0);
        assert_eq!(scenery.trees[0].x, 798.0);
    }

    #[test]
    fn test_independent_cadences() {
        let mut scenery = Scenery::default();
        // 0..=300: clouds at 0,100,200,300; trees at 0,150,300; mountains at 0,200
        run(&mut scenery, 0..301, 12);
        assert_eq!(scenery.clouds.len(), 4);
        assert_eq!(scenery.trees.len(), 3);
        assert_eq!(scenery.mountains.len(), 2);
    }

    #[test]
    fn test_sizes_stay_in_range() {
        let mut scenery = Scenery::default();
        let field = Field::default();
        let mut rng = StdRng::seed_from_u64(13);
        for round in 0..200 {
            // Every item kind fires on multiples of 600
            scenery.update(&field, round * 600, &mut rng);
        }
        assert!(scenery
            .clouds
            .iter()
            .all(|cloud| game::CLOUD_RADIUS.contains(&cloud.radius) && (0.0..300.0).contains(&cloud.y)));
        assert!(scenery.mountains.iter().all(|mountain| game::MOUNTAIN_HEIGHT.contains(&mountain.height)));
        assert!(scenery.trees.iter().all(|tree| game::TREE_HEIGHT.contains(&tree.height)));
    }

    #[test]
    fn test_culling_keeps_memory_bounded() {
        let mut scenery = Scenery::default();
        run(&mut scenery, 0..5000, 14);
        // Items live at most (800 + extent) / 2 frames
        assert!(scenery.clouds.len() <= 5);
        assert!(scenery.trees.len() <= 3);
        assert!(scenery.mountains.len() <= 3);
        assert!(scenery.clouds.iter().all(|cloud| !cloud.culled()));
        assert!(scenery.mountains.iter().all(|mountain| !mountain.culled()));
        assert!(scenery.trees.iter().all(|tree| !tree.culled()));
    }

    #[test]
    fn test_mountain_culled_at_full_width() {
        let mut scenery = Scenery { mountains: vec![Mountain { x: -98.0, height: 80.0 }], ..Default::default() };
        // Frame 1 does not spawn anything
        run(&mut scenery, 1..2, 15);
        assert!(scenery.mountains.is_empty());
        assert!(scenery.is_empty());
    }
}
