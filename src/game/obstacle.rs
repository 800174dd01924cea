use derive_deref::Deref;
use rand::Rng;

use super::{
    is_due,
    object::{scroll, Bounds, Object, Scrolling},
    Field,
};
use crate::constants::game;

#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Obstacle {
    /// A top and bottom obstacle at the right edge, leaving a gap below `top_height`.
    pub fn pair(field: &Field, top_height: f64) -> [Obstacle; 2] {
        let x = field.width();
        let bottom_y = top_height + game::OBSTACLE_GAP;
        [
            Obstacle { x, y: 0.0, width: game::OBSTACLE_WIDTH, height: top_height },
            Obstacle { x, y: bottom_y, width: game::OBSTACLE_WIDTH, height: field.height() - bottom_y },
        ]
    }
}

impl Object for Obstacle {
    fn bounds(&self) -> Bounds {
        Bounds { x: self.x, y: self.y, width: self.width, height: self.height }
    }
}

impl Scrolling for Obstacle {
    fn move_left(&mut self, step: f64) {
        self.x -= step;
    }

    fn right_edge(&self) -> f64 {
        self.x + self.width
    }
}

/// Obstacles in spawn order, which is also left-to-right order on screen.
#[derive(Debug, Clone, Default, Deref)]
pub struct Obstacles(Vec<Obstacle>);

impl Obstacles {
    /// Whole-unit top height in `[0, height - gap)`.
    pub fn sample_top_height<R: Rng + ?Sized>(field: &Field, rng: &mut R) -> f64 {
        (rng.gen::<f64>() * (field.height() - game::OBSTACLE_GAP)).floor()
    }

    /// Spawns a pair when the cadence fires, then scrolls and culls.
    /// Returns whether a pair was spawned this frame.
    pub fn update<R: Rng + ?Sized>(&mut self, field: &Field, frame: u64, rng: &mut R) -> bool {
        let spawned = is_due(frame, game::OBSTACLE_PERIOD);
        if spawned {
            let top_height = Self::sample_top_height(field, rng);
            self.0.extend(Obstacle::pair(field, top_height));
        }

        scroll(&mut self.0, game::OBSTACLE_SPEED);
        spawned
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&Obstacle, &Obstacle)> {
        self.0.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_pair_geometry() {
        let field = Field::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let top_height = Obstacles::sample_top_height(&field, &mut rng);
            assert!((0.0..450.0).contains(&top_height));
            assert_eq!(top_height.fract(), 0.0);

            let [top, bottom] = Obstacle::pair(&field, top_height);
            assert_eq!(top.y, 0.0);
            assert_eq!(bottom.y, top.height + game::OBSTACLE_GAP);
            assert_eq!(top.height + game::OBSTACLE_GAP + bottom.height, field.height());
            assert!(bottom.height > 0.0);
            assert_eq!((top.x, bottom.x), (800.0, 800.0));
            assert_eq!((top.width, bottom.width), (40.0, 40.0));
        }
    }

    #[test]
    fn test_spawn_cadence() {
        let field = Field::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut obstacles = Obstacles::default();

        let spawns: Vec<u64> = (0..281).filter(|frame| obstacles.update(&field, *frame, &mut rng)).collect();
        assert_eq!(spawns, vec![0, 90, 180, 270]);
        // The first pair reaches x + width == 0 on frame 279
        assert_eq!(obstacles.pairs().count(), 3);
    }

    #[test]
    fn test_scroll_speed() {
        let field = Field::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut obstacles = Obstacles::default();

        obstacles.update(&field, 0, &mut rng);
        assert_eq!(obstacles[0].x, 797.0);
        obstacles.update(&field, 1, &mut rng);
        assert!(obstacles.iter().all(|obstacle| obstacle.x == 794.0));
    }

    #[test]
    fn test_culled_once_past_the_left_edge() {
        let field = Field::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut obstacles = Obstacles::default();

        obstacles.update(&field, 0, &mut rng);
        // Frame 1 never spawns, so only the first pair moves through
        while obstacles[0].right_edge() > 3.0 {
            obstacles.update(&field, 1, &mut rng);
        }
        assert_eq!(obstacles.len(), 2);
        obstacles.update(&field, 1, &mut rng);
        assert!(obstacles.is_empty());
    }
}
