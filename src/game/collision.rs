use strum::Display;

use super::{
    bird::Bird,
    object::Object,
    obstacle::Obstacle,
    Field,
};

/// What ended the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Collision {
    Boundary,
    Obstacle,
}

/// The bird's vertical extent left the field.
pub fn out_of_bounds(bird: &Bird, field: &Field) -> bool {
    bird.bottom() > field.height() || bird.top() < 0.0
}

pub fn hits_obstacle(bird: &Bird, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|obstacle| bird.collides_with(obstacle))
}

/// Runs both checks. Pure, so repeating it without a state change gives the same verdict.
pub fn detect(bird: &Bird, obstacles: &[Obstacle], field: &Field) -> Option<Collision> {
    let boundary = out_of_bounds(bird, field);
    let obstacle = hits_obstacle(bird, obstacles);

    match (boundary, obstacle) {
        (true, _) => Some(Collision::Boundary),
        (false, true) => Some(Collision::Obstacle),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn bird_at(y: f64) -> Bird {
        Bird { x: 50.0, y, radius: 10.0, dy: 0.0 }
    }

    #[test]
    fn test_boundaries() {
        let field = Field::default();
        assert!(!out_of_bounds(&bird_at(590.0), &field));
        assert!(out_of_bounds(&bird_at(590.5), &field));
        assert!(!out_of_bounds(&bird_at(10.0), &field));
        assert!(out_of_bounds(&bird_at(9.5), &field));
    }

    #[test]
    fn test_obstacle_overlap() {
        let field = Field::default();
        let bird = bird_at(300.0);
        let wall = Obstacle { x: 55.0, y: 0.0, width: 40.0, height: 600.0 };
        assert_eq!(detect(&bird, &[wall], &field), Some(Collision::Obstacle));

        let ahead = Obstacle { x: 60.0, y: 0.0, width: 40.0, height: 600.0 };
        assert_eq!(detect(&bird, &[ahead], &field), None);
    }

    #[test]
    fn test_box_approximation_hits_near_corners() {
        // The corner of this obstacle is ~12.7 units from the centre, outside the circle but inside the box
        let bird = bird_at(300.0);
        let corner = Obstacle { x: 59.0, y: 0.0, width: 40.0, height: 291.0 };
        assert!(hits_obstacle(&bird, &[corner]));
    }

    #[test]
    fn test_gap_lets_the_bird_through() {
        let field = Field::default();
        let bird = bird_at(300.0);
        let top = Obstacle { x: 40.0, y: 0.0, width: 40.0, height: 250.0 };
        let bottom = Obstacle { x: 40.0, y: 400.0, width: 40.0, height: 200.0 };
        assert_eq!(detect(&bird, &[top, bottom], &field), None);
    }

    #[test]
    fn test_boundary_wins_when_both_hold() {
        let field = Field::default();
        let bird = bird_at(595.0);
        let floor = Obstacle { x: 40.0, y: 550.0, width: 40.0, height: 50.0 };
        assert_eq!(detect(&bird, &[floor], &field), Some(Collision::Boundary));
    }

    #[test]
    fn test_detect_is_idempotent() {
        let field = Field::default();
        let bird = bird_at(300.0);
        let obstacles = [Obstacle { x: 45.0, y: 0.0, width: 40.0, height: 295.0 }];
        let first = detect(&bird, &obstacles, &field);
        let second = detect(&bird, &obstacles, &field);
        assert_eq!(first, second);
        assert_eq!(first, Some(Collision::Obstacle));
    }
}
