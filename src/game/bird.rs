use super::{
    object::{Bounds, Object},
    Field,
};
use crate::constants::game;

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Vertical velocity, positive is downwards.
    pub dy: f64,
}

impl Bird {
    /// A resting bird at the spawn point, halfway down the field.
    pub fn spawn(field: &Field) -> Self {
        Bird { x: game::BIRD_X, y: field.height() / 2.0, radius: game::BIRD_RADIUS, dy: 0.0 }
    }

    /// One physics step. An impulse replaces the accumulated velocity instead of adding to it.
    pub fn update(&mut self, gravity: f64, impulse: Option<f64>) {
        match impulse {
            Some(lift) => self.dy = lift,
            None => self.dy += gravity,
        }
        self.y += self.dy;
    }

    pub fn top(&self) -> f64 {
        self.y - self.radius
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.radius
    }
}

impl Object for Bird {
    // The bird is drawn as a circle but collides as its bounding box
    fn bounds(&self) -> Bounds {
        Bounds {
            x: self.x - self.radius,
            y: self.y - self.radius,
            width: self.radius * 2.0,
            height: self.radius * 2.0,
        }
    }
}
