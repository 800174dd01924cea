use rand::Rng;
use tracing::trace;

use super::{
    bird::Bird,
    collision::{self, Collision},
    obstacle::Obstacles,
    scenery::Scenery,
    Field,
};
use crate::constants::game;

/// Everything that changes while a run is in progress. Resetting means
/// building a new one.
#[derive(Debug, Clone)]
pub struct World {
    field: Field,
    pub bird: Bird,
    pub obstacles: Obstacles,
    pub scenery: Scenery,
    frame: u64,
    score: u32,
    flap_queued: bool,
}

impl World {
    pub fn new(field: Field) -> Self {
        World {
            field,
            bird: Bird::spawn(&field),
            obstacles: Obstacles::default(),
            scenery: Scenery::default(),
            frame: 0,
            score: 0,
            flap_queued: false,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Latches a jump, consumed by the next physics step.
    pub fn queue_flap(&mut self) {
        self.flap_queued = true;
    }

    /// Runs the update pipeline once: scenery, obstacles, physics, collision,
    /// then advances the frame counter.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Collision> {
        self.scenery.update(&self.field, self.frame, rng);

        if self.obstacles.update(&self.field, self.frame, rng) {
            self.score += 1;
            trace!(frame = self.frame, score = self.score, "obstacle pair spawned");
        }

        let impulse = std::mem::take(&mut self.flap_queued).then_some(game::LIFT);
        self.bird.update(game::GRAVITY, impulse);

        let collision = collision::detect(&self.bird, &self.obstacles, &self.field);
        self.frame += 1;
        collision
    }
}
