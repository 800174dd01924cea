use rand::{rngs::StdRng, SeedableRng};
use strum::Display;
use tracing::{debug, info};

use super::{
    collision::Collision,
    scheduler::{FrameScheduler, FrameSink},
    world::World,
    Field,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Phase {
    /// Welcome screen, nothing moves.
    #[default]
    NotStarted,
    Playing,
    /// Frozen after a collision, the final score is on display.
    GameOver,
}

/// Owns the lifecycle of a run: the world, the random source and the frame loop.
pub struct Game {
    phase: Phase,
    world: World,
    rng: StdRng,
    scheduler: FrameScheduler,
    sink: Option<FrameSink>,
}

impl Game {
    pub fn new(field: Field, frame_rate: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Game {
            phase: Phase::NotStarted,
            world: World::new(field),
            rng,
            scheduler: FrameScheduler::new(frame_rate),
            sink: None,
        }
    }

    /// Where scheduled frames are delivered. Until one is attached the loop is driven by hand.
    pub fn attach(&mut self, sink: FrameSink) {
        self.sink = Some(sink);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn score(&self) -> u32 {
        self.world.score()
    }

    pub fn final_score(&self) -> Option<u32> {
        (self.phase == Phase::GameOver).then(|| self.world.score())
    }

    /// Generation of the current frame loop, frames from any other one are dropped.
    pub fn generation(&self) -> u64 {
        self.scheduler.generation()
    }

    pub fn is_looping(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn start(&mut self) -> Phase {
        self.enter_playing();
        self.phase
    }

    pub fn restart(&mut self) -> Phase {
        self.enter_playing();
        self.phase
    }

    /// Flaps while playing, restarts after a game over, ignored on the welcome screen.
    pub fn jump(&mut self) -> Phase {
        match self.phase {
            Phase::Playing => self.world.queue_flap(),
            Phase::GameOver => self.enter_playing(),
            Phase::NotStarted => {},
        }
        self.phase
    }

    /// Back to the welcome screen. The last score stays readable.
    pub fn return_to_menu(&mut self) -> Phase {
        self.scheduler.cancel();
        if self.phase != Phase::NotStarted {
            debug!(from = %self.phase, score = self.world.score(), "returning to menu");
        }
        self.phase = Phase::NotStarted;
        self.phase
    }

    /// Runs one tick of the pipeline for a frame of the current loop.
    /// Returns the collision when this frame ended the run.
    pub fn frame(&mut self, generation: u64) -> Option<Collision> {
        if self.phase != Phase::Playing || generation != self.scheduler.generation() {
            return None;
        }

        let collision = self.world.step(&mut self.rng)?;
        self.enter_game_over(collision);
        Some(collision)
    }

    fn enter_playing(&mut self) {
        self.scheduler.cancel();
        self.world = World::new(*self.world.field());
        self.phase = Phase::Playing;
        let generation = self.scheduler.start(self.sink.clone());
        info!(generation, "game started");
    }

    fn enter_game_over(&mut self, collision: Collision) {
        self.scheduler.cancel();
        self.phase = Phase::GameOver;
        info!(%collision, score = self.world.score(), frame = self.world.frame(), "game over");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::game::bird::Bird;

    fn game() -> Game {
        Game::new(Field::default(), 60.0, Some(3))
    }

    fn run_until_over(game: &mut Game) -> Collision {
        loop {
            if let Some(collision) = game.frame(game.generation()) {
                return collision;
            }
        }
    }

    #[test]
    fn test_initial_state() {
        let game = game();
        assert_eq!(game.phase(), Phase::NotStarted);
        assert_eq!(game.score(), 0);
        assert_eq!(game.final_score(), None);
        assert!(!game.is_looping());
    }

    #[test]
    fn test_not_started_ignores_jump_and_frames() {
        let mut game = game();
        assert_eq!(game.jump(), Phase::NotStarted);
        assert_eq!(game.frame(game.generation()), None);
        assert_eq!(game.world().frame(), 0);
        assert_eq!(game.world().bird, Bird::spawn(&Field::default()));
    }

    #[test]
    fn test_start_runs_the_pipeline() {
        let mut game = game();
        assert_eq!(game.start(), Phase::Playing);
        assert!(game.is_looping());
        assert_eq!(game.frame(game.generation()), None);
        assert_eq!(game.world().frame(), 1);
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn test_collision_freezes_the_world() {
        let mut game = game();
        game.start();
        assert_eq!(run_until_over(&mut game), Collision::Boundary);
        assert_eq!(game.phase(), Phase::GameOver);
        assert!(!game.is_looping());

        let frame = game.world().frame();
        let score = game.score();
        let bird = game.world().bird.clone();
        for _ in 0..10 {
            assert_eq!(game.frame(game.generation()), None);
        }
        assert_eq!(game.world().frame(), frame);
        assert_eq!(game.final_score(), Some(score));
        assert_eq!(game.world().bird, bird);
    }

    #[test]
    fn test_stale_frames_are_ignored() {
        let mut game = game();
        game.start();
        let old = game.generation();
        game.frame(old);
        game.restart();
        assert_ne!(game.generation(), old);

        assert_eq!(game.frame(old), None);
        assert_eq!(game.world().frame(), 0);
        game.frame(game.generation());
        assert_eq!(game.world().frame(), 1);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut game = game();
        game.start();
        run_until_over(&mut game);
        assert!(game.score() > 0);

        assert_eq!(game.restart(), Phase::Playing);
        assert_eq!(game.score(), 0);
        assert_eq!(game.world().frame(), 0);
        assert!(game.world().obstacles.is_empty());
        assert!(game.world().scenery.is_empty());
        assert_eq!(game.world().bird, Bird::spawn(&Field::default()));
        assert!(game.is_looping());
    }

    #[test]
    fn test_jump_after_game_over_restarts() {
        let mut game = game();
        game.start();
        run_until_over(&mut game);

        assert_eq!(game.jump(), Phase::Playing);
        assert_eq!(game.score(), 0);
        assert_eq!(game.world().frame(), 0);
    }

    #[test]
    fn test_jump_while_playing_flaps() {
        let mut game = game();
        game.start();
        game.frame(game.generation());
        assert_eq!(game.jump(), Phase::Playing);
        game.frame(game.generation());
        assert_eq!(game.world().bird.dy, crate::constants::game::LIFT);
    }

    #[test]
    fn test_return_to_menu_keeps_the_score() {
        let mut game = game();
        game.start();
        run_until_over(&mut game);
        let score = game.score();

        assert_eq!(game.return_to_menu(), Phase::NotStarted);
        assert!(!game.is_looping());
        assert_eq!(game.score(), score);
        assert_eq!(game.final_score(), None);
        assert_eq!(game.frame(game.generation()), None);
    }

    #[test]
    fn test_score_never_changes_outside_playing() {
        let mut game = game();
        game.start();
        run_until_over(&mut game);
        let score = game.score();
        let obstacles = game.world().obstacles.len();

        for _ in 0..100 {
            game.frame(game.generation());
        }
        game.return_to_menu();
        game.frame(game.generation());

        assert_eq!(game.score(), score);
        assert_eq!(game.world().obstacles.len(), obstacles);
    }
}
