//! The simulation core: physics, generators, collision and the lifecycle
//! state machine. Nothing in here touches the terminal; pages feed it actions
//! and widgets read its state.

pub mod bird;
pub mod collision;
pub mod machine;
pub mod object;
pub mod obstacle;
pub mod scenery;
pub mod scheduler;
pub mod world;

use color_eyre::eyre::{ensure, Result};

pub use self::{
    bird::Bird,
    collision::Collision,
    machine::{Game, Phase},
    obstacle::{Obstacle, Obstacles},
    scenery::Scenery,
    scheduler::{FrameScheduler, FrameSink},
    world::World,
};
use crate::constants::game;

/// The visible play area. Origin is the top-left corner, y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    width: f64,
    height: f64,
}

impl Field {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        ensure!(width > 0.0, "field width must be positive, got {width}");
        ensure!(
            height > game::OBSTACLE_GAP,
            "field height {height} must exceed the obstacle gap {}",
            game::OBSTACLE_GAP
        );
        Ok(Field { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Default for Field {
    fn default() -> Self {
        Field { width: game::FIELD_WIDTH, height: game::FIELD_HEIGHT }
    }
}

/// Whether a spawner with the given cadence fires on this frame.
pub fn is_due(frame: u64, period: u64) -> bool {
    frame % period == 0
}
