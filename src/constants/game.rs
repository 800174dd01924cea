use std::ops::Range;

use ratatui::style::Color;

pub const FIELD_WIDTH: f64 = 800.0;
pub const FIELD_HEIGHT: f64 = 600.0;

pub const GRAVITY: f64 = 0.5;
pub const LIFT: f64 = -10.0;

pub const BIRD_X: f64 = 50.0;
pub const BIRD_RADIUS: f64 = 10.0;
pub const BIRD_COLOR: Color = Color::Rgb(255, 165, 0);

pub const OBSTACLE_PERIOD: u64 = 90;
pub const OBSTACLE_GAP: f64 = 150.0;
pub const OBSTACLE_WIDTH: f64 = 40.0;
pub const OBSTACLE_SPEED: f64 = 3.0;
pub const OBSTACLE_COLOR: Color = Color::Rgb(0, 128, 0);

pub const SCORE_COLOR: Color = Color::Black;
/// Baseline of the score label, in field coordinates.
pub const SCORE_POSITION: (f64, f64) = (10.0, 30.0);

// Scenery scrolls slower than obstacles
pub const SCENERY_SPEED: f64 = 2.0;

pub const CLOUD_PERIOD: u64 = 100;
pub const CLOUD_RADIUS: Range<f64> = 20.0..50.0;

pub const TREE_PERIOD: u64 = 150;
pub const TREE_HEIGHT: Range<f64> = 20.0..60.0;
pub const TREE_WIDTH: f64 = 40.0;

pub const MOUNTAIN_PERIOD: u64 = 200;
pub const MOUNTAIN_HEIGHT: Range<f64> = 50.0..150.0;
pub const MOUNTAIN_WIDTH: f64 = 100.0;
