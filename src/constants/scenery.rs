use ratatui::style::Color;

pub const SKY: Color = Color::Rgb(135, 206, 235);
pub const MOUNTAIN: Color = Color::Rgb(139, 69, 19);
pub const TREE: Color = Color::Rgb(50, 205, 50);
pub const TRUNK: Color = Color::Rgb(139, 69, 19);
pub const CLOUD: Color = Color::White;

// Tree silhouette, measured from the apex
pub const CROWN_HALF_WIDTH: f64 = 20.0;
pub const CROWN_HEIGHT: f64 = 50.0;
pub const TRUNK_WIDTH: f64 = 10.0;
pub const TRUNK_HEIGHT: f64 = 20.0;

// Cartoon cloud: four puffs relative to the anchor, (dx, dy, radius) in units of the cloud radius
pub const CLOUD_PUFFS: [(f64, f64, f64); 4] = [(0.0, 0.0, 1.0), (0.7, -0.6, 0.8), (1.4, 0.0, 1.0), (0.7, 0.6, 0.8)];
