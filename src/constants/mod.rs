pub mod game;
pub mod home;
pub mod over;
pub mod scenery;

pub const WIDTH: u16 = 100;
pub const HEIGHT: u16 = 40;

// Rates are in Hz
pub const MIN_TICK_RATE: f64 = 0.1;
pub const MIN_FRAME_RATE: f64 = 1.0;
pub const MAX_RATE: f64 = 1000.0;

pub const TITLE_TEXT: &str = r#"
 ___ _      _   ___ _____   __
| __| |    /_\ | _ \ _ \ \ / /
| _|| |__ / _ \|  _/  _/\ V /
|_| |____/_/ \_\_| |_|   |_|
"#;
