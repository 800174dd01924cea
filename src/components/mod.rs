pub mod background;
pub mod help;
pub mod multiline;
pub mod options;
pub mod scene;
pub mod shapes;
