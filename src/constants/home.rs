use ratatui::style::Color;

pub const TITLE_COLOR: Color = Color::Rgb(255, 165, 0);
pub const OPTION_HIGHLIGHT: Color = Color::Cyan;
pub const OPTION_PADDING: u16 = 2;
