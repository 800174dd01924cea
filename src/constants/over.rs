use ratatui::style::Color;

pub const CARD_HPADDING: u16 = 4;
pub const CARD_VPADDING: u16 = 1;
pub const TITLE_COLOR: Color = Color::Red;
pub const SHADOW_COLOR: Color = Color::DarkGray;

pub const GAME_OVER_TEXT: &str = r#"
  ___   _   __  __ ___    _____   _____ ___
 / __| /_\ |  \/  | __|  / _ \ \ / / __| _ \
| (_ |/ _ \| |\/| | _|  | (_) \ V /| _||   /
 \___/_/ \_\_|  |_|___|  \___/ \_/ |___|_|_\
"#;
