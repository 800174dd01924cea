use serde::Deserialize;
use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Display, Deserialize)]
pub enum OverAction {
    Up,
    Down,
    Select,
    /// Same as a jump in the game: starts over.
    Jump,
}
