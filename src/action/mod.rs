mod game;
mod home;
mod over;

use serde::Deserialize;
use strum::Display;

pub use crate::action::{game::GameAction, home::HomeAction, over::OverAction};
use crate::pages::PageId;

#[derive(Debug, Clone, PartialEq, Eq, Display, Deserialize, Default)]
pub enum ActionState {
    #[default]
    Start,
    Repeat,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Deserialize)]
pub enum Command {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Error(String),
    ToggleShowHelp,
    /// A scheduled simulation frame, tagged with its loop generation.
    Frame(u64),
    StartGame,
    Restart,
    MainMenu,
    GameOver(u32),
    SwitchPage(PageId),
    // Page actions
    Home(HomeAction),
    Game(GameAction),
    Over(OverAction),
}

impl Command {
    /// Short name shown in the help overlay.
    pub fn string(&self) -> String {
        match self {
            Command::Home(action) => action.to_string(),
            Command::Game(action) => action.to_string(),
            Command::Over(action) => action.to_string(),
            command => command.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub command: Command,
    pub state: ActionState,
}

macro_rules! act {
    ($command:expr) => {
        $crate::action::Action { command: $command, state: $crate::action::ActionState::default() }
    };
    ($command:expr, $state:expr) => {
        $crate::action::Action { command: $command, state: $state }
    };
}

pub(crate) use act;
