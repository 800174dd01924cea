use std::{collections::HashMap, sync::Arc};

use color_eyre::eyre::Result;
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use super::{Page, PageId};
use crate::{
    action::{act, Action, ActionState, Command, GameAction},
    components::scene::Scene,
    config::{Config, PageKeyBindings},
    game::{Field, FrameSink, Game, Phase},
};

/// The playing screen. Owns the state machine and feeds it scheduled frames.
pub struct GamePage {
    pub action_tx: Option<UnboundedSender<Action>>,
    pub keymap: PageKeyBindings,
    game: Game,
    frame_rate: f64,
    seed: Option<u64>,
}

impl GamePage {
    pub fn new(frame_rate: f64, seed: Option<u64>) -> Self {
        GamePage {
            action_tx: None,
            keymap: PageKeyBindings::default(),
            game: Game::new(Field::default(), frame_rate, seed),
            frame_rate,
            seed,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    fn attach_sink(&mut self) {
        if let Some(tx) = self.action_tx.clone() {
            let sink: FrameSink = Arc::new(move |generation: u64| {
                if tx.send(act!(Command::Frame(generation))).is_err() {
                    debug!(generation, "frame dropped, action loop is gone");
                }
            });
            self.game.attach(sink);
        }
    }

    fn switch_to(page: PageId) -> Option<Action> {
        Some(act!(Command::SwitchPage(page)))
    }
}

impl Page for GamePage {
    fn id(&self) -> PageId {
        PageId::Game
    }

    fn register_keymap(&mut self, keymaps: &HashMap<PageId, PageKeyBindings>) -> Result<()> {
        if let Some(keymap) = keymaps.get(&self.id()) {
            self.keymap = keymap.clone();
        }
        Ok(())
    }

    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(tx);
        self.attach_sink();
        Ok(())
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.game = Game::new(config.game.field()?, self.frame_rate, self.seed);
        self.attach_sink();
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let next = match action.command {
            Command::Frame(generation) => {
                self.game.frame(generation).and_then(|_| self.game.final_score()).map(|score| act!(Command::GameOver(score)))
            },
            Command::StartGame => {
                self.game.start();
                Self::switch_to(PageId::Game)
            },
            Command::Restart => {
                self.game.restart();
                Self::switch_to(PageId::Game)
            },
            Command::MainMenu => {
                self.game.return_to_menu();
                Self::switch_to(PageId::Home)
            },
            // Edge-triggered, releases and repeats of a held key do nothing
            Command::Game(_) if action.state != ActionState::Start => None,
            Command::Game(GameAction::Menu) => {
                self.game.return_to_menu();
                Self::switch_to(PageId::Home)
            },
            Command::Game(GameAction::Jump) => {
                let before = self.game.phase();
                match self.game.jump() {
                    Phase::Playing if before == Phase::GameOver => Self::switch_to(PageId::Game),
                    _ => None,
                }
            },
            _ => None,
        };
        Ok(next)
    }

    fn draw(&mut self, f: &mut Frame<'_>, rect: Rect) -> Result<()> {
        let scene = Scene::new(self.game.world()).show_score(self.game.phase() == Phase::Playing);
        f.render_widget(scene, rect);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    use super::*;

    fn commands(page: &mut GamePage, command: Command) -> Option<Command> {
        page.update(act!(command)).unwrap().map(|a| a.command)
    }

    #[test]
    fn test_start_and_menu() {
        let mut page = GamePage::new(60.0, Some(1));
        assert_eq!(commands(&mut page, Command::StartGame), Some(Command::SwitchPage(PageId::Game)));
        assert_eq!(page.game().phase(), Phase::Playing);

        assert_eq!(commands(&mut page, Command::Game(GameAction::Menu)), Some(Command::SwitchPage(PageId::Home)));
        assert_eq!(page.game().phase(), Phase::NotStarted);
    }

    #[test]
    fn test_frames_until_game_over() {
        let mut page = GamePage::new(60.0, Some(1));
        commands(&mut page, Command::StartGame);
        let generation = page.game().generation();

        let mut over = None;
        for _ in 0..100 {
            if let Some(command) = commands(&mut page, Command::Frame(generation)) {
                over = Some(command);
                break;
            }
        }
        // Free fall from mid-field reaches the floor well within 100 frames
        assert_eq!(over, Some(Command::GameOver(1)));
        assert_eq!(page.game().phase(), Phase::GameOver);

        assert_eq!(commands(&mut page, Command::Game(GameAction::Jump)), Some(Command::SwitchPage(PageId::Game)));
        assert_eq!(page.game().score(), 0);
    }

    #[test]
    fn test_stale_frames_are_ignored() {
        let mut page = GamePage::new(60.0, Some(1));
        commands(&mut page, Command::StartGame);
        let stale = page.game().generation();
        commands(&mut page, Command::Restart);

        assert_eq!(commands(&mut page, Command::Frame(stale)), None);
        assert_eq!(page.game().world().frame(), 0);
    }

    #[test]
    fn test_held_jump_only_flaps_once() {
        let mut page = GamePage::new(60.0, Some(1));
        commands(&mut page, Command::StartGame);
        let generation = page.game().generation();

        page.update(act!(Command::Game(GameAction::Jump), ActionState::Repeat)).unwrap();
        commands(&mut page, Command::Frame(generation));
        assert_eq!(page.game().world().bird.dy, crate::constants::game::GRAVITY);
    }

    #[tokio::test]
    async fn test_scheduled_frames_reach_the_action_loop() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut page = GamePage::new(200.0, Some(1));
        page.register_action_handler(tx).unwrap();
        commands(&mut page, Command::StartGame);

        let action = rx.recv().await.unwrap();
        assert_eq!(action.command, Command::Frame(page.game().generation()));
        commands(&mut page, Command::MainMenu);
        assert!(!page.game().is_looping());
    }
}
