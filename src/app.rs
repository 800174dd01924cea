use color_eyre::eyre::{eyre, Result};
use ratatui::{
    layout::{Constraint, Flex, Layout, Margin},
    prelude::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders},
    Frame,
};
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::{
    action::{act, Action, Command},
    components::help::Help,
    config::Config,
    constants::{HEIGHT, WIDTH},
    pages::{game::GamePage, home::HomePage, over::OverPage, Page, PageId},
    tui,
};

pub struct App {
    config: Config,
    tick_rate: f64,
    frame_rate: f64,
    should_quit: bool,
    should_suspend: bool,
    show_help: bool,
    pages: Vec<Box<dyn Page>>,
    active_page: PageId,
}

impl App {
    pub fn new(tick_rate: f64, frame_rate: f64, seed: Option<u64>) -> Result<Self> {
        let config = Config::new()?;

        Ok(Self {
            tick_rate,
            frame_rate,
            should_quit: false,
            should_suspend: false,
            show_help: false,
            config,
            pages: vec![
                Box::new(HomePage::new()?),
                Box::new(GamePage::new(frame_rate, seed)),
                Box::new(OverPage::new()),
            ],
            active_page: PageId::Home,
        })
    }

    fn page_mut(&mut self, id: PageId) -> Result<&mut Box<dyn Page>> {
        self.pages.iter_mut().find(|page| page.id() == id).ok_or_else(|| eyre!("No page registered as {id}"))
    }

    /// Which page a command is meant for. Game flow commands always reach the
    /// game page, whatever is on screen.
    fn route(&self, command: &Command) -> PageId {
        match command {
            Command::Frame(_)
            | Command::StartGame
            | Command::Restart
            | Command::MainMenu
            | Command::Game(_) => PageId::Game,
            Command::Home(_) => PageId::Home,
            Command::Over(_) | Command::GameOver(_) => PageId::Over,
            _ => self.active_page,
        }
    }

    fn register_pages(&mut self, action_tx: &UnboundedSender<Action>) -> Result<()> {
        for page in self.pages.iter_mut() {
            page.register_keymap(&self.config.keybindings.pages)?;
        }

        for page in self.pages.iter_mut() {
            page.register_action_handler(action_tx.clone())?;
        }

        for page in self.pages.iter_mut() {
            page.register_config_handler(self.config.clone())?;
        }

        for page in self.pages.iter_mut() {
            page.init()?;
        }
        Ok(())
    }

    fn map_key(&self, key: crossterm::event::KeyEvent) -> Option<Action> {
        let mut action = self.config.keybindings.pages.get(&self.active_page).and_then(|keymap| keymap.get(&key));
        if let Some(global) = self.config.keybindings.global.get(&key) {
            action = Some(global)
        }
        action.cloned()
    }

    /// Applies an action to the app state and hands it to the page it is routed to.
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match &action.command {
            Command::Quit => self.should_quit = true,
            Command::Suspend => self.should_suspend = true,
            Command::Resume => self.should_suspend = false,
            Command::ToggleShowHelp => self.show_help = !self.show_help,
            Command::Error(message) => log::error!("{message}"),
            Command::SwitchPage(id) => {
                log::debug!("switching to {id}");
                self.active_page = *id;
            },
            Command::GameOver(_) => self.active_page = PageId::Over,
            _ => {},
        }
        // The help overlay freezes everything underneath
        if self.show_help {
            return Ok(None);
        }
        let target = self.route(&action.command);
        self.page_mut(target)?.update(action)
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();

        let mut tui = tui::Tui::new()?;
        tui.tick_rate(self.tick_rate);
        tui.frame_rate(self.frame_rate);
        tui.enter()?;

        self.register_pages(&action_tx)?;

        loop {
            if let Some(e) = tui.next().await {
                match e {
                    tui::Event::Closed => action_tx.send(act!(Command::Quit))?,
                    tui::Event::Tick => action_tx.send(act!(Command::Tick))?,
                    tui::Event::Render => action_tx.send(act!(Command::Render))?,
                    tui::Event::Resize(x, y) => action_tx.send(act!(Command::Resize(x, y)))?,
                    tui::Event::Key(key) => {
                        if let Some(action) = self.map_key(key) {
                            log::info!("Got action: {action:?}");
                            action_tx.send(action)?;
                        }
                    },
                    _ => {},
                }
                let active_page = self.active_page;
                if let Some(action) = self.page_mut(active_page)?.handle_events(Some(e))? {
                    action_tx.send(action)?;
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                let command = &action.command;
                if !matches!(command, Command::Tick | Command::Render | Command::Frame(_)) {
                    log::debug!("{command:?}");
                }
                match command {
                    Command::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, *w, *h))?;
                        self.render(&mut tui)?;
                    },
                    // A frame shows the state it starts from
                    Command::Render | Command::Frame(_) => self.render(&mut tui)?,
                    _ => {},
                }
                if let Some(action) = self.update(action)? {
                    action_tx.send(action)?
                }
            }
            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(act!(Command::Resume))?;
                tui.resume()?;
                tui.clear()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    fn render(&mut self, tui: &mut tui::Tui) -> Result<()> {
        let mut drawn = Ok(());
        tui.draw(|f| drawn = self.draw(f))?;
        drawn
    }

    fn draw(&mut self, f: &mut Frame<'_>) -> Result<()> {
        let area = f.area();

        let [area] = Layout::vertical([Constraint::Length(HEIGHT)]).flex(Flex::Center).areas(area);
        let [area] = Layout::horizontal([Constraint::Length(WIDTH)]).flex(Flex::Center).areas(area);

        let border = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().bg(Color::Black));
        f.render_widget(border, area);

        let area = area.inner(Margin { horizontal: 1, vertical: 1 });

        // The score card sits on top of the frozen field
        if self.active_page == PageId::Over {
            self.page_mut(PageId::Game)?.draw(f, area)?;
        }
        let active_page = self.active_page;
        self.page_mut(active_page)?.draw(f, area)?;

        if self.show_help {
            self.draw_help(f, area);
        }

        Ok(())
    }

    fn draw_help(&self, f: &mut Frame<'_>, rect: Rect) {
        let help = Help::new(vec![
            ("System".to_string(), self.config.keybindings.global.clone()),
            (
                self.active_page.to_string(),
                self.config.keybindings.pages.get(&self.active_page).cloned().unwrap_or_default(),
            ),
        ]);

        f.render_widget(help, rect);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::action::{GameAction, OverAction};

    fn app() -> App {
        let config: Config = serde_yaml::from_str(include_str!("../.config/config.yaml")).unwrap();
        App {
            config,
            tick_rate: 4.0,
            frame_rate: 60.0,
            should_quit: false,
            should_suspend: false,
            show_help: false,
            pages: vec![
                Box::new(HomePage::new().unwrap()),
                Box::new(GamePage::new(60.0, Some(3))),
                Box::new(OverPage::new()),
            ],
            active_page: PageId::Home,
        }
    }

    /// Feeds an action and everything it leads to, like the action loop does.
    fn dispatch(app: &mut App, action: Action) {
        let mut next = Some(action);
        while let Some(action) = next {
            next = app.update(action).unwrap();
        }
    }

    #[test]
    fn test_routing() {
        let app = app();
        assert_eq!(app.route(&Command::Frame(1)), PageId::Game);
        assert_eq!(app.route(&Command::GameOver(3)), PageId::Over);
        assert_eq!(app.route(&Command::Quit), PageId::Home);
    }

    #[test]
    fn test_keys_map_to_the_active_page() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let mut app = app();
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::empty());
        assert_eq!(app.map_key(space), None);

        app.active_page = PageId::Game;
        assert_eq!(app.map_key(space).map(|a| a.command), Some(Command::Game(GameAction::Jump)));

        let quit = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty());
        assert_eq!(app.map_key(quit).map(|a| a.command), Some(Command::Quit));
    }

    #[test]
    fn test_start_then_game_over_then_menu() {
        let mut app = app();
        dispatch(&mut app, act!(Command::StartGame));
        assert_eq!(app.active_page, PageId::Game);

        // First loop of the session is generation 1; the bird falls until it hits the floor
        for _ in 0..100 {
            dispatch(&mut app, act!(Command::Frame(1)));
        }
        assert_eq!(app.active_page, PageId::Over);

        dispatch(&mut app, act!(Command::Over(OverAction::Down)));
        dispatch(&mut app, act!(Command::Over(OverAction::Select)));
        assert_eq!(app.active_page, PageId::Home);
    }

    #[test]
    fn test_help_freezes_pages() {
        let mut app = app();
        dispatch(&mut app, act!(Command::ToggleShowHelp));
        dispatch(&mut app, act!(Command::StartGame));
        assert_eq!(app.active_page, PageId::Home);

        dispatch(&mut app, act!(Command::ToggleShowHelp));
        dispatch(&mut app, act!(Command::StartGame));
        assert_eq!(app.active_page, PageId::Game);
    }
}
