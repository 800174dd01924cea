use std::collections::HashMap;

use color_eyre::eyre::Result;
use derive_builder::Builder;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

use super::{Page, PageId};
use crate::{
    action::{act, Action, ActionState, Command, HomeAction},
    components::{multiline::MultiLine, options::OptionList, scene::Scene},
    config::{Config, PageKeyBindings},
    constants::{home, TITLE_TEXT},
    game::{Field, World},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum OptionItem {
    Start,
    Quit,
}

/// Welcome screen: title and menu over a resting bird.
#[derive(Builder)]
pub struct HomePage {
    #[builder(default)]
    pub action_tx: Option<UnboundedSender<Action>>,
    #[builder(default)]
    pub keymap: PageKeyBindings,
    options: Vec<(OptionItem, &'static str)>,
    #[builder(default)]
    selected_option_index: usize,
    backdrop: World,
}

impl HomePage {
    pub fn new() -> Result<Self> {
        let page = HomePageBuilder::default()
            .options(vec![(OptionItem::Start, "Start playing"), (OptionItem::Quit, "Quit")])
            .backdrop(World::new(Field::default()))
            .build()?;
        Ok(page)
    }

    pub fn up(&mut self) {
        self.selected_option_index = self.selected_option_index.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.selected_option_index + 1 < self.options.len() {
            self.selected_option_index += 1;
        }
    }

    fn select(&self) -> Option<Action> {
        let (item, _) = self.options.get(self.selected_option_index)?;
        match item {
            OptionItem::Start => Some(act!(Command::StartGame)),
            OptionItem::Quit => Some(act!(Command::Quit)),
        }
    }
}

impl Page for HomePage {
    fn id(&self) -> PageId {
        PageId::Home
    }

    fn register_keymap(&mut self, keymaps: &HashMap<PageId, PageKeyBindings>) -> Result<()> {
        if let Some(keymap) = keymaps.get(&self.id()) {
            self.keymap = keymap.clone();
        }
        Ok(())
    }

    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(tx);
        Ok(())
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.backdrop = World::new(config.game.field()?);
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action.state != ActionState::Start {
            return Ok(None);
        }
        if let Command::Home(command) = action.command {
            match command {
                HomeAction::Up => self.up(),
                HomeAction::Down => self.down(),
                HomeAction::Select => return Ok(self.select()),
            }
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, rect: Rect) -> Result<()> {
        f.render_widget(Scene::new(&self.backdrop), rect);

        let title = MultiLine::art(TITLE_TEXT).pixel_mode().ignore_whitespace(true).style(
            Style::default().fg(home::TITLE_COLOR),
        );
        let (title_width, title_height) = title.size();
        let options =
            OptionList::new(self.options.iter().map(|(_, title)| *title).collect(), self.selected_option_index);

        let [title_area, option_area] =
            Layout::vertical([Constraint::Length(title_height), Constraint::Length(options.height())])
                .flex(Flex::SpaceAround)
                .areas(rect);
        let [title_area] = Layout::horizontal([Constraint::Length(title_width)]).flex(Flex::Center).areas(title_area);

        f.render_widget(title, title_area);
        f.render_widget(options, option_area);

        Ok(())
    }
}
