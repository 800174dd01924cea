use std::collections::HashMap;

use color_eyre::eyre::Result;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Margin, Offset, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

use super::{Page, PageId};
use crate::{
    action::{act, Action, ActionState, Command, GameAction, OverAction},
    components::{multiline::MultiLine, options::OptionList},
    config::{key_event_to_string, PageKeyBindings},
    constants::over,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum OptionItem {
    Restart,
    MainMenu,
}

const OPTIONS: [(OptionItem, &str); 2] = [(OptionItem::Restart, "Restart"), (OptionItem::MainMenu, "Main menu")];

/// Score card shown on top of the frozen field after a collision.
pub struct OverPage {
    pub action_tx: Option<UnboundedSender<Action>>,
    pub keymap: PageKeyBindings,
    score: u32,
    selected_option_index: usize,
}

impl OverPage {
    pub fn new() -> Self {
        OverPage { action_tx: None, keymap: PageKeyBindings::default(), score: 0, selected_option_index: 0 }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn up(&mut self) {
        self.selected_option_index = self.selected_option_index.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.selected_option_index + 1 < OPTIONS.len() {
            self.selected_option_index += 1;
        }
    }

    fn select(&self) -> Option<Action> {
        let (item, _) = OPTIONS.get(self.selected_option_index)?;
        match item {
            OptionItem::Restart => Some(act!(Command::Restart)),
            OptionItem::MainMenu => Some(act!(Command::MainMenu)),
        }
    }

    /// First key bound to jumping, for the hint under the menu.
    fn jump_hint(&self) -> Option<String> {
        let mut keys = self
            .keymap
            .iter()
            .filter(|(_, action)| action.command == Command::Over(OverAction::Jump))
            .map(|(event, _)| key_event_to_string(event))
            .collect::<Vec<_>>();
        keys.sort();
        keys.into_iter().next().map(|key| format!("or press {key} to play again"))
    }

    fn draw_card(&self, f: &mut Frame<'_>, area: Rect) {
        let score = format!("Your Score: {}", self.score);
        let hint = self.jump_hint();
        let options = OptionList::new(OPTIONS.iter().map(|(_, title)| *title).collect(), self.selected_option_index);
        let options_height = options.height();

        let text_width = [Some(score.len()), hint.as_ref().map(|h| h.len())].into_iter().flatten().max().unwrap_or(0);
        let width = text_width as u16 + over::CARD_HPADDING * 2 + 2;
        let hint_height = if hint.is_some() { 2 } else { 0 };
        let height = 2 + options_height + hint_height + over::CARD_VPADDING * 2 + 2;

        let [area] = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center).areas(area);
        let [area] = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center).areas(area);
        f.render_widget(Clear, area);
        f.render_widget(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded), area);

        let inner = area.inner(Margin { horizontal: over::CARD_HPADDING + 1, vertical: over::CARD_VPADDING + 1 });
        let [score_area, option_area, hint_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(options_height),
            Constraint::Length(hint_height),
        ])
        .areas(inner);

        f.render_widget(Paragraph::new(Line::from(score).bold()).alignment(Alignment::Center), score_area);
        f.render_widget(options, option_area);
        if let Some(hint) = hint {
            let hint_area = hint_area.offset(Offset { x: 0, y: 1 }).intersection(inner);
            f.render_widget(Paragraph::new(Line::from(hint).dim()).alignment(Alignment::Center), hint_area);
        }
    }
}

impl Default for OverPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for OverPage {
    fn id(&self) -> PageId {
        PageId::Over
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

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action.state != ActionState::Start {
            return Ok(None);
        }
        match action.command {
            Command::GameOver(score) => {
                self.score = score;
                self.selected_option_index = 0;
            },
            Command::Over(command) => match command {
                OverAction::Up => self.up(),
                OverAction::Down => self.down(),
                OverAction::Select => return Ok(self.select()),
                OverAction::Jump => return Ok(Some(act!(Command::Game(GameAction::Jump)))),
            },
            _ => {},
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let title = MultiLine::art(over::GAME_OVER_TEXT).pixel_mode().ignore_whitespace(true);
        let (title_width, title_height) = title.size();
        let [title_area, card_area] =
            Layout::vertical([Constraint::Length(title_height + 1), Constraint::Fill(1)])
                .flex(Flex::SpaceAround)
                .areas(area);
        let [title_area] =
            Layout::horizontal([Constraint::Length(title_width + 1)]).flex(Flex::Center).areas(title_area);

        // Shadow one cell down and right of the title
        let shadow_area = title_area.offset(Offset { x: 1, y: 1 }).intersection(area);
        f.render_widget(title.clone().style(Style::default().fg(over::SHADOW_COLOR)), shadow_area);
        f.render_widget(title.style(Style::default().fg(over::TITLE_COLOR)), title_area);

        self.draw_card(f, card_area);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::config::Config;

    fn page() -> OverPage {
        let config: Config = serde_yaml::from_str(include_str!("../../.config/config.yaml")).unwrap();
        let mut page = OverPage::new();
        page.register_keymap(&config.keybindings.pages).unwrap();
        page
    }

    #[test]
    fn test_keeps_the_final_score() {
        let mut page = page();
        page.update(act!(Command::GameOver(7))).unwrap();
        assert_eq!(page.score(), 7);
    }

    #[test]
    fn test_options() {
        let mut page = page();
        let restart = page.update(act!(Command::Over(OverAction::Select))).unwrap();
        assert_eq!(restart.map(|a| a.command), Some(Command::Restart));

        page.update(act!(Command::Over(OverAction::Down))).unwrap();
        let menu = page.update(act!(Command::Over(OverAction::Select))).unwrap();
        assert_eq!(menu.map(|a| a.command), Some(Command::MainMenu));

        // A new game over resets the selection
        page.update(act!(Command::GameOver(2))).unwrap();
        let restart = page.update(act!(Command::Over(OverAction::Select))).unwrap();
        assert_eq!(restart.map(|a| a.command), Some(Command::Restart));
    }

    #[test]
    fn test_jump_is_forwarded_to_the_game() {
        let mut page = page();
        let jump = page.update(act!(Command::Over(OverAction::Jump))).unwrap();
        assert_eq!(jump.map(|a| a.command), Some(Command::Game(GameAction::Jump)));
    }

    #[test]
    fn test_hint() {
        insta::assert_snapshot!(page().jump_hint().unwrap(), @"or press Space to play again");
        assert_eq!(OverPage::new().jump_hint(), None);
    }

    #[test]
    fn test_card_shows_the_score() {
        let mut page = page();
        page.update(act!(Command::GameOver(12))).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(98, 38)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                page.draw(f, area).unwrap();
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = (0..buffer.area.height)
            .map(|y| (0..buffer.area.width).map(|x| buffer[(x, y)].symbol().to_string()).collect::<String>())
            .collect::<Vec<_>>();
        assert!(text.iter().any(|row| row.contains("Your Score: 12")));
        assert!(text.iter().any(|row| row.contains("Main menu")));
    }
}
