use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::constants::home;

/// A vertical menu with one highlighted entry and a blank line between entries.
pub struct OptionList<'a> {
    titles: Vec<&'a str>,
    selected: usize,
}

impl<'a> OptionList<'a> {
    pub fn new(titles: Vec<&'a str>, selected: usize) -> Self {
        OptionList { titles, selected }
    }

    pub fn height(&self) -> u16 {
        (self.titles.len() as u16 * 2).saturating_sub(1)
    }

    fn width(&self) -> u16 {
        self.titles.iter().map(|title| title.chars().count()).max().unwrap_or(0) as u16 + home::OPTION_PADDING * 2
    }
}

impl Widget for OptionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = self.width();
        let [area] = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center).areas(area);

        let pad = " ".repeat(home::OPTION_PADDING as usize);
        let mut lines = Vec::with_capacity(self.titles.len() * 2);
        for (index, title) in self.titles.iter().enumerate() {
            if index > 0 {
                lines.push(Line::from(""));
            }
            // Padded to full width so the highlight is a solid bar
            let text = format!("{pad}{title:<w$}{pad}", w = (width - home::OPTION_PADDING * 2) as usize);
            let style =
                if index == self.selected { Style::default().bg(home::OPTION_HIGHLIGHT) } else { Style::default() };
            lines.push(Line::styled(text, style));
        }

        Paragraph::new(lines).style(Style::default().fg(Color::White)).render(area, buf);
    }
}
