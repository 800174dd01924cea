use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::Widget,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Each line is one span.
    #[default]
    Line,
    /// Each character is its own cell, so blanks can be skipped and what is
    /// underneath shows through.
    Pixel,
}

/// Block text such as ASCII art, drawn line by line from the top-left of the area.
#[derive(Debug, Default, Clone)]
pub struct MultiLine<'a> {
    lines: Vec<&'a str>,
    style: Style,
    ignore_whitespace: bool,
    mode: Mode,
}

impl<'a> MultiLine<'a> {
    pub fn new(lines: Vec<&'a str>) -> Self {
        MultiLine { lines, ..Default::default() }
    }

    /// Non-empty lines of a raw string literal.
    pub fn art(text: &'a str) -> Self {
        Self::new(text.lines().filter(|line| !line.trim().is_empty()).collect())
    }

    pub fn style(self, style: Style) -> Self {
        Self { style, ..self }
    }

    pub fn ignore_whitespace(self, ignore_whitespace: bool) -> Self {
        Self { ignore_whitespace, ..self }
    }

    pub fn pixel_mode(self) -> Self {
        Self { mode: Mode::Pixel, ..self }
    }

    /// `(width, height)` in cells.
    pub fn size(&self) -> (u16, u16) {
        let width = self.lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        (width as u16, self.lines.len() as u16)
    }
}

fn preprocess_lines<'a>(lines: &[&'a str], ignore_whitespace: bool, area: Rect) -> Vec<(&'a str, Rect)> {
    lines
        .iter()
        .enumerate()
        .map(|(row, line)| {
            let (prefix, line) = if ignore_whitespace {
                let trimmed = line.trim_start();
                (line.chars().count() - trimmed.chars().count(), trimmed.trim_end())
            } else {
                (0, *line)
            };
            let rect = Rect { x: area.x + prefix as u16, y: area.y + row as u16, width: line.chars().count() as u16, height: 1 };
            (line, rect)
        })
        .collect()
}

fn preprocess_pixels(lines: &[&str], ignore_whitespace: bool, area: Rect) -> Vec<(char, Rect)> {
    lines
        .iter()
        .enumerate()
        .flat_map(|(row, line)| line.chars().enumerate().map(move |(col, pixel)| (pixel, row as u16, col as u16)))
        .filter(|(pixel, _, _)| !(ignore_whitespace && pixel.is_whitespace()))
        .map(|(pixel, row, col)| (pixel, Rect { x: area.x + col, y: area.y + row, width: 1, height: 1 }))
        .collect()
}

impl Widget for MultiLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.mode {
            Mode::Line => {
                for (line, rect) in preprocess_lines(&self.lines, self.ignore_whitespace, area) {
                    Span::styled(line, self.style).render(rect.intersection(area), buf);
                }
            },
            Mode::Pixel => {
                for (pixel, rect) in preprocess_pixels(&self.lines, self.ignore_whitespace, area) {
                    Span::styled(pixel.to_string(), self.style).render(rect.intersection(area), buf);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::style::Color;

    use super::*;

    #[test]
    fn test_art_skips_blank_lines() {
        let art = MultiLine::art("\n ab\ncde \n\n");
        assert_eq!(art.lines, vec![" ab", "cde "]);
        assert_eq!(art.size(), (4, 2));
    }

    #[test]
    fn test_line_mode() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 2));
        MultiLine::new(vec!["ab", " cd"]).render(buf.area, &mut buf);
        assert_eq!(buf, Buffer::with_lines(["ab   ", " cd  "]));
    }

    #[test]
    fn test_pixel_mode_keeps_what_is_underneath() {
        let mut buf = Buffer::with_lines(["xxx"]);
        MultiLine::new(vec!["a b"])
            .pixel_mode()
            .ignore_whitespace(true)
            .style(Style::default().fg(Color::Red))
            .render(buf.area, &mut buf);
        assert_eq!(buf[(1, 0)].symbol(), "x");
        assert_eq!(buf[(2, 0)].symbol(), "b");
        assert_eq!(buf[(2, 0)].fg, Color::Red);
    }
}
