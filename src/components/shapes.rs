use ratatui::{
    style::Color,
    widgets::canvas::{Painter, Shape},
};

/// Field coordinates grow downwards, canvas coordinates grow upwards.
pub fn flip(field_height: f64, y: f64) -> f64 {
    field_height - y
}

/// Filled outlines in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outline {
    /// `(x, y)` is the bottom-left corner.
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Triangle { a: (f64, f64), b: (f64, f64), c: (f64, f64) },
    Circle { x: f64, y: f64, radius: f64 },
}

impl Outline {
    /// `(left, bottom, right, top)`
    fn extent(&self) -> (f64, f64, f64, f64) {
        match *self {
            Outline::Rect { x, y, width, height } => (x, y, x + width, y + height),
            Outline::Triangle { a, b, c } => (
                a.0.min(b.0).min(c.0),
                a.1.min(b.1).min(c.1),
                a.0.max(b.0).max(c.0),
                a.1.max(b.1).max(c.1),
            ),
            Outline::Circle { x, y, radius } => (x - radius, y - radius, x + radius, y + radius),
        }
    }

    fn contains(&self, px: f64, py: f64) -> bool {
        match *self {
            Outline::Rect { x, y, width, height } => px >= x && px <= x + width && py >= y && py <= y + height,
            Outline::Triangle { a, b, c } => {
                let side = |p: (f64, f64), q: (f64, f64)| (q.0 - p.0) * (py - p.1) - (q.1 - p.1) * (px - p.0);
                let (d1, d2, d3) = (side(a, b), side(b, c), side(c, a));
                let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
                let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
                !(has_neg && has_pos)
            },
            Outline::Circle { x, y, radius } => (px - x).powi(2) + (py - y).powi(2) <= radius * radius,
        }
    }
}

/// An outline filled with one colour. `pitch` is the canvas distance between
/// two neighbouring points on the terminal grid; the outline is sampled twice
/// per point so thin shapes still land on the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solid {
    pub outline: Outline,
    pub color: Color,
    pub pitch: (f64, f64),
}

impl Solid {
    pub fn new(outline: Outline, color: Color, pitch: (f64, f64)) -> Self {
        Solid { outline, color, pitch }
    }
}

impl Shape for Solid {
    fn draw(&self, painter: &mut Painter) {
        let (step_x, step_y) = (self.pitch.0 / 2.0, self.pitch.1 / 2.0);
        if step_x <= 0.0 || step_y <= 0.0 {
            return;
        }
        let (left, bottom, right, top) = self.outline.extent();

        let mut y = bottom + step_y / 2.0;
        while y <= top {
            let mut x = left + step_x / 2.0;
            while x <= right {
                if self.outline.contains(x, y) {
                    if let Some((px, py)) = painter.get_point(x, y) {
                        painter.paint(px, py, self.color);
                    }
                }
                x += step_x;
            }
            y += step_y;
        }
    }
}
