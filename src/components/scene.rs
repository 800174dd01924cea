use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    symbols::Marker,
    text::Line,
    widgets::{canvas::Canvas, Widget},
};

use crate::{
    components::{
        background::Background,
        shapes::{flip, Outline, Solid},
    },
    constants::{game, scenery},
    game::World,
};

/// Draws a world in field coordinates, scaled to whatever area it gets.
pub struct Scene<'a> {
    world: &'a World,
    show_score: bool,
}

impl<'a> Scene<'a> {
    pub fn new(world: &'a World) -> Self {
        Scene { world, show_score: false }
    }

    pub fn show_score(self, show_score: bool) -> Self {
        Self { show_score, ..self }
    }
}

impl Widget for Scene<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let world = self.world;
        let show_score = self.show_score;
        let (width, height) = (world.field().width(), world.field().height());
        // Half blocks give two points per cell vertically
        let pitch = (width / area.width as f64, height / (area.height as f64 * 2.0));

        Canvas::default()
            .marker(Marker::HalfBlock)
            .background_color(scenery::SKY)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(move |ctx| {
                ctx.draw(&Background::new(&world.scenery, height, pitch));

                let bird = &world.bird;
                let body = Outline::Circle { x: bird.x, y: flip(height, bird.y), radius: bird.radius };
                ctx.draw(&Solid::new(body, game::BIRD_COLOR, pitch));

                for obstacle in world.obstacles.iter() {
                    let outline = Outline::Rect {
                        x: obstacle.x,
                        y: flip(height, obstacle.y + obstacle.height),
                        width: obstacle.width,
                        height: obstacle.height,
                    };
                    ctx.draw(&Solid::new(outline, game::OBSTACLE_COLOR, pitch));
                }

                if show_score {
                    let (x, y) = game::SCORE_POSITION;
                    let label = format!("Score: {}", world.score());
                    ctx.print(x, flip(height, y), Line::styled(label, Style::default().fg(game::SCORE_COLOR).bold()));
                }
            })
            .render(area, buf);
    }
}
