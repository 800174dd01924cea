use ratatui::widgets::canvas::{Painter, Shape};

use crate::{
    components::shapes::{flip, Outline, Solid},
    constants::{game, scenery},
    game::Scenery,
};

/// Paints the scenery back to front: mountains, trees, then clouds.
pub struct Background<'a> {
    scenery: &'a Scenery,
    field_height: f64,
    pitch: (f64, f64),
}

impl<'a> Background<'a> {
    pub fn new(scenery: &'a Scenery, field_height: f64, pitch: (f64, f64)) -> Self {
        Background { scenery, field_height, pitch }
    }

    fn solids(&self) -> Vec<Solid> {
        let mut solids = Vec::with_capacity(self.scenery.len() * 4);

        for mountain in &self.scenery.mountains {
            let outline = Outline::Triangle {
                a: (mountain.x, 0.0),
                b: (mountain.x + game::MOUNTAIN_WIDTH / 2.0, mountain.height),
                c: (mountain.x + game::MOUNTAIN_WIDTH, 0.0),
            };
            solids.push(Solid::new(outline, scenery::MOUNTAIN, self.pitch));
        }

        for tree in &self.scenery.trees {
            let crown_base = tree.height - scenery::CROWN_HEIGHT;
            let crown = Outline::Triangle {
                a: (tree.x, tree.height),
                b: (tree.x - scenery::CROWN_HALF_WIDTH, crown_base),
                c: (tree.x + scenery::CROWN_HALF_WIDTH, crown_base),
            };
            let trunk = Outline::Rect {
                x: tree.x - scenery::TRUNK_WIDTH / 2.0,
                y: crown_base - scenery::TRUNK_HEIGHT,
                width: scenery::TRUNK_WIDTH,
                height: scenery::TRUNK_HEIGHT,
            };
            solids.push(Solid::new(crown, scenery::TREE, self.pitch));
            solids.push(Solid::new(trunk, scenery::TRUNK, self.pitch));
        }

        for cloud in &self.scenery.clouds {
            for (dx, dy, scale) in scenery::CLOUD_PUFFS {
                let outline = Outline::Circle {
                    x: cloud.x + dx * cloud.radius,
                    y: flip(self.field_height, cloud.y + dy * cloud.radius),
                    radius: scale * cloud.radius,
                };
                solids.push(Solid::new(outline, scenery::CLOUD, self.pitch));
            }
        }

        solids
    }
}

impl Shape for Background<'_> {
    fn draw(&self, painter: &mut Painter) {
        for solid in self.solids() {
            solid.draw(painter);
        }
    }
}
