use raylib::prelude::*;
use scout_geom::Vec3 as GVec3;
use scout_ui::category_color;

use super::App;

const OBJECT_SIZE: f32 = 0.6;

#[inline]
fn to_rl(v: GVec3) -> Vector3 {
    Vector3::new(v.x, v.y, v.z)
}

impl App {
    pub fn render(&self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let screen = (rl.get_screen_width(), rl.get_screen_height());
        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::new(24, 26, 32, 255));

        {
            let mut d3 = d.begin_mode3D(self.cam.to_camera3d());
            d3.draw_grid(64, 1.0);
            for container in self.scene.containers.iter().filter(|c| c.loaded) {
                for obj in container.objects.iter().flatten() {
                    let p = to_rl(obj.transform.translation);
                    d3.draw_cube(p, OBJECT_SIZE, OBJECT_SIZE, OBJECT_SIZE, Color::DARKGRAY);
                }
            }
            if self.tracker.config().enabled {
                for obj in self.tracker.tracked() {
                    let p = to_rl(obj.world_position);
                    let s = OBJECT_SIZE + 0.05;
                    d3.draw_cube_wires(p, s, s, s, category_color(obj.category));
                }
            }
        }

        self.presenter.draw(&mut d, &self.tracker, screen);

        let config = self.tracker.config();
        let hud = format!(
            "F1 overlay: {}  |  labelled {} / {}  |  max {:.0} m",
            if config.enabled { "on" } else { "off" },
            self.tracker.tracked().len(),
            self.scene.object_count(),
            config.max_distance,
        );
        d.draw_text(&hud, 12, screen.1 - 28, 16, Color::LIGHTGRAY);
        d.draw_fps(12, 12);
    }
}
