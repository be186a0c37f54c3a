use std::time::Instant;

use raylib::prelude::*;

use super::App;

impl App {
    pub fn step(&mut self, rl: &mut RaylibHandle, dt: f32) {
        self.handle_hotkeys(rl);
        if !self.presenter.captures_cursor(rl.get_mouse_position()) {
            self.cam.update(rl, dt);
        }
        self.process_config_file_events();

        let view = self
            .cam
            .view_state(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        self.tracker.refresh(&self.scene, &view, Instant::now());
    }
}
