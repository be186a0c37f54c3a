use raylib::prelude::*;
use scout_labels::Category;

use super::App;

const CATEGORY_KEYS: [(KeyboardKey, Category); 6] = [
    (KeyboardKey::KEY_F2, Category::Light),
    (KeyboardKey::KEY_F3, Category::Chest),
    (KeyboardKey::KEY_F4, Category::Drop),
    (KeyboardKey::KEY_F5, Category::Npc),
    (KeyboardKey::KEY_F6, Category::Special),
    (KeyboardKey::KEY_F7, Category::Generic),
];

impl App {
    pub fn handle_hotkeys(&mut self, rl: &RaylibHandle) {
        let mut config = self.tracker.config().clone();
        let mut changed = false;

        if rl.is_key_pressed(KeyboardKey::KEY_F1) {
            config.enabled = !config.enabled;
            log::info!(
                "overlay {}",
                if config.enabled { "enabled" } else { "disabled" }
            );
            changed = true;
        }
        for (key, category) in CATEGORY_KEYS {
            if rl.is_key_pressed(key) {
                let shown = config.toggle_category(category);
                log::info!(
                    "{} labels {}",
                    category.title(),
                    if shown { "shown" } else { "hidden" }
                );
                changed = true;
            }
        }

        if changed {
            self.tracker.set_config(config);
        }
    }
}
