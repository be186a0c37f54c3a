use scout_labels::load_config_from_path;

use super::App;

impl App {
    pub fn process_config_file_events(&mut self) {
        let mut changed = false;
        for _ in self.config_event_rx.try_iter() {
            changed = true;
        }
        if !changed {
            return;
        }
        if !self.config_path.exists() {
            log::warn!("overlay config missing: {}", self.config_path.display());
            return;
        }
        match load_config_from_path(&self.config_path) {
            Ok(config) => {
                self.tracker.set_config(config);
                log::info!("overlay config reloaded from {}", self.config_path.display());
            }
            Err(e) => {
                log::warn!(
                    "overlay config reload failed ({}): {}",
                    self.config_path.display(),
                    e
                );
            }
        }
    }
}
