//! Overlay settings, loaded from a TOML file.
//!
//! Every field has a default, so a file only needs the keys it overrides:
//!
//! ```toml
//! max_distance = 50.0
//! show_chests = false
//!
//! [[id_rules]]
//! min = 100
//! max = 199
//! category = "light"
//! ```

use std::error::Error;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::{Category, IdRangeRule};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Master "show object info" toggle.
    pub enabled: bool,
    pub show_lights: bool,
    pub show_chests: bool,
    pub show_drops: bool,
    pub show_npcs: bool,
    pub show_special: bool,
    pub show_generic: bool,
    pub show_rotation: bool,
    pub show_model: bool,
    pub max_distance: f32,
    pub background_opacity: f32,
    pub refresh_interval_ms: u64,
    pub anchor_half_extent: f32,
    pub id_rules: Vec<IdRangeRule>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            show_lights: true,
            show_chests: true,
            show_drops: true,
            show_npcs: true,
            show_special: true,
            show_generic: true,
            show_rotation: true,
            show_model: true,
            max_distance: 100.0,
            background_opacity: 0.75,
            refresh_interval_ms: 100,
            anchor_half_extent: 0.5,
            id_rules: default_id_rules(),
        }
    }
}

// Coarse type-id buckets; approximate, replace or empty per project.
fn default_id_rules() -> Vec<IdRangeRule> {
    vec![
        IdRangeRule::new(100, 199, Category::Light),
        IdRangeRule::new(200, 299, Category::Chest),
        IdRangeRule::new(300, 399, Category::Drop),
    ]
}

impl OverlayConfig {
    pub fn category_enabled(&self, category: Category) -> bool {
        match category {
            Category::Light => self.show_lights,
            Category::Chest => self.show_chests,
            Category::Drop => self.show_drops,
            Category::Npc => self.show_npcs,
            Category::Special => self.show_special,
            Category::Generic => self.show_generic,
        }
    }

    pub fn toggle_category(&mut self, category: Category) -> bool {
        let flag = match category {
            Category::Light => &mut self.show_lights,
            Category::Chest => &mut self.show_chests,
            Category::Drop => &mut self.show_drops,
            Category::Npc => &mut self.show_npcs,
            Category::Special => &mut self.show_special,
            Category::Generic => &mut self.show_generic,
        };
        *flag = !*flag;
        *flag
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        let mut cfg: OverlayConfig = toml::from_str(s)?;
        cfg.background_opacity = cfg.background_opacity.clamp(0.0, 1.0);
        cfg.max_distance = cfg.max_distance.max(0.0);
        cfg.anchor_half_extent = cfg.anchor_half_extent.max(0.0);
        Ok(cfg)
    }
}

pub fn load_config_from_path(path: &Path) -> Result<OverlayConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    OverlayConfig::from_toml_str(&s)
}
