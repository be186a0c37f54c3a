//! Labels scene objects in a viewport: classification, culling, projection and the
//! per-tick snapshot list that the UI layer draws from.
#![forbid(unsafe_code)]

mod category;
mod classify;
pub mod config;
mod panel;
mod snapshot;
mod tracker;

pub use category::Category;
pub use classify::{
    CHEST_KEYWORDS, Classifier, DROP_KEYWORDS, IdRangeRule, LIGHT_KEYWORDS, NPC_KEYWORDS,
    SPECIAL_KEYWORDS,
};
pub use config::{OverlayConfig, load_config_from_path};
pub use panel::{PanelContent, PanelRow, format_vec3};
pub use snapshot::{ObjectDetails, TrackedObject};
pub use tracker::{ObjectTracker, ViewState};
