use scout_geom::{Vec2, Vec3};

use crate::{Category, OverlayConfig, TrackedObject};

#[derive(Clone, Debug, PartialEq)]
pub struct PanelRow {
    pub label: &'static str,
    pub value: String,
}

impl PanelRow {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }

    pub fn text(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

/// Text content of one readout panel, independent of the drawing toolkit.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelContent {
    pub category: Category,
    pub anchor: Vec2,
    pub title: String,
    pub rows: Vec<PanelRow>,
}

impl PanelContent {
    pub fn from_tracked(obj: &TrackedObject, config: &OverlayConfig) -> Self {
        let details = &obj.details;
        let mut rows = Vec::with_capacity(5);
        rows.push(PanelRow::new(
            "Type",
            details
                .type_name
                .clone()
                .unwrap_or_else(|| "Unknown".to_owned()),
        ));
        rows.push(PanelRow::new("ID", obj.display_id.clone()));
        rows.push(PanelRow::new("Position", format_vec3(details.position)));
        if config.show_rotation {
            if let Some(rotation) = details.rotation {
                rows.push(PanelRow::new("Rotation", format_vec3(rotation)));
            }
        }
        if config.show_model {
            if let Some(model) = &details.model {
                rows.push(PanelRow::new("Model", model.clone()));
            }
        }
        Self {
            category: obj.category,
            anchor: obj.screen_position,
            title: format!("{}: {}", obj.category.title(), obj.name),
            rows,
        }
    }
}

pub fn format_vec3(v: Vec3) -> String {
    format!("({:.1}, {:.1}, {:.1})", v.x, v.y, v.z)
}
