use std::hash::{DefaultHasher, Hash, Hasher};

use scout_geom::{Vec2, Vec3};
use scout_scene::ObjectHandle;

use crate::Category;

/// Detail rows shown under a panel's title.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectDetails {
    pub type_name: Option<String>,
    pub position: Vec3,
    /// Euler degrees; only set when the rotation is not identity.
    pub rotation: Option<Vec3>,
    /// Only set when non-empty and not the `none` sentinel.
    pub model: Option<String>,
    pub numeric_id: Option<u32>,
}

/// One object that survived culling and projection during the last refresh.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackedObject {
    pub handle: ObjectHandle,
    pub world_position: Vec3,
    pub screen_position: Vec2,
    pub category: Category,
    pub name: String,
    pub display_id: String,
    pub details: ObjectDetails,
}

pub(crate) fn usable_model(model: Option<&str>) -> Option<String> {
    model
        .map(str::trim)
        .filter(|m| !m.is_empty() && !m.eq_ignore_ascii_case("none"))
        .map(str::to_owned)
}

pub(crate) fn display_name(name: Option<&str>, model: Option<&str>) -> String {
    name.filter(|n| !n.is_empty())
        .map(str::to_owned)
        .or_else(|| usable_model(model))
        .unwrap_or_else(|| "Unnamed".to_owned())
}

/// Stable stand-in for objects without an entity id.
pub(crate) fn fallback_id(handle: ObjectHandle, name: Option<&str>) -> String {
    let mut hasher = DefaultHasher::new();
    handle.container.hash(&mut hasher);
    handle.index.hash(&mut hasher);
    name.hash(&mut hasher);
    format!("#{:08x}", hasher.finish() as u32)
}
