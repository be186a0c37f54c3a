//! Scene-graph seam consumed by the overlay, plus a small in-memory scene.
#![forbid(unsafe_code)]

mod loader;
mod part;
mod scene;

pub use loader::load_scene_from_path;
pub use part::{GameVersion, PartRef, PartShape, ShapeInfo};
pub use scene::{MapContainer, MapObject, Scene};

use scout_geom::Transform;

/// Non-owning reference to an object: container index and position in its list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectHandle {
    pub container: usize,
    pub index: usize,
}

impl ObjectHandle {
    #[inline]
    pub const fn new(container: usize, index: usize) -> Self {
        Self { container, index }
    }
}

pub trait SceneObject {
    fn part(&self) -> Option<&PartRef>;
    fn display_name(&self) -> Option<&str>;
    fn local_to_world(&self) -> Transform;
}

pub trait SceneSource {
    type Object: SceneObject;

    fn container_count(&self) -> usize;

    /// Objects of a loaded container. `None` when the container is unloaded,
    /// missing, or carries no object list.
    fn loaded_objects(&self, container: usize) -> Option<&[Self::Object]>;

    fn object(&self, handle: ObjectHandle) -> Option<&Self::Object> {
        self.loaded_objects(handle.container)?.get(handle.index)
    }
}
