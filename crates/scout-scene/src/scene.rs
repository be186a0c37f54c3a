use scout_geom::{Transform, Vec3};

use crate::{PartRef, SceneObject, SceneSource};

#[derive(Clone, Debug, PartialEq)]
pub struct MapObject {
    pub name: Option<String>,
    pub part: Option<PartRef>,
    pub transform: Transform,
}

impl MapObject {
    pub fn new(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            name: Some(name.into()),
            part: None,
            transform: Transform::from_translation(position),
        }
    }

    pub fn unnamed(position: Vec3) -> Self {
        Self {
            name: None,
            part: None,
            transform: Transform::from_translation(position),
        }
    }

    pub fn with_part(mut self, part: PartRef) -> Self {
        self.part = Some(part);
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}

impl SceneObject for MapObject {
    fn part(&self) -> Option<&PartRef> {
        self.part.as_ref()
    }

    fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn local_to_world(&self) -> Transform {
        self.transform
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapContainer {
    pub name: String,
    pub loaded: bool,
    pub objects: Option<Vec<MapObject>>,
}

impl MapContainer {
    pub fn new(name: impl Into<String>, objects: Vec<MapObject>) -> Self {
        Self {
            name: name.into(),
            loaded: true,
            objects: Some(objects),
        }
    }

    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            loaded: true,
            objects: None,
        }
    }

    pub fn unloaded(mut self) -> Self {
        self.loaded = false;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub containers: Vec<MapContainer>,
}

impl Scene {
    pub fn new(containers: Vec<MapContainer>) -> Self {
        Self { containers }
    }

    pub fn object_count(&self) -> usize {
        self.containers
            .iter()
            .filter(|c| c.loaded)
            .filter_map(|c| c.objects.as_ref())
            .map(Vec::len)
            .sum()
    }
}

impl SceneSource for Scene {
    type Object = MapObject;

    fn container_count(&self) -> usize {
        self.containers.len()
    }

    fn loaded_objects(&self, container: usize) -> Option<&[MapObject]> {
        let c = self.containers.get(container)?;
        if !c.loaded {
            return None;
        }
        c.objects.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ObjectHandle;

    #[test]
    fn unloaded_and_listless_containers_yield_nothing() {
        let scene = Scene::new(vec![
            MapContainer::new("a", vec![MapObject::new("x", Vec3::ZERO)]).unloaded(),
            MapContainer::empty("b"),
            MapContainer::new("c", vec![MapObject::new("y", Vec3::ZERO)]),
        ]);
        assert!(scene.loaded_objects(0).is_none());
        assert!(scene.loaded_objects(1).is_none());
        assert_eq!(scene.loaded_objects(2).map(<[_]>::len), Some(1));
        assert!(scene.loaded_objects(9).is_none());
        assert_eq!(scene.object_count(), 1);
        let obj = scene.object(ObjectHandle::new(2, 0)).unwrap();
        assert_eq!(obj.display_name(), Some("y"));
        assert!(scene.object(ObjectHandle::new(2, 1)).is_none());
    }
}
