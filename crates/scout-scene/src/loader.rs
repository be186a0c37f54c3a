use std::error::Error;
use std::fs;
use std::path::Path;

use scout_geom::{Quat, Transform, Vec3};
use serde::Deserialize;

use crate::{MapContainer, MapObject, PartRef, Scene};

// Top-level scene description file
#[derive(Deserialize, Debug)]
struct SceneFile {
    #[serde(default)]
    containers: Vec<ContainerDef>,
}

#[derive(Deserialize, Debug)]
struct ContainerDef {
    name: String,
    #[serde(default = "default_loaded")]
    loaded: bool,
    // Absent list stays absent; the overlay skips it.
    #[serde(default)]
    objects: Option<Vec<ObjectDef>>,
}

#[derive(Deserialize, Debug)]
struct ObjectDef {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    position: [f32; 3],
    // Euler degrees, X then Y then Z
    #[serde(default)]
    rotation: [f32; 3],
    #[serde(default)]
    part: Option<PartRef>,
}

fn default_loaded() -> bool {
    true
}

impl ObjectDef {
    fn into_object(self) -> MapObject {
        let [px, py, pz] = self.position;
        let [rx, ry, rz] = self.rotation;
        let transform = Transform::from_translation(Vec3::new(px, py, pz))
            .with_rotation(Quat::from_euler_degrees(Vec3::new(rx, ry, rz)));
        MapObject {
            name: self.name,
            part: self.part,
            transform,
        }
    }
}

impl Scene {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        let file: SceneFile = toml::from_str(s)?;
        let containers = file
            .containers
            .into_iter()
            .map(|def| MapContainer {
                name: def.name,
                loaded: def.loaded,
                objects: def
                    .objects
                    .map(|objs| objs.into_iter().map(ObjectDef::into_object).collect()),
            })
            .collect();
        Ok(Scene { containers })
    }
}

pub fn load_scene_from_path(path: &Path) -> Result<Scene, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let scene = Scene::from_toml_str(&s)?;
    log::info!(
        "loaded scene {:?}: {} container(s), {} object(s)",
        path,
        scene.containers.len(),
        scene.object_count()
    );
    Ok(scene)
}
