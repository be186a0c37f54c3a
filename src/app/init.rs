use std::path::{Path, PathBuf};
use std::sync::mpsc;

use scout_geom::Vec3;
use scout_labels::{ObjectTracker, OverlayConfig};
use scout_scene::Scene;
use scout_ui::InfoPanelPresenter;

use super::App;
use crate::camera::FlyCamera;

impl App {
    pub fn new(
        scene: Scene,
        config: OverlayConfig,
        config_path: PathBuf,
        watch_config: bool,
        fov_y: f32,
    ) -> Self {
        let (tx, rx) = mpsc::channel::<()>();
        if watch_config {
            let path = config_path.clone();
            std::thread::spawn(move || {
                use notify::{EventKind, RecursiveMode, Watcher};
                match notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
                    if let Ok(event) = res {
                        match event.kind {
                            EventKind::Modify(_)
                            | EventKind::Create(_)
                            | EventKind::Remove(_)
                            | EventKind::Any => {
                                let _ = tx.send(());
                            }
                            _ => {}
                        }
                    }
                }) {
                    Ok(mut watcher) => {
                        if let Err(e) = watcher.watch(Path::new(&path), RecursiveMode::NonRecursive)
                        {
                            log::warn!("cannot watch overlay config {}: {}", path.display(), e);
                            return;
                        }
                        loop {
                            std::thread::sleep(std::time::Duration::from_secs(3600));
                        }
                    }
                    Err(e) => log::warn!("config watcher unavailable: {}", e),
                }
            });
        }

        let spawn = scene_centroid(&scene) + Vec3::new(0.0, 4.0, 20.0);
        Self {
            scene,
            tracker: ObjectTracker::new(config),
            presenter: InfoPanelPresenter::default(),
            cam: FlyCamera::new(spawn, fov_y),
            config_path,
            config_event_rx: rx,
        }
    }
}

fn scene_centroid(scene: &Scene) -> Vec3 {
    let mut sum = Vec3::ZERO;
    let mut n = 0usize;
    for container in &scene.containers {
        for obj in container.objects.iter().flatten() {
            sum += obj.transform.translation;
            n += 1;
        }
    }
    if n == 0 { Vec3::ZERO } else { sum / n as f32 }
}
