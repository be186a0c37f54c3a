mod hotkeys;
mod init;
mod render;
mod step;
mod watchers;

use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use scout_labels::ObjectTracker;
use scout_scene::Scene;
use scout_ui::InfoPanelPresenter;

use crate::camera::FlyCamera;

pub struct App {
    pub scene: Scene,
    pub tracker: ObjectTracker,
    pub presenter: InfoPanelPresenter,
    pub cam: FlyCamera,
    pub config_path: PathBuf,
    config_event_rx: Receiver<()>,
}
