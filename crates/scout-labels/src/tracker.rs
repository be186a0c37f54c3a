use std::time::Instant;

use scout_geom::{Aabb, Containment, Frustum, Mat4, Transform, Vec2, project_to_screen};
use scout_scene::{ObjectHandle, PartRef, SceneObject, SceneSource};

use crate::snapshot::{display_name, fallback_id, usable_model};
use crate::{Classifier, ObjectDetails, OverlayConfig, TrackedObject};

const ROTATION_EPS: f32 = 1e-6;

/// Camera and viewport state captured for one refresh.
#[derive(Clone, Copy, Debug)]
pub struct ViewState {
    pub frustum: Frustum,
    pub camera: Transform,
    pub view: Mat4,
    pub proj: Mat4,
    pub viewport: Vec2,
}

impl ViewState {
    pub fn new(camera: Transform, view: Mat4, proj: Mat4, viewport: Vec2) -> Self {
        Self {
            frustum: Frustum::from_view_proj(&(proj * view)),
            camera,
            view,
            proj,
            viewport,
        }
    }
}

/// Owns the per-tick list of labelled objects.
pub struct ObjectTracker {
    config: OverlayConfig,
    classifier: Classifier,
    tracked: Vec<TrackedObject>,
    last_refresh: Option<Instant>,
}

impl ObjectTracker {
    pub fn new(config: OverlayConfig) -> Self {
        let classifier = Classifier::new(config.id_rules.clone());
        Self {
            config,
            classifier,
            tracked: Vec::new(),
            last_refresh: None,
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Swaps the configuration; the next refresh runs regardless of the interval.
    pub fn set_config(&mut self, config: OverlayConfig) {
        self.classifier = Classifier::new(config.id_rules.clone());
        self.config = config;
        self.last_refresh = None;
    }

    pub fn tracked(&self) -> &[TrackedObject] {
        &self.tracked
    }

    pub fn last_refresh(&self) -> Option<Instant> {
        self.last_refresh
    }

    /// Rebuilds the tracked list from `scene` unless the overlay is disabled or the
    /// previous refresh is younger than the configured interval. Returns whether a
    /// rebuild happened.
    pub fn refresh<S: SceneSource>(&mut self, scene: &S, view: &ViewState, now: Instant) -> bool {
        if !self.config.enabled {
            self.tracked.clear();
            return false;
        }
        if let Some(last) = self.last_refresh {
            if now.saturating_duration_since(last) < self.config.refresh_interval() {
                return false;
            }
        }
        self.last_refresh = Some(now);
        self.tracked.clear();

        let mut considered = 0usize;
        for container in 0..scene.container_count() {
            let Some(objects) = scene.loaded_objects(container) else {
                continue;
            };
            for (index, object) in objects.iter().enumerate() {
                considered += 1;
                let handle = ObjectHandle::new(container, index);
                if let Some(tracked) = self.track(handle, object, view) {
                    self.tracked.push(tracked);
                }
            }
        }

        log::debug!(
            target: "overlay",
            "refresh: {} of {} object(s) labelled",
            self.tracked.len(),
            considered
        );
        true
    }

    fn track<O: SceneObject>(
        &self,
        handle: ObjectHandle,
        object: &O,
        view: &ViewState,
    ) -> Option<TrackedObject> {
        let part = object.part();
        let model = part.and_then(PartRef::model_name);
        let name = object.display_name();
        let category = self.classifier.classify(part, model, name);
        if !self.config.category_enabled(category) {
            return None;
        }

        let transform = object.local_to_world();
        let anchor = transform.translation;
        if !anchor.is_finite() {
            log::trace!(target: "overlay", "{:?} has a non-finite position", handle);
            return None;
        }
        let distance = view.camera.translation.distance(anchor);
        if !distance.is_finite() || distance > self.config.max_distance {
            log::trace!(target: "overlay", "{:?} culled by distance {:.1}", handle, distance);
            return None;
        }

        let bbox = Aabb::from_center_half_extent(anchor, self.config.anchor_half_extent);
        if view.frustum.contains_aabb(&bbox) == Containment::Disjoint {
            log::trace!(target: "overlay", "{:?} outside frustum", handle);
            return None;
        }

        let screen_position =
            project_to_screen(anchor, &view.view, &view.proj, view.viewport.x, view.viewport.y)?;

        let numeric_id = part.and_then(PartRef::entity_id);
        let display_id = match numeric_id {
            Some(id) => id.to_string(),
            None => fallback_id(handle, name),
        };
        let rotation = (!transform.rotation.is_near_identity(ROTATION_EPS))
            .then(|| transform.rotation.to_euler_degrees());

        Some(TrackedObject {
            handle,
            world_position: anchor,
            screen_position,
            category,
            name: display_name(name, model),
            display_id,
            details: ObjectDetails {
                type_name: part.map(PartRef::type_label),
                position: anchor,
                rotation,
                model: usable_model(model),
                numeric_id,
            },
        })
    }
}
