use raylib::prelude::*;
use scout_geom::{Mat4, Transform, Vec2 as GVec2, Vec3 as GVec3};
use scout_labels::ViewState;

// Matches raylib's default clip distances so overlay projection lines up with the 3D pass.
pub const NEAR_PLANE: f32 = 0.01;
pub const FAR_PLANE: f32 = 1000.0;

pub struct FlyCamera {
    pub position: GVec3,
    pub yaw: f32,   // degrees
    pub pitch: f32, // degrees
    pub fov_y: f32, // degrees
    pub move_speed: f32,
    pub mouse_sensitivity: f32,
    pub captured: bool,
}

#[inline]
fn to_rl(v: GVec3) -> Vector3 {
    Vector3::new(v.x, v.y, v.z)
}

impl FlyCamera {
    pub fn new(position: GVec3, fov_y: f32) -> Self {
        Self {
            position,
            yaw: -90.0,
            pitch: 0.0,
            fov_y,
            move_speed: 8.0,
            mouse_sensitivity: 0.1,
            captured: false,
        }
    }

    pub fn forward(&self) -> GVec3 {
        let yaw_rad = self.yaw.to_radians();
        let pitch_rad = self.pitch.to_radians();
        GVec3::new(
            yaw_rad.cos() * pitch_rad.cos(),
            pitch_rad.sin(),
            yaw_rad.sin() * pitch_rad.cos(),
        )
        .normalized()
    }

    pub fn right(&self) -> GVec3 {
        self.forward().cross(GVec3::UP).normalized()
    }

    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D::perspective(
            to_rl(self.position),
            to_rl(self.position + self.forward()),
            to_rl(GVec3::UP),
            self.fov_y,
        )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), GVec3::UP)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y.to_radians(), aspect, NEAR_PLANE, FAR_PLANE)
    }

    pub fn view_state(&self, screen_w: f32, screen_h: f32) -> ViewState {
        let aspect = if screen_h > 0.0 { screen_w / screen_h } else { 1.0 };
        ViewState::new(
            Transform::from_translation(self.position),
            self.view_matrix(),
            self.projection_matrix(aspect),
            GVec2::new(screen_w, screen_h),
        )
    }

    pub fn update(&mut self, rl: &mut RaylibHandle, dt: f32) {
        // Toggle mouse capture with Tab
        if rl.is_key_pressed(KeyboardKey::KEY_TAB) {
            self.captured = !self.captured;
            if self.captured {
                rl.disable_cursor();
            } else {
                rl.enable_cursor();
            }
        }

        if self.captured {
            let md = rl.get_mouse_delta();
            self.yaw += md.x * self.mouse_sensitivity;
            self.pitch -= md.y * self.mouse_sensitivity;
            self.pitch = self.pitch.clamp(-89.9, 89.9);
        }

        let f = self.forward();
        let r = self.right();
        let mut wish_dir = GVec3::ZERO;
        for (key, dir) in [
            (KeyboardKey::KEY_W, f),
            (KeyboardKey::KEY_S, -f),
            (KeyboardKey::KEY_D, r),
            (KeyboardKey::KEY_A, -r),
            (KeyboardKey::KEY_E, GVec3::UP),
            (KeyboardKey::KEY_Q, -GVec3::UP),
        ] {
            if rl.is_key_down(key) {
                wish_dir += dir;
            }
        }
        if wish_dir.length() > 0.0 {
            let speed = if rl.is_key_down(KeyboardKey::KEY_LEFT_SHIFT) {
                self.move_speed * 3.0
            } else {
                self.move_speed
            };
            self.position += wish_dir.normalized() * (speed * dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_heading_looks_down_negative_z() {
        let cam = FlyCamera::new(GVec3::ZERO, 60.0);
        let f = cam.forward();
        assert!(f.x.abs() < 1e-5 && f.y.abs() < 1e-5);
        assert!((f.z + 1.0).abs() < 1e-5);
    }

    #[test]
    fn view_state_centres_point_straight_ahead() {
        let cam = FlyCamera::new(GVec3::new(0.0, 2.0, 0.0), 60.0);
        let vs = cam.view_state(800.0, 600.0);
        let sp = scout_geom::project_to_screen(
            GVec3::new(0.0, 2.0, -10.0),
            &vs.view,
            &vs.proj,
            vs.viewport.x,
            vs.viewport.y,
        )
        .unwrap();
        assert!((sp.x - 400.0).abs() < 0.5);
        assert!((sp.y - 300.0).abs() < 0.5);
        assert_eq!(vs.camera.translation, cam.position);
    }
}
