use proptest::prelude::*;
use scout_geom::{Aabb, Containment, Frustum, Mat4, Vec3, project_to_screen};

const WIDTH: f32 = 1280.0;
const HEIGHT: f32 = 720.0;
const FOV_Y: f32 = 60.0;

fn camera() -> (Mat4, Mat4) {
    let view = Mat4::look_at_rh(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::UP);
    let proj = Mat4::perspective_rh_gl(FOV_Y.to_radians(), WIDTH / HEIGHT, 0.1, 1000.0);
    (view, proj)
}

#[test]
fn point_ahead_lands_in_viewport_center() {
    let (view, proj) = camera();
    let sp = project_to_screen(Vec3::new(0.0, 0.0, -10.0), &view, &proj, WIDTH, HEIGHT)
        .expect("point ahead of camera");
    assert!((sp.x - WIDTH / 2.0).abs() < 0.5);
    assert!((sp.y - HEIGHT / 2.0).abs() < 0.5);
}

#[test]
fn point_behind_camera_is_rejected() {
    let (view, proj) = camera();
    assert!(project_to_screen(Vec3::new(0.0, 0.0, 10.0), &view, &proj, WIDTH, HEIGHT).is_none());
}

#[test]
fn point_outside_horizontal_fov_is_rejected() {
    let (view, proj) = camera();
    assert!(project_to_screen(Vec3::new(100.0, 0.0, -10.0), &view, &proj, WIDTH, HEIGHT).is_none());
}

#[test]
fn screen_y_grows_downward() {
    let (view, proj) = camera();
    let above = project_to_screen(Vec3::new(0.0, 2.0, -10.0), &view, &proj, WIDTH, HEIGHT).unwrap();
    let below = project_to_screen(Vec3::new(0.0, -2.0, -10.0), &view, &proj, WIDTH, HEIGHT).unwrap();
    assert!(above.y < HEIGHT / 2.0);
    assert!(below.y > HEIGHT / 2.0);
}

#[test]
fn frustum_classifies_anchor_boxes() {
    let (view, proj) = camera();
    let frustum = Frustum::from_view_proj(&(proj * view));
    let ahead = Aabb::from_center_half_extent(Vec3::new(0.0, 0.0, -10.0), 0.5);
    let behind = Aabb::from_center_half_extent(Vec3::new(0.0, 0.0, 10.0), 0.5);
    let at_eye = Aabb::from_center_half_extent(Vec3::ZERO, 0.5);
    let far_side = Aabb::from_center_half_extent(Vec3::new(100.0, 0.0, -10.0), 0.5);
    assert_eq!(frustum.contains_aabb(&ahead), Containment::Contains);
    assert_eq!(frustum.contains_aabb(&behind), Containment::Disjoint);
    assert_eq!(frustum.contains_aabb(&at_eye), Containment::Intersects);
    assert_eq!(frustum.contains_aabb(&far_side), Containment::Disjoint);
    assert!(frustum.contains_point(Vec3::new(0.0, 0.0, -10.0)));
}

proptest! {
    // Points built from in-range NDC and positive depth project inside the viewport
    #[test]
    fn in_view_points_project_inside_viewport(
        nx in -0.95f32..0.95,
        ny in -0.95f32..0.95,
        depth in 0.5f32..500.0,
    ) {
        let (view, proj) = camera();
        let half_h = (FOV_Y.to_radians() * 0.5).tan() * depth;
        let half_w = half_h * WIDTH / HEIGHT;
        let p = Vec3::new(nx * half_w, ny * half_h, -depth);
        let sp = project_to_screen(p, &view, &proj, WIDTH, HEIGHT);
        prop_assert!(sp.is_some());
        let sp = sp.unwrap();
        prop_assert!(sp.x >= 0.0 && sp.x <= WIDTH);
        prop_assert!(sp.y >= 0.0 && sp.y <= HEIGHT);
    }

    // Anything at or behind the eye plane has clip w <= 0
    #[test]
    fn points_behind_never_project(
        x in -100f32..100.0,
        y in -100f32..100.0,
        z in 0.0f32..1000.0,
    ) {
        let (view, proj) = camera();
        prop_assert!(project_to_screen(Vec3::new(x, y, z), &view, &proj, WIDTH, HEIGHT).is_none());
    }

    // Same inputs, same bits
    #[test]
    fn projection_is_deterministic(x in -10f32..10.0, y in -10f32..10.0, z in -100f32..-1.0) {
        let (view, proj) = camera();
        let p = Vec3::new(x, y, z);
        let a = project_to_screen(p, &view, &proj, WIDTH, HEIGHT);
        let b = project_to_screen(p, &view, &proj, WIDTH, HEIGHT);
        prop_assert_eq!(a.map(|v| (v.x.to_bits(), v.y.to_bits())), b.map(|v| (v.x.to_bits(), v.y.to_bits())));
    }
}

#[test]
fn non_finite_points_never_project() {
    let (view, proj) = camera();
    for p in [
        Vec3::new(f32::NAN, 0.0, -10.0),
        Vec3::new(0.0, f32::NAN, -10.0),
        Vec3::new(0.0, 0.0, f32::NAN),
        Vec3::new(f32::INFINITY, 0.0, -10.0),
    ] {
        assert!(project_to_screen(p, &view, &proj, WIDTH, HEIGHT).is_none(), "{:?}", p);
    }
}
