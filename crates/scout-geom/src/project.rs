use crate::{Mat4, Vec2, Vec3};

/// Projects a world-space point to pixel coordinates (origin top-left).
///
/// Returns `None` when the point sits behind the camera (`clip.w <= 0`) or when its
/// normalized device coordinates leave `[-1, 1]` on X or Y. Non-finite input never
/// yields a point.
pub fn project_to_screen(
    point: Vec3,
    view: &Mat4,
    proj: &Mat4,
    width: f32,
    height: f32,
) -> Option<Vec2> {
    let eye = view.transform_point(point);
    let clip = proj.mul_vec4(eye);
    if !clip.w.is_finite() || clip.w <= 0.0 {
        return None;
    }
    let ndc_x = clip.x / clip.w;
    let ndc_y = clip.y / clip.w;
    let on_screen = |v: f32| v.is_finite() && v.abs() <= 1.0;
    if !on_screen(ndc_x) || !on_screen(ndc_y) {
        return None;
    }
    Some(Vec2::new(
        (ndc_x + 1.0) * 0.5 * width,
        (1.0 - ndc_y) * 0.5 * height,
    ))
}
