use proptest::prelude::*;
use scout_geom::{Aabb, Quat, Vec3};

fn coord() -> impl Strategy<Value = f32> {
    -500.0f32..500.0
}

fn point() -> BoxedStrategy<Vec3> {
    (coord(), coord(), coord())
        .prop_map(|(x, y, z)| Vec3::new(x, y, z))
        .boxed()
}

fn close(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #[test]
    fn distance_is_symmetric_and_non_negative(a in point(), b in point()) {
        let ab = a.distance(b);
        prop_assert!(ab >= 0.0);
        prop_assert!(close(ab, b.distance(a), 1e-6));
        prop_assert!(close(ab, (a - b).length(), 1e-6));
    }

    #[test]
    fn cross_is_perpendicular_to_operands(a in point(), b in point()) {
        let c = a.cross(b);
        let tol = 1e-4 * a.length() * b.length() * c.length().max(1.0);
        prop_assert!(c.dot(a).abs() <= tol.max(1e-3));
        prop_assert!(c.dot(b).abs() <= tol.max(1e-3));
    }

    #[test]
    fn normalized_has_unit_length(v in point()) {
        prop_assume!(v.length() > 1e-3);
        prop_assert!(close(v.normalized().length(), 1.0, 1e-5));
    }

    #[test]
    fn anchor_box_is_centred(c in point(), h in 0.01f32..10.0) {
        let b = Aabb::from_center_half_extent(c, h);
        let mid = b.center();
        prop_assert!(close(mid.x, c.x, 1e-5) && close(mid.y, c.y, 1e-5) && close(mid.z, c.z, 1e-5));
        let size = b.max - b.min;
        for edge in [size.x, size.y, size.z] {
            prop_assert!(close(edge, 2.0 * h, 1e-4));
        }
    }

    // Away from the ±90° pitch singularity the Euler conversion inverts cleanly.
    #[test]
    fn euler_degrees_survive_quat_conversion(
        x in -170.0f32..170.0,
        y in -80.0f32..80.0,
        z in -170.0f32..170.0,
    ) {
        let back = Quat::from_euler_degrees(Vec3::new(x, y, z)).to_euler_degrees();
        prop_assert!((back.x - x).abs() < 0.05, "x {} -> {}", x, back.x);
        prop_assert!((back.y - y).abs() < 0.05, "y {} -> {}", y, back.y);
        prop_assert!((back.z - z).abs() < 0.05, "z {} -> {}", z, back.z);
    }

    #[test]
    fn only_zero_angles_are_identity(angle in 1.0f32..179.0) {
        prop_assert!(Quat::from_euler_degrees(Vec3::ZERO).is_near_identity(1e-6));
        prop_assert!(!Quat::from_euler_degrees(Vec3::new(0.0, angle, 0.0)).is_near_identity(1e-6));
    }
}
