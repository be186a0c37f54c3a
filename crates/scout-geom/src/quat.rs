use crate::Vec3;

/// Unit quaternion (x, y, z, w).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    pub const IDENTITY: Quat = Quat {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    #[inline]
    pub const fn from_xyzw(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation from Euler angles in degrees, applied X then Y then Z (extrinsic).
    pub fn from_euler_degrees(angles: Vec3) -> Self {
        let (sr, cr) = (angles.x.to_radians() * 0.5).sin_cos();
        let (sp, cp) = (angles.y.to_radians() * 0.5).sin_cos();
        let (sy, cy) = (angles.z.to_radians() * 0.5).sin_cos();
        Self {
            x: sr * cp * cy - cr * sp * sy,
            y: cr * sp * cy + sr * cp * sy,
            z: cr * cp * sy - sr * sp * cy,
            w: cr * cp * cy + sr * sp * sy,
        }
    }

    /// Inverse of [`Quat::from_euler_degrees`]; the Y angle is clamped to ±90.
    pub fn to_euler_degrees(self) -> Vec3 {
        let Quat { x, y, z, w } = self;
        let roll = (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y));
        let sin_pitch = 2.0 * (w * y - z * x);
        let pitch = if sin_pitch.abs() >= 1.0 {
            core::f32::consts::FRAC_PI_2.copysign(sin_pitch)
        } else {
            sin_pitch.asin()
        };
        let yaw = (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z));
        Vec3::new(roll.to_degrees(), pitch.to_degrees(), yaw.to_degrees())
    }

    pub fn is_near_identity(self, eps: f32) -> bool {
        1.0 - self.w.abs() <= eps
    }
}

/// Local-to-world placement of a scene object.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    #[inline]
    pub const fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::IDENTITY,
        }
    }

    #[inline]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euler_roundtrip_single_axis() {
        let q = Quat::from_euler_degrees(Vec3::new(0.0, 45.0, 0.0));
        let e = q.to_euler_degrees();
        assert!(e.x.abs() < 1e-3);
        assert!((e.y - 45.0).abs() < 1e-3);
        assert!(e.z.abs() < 1e-3);
        assert!(!q.is_near_identity(1e-6));
    }

    #[test]
    fn zero_angles_are_identity() {
        let q = Quat::from_euler_degrees(Vec3::ZERO);
        assert!(q.is_near_identity(1e-6));
    }
}
