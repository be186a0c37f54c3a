use crate::{Aabb, Mat4, Vec3, Vec4};

/// Plane in Hessian form: points with `normal·p + d >= 0` are on the inner side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub d: f32,
}

impl Plane {
    fn from_vec4(v: Vec4) -> Self {
        let normal = v.truncate();
        let len = normal.length();
        if len > 0.0 {
            Self {
                normal: normal / len,
                d: v.w / len,
            }
        } else {
            Self { normal, d: v.w }
        }
    }

    #[inline]
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        self.normal.dot(p) + self.d
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Containment {
    Disjoint,
    Intersects,
    Contains,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frustum {
    /// left, right, bottom, top, near, far
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extracts the six clip planes of a combined `proj * view` matrix (GL depth range).
    pub fn from_view_proj(m: &Mat4) -> Self {
        let r0 = m.row(0);
        let r1 = m.row(1);
        let r2 = m.row(2);
        let r3 = m.row(3);
        Self {
            planes: [
                Plane::from_vec4(r3 + r0),
                Plane::from_vec4(r3 - r0),
                Plane::from_vec4(r3 + r1),
                Plane::from_vec4(r3 - r1),
                Plane::from_vec4(r3 + r2),
                Plane::from_vec4(r3 - r2),
            ],
        }
    }

    pub fn contains_point(&self, p: Vec3) -> bool {
        self.planes.iter().all(|plane| plane.signed_distance(p) >= 0.0)
    }

    pub fn contains_aabb(&self, bbox: &Aabb) -> Containment {
        let mut straddles = false;
        for plane in &self.planes {
            let n = plane.normal;
            let positive = Vec3::new(
                if n.x >= 0.0 { bbox.max.x } else { bbox.min.x },
                if n.y >= 0.0 { bbox.max.y } else { bbox.min.y },
                if n.z >= 0.0 { bbox.max.z } else { bbox.min.z },
            );
            if plane.signed_distance(positive) < 0.0 {
                return Containment::Disjoint;
            }
            let negative = Vec3::new(
                if n.x >= 0.0 { bbox.min.x } else { bbox.max.x },
                if n.y >= 0.0 { bbox.min.y } else { bbox.max.y },
                if n.z >= 0.0 { bbox.min.z } else { bbox.max.z },
            );
            if plane.signed_distance(negative) < 0.0 {
                straddles = true;
            }
        }
        if straddles {
            Containment::Intersects
        } else {
            Containment::Contains
        }
    }
}
