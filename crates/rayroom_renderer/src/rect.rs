//! Finite planar rectangle (quad) primitive.
//!
//! The rect is intersected as an infinite plane first, then the hit point is
//! projected onto the rect's in-plane basis and bounded by its half extents.

use crate::{
    error::{SceneError, SceneResult},
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use rayroom_math::Vec3;

/// Rays with `|normal · direction|` below this are treated as parallel.
const PARALLEL_EPSILON: f32 = 1e-4;

/// Largest dot product tolerated between basis vectors.
const ORTHOGONAL_EPSILON: f32 = 1e-3;

/// A rectangle centered on `point`, spanned by `u` (width) and `v` (height).
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    /// Center of the rectangle
    point: Vec3,
    /// Unit normal, fixed for the whole surface
    normal: Vec3,
    /// Unit in-plane axis along the width
    u: Vec3,
    /// Unit in-plane axis along the height
    v: Vec3,
    half_width: f32,
    half_height: f32,
    material: Material,
}

impl Rect {
    /// Create a new rectangle.
    ///
    /// `normal`, `u` and `v` are normalized independently and must be
    /// mutually orthogonal. `width` and `height` are full extents along `u`
    /// and `v`.
    pub fn new(
        point: Vec3,
        normal: Vec3,
        u: Vec3,
        v: Vec3,
        width: f32,
        height: f32,
        material: Material,
    ) -> SceneResult<Self> {
        let normal = normal
            .try_normalize()
            .ok_or(SceneError::DegenerateVector("normal"))?;
        let u = u.try_normalize().ok_or(SceneError::DegenerateVector("u"))?;
        let v = v.try_normalize().ok_or(SceneError::DegenerateVector("v"))?;

        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(SceneError::InvalidExtent { width, height });
        }

        for (name, dot) in [
            ("normal/u", normal.dot(u)),
            ("normal/v", normal.dot(v)),
            ("u/v", u.dot(v)),
        ] {
            if dot.abs() > ORTHOGONAL_EPSILON {
                return Err(SceneError::NonOrthogonalBasis(name, dot));
            }
        }

        Ok(Self {
            point,
            normal,
            u,
            v,
            half_width: width / 2.0,
            half_height: height / 2.0,
            material,
        })
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn width(&self) -> f32 {
        self.half_width * 2.0
    }

    pub fn height(&self) -> f32 {
        self.half_height * 2.0
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Hittable for Rect {
    fn hit(&self, ray: &Ray, closest: HitRecord) -> HitRecord {
        let denom = self.normal.dot(ray.direction());
        if denom.abs() < PARALLEL_EPSILON {
            return closest;
        }

        let t = (self.point - ray.origin()).dot(self.normal) / denom;
        if !closest.window().admits(t) {
            return closest;
        }

        // Planar coordinates relative to the center
        let local = ray.at(t) - self.point;
        let u = local.dot(self.u);
        let v = local.dot(self.v);
        if u.abs() > self.half_width || v.abs() > self.half_height {
            return closest;
        }

        HitRecord::new(ray, t, self.normal, self.material)
    }
}
