//! Hittable trait and HitRecord for ray-object intersection.

use crate::{Color, Material, Ray};
use rayroom_math::{Interval, Vec3};

/// Smallest accepted ray parameter.
///
/// Keeps secondary rays, which start exactly on a surface, from hitting that
/// same surface again at `t ≈ 0`.
pub const T_MIN: f32 = 0.001;

/// Record of the closest ray-object intersection found so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Whether anything was hit
    pub hit: bool,
    /// Parameter t where the intersection occurs (+inf while nothing is hit)
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Outward surface normal at the intersection (unit length)
    pub normal: Vec3,
    /// Material of the surface that was hit
    pub material: Material,
}

impl HitRecord {
    /// The starting record for a trace: nothing hit, `t = +inf`.
    pub const MISS: HitRecord = HitRecord {
        hit: false,
        t: f32::INFINITY,
        p: Vec3::ZERO,
        normal: Vec3::ZERO,
        material: Material {
            color: Color::ZERO,
            reflectivity: 0.0,
            specular: 0.0,
        },
    };

    /// Range of `t` a new candidate must fall in to replace this record.
    #[inline]
    pub fn window(&self) -> Interval {
        Interval::new(T_MIN, self.t)
    }

    /// Build a record for a hit at `t` along `ray`.
    #[inline]
    pub fn new(ray: &Ray, t: f32, normal: Vec3, material: Material) -> Self {
        Self {
            hit: true,
            t,
            p: ray.at(t),
            normal,
            material,
        }
    }
}

impl Default for HitRecord {
    fn default() -> Self {
        Self::MISS
    }
}

/// Trait for objects that can be hit by rays.
///
/// Intersection is a fold: each object receives the closest record found so
/// far and hands back either that record or a strictly closer hit of its own.
/// Offering the record to objects in any order yields the same result.
pub trait Hittable: Send + Sync {
    /// Test the ray against this object, keeping whichever hit is closer.
    fn hit(&self, ray: &Ray, closest: HitRecord) -> HitRecord;
}

impl<T: Hittable> Hittable for [T] {
    fn hit(&self, ray: &Ray, closest: HitRecord) -> HitRecord {
        self.iter().fold(closest, |best, object| object.hit(ray, best))
    }
}
