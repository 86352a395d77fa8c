//! Scene container and closest-hit resolution.

use crate::{
    error::SceneResult,
    hittable::{HitRecord, Hittable},
    Material, PointLight, Ray, Rect, Sphere,
};
use rayroom_math::Vec3;

/// Every primitive in the world plus the light that shades them.
///
/// Built once up front and then only read, so a frame can share it across
/// worker threads without locking. Intersection is a linear scan over both
/// collections, which stays cheap for the handful of primitives used here.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
    rects: Vec<Rect>,
    light: PointLight,
}

impl Scene {
    /// Create an empty scene lit by the default light.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the light.
    pub fn with_light(mut self, light: PointLight) -> Self {
        self.light = light;
        self
    }

    /// Add an already constructed sphere.
    pub fn push_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Add an already constructed rect.
    pub fn push_rect(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    /// Build and add a sphere, failing on invalid input.
    pub fn add_sphere(
        &mut self,
        center: Vec3,
        radius: f32,
        material: Material,
    ) -> SceneResult<&mut Self> {
        self.push_sphere(Sphere::new(center, radius, material)?);
        Ok(self)
    }

    /// Build and add a rect, failing on invalid input.
    #[allow(clippy::too_many_arguments)]
    pub fn add_rect(
        &mut self,
        point: Vec3,
        normal: Vec3,
        u: Vec3,
        v: Vec3,
        width: f32,
        height: f32,
        material: Material,
    ) -> SceneResult<&mut Self> {
        self.push_rect(Rect::new(point, normal, u, v, width, height, material)?);
        Ok(self)
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn light(&self) -> &PointLight {
        &self.light
    }

    /// Total number of primitives.
    pub fn len(&self) -> usize {
        self.spheres.len() + self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find the closest hit along `ray`.
    ///
    /// Returns [`HitRecord::MISS`] when nothing is hit.
    pub fn trace(&self, ray: &Ray) -> HitRecord {
        self.hit(ray, HitRecord::MISS)
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, closest: HitRecord) -> HitRecord {
        let closest = self.spheres.as_slice().hit(ray, closest);
        self.rects.as_slice().hit(ray, closest)
    }
}
