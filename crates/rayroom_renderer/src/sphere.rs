//! Sphere primitive for ray tracing.

use crate::{
    error::{SceneError, SceneResult},
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use rayroom_math::{Interval, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Fails unless `radius` is a positive, finite number.
    pub fn new(center: Vec3, radius: f32, material: Material) -> SceneResult<Self> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(SceneError::InvalidRadius(radius));
        }

        Ok(Self {
            center,
            radius,
            material,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Nearest root of the ray/sphere quadratic that `window` admits.
    ///
    /// The ray direction is unit length, so the quadratic's `a` term is 1 and
    /// the half-b form applies. The near root is tried first; the far one
    /// covers rays starting inside the sphere.
    fn nearest_root(&self, ray: &Ray, window: Interval) -> Option<f32> {
        let oc = ray.origin() - self.center;
        let b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        [-b - sqrtd, -b + sqrtd]
            .into_iter()
            .find(|&root| window.admits(root))
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, closest: HitRecord) -> HitRecord {
        match self.nearest_root(ray, closest.window()) {
            Some(t) => {
                let outward_normal = (ray.at(t) - self.center) / self.radius;
                HitRecord::new(ray, t, outward_normal, self.material)
            }
            None => closest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn grey_sphere(center: Vec3, radius: f32) -> Sphere {
        Sphere::new(center, radius, Material::matte(Color::splat(0.5))).unwrap()
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = grey_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let rec = sphere.hit(&ray, HitRecord::MISS);
        assert!(rec.hit);
        assert!((rec.t - 0.5).abs() < 1e-6); // Should hit at t=0.5
        assert!((rec.normal - Vec3::Z).length() < 1e-6);
        assert_eq!(rec.material, *sphere.material());
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = grey_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(!sphere.hit(&ray, HitRecord::MISS).hit);

        // Sphere entirely behind the ray origin
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(!sphere.hit(&ray, HitRecord::MISS).hit);
    }

    #[test]
    fn test_sphere_aimed_at_center_from_outside() {
        let cases = [
            (Vec3::new(0.0, 2.0, 0.0), 1.0, Vec3::new(0.0, 2.0, 5.0)),
            (Vec3::new(3.0, -1.0, 2.0), 0.25, Vec3::new(-4.0, 6.0, 1.0)),
            (Vec3::new(-10.0, 0.0, 0.0), 4.0, Vec3::new(10.0, 10.0, 10.0)),
        ];

        for (center, radius, origin) in cases {
            let sphere = grey_sphere(center, radius);
            let ray = Ray::towards(origin, center - origin).unwrap();
            let rec = sphere.hit(&ray, HitRecord::MISS);

            let expected = (center - origin).length() - radius;
            assert!(rec.hit);
            assert!(
                (rec.t - expected).abs() < 1e-4,
                "t={} expected={}",
                rec.t,
                expected
            );
            assert!((rec.normal.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_sphere_from_inside_uses_far_root() {
        let sphere = grey_sphere(Vec3::ZERO, 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let rec = sphere.hit(&ray, HitRecord::MISS);
        assert!(rec.hit);
        assert!((rec.t - 2.0).abs() < 1e-6);
        // Normal stays outward even when hit from inside
        assert!((rec.normal - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_sphere_does_not_replace_closer_hit() {
        let sphere = grey_sphere(Vec3::new(0.0, 0.0, -10.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let closer = HitRecord::new(&ray, 4.0, Vec3::Z, Material::matte(Color::X));
        assert_eq!(sphere.hit(&ray, closer), closer);

        // A farther record does get replaced
        let farther = HitRecord::new(&ray, 20.0, Vec3::Z, Material::matte(Color::X));
        assert!((sphere.hit(&ray, farther).t - 9.0).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_rejects_bad_radius() {
        let mat = Material::default();
        assert_eq!(
            Sphere::new(Vec3::ZERO, 0.0, mat),
            Err(SceneError::InvalidRadius(0.0))
        );
        assert!(Sphere::new(Vec3::ZERO, -1.0, mat).is_err());
        assert!(Sphere::new(Vec3::ZERO, f32::NAN, mat).is_err());
        assert!(Sphere::new(Vec3::ZERO, f32::INFINITY, mat).is_err());
    }

    #[test]
    fn test_sphere_respects_closest_window() {
        let sphere = grey_sphere(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        // Roots at t = 4 and 6: a record between them loses to the near root
        let between = HitRecord::new(&ray, 5.0, Vec3::Z, Material::matte(Color::X));
        let rec = sphere.hit(&ray, between);
        assert!((rec.t - 4.0).abs() < 1e-5);
        assert_eq!(rec.material, *sphere.material());

        // An equally distant record is kept, and the far root is not used
        let tied = HitRecord::new(&ray, rec.t, Vec3::Z, Material::matte(Color::Y));
        assert_eq!(sphere.hit(&ray, tied), tied);
    }

    #[test]
    fn test_sphere_grazing_origin_ignored() {
        // Ray starting on the surface heading outward: only t = 0 remains
        let sphere = grey_sphere(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::X, Vec3::X);
        assert!(!sphere.hit(&ray, HitRecord::MISS).hit);
    }
}
