//! Local shading: a single point light with ambient, diffuse and specular terms.
//!
//! There are no shadow rays and no distance falloff; every surface facing the
//! light is lit as if nothing stood in between.

use crate::{Color, Material};
use rayroom_math::{reflect, Vec3};

/// A point light and the coefficients of the Phong-style model it drives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// World-space position of the light
    pub position: Vec3,
    /// Fraction of the material color always present
    pub ambient: f32,
    /// Weight of the Lambertian `N·L` term
    pub diffuse: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 4.0, 0.0),
            ambient: 0.2,
            diffuse: 0.6,
        }
    }
}

impl PointLight {
    /// Create a light at `position` with the default coefficients.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Shade a surface point.
    ///
    /// `normal` is the unit surface normal and `view_dir` the unit vector from
    /// the point back toward the viewer. The result is not clamped.
    pub fn shade(&self, point: Vec3, normal: Vec3, view_dir: Vec3, material: &Material) -> Color {
        // A point sitting exactly on the light sees it from no direction
        let light_dir = (self.position - point).normalize_or_zero();

        let ambient = material.color * self.ambient;

        let diff = normal.dot(light_dir).max(0.0);
        let diffuse = material.color * (diff * self.diffuse);

        let reflect_dir = reflect(-light_dir, normal);
        let spec = pow32(view_dir.dot(reflect_dir).max(0.0)) * material.specular;

        // Highlight is white, not tinted by the material
        ambient + diffuse + Color::splat(spec)
    }
}

/// `x^32` by five squarings.
#[inline]
fn pow32(x: f32) -> f32 {
    let x2 = x * x;
    let x4 = x2 * x2;
    let x8 = x4 * x4;
    let x16 = x8 * x8;
    x16 * x16
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn close(a: Color, b: Color) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn test_pow32_matches_powi() {
        for x in [0.0_f32, 0.5, 0.9, 0.99, 1.0] {
            assert!((pow32(x) - x.powi(32)).abs() < 1e-6, "x={x}");
        }
    }

    #[test]
    fn test_ambient_only_when_facing_away() {
        let light = PointLight::default();
        let mat = Material::matte(Color::new(1.0, 0.5, 0.25));

        // Floor point seen from above, but normal turned away from the light
        let color = light.shade(Vec3::ZERO, Vec3::NEG_Y, Vec3::Y, &mat);
        assert!(close(color, mat.color * 0.2));
    }

    #[test]
    fn test_diffuse_straight_under_light() {
        let light = PointLight::default();
        let mat = Material::matte(Color::new(0.2, 0.2, 1.0));

        // Light straight above: N·L = 1, view from the side so no highlight
        let color = light.shade(Vec3::ZERO, Vec3::Y, Vec3::X, &mat);
        assert!(close(color, mat.color * 0.8));
    }

    #[test]
    fn test_specular_is_white_and_scaled() {
        let light = PointLight::default();
        let mat = Material::new(Color::new(0.0, 0.0, 1.0), 0.0, 0.5).unwrap();

        // Viewer sitting on the mirror direction of the light: highlight = 1
        let color = light.shade(Vec3::ZERO, Vec3::Y, Vec3::Y, &mat);
        let expected = mat.color * 0.8 + Color::splat(0.5);
        assert!(close(color, expected), "got {color}");
    }

    #[test]
    fn test_no_distance_attenuation() {
        let mat = Material::matte(Color::ONE);
        let near = PointLight::at(Vec3::new(0.0, 1.0, 0.0));
        let far = PointLight::at(Vec3::new(0.0, 100.0, 0.0));

        let a = near.shade(Vec3::ZERO, Vec3::Y, Vec3::X, &mat);
        let b = far.shade(Vec3::ZERO, Vec3::Y, Vec3::X, &mat);
        assert!(close(a, b));
    }

    #[test]
    fn test_grazing_light() {
        let light = PointLight::at(Vec3::new(5.0, 0.0, 0.0));
        let mat = Material::matte(Color::ONE);

        // Light in the surface plane: diffuse vanishes, ambient remains
        let color = light.shade(Vec3::ZERO, Vec3::Y, Vec3::Y, &mat);
        assert!(close(color, Color::splat(0.2)));
    }
}
