//! Surface material description.

use crate::error::{SceneError, SceneResult};
use rayroom_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// How a surface responds to the light and to mirror reflection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base color, channels conceptually in [0, 1]
    pub color: Color,
    /// Fraction of the outgoing color taken from the mirror-reflected ray
    pub reflectivity: f32,
    /// Multiplier for the (white) specular highlight
    pub specular: f32,
}

impl Material {
    /// Create a new material.
    ///
    /// Fails if `reflectivity` is outside [0, 1] or `specular` is negative.
    pub fn new(color: Color, reflectivity: f32, specular: f32) -> SceneResult<Self> {
        if !(0.0..=1.0).contains(&reflectivity) {
            return Err(SceneError::InvalidReflectivity(reflectivity));
        }
        if specular.is_nan() || specular < 0.0 {
            return Err(SceneError::InvalidSpecular(specular));
        }

        Ok(Self {
            color,
            reflectivity,
            specular,
        })
    }

    /// A purely diffuse material with no reflection and no highlight.
    pub fn matte(color: Color) -> Self {
        Self {
            color,
            reflectivity: 0.0,
            specular: 0.0,
        }
    }

    /// True if this surface spawns a reflected ray.
    #[inline]
    pub fn is_reflective(&self) -> bool {
        self.reflectivity > 0.0
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::matte(Color::splat(0.5))
    }
}
