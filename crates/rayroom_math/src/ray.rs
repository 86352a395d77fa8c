use crate::Vec3;

/// A ray in 3D space with an origin and a unit direction.
///
/// The direction is expected to be normalized so that the parameter `t` of
/// [`Ray::at`] is a Euclidean distance. Use [`Ray::towards`] when the direction
/// still needs normalizing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray from an already normalized direction.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        debug_assert!(
            direction.is_normalized(),
            "ray direction must be unit length, got {direction}"
        );
        Self { origin, direction }
    }

    /// Create a ray pointing along `direction`, normalizing it first.
    ///
    /// Returns `None` for a zero-length (or non-finite) direction.
    #[inline]
    pub fn towards(origin: Vec3, direction: Vec3) -> Option<Self> {
        direction
            .try_normalize()
            .map(|direction| Self { origin, direction })
    }

    /// Get the origin point of the ray.
    ///
    /// Note: Since `origin` is public, you can also access it directly via `ray.origin`.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    ///
    /// Note: Since `direction` is public, you can also access it directly via `ray.direction`.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
