//! First-person fly camera for ray generation.

use crate::Ray;
use rayroom_math::Vec3;

/// Pitch is kept strictly away from straight up/down, where `front × up`
/// would vanish.
pub const PITCH_LIMIT: f32 = 89.0;

/// World up direction used to derive the camera basis.
const WORLD_UP: Vec3 = Vec3::Y;

/// Free-flying camera driven by yaw and pitch in degrees.
///
/// `front`, `right` and `up` form an orthonormal basis and are recomputed by
/// [`Camera::update`] whenever the angles change.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
    /// Field of view in degrees. Informational; the frame renderer sizes the
    /// viewport from `RenderConfig::viewport_height`.
    pub fov: f32,

    // Derived basis (set by update())
    front: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Camera {
    /// Create a camera at `position` looking along the given yaw and pitch.
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            yaw,
            pitch,
            fov: 60.0,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
        };
        camera.update();
        camera
    }

    /// Set the field of view in degrees.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    /// Clamp pitch and recompute the front/right/up basis.
    pub fn update(&mut self) {
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);

        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.to_radians().sin_cos();

        self.front = Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch).normalize();
        self.right = self.front.cross(WORLD_UP).normalize();
        self.up = self.right.cross(self.front);
    }

    /// Add yaw and pitch deltas (degrees), then update the basis.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch += delta_pitch;
        self.update();
    }

    /// Move by `direction * speed`.
    ///
    /// `direction` is used as given; pass `front()` or `right()` for the usual
    /// fly controls.
    pub fn translate(&mut self, direction: Vec3, speed: f32) {
        self.position += direction * speed;
    }

    /// Ray through the viewport point at pre-scaled offsets `(u, v)`.
    ///
    /// `u` runs along `right` and `v` along `up`; `(0, 0)` looks straight
    /// along `front`.
    #[inline]
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        let direction = (self.front + self.up * v + self.right * u).normalize();
        Ray::new(self.position, direction)
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_orthonormal(camera: &Camera) {
        let (f, r, u) = (camera.front(), camera.right(), camera.up());
        for v in [f, r, u] {
            assert!((v.length() - 1.0).abs() < EPS, "|{v}| != 1");
        }
        assert!(f.dot(r).abs() < EPS);
        assert!(f.dot(u).abs() < EPS);
        assert!(r.dot(u).abs() < EPS);
    }

    #[test]
    fn test_default_looks_down_x() {
        let camera = Camera::default();
        assert!((camera.front() - Vec3::X).length() < EPS);
        assert!((camera.right() - Vec3::Z).length() < EPS);
        assert!((camera.up() - Vec3::Y).length() < EPS);
        assert_eq!(camera.fov, 60.0);
    }

    #[test]
    fn test_yaw_minus_90_looks_down_negative_z() {
        let camera = Camera::new(Vec3::new(0.0, 2.0, 5.0), -90.0, 0.0);
        assert!((camera.front() - Vec3::NEG_Z).length() < EPS);
        assert!((camera.right() - Vec3::X).length() < EPS);
        assert!((camera.up() - Vec3::Y).length() < EPS);
    }

    #[test]
    fn test_center_ray_follows_front() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), 37.0, -21.0);
        let ray = camera.get_ray(0.0, 0.0);

        assert_eq!(ray.origin(), camera.position);
        assert!((ray.direction() - camera.front()).length() < EPS);
    }

    #[test]
    fn test_offsets_tilt_along_right_and_up() {
        let camera = Camera::new(Vec3::ZERO, -90.0, 0.0);

        let right = camera.get_ray(1.0, 0.0).direction();
        assert!((right - Vec3::new(1.0, 0.0, -1.0).normalize()).length() < EPS);

        let up = camera.get_ray(0.0, 1.0).direction();
        assert!((up - Vec3::new(0.0, 1.0, -1.0).normalize()).length() < EPS);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = Camera::default();
        for _ in 0..50 {
            camera.rotate(0.0, 45.0);
            assert!(camera.pitch() <= PITCH_LIMIT);
            assert_orthonormal(&camera);
        }
        assert_eq!(camera.pitch(), PITCH_LIMIT);

        for _ in 0..50 {
            camera.rotate(0.0, -45.0);
            assert!(camera.pitch() >= -PITCH_LIMIT);
        }
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn test_basis_stays_orthonormal() {
        let mut camera = Camera::new(Vec3::ZERO, -90.0, 0.0);
        let deltas = [
            (13.0, 7.5),
            (-200.0, 30.0),
            (0.4, 120.0),
            (721.0, -300.0),
            (-0.4, 0.4),
            (90.0, 88.0),
        ];

        for (dyaw, dpitch) in deltas {
            camera.rotate(dyaw, dpitch);
            assert_orthonormal(&camera);
        }
    }

    #[test]
    fn test_translate() {
        let mut camera = Camera::new(Vec3::new(0.0, 2.0, 5.0), -90.0, 0.0);
        camera.translate(camera.front(), 0.5);
        assert!((camera.position - Vec3::new(0.0, 2.0, 4.5)).length() < EPS);

        camera.translate(camera.right(), -1.0);
        assert!((camera.position - Vec3::new(-1.0, 2.0, 4.5)).length() < EPS);
    }
}
