//! The demo room: five walls and a sphere, plus the starting camera.

use rayroom_renderer::{Camera, Color, Material, Scene, SceneResult, Vec3};

/// Camera start: inside the open front of the room, looking down -Z.
pub fn start_camera() -> Camera {
    Camera::new(Vec3::new(0.0, 2.0, 5.0), -90.0, 0.0)
}

/// Build the room.
///
/// A 6 x 4 x 5 box open toward +Z: slightly reflective blue floor, white
/// ceiling and back wall, red wall on the left, green on the right, and a
/// white sphere floating in the middle.
pub fn build() -> SceneResult<Scene> {
    let white = Color::ONE;
    let walls = 0.08;

    let mut scene = Scene::new();
    scene
        // Floor
        .add_rect(
            Vec3::ZERO,
            Vec3::Y,
            Vec3::X,
            Vec3::Z,
            6.0,
            5.0,
            Material::new(Color::new(0.2, 0.2, 1.0), 0.3, 0.5)?,
        )?
        // Ceiling
        .add_rect(
            Vec3::new(0.0, 4.0, 0.0),
            Vec3::NEG_Y,
            Vec3::X,
            Vec3::Z,
            6.0,
            5.0,
            Material::new(white, walls, 0.0)?,
        )?
        // Left wall
        .add_rect(
            Vec3::new(-3.0, 2.0, 0.0),
            Vec3::X,
            Vec3::Z,
            Vec3::Y,
            5.0,
            4.0,
            Material::new(Color::new(1.0, 0.2, 0.2), walls, 0.0)?,
        )?
        // Right wall
        .add_rect(
            Vec3::new(3.0, 2.0, 0.0),
            Vec3::NEG_X,
            Vec3::Z,
            Vec3::Y,
            5.0,
            4.0,
            Material::new(Color::new(0.2, 1.0, 0.2), walls, 0.0)?,
        )?
        // Back wall
        .add_rect(
            Vec3::new(0.0, 2.0, -2.5),
            Vec3::Z,
            Vec3::X,
            Vec3::Y,
            6.0,
            4.0,
            Material::new(white, walls, 0.0)?,
        )?
        .add_sphere(
            Vec3::new(0.0, 2.0, 0.0),
            1.0,
            Material::new(white, walls, 0.0)?,
        )?;

    log::info!(
        "Built room: {} spheres, {} rects",
        scene.spheres().len(),
        scene.rects().len()
    );
    Ok(scene)
}
