//! rayroom renderer - real-time CPU ray tracing
//!
//! A Whitted-style ray tracer for small static scenes: spheres and finite
//! rectangles lit by one point light, with recursive mirror reflection and a
//! first-person camera. Frames are rendered row-parallel into a packed
//! `0xRRGGBB` buffer owned by the caller.
//!
//! Windowing, input and presentation are left to the host.

mod camera;
mod error;
mod hittable;
mod material;
mod rect;
mod renderer;
mod scene;
mod shading;
mod sphere;

pub use camera::{Camera, PITCH_LIMIT};
pub use error::{RenderError, RenderResult, SceneError, SceneResult};
pub use hittable::{HitRecord, Hittable, T_MIN};
pub use material::{Color, Material};
pub use rect::Rect;
pub use renderer::{
    color_to_u32, ray_color, render_frame, render_frame_serial, u32_to_rgb, FrameBuffer,
    RenderConfig, Renderer, ViewportOffsets,
};
pub use scene::Scene;
pub use shading::PointLight;
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from rayroom_math
pub use rayroom_math::{Interval, Ray, Vec3};
