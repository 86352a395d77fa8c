//! Whitted-style frame renderer.
//!
//! Implements:
//! - Recursive mirror reflection with a fixed bounce budget
//! - Per-frame viewport offsets, cached until the frame size changes
//! - Row-parallel rendering into a packed `0xRRGGBB` pixel buffer

use std::time::Instant;

use crate::{
    error::{RenderError, RenderResult},
    Camera, Color, Ray, Scene,
};
use rayon::prelude::*;
use rayroom_math::{reflect, Interval};

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Bounce budget handed to [`ray_color`] for each camera ray
    pub max_bounces: u32,
    /// Height of the viewport in camera space; width follows the aspect ratio
    pub viewport_height: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_bounces: 3,
            viewport_height: 2.0,
        }
    }
}

/// Compute the color seen by a ray.
///
/// Misses are black. A hit is shaded locally, and when more than one bounce
/// remains and the surface is reflective, blended with the color of the
/// mirror-reflected ray. With `bounces == 1` the result is local shading only.
pub fn ray_color(ray: &Ray, scene: &Scene, bounces: u32) -> Color {
    let rec = scene.trace(ray);
    if !rec.hit {
        return Color::ZERO;
    }

    let view_dir = -ray.direction();
    let local = scene
        .light()
        .shade(rec.p, rec.normal, view_dir, &rec.material);

    if bounces <= 1 || !rec.material.is_reflective() {
        return local;
    }

    // Degenerate reflection: keep the local color
    let Some(reflected_ray) = Ray::towards(rec.p, reflect(ray.direction(), rec.normal)) else {
        return local;
    };
    let reflected = ray_color(&reflected_ray, scene, bounces - 1);

    let refl = rec.material.reflectivity;
    local * (1.0 - refl) + reflected * refl
}

/// Quantize a color to a packed `0xRRGGBB` value.
///
/// Each channel is clamped to [0, 1], scaled by 255 and truncated, so only an
/// exact 1.0 maps to 255. NaN channels become 0.
#[inline]
pub fn color_to_u32(color: Color) -> u32 {
    let channel = |c: f32| (Interval::UNIT.clamp(c) * 255.0) as u32;
    (channel(color.x) << 16) | (channel(color.y) << 8) | channel(color.z)
}

/// Unpack a `0xRRGGBB` value into `[r, g, b]` bytes.
#[inline]
pub fn u32_to_rgb(pixel: u32) -> [u8; 3] {
    [(pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8]
}

/// Per-column and per-row viewport offsets for one frame size.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportOffsets {
    width: u32,
    height: u32,
    viewport_height: f32,
    /// Horizontal offset for each column, left to right
    u: Vec<f32>,
    /// Vertical offset for each row, row 0 at the top
    v: Vec<f32>,
}

impl ViewportOffsets {
    /// Compute offsets for a `width x height` frame.
    pub fn new(width: u32, height: u32, viewport_height: f32) -> Self {
        let viewport_width = width as f32 / height as f32 * viewport_height;

        let u = (0..width)
            .map(|x| (fraction(x, width) - 0.5) * viewport_width)
            .collect();
        let v = (0..height)
            .map(|y| (fraction(height - 1 - y, height) - 0.5) * viewport_height)
            .collect();

        Self {
            width,
            height,
            viewport_height,
            u,
            v,
        }
    }

    /// True if these offsets were computed for the given size and viewport.
    pub fn matches(&self, width: u32, height: u32, viewport_height: f32) -> bool {
        self.width == width && self.height == height && self.viewport_height == viewport_height
    }

    pub fn u(&self) -> &[f32] {
        &self.u
    }

    pub fn v(&self) -> &[f32] {
        &self.v
    }
}

/// Position of `i` across `n` samples, from 0.0 to 1.0 inclusive.
///
/// A single sample sits at the middle.
#[inline]
fn fraction(i: u32, n: u32) -> f32 {
    if n > 1 {
        i as f32 / (n - 1) as f32
    } else {
        0.5
    }
}

/// Caller-owned output: one packed `0xRRGGBB` per pixel, row-major, row 0 on top.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u32>,
}

impl FrameBuffer {
    /// Create a new frame buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Resize to `width x height`, keeping the allocation when possible.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.resize(width as usize * height as usize, 0);
    }

    /// Convert to tightly packed RGB bytes (for saving).
    pub fn to_rgb(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|&p| u32_to_rgb(p)).collect()
    }
}

/// Check a render request before touching any pixel.
fn validate(width: u32, height: u32, buffer: &[u32]) -> RenderResult<()> {
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyFrame { width, height });
    }
    let expected = width as usize * height as usize;
    if buffer.len() != expected {
        return Err(RenderError::BufferSize {
            expected,
            actual: buffer.len(),
        });
    }
    Ok(())
}

/// Render one row of pixels.
#[inline]
fn render_row(
    row: &mut [u32],
    v: f32,
    offsets: &ViewportOffsets,
    scene: &Scene,
    camera: &Camera,
    max_bounces: u32,
) {
    for (pixel, &u) in row.iter_mut().zip(&offsets.u) {
        let ray = camera.get_ray(u, v);
        *pixel = color_to_u32(ray_color(&ray, scene, max_bounces));
    }
}

/// Render a frame, fanning rows out over the rayon thread pool.
///
/// `buffer` must hold exactly `width * height` entries, where the frame size
/// is the one `offsets` was built for. Each worker writes only its own rows.
pub fn render_frame(
    scene: &Scene,
    camera: &Camera,
    offsets: &ViewportOffsets,
    max_bounces: u32,
    buffer: &mut [u32],
) -> RenderResult<()> {
    validate(offsets.width, offsets.height, buffer)?;

    buffer
        .par_chunks_mut(offsets.width as usize)
        .zip(offsets.v.par_iter())
        .for_each(|(row, &v)| render_row(row, v, offsets, scene, camera, max_bounces));

    Ok(())
}

/// Single-threaded equivalent of [`render_frame`].
pub fn render_frame_serial(
    scene: &Scene,
    camera: &Camera,
    offsets: &ViewportOffsets,
    max_bounces: u32,
    buffer: &mut [u32],
) -> RenderResult<()> {
    validate(offsets.width, offsets.height, buffer)?;

    for (row, &v) in buffer.chunks_mut(offsets.width as usize).zip(&offsets.v) {
        render_row(row, v, offsets, scene, camera, max_bounces);
    }

    Ok(())
}

/// Frame renderer that keeps viewport offsets between frames.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
    offsets: Option<ViewportOffsets>,
}

impl Renderer {
    /// Create a renderer with the given configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            offsets: None,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Offsets for a frame size, rebuilt only when the size changes.
    pub fn offsets(&mut self, width: u32, height: u32) -> &ViewportOffsets {
        let viewport_height = self.config.viewport_height;
        let offsets = match self.offsets.take() {
            Some(offsets) if offsets.matches(width, height, viewport_height) => offsets,
            _ => {
                log::debug!("Rebuilding viewport offsets for {}x{}", width, height);
                ViewportOffsets::new(width, height, viewport_height)
            }
        };
        self.offsets.insert(offsets)
    }

    /// Render `scene` as seen by `camera` into `frame`.
    pub fn render(
        &mut self,
        scene: &Scene,
        camera: &Camera,
        frame: &mut FrameBuffer,
    ) -> RenderResult<()> {
        let start = Instant::now();
        let max_bounces = self.config.max_bounces;
        let offsets = self.offsets(frame.width, frame.height);

        render_frame(scene, camera, offsets, max_bounces, &mut frame.pixels)?;

        log::trace!("Rendered frame {}x{} in {:?}", frame.width, frame.height, start.elapsed());
        Ok(())
    }
}
