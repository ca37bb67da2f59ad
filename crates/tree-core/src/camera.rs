//! Camera description and the resize responder.
//!
//! These types avoid referencing platform-specific APIs; the web frontend
//! feeds canvas sizes in and consumes the matrices.

use crate::params::CameraParams;
use glam::{Mat4, Vec3};

/// Pixel size of the drawable surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height. Height is clamped to one pixel so a collapsed
    /// viewport yields a finite aspect.
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Size safe to hand to a swapchain, never zero in either axis.
    #[inline]
    pub fn clamped(&self) -> Self {
        Self::new(self.width.max(1), self.height.max(1))
    }
}

/// Right-handed perspective camera with a cached projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    projection: Mat4,
}

impl Camera {
    pub fn new(params: &CameraParams, viewport: Viewport) -> Self {
        let mut cam = Self {
            eye: Vec3::new(0.0, 0.0, params.distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: viewport.aspect(),
            fovy_radians: params.fovy_radians,
            znear: params.znear,
            zfar: params.zfar,
            projection: Mat4::IDENTITY,
        };
        cam.update_projection();
        cam
    }

    /// Recompute the cached projection from the current fields.
    pub fn update_projection(&mut self) {
        self.projection = Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }
}

/// Something drawable whose backing size follows the viewport.
pub trait RenderSurface {
    fn resize_surface(&mut self, viewport: Viewport);
}

/// Apply a viewport change: aspect, projection, then the surface size.
///
/// Always recomputes, so repeated calls with the same size are harmless.
pub fn apply_resize<S: RenderSurface + ?Sized>(
    camera: &mut Camera,
    surface: &mut S,
    viewport: Viewport,
) {
    camera.aspect = viewport.aspect();
    camera.update_projection();
    surface.resize_surface(viewport.clamped());
    log::debug!(
        "resize {}x{} aspect={:.3}",
        viewport.width,
        viewport.height,
        camera.aspect
    );
}
