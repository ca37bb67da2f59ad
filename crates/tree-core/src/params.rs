//! Scene parameters grouped by concern.
//!
//! Every tunable of the effect is fixed once at construction time. The
//! `Default` impls reproduce the stock look; [`SceneParams::validate`] rejects
//! combinations that would make geometry or sampling degenerate.

use crate::constants::*;
use crate::error::ParamsError;
use glam::Vec2;
use rand::Rng;

/// Half-open interval `[min, max)` used for spawn sampling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    const fn from_pair(pair: [f32; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v < self.max
    }

    /// Draw uniformly from the span. Callers must have validated `min < max`.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.gen_range(self.min..self.max)
    }

    fn check(&self, name: &'static str) -> Result<(), ParamsError> {
        check_finite(name, self.min)?;
        check_finite(name, self.max)?;
        if self.min < self.max {
            Ok(())
        } else {
            Err(ParamsError::EmptyRange {
                name,
                min: self.min,
                max: self.max,
            })
        }
    }
}

#[derive(Clone, Debug)]
pub struct TreeParams {
    pub radius: f32,
    pub height: f32,
    pub radial_segments: u32,
    pub height_segments: u32,
    pub glow_rgb: [f32; 3],
    pub glow_max_alpha: f32,
    pub fade_edges: [f32; 2],
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            radius: TREE_RADIUS,
            height: TREE_HEIGHT,
            radial_segments: TREE_RADIAL_SEGMENTS,
            height_segments: TREE_HEIGHT_SEGMENTS,
            glow_rgb: TREE_GLOW_RGB,
            glow_max_alpha: TREE_GLOW_MAX_ALPHA,
            fade_edges: TREE_FADE_EDGES,
        }
    }
}

#[derive(Clone, Debug)]
pub struct LightParams {
    pub count: usize,
    pub windings: f32,
    pub max_radius: f32,
    pub sphere_radius: f32,
    pub sphere_segments: u32,
    pub skip_cycle: usize,
    pub skip_keep: usize,
    pub palette: Vec<u32>,
}

impl LightParams {
    /// Sparse filter: markers are kept when `index % cycle < keep`.
    #[inline]
    pub fn keeps(&self, index: usize) -> bool {
        index % self.skip_cycle < self.skip_keep
    }

    /// Palette entry for the marker at `index` in the unfiltered sequence.
    #[inline]
    pub fn color_for(&self, index: usize) -> u32 {
        self.palette[index % self.palette.len()]
    }
}

impl Default for LightParams {
    fn default() -> Self {
        Self {
            count: LIGHT_COUNT,
            windings: LIGHT_WINDINGS,
            max_radius: LIGHT_MAX_RADIUS,
            sphere_radius: LIGHT_SPHERE_RADIUS,
            sphere_segments: LIGHT_SPHERE_SEGMENTS,
            skip_cycle: LIGHT_SKIP_CYCLE,
            skip_keep: LIGHT_SKIP_KEEP,
            palette: LIGHT_PALETTE.to_vec(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct StarParams {
    pub points: u32,
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub height: f32,
    pub color: u32,
}

impl Default for StarParams {
    fn default() -> Self {
        Self {
            points: STAR_POINTS,
            outer_radius: STAR_OUTER_RADIUS,
            inner_radius: STAR_INNER_RADIUS,
            height: STAR_HEIGHT,
            color: STAR_COLOR,
        }
    }
}

/// Snow drift, reset bounds and the two spawn bands.
#[derive(Clone, Debug)]
pub struct SnowParams {
    pub count: usize,
    pub sphere_radius: f32,
    pub sphere_segments: u32,
    pub color: u32,
    pub opacity: f32,
    pub drift: Vec2,
    pub floor_y: f32,
    pub left_x: f32,
    pub top_x: Span,
    pub top_y: Span,
    pub right_x: Span,
    pub right_y: Span,
    pub z: Span,
}

impl Default for SnowParams {
    fn default() -> Self {
        Self {
            count: SNOW_COUNT,
            sphere_radius: SNOW_SPHERE_RADIUS,
            sphere_segments: SNOW_SPHERE_SEGMENTS,
            color: SNOW_COLOR,
            opacity: SNOW_OPACITY,
            drift: Vec2::new(SNOW_DRIFT[0], SNOW_DRIFT[1]),
            floor_y: SNOW_FLOOR_Y,
            left_x: SNOW_LEFT_X,
            top_x: Span::from_pair(SNOW_TOP_X),
            top_y: Span::from_pair(SNOW_TOP_Y),
            right_x: Span::from_pair(SNOW_RIGHT_X),
            right_y: Span::from_pair(SNOW_RIGHT_Y),
            z: Span::from_pair(SNOW_Z),
        }
    }
}

#[derive(Clone, Debug)]
pub struct MotionParams {
    pub phase_step: f64,
    pub rotation_step: f64,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            phase_step: PHASE_STEP,
            rotation_step: TREE_ROTATION_STEP,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CameraParams {
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    pub distance: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
            distance: CAMERA_Z,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SceneParams {
    pub tree: TreeParams,
    pub lights: LightParams,
    pub star: StarParams,
    pub snow: SnowParams,
    pub motion: MotionParams,
    pub camera: CameraParams,
}

impl SceneParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        let t = &self.tree;
        check_positive("tree.radius", t.radius)?;
        check_positive("tree.height", t.height)?;
        check_segments("tree.radial_segments", 3, t.radial_segments)?;
        check_segments("tree.height_segments", 1, t.height_segments)?;

        let l = &self.lights;
        if l.palette.is_empty() {
            return Err(ParamsError::EmptyPalette);
        }
        if l.skip_cycle == 0 {
            return Err(ParamsError::ZeroSkipCycle);
        }
        if l.skip_keep > l.skip_cycle {
            return Err(ParamsError::KeepExceedsCycle {
                keep: l.skip_keep,
                cycle: l.skip_cycle,
            });
        }
        check_finite("lights.windings", l.windings)?;
        check_positive("lights.max_radius", l.max_radius)?;
        check_positive("lights.sphere_radius", l.sphere_radius)?;
        check_segments("lights.sphere_segments", 3, l.sphere_segments)?;

        let s = &self.star;
        check_segments("star.points", 2, s.points)?;
        check_positive("star.outer_radius", s.outer_radius)?;
        check_positive("star.inner_radius", s.inner_radius)?;
        check_finite("star.height", s.height)?;

        let n = &self.snow;
        check_positive("snow.sphere_radius", n.sphere_radius)?;
        check_segments("snow.sphere_segments", 3, n.sphere_segments)?;
        check_finite("snow.opacity", n.opacity)?;
        check_finite("snow.drift.x", n.drift.x)?;
        check_finite("snow.drift.y", n.drift.y)?;
        check_finite("snow.floor_y", n.floor_y)?;
        check_finite("snow.left_x", n.left_x)?;
        n.top_x.check("snow.top_x")?;
        n.top_y.check("snow.top_y")?;
        n.right_x.check("snow.right_x")?;
        n.right_y.check("snow.right_y")?;
        n.z.check("snow.z")?;

        if !self.motion.phase_step.is_finite() {
            return Err(ParamsError::NonFinite {
                name: "motion.phase_step",
            });
        }
        if !self.motion.rotation_step.is_finite() {
            return Err(ParamsError::NonFinite {
                name: "motion.rotation_step",
            });
        }

        let c = &self.camera;
        check_positive("camera.fovy_radians", c.fovy_radians)?;
        check_positive("camera.znear", c.znear)?;
        check_positive("camera.zfar", c.zfar)?;
        check_finite("camera.distance", c.distance)?;
        Ok(())
    }
}

fn check_finite(name: &'static str, value: f32) -> Result<(), ParamsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParamsError::NonFinite { name })
    }
}

fn check_positive(name: &'static str, value: f32) -> Result<(), ParamsError> {
    check_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ParamsError::NonPositive { name, value })
    }
}

fn check_segments(name: &'static str, min: u32, got: u32) -> Result<(), ParamsError> {
    if got >= min {
        Ok(())
    } else {
        Err(ParamsError::TooFewSegments { name, min, got })
    }
}
