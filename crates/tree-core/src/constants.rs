// Scene tuning constants shared by the core and the web frontend.

// Tree cone
pub const TREE_RADIUS: f32 = 4.0;
pub const TREE_HEIGHT: f32 = 8.0;
pub const TREE_RADIAL_SEGMENTS: u32 = 64;
pub const TREE_HEIGHT_SEGMENTS: u32 = 20;
pub const TREE_GLOW_RGB: [f32; 3] = [0.04, 0.45, 0.25];
pub const TREE_GLOW_MAX_ALPHA: f32 = 0.4;
// smoothstep(edge0, edge1, y) drives the cone alpha
pub const TREE_FADE_EDGES: [f32; 2] = [-4.0, 3.5];

// Helix lights
pub const LIGHT_COUNT: usize = 260;
pub const LIGHT_WINDINGS: f32 = 16.0;
pub const LIGHT_MAX_RADIUS: f32 = 4.0;
pub const LIGHT_SPHERE_RADIUS: f32 = 0.08;
pub const LIGHT_SPHERE_SEGMENTS: u32 = 10;
pub const LIGHT_SKIP_CYCLE: usize = 5; // index i is kept when i % cycle < keep
pub const LIGHT_SKIP_KEEP: usize = 3;
pub const LIGHT_PALETTE: [u32; 3] = [0xff3333, 0x3399ff, 0xffcc33]; // red, blue, amber

// Star
pub const STAR_POINTS: u32 = 5;
pub const STAR_OUTER_RADIUS: f32 = 0.7;
pub const STAR_INNER_RADIUS: f32 = 0.3;
pub const STAR_HEIGHT: f32 = 4.6;
pub const STAR_COLOR: u32 = 0xffee66;

// Snow
pub const SNOW_COUNT: usize = 400;
pub const SNOW_SPHERE_RADIUS: f32 = 0.04;
pub const SNOW_SPHERE_SEGMENTS: u32 = 6;
pub const SNOW_COLOR: u32 = 0xffffff;
pub const SNOW_OPACITY: f32 = 0.6;
pub const SNOW_DRIFT: [f32; 2] = [-0.03, -0.045]; // down-left
pub const SNOW_FLOOR_Y: f32 = -12.0;
pub const SNOW_LEFT_X: f32 = -18.0;

// Spawn bands as half-open [min, max) ranges
pub const SNOW_TOP_X: [f32; 2] = [-10.0, 20.0];
pub const SNOW_TOP_Y: [f32; 2] = [10.0, 15.0];
pub const SNOW_RIGHT_X: [f32; 2] = [15.0, 20.0];
pub const SNOW_RIGHT_Y: [f32; 2] = [-10.0, 10.0];
pub const SNOW_Z: [f32; 2] = [-10.0, 10.0];

// Per-frame motion
pub const PHASE_STEP: f64 = 0.02; // radians per frame
pub const TREE_ROTATION_STEP: f64 = 0.002; // radians per frame

// Camera
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 15.0;

// Seed used by tests and deterministic runs
pub const DEFAULT_SEED: u64 = 42;

/// Convert a packed `0xRRGGBB` color into linear-ish RGB floats in [0, 1].
#[inline]
pub fn hex_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}
