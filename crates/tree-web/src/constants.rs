// Web frontend rendering constants.

// DOM id of the canvas the host page provides
pub const CANVAS_ID: &str = "app-canvas";

// Night backdrop behind the tree
pub const CLEAR_RGB: [f64; 3] = [0.02, 0.03, 0.06];

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

// Instance buffer slots reserved up front; the scene never grows past this
pub const MAX_INSTANCES: usize = 4096;
