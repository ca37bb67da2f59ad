pub mod animation;
pub mod camera;
pub mod constants;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod params;
pub mod scene;
pub mod snow;
pub mod tree;

pub use animation::*;
pub use camera::*;
pub use constants::*;
pub use error::*;
pub use frame::*;
pub use geometry::*;
pub use params::*;
pub use scene::*;
pub use snow::{out_of_bounds, spawn_position, SpawnRegion};
pub use tree::*;
