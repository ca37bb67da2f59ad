use crate::params::SnowParams;
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnRegion {
    /// Band above the view.
    Top,
    /// Band right of the view.
    Right,
}

impl SpawnRegion {
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            SpawnRegion::Top
        } else {
            SpawnRegion::Right
        }
    }

    pub fn contains(&self, params: &SnowParams, p: Vec3) -> bool {
        let in_xy = match self {
            SpawnRegion::Top => params.top_x.contains(p.x) && params.top_y.contains(p.y),
            SpawnRegion::Right => params.right_x.contains(p.x) && params.right_y.contains(p.y),
        };
        in_xy && params.z.contains(p.z)
    }

    /// Uniform point inside this band.
    pub fn sample<R: Rng + ?Sized>(&self, params: &SnowParams, rng: &mut R) -> Vec3 {
        let (x, y) = match self {
            SpawnRegion::Top => (params.top_x.sample(rng), params.top_y.sample(rng)),
            SpawnRegion::Right => (params.right_x.sample(rng), params.right_y.sample(rng)),
        };
        Vec3::new(x, y, params.z.sample(rng))
    }
}

/// Fresh spawn position. Independent of wherever the flake was before.
pub fn spawn_position<R: Rng + ?Sized>(params: &SnowParams, rng: &mut R) -> Vec3 {
    SpawnRegion::pick(rng).sample(params, rng)
}

/// True when the flake left the view past the floor or the left edge.
///
/// Only these two bounds are checked: the drift is expected to point down
/// and left. A drift with a positive component would carry flakes out of the
/// top or right side without ever resetting them.
#[inline]
pub fn out_of_bounds(params: &SnowParams, p: Vec3) -> bool {
    p.y < params.floor_y || p.x < params.left_x
}

/// Advance one flake by the drift and respawn it if it crossed a bound.
/// Returns whether a reset happened.
pub fn advance<R: Rng + ?Sized>(params: &SnowParams, position: &mut Vec3, rng: &mut R) -> bool {
    position.x += params.drift.x;
    position.y += params.drift.y;
    if out_of_bounds(params, *position) {
        *position = spawn_position(params, rng);
        true
    } else {
        false
    }
}
