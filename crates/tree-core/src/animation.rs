//! Per-frame animation state and its pure update step.

use crate::geometry::helix_point;
use crate::params::SceneParams;
use crate::scene::{NodeId, Scene};
use crate::snow;
use glam::Vec3;
use rand::Rng;
use std::f64::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct LightMarker {
    pub node: NodeId,
    /// Normalized helix parameter, fixed at creation.
    pub t: f32,
    pub position: Vec3,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Snowflake {
    pub node: NodeId,
    pub position: Vec3,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    pub phase: f64,
    pub tree_group: NodeId,
    /// Group rotation about +Y, kept within `[0, 2π)`.
    pub tree_rotation: f64,
    pub lights: Vec<LightMarker>,
    pub snowflakes: Vec<Snowflake>,
}

impl AnimationState {
    pub fn new(tree_group: NodeId, lights: Vec<LightMarker>, snowflakes: Vec<Snowflake>) -> Self {
        Self {
            phase: 0.0,
            tree_group,
            tree_rotation: 0.0,
            lights,
            snowflakes,
        }
    }

    /// Write current positions and the group rotation into the scene graph.
    pub fn sync_scene(&self, scene: &mut Scene) {
        if let Some(t) = scene.transform_mut(self.tree_group) {
            t.rotation_y = self.tree_rotation as f32;
        }
        for light in &self.lights {
            if let Some(t) = scene.transform_mut(light.node) {
                t.translation = light.position;
            }
        }
        for flake in &self.snowflakes {
            if let Some(t) = scene.transform_mut(flake.node) {
                t.translation = flake.position;
            }
        }
    }
}

/// Result of one [`step`], with the number of snowflakes that respawned.
#[derive(Clone, Debug)]
pub struct StepOutcome {
    pub state: AnimationState,
    pub resets: usize,
}

/// Advance the animation one frame.
///
/// Order: phase, light orbit, tree rotation, snow drift and reset. The only
/// randomness is the snowflake respawn, drawn from `rng`.
pub fn step<R: Rng + ?Sized>(
    mut state: AnimationState,
    params: &SceneParams,
    rng: &mut R,
) -> StepOutcome {
    state.phase += params.motion.phase_step;

    let lp = &params.lights;
    for light in &mut state.lights {
        light.position = helix_point(
            light.t,
            lp.windings,
            lp.max_radius,
            state.phase,
            light.position.y,
        );
    }

    state.tree_rotation = (state.tree_rotation + params.motion.rotation_step).rem_euclid(TAU);

    let mut resets = 0;
    for flake in &mut state.snowflakes {
        if snow::advance(&params.snow, &mut flake.position, rng) {
            resets += 1;
        }
    }
    StepOutcome { state, resets }
}
