//! Assemble the full scene: glowing cone and helix lights inside a rotating
//! group, the star on the root, snow scattered over both spawn bands.

use crate::animation::{AnimationState, LightMarker, Snowflake};
use crate::constants::hex_rgb;
use crate::error::ParamsError;
use crate::geometry::{cone_shell, helix_slots, star_shape, uv_sphere};
use crate::params::SceneParams;
use crate::scene::{Material, NodeId, Scene, Transform};
use crate::snow::spawn_position;
use glam::Vec3;
use rand::Rng;

pub struct TreeScene {
    pub scene: Scene,
    pub animation: AnimationState,
    pub star: NodeId,
}

#[inline]
fn opaque(hex: u32) -> [f32; 4] {
    let [r, g, b] = hex_rgb(hex);
    [r, g, b, 1.0]
}

pub fn build_scene<R: Rng + ?Sized>(
    params: &SceneParams,
    rng: &mut R,
) -> Result<TreeScene, ParamsError> {
    params.validate()?;
    let mut scene = Scene::new();

    let tree_group = scene.add_group(None, Transform::default());

    let tp = &params.tree;
    let cone_mesh = scene.add_mesh(cone_shell(tp));
    scene.add_mesh_node(
        Some(tree_group),
        cone_mesh,
        Material::Glow {
            rgb: tp.glow_rgb,
            max_alpha: tp.glow_max_alpha,
            fade_edges: tp.fade_edges,
        },
        Transform::default(),
    );

    let lp = &params.lights;
    let bulb = scene.add_mesh(uv_sphere(
        lp.sphere_radius,
        lp.sphere_segments,
        lp.sphere_segments,
    ));
    let lights: Vec<LightMarker> = helix_slots(lp, tp.height)
        .into_iter()
        .map(|slot| {
            let node = scene.add_mesh_node(
                Some(tree_group),
                bulb,
                Material::Basic {
                    rgba: opaque(slot.color),
                    depth_write: true,
                },
                Transform::at(slot.position),
            );
            LightMarker {
                node,
                t: slot.t,
                position: slot.position,
            }
        })
        .collect();

    let sp = &params.star;
    let star_mesh = scene.add_mesh(star_shape(sp));
    let star = scene.add_mesh_node(
        None,
        star_mesh,
        Material::Basic {
            rgba: opaque(sp.color),
            depth_write: false,
        },
        Transform::at(Vec3::new(0.0, sp.height, 0.0)),
    );

    let np = &params.snow;
    let flake_mesh = scene.add_mesh(uv_sphere(
        np.sphere_radius,
        np.sphere_segments,
        np.sphere_segments,
    ));
    let [r, g, b] = hex_rgb(np.color);
    let flake_material = Material::Basic {
        rgba: [r, g, b, np.opacity],
        depth_write: false,
    };
    let snowflakes: Vec<Snowflake> = (0..np.count)
        .map(|_| {
            let position = spawn_position(np, rng);
            let node =
                scene.add_mesh_node(None, flake_mesh, flake_material, Transform::at(position));
            Snowflake { node, position }
        })
        .collect();

    log::debug!(
        "scene built: lights={} snowflakes={} nodes={}",
        lights.len(),
        snowflakes.len(),
        scene.nodes().len()
    );

    Ok(TreeScene {
        scene,
        animation: AnimationState::new(tree_group, lights, snowflakes),
        star,
    })
}
