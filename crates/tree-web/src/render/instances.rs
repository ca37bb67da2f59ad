// Per-frame instance packing: scene graph nodes grouped into draw batches.
//
// Kept free of wgpu and web types so host tests can include it directly.

use bytemuck::{Pod, Zeroable};
use tree_core::{Material, MeshId, NodeKind, Scene};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    /// Glow only: x, y are the smoothstep edges over local height.
    pub fade: [f32; 4],
}

/// Pipeline a batch is drawn with. Declaration order is draw order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PassKind {
    /// Depth-writing flat color.
    Opaque,
    /// Height-faded glow, double sided, no depth writes.
    Glow,
    /// Alpha-blended flat color without depth writes.
    Overlay,
}

impl PassKind {
    pub fn of(material: &Material) -> Self {
        match material {
            Material::Glow { .. } => PassKind::Glow,
            Material::Basic { .. } if material.writes_depth() => PassKind::Opaque,
            Material::Basic { .. } => PassKind::Overlay,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Batch {
    pub mesh: MeshId,
    pub kind: PassKind,
    pub first_instance: u32,
    pub instance_count: u32,
}

#[derive(Clone, Debug, Default)]
pub struct InstanceFrame {
    pub instances: Vec<InstanceRaw>,
    pub batches: Vec<Batch>,
}

fn instance_for(model: glam::Mat4, material: &Material) -> InstanceRaw {
    match *material {
        Material::Glow {
            rgb,
            max_alpha,
            fade_edges,
        } => InstanceRaw {
            model: model.to_cols_array_2d(),
            color: [rgb[0], rgb[1], rgb[2], max_alpha],
            fade: [fade_edges[0], fade_edges[1], 0.0, 0.0],
        },
        Material::Basic { rgba, .. } => InstanceRaw {
            model: model.to_cols_array_2d(),
            color: rgba,
            fade: [0.0; 4],
        },
    }
}

/// Rebuild `out` from the scene. Batches are keyed by mesh and pass, ordered
/// by pass first and by first appearance in the scene second.
pub fn pack_instances(scene: &Scene, out: &mut InstanceFrame) {
    out.batches.clear();
    out.instances.clear();

    for node in scene.nodes() {
        if let NodeKind::Mesh { mesh, material } = &node.kind {
            let kind = PassKind::of(material);
            match out
                .batches
                .iter_mut()
                .find(|b| b.mesh == *mesh && b.kind == kind)
            {
                Some(b) => b.instance_count += 1,
                None => out.batches.push(Batch {
                    mesh: *mesh,
                    kind,
                    first_instance: 0,
                    instance_count: 1,
                }),
            }
        }
    }
    out.batches.sort_by_key(|b| b.kind);

    let mut next = 0u32;
    for b in &mut out.batches {
        b.first_instance = next;
        next += b.instance_count;
    }

    let world = scene.world_matrices();
    let mut cursor: Vec<u32> = out.batches.iter().map(|b| b.first_instance).collect();
    out.instances.resize(next as usize, InstanceRaw::zeroed());
    for (node, model) in scene.nodes().iter().zip(world) {
        if let NodeKind::Mesh { mesh, material } = &node.kind {
            let kind = PassKind::of(material);
            if let Some(i) = out
                .batches
                .iter()
                .position(|b| b.mesh == *mesh && b.kind == kind)
            {
                out.instances[cursor[i] as usize] = instance_for(model, material);
                cursor[i] += 1;
            }
        }
    }
}
