//! Minimal scene graph: a flat node arena with parent links.
//!
//! Nodes are created once while the scene is built and never removed, so a
//! [`NodeId`] stays valid for the whole session. Parents are always created
//! before their children, which lets [`Scene::world_matrices`] resolve every
//! node in a single forward pass. Ids can only be minted by a [`Scene`]; a
//! parent id the scene does not know is dropped and the node becomes a root.

use crate::geometry::MeshData;
use glam::{Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position in [`Scene::nodes`] and [`Scene::world_matrices`].
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshId(usize);

impl MeshId {
    /// Position in [`Scene::meshes`].
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    /// Rotation about +Y in radians.
    pub rotation_y: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation_y: 0.0,
        }
    }
}

impl Transform {
    pub fn at(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(Quat::from_rotation_y(self.rotation_y), self.translation)
    }
}

/// How a mesh node is shaded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Material {
    /// Height-faded translucent glow; double sided, no depth writes.
    Glow {
        rgb: [f32; 3],
        max_alpha: f32,
        fade_edges: [f32; 2],
    },
    /// Unlit flat color.
    Basic {
        rgba: [f32; 4],
        depth_write: bool,
    },
}

impl Material {
    pub fn writes_depth(&self) -> bool {
        match self {
            Material::Glow { .. } => false,
            Material::Basic { depth_write, .. } => *depth_write,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeKind {
    Group,
    Mesh { mesh: MeshId, material: Material },
}

#[derive(Clone, Debug)]
pub struct Node {
    pub parent: Option<NodeId>,
    pub transform: Transform,
    pub kind: NodeKind,
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    meshes: Vec<MeshData>,
    nodes: Vec<Node>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_mesh(&mut self, mesh: MeshData) -> MeshId {
        self.meshes.push(mesh);
        MeshId(self.meshes.len() - 1)
    }

    pub fn add_group(&mut self, parent: Option<NodeId>, transform: Transform) -> NodeId {
        self.push_node(parent, transform, NodeKind::Group)
    }

    pub fn add_mesh_node(
        &mut self,
        parent: Option<NodeId>,
        mesh: MeshId,
        material: Material,
        transform: Transform,
    ) -> NodeId {
        self.push_node(parent, transform, NodeKind::Mesh { mesh, material })
    }

    fn push_node(&mut self, parent: Option<NodeId>, transform: Transform, kind: NodeKind) -> NodeId {
        let parent = match parent {
            Some(p) if p.0 >= self.nodes.len() => {
                log::warn!("node parent {} is not in this scene; attaching to root", p.0);
                None
            }
            other => other,
        };
        self.nodes.push(Node {
            parent,
            transform,
            kind,
        });
        NodeId(self.nodes.len() - 1)
    }

    pub fn meshes(&self) -> &[MeshData] {
        &self.meshes
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn transform_mut(&mut self, id: NodeId) -> Option<&mut Transform> {
        self.nodes.get_mut(id.0).map(|n| &mut n.transform)
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, n)| n.parent == Some(id))
            .map(|(i, _)| NodeId(i))
    }

    /// World matrices for every node, indexed like [`Scene::nodes`].
    pub fn world_matrices(&self) -> Vec<Mat4> {
        let mut out: Vec<Mat4> = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let local = node.transform.matrix();
            let world = match node.parent {
                Some(p) => out[p.0] * local,
                None => local,
            };
            out.push(world);
        }
        out
    }

    pub fn world_matrix(&self, id: NodeId) -> Option<Mat4> {
        let mut node = self.node(id)?;
        let mut m = node.transform.matrix();
        while let Some(p) = node.parent {
            node = self.node(p)?;
            m = node.transform.matrix() * m;
        }
        Some(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_inherits_parent_rotation() {
        let mut scene = Scene::new();
        let group = scene.add_group(None, Transform::default());
        let mesh = scene.add_mesh(MeshData::default());
        let child = scene.add_mesh_node(
            Some(group),
            mesh,
            Material::Basic {
                rgba: [1.0; 4],
                depth_write: true,
            },
            Transform::at(Vec3::X),
        );
        if let Some(t) = scene.transform_mut(group) {
            t.rotation_y = std::f32::consts::FRAC_PI_2;
        }
        let world = scene.world_matrices()[child.0].transform_point3(Vec3::ZERO);
        // +X rotated a quarter turn about +Y lands on -Z
        assert!((world - Vec3::NEG_Z).length() < 1e-6);
        let direct = scene.world_matrix(child).map(|m| m.transform_point3(Vec3::ZERO));
        assert!(direct.is_some_and(|p| (p - world).length() < 1e-6));
        assert_eq!(scene.children(group).collect::<Vec<_>>(), vec![child]);
    }

    #[test]
    fn unknown_parent_becomes_root() {
        let mut big = Scene::new();
        let mut last = big.add_group(None, Transform::default());
        for _ in 0..4 {
            last = big.add_group(Some(last), Transform::default());
        }

        let mut small = Scene::new();
        let node = small.add_group(Some(last), Transform::at(Vec3::Y));
        assert_eq!(small.node(node).map(|n| n.parent), Some(None));
        let world = small.world_matrices();
        assert_eq!(world.len(), 1);
        assert_eq!(world[0].transform_point3(Vec3::ZERO), Vec3::Y);
    }
}
