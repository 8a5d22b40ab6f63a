//! Scene graph nodes.
//!
//! A [`SceneNode`] owns its local pose, its kinematic state and its children.
//! Each frame the driver calls [`SceneNode::update`] on the root, then walks
//! the tree with [`SceneNode::compose_transform`] to obtain world placements.

use hypyr_math::{Mat3, Rot, Vec3};
use tracing::debug;

use crate::capability::Capability;
use crate::error::SceneResult;
use crate::light::{LightId, LightRegistry};
use crate::material::Material;
use crate::transform::Transform;

/// Receives nodes in depth-first pre-order during transform composition.
pub trait SceneVisitor {
    /// Called with the node's composed world transform before its children.
    fn enter(&mut self, node: &SceneNode, world: &Transform, depth: usize);

    /// Called after every child of `node` has been visited.
    fn leave(&mut self, _node: &SceneNode, _depth: usize) {}
}

#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    /// Position in the parent frame
    pub position: Vec3,
    /// Orientation relative to the parent frame
    pub rotation: Mat3,
    /// Rate of change of `position`
    pub linear_velocity: Vec3,
    /// Rotation axis scaled by angular rate in rad/s
    pub angular_velocity: Vec3,
    pub material: Material,
    capabilities: Vec<Capability>,
    children: Vec<SceneNode>,
}

impl Default for SceneNode {
    fn default() -> Self {
        Self {
            name: "node".to_string(),
            position: Vec3::ZERO,
            rotation: Mat3::IDENTITY,
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            material: Material::default(),
            capabilities: vec![Capability::Frame],
            children: Vec::new(),
        }
    }
}

impl SceneNode {
    /// Plain frame node at the origin with identity rotation.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn sprite(size: f64) -> Self {
        Self::named("sprite").with_capabilities(vec![Capability::Sprite { size }])
    }

    pub fn sphere(radius: f64, slices: u32) -> Self {
        Self::named("sphere").with_capabilities(vec![Capability::Sphere { radius, slices }])
    }

    /// Light node occupying the next slot in `registry`.
    pub fn light(registry: &mut LightRegistry) -> SceneResult<Self> {
        let id = registry.allocate()?;
        Ok(Self::named(format!("light{}", id.0))
            .with_capabilities(vec![Capability::Light { id }]))
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Mat3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_linear_velocity(mut self, velocity: Vec3) -> Self {
        self.linear_velocity = velocity;
        self
    }

    pub fn with_angular_velocity(mut self, velocity: Vec3) -> Self {
        self.angular_velocity = velocity;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_capabilities(mut self, capabilities: Vec<Capability>) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    pub fn light_id(&self) -> Option<LightId> {
        self.capabilities.iter().find_map(|c| match c {
            Capability::Light { id } => Some(*id),
            _ => None,
        })
    }

    /// Appends a child and returns it for further setup.
    pub fn add_child(&mut self, child: SceneNode) -> &mut SceneNode {
        debug!(parent = %self.name, child = %child.name, "attach node");
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [SceneNode] {
        &mut self.children
    }

    /// This node plus all descendants.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SceneNode::node_count).sum::<usize>()
    }

    /// Advances this subtree by `dt_s` seconds.
    ///
    /// Position integrates linearly. A non-zero angular velocity becomes an
    /// incremental rotation that is left-multiplied onto the current one
    /// (`rotation = delta * rotation`). No re-orthonormalization is done, so
    /// long runs accumulate drift.
    pub fn update(&mut self, dt_s: f64) {
        self.position = self.position + dt_s * self.linear_velocity;

        let angle_rad = self.angular_velocity.norm() * dt_s;
        if angle_rad > 0.0
            && let Ok(axis) = self.angular_velocity.normalize()
        {
            let delta = Mat3::from_quaternion(Rot::axis_angle_quaternion(angle_rad, axis));
            self.rotation = delta.mat_mul(&self.rotation);
        }

        for child in &mut self.children {
            child.update(dt_s);
        }
    }

    /// Pose of this node relative to its parent.
    pub fn local_transform(&self) -> Transform {
        Transform {
            rotation: self.rotation,
            translation: self.position,
        }
    }

    /// Walks the subtree depth-first in insertion order, keeping a stack of
    /// composed transforms. The root is placed relative to the identity.
    pub fn compose_transform<V: SceneVisitor + ?Sized>(&self, visitor: &mut V) {
        enum Step<'a> {
            Enter(&'a SceneNode),
            Leave(&'a SceneNode),
        }

        let mut stack = vec![Transform::IDENTITY];
        let mut pending = vec![Step::Enter(self)];

        while let Some(step) = pending.pop() {
            match step {
                Step::Enter(node) => {
                    let parent = *stack.last().unwrap_or(&Transform::IDENTITY);
                    let world = parent.compose(&node.local_transform());
                    visitor.enter(node, &world, stack.len() - 1);
                    stack.push(world);
                    pending.push(Step::Leave(node));
                    pending.extend(node.children.iter().rev().map(Step::Enter));
                }
                Step::Leave(node) => {
                    stack.pop();
                    visitor.leave(node, stack.len() - 1);
                }
            }
        }
    }

    /// `(depth, world transform)` for every node in pre-order.
    pub fn world_transforms(&self) -> Vec<(usize, Transform)> {
        struct Collect(Vec<(usize, Transform)>);

        impl SceneVisitor for Collect {
            fn enter(&mut self, _node: &SceneNode, world: &Transform, depth: usize) {
                self.0.push((depth, *world));
            }
        }

        let mut collect = Collect(Vec::with_capacity(self.node_count()));
        self.compose_transform(&mut collect);
        collect.0
    }
}
