//! In-memory scene graph

use std::fmt;

use glam::Vec3;
use tracing::debug;

use crate::layout::Edge;
use crate::object::{AnchorStyle, IndicatorStyle, PointLight, SceneKind, SceneNode, SceneObject};
use crate::scene::{ObjectFactory, Scene};

/// Flat scene root that keeps attached objects in attachment order.
#[derive(Debug, Clone, Default)]
pub struct MemoryScene {
    children: Vec<SceneObject>,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Attached objects without cloning them.
    pub fn objects(&self) -> &[SceneObject] {
        &self.children
    }

    /// Number of attached objects of the given kind.
    pub fn count_of(&self, kind: SceneKind) -> usize {
        self.children.iter().filter(|o| o.kind() == kind).count()
    }

    /// Anchor labels in attachment order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.children.iter().filter_map(|o| match &o.node {
            SceneNode::Anchor { label, .. } => Some(label.as_str()),
            _ => None,
        })
    }
}

impl Scene for MemoryScene {
    type Object = SceneObject;

    fn add(&mut self, object: SceneObject) {
        // Re-adding an attached object leaves it where it is.
        if self.children.iter().any(|o| o.id == object.id) {
            debug!(id = %object.id, "object already attached");
            return;
        }
        self.children.push(object);
    }

    fn remove(&mut self, object: &SceneObject) -> bool {
        match self.children.iter().position(|o| o.id == object.id) {
            Some(index) => {
                self.children.remove(index);
                true
            }
            None => false,
        }
    }

    fn children(&self) -> Vec<SceneObject> {
        self.children.clone()
    }
}

impl fmt::Display for MemoryScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.children.is_empty() {
            return writeln!(f, "(empty scene)");
        }
        for object in &self.children {
            writeln!(f, "{object}")?;
        }
        Ok(())
    }
}

/// Factory producing plain [`SceneObject`]s: spheres for anchors and
/// lines for indicators, each under a fresh ID.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PrimitiveFactory {
    pub anchor_style: AnchorStyle,
    pub indicator_style: IndicatorStyle,
}

impl PrimitiveFactory {
    pub fn new(anchor_style: AnchorStyle, indicator_style: IndicatorStyle) -> Self {
        Self {
            anchor_style,
            indicator_style,
        }
    }
}

impl ObjectFactory for PrimitiveFactory {
    type Object = SceneObject;

    fn anchor(&mut self, label: &str, position: Vec3) -> SceneObject {
        SceneObject::new(SceneNode::Anchor {
            label: label.to_owned(),
            position,
            style: self.anchor_style,
        })
    }

    fn indicator(&mut self, edge: &Edge) -> SceneObject {
        SceneObject::new(SceneNode::Indicator {
            from: edge.from,
            to: edge.to,
            style: self.indicator_style,
        })
    }

    fn light(&mut self, light: &PointLight) -> SceneObject {
        SceneObject::new(SceneNode::Light(*light))
    }
}
