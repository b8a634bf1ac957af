//! Scene objects produced for a projected list

use std::fmt;

use glam::Vec3;
use linkscape_core::{Color, ObjectId};

/// Point light that keeps the anchors visible
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
    pub intensity: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(10.0, 10.0, 20.0),
            color: Color::WHITE,
            intensity: 1500.0,
        }
    }
}

/// Appearance of the sphere drawn for each node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorStyle {
    pub radius: f32,
    pub color: Color,
}

impl Default for AnchorStyle {
    fn default() -> Self {
        Self {
            radius: 0.5,
            color: Color::AQUA,
        }
    }
}

/// Appearance of the line drawn for each `next` link
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorStyle {
    pub color: Color,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
        }
    }
}

/// What a scene object draws.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    /// Labeled placeholder for one list node
    Anchor {
        label: String,
        position: Vec3,
        style: AnchorStyle,
    },
    /// Directional marker from one anchor to its successor
    Indicator {
        from: Vec3,
        to: Vec3,
        style: IndicatorStyle,
    },
    Light(PointLight),
}

/// Discriminant of [`SceneNode`], handy for counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Anchor,
    Indicator,
    Light,
}

impl SceneNode {
    pub fn kind(&self) -> SceneKind {
        match self {
            SceneNode::Anchor { .. } => SceneKind::Anchor,
            SceneNode::Indicator { .. } => SceneKind::Indicator,
            SceneNode::Light(_) => SceneKind::Light,
        }
    }
}

/// A node plus the identity it carries while attached to a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub id: ObjectId,
    pub node: SceneNode,
}

impl SceneObject {
    /// Wrap a node under a fresh ID.
    pub fn new(node: SceneNode) -> Self {
        Self {
            id: ObjectId::new(),
            node,
        }
    }

    pub fn kind(&self) -> SceneKind {
        self.node.kind()
    }
}

struct Point(Vec3);

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1}, {:.1})", self.0.x, self.0.y, self.0.z)
    }
}

impl fmt::Display for SceneObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.node {
            SceneNode::Anchor {
                label,
                position,
                style,
            } => write!(
                f,
                "anchor    {} {:?} at {} r={} {}",
                self.id,
                label,
                Point(*position),
                style.radius,
                style.color
            ),
            SceneNode::Indicator { from, to, style } => write!(
                f,
                "indicator {} {} -> {} {}",
                self.id,
                Point(*from),
                Point(*to),
                style.color
            ),
            SceneNode::Light(light) => write!(
                f,
                "light     {} at {} {} x{}",
                self.id,
                Point(light.position),
                light.color,
                light.intensity
            ),
        }
    }
}
