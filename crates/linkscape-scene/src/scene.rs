//! What the projector needs from a renderer

use glam::Vec3;

use crate::layout::Edge;
use crate::object::PointLight;

/// A mutable container of attached objects, such as a renderer's scene root.
///
/// Objects are opaque handles; the projector only attaches and detaches them.
pub trait Scene {
    type Object: Clone;

    /// Attach an object.
    fn add(&mut self, object: Self::Object);

    /// Detach an object. Returns false if it was not attached.
    fn remove(&mut self, object: &Self::Object) -> bool;

    /// Objects currently attached, in attachment order.
    fn children(&self) -> Vec<Self::Object>;
}

/// Builds the objects a [`Scene`] holds: labeled anchors, link indicators
/// and lights. Text and material concerns live behind this trait.
pub trait ObjectFactory {
    type Object;

    fn anchor(&mut self, label: &str, position: Vec3) -> Self::Object;

    fn indicator(&mut self, edge: &Edge) -> Self::Object;

    fn light(&mut self, light: &PointLight) -> Self::Object;
}
