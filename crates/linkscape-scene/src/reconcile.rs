//! Rebuilding a scene from a projection

use std::fmt::Display;

use tracing::{debug, warn};

use crate::layout::Projection;
use crate::object::PointLight;
use crate::scene::{ObjectFactory, Scene};

/// Objects detached and attached by one [`reconcile`] pass. Children the
/// scene refused to detach are not listed in `removed`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcileDiff<O> {
    pub removed: Vec<O>,
    pub added: Vec<O>,
}

impl<O> ReconcileDiff<O> {
    /// Net change in the number of attached objects.
    pub fn net_change(&self) -> isize {
        self.added.len() as isize - self.removed.len() as isize
    }
}

/// Make `scene` show `projection`.
///
/// Every attached object is removed first, then `lights` are re-added,
/// followed by one anchor per node and one indicator per `next` link.
/// Rebuilding from scratch means no stale object survives a pass.
pub fn reconcile<S, F, V>(
    scene: &mut S,
    factory: &mut F,
    projection: &Projection<V>,
    lights: &[PointLight],
) -> ReconcileDiff<S::Object>
where
    S: Scene,
    F: ObjectFactory<Object = S::Object>,
    V: Display,
{
    let mut removed = Vec::new();
    for object in scene.children() {
        if scene.remove(&object) {
            removed.push(object);
        } else {
            warn!("scene refused to detach one of its own children");
        }
    }

    let mut added = Vec::with_capacity(lights.len() + projection.len() * 2);
    added.extend(lights.iter().map(|light| factory.light(light)));

    let mut edges = projection.edges();
    for node in projection {
        added.push(factory.anchor(&node.value.to_string(), node.position));
        if node.has_next {
            if let Some(edge) = edges.next() {
                added.push(factory.indicator(&edge));
            }
        }
    }

    for object in &added {
        scene.add(object.clone());
    }

    debug!(
        removed = removed.len(),
        added = added.len(),
        nodes = projection.len(),
        "reconciled scene"
    );

    ReconcileDiff { removed, added }
}
