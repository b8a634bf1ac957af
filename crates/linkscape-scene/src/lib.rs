//! Linkscape Scene - Layout projection and scene reconciliation
//!
//! Turns a [`linkscape_list::LinkedList`] into positioned anchors and the
//! indicators between them, then rebuilds a scene to match:
//! - `layout`: pure projection of list state onto a single axis
//! - `scene`: the capabilities required of a renderer's scene graph
//! - `reconcile`: full teardown and rebuild of a scene from a projection
//! - `memory`: an in-memory scene graph used by the session and in tests

pub mod layout;
pub mod memory;
pub mod object;
pub mod reconcile;
pub mod scene;

pub use layout::{project, Edge, LayoutConfig, ProjectedNode, Projection};
pub use memory::{MemoryScene, PrimitiveFactory};
pub use object::{AnchorStyle, IndicatorStyle, PointLight, SceneKind, SceneNode, SceneObject};
pub use reconcile::{reconcile, ReconcileDiff};
pub use scene::{ObjectFactory, Scene};
