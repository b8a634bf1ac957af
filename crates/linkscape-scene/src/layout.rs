//! One-dimensional layout of list nodes

use glam::Vec3;
use linkscape_list::LinkedList;
use serde::Serialize;

/// Where the first node sits and how far apart consecutive nodes are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Position of the head node
    pub origin: Vec3,
    /// Distance between consecutive nodes
    pub spacing: f32,
    /// Unit direction the list grows along; only set through [`LayoutConfig::new`]
    axis: Vec3,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin: Vec3::new(-6.0, 0.0, 0.0),
            spacing: 3.0,
            axis: Vec3::X,
        }
    }
}

impl LayoutConfig {
    /// Create a layout, normalizing `axis` (falls back to +X for a zero axis).
    pub fn new(origin: Vec3, spacing: f32, axis: Vec3) -> Self {
        Self {
            origin,
            spacing,
            axis: axis.try_normalize().unwrap_or(Vec3::X),
        }
    }

    /// Unit direction the list grows along.
    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    /// Position of the node at `index`.
    pub fn position(&self, index: usize) -> Vec3 {
        self.origin + self.axis * (self.spacing * index as f32)
    }
}

/// One list node placed in space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedNode<V> {
    pub index: usize,
    pub value: V,
    pub position: Vec3,
    /// False only for the tail node
    pub has_next: bool,
}

/// The `next` link between two consecutive nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    /// Index of the node the link starts from
    pub from_index: usize,
    pub from: Vec3,
    pub to: Vec3,
}

impl Edge {
    /// Unit direction from `from` to `to`.
    pub fn direction(&self) -> Vec3 {
        (self.to - self.from).normalize_or_zero()
    }

    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }
}

/// Positioned snapshot of a list, head first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection<V> {
    nodes: Vec<ProjectedNode<V>>,
}

impl<V> Projection<V> {
    /// A projection with no nodes.
    pub fn empty() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn nodes(&self) -> &[ProjectedNode<V>] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectedNode<V>> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Links between consecutive nodes, one fewer than the node count.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.nodes.windows(2).map(|pair| Edge {
            from_index: pair[0].index,
            from: pair[0].position,
            to: pair[1].position,
        })
    }
}

impl<V> Default for Projection<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, V> IntoIterator for &'a Projection<V> {
    type Item = &'a ProjectedNode<V>;
    type IntoIter = std::slice::Iter<'a, ProjectedNode<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Place every node of `list` along the layout axis, in traversal order.
pub fn project<'a, T>(list: &'a LinkedList<T>, layout: &LayoutConfig) -> Projection<&'a T> {
    let count = list.len();
    let nodes = list
        .values()
        .enumerate()
        .map(|(index, value)| ProjectedNode {
            index,
            value,
            position: layout.position(index),
            has_next: index + 1 < count,
        })
        .collect();
    Projection { nodes }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[&str]) -> LinkedList<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_empty_list_projects_to_nothing() {
        let list: LinkedList<String> = LinkedList::new();
        let projection = project(&list, &LayoutConfig::default());
        assert!(projection.is_empty());
        assert_eq!(projection.edges().count(), 0);
    }

    #[test]
    fn test_positions_follow_origin_and_spacing() {
        let list = list_of(&["0", "1", "2", "3"]);
        let layout = LayoutConfig::default();
        let projection = project(&list, &layout);

        assert_eq!(projection.len(), 4);
        for (i, node) in projection.iter().enumerate() {
            let expected = -6.0 + 3.0 * i as f32;
            assert!((node.position.x - expected).abs() < f32::EPSILON);
            assert_eq!(node.position.y, 0.0);
            assert_eq!(node.position.z, 0.0);
            assert_eq!(node.index, i);
        }
    }

    #[test]
    fn test_only_tail_lacks_next() {
        let list = list_of(&["a", "b", "c"]);
        let projection = project(&list, &LayoutConfig::default());
        let flags: Vec<bool> = projection.iter().map(|n| n.has_next).collect();
        assert_eq!(flags, [true, true, false]);

        let single = list_of(&["solo"]);
        let projection = project(&single, &LayoutConfig::default());
        assert!(!projection.nodes()[0].has_next);
    }

    #[test]
    fn test_projection_is_pure() {
        let list = list_of(&["a", "b", "a"]);
        let layout = LayoutConfig::default();
        assert_eq!(project(&list, &layout), project(&list, &layout));
    }

    #[test]
    fn test_edges_connect_consecutive_nodes() {
        let list = list_of(&["a", "b", "c"]);
        let layout = LayoutConfig::default();
        let projection = project(&list, &layout);
        let edges: Vec<Edge> = projection.edges().collect();

        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].from, Vec3::new(-6.0, 0.0, 0.0));
        assert_eq!(edges[0].to, Vec3::new(-3.0, 0.0, 0.0));
        assert_eq!(edges[1].from_index, 1);
        assert_eq!(edges[1].direction(), Vec3::X);
        assert!((edges[1].length() - layout.spacing).abs() < f32::EPSILON);
    }

    #[test]
    fn test_custom_axis_is_normalized() {
        let layout = LayoutConfig::new(Vec3::ZERO, 2.0, Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(layout.axis(), Vec3::Y);
        assert_eq!(layout.position(2), Vec3::new(0.0, 4.0, 0.0));

        let fallback = LayoutConfig::new(Vec3::ZERO, 1.0, Vec3::ZERO);
        assert_eq!(fallback.axis(), Vec3::X);
    }
}
