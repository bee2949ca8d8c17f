use std::fmt::Debug;

/// Read-only view over a hierarchy of UI elements, as focus traversal
/// sees it.
///
/// Implementations hand out opaque node handles and answer structural
/// queries about them. Every query must be O(1) for any node reachable
/// from the panel root.
pub trait FocusableTree {
    /// Opaque handle to a node in the hierarchy.
    type Node: Clone + PartialEq + Debug;

    /// First child of the node, in document order.
    fn first_child(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Last child of the node, in document order.
    fn last_child(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Sibling immediately before the node.
    fn prev_sibling(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Sibling immediately after the node.
    fn next_sibling(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Parent of the node. `None` only for the tree's topmost node.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Whether keyboard focus may land on this node (a list row, a search
    /// input), as opposed to a structural container.
    fn is_focusable(&self, node: &Self::Node) -> bool;

    /// Whether this node is the traversal boundary. Walking into it wraps
    /// around to the opposite end of the tree instead of stopping.
    fn is_root(&self, node: &Self::Node) -> bool;
}
