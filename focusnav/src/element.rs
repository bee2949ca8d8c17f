use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::tree::FocusableTree;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Builder node for an in-memory focusable hierarchy.
///
/// Elements are built by value and mounted into an [`ElementTree`] for
/// traversal. Container IDs are generated and can be overridden when the
/// caller needs to look them up later.
#[derive(Debug, Clone)]
pub struct Element {
    pub id: String,
    pub focusable: bool,
    pub children: Vec<Element>,
}

impl Element {
    /// Create a structural container (a list, a section wrapper).
    pub fn group() -> Self {
        Self {
            id: generate_id("group"),
            focusable: false,
            children: Vec::new(),
        }
    }

    /// Create a focusable leaf with the given ID.
    pub fn item(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            focusable: true,
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(new_children);
        self
    }
}

/// Opaque handle to a mounted element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct MountedNode {
    id: String,
    focusable: bool,
    parent: Option<NodeId>,
    prev: Option<NodeId>,
    next: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
}

/// An element hierarchy mounted for O(1) structural queries.
///
/// Mounting flattens the owned [`Element`] tree into per-node parent,
/// sibling and child links. The mounted root is the traversal boundary:
/// focus walks wrap around at it rather than stopping.
#[derive(Debug)]
pub struct ElementTree {
    nodes: Vec<MountedNode>,
    by_id: HashMap<String, NodeId>,
    root: NodeId,
}

impl ElementTree {
    pub fn new(root: Element) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            by_id: HashMap::new(),
            root: NodeId(0),
        };
        tree.root = tree.mount(root, None);
        tree
    }

    fn mount(&mut self, element: Element, parent: Option<NodeId>) -> NodeId {
        let Element {
            id,
            focusable,
            children,
        } = element;

        let node = NodeId(self.nodes.len());
        self.nodes.push(MountedNode {
            id: id.clone(),
            focusable,
            parent,
            prev: None,
            next: None,
            first_child: None,
            last_child: None,
        });

        match self.by_id.entry(id) {
            Entry::Vacant(entry) => {
                entry.insert(node);
            }
            Entry::Occupied(entry) => {
                log::warn!(
                    "[element] duplicate element id {:?}; keeping the first mounted node",
                    entry.key()
                );
            }
        }

        let mut prev: Option<NodeId> = None;
        for child in children {
            let child_node = self.mount(child, Some(node));
            match prev {
                None => self.nodes[node.0].first_child = Some(child_node),
                Some(prev_node) => {
                    self.nodes[prev_node.0].next = Some(child_node);
                    self.nodes[child_node.0].prev = Some(prev_node);
                }
            }
            self.nodes[node.0].last_child = Some(child_node);
            prev = Some(child_node);
        }

        node
    }

    /// Handle of the mounted root.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a mounted node by element ID.
    pub fn get(&self, id: &str) -> Option<NodeId> {
        self.by_id.get(id).copied()
    }

    /// Element ID of a mounted node.
    pub fn id_of(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).map(|n| n.id.as_str())
    }

    /// Number of mounted nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl FocusableTree for ElementTree {
    type Node = NodeId;

    fn first_child(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.first_child)
    }

    fn last_child(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.last_child)
    }

    fn prev_sibling(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.prev)
    }

    fn next_sibling(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.next)
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    fn is_focusable(&self, node: &NodeId) -> bool {
        self.nodes.get(node.0).is_some_and(|n| n.focusable)
    }

    fn is_root(&self, node: &NodeId) -> bool {
        *node == self.root
    }
}
