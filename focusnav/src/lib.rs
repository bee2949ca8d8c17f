//! Keyboard focus traversal for panel-style UI trees.

pub mod element;
pub mod event;
pub mod focus;
pub mod tree;

pub use element::{Element, ElementTree, NodeId};
pub use event::{Event, Key, Modifiers};
pub use focus::{Direction, FocusNavigator};
pub use tree::FocusableTree;
