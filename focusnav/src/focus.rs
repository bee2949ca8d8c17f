use crossterm::event::{Event as CrosstermEvent, KeyEventKind};

use crate::event::{Event, Key, Modifiers};
use crate::tree::FocusableTree;

/// Traversal direction for arrow-key navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Walk steps allowed before a traversal is declared stuck. A well-formed
/// tree reaches a focusable node (or runs off the top) in at most one pass
/// over its nodes; only a tree with no focusable nodes or cyclic links
/// gets anywhere near this.
const MAX_TRAVERSAL_STEPS: usize = 4096;

/// Tracks which node is focused and computes arrow-key focus moves.
///
/// One navigator per panel instance. The navigator owns nothing but the
/// last focused node and the resting walk direction; the tree itself is
/// supplied per call, so it may be rebuilt freely between key presses.
#[derive(Debug)]
pub struct FocusNavigator<N> {
    focused: Option<N>,
    descending: bool,
}

impl<N> Default for FocusNavigator<N> {
    fn default() -> Self {
        Self {
            focused: None,
            descending: false,
        }
    }
}

impl<N> FocusNavigator<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused node.
    pub fn focused(&self) -> Option<&N> {
        self.focused.as_ref()
    }

    /// Record that focus landed on a node through an outside path (mouse
    /// click, programmatic focus). Any node may be recorded, focusable
    /// or not.
    pub fn record_focus(&mut self, node: N) {
        self.focused = Some(node);
    }

    /// Forget the focused node. Called when focus leaves the panel.
    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    /// Whether the last successful move stopped while descending into
    /// children (as opposed to ascending through ancestors).
    pub fn descending(&self) -> bool {
        self.descending
    }

    /// Move focus one step up or down and return the node that should
    /// receive it.
    ///
    /// The walk visits nodes in document order (reversed for [`Direction::Up`]),
    /// skips structural containers, and wraps around at the tree root
    /// instead of stopping. Returns `None` and leaves state untouched when
    /// nothing is focused or no focusable node is reachable in that
    /// direction. The caller applies actual UI focus to the returned node.
    pub fn move_focus<T>(&mut self, tree: &T, direction: Direction) -> Option<N>
    where
        T: FocusableTree<Node = N>,
    {
        let mut element = self.focused.clone()?;
        let mut descending = false;

        log::debug!("[focus] move {:?} from {:?}", direction, element);

        for _ in 0..MAX_TRAVERSAL_STEPS {
            let child = match direction {
                Direction::Up => tree.last_child(&element),
                Direction::Down => tree.first_child(&element),
            };
            let sibling = match direction {
                Direction::Up => tree.prev_sibling(&element),
                Direction::Down => tree.next_sibling(&element),
            };

            let next = if descending {
                if child.is_some() {
                    child
                } else if sibling.is_some() {
                    sibling
                } else {
                    descending = false;
                    tree.parent(&element)
                }
            } else if sibling.is_some() {
                descending = true;
                sibling
            } else {
                tree.parent(&element)
            };

            element = next?;

            if tree.is_root(&element) {
                // Walked past the top/bottom of the panel: wrap to the
                // opposite end and resume through descendants.
                log::debug!("[focus] wrapping at root going {:?}", direction);
                descending = true;
                element = match direction {
                    Direction::Up => tree.last_child(&element),
                    Direction::Down => tree.first_child(&element),
                }?;
            }

            if tree.is_focusable(&element) {
                self.focused = Some(element.clone());
                self.descending = descending;
                return Some(element);
            }
        }

        log::warn!(
            "[focus] traversal from {:?} gave up after {} steps; the tree has no focusable node or contains a cycle",
            self.focused,
            MAX_TRAVERSAL_STEPS
        );
        None
    }

    /// Translate raw terminal events into focus-level events.
    ///
    /// Unmodified Up/Down presses move focus while a node is tracked and
    /// are consumed even when the walk finds nothing; every other key
    /// press passes through as [`Event::Key`] targeted at the focused
    /// node. A terminal focus-out clears the tracked node.
    pub fn process_events<T>(&mut self, raw: &[CrosstermEvent], tree: &T) -> Vec<Event<N>>
    where
        T: FocusableTree<Node = N>,
    {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    let key: Key = key_event.code.into();
                    let modifiers: Modifiers = key_event.modifiers.into();

                    if modifiers.none() {
                        let direction = match key {
                            Key::Up => Some(Direction::Up),
                            Key::Down => Some(Direction::Down),
                            _ => None,
                        };

                        if let Some(direction) = direction {
                            if let Some(old) = self.focused.clone() {
                                if let Some(new) = self.move_focus(tree, direction) {
                                    events.push(Event::Blur {
                                        target: old,
                                        new_target: Some(new.clone()),
                                    });
                                    events.push(Event::Focus { target: new });
                                }
                                // Arrows are consumed whenever a node is
                                // tracked, even if nothing moved
                                continue;
                            }
                            // Nothing focused: fall through to emit the key event
                        }
                    }

                    events.push(Event::Key {
                        target: self.focused.clone(),
                        key,
                        modifiers,
                    });
                }

                CrosstermEvent::FocusLost => {
                    if let Some(old) = self.focused.take() {
                        events.push(Event::Blur {
                            target: old,
                            new_target: None,
                        });
                    }
                }

                _ => {}
            }
        }

        events
    }
}
