use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use focusnav::{Element, ElementTree, Event, FocusNavigator, Key, Modifiers, NodeId};

fn left_panel() -> ElementTree {
    ElementTree::new(
        Element::group()
            .id("panel")
            .child(Element::item("search"))
            .child(
                Element::group()
                    .id("rooms")
                    .child(Element::item("row-1"))
                    .child(Element::item("row-2")),
            )
            .child(Element::item("menu")),
    )
}

fn node(tree: &ElementTree, id: &str) -> NodeId {
    tree.get(id).unwrap()
}

fn press(code: KeyCode) -> CrosstermEvent {
    CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_arrow_down_emits_blur_and_focus() {
    let tree = left_panel();
    let mut nav = FocusNavigator::new();
    let search = node(&tree, "search");
    let row_1 = node(&tree, "row-1");
    nav.record_focus(search);

    let events = nav.process_events(&[press(KeyCode::Down)], &tree);

    assert_eq!(
        events,
        vec![
            Event::Blur {
                target: search,
                new_target: Some(row_1),
            },
            Event::Focus { target: row_1 },
        ]
    );
    assert_eq!(nav.focused(), Some(&row_1));
}

#[test]
fn test_consecutive_arrows_in_one_batch() {
    let tree = left_panel();
    let mut nav = FocusNavigator::new();
    nav.record_focus(node(&tree, "search"));

    let events = nav.process_events(&[press(KeyCode::Down), press(KeyCode::Down)], &tree);

    let focused: Vec<&str> = events
        .iter()
        .filter_map(|event| match event {
            Event::Focus { target } => tree.id_of(*target),
            _ => None,
        })
        .collect();
    assert_eq!(focused, ["row-1", "row-2"]);
}

#[test]
fn test_key_release_is_ignored() {
    let tree = left_panel();
    let mut nav = FocusNavigator::new();
    let search = node(&tree, "search");
    nav.record_focus(search);

    let release = CrosstermEvent::Key(KeyEvent::new_with_kind(
        KeyCode::Down,
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ));
    let events = nav.process_events(&[release], &tree);

    assert!(events.is_empty());
    assert_eq!(nav.focused(), Some(&search));
}

#[test]
fn test_modified_arrow_passes_through() {
    let tree = left_panel();
    let mut nav = FocusNavigator::new();
    let search = node(&tree, "search");
    nav.record_focus(search);

    let alt_down = CrosstermEvent::Key(KeyEvent::new(KeyCode::Down, KeyModifiers::ALT));
    let events = nav.process_events(&[alt_down], &tree);

    assert_eq!(
        events,
        vec![Event::Key {
            target: Some(search),
            key: Key::Down,
            modifiers: Modifiers::alt(),
        }]
    );
    assert_eq!(nav.focused(), Some(&search));
}

#[test]
fn test_arrow_without_focus_passes_through() {
    let tree = left_panel();
    let mut nav = FocusNavigator::<NodeId>::new();

    let events = nav.process_events(&[press(KeyCode::Up)], &tree);

    assert_eq!(
        events,
        vec![Event::Key {
            target: None,
            key: Key::Up,
            modifiers: Modifiers::new(),
        }]
    );
}

#[test]
fn test_other_keys_target_the_focused_node() {
    let tree = left_panel();
    let mut nav = FocusNavigator::new();
    let search = node(&tree, "search");
    nav.record_focus(search);

    let events = nav.process_events(&[press(KeyCode::Char('x'))], &tree);

    assert_eq!(
        events,
        vec![Event::Key {
            target: Some(search),
            key: Key::Char('x'),
            modifiers: Modifiers::new(),
        }]
    );
}

#[test]
fn test_focus_lost_clears_and_blurs() {
    let tree = left_panel();
    let mut nav = FocusNavigator::new();
    let search = node(&tree, "search");
    nav.record_focus(search);

    let events = nav.process_events(&[CrosstermEvent::FocusLost], &tree);

    assert_eq!(
        events,
        vec![Event::Blur {
            target: search,
            new_target: None,
        }]
    );
    assert_eq!(nav.focused(), None);
}

#[test]
fn test_arrow_is_consumed_even_when_nothing_moves() {
    // No focusable nodes anywhere: the walk fails, but the arrow press
    // must not leak through as a plain key event
    let tree = ElementTree::new(Element::group().id("panel").child(Element::group().id("a")));
    let mut nav = FocusNavigator::new();
    let a = node(&tree, "a");
    nav.record_focus(a);

    let events = nav.process_events(&[press(KeyCode::Down)], &tree);

    assert!(events.is_empty());
    assert_eq!(nav.focused(), Some(&a));
}
