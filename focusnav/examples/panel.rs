//! Left-panel style navigation demo.
//!
//! Builds a sidebar-shaped tree (search box, room rows, a menu entry) and
//! moves focus with the Up/Down arrow keys. Press 'q' or Escape to quit.
//! Traversal traces go to `panel.log`.

use std::fs::File;

use crossterm::event::read;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use focusnav::{Element, ElementTree, Event, FocusNavigator, Key};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> std::io::Result<()> {
    let _ = WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("panel.log")?,
    );

    let tree = ElementTree::new(
        Element::group()
            .id("left-panel")
            .child(Element::item("search"))
            .child(
                Element::group()
                    .id("rooms")
                    .children((1..=5).map(|i| Element::item(format!("room-{i}")))),
            )
            .child(Element::item("menu")),
    );

    let mut navigator = FocusNavigator::new();
    navigator.record_focus(tree.get("search").expect("search is mounted"));

    enable_raw_mode()?;
    println!("Up/Down to move focus, q to quit\r");
    println!("focused: search\r");

    loop {
        let raw = [read()?];
        for event in navigator.process_events(&raw, &tree) {
            match event {
                Event::Focus { target } => {
                    println!("focused: {}\r", tree.id_of(target).unwrap_or("?"));
                }
                Event::Key {
                    key: Key::Char('q') | Key::Escape,
                    ..
                } => {
                    disable_raw_mode()?;
                    return Ok(());
                }
                _ => {}
            }
        }
    }
}
