use std::fs::File;
use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, KeyCode};
use hscroll::{stylesheet, ControlsConfig, HorizontalScroll, ScrollConfig};
use hscroll_dom::{Document, Edges, Element, Position, Rect, Size, Terminal};
use simplelog::{Config, LevelFilter, WriteLogger};

const ITEMS: usize = 14;
const ITEM_WIDTH: f32 = 16.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("strip.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let mut term = Terminal::new()?;
    let (width, height) = term.size();

    // Controls sit on the strip's first and last column, inside the page
    // and container padding
    let left = Element::text("<").position(Position::Absolute).left(0.0);
    let right = Element::text(">")
        .position(Position::Absolute)
        .left(width as f32 - 7.0);
    let config = ScrollConfig::new().controls(ControlsConfig::new(left, right).pace(ITEM_WIDTH * 2.0));

    let mut document = Document::new(ui(), Rect::from_size(width as f32, height as f32))
        .with_stylesheet(stylesheet(&config));
    let mut scroll = HorizontalScroll::mount(&mut document, "container", config)?;

    loop {
        term.render(&mut document)?;

        // Keep painting while a slide is in flight
        let timeout = if term.is_animating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(250)
        };

        for raw in term.poll(timeout)? {
            if let CrosstermEvent::Key(key) = &raw {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    return Ok(());
                }
                continue;
            }

            for event in document.translate(&raw) {
                let result = scroll.handle(&mut document, &event);
                log::trace!("{event:?} -> {result:?} (offset {})", scroll.offset());
            }
        }
    }
}

fn ui() -> Element {
    let items = (1..=ITEMS).map(|i| {
        Element::text(format!("[ item {i:>2} ]"))
            .id(format!("item-{i}"))
            .class("item")
            .width(Size::Fixed(ITEM_WIDTH - 2.0))
            .margin(Edges::horizontal(1.0))
    });

    Element::col()
        .id("page")
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::symmetric(1.0, 2.0))
        .gap(1.0)
        .child(Element::text("wheel, drag or click < > to scroll · q to quit"))
        .child(
            Element::col()
                .id("container")
                .width(Size::Fill)
                .padding(Edges::all(1.0))
                .children(items),
        )
}
