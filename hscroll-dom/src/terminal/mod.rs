use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent};
use crossterm::{cursor, execute, queue, terminal};

use crate::animation::{collect_element_ids, AnimationState};
use crate::buffer::Buffer;
use crate::document::Document;
use crate::layout::Rect;
use crate::render::render_to_buffer;
use crate::text::char_width;

/// Crossterm host for a [`Document`].
///
/// Owns the terminal modes for its lifetime (raw mode, alternate screen,
/// mouse and focus reporting) and restores them on drop. Frames are painted
/// into a back buffer and only the cells that differ from the last frame are
/// written out.
pub struct Terminal {
    stdout: io::Stdout,
    front: Buffer,
    back: Buffer,
    animation: AnimationState,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture,
            event::EnableFocusChange
        )?;

        let (width, height) = terminal::size()?;
        log::debug!("[terminal] entered {width}x{height}");

        Ok(Self {
            stdout,
            front: Buffer::new(width, height),
            back: Buffer::new(width, height),
            animation: AnimationState::new(),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.back.width(), self.back.height())
    }

    /// True while a transition still needs frames.
    pub fn is_animating(&self) -> bool {
        self.animation.has_active_transitions()
    }

    /// Wait up to `timeout` for input, then drain whatever else is queued.
    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();
        if !event::poll(timeout)? {
            return Ok(events);
        }
        events.push(event::read()?);
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }
        Ok(events)
    }

    /// Lay the document out to the terminal size and paint one frame.
    pub fn render(&mut self, document: &mut Document) -> io::Result<()> {
        self.fit_to_terminal()?;
        let (width, height) = self.size();
        document.set_viewport(Rect::from_size(width as f32, height as f32));

        let now = Instant::now();
        self.animation.update(document.root(), document.stylesheet(), now);
        self.animation.cleanup(&collect_element_ids(document.root()));

        self.back.clear();
        render_to_buffer(document, &self.animation, &mut self.back, now);
        self.flush_diff()?;

        std::mem::swap(&mut self.front, &mut self.back);
        Ok(())
    }

    /// Reallocate both buffers and wipe the screen after a resize.
    fn fit_to_terminal(&mut self) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        if (width, height) == self.size() {
            return Ok(());
        }

        log::debug!("[terminal] resized to {width}x{height}");
        self.front = Buffer::new(width, height);
        self.back = Buffer::new(width, height);
        execute!(self.stdout, terminal::Clear(terminal::ClearType::All))
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        // Where the cursor lands after the last write
        let mut cursor_at: Option<(u16, u16)> = None;

        for (x, y, cell) in self.back.diff(&self.front) {
            if cell.wide_continuation {
                continue;
            }
            if cursor_at != Some((x, y)) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }
            write!(self.stdout, "{}", cell.char)?;

            let advance = char_width(cell.char).max(1) as u16;
            cursor_at = Some((x.saturating_add(advance), y));
        }

        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableFocusChange,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
