//! Crossterm-backed terminal with double-buffered diff output.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event},
    queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use super::buffer::{Buffer, Rgb, Style};
use super::text::char_width;

pub struct Terminal {
    stdout: io::Stdout,
    current: Buffer,
    previous: Buffer,
}

impl Terminal {
    /// Enter raw mode and the alternate screen.
    ///
    /// The value exists before the terminal is touched, so a failure part
    /// way through still restores it on drop.
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let mut term = Self {
            stdout: io::stdout(),
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
        };
        terminal::enable_raw_mode()?;
        queue!(term.stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        term.stdout.flush()?;
        Ok(term)
    }

    /// Wait up to `timeout` for input, returning every pending event.
    pub fn poll(&self, timeout: Duration) -> io::Result<Vec<Event>> {
        let mut events = Vec::new();
        if event::poll(timeout)? {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }
        Ok(events)
    }

    /// Draw a frame: `paint` fills a cleared buffer, then only changed cells
    /// are written out.
    pub fn draw(&mut self, paint: impl FnOnce(&mut Buffer)) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        if width != self.current.width() || height != self.current.height() {
            self.current = Buffer::new(width, height);
            // Force a full repaint after a resize.
            self.previous = Buffer::new(width, height);
            self.previous.fill(self.previous.area(), Style::new(Rgb::new(1, 1, 1), Rgb::new(1, 1, 1)));
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.current.clear();
        paint(&mut self.current);
        self.flush_diff()?;
        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_style: Option<Style> = None;

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current.diff(&self.previous) {
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != last_x.wrapping_add(last_char_width) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if last_style != Some(cell.style) {
                let style = cell.style;
                queue!(
                    self.stdout,
                    SetAttribute(Attribute::Reset),
                    SetForegroundColor(to_crossterm(style.fg)),
                    SetBackgroundColor(to_crossterm(style.bg)),
                )?;
                if style.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if style.underline {
                    queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
                }
                last_style = Some(style);
            }

            write!(self.stdout, "{}", cell.char)?;

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.char).max(1) as u16;
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

fn to_crossterm(color: Rgb) -> CtColor {
    CtColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = queue!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = self.stdout.flush();
        let _ = terminal::disable_raw_mode();
    }
}
