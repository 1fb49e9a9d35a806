//! Terminal preview of the strip
//!
//! Draws every pixel as a true-color block on a single line that is
//! redrawn in place on each frame.

use std::io::{self, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use pixel_control::Rgbw;
use smart_leds::SmartLedsWrite;

const PIXEL_GLYPH: &str = "██";

/// `smart-leds` driver that writes frames to a terminal
pub(crate) struct TerminalStrip<W: Write> {
    out: W,
    frames: usize,
}

impl<W: Write> TerminalStrip<W> {
    pub(crate) const fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    /// Number of frames written so far
    pub(crate) const fn frames(&self) -> usize {
        self.frames
    }

    /// Move past the strip line
    pub(crate) fn finish(mut self) -> io::Result<W> {
        queue!(self.out, ResetColor, Print('\n'))?;
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Terminals have no white diode, so white lifts all three channels
fn terminal_color(color: Rgbw) -> Color {
    let white = color.a.0;
    Color::Rgb {
        r: color.r.saturating_add(white),
        g: color.g.saturating_add(white),
        b: color.b.saturating_add(white),
    }
}

impl<W: Write> SmartLedsWrite for TerminalStrip<W> {
    type Error = io::Error;
    type Color = Rgbw;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        queue!(self.out, MoveToColumn(0))?;
        for pixel in iterator {
            queue!(
                self.out,
                SetForegroundColor(terminal_color(pixel.into())),
                Print(PIXEL_GLYPH)
            )?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }
}
