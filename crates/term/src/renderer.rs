//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize) is a full redraw. After
//! that only runs of changed cells are written.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. on resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, writing only what changed since the last draw.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        let prev = self
            .last
            .as_ref()
            .filter(|prev| prev.width() == fb.width() && prev.height() == fb.height());
        encode_frame(prev, fb, &mut self.buf)?;
        self.flush_buf()?;

        match &mut self.last {
            Some(prev) => prev.clone_from(fb),
            None => self.last = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode `next` into `out`.
///
/// With a previous frame of the same size only the changed runs are written.
/// Without one the screen is cleared and every row is redrawn.
fn encode_frame(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let runs = match prev {
        Some(prev) => changed_runs(prev, next),
        None => {
            out.queue(terminal::Clear(terminal::ClearType::All))?;
            (0..next.height()).map(|y| (0, y, next.width())).collect()
        }
    };
    if runs.is_empty() {
        return Ok(());
    }

    // The terminal keeps the last style across cursor moves.
    let mut current = None;
    for (x, y, len) in runs {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// `(x, y, len)` for every maximal horizontal run of changed cells.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let mut runs = Vec::new();
    for y in 0..next.height() {
        let mut start: Option<u16> = None;
        for x in 0..next.width() {
            let changed = prev.get(x, y) != next.get(x, y);
            match (changed, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push((s, y, x - s));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push((s, y, next.width() - s));
        }
    }
    runs
}
