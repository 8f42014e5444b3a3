//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::fg(Rgb::new(220, 220, 220))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer, keeping the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write `s` starting at `x`, clipped at `max_x` (exclusive).
    pub fn put_str_clipped(&mut self, x: u16, y: u16, max_x: u16, s: &str, style: CellStyle) {
        let end = max_x.min(self.width);
        for (cx, ch) in (x..end).zip(s.chars()) {
            self.put_char(cx, y, ch, style);
        }
    }

    /// Horizontal run of `ch` from `x` to `x + len` on row `y`.
    pub fn hline(&mut self, x: u16, y: u16, len: u16, ch: char, style: CellStyle) {
        for dx in 0..len {
            self.put_char(x.saturating_add(dx), y, ch, style);
        }
    }

    /// Row `y` as a string, for assertions and debugging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_clips_at_bound() {
        let mut fb = FrameBuffer::new(6, 1);
        fb.put_str_clipped(2, 0, 5, "hello", CellStyle::default());
        assert_eq!(fb.row_text(0), "  hel ");
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_char(5, 5, 'x', CellStyle::default());
        fb.hline(1, 1, 4, '-', CellStyle::default());
        assert_eq!(fb.row_text(0), "  ");
        assert_eq!(fb.row_text(1), " -");
        assert_eq!(fb.get(2, 0), None);
    }

    #[test]
    fn resize_keeps_dimensions_in_sync() {
        let mut fb = FrameBuffer::new(3, 3);
        fb.resize(4, 2);
        assert_eq!((fb.width(), fb.height()), (4, 2));
        assert_eq!(fb.row_text(1).len(), 4);
    }
}
