//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! The core draws in world units (a 600x900 canvas by default). This module
//! projects that canvas onto the cells inside a border and implements
//! [`Scene`] so the core can fold its words straight into the framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameState, Scene};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameConfig, Ink};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Linear mapping from world coordinates to a rectangle of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    pub origin_x: u16,
    pub origin_y: u16,
    pub cols: u16,
    pub rows: u16,
    pub world_width: i32,
    pub world_height: i32,
}

impl Projection {
    /// Cell column for world `x`. May fall outside the play area.
    pub fn col(&self, x: i32) -> i64 {
        self.origin_x as i64 + scale(x, self.cols, self.world_width)
    }

    /// Cell row for world `y`, or `None` when it is outside the play area.
    pub fn row(&self, y: i32) -> Option<u16> {
        let r = scale(y, self.rows, self.world_height);
        if r < 0 || r >= self.rows as i64 {
            return None;
        }
        Some(self.origin_y + r as u16)
    }

    fn right(&self) -> u16 {
        self.origin_x + self.cols
    }
}

fn scale(v: i32, cells: u16, world: i32) -> i64 {
    if world <= 0 {
        return 0;
    }
    (v as i64 * cells as i64).div_euclid(world as i64)
}

/// Colour for each kind of text the core draws.
pub fn ink_style(ink: Ink) -> CellStyle {
    match ink {
        Ink::Inactive => CellStyle::fg(Rgb::new(220, 80, 80)),
        Ink::Active => CellStyle::fg(Rgb::new(100, 220, 120)).bold(),
        Ink::Message => CellStyle::fg(Rgb::new(80, 120, 220)).bold(),
    }
}

/// A [`Scene`] that writes centered text into a framebuffer.
pub struct CellScene<'a> {
    fb: &'a mut FrameBuffer,
    projection: Projection,
}

impl<'a> CellScene<'a> {
    pub fn new(fb: &'a mut FrameBuffer, projection: Projection) -> Self {
        Self { fb, projection }
    }
}

impl Scene for CellScene<'_> {
    fn place_text(mut self, text: &str, x: i32, y: i32, ink: Ink) -> Self {
        let p = self.projection;
        let Some(row) = p.row(y) else {
            return self;
        };

        let len = text.chars().count() as i64;
        let start = p.col(x) - len / 2;
        let left = p.origin_x as i64;
        let right = p.right() as i64;

        // Clip on the left by skipping leading characters.
        let skip = (left - start).max(0) as usize;
        let start = start.max(left);
        if start >= right {
            return self;
        }

        let visible: String = text.chars().skip(skip).collect();
        self.fb
            .put_str_clipped(start as u16, row, p.right(), &visible, ink_style(ink));
        self
    }
}

/// A lightweight terminal renderer for the typing game.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    show_threshold: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            show_threshold: true,
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, show: bool) -> Self {
        self.show_threshold = show;
        self
    }

    /// Projection of the world onto the area inside the border.
    pub fn projection(&self, config: &GameConfig, viewport: Viewport) -> Projection {
        Projection {
            origin_x: 1,
            origin_y: 1,
            cols: viewport.width.saturating_sub(2),
            rows: viewport.height.saturating_sub(2),
            world_width: config.width,
            world_height: config.height,
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        if viewport.width < 3 || viewport.height < 3 {
            return;
        }

        let projection = self.projection(state.config(), viewport);
        let border = CellStyle::fg(Rgb::new(200, 200, 200));
        self.draw_border(fb, viewport.width, viewport.height, border);

        if self.show_threshold && !state.is_over() {
            if let Some(row) = projection.row(state.config().bottom_threshold) {
                let line = CellStyle::fg(Rgb::new(90, 90, 100)).dim();
                fb.hline(projection.origin_x, row, projection.cols, '╌', line);
            }
        }

        state.render(CellScene::new(fb, projection));

        let hint = if state.is_over() {
            " Enter: new game  Esc: quit "
        } else {
            " type to play  Esc: quit "
        };
        let hint_style = CellStyle::fg(Rgb::new(160, 160, 160)).dim();
        fb.put_str_clipped(2, viewport.height - 1, viewport.width - 1, hint, hint_style);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, w: u16, h: u16, style: CellStyle) {
        fb.put_char(0, 0, '┌', style);
        fb.put_char(w - 1, 0, '┐', style);
        fb.put_char(0, h - 1, '└', style);
        fb.put_char(w - 1, h - 1, '┘', style);

        fb.hline(1, 0, w - 2, '─', style);
        fb.hline(1, h - 1, w - 2, '─', style);
        for y in 1..h - 1 {
            fb.put_char(0, y, '│', style);
            fb.put_char(w - 1, y, '│', style);
        }
    }
}
