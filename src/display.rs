use sdl2::{pixels::Color, rect::Rect};

pub const BLOCKS_X: usize = 16;
pub const BLOCKS_Y: usize = 8;

pub const CELL_SIZE: u32 = 64;
pub const LINE_WIDTH: u32 = 2;

/// Pixel geometry of the grid: square cells separated (and framed) by lines
/// of `line_width` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub cell_size: u32,
    pub line_width: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            line_width: LINE_WIDTH,
        }
    }
}

impl Layout {
    /// Distance in pixels from the start of one cell to the start of the next.
    pub const fn pitch(&self) -> u32 {
        self.cell_size + self.line_width
    }

    pub const fn window_size(&self, cols: usize, rows: usize) -> (u32, u32) {
        (
            self.line_width + self.pitch() * cols as u32,
            self.line_width + self.pitch() * rows as u32,
        )
    }

    pub fn cell_rect(&self, x: usize, y: usize) -> Rect {
        Rect::new(
            (self.line_width + x as u32 * self.pitch()) as i32,
            (self.line_width + y as u32 * self.pitch()) as i32,
            self.cell_size,
            self.cell_size,
        )
    }

    /// Maps a pixel to the cell it falls in by dividing by the pitch on each
    /// axis. Returns `None` outside a `cols` x `rows` grid.
    pub fn cell_at(&self, px: i32, py: i32, cols: usize, rows: usize) -> Option<(usize, usize)> {
        if px < 0 || py < 0 {
            return None;
        }
        let x = (px as u32 / self.pitch()) as usize;
        let y = (py as u32 / self.pitch()) as usize;
        (x < cols && y < rows).then_some((x, y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub live: Color,
    pub dead: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::RGB(0x00, 0x00, 0x00),
            live: Color::RGB(0xff, 0x00, 0x00),
            dead: Color::RGB(0x00, 0x00, 0xff),
        }
    }
}
