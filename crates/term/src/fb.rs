//! Character framebuffer the game view draws into.
//!
//! A frame is a grid of `(char, style)` cells; the renderer turns a full
//! grid into escape sequences in one pass. Styles carry exactly what the
//! game view uses: truecolor fg/bg plus bold and dim.

/// Truecolor component triple.
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

/// Per-cell attributes. The default is light gray on black, the idle
/// background of the whole screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::default(),
            bold: false,
            dim: false,
        }
    }
}

impl CellStyle {
    /// Pair this style with a character.
    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

/// One framebuffer slot. Defaults to a blank in the default style, which is
/// also what [`FrameBuffer::resize`] fills vacated space with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        CellStyle::default().into_cell(' ')
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

    /// Resize, dropping old contents. No-op when the size is unchanged.
    pub fn resize(&mut self, width: u16, height: u16) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize((width as usize) * (height as usize), Cell::default());
    }

    /// Fill every cell.
    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Write one cell; silently ignores out-of-bounds coordinates so views
    /// can draw against small viewports without clipping math everywhere.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = cell;
        }
    }

    /// Fill a rectangle with one character and style.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, style.into_cell(ch));
            }
        }
    }

    /// Write a string horizontally starting at (x, y), clipped to the right
    /// edge.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: CellStyle) {
        for (i, ch) in text.chars().enumerate() {
            self.set(x + i as u16, y, style.into_cell(ch));
        }
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_roundtrip_and_bounds() {
        let mut fb = FrameBuffer::new(4, 3);
        let cell = CellStyle::default().into_cell('X');
        fb.set(1, 2, cell);
        assert_eq!(fb.get(1, 2), Some(cell));
        assert_eq!(fb.get(4, 0), None);

        // Out-of-bounds writes are ignored, not panics.
        fb.set(100, 100, cell);
    }

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(5, 1);
        fb.put_str(3, 0, "abcdef", CellStyle::default());
        assert_eq!(fb.get(3, 0).unwrap().ch, 'a');
        assert_eq!(fb.get(4, 0).unwrap().ch, 'b');
    }

    #[test]
    fn resize_drops_contents() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set(0, 0, CellStyle::default().into_cell('Z'));
        fb.resize(3, 3);
        assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
        assert_eq!(fb.width(), 3);
    }
}
