//! GameView: maps an engine snapshot into a terminal framebuffer.
//!
//! Pure (no I/O), so the full frame layout is unit testable.

use crate::core::snapshot::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Renders the well, side panel, and phase overlays.
pub struct GameView {
    /// Board cell width in terminal columns (2 compensates for glyph aspect
    /// ratio).
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2, cell_h: 1 }
    }
}

/// Display color for a piece kind.
fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(34, 211, 238),  // cyan
        PieceKind::O => Rgb::new(250, 204, 21),  // yellow
        PieceKind::T => Rgb::new(192, 132, 252), // purple
        PieceKind::S => Rgb::new(74, 222, 128),  // green
        PieceKind::Z => Rgb::new(248, 113, 113), // red
        PieceKind::J => Rgb::new(96, 165, 250),  // blue
        PieceKind::L => Rgb::new(251, 146, 60),  // orange
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render one frame into an existing framebuffer. Callers reuse the
    /// framebuffer across frames; it is resized to the viewport here.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        high_score: u32,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        // Well on the left, panel to its right, both centered as a block.
        let panel_w: u16 = 20;
        let total_w = frame_w + 1 + panel_w;
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let well_bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(24, 24, 32),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', well_bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells.
        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                if let Some(kind) = snap.board[y][x] {
                    self.draw_board_cell(fb, start_x, start_y, x as u16, y as u16, kind);
                }
            }
        }

        // Active piece overlay (hidden once the game is over, like the
        // original renderer).
        if snap.phase != Phase::Over {
            if let Some(active) = &snap.active {
                for (px, py) in active.shape.filled().map(|(dx, dy)| {
                    (active.x + dx, active.y + dy)
                }) {
                    if px >= 0 && py >= 0 {
                        self.draw_board_cell(
                            fb,
                            start_x,
                            start_y,
                            px as u16,
                            py as u16,
                            active.kind,
                        );
                    }
                }
            }
        }

        self.draw_panel(snap, high_score, fb, start_x + frame_w + 1, start_y);
        self.draw_overlay(snap, fb, start_x, start_y, frame_w, frame_h);
    }

    /// Convenience wrapper allocating a fresh framebuffer.
    pub fn render(&self, snap: &GameSnapshot, high_score: u32, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, high_score, viewport, &mut fb);
        fb
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let color = kind_color(kind);
        let style = CellStyle {
            fg: Rgb::new(0, 0, 0),
            bg: color,
            bold: false,
            dim: false,
        };
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        for dx in 0..w {
            fb.set(x + dx, y, style.into_cell('─'));
            fb.set(x + dx, y + h - 1, style.into_cell('─'));
        }
        for dy in 0..h {
            fb.set(x, y + dy, style.into_cell('│'));
            fb.set(x + w - 1, y + dy, style.into_cell('│'));
        }
        fb.set(x, y, style.into_cell('┌'));
        fb.set(x + w - 1, y, style.into_cell('┐'));
        fb.set(x, y + h - 1, style.into_cell('└'));
        fb.set(x + w - 1, y + h - 1, style.into_cell('┘'));
    }

    fn draw_panel(
        &self,
        snap: &GameSnapshot,
        high_score: u32,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
    ) {
        let label = CellStyle {
            fg: Rgb::new(160, 160, 170),
            ..CellStyle::default()
        };
        let value = CellStyle {
            bold: true,
            ..CellStyle::default()
        };

        fb.put_str(x, y, "BLOCKFALL", value);
        fb.put_str(x, y + 2, &format!("score {:>8}", snap.score), label);
        fb.put_str(x, y + 3, &format!("level {:>8}", snap.level), label);
        fb.put_str(x, y + 4, &format!("lines {:>8}", snap.lines), label);
        fb.put_str(x, y + 5, &format!("best  {:>8}", high_score), label);

        fb.put_str(x, y + 7, "next", label);
        if let Some(shape) = snap.next_shape() {
            let kind = snap.next.as_ref().map(|piece| piece.kind);
            let style = CellStyle {
                fg: Rgb::new(0, 0, 0),
                bg: kind.map(kind_color).unwrap_or_default(),
                bold: false,
                dim: false,
            };
            for (dx, dy) in shape.filled() {
                let px = x + (dx as u16) * self.cell_w;
                let py = y + 8 + dy as u16;
                fb.fill_rect(px, py, self.cell_w, 1, ' ', style);
            }
        }

        let help = CellStyle {
            fg: Rgb::new(120, 120, 130),
            dim: true,
            ..CellStyle::default()
        };
        fb.put_str(x, y + 12, "←/→ move  ↓ drop", help);
        fb.put_str(x, y + 13, "↑/space rotate", help);
        fb.put_str(x, y + 14, "enter hard drop", help);
        fb.put_str(x, y + 15, "p pause  r restart", help);
        fb.put_str(x, y + 16, "q quit", help);
    }

    fn draw_overlay(
        &self,
        snap: &GameSnapshot,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) {
        let message = match snap.phase {
            Phase::Idle => Some("press s to start"),
            Phase::Paused => Some("PAUSED"),
            Phase::Over => Some("GAME OVER - r restarts"),
            Phase::Running => None,
        };
        let Some(message) = message else {
            return;
        };

        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(60, 20, 70),
            bold: true,
            dim: false,
        };
        let mx = x + w.saturating_sub(message.len() as u16) / 2;
        let my = y + h / 2;
        fb.put_str(mx, my, message, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Game;

    fn frame_chars(fb: &FrameBuffer) -> String {
        let mut out = String::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                out.push(fb.get(x, y).map(|cell| cell.ch).unwrap_or(' '));
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn idle_frame_shows_start_hint() {
        let game = Game::new(1);
        let view = GameView::default();
        let fb = view.render(&game.snapshot(), 0, Viewport::new(80, 24));
        assert!(frame_chars(&fb).contains("press s to start"));
    }

    #[test]
    fn running_frame_shows_stats_and_no_overlay() {
        let mut game = Game::new(1);
        game.start();
        let view = GameView::default();
        let fb = view.render(&game.snapshot(), 1234, Viewport::new(80, 24));

        let text = frame_chars(&fb);
        assert!(text.contains("BLOCKFALL"));
        assert!(text.contains("score"));
        assert!(text.contains("1234"));
        assert!(!text.contains("PAUSED"));
        assert!(!text.contains("GAME OVER"));
    }

    #[test]
    fn paused_frame_shows_overlay() {
        let mut game = Game::new(1);
        game.start();
        game.pause();
        let view = GameView::default();
        let fb = view.render(&game.snapshot(), 0, Viewport::new(80, 24));
        assert!(frame_chars(&fb).contains("PAUSED"));
    }

    #[test]
    fn active_piece_is_painted_inside_the_well() {
        let mut game = Game::new(1);
        game.start();
        let snap = game.snapshot();
        let view = GameView::default();
        let fb = view.render(&snap, 0, Viewport::new(80, 24));

        // Count cells carrying a piece background color anywhere on screen;
        // the active piece alone contributes 4 board cells * cell_w.
        let piece_bgs: Vec<Rgb> = PieceKind::ALL.iter().map(|&k| kind_color(k)).collect();
        let mut painted = 0;
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                let cell = fb.get(x, y).unwrap();
                if piece_bgs.contains(&cell.style.bg) {
                    painted += 1;
                }
            }
        }
        // Active piece (8) plus next preview (8).
        assert_eq!(painted, 16);
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let mut game = Game::new(1);
        game.start();
        let view = GameView::default();
        let _ = view.render(&game.snapshot(), 0, Viewport::new(10, 5));
    }
}
