/// Rendering layer: all terminal output lives here.
///
/// The renderer composes each frame into a `Canvas` in which one terminal
/// cell holds two stacked pixels (drawn as `▀`, foreground = top pixel,
/// background = bottom pixel), then presents it with crossterm.  No game
/// logic is performed; this module only translates state into pixels.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};

use crate::assets::{Texture, Textures};
use crate::consts::*;
use crate::entities::{GameState, Rect};

pub type Rgb = [u8; 3];

const C_CLEAR: Rgb = [0, 0, 0];
/// Texels below this alpha are treated as transparent.
const ALPHA_CUTOFF: u8 = 128;

// ── Canvas ────────────────────────────────────────────────────────────────────

/// Half-block framebuffer sized to the terminal.
#[derive(Clone, Debug)]
pub struct Canvas {
    cols: u16,
    rows: u16,
    pixels: Vec<Rgb>,
}

impl Canvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        let mut canvas = Self {
            cols,
            rows,
            pixels: Vec::new(),
        };
        canvas.clear();
        canvas
    }

    /// Width in pixels (one per column).
    pub fn width(&self) -> usize {
        self.cols as usize
    }

    /// Height in pixels (two per row).
    pub fn height(&self) -> usize {
        self.rows as usize * 2
    }

    pub fn clear(&mut self) {
        self.pixels.clear();
        self.pixels.resize(self.width() * self.height(), C_CLEAR);
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.pixels[y * self.width() + x])
    }

    /// Draw the `src` region of `texture` stretched over `dst`, a box in
    /// playfield coordinates.  Nearest-neighbour, sampled at pixel centres.
    pub fn blit(&mut self, texture: &Texture, src: Rect, dst: Rect) {
        if dst.w <= 0 || dst.h <= 0 || src.w <= 0 || src.h <= 0 {
            return;
        }
        let sx = self.width() as f32 / SCREEN_WIDTH as f32;
        let sy = self.height() as f32 / SCREEN_HEIGHT as f32;

        let x0 = ((dst.x as f32 * sx).floor() as i64).max(0);
        let x1 = (((dst.x + dst.w) as f32 * sx).ceil() as i64).min(self.width() as i64);
        let y0 = ((dst.y as f32 * sy).floor() as i64).max(0);
        let y1 = (((dst.y + dst.h) as f32 * sy).ceil() as i64).min(self.height() as i64);

        for cy in y0..y1 {
            let py = (cy as f32 + 0.5) / sy - dst.y as f32;
            if py < 0.0 || py >= dst.h as f32 {
                continue;
            }
            let v = src.y + (py * src.h as f32 / dst.h as f32) as i32;

            for cx in x0..x1 {
                let px = (cx as f32 + 0.5) / sx - dst.x as f32;
                if px < 0.0 || px >= dst.w as f32 {
                    continue;
                }
                let u = src.x + (px * src.w as f32 / dst.w as f32) as i32;
                if u < 0 || v < 0 {
                    continue;
                }
                if let Some([r, g, b, a]) = texture.texel(u as u32, v as u32) {
                    if a >= ALPHA_CUTOFF {
                        let index = cy as usize * self.width() + cx as usize;
                        self.pixels[index] = [r, g, b];
                    }
                }
            }
        }
    }

    /// Write the whole canvas to the terminal, changing colours only when
    /// they differ from the previous cell.
    pub fn present<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let mut fg: Option<Rgb> = None;
        let mut bg: Option<Rgb> = None;

        for row in 0..self.rows {
            out.queue(cursor::MoveTo(0, row))?;
            let top_row = row as usize * 2;
            for col in 0..self.width() {
                let top = self.pixels[top_row * self.width() + col];
                let bottom = self.pixels[(top_row + 1) * self.width() + col];
                if fg != Some(top) {
                    out.queue(style::SetForegroundColor(rgb(top)))?;
                    fg = Some(top);
                }
                if bg != Some(bottom) {
                    out.queue(style::SetBackgroundColor(rgb(bottom)))?;
                    bg = Some(bottom);
                }
                out.queue(Print('▀'))?;
            }
        }

        out.queue(style::ResetColor)?;
        out.flush()?;
        Ok(())
    }
}

fn rgb([r, g, b]: Rgb) -> Color {
    Color::Rgb { r, g, b }
}

// ── Frame layout helpers ──────────────────────────────────────────────────────

/// Full-image source rectangle.
pub fn whole(texture: &Texture) -> Rect {
    Rect::new(0, 0, texture.width() as i32, texture.height() as i32)
}

/// On-screen width of a background layer whose height fills the playfield.
pub fn layer_width(texture: &Texture) -> i32 {
    let h = texture.height().max(1) as i64;
    ((texture.width() as i64 * SCREEN_HEIGHT as i64) / h).max(1) as i32
}

/// Scroll offset of a layer moving `speed` pixels per frame, wrapped at the
/// layer width.
pub fn layer_offset(frame: u64, speed: u64, width: i32) -> i32 {
    (frame.wrapping_mul(speed) % width.max(1) as u64) as i32
}

/// The ship blinks while invulnerable: drawn on even frames only.
pub fn ship_visible(state: &GameState) -> bool {
    !state.ship.is_invulnerable() || state.frame % 2 == 0
}

/// Animation column of an explosion with `frames_left` to live.
pub fn explosion_column(frames_left: u32) -> u32 {
    let age = EXPLOSION_LIFETIME.saturating_sub(frames_left);
    (age * EXPLOSION_COLUMNS / EXPLOSION_LIFETIME).min(EXPLOSION_COLUMNS - 1)
}

/// Source rectangle of one frame in a horizontal animation strip.
pub fn strip_cell(strip: &Texture, index: u32, count: u32) -> Rect {
    let w = (strip.width() / count.max(1)) as i32;
    Rect::new(index as i32 * w, 0, w, strip.height() as i32)
}

/// Decimal digits of `n`, most significant first.
pub fn digits(n: u32) -> Vec<u32> {
    n.to_string()
        .bytes()
        .map(|b| u32::from(b - b'0'))
        .collect()
}

// ── Renderer ──────────────────────────────────────────────────────────────────

pub struct Renderer {
    canvas: Canvas,
}

impl Renderer {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            canvas: Canvas::new(cols, rows),
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        log::debug!("terminal resized to {}x{}", cols, rows);
        self.canvas = Canvas::new(cols, rows);
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Render one complete frame and present it.
    pub fn render<W: Write>(
        &mut self,
        out: &mut W,
        state: &GameState,
        textures: &Textures,
    ) -> std::io::Result<()> {
        self.draw(state, textures);
        self.canvas.present(out)
    }

    /// Compose the frame into the canvas without presenting it.
    pub fn draw(&mut self, state: &GameState, textures: &Textures) {
        self.canvas.clear();

        self.draw_layer(&textures.background_far, state.frame, FAR_SCROLL_SPEED);
        self.draw_layer(&textures.background_near, state.frame, NEAR_SCROLL_SPEED);

        if ship_visible(state) {
            let ship = &textures.ship;
            self.canvas.blit(ship, whole(ship), state.ship.bounds());
        }

        for shot in state.shots.live() {
            self.canvas.blit(&textures.shot, whole(&textures.shot), shot.bounds());
        }
        for enemy in state.enemies.live() {
            self.canvas.blit(&textures.enemy, whole(&textures.enemy), enemy.bounds());
        }
        for explosion in state.explosions.live() {
            let column = explosion_column(explosion.frames_left);
            let src = strip_cell(&textures.explosion, column, EXPLOSION_COLUMNS);
            self.canvas.blit(&textures.explosion, src, explosion.bounds());
        }

        self.draw_number(&textures.digits, state.score, SCORE_MARGIN);
        let best = digits(state.max_score).len() as i32;
        self.draw_number(
            &textures.digits,
            state.max_score,
            SCREEN_WIDTH - SCORE_MARGIN - best * DIGIT_WIDTH,
        );
    }

    /// Two side-by-side copies of a layer, shifted left by its offset.
    fn draw_layer(&mut self, texture: &Texture, frame: u64, speed: u64) {
        let w = layer_width(texture);
        let x = -layer_offset(frame, speed, w);
        self.canvas.blit(texture, whole(texture), Rect::new(x, 0, w, SCREEN_HEIGHT));
        self.canvas.blit(texture, whole(texture), Rect::new(x + w, 0, w, SCREEN_HEIGHT));
    }

    fn draw_number(&mut self, strip: &Texture, n: u32, x: i32) {
        for (i, digit) in digits(n).into_iter().enumerate() {
            let dst = Rect::new(x + i as i32 * DIGIT_WIDTH, SCORE_MARGIN, DIGIT_WIDTH, DIGIT_HEIGHT);
            self.canvas.blit(strip, strip_cell(strip, digit, 10), dst);
        }
    }
}
