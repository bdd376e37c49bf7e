use image::{Rgba, RgbaImage};

use side_scroller::assets::{Texture, Textures};
use side_scroller::compute::init_state;
use side_scroller::consts::*;
use side_scroller::display::*;
use side_scroller::entities::*;

const RED: [u8; 4] = [255, 0, 0, 255];
const CLEAR: [u8; 4] = [0, 0, 0, 0];

fn solid(w: u32, h: u32, rgba: [u8; 4]) -> Texture {
    Texture::from_image(RgbaImage::from_pixel(w, h, Rgba(rgba)))
}

/// Everything transparent except the ship.
fn ship_only() -> Textures {
    Textures {
        background_far: solid(4, 3, CLEAR),
        background_near: solid(4, 3, CLEAR),
        ship: solid(8, 8, RED),
        shot: solid(1, 1, CLEAR),
        enemy: solid(1, 1, CLEAR),
        explosion: solid(6, 1, CLEAR),
        digits: solid(10, 1, CLEAR),
    }
}

// ── Canvas ────────────────────────────────────────────────────────────────────

#[test]
fn canvas_has_two_pixels_per_row() {
    let canvas = Canvas::new(64, 24);
    assert_eq!(canvas.width(), 64);
    assert_eq!(canvas.height(), 48);
    assert_eq!(canvas.pixel(0, 47), Some([0, 0, 0]));
    assert_eq!(canvas.pixel(64, 0), None);
}

#[test]
fn blit_scales_playfield_to_canvas() {
    // 64x48 canvas: one canvas pixel per 16 playfield pixels on both axes.
    let mut canvas = Canvas::new(64, 24);
    let tex = solid(8, 8, RED);
    canvas.blit(&tex, whole(&tex), Rect::new(0, 0, 64, 64));

    assert_eq!(canvas.pixel(0, 0), Some([255, 0, 0]));
    assert_eq!(canvas.pixel(3, 3), Some([255, 0, 0]));
    assert_eq!(canvas.pixel(4, 0), Some([0, 0, 0]));
    assert_eq!(canvas.pixel(0, 4), Some([0, 0, 0]));
}

#[test]
fn blit_clips_at_left_edge() {
    let mut canvas = Canvas::new(64, 24);
    let tex = solid(8, 8, RED);
    canvas.blit(&tex, whole(&tex), Rect::new(-32, 0, 64, 64));

    assert_eq!(canvas.pixel(1, 0), Some([255, 0, 0]));
    assert_eq!(canvas.pixel(2, 0), Some([0, 0, 0]));
}

#[test]
fn blit_skips_transparent_texels() {
    let mut canvas = Canvas::new(64, 24);
    let tex = solid(8, 8, [255, 255, 255, 10]);
    canvas.blit(&tex, whole(&tex), Rect::new(0, 0, 64, 64));
    assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0]));
}

#[test]
fn blit_samples_source_rect() {
    let mut img = RgbaImage::from_pixel(2, 1, Rgba(RED));
    img.put_pixel(1, 0, Rgba([0, 0, 255, 255]));
    let tex = Texture::from_image(img);

    let mut canvas = Canvas::new(64, 24);
    canvas.blit(&tex, Rect::new(1, 0, 1, 1), Rect::new(0, 0, 64, 64));
    assert_eq!(canvas.pixel(0, 0), Some([0, 0, 255]));
}

#[test]
fn present_emits_one_half_block_per_cell() {
    let canvas = Canvas::new(4, 2);
    let mut out = Vec::new();
    canvas.present(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches('▀').count(), 8);
}

// ── Layout helpers ────────────────────────────────────────────────────────────

#[test]
fn layer_width_fills_playfield_height() {
    assert_eq!(layer_width(&solid(256, 192, CLEAR)), 1024);
    assert_eq!(layer_width(&solid(100, 768, CLEAR)), 100);
}

#[test]
fn layer_offset_wraps_at_width() {
    assert_eq!(layer_offset(0, NEAR_SCROLL_SPEED, 1024), 0);
    assert_eq!(layer_offset(10, FAR_SCROLL_SPEED, 1024), 10);
    assert_eq!(layer_offset(205, 5, 1024), 1);
}

#[test]
fn explosion_column_follows_age() {
    assert_eq!(explosion_column(EXPLOSION_LIFETIME), 0);
    assert_eq!(explosion_column(EXPLOSION_LIFETIME / 2), EXPLOSION_COLUMNS / 2);
    assert_eq!(explosion_column(1), EXPLOSION_COLUMNS - 1);
    assert_eq!(explosion_column(0), EXPLOSION_COLUMNS - 1);
}

#[test]
fn digits_most_significant_first() {
    assert_eq!(digits(0), vec![0]);
    assert_eq!(digits(1203), vec![1, 2, 0, 3]);
}

#[test]
fn strip_cell_picks_evenly_spaced_glyph() {
    let strip = solid(100, 10, CLEAR);
    assert_eq!(strip_cell(&strip, 3, 10), Rect::new(30, 0, 10, 10));
    assert_eq!(strip_cell(&strip, 0, 10), Rect::new(0, 0, 10, 10));
}

// ── Ship blink ────────────────────────────────────────────────────────────────

#[test]
fn ship_blinks_only_while_invulnerable() {
    let mut s = init_state(0);
    s.frame = 1;
    assert!(!ship_visible(&s));
    s.frame = 2;
    assert!(ship_visible(&s));

    s.ship.phase = ShipPhase::Playing;
    s.frame = 1;
    assert!(ship_visible(&s));
}

#[test]
fn renderer_draws_visible_ship() {
    let mut s = init_state(0);
    s.ship.phase = ShipPhase::Playing;
    s.ship.x = 0;
    s.ship.y = 0;
    s.frame = 1;

    let mut renderer = Renderer::new(64, 24);
    renderer.draw(&s, &ship_only());
    assert_eq!(renderer.canvas().pixel(0, 0), Some([255, 0, 0]));
}

#[test]
fn renderer_hides_ship_on_blink_frame() {
    let mut s = init_state(0);
    s.ship.x = 0;
    s.ship.y = 0;
    s.frame = 1; // still in the intro, odd frame

    let mut renderer = Renderer::new(64, 24);
    renderer.draw(&s, &ship_only());
    assert_eq!(renderer.canvas().pixel(0, 0), Some([0, 0, 0]));
}
