/// Fixed tuning values.  All positions and sizes are logical playfield
/// pixels; the renderer scales the playfield to the terminal.

// ── Playfield ─────────────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: i32 = 1024;
pub const SCREEN_HEIGHT: i32 = 768;

// ── Ship ──────────────────────────────────────────────────────────────────────

pub const SHIP_SIZE: i32 = 64;
/// Pixels per frame for each active direction intent.
pub const SHIP_SPEED: i32 = 3;
/// Where the ship reappears after a death (fully off the left edge).
pub const RESPAWN_X: i32 = -SHIP_SIZE;
pub const START_Y: i32 = (SCREEN_HEIGHT - SHIP_SIZE) / 2;

/// Locked phase after spawning: the ship flies in by itself.
pub const INTRO_MS: u64 = 1000;
/// Controllable but still invulnerable phase that follows the intro.
pub const INTRO_FREE_MS: u64 = 1500;

// ── Projectiles ───────────────────────────────────────────────────────────────

pub const MAX_SHOTS: usize = 32;
pub const SHOT_SIZE: i32 = 64;
pub const SHOT_SPEED: i32 = 5;

// ── Enemies & waves ───────────────────────────────────────────────────────────

pub const MAX_ENEMIES: usize = 16;
pub const ENEMY_SIZE: i32 = 64;
pub const ENEMY_SPEED: i32 = 2;
/// Distance the previous enemy must cover before the next one enters.
pub const ENEMY_SPACING: i32 = 96;
pub const ENEMY_BOB_AMPLITUDE: i32 = 40;
/// Radians of bob phase per pixel of x.
pub const ENEMY_BOB_FREQUENCY: f32 = 0.02;
/// Killed enemies are parked here so wave spacing checks pass at once.
pub const ENEMY_GRAVEYARD_X: i32 = -2 * ENEMY_SIZE;
pub const ENEMY_MIN_Y: i32 = ENEMY_BOB_AMPLITUDE;
pub const ENEMY_MAX_Y: i32 = SCREEN_HEIGHT - ENEMY_SIZE - ENEMY_BOB_AMPLITUDE;
pub const WAVE_INTERVAL_MS: u64 = 2000;

// ── Explosions ────────────────────────────────────────────────────────────────

pub const MAX_EXPLOSIONS: usize = MAX_ENEMIES + 1;
pub const EXPLOSION_SIZE: i32 = 64;
/// Frames an explosion stays on screen.
pub const EXPLOSION_LIFETIME: u32 = 30;
/// Animation frames laid out horizontally in the explosion strip.
pub const EXPLOSION_COLUMNS: u32 = 6;

// ── Score ─────────────────────────────────────────────────────────────────────

pub const KILL_BONUS: u32 = 100;
pub const DIGIT_WIDTH: i32 = 40;
pub const DIGIT_HEIGHT: i32 = 56;
pub const SCORE_MARGIN: i32 = 16;

// ── Background ────────────────────────────────────────────────────────────────

pub const FAR_SCROLL_SPEED: u64 = 1;
pub const NEAR_SCROLL_SPEED: u64 = 5;
