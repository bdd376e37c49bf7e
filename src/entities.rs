/// All game entity types: pure data, next to no logic.

use crate::consts::{ENEMY_SIZE, EXPLOSION_SIZE, RESPAWN_X, SHIP_SIZE, SHOT_SIZE, START_Y};
use crate::pools::{EnemyPool, ExplosionPool, ShotPool};

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned box in playfield pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict overlap: boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

/// The five player intents sampled from the keyboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Intents {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Latched on a key press, consumed by the next simulation step.
    pub fire: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShipPhase {
    /// Ship flies in on its own; no control, no firing, invulnerable.
    Intro,
    /// Player has control but the ship is still invulnerable.
    IntroFree,
    Playing,
}

#[derive(Clone, Debug)]
pub struct Ship {
    pub x: i32,
    pub y: i32,
    pub phase: ShipPhase,
    /// Elapsed-time tick (ms) when `phase` was entered.
    pub phase_started_at: u64,
    pub intents: Intents,
}

impl Ship {
    /// A ship entering the level from the left edge.
    pub fn spawn(now: u64) -> Self {
        Ship {
            x: RESPAWN_X,
            y: START_Y,
            phase: ShipPhase::Intro,
            phase_started_at: now,
            intents: Intents::default(),
        }
    }

    pub fn is_invulnerable(&self) -> bool {
        self.phase != ShipPhase::Playing
    }

    pub fn is_locked(&self) -> bool {
        self.phase == ShipPhase::Intro
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, SHIP_SIZE, SHIP_SIZE)
    }
}

// ── Pooled entities ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Projectile {
    pub x: i32,
    pub y: i32,
    pub alive: bool,
}

impl Projectile {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, SHOT_SIZE, SHOT_SIZE)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    /// Wave height the sinusoidal bob oscillates around.
    pub origin_y: i32,
    pub alive: bool,
}

impl Enemy {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, ENEMY_SIZE, ENEMY_SIZE)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Explosion {
    pub x: i32,
    pub y: i32,
    pub alive: bool,
    /// Remaining frames to display.
    pub frames_left: u32,
}

impl Explosion {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, EXPLOSION_SIZE, EXPLOSION_SIZE)
    }
}

// ── Waves ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wave {
    /// Tick (ms) the wave timer was last armed.
    pub started_at: u64,
    /// Enemy slot the next spawn goes into; 0 means the wave has not begun.
    pub next: usize,
    /// Height shared by every enemy of the current wave.
    pub spawn_y: i32,
}

// ── Events ────────────────────────────────────────────────────────────────────

/// Things that happened during a simulation step that the outer loop
/// reacts to (sound effects, logging).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    ShotFired,
    EnemyDestroyed { x: i32, y: i32 },
    PlayerDestroyed { x: i32, y: i32 },
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state, owned by the main loop and lent out by reference
/// to the input sampler, the simulation step, and the renderer.
#[derive(Clone, Debug)]
pub struct GameState {
    pub ship: Ship,
    pub shots: ShotPool,
    pub enemies: EnemyPool,
    pub explosions: ExplosionPool,
    pub wave: Wave,
    pub score: u32,
    /// Best score of this process; survives deaths.
    pub max_score: u32,
    /// Displayed-frame counter, advanced by the main loop after each render.
    pub frame: u64,
}
