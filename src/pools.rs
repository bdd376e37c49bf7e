/// Fixed-capacity entity pools.
///
/// Each pool is an array of tagged slots (`alive` or not) that never grows.
/// The pools differ only in how a slot is chosen for a new entity:
///
/// * `ShotPool`      : cursor ring; the next slot is taken even if still alive.
/// * `EnemyPool`     : sequential fill, one wave at a time (see `compute`).
/// * `ExplosionPool` : first free slot by linear scan; dropped when full.

use crate::consts::{EXPLOSION_LIFETIME, MAX_ENEMIES, MAX_EXPLOSIONS, MAX_SHOTS};
use crate::entities::{Enemy, Explosion, Projectile};

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct ShotPool {
    slots: [Projectile; MAX_SHOTS],
    cursor: usize,
}

impl Default for ShotPool {
    fn default() -> Self {
        Self {
            slots: [Projectile::default(); MAX_SHOTS],
            cursor: 0,
        }
    }
}

impl ShotPool {
    /// Activate the slot under the cursor and advance the cursor.
    /// Returns the slot index that was (re)used.
    pub fn fire(&mut self, x: i32, y: i32) -> usize {
        let index = self.cursor;
        self.slots[index] = Projectile { x, y, alive: true };
        self.cursor = (self.cursor + 1) % MAX_SHOTS;
        index
    }

    /// Index the next `fire` will use.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn slots(&self) -> &[Projectile] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [Projectile] {
        &mut self.slots
    }

    pub fn live(&self) -> impl Iterator<Item = &Projectile> {
        self.slots.iter().filter(|s| s.alive)
    }

    pub fn live_count(&self) -> usize {
        self.live().count()
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct EnemyPool {
    slots: [Enemy; MAX_ENEMIES],
}

impl Default for EnemyPool {
    fn default() -> Self {
        Self {
            slots: [Enemy::default(); MAX_ENEMIES],
        }
    }
}

impl EnemyPool {
    /// Overwrite slot `index` with a live enemy.  The wave cursor decides
    /// the index; this never scans.
    pub fn place(&mut self, index: usize, enemy: Enemy) {
        self.slots[index] = Enemy { alive: true, ..enemy };
    }

    pub fn get(&self, index: usize) -> Option<&Enemy> {
        self.slots.get(index)
    }

    pub fn slots(&self) -> &[Enemy] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [Enemy] {
        &mut self.slots
    }

    pub fn live(&self) -> impl Iterator<Item = &Enemy> {
        self.slots.iter().filter(|e| e.alive)
    }

    pub fn live_count(&self) -> usize {
        self.live().count()
    }
}

// ── Explosions ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct ExplosionPool {
    slots: [Explosion; MAX_EXPLOSIONS],
}

impl Default for ExplosionPool {
    fn default() -> Self {
        Self {
            slots: [Explosion::default(); MAX_EXPLOSIONS],
        }
    }
}

impl ExplosionPool {
    /// Claim the first dead slot.  Returns `None` (and spawns nothing) when
    /// every slot is busy.
    pub fn spawn(&mut self, x: i32, y: i32) -> Option<usize> {
        let index = self.slots.iter().position(|e| !e.alive)?;
        self.slots[index] = Explosion {
            x,
            y,
            alive: true,
            frames_left: EXPLOSION_LIFETIME,
        };
        Some(index)
    }

    /// Age every live explosion by one frame.
    pub fn age(&mut self) {
        for explosion in self.slots.iter_mut().filter(|e| e.alive) {
            explosion.frames_left = explosion.frames_left.saturating_sub(1);
            if explosion.frames_left == 0 {
                explosion.alive = false;
            }
        }
    }

    pub fn slots(&self) -> &[Explosion] {
        &self.slots
    }

    pub fn live(&self) -> impl Iterator<Item = &Explosion> {
        self.slots.iter().filter(|e| e.alive)
    }

    pub fn live_count(&self) -> usize {
        self.live().count()
    }
}
