/// Game-logic functions.
///
/// Every function here works on a `GameState` borrowed from the main loop
/// and on an explicit elapsed-time tick (`now`, milliseconds since the game
/// started).  Nothing reads a clock or the terminal, so a test can drive the
/// whole simulation frame by frame.  Randomness is seeded from the frame
/// counter and therefore reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::consts::*;
use crate::entities::{Enemy, GameEvent, GameState, Ship, ShipPhase, Wave};
use crate::pools::{EnemyPool, ExplosionPool, ShotPool};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the state for a fresh level.  The ship starts in its intro phase
/// and the first wave is due `WAVE_INTERVAL_MS` after `now`.
pub fn init_state(now: u64) -> GameState {
    GameState {
        ship: Ship::spawn(now),
        shots: ShotPool::default(),
        enemies: EnemyPool::default(),
        explosions: ExplosionPool::default(),
        wave: Wave {
            started_at: now,
            next: 0,
            spawn_y: START_Y,
        },
        score: 0,
        max_score: 0,
        frame: 0,
    }
}

// ── Per-frame step ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
///
/// The frame counter is not touched; the main loop advances it after the
/// frame has been rendered.
pub fn tick(state: &mut GameState, now: u64) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // ── 1. Ship motion / intro phases ────────────────────────────────────────
    move_ship(&mut state.ship, now);

    // ── 2. Fire ──────────────────────────────────────────────────────────────
    let fresh = fire(state, &mut events);

    // ── 3. Projectiles (movement + hits) ─────────────────────────────────────
    advance_shots(state, fresh, &mut events);

    // ── 4. Wave spawning ─────────────────────────────────────────────────────
    spawn_wave(state, now);

    // ── 5. Enemies ───────────────────────────────────────────────────────────
    advance_enemies(&mut state.enemies);

    // ── 6. Player ↔ enemy ────────────────────────────────────────────────────
    if let Some(event) = check_player_collision(state, now) {
        events.push(event);
    }

    // ── 7. Explosions ────────────────────────────────────────────────────────
    state.explosions.age();

    // ── 8. Score bookkeeping ─────────────────────────────────────────────────
    state.max_score = state.max_score.max(state.score);

    events
}

/// Integrate the ship for one frame and roll the intro phases forward.
pub fn move_ship(ship: &mut Ship, now: u64) {
    let elapsed = now.saturating_sub(ship.phase_started_at);

    match ship.phase {
        ShipPhase::Intro => {
            // Auto-advance; player input is ignored and the playfield clamp
            // does not apply while the ship is still entering from the left.
            ship.x += SHIP_SPEED;
            if elapsed >= INTRO_MS {
                ship.phase = ShipPhase::IntroFree;
                ship.phase_started_at = now;
            }
            return;
        }
        ShipPhase::IntroFree if elapsed >= INTRO_FREE_MS => {
            ship.phase = ShipPhase::Playing;
            ship.phase_started_at = now;
        }
        _ => {}
    }

    let intents = ship.intents;
    if intents.up {
        ship.y -= SHIP_SPEED;
    }
    if intents.down {
        ship.y += SHIP_SPEED;
    }
    if intents.left {
        ship.x -= SHIP_SPEED;
    }
    if intents.right {
        ship.x += SHIP_SPEED;
    }

    ship.x = ship.x.clamp(0, SCREEN_WIDTH - SHIP_SIZE);
    ship.y = ship.y.clamp(0, SCREEN_HEIGHT - SHIP_SIZE);
}

/// Consume the fire intent.  Returns the projectile slot activated this
/// frame, if any.  A press during the locked intro is swallowed.
pub fn fire(state: &mut GameState, events: &mut Vec<GameEvent>) -> Option<usize> {
    if !state.ship.intents.fire {
        return None;
    }
    state.ship.intents.fire = false;

    if state.ship.is_locked() {
        return None;
    }

    let nose_x = state.ship.x + SHIP_SIZE / 2;
    let slot = state.shots.fire(nose_x, state.ship.y);
    events.push(GameEvent::ShotFired);
    Some(slot)
}

/// Move every live projectile right and resolve projectile ↔ enemy hits.
///
/// `fresh` is the slot fired during this frame: it stays at the ship's nose
/// until the next frame.
pub fn advance_shots(state: &mut GameState, fresh: Option<usize>, events: &mut Vec<GameEvent>) {
    for (index, shot) in state.shots.slots_mut().iter_mut().enumerate() {
        if !shot.alive || fresh == Some(index) {
            continue;
        }

        shot.x += SHOT_SPEED;
        if shot.x >= SCREEN_WIDTH {
            shot.alive = false;
            continue;
        }

        let shot_box = shot.bounds();
        let hit = state
            .enemies
            .slots_mut()
            .iter_mut()
            .find(|e| e.alive && e.bounds().intersects(&shot_box));

        if let Some(enemy) = hit {
            shot.alive = false;
            let (x, y) = (enemy.x, enemy.y);
            bury(enemy);
            spawn_explosion(&mut state.explosions, x, y);
            state.score += KILL_BONUS;
            log::debug!("enemy destroyed at ({}, {}), score {}", x, y, state.score);
            events.push(GameEvent::EnemyDestroyed { x, y });
        }
    }
}

/// Feed the next enemy of the current wave into the pool when the wave
/// timer has elapsed and the previous enemy has made room.
pub fn spawn_wave(state: &mut GameState, now: u64) {
    let wave = &mut state.wave;
    if now.saturating_sub(wave.started_at) <= WAVE_INTERVAL_MS {
        return;
    }

    let room = match wave.next.checked_sub(1) {
        None => true,
        Some(prev) => state
            .enemies
            .get(prev)
            .map_or(true, |e| e.x < SCREEN_WIDTH - ENEMY_SPACING),
    };
    if !room {
        return;
    }

    if wave.next == 0 {
        wave.spawn_y = wave_height(state.frame);
        log::debug!("wave starting at height {}", wave.spawn_y);
    }

    state.enemies.place(
        wave.next,
        Enemy {
            x: SCREEN_WIDTH,
            y: wave.spawn_y + bob(SCREEN_WIDTH),
            origin_y: wave.spawn_y,
            alive: true,
        },
    );
    wave.next += 1;

    // Pool fully populated: re-arm the timer for the next wave.
    if wave.next == MAX_ENEMIES {
        wave.next = 0;
        wave.started_at = now;
    }
}

/// Shared spawn height for a wave, derived from the frame counter.
pub fn wave_height(frame: u64) -> i32 {
    StdRng::seed_from_u64(frame).gen_range(ENEMY_MIN_Y..=ENEMY_MAX_Y)
}

/// Vertical offset of an enemy at horizontal position `x`.
pub fn bob(x: i32) -> i32 {
    ((x as f32 * ENEMY_BOB_FREQUENCY).sin() * ENEMY_BOB_AMPLITUDE as f32).round() as i32
}

/// Move live enemies left along their bob curve; retire those past the
/// left edge.
pub fn advance_enemies(enemies: &mut EnemyPool) {
    for enemy in enemies.slots_mut().iter_mut().filter(|e| e.alive) {
        if enemy.x > 0 {
            enemy.x -= ENEMY_SPEED;
            enemy.y = enemy.origin_y + bob(enemy.x);
        } else {
            enemy.alive = false;
        }
    }
}

/// Ship ↔ enemy test.  On contact the enemy dies, the score resets, and
/// the ship restarts its intro from off-screen.
pub fn check_player_collision(state: &mut GameState, now: u64) -> Option<GameEvent> {
    if state.ship.is_invulnerable() {
        return None;
    }

    let ship_box = state.ship.bounds();
    let enemy = state
        .enemies
        .slots_mut()
        .iter_mut()
        .find(|e| e.alive && e.bounds().intersects(&ship_box))?;
    bury(enemy);

    let ship = &mut state.ship;
    let (x, y) = (ship.x, ship.y);
    spawn_explosion(&mut state.explosions, x, y);

    state.max_score = state.max_score.max(state.score);
    state.score = 0;

    ship.phase = ShipPhase::Intro;
    ship.phase_started_at = now;
    ship.x = RESPAWN_X;

    log::info!("ship destroyed at ({}, {}); best score {}", x, y, state.max_score);
    Some(GameEvent::PlayerDestroyed { x, y })
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn bury(enemy: &mut Enemy) {
    enemy.alive = false;
    enemy.x = ENEMY_GRAVEYARD_X;
}

fn spawn_explosion(explosions: &mut ExplosionPool, x: i32, y: i32) {
    if explosions.spawn(x, y).is_none() {
        log::warn!("explosion pool exhausted; dropping explosion at ({}, {})", x, y);
    }
}
