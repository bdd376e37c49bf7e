use proptest::prelude::*;

use side_scroller::compute::{advance_shots, init_state};
use side_scroller::consts::*;
use side_scroller::entities::*;
use side_scroller::pools::*;

// ── ShotPool ──────────────────────────────────────────────────────────────────

#[test]
fn shot_pool_wraps_cursor() {
    let mut pool = ShotPool::default();
    for i in 0..MAX_SHOTS {
        assert_eq!(pool.fire(i as i32, 0), i);
    }
    assert_eq!(pool.cursor(), 0);
    assert_eq!(pool.fire(999, 1), 0);
    assert_eq!(pool.slots()[0], Projectile { x: 999, y: 1, alive: true });
}

proptest! {
    /// However many shots were fired before, and whatever state the target
    /// slot is in, the next shot lands at `fired % capacity`.
    #[test]
    fn fire_overwrites_next_sequential_slot(
        fired in 0usize..200,
        killed in proptest::collection::vec(any::<bool>(), MAX_SHOTS),
        x in 0i32..1000,
        y in 0i32..700,
    ) {
        let mut pool = ShotPool::default();
        for i in 0..fired {
            pool.fire(i as i32, 0);
        }
        for (slot, dead) in pool.slots_mut().iter_mut().zip(&killed) {
            if *dead {
                slot.alive = false;
            }
        }

        let expected = fired % MAX_SHOTS;
        prop_assert_eq!(pool.cursor(), expected);
        let slot = pool.fire(x, y);
        prop_assert_eq!(slot, expected);
        prop_assert_eq!(pool.slots()[slot], Projectile { x, y, alive: true });
        prop_assert!(pool.live_count() <= MAX_SHOTS);
    }

    /// Any shot overlapping a stack of enemies takes out exactly one of them.
    #[test]
    fn overlapping_shot_kills_exactly_one_enemy(
        ex in 200i32..800,
        ey in 100i32..600,
        dx in -(SHOT_SIZE - 1)..ENEMY_SIZE,
        dy in -(SHOT_SIZE - 1)..ENEMY_SIZE,
    ) {
        let mut s = init_state(0);
        for slot in 0..2 {
            s.enemies.slots_mut()[slot] = Enemy { x: ex, y: ey, origin_y: ey, alive: true };
        }
        // Placed so the shot overlaps after its move this frame.
        s.shots.slots_mut()[0] = Projectile { x: ex + dx - SHOT_SPEED, y: ey + dy, alive: true };

        let mut events = Vec::new();
        advance_shots(&mut s, None, &mut events);

        prop_assert_eq!(s.enemies.live_count(), 1);
        prop_assert_eq!(s.explosions.live_count(), 1);
        prop_assert_eq!(s.score, KILL_BONUS);
        prop_assert!(!s.shots.slots()[0].alive);
        prop_assert_eq!(events, vec![GameEvent::EnemyDestroyed { x: ex, y: ey }]);
    }
}

// ── EnemyPool ─────────────────────────────────────────────────────────────────

#[test]
fn enemy_pool_place_marks_alive() {
    let mut pool = EnemyPool::default();
    pool.place(3, Enemy { x: 10, y: 20, origin_y: 20, alive: false });
    assert!(pool.get(3).unwrap().alive);
    assert_eq!(pool.live_count(), 1);
    assert!(pool.get(MAX_ENEMIES).is_none());
}

// ── ExplosionPool ─────────────────────────────────────────────────────────────

#[test]
fn explosion_pool_claims_first_free_slot() {
    let mut pool = ExplosionPool::default();
    assert_eq!(pool.spawn(1, 1), Some(0));
    assert_eq!(pool.spawn(2, 2), Some(1));
    assert_eq!(pool.slots()[1].frames_left, EXPLOSION_LIFETIME);
}

#[test]
fn explosion_pool_drops_when_full() {
    let mut pool = ExplosionPool::default();
    for i in 0..MAX_EXPLOSIONS {
        assert_eq!(pool.spawn(i as i32, 0), Some(i));
    }
    assert_eq!(pool.spawn(5, 5), None);
    assert_eq!(pool.live_count(), MAX_EXPLOSIONS);
}

#[test]
fn explosion_pool_reuses_expired_slot() {
    let mut pool = ExplosionPool::default();
    pool.spawn(1, 1);
    for _ in 0..EXPLOSION_LIFETIME {
        pool.age();
    }
    assert_eq!(pool.live_count(), 0);
    pool.spawn(2, 2);
    assert_eq!(pool.spawn(3, 3), Some(1));
    assert_eq!((pool.slots()[0].x, pool.slots()[0].y), (2, 2));
}

#[test]
fn explosion_age_counts_down() {
    let mut pool = ExplosionPool::default();
    pool.spawn(0, 0);
    pool.age();
    pool.age();
    assert_eq!(pool.slots()[0].frames_left, EXPLOSION_LIFETIME - 2);
    assert!(pool.slots()[0].alive);
}
