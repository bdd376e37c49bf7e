use std::fs;

use tempfile::TempDir;

use side_scroller::assets::{EXPLOSION_FX, LASER_FX, MUSIC};
use side_scroller::audio::*;
use side_scroller::entities::GameEvent;
use side_scroller::error::GameError;

#[test]
fn events_map_to_sound_effects() {
    assert_eq!(Sfx::for_event(&GameEvent::ShotFired), Sfx::Laser);
    assert_eq!(
        Sfx::for_event(&GameEvent::EnemyDestroyed { x: 10, y: 20 }),
        Sfx::Explosion
    );
    assert_eq!(
        Sfx::for_event(&GameEvent::PlayerDestroyed { x: 0, y: 0 }),
        Sfx::Explosion
    );
}

#[test]
fn missing_laser_fails_before_any_device_is_opened() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(MUSIC), b"").unwrap();
    fs::write(dir.path().join(EXPLOSION_FX), b"").unwrap();

    match Audio::open(dir.path()) {
        Err(GameError::MissingAsset(path)) => assert_eq!(path, dir.path().join(LASER_FX)),
        Err(other) => panic!("expected MissingAsset, got {:?}", other),
        Ok(_) => panic!("audio opened without {}", LASER_FX),
    }
}

#[test]
fn missing_music_is_reported_first() {
    let dir = TempDir::new().unwrap();

    match Audio::open(dir.path()) {
        Err(GameError::MissingAsset(path)) => assert_eq!(path, dir.path().join(MUSIC)),
        Err(other) => panic!("expected MissingAsset, got {:?}", other),
        Ok(_) => panic!("audio opened from an empty directory"),
    }
}

#[cfg(not(feature = "audio"))]
#[test]
fn muted_build_opens_with_all_files_present() {
    let dir = TempDir::new().unwrap();
    for name in [MUSIC, LASER_FX, EXPLOSION_FX] {
        fs::write(dir.path().join(name), b"").unwrap();
    }
    let audio = Audio::open(dir.path()).unwrap_or_else(|e| panic!("{}", e));
    audio.play(Sfx::Laser);
}
