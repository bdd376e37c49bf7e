/// Music and sound effects.
///
/// The default `audio` feature selects the rodio backend, which plays the
/// looping music track and one-shot effects.  A build without it gets a
/// silent backend.  Both backends check that every sound file exists before
/// anything else, so a missing asset is reported the same way in either
/// build.

use std::path::Path;

use crate::entities::GameEvent;
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sfx {
    Laser,
    Explosion,
}

impl Sfx {
    /// The effect that accompanies a simulation event.
    pub fn for_event(event: &GameEvent) -> Sfx {
        match event {
            GameEvent::ShotFired => Sfx::Laser,
            GameEvent::EnemyDestroyed { .. } | GameEvent::PlayerDestroyed { .. } => Sfx::Explosion,
        }
    }
}

/// Open audio output plus the decoded sounds.  Dropping it stops the music
/// and releases the device.
pub struct Audio {
    backend: backend::Backend,
}

impl Audio {
    /// Load the sounds from `dir` and start the music loop.
    pub fn open(dir: &Path) -> Result<Self> {
        let backend = backend::Backend::open(dir)?;
        Ok(Self { backend })
    }

    /// Fire-and-forget.  Playback problems are logged, never returned.
    pub fn play(&self, sfx: Sfx) {
        self.backend.play(sfx);
    }
}

#[cfg(feature = "audio")]
mod backend {
    use std::fs::File;
    use std::io::BufReader;
    use std::path::Path;

    use rodio::source::Buffered;
    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

    use super::Sfx;
    use crate::assets::{asset_path, EXPLOSION_FX, LASER_FX, MUSIC};
    use crate::error::{GameError, Result};

    type Clip = Buffered<Decoder<BufReader<File>>>;

    pub struct Backend {
        // Must outlive every sink and `play_raw` source.
        _stream: OutputStream,
        handle: OutputStreamHandle,
        _music: Sink,
        laser: Clip,
        explosion: Clip,
    }

    fn decode(path: &Path) -> Result<Decoder<BufReader<File>>> {
        let sound_error = |message: String| GameError::Sound {
            path: path.to_path_buf(),
            message,
        };
        let file = File::open(path).map_err(|e| sound_error(e.to_string()))?;
        Decoder::new(BufReader::new(file)).map_err(|e| sound_error(e.to_string()))
    }

    impl Backend {
        pub fn open(dir: &Path) -> Result<Self> {
            // A missing file is reported before any device is touched.
            let music_path = asset_path(dir, MUSIC)?;
            let laser_path = asset_path(dir, LASER_FX)?;
            let explosion_path = asset_path(dir, EXPLOSION_FX)?;

            let (stream, handle) = OutputStream::try_default()
                .map_err(|e| GameError::AudioDevice(e.to_string()))?;

            let music = Sink::try_new(&handle).map_err(|e| GameError::AudioDevice(e.to_string()))?;
            music.append(decode(&music_path)?.repeat_infinite());
            log::info!("playing {} on loop", music_path.display());

            let laser = decode(&laser_path)?.buffered();
            let explosion = decode(&explosion_path)?.buffered();

            Ok(Self {
                _stream: stream,
                handle,
                _music: music,
                laser,
                explosion,
            })
        }

        pub fn play(&self, sfx: Sfx) {
            let clip = match sfx {
                Sfx::Laser => self.laser.clone(),
                Sfx::Explosion => self.explosion.clone(),
            };
            if let Err(e) = self.handle.play_raw(clip.convert_samples()) {
                log::warn!("could not play {:?}: {}", sfx, e);
            }
        }
    }
}

#[cfg(not(feature = "audio"))]
mod backend {
    use std::path::Path;

    use super::Sfx;
    use crate::assets::{asset_path, EXPLOSION_FX, LASER_FX, MUSIC};
    use crate::error::Result;

    pub struct Backend;

    impl Backend {
        pub fn open(dir: &Path) -> Result<Self> {
            for name in [MUSIC, LASER_FX, EXPLOSION_FX] {
                asset_path(dir, name)?;
            }
            log::info!("built without the `audio` feature; sound is muted");
            Ok(Self)
        }

        pub fn play(&self, sfx: Sfx) {
            log::trace!("muted {:?}", sfx);
        }
    }
}
