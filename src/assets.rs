/// Image assets.
///
/// Sprites are decoded once at startup into RGBA textures that the renderer
/// samples from.  File names are fixed; there is no asset pipeline.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::{GameError, Result};

/// Directory every asset is loaded from, relative to the working directory.
pub const ASSET_DIR: &str = "assets";

pub const BACKGROUND_FAR: &str = "background_far.png";
pub const BACKGROUND_NEAR: &str = "background_near.png";
pub const SHIP: &str = "ship.png";
pub const SHOT: &str = "shot.png";
pub const ENEMY: &str = "enemy.png";
/// Horizontal strip of `EXPLOSION_COLUMNS` animation frames.
pub const EXPLOSION: &str = "explosion.png";
/// Glyphs "0"–"9" tiled evenly across the width.
pub const DIGITS: &str = "digits.png";

pub const MUSIC: &str = "music.wav";
pub const LASER_FX: &str = "laser.wav";
pub const EXPLOSION_FX: &str = "explosion.wav";

/// Resolve an asset name and make sure the file is there.
pub fn asset_path(dir: &Path, name: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if path.is_file() {
        Ok(path)
    } else {
        Err(GameError::MissingAsset(path))
    }
}

// ── Textures ──────────────────────────────────────────────────────────────────

/// A decoded RGBA image.
#[derive(Clone, Debug)]
pub struct Texture {
    pixels: RgbaImage,
}

impl Texture {
    pub fn from_image(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn load(path: &Path) -> Result<Self> {
        log::debug!("loading image {}", path.display());
        let pixels = image::open(path)
            .map_err(|source| GameError::Image {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();
        log::info!(
            "loaded {} ({}x{})",
            path.display(),
            pixels.width(),
            pixels.height()
        );
        Ok(Self { pixels })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// RGBA value at a texel, or `None` outside the image.
    pub fn texel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixels.get_pixel_checked(x, y).map(|p| p.0)
    }
}

/// Every sprite the renderer needs, held for the lifetime of the program.
#[derive(Clone, Debug)]
pub struct Textures {
    pub background_far: Texture,
    pub background_near: Texture,
    pub ship: Texture,
    pub shot: Texture,
    pub enemy: Texture,
    pub explosion: Texture,
    pub digits: Texture,
}

impl Textures {
    /// Load all sprites from `dir`, failing on the first missing or
    /// undecodable file.
    pub fn load(dir: &Path) -> Result<Self> {
        let load = |name: &str| Texture::load(&asset_path(dir, name)?);
        Ok(Self {
            background_far: load(BACKGROUND_FAR)?,
            background_near: load(BACKGROUND_NEAR)?,
            ship: load(SHIP)?,
            shot: load(SHOT)?,
            enemy: load(ENEMY)?,
            explosion: load(EXPLOSION)?,
            digits: load(DIGITS)?,
        })
    }
}
