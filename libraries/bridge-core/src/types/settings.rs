//! Synchronization and texture import settings

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Default destination root inside the game project
pub const DEFAULT_DESTINATION_ROOT: &str = "Assets/Imported/UnrealAssets";

/// Smallest accepted `max_texture_size`
pub const MIN_TEXTURE_SIZE: u32 = 32;

/// Largest accepted `max_texture_size`
pub const MAX_TEXTURE_SIZE: u32 = 8192;

/// Texture sampling filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Nearest-neighbour sampling
    Point,
    /// Linear filtering within a mip level
    #[default]
    Bilinear,
    /// Linear filtering across mip levels
    Trilinear,
}

/// Texture addressing outside the 0..1 range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WrapMode {
    /// Tile the texture
    #[default]
    Repeat,
    /// Clamp to the edge texel
    Clamp,
    /// Tile with mirroring
    Mirror,
    /// Mirror once, then clamp
    MirrorOnce,
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Point => "point",
            Self::Bilinear => "bilinear",
            Self::Trilinear => "trilinear",
        })
    }
}

impl fmt::Display for WrapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Repeat => "repeat",
            Self::Clamp => "clamp",
            Self::Mirror => "mirror",
            Self::MirrorOnce => "mirror_once",
        })
    }
}

/// Import parameters applied to every texture after a sync
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureSettings {
    /// Generate mip maps on import
    pub generate_mip_maps: bool,

    /// Sampling filter
    pub filter_mode: FilterMode,

    /// Addressing mode
    pub wrap_mode: WrapMode,

    /// Largest dimension the host may import the texture at
    pub max_texture_size: u32,
}

impl Default for TextureSettings {
    fn default() -> Self {
        Self {
            generate_mip_maps: true,
            filter_mode: FilterMode::Bilinear,
            wrap_mode: WrapMode::Repeat,
            max_texture_size: 2048,
        }
    }
}

impl TextureSettings {
    /// Check that `max_texture_size` is within the host's accepted range
    pub fn validate(&self) -> Result<()> {
        if !(MIN_TEXTURE_SIZE..=MAX_TEXTURE_SIZE).contains(&self.max_texture_size) {
            return Err(CoreError::invalid_input(format!(
                "max_texture_size {} is outside {}..={}",
                self.max_texture_size, MIN_TEXTURE_SIZE, MAX_TEXTURE_SIZE
            )));
        }
        Ok(())
    }
}

/// What to do with the `textures` sub-entries of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TextureSubresourcePolicy {
    /// Keep them as descriptive data only
    #[default]
    Ignore,
    /// Copy each referenced texture into the texture folder
    Copy,
}

/// Settings for one synchronization run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfiguration {
    /// Place each asset type in its own subfolder
    pub create_subfolders: bool,

    /// Replace destination files that already exist
    pub overwrite_existing: bool,

    /// Root of the managed destination tree
    pub destination_root: PathBuf,

    /// Texture policy applied after the copy pass
    pub texture_settings: TextureSettings,

    /// Handling of per-asset texture sub-entries
    pub texture_subresources: TextureSubresourcePolicy,
}

impl Default for SyncConfiguration {
    fn default() -> Self {
        Self {
            create_subfolders: true,
            overwrite_existing: true,
            destination_root: PathBuf::from(DEFAULT_DESTINATION_ROOT),
            texture_settings: TextureSettings::default(),
            texture_subresources: TextureSubresourcePolicy::Ignore,
        }
    }
}

impl SyncConfiguration {
    /// Default configuration rooted at `destination_root`
    pub fn with_destination(destination_root: impl Into<PathBuf>) -> Self {
        Self {
            destination_root: destination_root.into(),
            ..Self::default()
        }
    }

    /// Check the configuration before a run
    pub fn validate(&self) -> Result<()> {
        if self.destination_root.as_os_str().is_empty() {
            return Err(CoreError::invalid_input("destination root is empty"));
        }
        self.texture_settings.validate()
    }
}
