//! Asset categories carried by the export manifest
//!
//! The exporter writes an open-ended `type` string per asset. The known values
//! map onto a closed set of variants; everything else is kept verbatim in
//! `AssetKind::Other` so folder names still match the manifest.

use std::fmt;

/// Category of an exported asset
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Static mesh exported as FBX
    StaticMesh,
    /// Skeletal mesh exported as FBX
    SkeletalMesh,
    /// Animation sequence exported as FBX
    Animation,
    /// Material description (JSON) referencing textures
    Material,
    /// Texture image
    Texture,
    /// Any type string the tool has no dedicated handling for
    Other(String),
}

/// Row of the per-kind lookup table
struct KindEntry {
    type_name: &'static str,
    icon: &'static str,
    texture: bool,
}

const DEFAULT_ICON: &str = "DefaultAsset Icon";

impl AssetKind {
    /// Parse a manifest `type` string (exact, case-sensitive)
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "StaticMesh" => Self::StaticMesh,
            "SkeletalMesh" => Self::SkeletalMesh,
            "Animation" => Self::Animation,
            "Material" => Self::Material,
            "Texture" => Self::Texture,
            other => Self::Other(other.to_string()),
        }
    }

    fn entry(&self) -> Option<KindEntry> {
        let entry = match self {
            Self::StaticMesh => KindEntry {
                type_name: "StaticMesh",
                icon: "MeshFilter Icon",
                texture: false,
            },
            Self::SkeletalMesh => KindEntry {
                type_name: "SkeletalMesh",
                icon: "MeshFilter Icon",
                texture: false,
            },
            Self::Animation => KindEntry {
                type_name: "Animation",
                icon: "AnimationClip Icon",
                texture: false,
            },
            Self::Material => KindEntry {
                type_name: "Material",
                icon: "Material Icon",
                texture: false,
            },
            Self::Texture => KindEntry {
                type_name: "Texture",
                icon: "Texture2D Icon",
                texture: true,
            },
            Self::Other(_) => return None,
        };
        Some(entry)
    }

    /// Manifest type string for this kind
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Other(raw) => raw,
            known => known.entry().map_or("", |e| e.type_name),
        }
    }

    /// Name of the per-type subfolder under the destination root
    #[must_use]
    pub fn folder_name(&self) -> &str {
        self.as_str()
    }

    /// Host editor icon used when listing assets of this kind
    #[must_use]
    pub fn icon_name(&self) -> &'static str {
        self.entry().map_or(DEFAULT_ICON, |e| e.icon)
    }

    /// Whether the host treats assets of this kind as textures
    #[must_use]
    pub fn is_texture(&self) -> bool {
        self.entry().is_some_and(|e| e.texture)
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for AssetKind {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}
