//! Texture policy handed to the host asset database

use super::{AssetKind, TextureSettings};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Which assets get texture settings, and which settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TexturePolicy {
    /// Only assets under this root qualify
    pub root: PathBuf,

    /// Settings every qualifying texture must carry
    pub settings: TextureSettings,
}

impl TexturePolicy {
    /// Create a policy for `root`
    pub fn new(root: impl Into<PathBuf>, settings: TextureSettings) -> Self {
        Self {
            root: root.into(),
            settings,
        }
    }

    /// Whether an asset at `path`, recognized by the host as `kind`, qualifies
    #[must_use]
    pub fn qualifies(&self, path: &Path, kind: &AssetKind) -> bool {
        kind.is_texture() && path.starts_with(&self.root)
    }
}

/// Result of a texture policy pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyOutcome {
    /// Textures found under the root
    pub matched: usize,

    /// Textures whose settings were actually changed
    pub reconfigured: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualifies_requires_texture_under_root() {
        let policy = TexturePolicy::new("/project/Assets/Imported", TextureSettings::default());

        assert!(policy.qualifies(Path::new("/project/Assets/Imported/Texture/wall.png"), &AssetKind::Texture));
        assert!(!policy.qualifies(Path::new("/project/Assets/Imported/StaticMesh/chair.fbx"), &AssetKind::StaticMesh));
        assert!(!policy.qualifies(Path::new("/project/Assets/Other/wall.png"), &AssetKind::Texture));
    }

    #[test]
    fn test_root_match_is_component_wise() {
        let policy = TexturePolicy::new("/project/Assets/Imported", TextureSettings::default());
        assert!(!policy.qualifies(Path::new("/project/Assets/ImportedExtra/wall.png"), &AssetKind::Texture));
    }
}
