//! Filesystem-backed asset host
//!
//! `SidecarHost` plays the role of the game engine's asset database for a plain
//! directory tree. Import metadata for every file and folder lives in a JSON
//! sidecar next to it (`wall.png` -> `wall.png.meta`), the same layout the
//! engine uses for its own `.meta` files.

use bridge_core::{AssetHost, AssetKind, CoreError, PolicyOutcome, TexturePolicy, TextureSettings};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Extension of metadata sidecars
pub const META_EXTENSION: &str = "meta";

/// Image extensions the host imports as textures
const TEXTURE_EXTENSIONS: &[&str] = &[
    "png", "tga", "jpg", "jpeg", "bmp", "tif", "tiff", "psd", "exr", "hdr", "gif",
];

/// Metadata stored in a sidecar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetMetadata {
    /// Kind the host recognized the file as ("Folder" for directories)
    pub kind: String,

    /// Texture import settings, once the policy has been applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<TextureSettings>,
}

impl AssetMetadata {
    fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            texture: None,
        }
    }
}

/// Asset host that tracks a directory tree through `.meta` sidecars
#[derive(Debug)]
pub struct SidecarHost {
    root: PathBuf,
    index: BTreeMap<PathBuf, AssetKind>,
}

impl SidecarHost {
    /// Create a host tracking `root`; call `refresh_index` to populate it
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            index: BTreeMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Indexed files and the kind they were recognized as
    pub fn indexed(&self) -> impl Iterator<Item = (&Path, &AssetKind)> {
        self.index.iter().map(|(p, k)| (p.as_path(), k))
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Sidecar location for `path`
    pub fn metadata_path(path: &Path) -> PathBuf {
        let mut name = OsString::from(path.as_os_str());
        name.push(".");
        name.push(META_EXTENSION);
        PathBuf::from(name)
    }

    /// Read the sidecar of `path`; a missing or unreadable sidecar is `None`
    pub fn read_metadata(path: &Path) -> Option<AssetMetadata> {
        let meta_path = Self::metadata_path(path);
        let json = fs::read_to_string(&meta_path).ok()?;

        match serde_json::from_str(&json) {
            Ok(meta) => Some(meta),
            Err(e) => {
                warn!("Ignoring corrupt metadata {}: {}", meta_path.display(), e);
                None
            }
        }
    }

    fn write_metadata(path: &Path, meta: &AssetMetadata) -> bridge_core::Result<()> {
        let json = serde_json::to_string_pretty(meta)?;
        fs::write(Self::metadata_path(path), json)?;
        Ok(())
    }
}

/// Kind the host assigns to a file
///
/// Textures are recognized by extension. FBX and JSON files are told apart by
/// the exporter's file name prefixes (`SK_`, `ANIM_`, `MAT_`).
pub fn recognize_kind(path: &Path) -> AssetKind {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

    if TEXTURE_EXTENSIONS.contains(&extension.as_str()) {
        return AssetKind::Texture;
    }

    match extension.as_str() {
        "fbx" if file_name.starts_with("SK_") => AssetKind::SkeletalMesh,
        "fbx" if file_name.starts_with("ANIM_") => AssetKind::Animation,
        "fbx" | "obj" => AssetKind::StaticMesh,
        "json" if file_name.starts_with("MAT_") => AssetKind::Material,
        "" => AssetKind::Other("DefaultAsset".to_string()),
        other => AssetKind::Other(other.to_string()),
    }
}

fn is_sidecar(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == META_EXTENSION)
}

impl AssetHost for SidecarHost {
    fn refresh_index(&mut self) -> bridge_core::Result<()> {
        self.index.clear();

        if !self.root.exists() {
            debug!("Host root {} does not exist, index is empty", self.root.display());
            return Ok(());
        }

        let mut created = 0;
        let mut orphans = 0;

        for entry in WalkDir::new(&self.root).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();

            if entry.file_type().is_dir() {
                if !Self::metadata_path(path).exists() {
                    Self::write_metadata(path, &AssetMetadata::new("Folder"))?;
                    created += 1;
                }
                continue;
            }

            if is_sidecar(path) {
                let asset = path.with_extension("");
                if !asset.exists() {
                    fs::remove_file(path)?;
                    orphans += 1;
                }
                continue;
            }

            let kind = recognize_kind(path);
            if !Self::metadata_path(path).exists() {
                Self::write_metadata(path, &AssetMetadata::new(kind.as_str()))?;
                created += 1;
            }
            self.index.insert(path.to_path_buf(), kind);
        }

        info!(
            "Indexed {} assets under {} ({} new metadata, {} orphans removed)",
            self.index.len(),
            self.root.display(),
            created,
            orphans
        );

        Ok(())
    }

    fn reconfigure_textures(&mut self, policy: &TexturePolicy) -> bridge_core::Result<PolicyOutcome> {
        let mut outcome = PolicyOutcome::default();

        for (path, kind) in &self.index {
            if !policy.qualifies(path, kind) {
                continue;
            }
            outcome.matched += 1;

            let mut meta = Self::read_metadata(path).unwrap_or_else(|| AssetMetadata::new(kind.as_str()));
            if meta.texture == Some(policy.settings) {
                continue;
            }

            meta.texture = Some(policy.settings);
            Self::write_metadata(path, &meta)?;
            outcome.reconfigured += 1;
            debug!("Reimported {} with new texture settings", path.display());
        }

        Ok(outcome)
    }

    fn remove_metadata(&mut self, path: &Path) -> bridge_core::Result<()> {
        let meta_path = Self::metadata_path(path);
        match fs::remove_file(&meta_path) {
            Ok(()) => {
                debug!("Removed metadata {}", meta_path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::Io(e)),
        }
    }
}
