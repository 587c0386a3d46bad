//! Copying report assets into the destination tree
//!
//! Assets are grouped by their manifest type (first-seen order, manifest order
//! inside a group) and copied into per-type folders. A failing asset is counted
//! and reported; it never stops the batch.

use crate::copy;
use crate::{ImportError, Result};
use bridge_core::{
    AssetKind, ExportedAsset, ImportReport, SyncConfiguration, TextureExport,
    TextureSubresourcePolicy,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Outcome of syncing one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum SyncOutcome {
    /// File copied into the destination
    Copied,
    /// Destination already present and overwrite is off, or the source is the
    /// destination file itself
    Skipped,
    /// Source file does not exist
    MissingSource,
    /// Copy failed
    CopyError(String),
}

impl SyncOutcome {
    /// Copied and skipped files count as successes
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Copied | Self::Skipped)
    }

    /// Short lowercase name for terminal output
    pub fn label(&self) -> &'static str {
        match self {
            Self::Copied => "copied",
            Self::Skipped => "skipped",
            Self::MissingSource => "missing source",
            Self::CopyError(_) => "copy error",
        }
    }
}

/// One processed file in a sync run
#[derive(Debug, Clone, Serialize)]
pub struct SyncEntry {
    /// Asset display name, or "asset/parameter" for texture sub-resources
    pub name: String,

    /// Manifest type string the file was grouped under
    pub asset_type: String,

    /// File read from the export
    pub source: PathBuf,

    /// Where the file was (or would have been) written
    pub destination: Option<PathBuf>,

    /// What happened to the file
    pub outcome: SyncOutcome,
}

/// Summary of a sync run
#[derive(Debug, Clone, Serialize)]
pub struct SyncResult {
    /// Random id of this run
    pub run_id: String,
    /// RFC 3339 start time
    pub started_at: String,
    pub duration_ms: u64,
    /// Entries copied or skipped
    pub succeeded: usize,
    /// Entries with a missing source or a copy error
    pub failed: usize,

    /// Processed files in processing order
    pub entries: Vec<SyncEntry>,
}

impl SyncResult {
    fn start() -> Self {
        Self {
            run_id: Uuid::new_v4().to_string(),
            started_at: chrono::Utc::now().to_rfc3339(),
            duration_ms: 0,
            succeeded: 0,
            failed: 0,
            entries: Vec::new(),
        }
    }

    fn record(&mut self, entry: SyncEntry) {
        if entry.outcome.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.entries.push(entry);
    }

    fn finish(mut self, started: Instant) -> Self {
        self.duration_ms = started.elapsed().as_millis() as u64;
        self
    }

    pub fn copied(&self) -> usize {
        self.count(|o| matches!(o, SyncOutcome::Copied))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, SyncOutcome::Skipped))
    }

    fn count(&self, pred: impl Fn(&SyncOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }

    /// Outcome recorded for the first entry named `name`
    pub fn outcome_of(&self, name: &str) -> Option<&SyncOutcome> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.outcome)
    }

    pub fn summary_text(&self) -> String {
        format!(
            "Sync complete: {} succeeded ({} copied, {} skipped), {} failed",
            self.succeeded,
            self.copied(),
            self.skipped(),
            self.failed
        )
    }
}

/// Folder that assets of `kind` are copied into
///
/// The type string becomes a single folder directly under the root; a type
/// with no usable name is an `InvalidPath` error.
pub fn destination_folder(kind: &AssetKind, cfg: &SyncConfiguration) -> Result<PathBuf> {
    if !cfg.create_subfolders {
        return Ok(cfg.destination_root.clone());
    }

    let name = copy::sanitize_folder_name(kind.folder_name()).ok_or_else(|| {
        ImportError::InvalidPath(format!("asset type {:?} is not a folder name", kind.as_str()))
    })?;
    Ok(cfg.destination_root.join(name))
}

/// Partition assets by manifest type
///
/// Groups appear in the order their type is first seen; assets keep their
/// manifest order inside a group.
pub fn group_by_kind(assets: &[ExportedAsset]) -> Vec<(&str, Vec<&ExportedAsset>)> {
    let mut groups: Vec<(&str, Vec<&ExportedAsset>)> = Vec::new();

    for asset in assets {
        match groups.iter_mut().find(|(key, _)| *key == asset.asset_type) {
            Some((_, members)) => members.push(asset),
            None => groups.push((asset.asset_type.as_str(), vec![asset])),
        }
    }

    groups
}

/// Sync every asset in the report
///
/// Only failing to create the destination root is an error; per-asset
/// failures are recorded in the result.
pub fn sync_all(report: &ImportReport, cfg: &SyncConfiguration) -> Result<SyncResult> {
    let started = Instant::now();
    let mut result = SyncResult::start();

    copy::ensure_dir(&cfg.destination_root)?;

    info!(
        "Syncing {} assets into {}",
        report.len(),
        cfg.destination_root.display()
    );

    for (asset_type, assets) in group_by_kind(&report.assets) {
        let kind = AssetKind::parse(asset_type);
        let folder = match destination_folder(&kind, cfg) {
            Ok(folder) => folder,
            Err(e) => {
                error!("Skipping {} {} assets: {}", assets.len(), asset_type, e);
                for asset in assets {
                    result.record(rejected_entry(asset, &e));
                }
                continue;
            }
        };
        prepare_folder(&folder, cfg);

        debug!("Syncing {} {} assets", assets.len(), asset_type);

        for asset in assets {
            sync_asset_into(&mut result, asset, &folder, cfg);
        }
    }

    let result = result.finish(started);
    info!("{}", result.summary_text());
    Ok(result)
}

/// Sync one asset outside a batch, including its texture sub-resources when
/// the configuration asks for them
pub fn sync_selected(asset: &ExportedAsset, cfg: &SyncConfiguration) -> Result<SyncResult> {
    let started = Instant::now();
    let mut result = SyncResult::start();

    copy::ensure_dir(&cfg.destination_root)?;

    match destination_folder(&asset.kind(), cfg) {
        Ok(folder) => {
            prepare_folder(&folder, cfg);
            sync_asset_into(&mut result, asset, &folder, cfg);
        }
        Err(e) => {
            error!("Failed to sync {}: {}", asset.name, e);
            result.record(rejected_entry(asset, &e));
        }
    }

    Ok(result.finish(started))
}

/// Sync one asset outside a batch
///
/// Uses the same folder computation as [`sync_all`]; sub-resources are not
/// touched.
pub fn sync_single(asset: &ExportedAsset, cfg: &SyncConfiguration) -> SyncOutcome {
    match destination_folder(&asset.kind(), cfg) {
        Ok(folder) => {
            prepare_folder(&folder, cfg);
            sync_one(asset, &folder, cfg)
        }
        Err(e) => {
            error!("Failed to sync {}: {}", asset.name, e);
            SyncOutcome::CopyError(e.to_string())
        }
    }
}

/// Sync one asset into `dest_folder`
pub fn sync_one(asset: &ExportedAsset, dest_folder: &Path, cfg: &SyncConfiguration) -> SyncOutcome {
    sync_file(&asset.name, &asset.path, dest_folder, cfg.overwrite_existing)
}

fn prepare_folder(folder: &Path, cfg: &SyncConfiguration) {
    if cfg.create_subfolders {
        if let Err(e) = copy::ensure_dir(folder) {
            // Each asset retries the creation and reports its own failure
            warn!("Failed to create {}: {}", folder.display(), e);
        }
    }
}

fn rejected_entry(asset: &ExportedAsset, reason: &ImportError) -> SyncEntry {
    SyncEntry {
        name: asset.name.clone(),
        asset_type: asset.asset_type.clone(),
        source: asset.path.clone(),
        destination: None,
        outcome: SyncOutcome::CopyError(reason.to_string()),
    }
}

fn sync_asset_into(
    result: &mut SyncResult,
    asset: &ExportedAsset,
    folder: &Path,
    cfg: &SyncConfiguration,
) {
    let outcome = sync_one(asset, folder, cfg);
    result.record(SyncEntry {
        name: asset.name.clone(),
        asset_type: asset.asset_type.clone(),
        source: asset.path.clone(),
        destination: copy::destination_path(&asset.path, folder).ok(),
        outcome,
    });

    if cfg.texture_subresources == TextureSubresourcePolicy::Copy && !asset.textures.is_empty() {
        let texture_folder = if cfg.create_subfolders {
            cfg.destination_root.join(AssetKind::Texture.folder_name())
        } else {
            cfg.destination_root.clone()
        };
        prepare_folder(&texture_folder, cfg);

        for texture in &asset.textures {
            result.record(sync_subresource(asset, texture, &texture_folder, cfg));
        }
    }
}

fn sync_subresource(
    owner: &ExportedAsset,
    texture: &TextureExport,
    folder: &Path,
    cfg: &SyncConfiguration,
) -> SyncEntry {
    let name = format!("{}/{}", owner.name, texture.parameter);
    let outcome = sync_file(&name, &texture.path, folder, cfg.overwrite_existing);

    SyncEntry {
        destination: copy::destination_path(&texture.path, folder).ok(),
        name,
        asset_type: AssetKind::Texture.as_str().to_string(),
        source: texture.path.clone(),
        outcome,
    }
}

fn sync_file(label: &str, source: &Path, dest_folder: &Path, overwrite: bool) -> SyncOutcome {
    if !source.exists() {
        warn!("Source file missing: {}", source.display());
        return SyncOutcome::MissingSource;
    }

    let dest = match copy::destination_path(source, dest_folder) {
        Ok(dest) => dest,
        Err(e) => {
            error!("Failed to sync {}: {}", label, e);
            return SyncOutcome::CopyError(e.to_string());
        }
    };

    if dest.exists() {
        if copy::is_same_file(source, &dest) {
            debug!("Skipped (source is the destination): {}", label);
            return SyncOutcome::Skipped;
        }
        if !overwrite {
            debug!("Skipped (already exists): {}", label);
            return SyncOutcome::Skipped;
        }
    }

    if let Err(e) = copy::ensure_dir(dest_folder) {
        error!("Failed to sync {}: {}", label, e);
        return SyncOutcome::CopyError(e.to_string());
    }

    match copy::copy_file(source, &dest, overwrite) {
        Ok(bytes) => {
            info!("Copied {} -> {} ({} bytes)", label, dest.display(), bytes);
            SyncOutcome::Copied
        }
        Err(e) if !overwrite && e.kind() == std::io::ErrorKind::AlreadyExists => {
            debug!("Skipped (created concurrently): {}", label);
            SyncOutcome::Skipped
        }
        Err(e) => {
            error!("Failed to sync {}: {}", label, e);
            SyncOutcome::CopyError(e.to_string())
        }
    }
}
