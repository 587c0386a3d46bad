//! Sync session orchestration
//!
//! A `SyncSession` owns the configuration, the host asset database and the
//! currently loaded export report, and runs the full sequence for each user
//! action: copy, refresh the host index, then apply the texture policy.

use crate::cleaner::{self, CleanReport};
use crate::lock::DestinationLock;
use crate::texture_policy::apply_texture_policy;
use crate::{manifest, sync, ImportError, Result, SyncResult};
use bridge_core::{AssetHost, ImportReport, PolicyOutcome, SyncConfiguration};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Outcome of a sync action
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub sync: SyncResult,
    pub textures: PolicyOutcome,
}

impl SessionReport {
    /// Whether every file synced successfully
    pub fn all_succeeded(&self) -> bool {
        self.sync.failed == 0
    }
}

/// Load/sync/clean driver around one host
pub struct SyncSession<H: AssetHost> {
    config: SyncConfiguration,
    host: H,
    report: Option<ImportReport>,
}

impl<H: AssetHost> SyncSession<H> {
    pub fn new(config: SyncConfiguration, host: H) -> Self {
        Self {
            config,
            host,
            report: None,
        }
    }

    pub fn config(&self) -> &SyncConfiguration {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Currently loaded report
    pub fn report(&self) -> Option<&ImportReport> {
        self.report.as_ref()
    }

    /// Replace the loaded report
    pub fn set_report(&mut self, report: ImportReport) {
        self.report = Some(report);
    }

    /// Load `export_report.json` from `export_dir`, replacing the current report
    ///
    /// On failure the previously loaded report is kept.
    pub fn load_report(&mut self, export_dir: &Path) -> Result<&ImportReport> {
        let report = manifest::load_from_export_dir(export_dir)?;
        Ok(self.report.insert(report))
    }

    /// Load a report file at an explicit path, replacing the current report
    pub fn load_report_file(&mut self, report_path: &Path) -> Result<&ImportReport> {
        let report = manifest::load(report_path)?;
        Ok(self.report.insert(report))
    }

    /// Sync every asset of the loaded report
    pub fn sync_all(&mut self) -> Result<SessionReport> {
        let report = self.report.as_ref().ok_or(ImportError::NoReport)?;
        if report.is_empty() {
            return Err(ImportError::NothingToSync);
        }
        self.config.validate()?;

        let _lock = DestinationLock::acquire(&self.config.destination_root)?;
        let sync = sync::sync_all(report, &self.config)?;
        let textures = self.finish_sync()?;

        Ok(SessionReport { sync, textures })
    }

    /// Sync one asset, selected by display name or by source path
    pub fn sync_single(&mut self, selector: &str) -> Result<SessionReport> {
        let report = self.report.as_ref().ok_or(ImportError::NoReport)?;
        let asset = report
            .find_by_name(selector)
            .or_else(|| report.find_by_path(Path::new(selector)))
            .ok_or_else(|| ImportError::AssetNotFound(selector.to_string()))?;
        self.config.validate()?;

        let _lock = DestinationLock::acquire(&self.config.destination_root)?;
        let sync = sync::sync_selected(asset, &self.config)?;
        if sync.failed == 0 {
            info!("Synced {}", asset.name);
        }
        let textures = self.finish_sync()?;

        Ok(SessionReport { sync, textures })
    }

    /// Reapply the texture policy without copying anything
    pub fn apply_textures(&mut self) -> Result<PolicyOutcome> {
        self.config.validate()?;
        self.finish_sync()
    }

    /// Delete the destination tree and its host metadata
    pub fn clean(&mut self) -> Result<CleanReport> {
        let _lock = DestinationLock::acquire(&self.config.destination_root)?;
        cleaner::clean_destination(&self.config.destination_root, &mut self.host)
    }

    fn finish_sync(&mut self) -> Result<PolicyOutcome> {
        self.host.refresh_index()?;
        apply_texture_policy(
            &mut self.host,
            &self.config.destination_root,
            &self.config.texture_settings,
        )
    }
}
