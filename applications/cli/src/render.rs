//! Terminal output for loaded reports and sync results

use bridge_core::{ImportReport, PolicyOutcome};
use bridge_importer::cleaner::CleanReport;
use bridge_importer::{SessionReport, SyncResult};

/// One line per asset: icon, name and type
pub fn asset_lines(report: &ImportReport) -> Vec<String> {
    report
        .assets
        .iter()
        .map(|asset| {
            let name = if asset.name.is_empty() {
                asset.path.display().to_string()
            } else {
                asset.name.clone()
            };
            format!("[{}] {} ({})", asset.kind().icon_name(), name, asset.asset_type)
        })
        .collect()
}

pub fn status_line(report: &ImportReport) -> String {
    format!("Ready to sync {} assets", report.len())
}

/// Per-entry lines for a sync run, failures carry their detail
pub fn sync_lines(result: &SyncResult) -> Vec<String> {
    result
        .entries
        .iter()
        .map(|entry| {
            let target = entry
                .destination
                .as_ref()
                .map_or_else(|| entry.source.display().to_string(), |d| d.display().to_string());
            match &entry.outcome {
                bridge_importer::SyncOutcome::CopyError(detail) => {
                    format!("  {:<14} {} -> {} ({})", entry.outcome.label(), entry.name, target, detail)
                }
                outcome => format!("  {:<14} {} -> {}", outcome.label(), entry.name, target),
            }
        })
        .collect()
}

pub fn texture_line(outcome: &PolicyOutcome) -> String {
    format!(
        "Texture policy: {} textures matched, {} reconfigured",
        outcome.matched, outcome.reconfigured
    )
}

/// Full report of a sync session
pub fn session_lines(report: &SessionReport) -> Vec<String> {
    let mut lines = sync_lines(&report.sync);
    lines.push(report.sync.summary_text());
    lines.push(texture_line(&report.textures));
    lines
}

pub fn clean_line(report: &CleanReport) -> String {
    if report.removed {
        format!(
            "Removed {} ({} files)",
            report.root.display(),
            report.files_removed
        )
    } else {
        format!("Nothing to clean at {}", report.root.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_core::ExportedAsset;

    fn report() -> ImportReport {
        ImportReport {
            export_session: None,
            assets: vec![
                ExportedAsset::new("StaticMesh", "Chair", "/x/SM_Chair.fbx"),
                ExportedAsset::new("Texture", "Wall", "/x/TEX_Wall.png"),
                ExportedAsset::new("Sound", "", "/x/boom.wav"),
            ],
        }
    }

    #[test]
    fn test_asset_lines_show_icon_name_and_type() {
        let lines = asset_lines(&report());

        assert_eq!(lines[0], "[MeshFilter Icon] Chair (StaticMesh)");
        assert_eq!(lines[1], "[Texture2D Icon] Wall (Texture)");
        assert_eq!(lines[2], "[DefaultAsset Icon] /x/boom.wav (Sound)");
    }

    #[test]
    fn test_status_line_counts_assets() {
        assert_eq!(status_line(&report()), "Ready to sync 3 assets");
        assert_eq!(status_line(&ImportReport::default()), "Ready to sync 0 assets");
    }

    #[test]
    fn test_texture_line() {
        let outcome = PolicyOutcome {
            matched: 4,
            reconfigured: 1,
        };
        assert_eq!(texture_line(&outcome), "Texture policy: 4 textures matched, 1 reconfigured");
    }

    #[test]
    fn test_clean_line_for_missing_root() {
        let report = CleanReport {
            root: "Assets/Imported/UnrealAssets".into(),
            removed: false,
            files_removed: 0,
        };
        assert_eq!(clean_line(&report), "Nothing to clean at Assets/Imported/UnrealAssets");
    }
}
