//! Export report written by the engine-side exporter
//!
//! The report is tolerant: unknown fields are ignored, a missing or `null`
//! `assets` array is an empty report, and per-asset `textures` default to empty.

use super::AssetKind;
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Root object of `export_report.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Session info, descriptive only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_session: Option<ExportSession>,

    /// Exported assets in manifest order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub assets: Vec<ExportedAsset>,
}

/// Information about the export run that produced the report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSession {
    /// ISO-8601 time of the export
    #[serde(default)]
    pub timestamp: String,

    /// Number of assets the exporter claims to have written
    #[serde(default)]
    pub total_assets: u64,

    /// Directory the exporter wrote into
    #[serde(default)]
    pub export_path: String,
}

/// One exported asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedAsset {
    /// Raw manifest type string (see [`ExportedAsset::kind`])
    #[serde(rename = "type")]
    pub asset_type: String,

    /// Display name, not unique
    #[serde(default)]
    pub name: String,

    /// Absolute path of the exported file; identifies the asset
    pub path: PathBuf,

    /// ISO-8601 export time of this asset
    #[serde(default)]
    pub timestamp: String,

    /// Textures referenced by this asset (materials only, in practice)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub textures: Vec<TextureExport>,
}

/// Texture file exported alongside a material
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureExport {
    /// Material parameter the texture is bound to (e.g. "diffuse")
    #[serde(default)]
    pub parameter: String,

    /// Exported texture file
    pub path: PathBuf,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl ImportReport {
    /// Number of assets in the report
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the report lists no assets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// First asset with the given display name, in manifest order
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&ExportedAsset> {
        self.assets.iter().find(|a| a.name == name)
    }

    /// Asset whose source path equals `path`
    #[must_use]
    pub fn find_by_path(&self, path: &Path) -> Option<&ExportedAsset> {
        self.assets.iter().find(|a| a.path == path)
    }

    /// Distinct type strings in first-seen order
    #[must_use]
    pub fn kinds_in_order(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = Vec::new();
        for asset in &self.assets {
            if !kinds.contains(&asset.asset_type.as_str()) {
                kinds.push(&asset.asset_type);
            }
        }
        kinds
    }
}

impl ExportSession {
    /// Export time, if the timestamp is ISO-8601
    ///
    /// Accepts naive timestamps with or without fractional seconds as well as
    /// RFC 3339 timestamps carrying an offset (converted to their local time).
    #[must_use]
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        parse_iso_timestamp(&self.timestamp)
    }
}

impl ExportedAsset {
    /// Create an asset entry
    pub fn new(asset_type: impl Into<String>, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            asset_type: asset_type.into(),
            name: name.into(),
            path: path.into(),
            timestamp: String::new(),
            textures: Vec::new(),
        }
    }

    /// Category of this asset
    #[must_use]
    pub fn kind(&self) -> AssetKind {
        AssetKind::parse(&self.asset_type)
    }

    /// Base name of the source file, used as the destination file name
    #[must_use]
    pub fn file_name(&self) -> Option<&std::ffi::OsStr> {
        self.path.file_name()
    }

    /// Export time of this asset, if the timestamp is ISO-8601
    #[must_use]
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        parse_iso_timestamp(&self.timestamp)
    }
}

fn parse_iso_timestamp(raw: &str) -> Option<NaiveDateTime> {
    raw.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
}
