//! Asset Bridge Core
//!
//! Engine-agnostic types, traits, and error handling for Asset Bridge.
//!
//! This crate provides the building blocks shared by the importer library and
//! the command-line shell.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Manifest Types**: `ImportReport`, `ExportSession`, `ExportedAsset`, `TextureExport`
//! - **Sync Settings**: `SyncConfiguration`, `TextureSettings`, `TexturePolicy`
//! - **Host Capability**: the `AssetHost` trait implemented by asset databases
//! - **Error Handling**: `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use bridge_core::types::{AssetKind, ImportReport};
//!
//! let report: ImportReport = serde_json::from_str(
//!     r#"{"assets":[{"type":"Texture","name":"Wall","path":"/src/wall.png"}]}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(report.len(), 1);
//! assert_eq!(report.assets[0].kind(), AssetKind::Texture);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{CoreError, Result};
pub use traits::AssetHost;

pub use types::{
    // Manifest
    ExportSession, ExportedAsset, ImportReport, TextureExport,
    // Asset categories
    AssetKind,
    // Settings
    FilterMode, SyncConfiguration, TextureSettings, TextureSubresourcePolicy, WrapMode,
    // Texture policy
    PolicyOutcome, TexturePolicy,
};
