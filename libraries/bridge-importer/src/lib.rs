//! Asset Bridge Importer
//!
//! This crate copies assets described by an engine export report into a
//! managed destination tree and keeps the host asset database in step.
//!
//! # Features
//!
//! - Tolerant export report loading
//! - Per-type destination folders with skip/overwrite policy
//! - Optional copying of texture sub-resources
//! - Texture import policy pass through the host asset database
//! - Destination cleaning and cross-process locking
//!
//! # Architecture
//!
//! - `manifest`: Export report loading
//! - `copy`: File copy primitives
//! - `sync`: Per-asset and batch synchronization
//! - `texture_policy`: Post-copy texture settings pass
//! - `cleaner`: Destination removal
//! - `lock`: Destination lock file
//! - `host`: Filesystem-backed `AssetHost` using `.meta` sidecars
//! - `session`: Orchestration of load, sync, refresh and policy

mod error;

pub mod cleaner;
pub mod copy;
pub mod host;
pub mod lock;
pub mod manifest;
pub mod session;
pub mod sync;
pub mod texture_policy;

pub use error::{ImportError, LoadError};
pub use host::SidecarHost;
pub use session::{SessionReport, SyncSession};
pub use sync::{SyncEntry, SyncOutcome, SyncResult};

/// Re-export commonly used types
pub type Result<T> = std::result::Result<T, ImportError>;
