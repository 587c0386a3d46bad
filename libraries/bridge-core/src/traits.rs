/// Core traits for Asset Bridge
use crate::error::Result;
use crate::types::{PolicyOutcome, TexturePolicy};
use std::path::Path;

/// Host asset database capability
///
/// The game engine (or any other tool that tracks import metadata for files
/// under the destination tree) is reached only through this trait, so the
/// synchronizer has no compile-time dependency on a specific engine.
///
/// Calls are synchronous and made from the thread running the sync.
pub trait AssetHost {
    /// Rescan the tracked tree so the host learns about copied or deleted files
    ///
    /// # Errors
    /// Returns an error if the host cannot read its tracked tree
    fn refresh_index(&mut self) -> Result<()>;

    /// Apply texture import settings to every asset the policy selects
    ///
    /// Implementations must be idempotent: assets already carrying the policy's
    /// settings are counted as matched but not reconfigured again.
    ///
    /// # Errors
    /// Returns an error if the host cannot read or write import metadata
    fn reconfigure_textures(&mut self, policy: &TexturePolicy) -> Result<PolicyOutcome>;

    /// Drop the host-side metadata stored for `path` (file or folder)
    ///
    /// Missing metadata is not an error.
    ///
    /// # Errors
    /// Returns an error if existing metadata cannot be removed
    fn remove_metadata(&mut self, path: &Path) -> Result<()>;
}
