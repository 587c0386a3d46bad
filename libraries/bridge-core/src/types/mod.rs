mod asset_kind;
mod manifest;
mod policy;
mod settings;

pub use asset_kind::AssetKind;
pub use manifest::{ExportSession, ExportedAsset, ImportReport, TextureExport};
pub use policy::{PolicyOutcome, TexturePolicy};
pub use settings::{
    FilterMode, SyncConfiguration, TextureSettings, TextureSubresourcePolicy, WrapMode,
    DEFAULT_DESTINATION_ROOT, MAX_TEXTURE_SIZE, MIN_TEXTURE_SIZE,
};
