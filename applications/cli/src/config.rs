/// Asset Bridge configuration
use crate::error::{CliError, Result};
use bridge_core::types::DEFAULT_DESTINATION_ROOT;
use bridge_core::{SyncConfiguration, TextureSettings, TextureSubresourcePolicy};
use bridge_importer::manifest::REPORT_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "asset-bridge.toml";

/// Prefix of environment overrides, e.g. `BRIDGE_SYNC__OVERWRITE_EXISTING=false`
pub const ENV_PREFIX: &str = "BRIDGE";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_import")]
    pub import: ImportSettings,

    #[serde(default = "default_sync")]
    pub sync: SyncSettings,

    #[serde(default)]
    pub texture: TextureSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ImportSettings {
    /// Directory the engine exporter writes into
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    /// Explicit report path; defaults to `<export_dir>/export_report.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SyncSettings {
    #[serde(default = "default_destination_root")]
    pub destination_root: PathBuf,

    #[serde(default = "default_true")]
    pub create_subfolders: bool,

    #[serde(default = "default_true")]
    pub overwrite_existing: bool,

    #[serde(default)]
    pub texture_subresources: TextureSubresourcePolicy,
}

/// Values given on the command line, applied last
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub export_dir: Option<PathBuf>,
    pub destination: Option<PathBuf>,
    pub no_subfolders: bool,
    pub no_overwrite: bool,
    pub copy_texture_subresources: bool,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// `config_path` must exist when given; otherwise `asset-bridge.toml` in the
    /// working directory is used if present.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(config_path, None)
    }

    /// Like [`AppConfig::load`], reading overrides from `env` instead of the
    /// process environment when given
    pub fn load_with_env(
        config_path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut settings = config::Config::builder();

        match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path));
                tracing::info!("Loading configuration from {}", path.display());
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    tracing::info!("Loading configuration from {}", default_path.display());
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with BRIDGE_)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Apply command-line overrides
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(dir) = &overrides.export_dir {
            self.import.export_dir = dir.clone();
        }
        if let Some(dest) = &overrides.destination {
            self.sync.destination_root = dest.clone();
        }
        if overrides.no_subfolders {
            self.sync.create_subfolders = false;
        }
        if overrides.no_overwrite {
            self.sync.overwrite_existing = false;
        }
        if overrides.copy_texture_subresources {
            self.sync.texture_subresources = TextureSubresourcePolicy::Copy;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.import.export_dir.as_os_str().is_empty() && self.import.report_file.is_none() {
            return Err(CliError::Config(
                "export directory is required (set import.export_dir or BRIDGE_IMPORT__EXPORT_DIR)"
                    .to_string(),
            ));
        }

        self.sync_configuration()
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Report file the shell loads
    pub fn report_path(&self) -> PathBuf {
        self.import
            .report_file
            .clone()
            .unwrap_or_else(|| self.import.export_dir.join(REPORT_FILE_NAME))
    }

    /// Settings for the importer
    pub fn sync_configuration(&self) -> SyncConfiguration {
        SyncConfiguration {
            create_subfolders: self.sync.create_subfolders,
            overwrite_existing: self.sync.overwrite_existing,
            destination_root: self.sync.destination_root.clone(),
            texture_settings: self.texture,
            texture_subresources: self.sync.texture_subresources,
        }
    }

    /// Effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))
    }
}

// Default values
fn default_import() -> ImportSettings {
    ImportSettings {
        export_dir: default_export_dir(),
        report_file: None,
    }
}

fn default_export_dir() -> PathBuf {
    PathBuf::from("./export")
}

fn default_sync() -> SyncSettings {
    SyncSettings {
        destination_root: default_destination_root(),
        create_subfolders: true,
        overwrite_existing: true,
        texture_subresources: TextureSubresourcePolicy::Ignore,
    }
}

fn default_destination_root() -> PathBuf {
    PathBuf::from(DEFAULT_DESTINATION_ROOT)
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            import: default_import(),
            sync: default_sync(),
            texture: TextureSettings::default(),
        }
    }
}
