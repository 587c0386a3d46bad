/// Asset Bridge - sync engine exports into a project asset tree
use asset_bridge::{render, AppConfig, CliError, ConfigOverrides};
use bridge_importer::{SidecarHost, SyncSession};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "asset-bridge")]
#[command(about = "Sync exported engine assets into a project asset tree", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory containing export_report.json
    #[arg(long, global = true)]
    export_dir: Option<PathBuf>,

    /// Destination root for synced assets
    #[arg(long, global = true)]
    destination: Option<PathBuf>,

    /// Copy every asset directly into the destination root
    #[arg(long, global = true)]
    no_subfolders: bool,

    /// Keep files that already exist at the destination
    #[arg(long, global = true)]
    no_overwrite: bool,

    /// Also copy textures referenced by materials
    #[arg(long, global = true)]
    copy_texture_subresources: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the export report and list its assets
    Load,
    /// Sync every asset in the export report
    Sync,
    /// Sync one asset, selected by name or source path
    SyncOne {
        /// Asset name or source path
        selector: String,
    },
    /// Reapply texture settings under the destination root
    ApplyTextures,
    /// Delete the destination root and its metadata
    Clean {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
    /// Print the effective configuration
    ShowConfig,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            export_dir: self.export_dir.clone(),
            destination: self.destination.clone(),
            no_subfolders: self.no_subfolders,
            no_overwrite: self.no_overwrite,
            copy_texture_subresources: self.copy_texture_subresources,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "asset_bridge=info,bridge_importer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_overrides(&cli.overrides());
    config.validate()?;
    tracing::debug!(
        "Using export report {} and destination {}",
        config.report_path().display(),
        config.sync.destination_root.display()
    );

    match cli.command {
        Commands::Load => load(&config),
        Commands::Sync => sync_all(&config),
        Commands::SyncOne { selector } => sync_one(&config, &selector),
        Commands::ApplyTextures => apply_textures(&config),
        Commands::Clean { yes } => clean(&config, yes),
        Commands::ShowConfig => {
            print!("{}", config.to_toml()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn session(config: &AppConfig) -> SyncSession<SidecarHost> {
    let sync_config = config.sync_configuration();
    let host = SidecarHost::new(&sync_config.destination_root);
    SyncSession::new(sync_config, host)
}

fn load(config: &AppConfig) -> anyhow::Result<ExitCode> {
    let mut session = session(config);
    let report = session.load_report_file(&config.report_path())?;
    tracing::info!("Loaded {} assets", report.len());

    for line in render::asset_lines(report) {
        println!("{line}");
    }
    println!("{}", render::status_line(report));

    Ok(ExitCode::SUCCESS)
}

fn sync_all(config: &AppConfig) -> anyhow::Result<ExitCode> {
    let mut session = session(config);
    session.load_report_file(&config.report_path())?;

    let report = session.sync_all()?;
    if !report.all_succeeded() {
        tracing::warn!("{} assets failed to sync", report.sync.failed);
    }
    for line in render::session_lines(&report) {
        println!("{line}");
    }

    Ok(exit_code(report.all_succeeded()))
}

fn sync_one(config: &AppConfig, selector: &str) -> anyhow::Result<ExitCode> {
    let mut session = session(config);
    session.load_report_file(&config.report_path())?;

    tracing::info!("Syncing {}", selector);
    let report = session.sync_single(selector)?;
    for line in render::session_lines(&report) {
        println!("{line}");
    }

    Ok(exit_code(report.all_succeeded()))
}

fn apply_textures(config: &AppConfig) -> anyhow::Result<ExitCode> {
    let mut session = session(config);
    let outcome = session.apply_textures()?;
    println!("{}", render::texture_line(&outcome));

    Ok(ExitCode::SUCCESS)
}

fn clean(config: &AppConfig, confirmed: bool) -> anyhow::Result<ExitCode> {
    if !confirmed {
        return Err(CliError::CleanNotConfirmed(config.sync.destination_root.clone()).into());
    }

    tracing::info!("Cleaning {}", config.sync.destination_root.display());
    let mut session = session(config);
    let report = session.clean()?;
    println!("{}", render::clean_line(&report));

    Ok(ExitCode::SUCCESS)
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
