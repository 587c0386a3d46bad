//! Post-copy texture settings pass

use crate::Result;
use bridge_core::{AssetHost, PolicyOutcome, TexturePolicy, TextureSettings};
use std::path::Path;
use tracing::{debug, info};

/// Ask the host to apply `settings` to every texture under `destination_root`
///
/// Running it twice with the same settings reconfigures nothing the second time.
pub fn apply_texture_policy<H: AssetHost + ?Sized>(
    host: &mut H,
    destination_root: &Path,
    settings: &TextureSettings,
) -> Result<PolicyOutcome> {
    settings.validate()?;

    let policy = TexturePolicy::new(destination_root, *settings);
    let outcome = host.reconfigure_textures(&policy)?;

    if outcome.matched > 0 {
        info!(
            "Applied texture settings to {} textures ({} reconfigured)",
            outcome.matched, outcome.reconfigured
        );
    } else {
        debug!("No textures under {}", destination_root.display());
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ImportError;
    use bridge_core::{AssetKind, CoreError};
    use std::path::PathBuf;

    struct FixedHost {
        textures: Vec<PathBuf>,
        seen: Vec<TexturePolicy>,
    }

    impl AssetHost for FixedHost {
        fn refresh_index(&mut self) -> bridge_core::Result<()> {
            Ok(())
        }

        fn reconfigure_textures(&mut self, policy: &TexturePolicy) -> bridge_core::Result<PolicyOutcome> {
            self.seen.push(policy.clone());
            let matched = self
                .textures
                .iter()
                .filter(|p| policy.qualifies(p, &AssetKind::Texture))
                .count();
            Ok(PolicyOutcome { matched, reconfigured: matched })
        }

        fn remove_metadata(&mut self, _path: &Path) -> bridge_core::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_policy_scoped_to_root() {
        let mut host = FixedHost {
            textures: vec![PathBuf::from("/dst/Texture/a.png"), PathBuf::from("/elsewhere/b.png")],
            seen: Vec::new(),
        };
        let settings = TextureSettings::default();

        let outcome = apply_texture_policy(&mut host, Path::new("/dst"), &settings).unwrap();
        assert_eq!(outcome.matched, 1);
        assert_eq!(host.seen[0].root, PathBuf::from("/dst"));
        assert_eq!(host.seen[0].settings, settings);
    }

    #[test]
    fn test_invalid_settings_never_reach_host() {
        let mut host = FixedHost {
            textures: Vec::new(),
            seen: Vec::new(),
        };
        let settings = TextureSettings {
            max_texture_size: 4,
            ..TextureSettings::default()
        };

        let err = apply_texture_policy(&mut host, Path::new("/dst"), &settings).unwrap_err();
        assert!(matches!(err, ImportError::Core(CoreError::InvalidInput(_))));
        assert!(host.seen.is_empty());
    }
}
