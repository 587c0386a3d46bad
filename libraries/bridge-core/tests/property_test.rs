//! Property-based tests for manifest types

use bridge_core::{AssetKind, ExportedAsset, ImportReport, SyncConfiguration, TextureSettings};
use proptest::prelude::*;

// ===== Helpers =====

fn type_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("StaticMesh".to_string()),
        Just("SkeletalMesh".to_string()),
        Just("Animation".to_string()),
        Just("Material".to_string()),
        Just("Texture".to_string()),
        "[A-Za-z]{1,12}",
    ]
}

// ===== Property Tests =====

proptest! {
    /// Property: parsing keeps the manifest string intact
    #[test]
    fn kind_round_trips_type_string(name in type_name()) {
        let kind = AssetKind::parse(&name);
        prop_assert_eq!(kind.as_str(), name.as_str());
        prop_assert_eq!(kind.folder_name(), name.as_str());
    }

    /// Property: only the exact string "Texture" is a texture
    #[test]
    fn only_texture_kind_is_texture(name in type_name()) {
        prop_assert_eq!(AssetKind::parse(&name).is_texture(), name == "Texture");
    }

    /// Property: distinct kinds are listed once, in first-seen order
    #[test]
    fn kinds_in_order_is_first_seen(types in prop::collection::vec(type_name(), 0..30)) {
        let report = ImportReport {
            export_session: None,
            assets: types
                .iter()
                .enumerate()
                .map(|(i, t)| ExportedAsset::new(t.as_str(), format!("a{i}"), format!("/x/a{i}")))
                .collect(),
        };

        let kinds = report.kinds_in_order();
        for (i, kind) in kinds.iter().enumerate() {
            prop_assert!(!kinds[..i].contains(kind));
            let first = types.iter().position(|t| t == kind);
            prop_assert!(first.is_some());
        }
        let mut firsts: Vec<usize> = kinds
            .iter()
            .filter_map(|k| types.iter().position(|t| t == k))
            .collect();
        let sorted = {
            let mut s = firsts.clone();
            s.sort_unstable();
            s
        };
        prop_assert_eq!(&firsts, &sorted);
        firsts.dedup();
        prop_assert_eq!(firsts.len(), kinds.len());
    }

    /// Property: texture size validation accepts exactly 32..=8192
    #[test]
    fn texture_size_range(size in 0u32..20000) {
        let mut cfg = SyncConfiguration::default();
        cfg.texture_settings = TextureSettings {
            max_texture_size: size,
            ..TextureSettings::default()
        };
        prop_assert_eq!(cfg.validate().is_ok(), (32..=8192).contains(&size));
    }
}
