//! Property-based tests for asset grouping
//!
//! Uses proptest to check the partition invariants for arbitrary manifests.

use bridge_core::ExportedAsset;
use bridge_importer::sync::group_by_kind;
use proptest::prelude::*;

// ===== Helpers =====

fn arbitrary_assets() -> impl Strategy<Value = Vec<ExportedAsset>> {
    prop::collection::vec(
        prop::sample::select(vec!["StaticMesh", "SkeletalMesh", "Animation", "Material", "Texture", "Sound"]),
        0..40,
    )
    .prop_map(|types| {
        types
            .into_iter()
            .enumerate()
            .map(|(i, ty)| ExportedAsset::new(ty, format!("asset{i}"), format!("/export/asset{i}.bin")))
            .collect()
    })
}

// ===== Property Tests =====

proptest! {
    /// Property: every asset lands in exactly one group, under its own type
    #[test]
    fn grouping_is_a_partition(assets in arbitrary_assets()) {
        let groups = group_by_kind(&assets);

        let total: usize = groups.iter().map(|(_, members)| members.len()).sum();
        prop_assert_eq!(total, assets.len());

        for (key, members) in &groups {
            prop_assert!(members.iter().all(|a| a.asset_type == *key));
        }
    }

    /// Property: group keys are distinct and appear in first-seen order
    #[test]
    fn group_order_is_first_seen(assets in arbitrary_assets()) {
        let groups = group_by_kind(&assets);
        let keys: Vec<&str> = groups.iter().map(|(k, _)| *k).collect();

        let mut expected: Vec<&str> = Vec::new();
        for asset in &assets {
            if !expected.contains(&asset.asset_type.as_str()) {
                expected.push(&asset.asset_type);
            }
        }
        prop_assert_eq!(keys, expected);
    }

    /// Property: manifest order is kept inside each group
    #[test]
    fn members_keep_manifest_order(assets in arbitrary_assets()) {
        let groups = group_by_kind(&assets);

        for (key, members) in &groups {
            let expected: Vec<&str> = assets
                .iter()
                .filter(|a| a.asset_type == *key)
                .map(|a| a.name.as_str())
                .collect();
            let actual: Vec<&str> = members.iter().map(|a| a.name.as_str()).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
