//! Grouping by folder
//!
//! Groups appear in order of their first member and members keep arrival
//! order, so the same input sequence always yields the same groups.

use std::collections::HashMap;

use crate::domain::entities::{AssetFile, DirectoryGroup};

/// Group assets by `folder` (ordinal, case-sensitive key).
pub fn group_by_folder<'a>(
    assets: impl IntoIterator<Item = &'a AssetFile>,
) -> Vec<DirectoryGroup> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<(&str, Vec<AssetFile>)> = Vec::new();

    for asset in assets {
        let slot = *index.entry(asset.folder()).or_insert_with(|| {
            buckets.push((asset.folder(), Vec::new()));
            buckets.len() - 1
        });
        buckets[slot].1.push(asset.clone());
    }

    buckets
        .into_iter()
        .map(|(key, members)| DirectoryGroup::new(key, members))
        .collect()
}
