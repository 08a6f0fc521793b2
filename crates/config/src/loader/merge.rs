//! First-seen-wins merging of environment layers.

use crate::environment::EnvMap;

/// Merge layers in precedence order: a key keeps the value from the first
/// layer that defines it, later layers only fill gaps.
///
/// The loader passes `[live, profile_file, base_file]`.
pub fn merge_sources<I>(layers: I) -> EnvMap
where
    I: IntoIterator<Item = EnvMap>,
{
    let mut merged = EnvMap::new();
    for layer in layers {
        assign_if_not_set(&mut merged, layer);
    }
    merged
}

/// Copy entries from `source` whose key is absent in `target`.
///
/// Returns how many keys were added.
pub(crate) fn assign_if_not_set(target: &mut EnvMap, source: EnvMap) -> usize {
    let mut added = 0;
    for (key, value) in source {
        if !target.contains_key(&key) {
            target.insert(key, value);
            added += 1;
        }
    }
    added
}
