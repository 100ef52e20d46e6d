use std::collections::BTreeMap;

use vidvault_model::CatalogEntity;

/// Collapses resolver hits to one record per id, ascending by id.
///
/// The first hit seen for an id is kept.
pub fn merge_unique_by_id<T, I>(hits: I) -> Vec<T>
where
    T: CatalogEntity,
    I: IntoIterator<Item = T>,
{
    let mut by_id = BTreeMap::new();
    for hit in hits {
        by_id.entry(hit.id()).or_insert(hit);
    }
    by_id.into_values().collect()
}
