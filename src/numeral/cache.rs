use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::numeral::latin;

#[derive(Debug, Default)]
struct Maps {
    /// Group index to canonical name.
    names:   HashMap<u64, String>,
    /// Lowercased name to group index.
    indices: HashMap<String, u64>,
}

/// Memoized names of powers of one thousand.
///
/// Entries are generated on first use and never removed. Reads take a shared
/// lock; names are generated or decoded outside the lock and inserted under
/// the exclusive lock, so concurrent requests for the same group converge on
/// one entry.
///
/// # Example
/// ```
/// use numtext::numeral::cache::MagnitudeCache;
///
/// let cache = MagnitudeCache::new();
/// assert_eq!(cache.name_for(10), "Decillion");
/// assert_eq!(cache.index_of("decillion"), Some(10));
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MagnitudeCache {
    maps: RwLock<Maps>,
}

impl MagnitudeCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The name of group `index`, generating and caching it on first use.
    pub fn name_for(&self, index: u64) -> String {
        if let Some(name) = self.maps.read().names.get(&index) {
            return name.clone();
        }

        let generated = latin::group_name(index);
        let mut maps = self.maps.write();
        let name = maps.names
                       .entry(index)
                       .or_insert_with(|| {
                           debug!(index, name = %generated, "generated magnitude name");
                           generated
                       })
                       .clone();
        maps.indices.entry(name.to_ascii_lowercase()).or_insert(index);
        name
    }

    /// The group index named by `name`, ignoring case. Names not yet cached
    /// are decoded and cached when they are well formed.
    pub fn index_of(&self, name: &str) -> Option<u64> {
        let key = name.to_ascii_lowercase();
        if let Some(&index) = self.maps.read().indices.get(&key) {
            return Some(index);
        }

        let index = latin::decode_group_name(&key)?;
        let canonical = latin::group_name(index);
        let mut maps = self.maps.write();
        maps.names.entry(index).or_insert_with(|| {
                                   debug!(index, name = %canonical, "decoded magnitude name");
                                   canonical
                               });
        maps.indices.entry(key).or_insert(index);
        Some(index)
    }

    /// Number of cached groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.maps.read().names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
