//! Registry: concurrent per-item access via DashMap.

use dashmap::mapref::one::RefMut;
use dashmap::DashMap;

use vigil_core::memory::MemoryNode;

/// A node and the strategy state stored beside it. Created, replaced, and
/// removed as one unit, so state never outlives its node.
#[derive(Debug, Clone)]
pub struct TrustEntry<T> {
    pub node: MemoryNode,
    pub state: T,
}

/// Thread-safe registry keyed by memory id.
///
/// Holding a [`RefMut`] locks the entry's shard; everything done under it is
/// atomic with respect to other operations on the same id.
pub struct Registry<T> {
    entries: DashMap<String, TrustEntry<T>>,
}

impl<T: Clone> Registry<T> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Insert or replace an entry. Returns the previous entry if the id existed.
    pub fn insert(&self, entry: TrustEntry<T>) -> Option<TrustEntry<T>> {
        self.entries.insert(entry.node.id.clone(), entry)
    }

    /// Remove an entry and everything stored with it.
    pub fn remove(&self, id: &str) -> Option<TrustEntry<T>> {
        self.entries.remove(id).map(|(_, v)| v)
    }

    /// Cloned snapshot of one entry.
    pub fn get(&self, id: &str) -> Option<TrustEntry<T>> {
        self.entries.get(id).map(|r| r.clone())
    }

    /// Exclusive guard on one entry.
    pub fn get_mut(&self, id: &str) -> Option<RefMut<'_, String, TrustEntry<T>>> {
        self.entries.get_mut(id)
    }

    /// Insert a new entry or update the existing one, under a single guard.
    pub fn upsert(
        &self,
        id: &str,
        insert: impl FnOnce() -> TrustEntry<T>,
        update: impl FnOnce(&mut TrustEntry<T>),
    ) {
        self.entries
            .entry(id.to_string())
            .and_modify(update)
            .or_insert_with(insert);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All ids, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.entries.iter().map(|r| r.key().clone()).collect();
        ids.sort();
        ids
    }

    /// Cloned snapshot of every entry, sorted by id. Each entry is read under
    /// its own guard; the snapshot as a whole is not a point-in-time cut.
    pub fn snapshot(&self) -> Vec<TrustEntry<T>> {
        let mut entries: Vec<TrustEntry<T>> = self.entries.iter().map(|r| r.clone()).collect();
        entries.sort_by(|a, b| a.node.id.cmp(&b.node.id));
        entries
    }

    /// Mutate every entry in place, one guard at a time.
    pub fn for_each_mut(&self, mut f: impl FnMut(&mut TrustEntry<T>)) {
        for mut entry in self.entries.iter_mut() {
            f(entry.value_mut());
        }
    }
}

impl<T: Clone> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}
