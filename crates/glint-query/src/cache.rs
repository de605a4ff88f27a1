//! Long-term caching of compacted query results.
//!
//! A finished [`QueriedMemberList`] is immutable, so lists are shared
//! behind `Arc` and read without synchronization. The cache itself is
//! read-mostly and guarded by a [`parking_lot::RwLock`].

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use glint_types::{ClassId, MemberKind};

use crate::list::QueriedMemberList;

/// How the query name was matched, for cache keying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseMode {
    /// Exact match
    Sensitive,
    /// Ordinal case-insensitive match
    Insensitive,
}

impl CaseMode {
    /// Case mode for an `ignore_case` request flag.
    pub fn from_ignore_case(ignore_case: bool) -> Self {
        if ignore_case {
            CaseMode::Insensitive
        } else {
            CaseMode::Sensitive
        }
    }
}

/// Identity of a query: member kind, queried class, optional name,
/// and case mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    /// Member kind queried
    pub kind: MemberKind,
    /// The queried (leaf) class
    pub class: ClassId,
    /// Name filter, if any
    pub name: Option<String>,
    /// Case mode of the name filter
    pub case: CaseMode,
}

impl QueryKey {
    /// Build a key from query arguments.
    pub fn new(kind: MemberKind, class: ClassId, name: Option<&str>, ignore_case: bool) -> Self {
        Self {
            kind,
            class,
            name: name.map(|n| n.to_string()),
            case: CaseMode::from_ignore_case(ignore_case),
        }
    }
}

/// Cache of compacted member lists keyed by query identity.
#[derive(Debug)]
pub struct QueryCache<M> {
    entries: RwLock<FxHashMap<QueryKey, Arc<QueriedMemberList<M>>>>,
}

// Not derived: the derive would demand `M: Default`, which member
// handles need not implement.
impl<M> Default for QueryCache<M> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
        }
    }
}

impl<M: Copy> QueryCache<M> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached list.
    pub fn get(&self, key: &QueryKey) -> Option<Arc<QueriedMemberList<M>>> {
        self.entries.read().get(key).cloned()
    }

    /// Return the cached list for `key`, building and compacting it
    /// on a miss. If two callers race on the same key, the first
    /// inserted list wins and both receive it.
    pub fn get_or_insert_with(
        &self,
        key: QueryKey,
        build: impl FnOnce() -> QueriedMemberList<M>,
    ) -> Arc<QueriedMemberList<M>> {
        if let Some(hit) = self.entries.read().get(&key) {
            return hit.clone();
        }

        let mut list = build();
        list.compact();
        self.entries
            .write()
            .entry(key)
            .or_insert_with(|| Arc::new(list))
            .clone()
    }

    /// Number of cached lists.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop all cached lists.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
