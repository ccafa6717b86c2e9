//! Strand Storage - Record Store Trait and In-Memory Implementation
//!
//! Defines the storage abstraction for string records: exact lookup by
//! content hash, predicate-filtered scan with ordering and pagination,
//! insert, and delete. The in-memory implementation doubles as the test
//! store and as the default backend for the API server; a database-backed
//! implementation would plug in behind the same trait.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use strand_core::{FilterPredicate, StoreError, StringRecord};

/// Fixed page size for paginated scans.
pub const PAGE_SIZE: usize = 20;

// ============================================================================
// PAGE TYPE
// ============================================================================

/// One page of a paginated scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Records on this page, at most [`PAGE_SIZE`] of them.
    pub items: Vec<StringRecord>,
    /// 1-based page index that was served.
    pub current_page: u32,
    /// 1-based index of the last non-empty page (1 when there are no
    /// matches, so an empty result still has a valid page range).
    pub last_page: u32,
    /// Total number of matching records across all pages.
    pub total: u64,
}

// ============================================================================
// STORE TRAIT
// ============================================================================

/// Storage trait for string records.
///
/// Implementations must enforce primary-key uniqueness on the content hash:
/// under racing creates the second `insert` returns
/// [`StoreError::AlreadyExists`] rather than overwriting. All calls are
/// synchronous request/response.
pub trait RecordStore: Send + Sync {
    /// Insert a new record. Fails with `AlreadyExists` if a record with the
    /// same id is present.
    fn insert(&self, record: StringRecord) -> Result<(), StoreError>;

    /// Get a record by content hash.
    fn get(&self, id: &str) -> Result<Option<StringRecord>, StoreError>;

    /// Delete a record by content hash. Fails with `NotFound` on a miss.
    fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Full scan: every record matching the predicate, ordered by
    /// `created_at` descending with ties stable in insertion order.
    fn scan(&self, predicate: &FilterPredicate) -> Result<Vec<StringRecord>, StoreError>;

    /// Paginated scan with the same ordering as [`RecordStore::scan`].
    /// Pages are 1-based; an out-of-range page yields an empty (but valid)
    /// page with correct totals.
    fn scan_page(&self, predicate: &FilterPredicate, page: u32) -> Result<Page, StoreError>;

    /// Number of stored records.
    fn len(&self) -> Result<u64, StoreError>;

    /// True when the store holds no records.
    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

// ============================================================================
// IN-MEMORY STORE
// ============================================================================

/// A record plus the insertion sequence number used for stable tie-breaks.
#[derive(Debug, Clone)]
struct Stored {
    record: StringRecord,
    seq: u64,
}

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<String, Stored>,
    next_seq: u64,
}

/// In-memory record store.
///
/// Clones share the same underlying map, so one store can back every route
/// handler. Lock poisoning is surfaced as [`StoreError::LockPoisoned`]
/// instead of panicking in the request path.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Matching records ordered by `created_at` descending; equal timestamps
    /// keep insertion order (ascending sequence).
    fn matching_sorted(
        &self,
        predicate: &FilterPredicate,
    ) -> Result<Vec<StringRecord>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut matching: Vec<&Stored> = inner
            .records
            .values()
            .filter(|s| predicate.matches(&s.record.properties))
            .collect();
        matching.sort_by(|a, b| {
            b.record
                .created_at
                .cmp(&a.record.created_at)
                .then(a.seq.cmp(&b.seq))
        });
        Ok(matching.into_iter().map(|s| s.record.clone()).collect())
    }
}

impl RecordStore for InMemoryStore {
    fn insert(&self, record: StringRecord) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        if inner.records.contains_key(&record.id) {
            return Err(StoreError::AlreadyExists {
                id: record.id.clone(),
            });
        }
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.records.insert(record.id.clone(), Stored { record, seq });
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<StringRecord>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner.records.get(id).map(|s| s.record.clone()))
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        match inner.records.remove(id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound { id: id.to_string() }),
        }
    }

    fn scan(&self, predicate: &FilterPredicate) -> Result<Vec<StringRecord>, StoreError> {
        self.matching_sorted(predicate)
    }

    fn scan_page(&self, predicate: &FilterPredicate, page: u32) -> Result<Page, StoreError> {
        let matching = self.matching_sorted(predicate)?;
        let total = matching.len() as u64;
        let last_page = (total.div_ceil(PAGE_SIZE as u64)).max(1) as u32;
        let current_page = page.max(1);

        let offset = (current_page as usize - 1).saturating_mul(PAGE_SIZE);
        let items = matching
            .into_iter()
            .skip(offset)
            .take(PAGE_SIZE)
            .collect();

        Ok(Page {
            items,
            current_page,
            last_page,
            total,
        })
    }

    fn len(&self) -> Result<u64, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner.records.len() as u64)
    }
}

// =============================================================================
// TESTS
// =============================================================================
