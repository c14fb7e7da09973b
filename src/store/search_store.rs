//! One collection's store: owns the inverted index and mediates loads.

use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;
use tracing::info;

use crate::core::error::Result;
use crate::index::inverted::InvertedIndex;
use crate::schema::record::Record;
use crate::store::loader;

/// Store for one record collection. Readers always see a complete index:
/// a load builds into a fresh structure and swaps it in only on success, so
/// a failed reload leaves the previous data queryable.
pub struct SearchStore<T> {
    index: RwLock<Arc<InvertedIndex<T>>>,
}

impl<T: Record> SearchStore<T> {
    pub fn new() -> Self {
        SearchStore {
            index: RwLock::new(Arc::new(InvertedIndex::new())),
        }
    }

    /// Rebuild this collection's index from `path`.
    pub fn load(&self, path: &str) -> Result<()> {
        let records = loader::read_records(path)?;

        info!("Building inverted index for {}...", path);
        let started = Instant::now();
        let built = InvertedIndex::build(records)?;
        info!(
            "Inverted index for {} created in {:.3} seconds ({} records)",
            path,
            started.elapsed().as_secs_f64(),
            built.record_count()
        );

        *self.index.write() = Arc::new(built);
        Ok(())
    }

    fn snapshot(&self) -> Arc<InvertedIndex<T>> {
        Arc::clone(&self.index.read())
    }

    pub fn find_by_field_value(&self, field: &str, value: &str) -> Result<Vec<Arc<T>>> {
        self.snapshot().find_by_field_value(field, value)
    }

    pub fn find_by_id(&self, id: Option<u64>) -> Result<Option<Arc<T>>> {
        self.snapshot().find_by_id(id)
    }

    pub fn record_count(&self) -> usize {
        self.snapshot().record_count()
    }
}

impl<T: Record> Default for SearchStore<T> {
    fn default() -> Self {
        SearchStore::new()
    }
}
