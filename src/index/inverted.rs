//! Per-collection inverted index: field name -> value string -> record set.

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{index_terms, RawRecord};
use crate::schema::entity::FIELD_ID;
use crate::schema::record::{decode, Record};

/// Exact-match index over one collection. Built wholesale from the raw
/// records of a load; never updated in place.
#[derive(Debug)]
pub struct InvertedIndex<T> {
    // field -> value -> records carrying that value. Buckets hold each
    // record once (dedup by structural equality) in insertion order.
    buckets: HashMap<String, HashMap<String, Vec<Arc<T>>>>,
    record_count: usize,
}

impl<T: Record> InvertedIndex<T> {
    pub fn new() -> Self {
        InvertedIndex {
            buckets: HashMap::new(),
            record_count: 0,
        }
    }

    /// Build a fresh index from raw records. A record that fails to decode
    /// fails the whole build; the caller decides what happens to any index
    /// it was holding before.
    pub fn build(records: Vec<RawRecord>) -> Result<Self> {
        let mut index = InvertedIndex::new();
        for record in records {
            index.add_record(record)?;
        }
        Ok(index)
    }

    fn add_record(&mut self, raw: RawRecord) -> Result<()> {
        let decoded = Arc::new(decode::<T>(raw.clone())?);

        for (field, value) in &raw {
            for term in index_terms(value) {
                let bucket = self
                    .buckets
                    .entry(field.clone())
                    .or_default()
                    .entry(term)
                    .or_default();
                if !bucket.iter().any(|existing| **existing == *decoded) {
                    bucket.push(Arc::clone(&decoded));
                }
            }
        }

        self.record_count += 1;
        Ok(())
    }

    /// Exact-match lookup, case sensitive, on the full value string.
    ///
    /// A field outside the kind's schema table is an `UnknownField` error; a
    /// known field with no matching record is an empty result. Matches come
    /// back sorted by id so output is reproducible.
    pub fn find_by_field_value(&self, field: &str, value: &str) -> Result<Vec<Arc<T>>> {
        if !T::KIND.fields().contains(&field) {
            return Err(Error::new(
                ErrorKind::UnknownField,
                format!("{} has no field named '{}'", T::KIND.as_str(), field),
            ));
        }

        let mut hits: Vec<Arc<T>> = self
            .buckets
            .get(field)
            .and_then(|values| values.get(value))
            .cloned()
            .unwrap_or_default();
        hits.sort_by_cached_key(|record| id_sort_key(record.id()));
        Ok(hits)
    }

    /// Lookup by primary key. Ids are expected unique; with duplicates the
    /// smallest id wins, which keeps the answer deterministic.
    pub fn find_by_id(&self, id: Option<u64>) -> Result<Option<Arc<T>>> {
        match id {
            None => Ok(None),
            Some(id) => Ok(self
                .find_by_field_value(FIELD_ID, &id.to_string())?
                .into_iter()
                .next()),
        }
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }
}

impl<T: Record> Default for InvertedIndex<T> {
    fn default() -> Self {
        InvertedIndex::new()
    }
}

/// Numeric-aware ordering for ids: decimal ids sort by value, anything else
/// sorts after them lexicographically.
fn id_sort_key(id: &str) -> (u64, String) {
    (id.parse().unwrap_or(u64::MAX), id.to_string())
}
