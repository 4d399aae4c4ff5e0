//! Memoized visible subset of a directory page

use std::sync::Arc;

use super::filter::filter_indices;
use super::filter_state::FilterState;
use super::listing::ListingRecord;
use super::schema::DirectorySchema;
use crate::error::ClientResult;

/// Source snapshot + filter state, with the last filter result cached
///
/// Every mutation of the source, the query or a predicate drops the cache; the
/// next `visible()` recomputes from scratch.
#[derive(Debug, Clone)]
pub struct DirectoryView {
    schema: DirectorySchema,
    source: Arc<[ListingRecord]>,
    state: FilterState,
    memo: Option<Vec<usize>>,
    computations: u64,
}

impl DirectoryView {
    pub fn new(schema: DirectorySchema) -> Self {
        let state = FilterState::new(&schema);
        Self {
            schema,
            source: Arc::from(Vec::<ListingRecord>::new()),
            state,
            memo: None,
            computations: 0,
        }
    }

    pub fn schema(&self) -> &DirectorySchema {
        &self.schema
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn source(&self) -> &[ListingRecord] {
        &self.source
    }

    /// Replace the snapshot wholesale
    pub fn replace_source(&mut self, source: impl Into<Arc<[ListingRecord]>>) {
        self.source = source.into();
        self.memo = None;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.state.query() {
            self.state.set_query(query);
            self.memo = None;
        }
    }

    pub fn toggle(&mut self, dimension: &str, value: &str) -> ClientResult<()> {
        self.state.toggle(dimension, value)?;
        self.memo = None;
        Ok(())
    }

    pub fn select(&mut self, dimension: &str, value: &str) -> ClientResult<()> {
        self.state.select(dimension, value)?;
        self.memo = None;
        Ok(())
    }

    pub fn clear(&mut self, dimension: &str) -> ClientResult<()> {
        self.state.clear(dimension)?;
        self.memo = None;
        Ok(())
    }

    pub fn clear_all(&mut self) {
        self.state.clear_all();
        self.memo = None;
    }

    /// Visible records in source order
    pub fn visible(&mut self) -> Vec<&ListingRecord> {
        if self.memo.is_none() {
            self.computations += 1;
            self.memo = Some(filter_indices(
                &self.source,
                self.state.query(),
                self.state.predicates(),
                &self.schema,
            ));
        }

        let source = &self.source;
        self.memo
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|&index| &source[index])
            .collect()
    }

    pub fn visible_count(&mut self) -> usize {
        self.visible().len()
    }

    /// Number of times the filter actually ran
    pub fn computations(&self) -> u64 {
        self.computations
    }
}
