//! Query and single-select predicate state of a directory page

use std::collections::BTreeMap;

use super::schema::DirectorySchema;
use crate::error::{ClientError, ClientResult};

/// Current query plus one selected value (or unset) per dimension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    query: String,
    predicates: BTreeMap<String, String>,
}

impl FilterState {
    /// All dimensions of the schema, unset
    pub fn new(schema: &DirectorySchema) -> Self {
        Self {
            query: String::new(),
            predicates: schema
                .dimension_names()
                .map(|name| (name.to_string(), String::new()))
                .collect(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn predicates(&self) -> &BTreeMap<String, String> {
        &self.predicates
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Selected value of a dimension, `None` when unset or unknown
    pub fn selected(&self, dimension: &str) -> Option<&str> {
        self.predicates
            .get(dimension)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Select `value`; selecting the current value again clears the dimension
    pub fn toggle(&mut self, dimension: &str, value: &str) -> ClientResult<()> {
        let slot = self.slot(dimension)?;
        if slot == value {
            slot.clear();
        } else {
            *slot = value.to_string();
        }
        Ok(())
    }

    /// Select `value` unconditionally (no toggle)
    pub fn select(&mut self, dimension: &str, value: &str) -> ClientResult<()> {
        *self.slot(dimension)? = value.to_string();
        Ok(())
    }

    pub fn clear(&mut self, dimension: &str) -> ClientResult<()> {
        self.slot(dimension)?.clear();
        Ok(())
    }

    /// Reset the query and every dimension
    pub fn clear_all(&mut self) {
        self.query.clear();
        for value in self.predicates.values_mut() {
            value.clear();
        }
    }

    /// True when the query or any predicate restricts the list
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.predicates.values().any(|v| !v.is_empty())
    }

    fn slot(&mut self, dimension: &str) -> ClientResult<&mut String> {
        self.predicates
            .get_mut(dimension)
            .ok_or_else(|| ClientError::UnknownDimension {
                dimension: dimension.to_string(),
            })
    }
}
