//! The validated filter map attached to every resource request.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::Error;

use super::common::{FilterKey, SortDirection};

/// Filters applied to resource queries, keyed by [`FilterKey`].
///
/// Backed by a `BTreeMap`, so iteration (and therefore the generated endpoint)
/// always follows key order regardless of insertion order. Setting a key that
/// is already present overwrites its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFilters {
    entries: BTreeMap<FilterKey, String>,
}

impl QueryFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter by its wire name.
    ///
    /// Fails with [`Error::InvalidFilter`] for names outside the accepted set,
    /// leaving the existing filters untouched.
    pub fn add_filter(&mut self, name: &str, value: &str) -> Result<(), Error> {
        let key = name.parse::<FilterKey>().map_err(|e| {
            tracing::error!("Rejected query filter: {}", name);
            e
        })?;
        self.insert(key, value.to_string());
        Ok(())
    }

    /// Sets `key` to `value`, returning the previous value if there was one.
    pub fn insert(&mut self, key: FilterKey, value: String) -> Option<String> {
        self.entries.insert(key, value)
    }

    pub fn remove(&mut self, key: FilterKey) -> Option<String> {
        self.entries.remove(&key)
    }

    pub fn get(&self, key: FilterKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over the filters in endpoint order.
    pub fn iter(&self) -> impl Iterator<Item = (FilterKey, &str)> {
        self.entries.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn with_filter(mut self, key: FilterKey, value: &str) -> Self {
        self.insert(key, value.to_string());
        self
    }

    /// Caps the number of rows returned.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.insert(FilterKey::Limit, limit.to_string());
        self
    }

    /// Only rows on or after `date` (formatted `YYYY-MM-DD`).
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.insert(FilterKey::StartDate, date.format("%Y-%m-%d").to_string());
        self
    }

    /// Only rows on or before `date` (formatted `YYYY-MM-DD`).
    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.insert(FilterKey::EndDate, date.format("%Y-%m-%d").to_string());
        self
    }

    pub fn with_order(mut self, direction: SortDirection) -> Self {
        self.insert(FilterKey::Order, direction.to_string());
        self
    }

    pub fn with_date_column(mut self, column: &str) -> Self {
        self.insert(FilterKey::DateColumn, column.to_string());
        self
    }
}
