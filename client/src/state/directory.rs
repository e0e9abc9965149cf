//! Fetch state for the list pages (users, learners, packages).
//!
//! DESIGN
//! ======
//! The list pages all follow the same fetch-and-retry cycle, so they share
//! one state shape instead of each tracking its own flags.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use crate::net::error::ApiError;

pub const LOAD_FAILED_FALLBACK: &str = "Could not load data. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for DirectoryState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: false, error: None }
    }
}

impl<T> DirectoryState<T> {
    /// Mark a fetch in flight. Existing items stay visible until replaced.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish(&mut self, result: Result<Vec<T>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                leptos::logging::warn!("list fetch failed: {e}");
                self.error = Some(e.user_message(LOAD_FAILED_FALLBACK).to_owned());
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }
}
