//! Synchronized quote store with monotonic id assignment.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::error::StoreError;
use crate::quote::Quote;
use crate::seed::SEED_QUOTES;

/// Mutable store state guarded by the outer lock.
#[derive(Debug, Default)]
struct StoreState {
    /// Map of id to quote; iteration yields ascending id order
    quotes: BTreeMap<u64, Quote>,
    /// Next id to assign; strictly greater than every id issued since reset
    next_id: u64,
}

/// In-memory quote collection shared across requests.
///
/// Mutations (`reset`, `add`, `delete`) take the write lock; reads
/// (`list`, `get`) take the read lock, so readers never observe a
/// partially-applied mutation. No lock is held across an await point.
#[derive(Debug)]
pub struct QuoteStore {
    state: RwLock<StoreState>,
}

impl QuoteStore {
    /// Creates an empty store with `next_id = 1`.
    ///
    /// Call [`reset`](Self::reset) to populate the built-in seed set.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                quotes: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Clears all quotes and restores the built-in seed set.
    ///
    /// Seed quotes receive ids `1..=N` in array order and `next_id` is
    /// set to `N + 1`.
    pub fn reset(&self) -> Result<(), StoreError> {
        let mut state = self.state.write().map_err(|_| StoreError::LockPoisoned)?;
        state.quotes.clear();
        for (i, text) in SEED_QUOTES.iter().enumerate() {
            let id = (i + 1) as u64;
            state.quotes.insert(
                id,
                Quote {
                    id,
                    text: (*text).to_string(),
                },
            );
        }
        state.next_id = SEED_QUOTES.len() as u64 + 1;
        tracing::debug!("Store reset to seed set of {} quotes", SEED_QUOTES.len());
        Ok(())
    }

    /// Returns all quotes in ascending id order.
    pub fn list(&self) -> Result<Vec<Quote>, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(state.quotes.values().cloned().collect())
    }

    /// Returns the quote with the given id.
    ///
    /// Fails with [`StoreError::QuoteNotFound`] for unknown ids,
    /// including ids of previously deleted quotes.
    pub fn get(&self, id: u64) -> Result<Quote, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::LockPoisoned)?;
        state
            .quotes
            .get(&id)
            .cloned()
            .ok_or(StoreError::QuoteNotFound { id })
    }

    /// Stores a new quote under a freshly assigned id and returns it.
    ///
    /// Ids grow monotonically and are never reused within a store
    /// lifetime, even after deletion. Empty text is rejected before any
    /// state changes.
    pub fn add(&self, text: &str) -> Result<Quote, StoreError> {
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }
        let mut state = self.state.write().map_err(|_| StoreError::LockPoisoned)?;
        let id = state.next_id;
        state.next_id += 1;
        let quote = Quote {
            id,
            text: text.to_string(),
        };
        state.quotes.insert(id, quote.clone());
        tracing::debug!("Added quote {}", id);
        Ok(quote)
    }

    /// Removes the quote with the given id.
    ///
    /// The id is not reused afterwards; `next_id` is unaffected.
    pub fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut state = self.state.write().map_err(|_| StoreError::LockPoisoned)?;
        state
            .quotes
            .remove(&id)
            .ok_or(StoreError::QuoteNotFound { id })?;
        tracing::debug!("Deleted quote {}", id);
        Ok(())
    }

    /// Returns the number of stored quotes.
    pub fn quote_count(&self) -> Result<usize, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(state.quotes.len())
    }

    /// Returns the id that will be assigned to the next added quote.
    pub fn current_next_id(&self) -> Result<u64, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(state.next_id)
    }
}

impl Default for QuoteStore {
    fn default() -> Self {
        Self::new()
    }
}
