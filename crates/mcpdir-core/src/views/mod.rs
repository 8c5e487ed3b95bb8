//! View controllers for the three directory pages.
//!
//! Each controller is a small state machine (`Loading → Ready`, plus
//! `NotFound` for the detail page) driven by catalog reads. Rendering is
//! left to the front end, which reads the state through `state()`.
//!
//! Queries whose result could be overtaken by a newer one (directory
//! filter changes, detail id changes) carry a generation token; a response
//! is applied only if its token is still the latest issued.

mod detail;
mod directory;
mod home;

pub use detail::DetailView;
pub use directory::DirectoryView;
pub use home::{CategoryTile, HomeData, HomeView};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Observable state of a view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    /// Terminal for the current navigation (detail view only).
    NotFound,
}

impl<T> ViewState<T> {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Monotonic token source used to discard superseded responses.
#[derive(Debug, Default)]
pub(crate) struct QueryGeneration(AtomicU64);

impl QueryGeneration {
    /// Issue a new token; every earlier token becomes stale.
    pub(crate) fn issue(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub(crate) fn is_latest(&self, token: u64) -> bool {
        self.0.load(Ordering::SeqCst) == token
    }
}

/// Lock a view mutex. State is plain data, so a poisoned lock is still
/// usable.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_latest() {
        let generation = QueryGeneration::default();
        let first = generation.issue();
        assert!(generation.is_latest(first));
        let second = generation.issue();
        assert!(!generation.is_latest(first));
        assert!(generation.is_latest(second));
    }

    #[test]
    fn test_view_state_accessors() {
        let state: ViewState<u8> = ViewState::Loading;
        assert!(state.is_loading());
        assert!(state.ready().is_none());
        assert_eq!(ViewState::Ready(3).ready(), Some(&3));
    }
}
