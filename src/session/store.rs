//! Session store: user id to grid, created lazily.
//!
//! The only shared mutable state in the crate. Each entry is reached through
//! `with_grid`, which holds the map's per-entry exclusive guard for the
//! duration of the closure, so mutations for one user are serialized while
//! distinct users proceed in parallel.

use dashmap::DashMap;
use log::debug;

use crate::types::UserId;

use crate::core::Grid;

/// Lazily populated map of per-user grids.
#[derive(Debug, Default)]
pub struct SessionStore {
    grids: DashMap<UserId, Grid>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            grids: DashMap::new(),
        }
    }

    /// Run `f` with exclusive access to the user's grid, creating the grid
    /// at the default size on first use.
    pub fn with_grid<R>(&self, user_id: UserId, f: impl FnOnce(&mut Grid) -> R) -> R {
        let mut entry = self.grids.entry(user_id).or_insert_with(|| {
            debug!("creating grid for user {user_id}");
            Grid::new()
        });
        f(entry.value_mut())
    }

    /// Reset the user's grid to its initial state.
    ///
    /// Idempotent: on a fresh session this creates a grid that is already in
    /// the reset state.
    pub fn reset(&self, user_id: UserId) {
        self.with_grid(user_id, |grid| grid.reset());
        debug!("reset grid for user {user_id}");
    }

    /// Drop the user's session entirely. Returns whether one existed.
    pub fn remove(&self, user_id: UserId) -> bool {
        self.grids.remove(&user_id).is_some()
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}
